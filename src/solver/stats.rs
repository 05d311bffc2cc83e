use prettytable::{Cell, Row, Table};

use crate::solver::trace::SearchStats;

/// Renders the aggregate search counters as a bordered table.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Nodes Visited"),
        Cell::new("Rejections"),
        Cell::new("Backtracks"),
    ]));
    table.add_row(Row::new(vec![
        Cell::new(&stats.nodes_visited.to_string()),
        Cell::new(&stats.rejections.to_string()),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.to_string()
}
