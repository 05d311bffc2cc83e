use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use vinculum::{
    loader,
    solver::{engine::Solver, stats::render_stats_table},
};

#[derive(Debug, Parser)]
#[command(
    name = "vinculum",
    about = "Solve a finite-domain binary CSP given a variable file and a constraint file."
)]
struct Args {
    /// Variable file: one `NAME: v1 v2 ... vk` line per variable.
    var_file: PathBuf,

    /// Constraint file: one `LEFT op RIGHT` line per constraint, with op
    /// one of `=`, `!`, `<`, `>`.
    con_file: PathBuf,

    /// Consistency-enforcing procedure: plain backtracking (`none`) or
    /// forward checking (`fc`).
    #[arg(value_parser = ["none", "fc"])]
    procedure: String,

    /// Print search statistics after the trace.
    #[arg(long)]
    stats: bool,

    /// Emit the trace as JSON instead of plain lines.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let model = match loader::load_model(&args.var_file, &args.con_file) {
        Ok(model) => model,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let solver = Solver::with_forward_checking(args.procedure == "fc");
    let (_, trace) = solver.solve(&model);

    if args.json {
        match serde_json::to_string_pretty(&trace) {
            Ok(rendered) => println!("{rendered}"),
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        for line in trace.lines() {
            println!("{line}");
        }
    }

    if args.stats {
        println!("{}", render_stats_table(&trace.stats));
    }

    // An unsatisfiable model is a valid outcome, not a failure.
    ExitCode::SUCCESS
}
