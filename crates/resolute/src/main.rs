use clap::Parser;
use resolute::{json, prover, ProverConfig};
use std::path::PathBuf;
use std::process::ExitCode;

/// Autonomous theorem prover for first-order predicate logic.
///
/// Reads a JSON problem file with a knowledge base and already-negated
/// theorem clauses, and attempts a proof by resolution refutation.
///
/// Set the environment variable "LOG" to "info" or "debug" to obtain an
/// increasingly detailed log.
#[derive(Parser)]
#[command(version)]
struct Cli {
    /// File name to parse and create the problem base
    #[arg(short = 'f', long = "file")]
    file: PathBuf,
}

fn main() -> ExitCode {
    use env_logger::Env;
    // log warnings and errors by default, do not print timestamps
    env_logger::Builder::from_env(Env::default().filter_or("LOG", "warn"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> resolute::Result<()> {
    let problem = json::read_problem(&cli.file)?;
    let report = prover::prove(
        &problem.knowledge_base,
        &problem.negated_theorem_predicates,
        &ProverConfig::default(),
    )?;
    print!("{}", report);
    Ok(())
}
