use clap::Parser;

use opq_lint::cli::Cli;
use opq_lint::commands::run_check;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    std::process::exit(run_check(&cli));
}
