use clap::Parser;
use tracing::level_filters::LevelFilter;

use wordtally::cli::Cli;
use wordtally::commands::run_report;

fn init_tracing(level: LevelFilter) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let exit_code = run_report(&cli);

    std::process::exit(exit_code);
}
