use clap::Parser;
use get_cisa_vuln::cli::{run_cli, Cli};
use tracing::error;
use tracing_subscriber::fmt;

fn main() {
    let cli = Cli::parse();

    // Level-prefixed lines on stderr; info only with --verbose
    fmt()
        .with_max_level(cli.log_level())
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    if let Err(e) = run_cli(cli) {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}
