use clap::Parser;
use outfit_cli::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Command-line level wins, then RUST_LOG, then warnings only.
    let filter = match cli.log_filter() {
        Some(level) => EnvFilter::new(format!(
            "outfit={level},outfit_merge={level},outfit_cli={level}",
            level = level
        )),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let stdout = std::io::stdout();
    outfit_cli::run(&cli, &mut stdout.lock())
}
