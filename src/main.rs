use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

/// Generate the envelope PNG icons into ./assets
#[derive(Parser, Debug)]
#[command(name = "mailicons", version, about)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    mailicons::generate_all(mailicons::OUTPUT_DIR)
        .with_context(|| format!("failed to generate icons in {}", mailicons::OUTPUT_DIR))?;
    Ok(())
}
