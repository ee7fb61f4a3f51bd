use clap::Parser;
use ticker_merge::cli::{Cli, Commands, MergeArgs};
use ticker_merge::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration. A missing file is the common case and falls back
    // silently; a file that exists but does not parse gets a warning.
    let config = match Config::load(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            if std::path::Path::new(&cli.config).exists() {
                eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
                eprintln!("Using default configuration");
            }
            toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
        }
    };

    // Initialize telemetry
    ticker_merge::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Some(Commands::Merge(args)) => args.execute(&config)?,
        Some(Commands::Inspect(args)) => args.execute()?,
        Some(Commands::Config) => {
            println!("Current configuration:");
            println!("  Input files:");
            for file in &config.input.files {
                println!("    {}", file.display());
            }
            println!("  Output: {}", config.output.path.display());
            println!("  Preview rows: {}", config.output.preview_rows);
            println!("  Log level: {}", config.telemetry.log_level);
        }
        None => MergeArgs::default().execute(&config)?,
    }

    Ok(())
}
