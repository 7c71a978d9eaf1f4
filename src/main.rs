use clap::Parser;
use geonotes::cli::{handle_examples, handle_interactive, Cli, Commands};
use geonotes::Config;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let result = Config::load(cli.config.as_deref()).and_then(|config| {
        init_tracing(&config);
        match cli.command.unwrap_or(Commands::Interactive) {
            Commands::Interactive => handle_interactive(&config),
            Commands::Examples { format } => handle_examples(format),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
