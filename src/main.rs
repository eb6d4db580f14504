use clap::Parser;
use counter_app::cli::Cli;
use counter_app::logging::init_tracing;
use counter_app::ui::runtime;

fn main() {
    let cli = Cli::parse();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    if let Err(err) = init_tracing(&config.logging) {
        eprintln!("Warning: logging disabled: {err:#}");
    }

    if let Err(err) = runtime::run(config) {
        tracing::error!(error = %err, "counter-app failed");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
