use clap::Parser;

use fantasy_cricket::cli::{execute, Cli};
use fantasy_cricket::config::settings::get_config;
use fantasy_cricket::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match get_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to read the config: {}", e);
            std::process::exit(1);
        }
    };

    // Logs go to stderr so command output stays clean on stdout
    let subscriber = get_subscriber(
        "fantasy".into(),
        config.application.log_level.clone(),
        std::io::stderr
    );
    init_subscriber(subscriber);

    if let Err(e) = execute(cli, config).await {
        tracing::error!("❌ {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
