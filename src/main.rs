use clap::Parser;
use gridwalk::core::config::{self, CliOverrides};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "gridwalk", about = "Walk a marker around a 3x3 grid and submit where it ends up")]
struct Args {
    /// Result endpoint to POST the final position to
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Log level for gridwalk.log (off, error, warn, info, debug, trace)
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config();
    let cli = CliOverrides {
        endpoint: args.endpoint,
        log_level: args.log_level,
    };
    let config = config::resolve(file_config.as_ref().unwrap_or(&Default::default()), &cli);

    // File logger: the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    if let Err(e) = &file_config {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("Gridwalk starting up, results go to {}", config.endpoint);

    gridwalk::tui::run(config)
}
