use clap::Parser;
use marquee::core::config;
use marquee::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "marquee", about = "Terminal movie-catalog browser")]
struct Args {
    /// Start with a search term instead of the latest-movies listing
    #[arg(short, long)]
    query: Option<String>,

    /// Filter the discover listing by primary release year
    #[arg(short, long)]
    year: Option<i32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to marquee.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("marquee.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Marquee starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {}", e);
            config::MarqueeConfig::default()
        }
    };
    let resolved = config::resolve(&file_config);

    tui::run(resolved, args.query, args.year)
}
