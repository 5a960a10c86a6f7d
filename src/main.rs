use anyhow::Result;
use watch2gether::config::Config;
use watch2gether::logger::{self, Logger};
use watch2gether::{ui, Watchlist};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Config errors are reported before the terminal switches to raw mode
    let config = Config::load()?;

    let logger = Logger::new();
    logger::init(&logger, &config.logging)?;

    let watchlist = Watchlist::open(&config.storage);

    // Run the TUI application
    ui::run_app(&config, watchlist, logger).await?;

    Ok(())
}
