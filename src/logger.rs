use anyhow::Result;
use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Logs go to stderr at `warn`, overridable through `RUST_LOG`.
pub fn init() -> Result<()> {
    SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .env()
        .init()?;

    Ok(())
}
