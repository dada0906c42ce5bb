use colored::Colorize;
use log::{Level, LevelFilter};
use std::time::SystemTime;

fn colored_level(level: Level) -> String {
    match level {
        Level::Error => "ERROR".red().bold().to_string(),
        Level::Warn => "WARN".yellow().to_string(),
        Level::Info => "INFO".green().to_string(),
        Level::Debug => "DEBUG".blue().to_string(),
        Level::Trace => "TRACE".dimmed().to_string(),
    }
}

pub fn setup_logger(level: LevelFilter) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                humantime::format_rfc3339_seconds(SystemTime::now()),
                colored_level(record.level()),
                record.target(),
                message
            ))
        })
        .level(level)
        // reqwest/hyper are noisy at debug
        .level_for("hyper", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Warn)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}
