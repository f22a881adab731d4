use std::fs::File;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};

use agenda::tui;

#[derive(Parser)]
#[command(name = "agenda", about = "Terminal task organizer shell")]
struct Args {
    /// Verbosity of the file log written to agenda.log
    #[arg(long, default_value_t, value_enum)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // File logger - the terminal itself is busy being the UI.
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("agenda.log") {
        let _ = WriteLogger::init(args.log_level.into(), log_config, log_file);
    }
    log::info!("agenda starting up");

    let result = tui::run();
    if let Err(ref error) = result {
        log::error!("fatal terminal error: {error}");
    }
    result
}
