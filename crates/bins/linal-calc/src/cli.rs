use log::LevelFilter;
use std::time::{Duration, SystemTime};

/// Options accepted before any command.
#[derive(clap::Args, Debug, Clone)]
pub struct CommonArgs {
    /// Verbosity of the log.
    #[clap(
        short,
        long,
        help = "Log verbosity, each level includes the ones above it\n  0 - error\n  1 - \
                warn\n  2 - info\n  3 - debug\n  4 - trace\n\x08",
        default_value_t = 1
    )]
    pub log_level: u8,

    /// Prefix every log line with the time elapsed since the launch.
    #[clap(long, help = "Prefix log messages with the time elapsed since launch")]
    pub log_timestamp: bool,
}

/// Parses the command line into `T` and records the launch time.
pub fn parse_args<T: clap::Parser>() -> (T, SystemTime) {
    let args = T::parse();
    (args, SystemTime::now())
}

/// Line logged once the logger is installed.
pub fn launch_message(name: &str, launched: SystemTime) -> String {
    format!(
        "{} started at {} ({})",
        name,
        chrono::DateTime::<chrono::Utc>::from(launched).format("%Y-%m-%d %H:%M:%S%.3f UTC"),
        std::env::consts::OS
    )
}

/// Formats `elapsed` as `h:mm:ss.mmm`.
pub fn elapsed_stamp(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!(
        "{}:{:02}:{:02}.{:03}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60,
        elapsed.subsec_millis()
    )
}

/// Installs the global logger.
///
/// When `launched` is given, every line starts with the time elapsed since
/// then.
pub fn setup_logging(launched: Option<SystemTime>, log_level: u8) {
    use std::io::Write;

    env_logger::builder()
        .format(move |buf, record| {
            let module = record
                .module_path()
                .and_then(|path| path.split("::").next())
                .unwrap_or("?");
            if let Some(launched) = launched {
                write!(buf, "{} ", elapsed_stamp(launched.elapsed().unwrap_or_default()))?;
            }
            writeln!(buf, "{:5} [{}]: {}", record.level(), module, record.args())
        })
        .filter_level(log_filter_from_level(log_level))
        .init();
}

/// Maps the `--log-level` value to a filter; anything above 4 is `Trace`.
pub fn log_filter_from_level(level: u8) -> LevelFilter {
    match level {
        0 => LevelFilter::Error,
        1 => LevelFilter::Warn,
        2 => LevelFilter::Info,
        3 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
