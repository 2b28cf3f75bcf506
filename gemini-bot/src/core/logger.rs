//! Process-wide tracing setup for the bot.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "info";

/// Wall-clock timestamp in the machine's zone, e.g. `2024-05-01 12:00:00`.
struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S"))
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => fs::create_dir_all(dir)?,
        _ => {}
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber: every event goes to stdout and is appended to `log_file`.
///
/// Call once, after `.env` is loaded so `RUST_LOG` is visible. A second call fails.
pub fn init_tracing(log_file: impl AsRef<Path>) -> anyhow::Result<()> {
    let file = Arc::new(open_append(log_file.as_ref())?);

    tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_writer(io::stdout.and(file))
        .with_timer(LocalTimestamp)
        .with_target(true)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already installed: {}", e))
}
