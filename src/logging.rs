use std::path::Path;

use chrono::Utc;
use tracing::{Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{self, FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE_PREFIX: &str = "tgrelay.log";
const LOG_RETENTION_FILES: usize = 30;
const DEFAULT_LOG_FILTER: &str = "tgrelay=info,tgrelay_monitor=info,tgrelay_forward=info";

/// Timer rendering the bot's fixed local timezone, without fractional
/// seconds.
#[derive(Debug, Clone, Copy)]
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", tgrelay_common::time::format_local(Utc::now()))
    }
}

/// `timestamp - target - level - message` lines, same shape on both sinks.
struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        LocalTimer.format_time(&mut writer)?;

        let meta = event.metadata();
        write!(writer, " - {} - {} - ", meta.target(), meta.level())?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Initialize console plus daily-rotated file logging.
///
/// Keep the returned guard alive for the process lifetime, otherwise
/// buffered file output is lost.
pub(crate) fn init(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .max_log_files(LOG_RETENTION_FILES)
        .build(log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().event_format(LineFormat))
        .with(
            fmt::layer()
                .event_format(LineFormat)
                .with_writer(non_blocking)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(guard)
}
