use crate::config::LogConfig;
use crate::utils::error::Result;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;
use tracing::{Dispatch, Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{ChronoLocal, FormatTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Layer, Registry};

/// `2024-05-01 13:45:12,345`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Renders every event as `<timestamp> - <LEVEL> - <message>`.
#[derive(Debug, Clone)]
pub struct RecordFormat {
    timer: ChronoLocal,
}

impl Default for RecordFormat {
    fn default() -> Self {
        Self {
            timer: ChronoLocal::new(TIMESTAMP_FORMAT.to_string()),
        }
    }
}

impl<S, N> FormatEvent<S, N> for RecordFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        self.timer.format_time(&mut writer)?;
        write!(writer, " - {} - ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Logging sinks owned by one calculator instance.
///
/// Nothing is installed as the global default: records only reach the sinks
/// while running inside [`LogContext::in_scope`].
pub struct LogContext {
    dispatch: Dispatch,
    config: LogConfig,
}

impl LogContext {
    pub fn new(config: &LogConfig) -> Result<Self> {
        let mut layers: Vec<BoxedLayer> = Vec::new();

        if config.has_console() {
            layers.push(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(std::io::stdout)
                    .event_format(RecordFormat::default())
                    .boxed(),
            );
        }

        for path in config.file_paths() {
            // Appends from several threads go through the mutex one line at a time.
            let file = Mutex::new(open_append(path)?);
            layers.push(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(file)
                    .event_format(RecordFormat::default())
                    .boxed(),
            );
        }

        let filter = EnvFilter::new(config.min_level.as_directive());
        let subscriber = tracing_subscriber::registry().with(layers).with(filter);

        Ok(Self {
            dispatch: Dispatch::new(subscriber),
            config: config.clone(),
        })
    }

    /// A context with no sinks.
    pub fn silent() -> Self {
        Self {
            dispatch: Dispatch::none(),
            config: LogConfig::silent(),
        }
    }

    /// Runs `f` with this context as the thread's default subscriber.
    pub fn in_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::dispatcher::with_default(&self.dispatch, f)
    }

    pub fn config(&self) -> &LogConfig {
        &self.config
    }
}

impl fmt::Debug for LogContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogContext")
            .field("config", &self.config)
            .finish()
    }
}

fn open_append(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(OpenOptions::new().create(true).append(true).open(path)?)
}
