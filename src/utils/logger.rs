use once_cell::sync::OnceCell;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static GLOBAL_LOGGER: OnceCell<Logger> = OnceCell::new();

/// Named log-sink capability. Cheap to clone; components take one through
/// their constructors instead of reaching for process-wide state.
#[derive(Clone, Debug)]
pub struct Logger {
    name: Arc<str>,
}

impl Logger {
    pub fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
        }
    }

    /// Process-wide default instance for callers that want the old global
    /// convenience. The name is taken from the first call; every later call
    /// returns the same logger regardless of arguments.
    pub fn global(name: &str) -> Logger {
        GLOBAL_LOGGER.get_or_init(|| Logger::new(name)).clone()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes one line attributed to this logger's name.
    pub fn log(&self, text: &str) {
        tracing::info!(logger = %self.name, "{text}");
    }
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("learnhub=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("learnhub=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
