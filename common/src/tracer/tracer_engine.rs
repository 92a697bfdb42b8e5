use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError,
};

pub struct TracerOptions {
    /// Level used when `RUST_LOG` is not set.
    pub level: LevelFilter,
}

/// This object initialises the global tracing subscriber, given a TracerOptions struct.
/// Log output is written to stderr so that stdout remains free for sample data.
pub struct TracerEngine {
    service_name: String,
    setup_error: Option<TryInitError>,
}

impl TracerEngine {
    /// Initialises the stderr tracer for the binary.
    /// #Arguments
    /// * `options` - The caller-specified instance of TracerOptions.
    /// * `service_name` - The name of the binary, recorded on the engine.
    /// #Returns
    /// An instance of TracerEngine
    pub fn new(options: TracerOptions, service_name: &str) -> Self {
        let stderr_tracer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

        // This filter is applied to the stderr tracer
        let log_filter = EnvFilter::builder()
            .with_default_directive(options.level.into())
            .from_env_lossy();

        let setup_error = tracing_subscriber::Registry::default()
            .with(stderr_tracer.with_filter(log_filter))
            .try_init()
            .err();

        Self {
            service_name: service_name.to_owned(),
            setup_error,
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Returns the reason the subscriber could not be installed, if any.
    /// This happens when a global subscriber has already been set.
    pub fn get_setup_error(&self) -> Option<&TryInitError> {
        self.setup_error.as_ref()
    }

    pub fn is_initialised(&self) -> bool {
        self.setup_error.is_none()
    }
}
