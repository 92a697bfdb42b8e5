mod tracer_engine;

pub use tracer_engine::{TracerEngine, TracerOptions};

/// Should be called at the start of each binary.
/// Takes the `LevelFilter` applied when `RUST_LOG` is not set, and returns
/// the `TracerEngine`, which should be kept alive for the lifetime of the program.
#[macro_export]
macro_rules! init_tracer {
    ($level:expr) => {{
        let tracer = $crate::tracer::TracerEngine::new(
            $crate::tracer::TracerOptions { level: $level },
            env!("CARGO_BIN_NAME"),
        );
        // Emitted here rather than in `TracerEngine::new` so the warning
        // is attributed to the calling module.
        if let Some(e) = tracer.get_setup_error() {
            ::tracing::warn!("{e}");
        } else {
            ::tracing::debug!(service = tracer.service_name(), "Tracer initialised");
        }
        tracer
    }};
}
