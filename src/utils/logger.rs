use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt};

pub struct LoggerUtils {}

impl LoggerUtils {
    pub fn init() {
        fmt()
            .with_env_filter(
                EnvFilter::builder()
                    .with_default_directive(LevelFilter::WARN.into()) // Default level if not set
                    .from_env_lossy(), // Enables RUST_LOG=debug or crate=trace
            )
            .with_writer(std::io::stderr) // Keep stdout for the list of generated files
            .with_target(false)
            .with_level(true)
            .compact()
            .init();
    }
}
