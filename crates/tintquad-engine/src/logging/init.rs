use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "tintquad_engine=debug,wgpu=warn"). In the browser only the global level
/// of `level` is honored.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub level: log::LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            level: log::LevelFilter::Info,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Call early in `main` (or in the wasm start
/// function).
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        install(config);
        log::debug!("logging initialized");
    });
}

#[cfg(not(target_arch = "wasm32"))]
fn install(config: LoggingConfig) {
    let mut builder = env_logger::Builder::new();

    if let Some(filter) = config.env_filter {
        builder.parse_filters(&filter);
    } else if let Ok(filter) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filter);
    } else {
        // wgpu is chatty at info.
        builder.filter_level(config.level);
        builder.filter_module("wgpu_core", log::LevelFilter::Warn);
        builder.filter_module("wgpu_hal", log::LevelFilter::Warn);
        builder.filter_module("naga", log::LevelFilter::Warn);
    }

    builder.write_style(env_logger::WriteStyle::Auto);
    builder.init();
}

#[cfg(target_arch = "wasm32")]
fn install(config: LoggingConfig) {
    console_error_panic_hook::set_once();

    let level = config.level.to_level().unwrap_or(log::Level::Error);
    // Fails only if another logger is already installed.
    console_log::init_with_level(level).ok();
}
