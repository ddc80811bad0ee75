#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    use tintquad_demo::{DemoApp, DemoConfig};
    use tintquad_engine::device::GpuInit;
    use tintquad_engine::logging::{init_logging, LoggingConfig};
    use tintquad_engine::window::{Runtime, RuntimeConfig};
    use winit::dpi::LogicalSize;

    init_logging(LoggingConfig::default());

    let config = DemoConfig::default();
    let (width, height) = config.window_size();

    let runtime = RuntimeConfig {
        title: config.title.clone(),
        initial_size: LogicalSize::new(width, height),
        resizable: false,
    };

    Runtime::run(runtime, GpuInit::default(), DemoApp::new(config))
}

// The browser build starts from `#[wasm_bindgen(start)]` in the library.
#[cfg(target_arch = "wasm32")]
fn main() {}
