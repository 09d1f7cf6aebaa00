// When compiling natively:
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    correlation_explorer::log::init_native_log();

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(900.0, 700.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Correlation Explorer",
        native_options,
        Box::new(|cc| Box::new(correlation_explorer::CorrelationApp::new(cc))),
    );
}

// When compiling to web:
#[cfg(target_arch = "wasm32")]
fn main() {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let web_options = eframe::WebOptions::default();
    eframe::start_web(
        "the_canvas_id",
        web_options,
        Box::new(|cc| Box::new(correlation_explorer::CorrelationApp::new(cc))),
    )
    .expect("failed to start eframe");
}
