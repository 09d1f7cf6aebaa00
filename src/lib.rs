mod about_module;
mod app;
pub mod coefficient;
mod explorer_module;
pub mod generator;
pub mod lin_reg;
#[cfg(not(target_arch = "wasm32"))]
pub mod log;
pub mod scene;
pub use app::CorrelationApp;

/// Points drawn per regeneration.
pub const SAMPLE_SIZE: usize = 50;
/// Both axes are shown in percent.
pub const DISPLAY_MIN: f64 = 0.0;
pub const DISPLAY_MAX: f64 = 100.0;
pub const DEFAULT_COEFFICIENT: f64 = 0.5;
