/// Pretty stdout logging for the native build, `log` records included.
pub fn init_native_log() {
    use tracing_subscriber::{filter::LevelFilter, prelude::*};

    let stdout_log = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .pretty()
        .with_filter(LevelFilter::INFO);

    tracing_subscriber::registry().with(stdout_log).init();
}
