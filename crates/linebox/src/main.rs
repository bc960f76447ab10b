mod app;
mod command;
mod config;
mod dispatch;
mod geometry;
mod transform;

use linebox_engine::device::GpuInit;
use linebox_engine::logging::{init_logging, LoggingConfig};
use linebox_engine::window::Runtime;

use crate::app::LineboxApp;
use crate::config::Speeds;

fn main() {
    init_logging(LoggingConfig::default());

    let app = LineboxApp::new(Speeds::default());

    if let Err(e) = Runtime::run(config::runtime_config(), GpuInit::default(), app) {
        log::error!("fatal: {e:#}");
        std::process::exit(-1);
    }
}
