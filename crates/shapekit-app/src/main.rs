//! Main application entry point.
//!
//! Usage: `shapekit-gallery [config.json]`

use shapekit_app::{App, AppError};

fn run() -> Result<(), AppError> {
    let app = App::from_config_path(std::env::args().nth(1))?;
    log::info!("Starting shapekit gallery");
    pollster::block_on(app.run())
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        std::process::exit(1);
    }
}
