use pheasant::{EngineBuilder, EngineError};

fn main() {
    env_logger::init();
    log::info!("Pheasant starting up");

    if let Err(e) = run() {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), EngineError> {
    EngineBuilder::new().build()?.run()
}
