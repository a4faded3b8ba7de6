#![deny(clippy::all)]
#![deny(clippy::pedantic)]
// use log crate
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]

use std::{env, path::Path, process, time::Instant};

use pumpkin::{Server, ServerError, init_log};
use pumpkin_config::{AdvancedConfiguration, BasicConfiguration, LoadConfiguration, LoggingConfig};

const CARGO_PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    let time = Instant::now();

    let exec_dir = env::current_dir().expect("Unable to get the working directory");
    let advanced_config = match AdvancedConfiguration::load(&exec_dir) {
        Ok(config) => config,
        Err(err) => {
            init_log(&LoggingConfig::default()).expect("Unable to initialize the logger");
            log::error!("{err}");
            process::exit(1);
        }
    };
    init_log(&advanced_config.logging).expect("Unable to initialize the logger");

    log::info!("Starting Pumpkin {CARGO_PKG_VERSION}");

    let server = match start(&exec_dir, &advanced_config) {
        Ok(server) => server,
        Err(err) => {
            log::error!("Failed to start the server: {err}");
            process::exit(1);
        }
    };

    log::info!(
        "Creative menu holds {} items",
        server.creative_inventory.lock().len()
    );
    log::info!("Started Server took {}ms", time.elapsed().as_millis());
}

fn start(exec_dir: &Path, advanced_config: &AdvancedConfiguration) -> Result<Server, ServerError> {
    let basic_config = BasicConfiguration::load(exec_dir)?;
    let server = Server::new(exec_dir, &basic_config, advanced_config)?;

    // Warm the creative menu so the first joining player does not pay for it.
    let player = server.add_player("console");
    if let Err(err) = server.creative_inventory_packet(&player) {
        log::warn!("Couldn't encode the creative menu: {err}");
    }

    Ok(server)
}
