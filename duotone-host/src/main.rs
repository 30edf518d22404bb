//! Duotone - Two-tone Watch Face
//!
//! Host binary: loads `face.toml` (or the path given as the first argument),
//! creates the face and plays back the configured script until the face is
//! destroyed.

use std::path::PathBuf;

use duotone_core::time::UtcOffset;
use duotone_host::channels::{ENVIRONMENT, FACE_STOPPED};
use duotone_host::clock::HostClock;
use duotone_host::config::{HostConfig, DEFAULT_CONFIG_PATH};
use duotone_host::tasks;
use embassy_executor::Spawner;
use log::{error, info};
use static_cell::StaticCell;

// Configuration must live forever for task references
static CONFIG: StaticCell<HostConfig> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Duotone host starting...");

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = match HostConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };
    let config: &'static HostConfig = CONFIG.init(config);

    ENVIRONMENT.set_zone(UtcOffset::from_minutes(config.host.utc_offset_minutes));
    let clock = HostClock::from_settings(config.host.start_epoch_ms);
    info!(
        "Viewport {}x{} ({:?}), zone {} min",
        config.host.width, config.host.height, config.host.shape, config.host.utc_offset_minutes
    );

    spawner.spawn(tasks::message_timer_task()).unwrap();
    spawner.spawn(tasks::time_tick_task(clock)).unwrap();
    spawner.spawn(tasks::face_task(config, clock)).unwrap();
    spawner.spawn(tasks::script_task(config)).unwrap();

    info!("All tasks spawned");

    FACE_STOPPED.wait().await;
    info!("Duotone host stopped");
    std::process::exit(0);
}
