//! Replay entry point.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use widgetdeck_app::{load_script, replay, ReplayError};
use widgetdeck_core::{Dashboard, DashboardConfig, FileStore};

/// Environment variable naming an optional JSON config file.
const CONFIG_ENV: &str = "WIDGETDECK_CONFIG";

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        log::error!("{}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), ReplayError> {
    let script_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .ok_or(ReplayError::Usage)?;

    let config = match std::env::var_os(CONFIG_ENV) {
        Some(path) => DashboardConfig::from_json_file(Path::new(&path))?,
        None => DashboardConfig::default(),
    };
    let store = match &config.storage_dir {
        Some(dir) => FileStore::new(dir.clone())?,
        None => FileStore::default_location()?,
    };
    log::info!("Storing layouts in {}", store.base_path().display());

    let actions = load_script(&script_path)?;
    let mut dashboard = Dashboard::mount(config, Arc::new(store));
    let summary = replay(&mut dashboard, &actions);

    for row in dashboard.rows() {
        println!("{:>3}  {:<32} {}", row.entry.index(), row.entry.id(), row.entry.content().kind);
    }
    println!(
        "{} layout changes, {} widgets added, {} catalog items available",
        summary.requests.len(),
        summary.added.len(),
        dashboard.available_widgets().len()
    );

    dashboard.unmount();
    Ok(())
}
