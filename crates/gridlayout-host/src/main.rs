//! `gridlayout` headless runner.
//!
//! Loads a grid description, builds the grid on a [`RecordingSurface`] and
//! prints what a renderer would receive.
//!
//! # Usage
//!
//! ```text
//! gridlayout [CONFIG]
//! ```
//!
//! Without an argument the platform default config file is used; a missing
//! file yields the default empty 4×4 grid.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ load_config()          -- TOML → GridConfig
//!  └─ init logging           -- level from config, overridden by RUST_LOG
//!  └─ build_grid()           -- GridConfig → GridModel<RecordingSurface>
//!  └─ print occupancy map, container CSS and per-item CSS
//! ```

use std::path::PathBuf;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gridlayout_host::application::build_grid::build_grid;
use gridlayout_host::infrastructure::storage::config::{default_config_path, load_config};
use gridlayout_host::infrastructure::surface::RecordingSurface;

fn main() -> anyhow::Result<()> {
    let path = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => default_config_path().context("no config path given")?,
    };
    let config = load_config(&path)
        .with_context(|| format!("failed to load config from {}", path.display()))?;

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("building grid from {}", path.display());
    let built = build_grid(&config, RecordingSurface::new()).context("failed to build grid")?;

    println!("{}", built.occupancy_map());
    println!("container {{ {} }}", built.grid.surface().container_css());
    for item in built.grid.items() {
        let name = built.name(item).unwrap_or("?");
        let style = built.grid.surface().style_properties(item).unwrap_or_default();
        let alignment = built.grid.component_alignment(item)?;
        println!("{name} {{ {style} }} /* {alignment} */");
    }

    info!("done");
    Ok(())
}
