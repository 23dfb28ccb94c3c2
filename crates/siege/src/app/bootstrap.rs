use engine::{LoopConfig, Scene};
use tracing::info;
use tracing_subscriber::EnvFilter;

use super::gameplay;

const USAGE: &str = "click a unit icon to deploy it; B/A deploy from the keyboard, \
C kills every archer, D damages the probe unit";

pub(crate) struct AppWiring {
    pub(crate) config: LoopConfig,
    pub(crate) scene: Box<dyn Scene>,
}

pub(crate) fn build_app() -> Result<AppWiring, String> {
    init_tracing();
    info!("=== Siege Startup ===");
    info!(usage = USAGE, "usage");

    let paths = engine::resolve_app_paths().map_err(|error| error.to_string())?;
    info!(
        root = %paths.root.display(),
        assets_dir = %paths.assets_dir.display(),
        "startup"
    );

    let assets = gameplay::SiegeAssets::load(&paths.assets_dir).map_err(|error| error.to_string())?;
    let scene = gameplay::build_scene(assets)?;
    let config = LoopConfig::default();

    Ok(AppWiring {
        config,
        scene: Box::new(scene),
    })
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_names(true)
        .compact()
        .init();
}
