//! Gizmoball - headless sandbox host
//!
//! Loads the configured scene, runs the fixed-step simulation and renders
//! every frame onto a recording canvas.

use std::error::Error;

use gizmo_core::{Board, Scene};
use gizmoball::config::AppConfig;
use gizmoball::scene::SceneBuilder;
use gizmoball::systems::RenderSystem;
use log::{info, warn};

fn load_board(config: &AppConfig) -> Result<Board, Box<dyn Error>> {
    let scale = config.scale()?;
    let physics = config.physics_config()?;

    let board = match Scene::load(&config.scene.path) {
        Ok(scene) => {
            info!("Loaded scene '{}' from {}", scene.name, config.scene.path.display());
            scene.instantiate(scale, physics)?
        }
        Err(e) => {
            warn!(
                "Failed to load scene {}: {}. Using built-in layout.",
                config.scene.path.display(),
                e
            );
            SceneBuilder::demo(scale.grid_count()).build(scale, physics)?
        }
    };
    Ok(board)
}

fn main() -> Result<(), Box<dyn Error>> {
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();
    info!("Starting Gizmoball");
    if let Some(e) = config_error {
        warn!("Failed to load config: {}. Using defaults.", e);
    }

    let mut board = load_board(&config)?;
    let mut simulation = config.simulation_system()?;
    let mut renderer = RenderSystem::new(config.debug.log_draw_calls);

    for _ in 0..config.simulation.frames {
        simulation.update(&mut board, config.simulation.frame_time);
        renderer.render(&board)?;
    }

    info!(
        "Ran {} frame(s), {} physics step(s), {} entities on the board",
        renderer.frames_rendered(),
        simulation.total_steps(),
        board.entity_count()
    );
    if let Some((_, ball)) = board.get_by_name("ball") {
        if let Some(position) = board.physics().position(ball.body()) {
            info!("Ball at {:?} (grid units)", board.scale().to_real_point(position));
        }
    }
    Ok(())
}
