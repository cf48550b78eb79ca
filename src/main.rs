use macroquad::prelude::*;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use torus_life::{
    Config, Simulation, presets,
    config::{PIXEL_SIZE, WINDOW_HEIGHT, WINDOW_WIDTH},
    input, rendering,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Game of Life on a Torus".to_owned(),
        window_width: WINDOW_WIDTH as i32,
        window_height: WINDOW_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Optional first argument names a preset to start from instead of a random board
fn starting_pattern() -> Option<torus_life::Pattern> {
    let name = std::env::args().nth(1)?;
    let found = presets::find(&name);
    if found.is_none() {
        warn!(
            %name,
            "unknown pattern, starting from a random board; available:\n{}",
            presets::listing()
        );
    }
    found
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::for_window(WINDOW_WIDTH, WINDOW_HEIGHT, PIXEL_SIZE) {
        Ok(config) => config,
        Err(err) => {
            error!(%err, "invalid configuration");
            return;
        }
    };

    let mut sim = match Simulation::new(&config) {
        Ok(sim) => sim,
        Err(err) => {
            error!(%err, "failed to start simulation");
            return;
        }
    };

    if let Some(pattern) = starting_pattern() {
        sim = sim.clear();
        pattern.place_centered(&mut sim.board);
        info!(pattern = pattern.name, "seeded from preset");
    }

    loop {
        if input::quit_requested() {
            info!(generation = sim.generation, "quitting");
            break;
        }
        sim = input::process_keyboard_input(sim);
        sim = sim.tick(get_frame_time());

        clear_background(BLACK);
        rendering::draw_board(&sim.board, PIXEL_SIZE as f32);
        rendering::draw_status(&sim);

        next_frame().await;
    }
}
