use macroquad::prelude::*;

use crate::application::Simulation;
use crate::domain::Board;

/// Draw live cells as white squares of `pixel_size` on the cleared background
pub fn draw_board(board: &Board, pixel_size: f32) {
    board
        .iter_cells()
        .filter(|(_, _, cell)| cell.is_alive())
        .for_each(|(x, y, _)| {
            draw_rectangle(
                x as f32 * pixel_size,
                y as f32 * pixel_size,
                pixel_size,
                pixel_size,
                WHITE,
            );
        });
}

/// Generation counter and play state in the top-left corner
pub fn draw_status(sim: &Simulation) {
    let status = if sim.is_running { "Running" } else { "Paused" };
    let text = format!(
        "Gen {} | {} alive | {:.0} gen/s | {} | {:.1}ms",
        sim.generation,
        sim.board.population(),
        sim.generations_per_second,
        status,
        sim.last_turn_time_ms,
    );

    draw_rectangle(0.0, 0.0, 420.0, 22.0, Color::from_rgba(30, 30, 30, 200));
    draw_text(&text, 6.0, 16.0, 18.0, Color::from_rgba(0, 255, 150, 255));
}
