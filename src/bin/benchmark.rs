//! Measures how long one generation takes at several grid sizes

use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;
use torus_life::{Board, LiveProbability};

fn benchmark_turn(size: usize, iterations: u32) -> f64 {
    let mut board = Board::new(size, size);
    board.populate(&mut StdRng::seed_from_u64(size as u64), LiveProbability::default());

    let start = Instant::now();
    for _ in 0..iterations {
        board = board.turn();
    }
    start.elapsed().as_secs_f64() * 1000.0 / iterations as f64
}

fn main() {
    println!("=== Game of Life Turn Benchmark ===\n");

    let sizes = [64, 128, 204, 256, 512, 1024];
    let iterations = 20;

    println!("{:>10} {:>12} {:>16}", "Size", "ms/gen", "Mcells/sec");
    println!("{:-<40}", "");

    for size in sizes {
        let ms = benchmark_turn(size, iterations);
        let cells = (size * size) as f64;
        println!(
            "{:>10} {:>12.3} {:>16.1}",
            format!("{}x{}", size, size),
            ms,
            cells / (ms / 1000.0) / 1_000_000.0
        );
    }
}
