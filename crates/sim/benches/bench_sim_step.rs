use std::hint::black_box;
use std::time::Instant;

use atoll_input::{DirectionKey, KeyState};
use atoll_scene::SceneStore;
use atoll_sim::Simulation;

fn bench_steps(label: &str, keys: &KeyState, iterations: usize) {
    let mut scene = SceneStore::new();
    let mut sim = Simulation::new(&mut scene);

    let start = Instant::now();
    for _ in 0..iterations {
        sim.step(black_box(keys), black_box(&mut scene));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  {label} ({iterations} frames): {per_iter:?}/frame, total {elapsed:?}");
}

fn main() {
    println!("=== Simulation Step Benchmarks ===\n");

    let idle = KeyState::new();
    bench_steps("idle (robot ashore, sharks patrolling)", &idle, 100_000);

    let mut walking = KeyState::new();
    walking.press(DirectionKey::Backward);
    bench_steps("walking toward the rim", &walking, 100_000);

    let mut circling = KeyState::new();
    circling.press(DirectionKey::Backward);
    circling.press(DirectionKey::TurnLeft);
    bench_steps("circling near the waterline", &circling, 100_000);

    println!("\n=== Done ===");
}
