use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use atoll_input::{DirectionKey, KeyState};
use atoll_render::{DebugTextRenderer, RenderView, Renderer};
use atoll_scene::SceneStore;
use atoll_sim::Simulation;
use atoll_tools::SimInspector;

#[derive(Parser)]
#[command(name = "atoll-cli", about = "Headless driver for the island scene")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Run the scene headless with a fixed set of held keys
    Run {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "120")]
        frames: u64,
        /// Keys held for the whole run, e.g. "w" or "wa"
        #[arg(long, default_value = "")]
        hold: String,
        /// Emit the final summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Walk the robot to the waterline and watch the sharks engage
    Chase {
        /// Number of frames to simulate
        #[arg(short, long, default_value = "600")]
        frames: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("atoll-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", atoll_render::crate_info());
            println!("tools: {}", atoll_tools::crate_info());
        }
        Commands::Run { frames, hold, json } => {
            let mut keys = KeyState::new();
            for c in hold.chars() {
                // Unknown characters are ignored, same as any other host.
                if let Some(key) = DirectionKey::from_char(c) {
                    keys.press(key);
                }
            }

            let mut scene = SceneStore::new();
            let mut sim = Simulation::new(&mut scene);
            for _ in 0..frames {
                sim.step(&keys, &mut scene);
            }
            tracing::debug!(tick = sim.tick(), "run complete");

            if json {
                let summary = SimInspector::summary(&sim);
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                let renderer = DebugTextRenderer::new();
                print!("{}", renderer.render(&sim, &scene, &RenderView::default()));
            }
        }
        Commands::Chase { frames } => {
            let mut scene = SceneStore::new();
            let mut sim = Simulation::new(&mut scene);

            let mut flashed_at = None;
            for frame in 0..frames {
                // Walk backward (+Z) until the robot is wading, then idle.
                let mut keys = KeyState::new();
                if sim.robot_transform().planar_distance_from_origin() < 6.5 {
                    keys.press(DirectionKey::Backward);
                }
                sim.step(&keys, &mut scene);

                if flashed_at.is_none() && sim.is_flashing() {
                    flashed_at = Some(frame);
                }
                if frame % 100 == 0 {
                    let weights: Vec<String> = sim
                        .sharks()
                        .iter()
                        .map(|s| format!("{:.2}", s.chase_weight()))
                        .collect();
                    println!(
                        "frame {frame:>5}: robot d={:.2} chase=[{}]",
                        sim.robot_transform().planar_distance_from_origin(),
                        weights.join(", ")
                    );
                }
            }

            match flashed_at {
                Some(frame) => println!("first shark hit at frame {frame}"),
                None => println!("no shark reached the robot in {frames} frames"),
            }
            print!("{}", SimInspector::summary(&sim));
        }
    }

    Ok(())
}
