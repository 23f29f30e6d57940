use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::Vec2;
use orbitcube_common::Viewport;
use orbitcube_input::{Action, OrbitControls};
use orbitcube_render::{DebugTextRenderer, FrameLoop, FrameScheduler, ManualScheduler};
use orbitcube_scene::{CAMERA_DISTANCE, CAMERA_FOV_DEGREES, CUBE_COLOR, CUBE_SEGMENTS, DemoScene};
use orbitcube_tools::SceneInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "orbitcube-cli", about = "Headless tools for the orbitcube demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and scene constants
    Info,
    /// Describe the assembled scene
    Scene {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the render loop without a window
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "60")]
        frames: u64,
        /// Horizontal rotate drag in pixels, applied before the first frame
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        drag_x: f32,
        /// Vertical rotate drag in pixels, applied before the first frame
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        drag_y: f32,
        /// Wheel steps towards the cube (negative zooms out)
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        zoom: f32,
        /// Apply the drag in a single frame
        #[arg(long)]
        no_damping: bool,
        /// Fraction of pending camera motion applied per frame
        #[arg(long, default_value = "0.05")]
        damping_factor: f32,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let viewport = Viewport::DEMO;

    match cli.command {
        Commands::Info => {
            println!("orbitcube-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("tools: {}", orbitcube_tools::crate_info());
            println!(
                "viewport: {}x{} (aspect {:.3})",
                viewport.width,
                viewport.height,
                viewport.aspect()
            );
            println!(
                "cube: #{CUBE_COLOR:06x}, {CUBE_SEGMENTS} segments per axis; camera: fov {CAMERA_FOV_DEGREES}, distance {CAMERA_DISTANCE}"
            );
        }
        Commands::Scene { json } => {
            let demo = DemoScene::assemble(viewport);
            let summary = SceneInspector::summary(&demo)?;
            let mesh = SceneInspector::inspect_mesh(&demo.scene, demo.mesh)?;
            if json {
                let doc = serde_json::json!({ "scene": summary, "mesh": mesh });
                println!("{}", serde_json::to_string_pretty(&doc)?);
            } else {
                println!("{summary}");
                println!("{mesh}");
            }
        }
        Commands::Simulate {
            frames,
            drag_x,
            drag_y,
            zoom,
            no_damping,
            damping_factor,
        } => {
            let demo = DemoScene::assemble(viewport);
            let target = demo.mesh()?.transform.position;
            let mut controls = OrbitControls::new(target, viewport);
            if !no_damping {
                controls = controls.with_damping(damping_factor);
            }

            let mut frame_loop = FrameLoop::new(demo, controls, viewport);
            let (controls, camera) = frame_loop.controls_and_camera()?;
            controls.apply(Action::Rotate(Vec2::new(drag_x, drag_y)), camera);
            controls.apply(Action::Dolly(zoom), camera);

            let mut renderer = DebugTextRenderer::new();
            let mut scheduler = ManualScheduler::new();
            let mut last = None;

            // The first frame is driven by hand, the rest by the loop's own requests.
            scheduler.request_frame();
            while frame_loop.frames() < frames && scheduler.take() {
                let report = frame_loop
                    .tick(&mut renderer, &mut scheduler)
                    .context("render loop stopped")?;
                tracing::debug!(
                    "frame {} moved={} at {:.4}s",
                    report.frame,
                    report.camera_moved,
                    report.elapsed.as_secs_f32()
                );
                last = Some(report);
            }

            if let Some(report) = last {
                print!("{}", report.output);
            }
            println!(
                "frames={} draws={} pending_motion={}",
                frame_loop.frames(),
                renderer.draws(),
                frame_loop.controls().has_pending_motion()
            );
            println!("{}", SceneInspector::summary(frame_loop.demo())?);
        }
    }

    Ok(())
}
