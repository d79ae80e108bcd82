use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use freefly_camera::{CameraPose, FlyCamera};
use freefly_frame::FrameClock;
use freefly_input::{Action, InputState, Key, MoveDir, SteppedValue};
use freefly_render::{CubeField, DebugTextRenderer, FrameInput, Projection, Renderer};

#[derive(Parser)]
#[command(name = "freefly-cli", about = "Headless flight through the cube field")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Fly a deterministic scripted route and print rendered frames
    Fly {
        /// Number of frames to simulate
        #[arg(long, default_value = "240")]
        frames: usize,

        /// Simulated frame duration in milliseconds
        #[arg(long, default_value = "16")]
        frame_ms: u64,

        /// Print the rendered frame every N frames
        #[arg(long, default_value = "60")]
        every: usize,

        /// Per-frame input script: comma-separated tokens, one per frame.
        /// A token holds keys ("w", "a+d", "left") and/or moves the
        /// pointer ("look:12:-6", pixels). "idle" skips a frame.
        #[arg(long)]
        script: Option<String>,

        /// JSON file with the starting camera pose
        #[arg(long)]
        pose: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("freefly-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("camera: {}", freefly_camera::crate_info());
            println!("input: {}", freefly_input::crate_info());
            println!("frame: {}", freefly_frame::crate_info());
            println!("render: {}", freefly_render::crate_info());
        }
        Commands::Fly {
            frames,
            frame_ms,
            every,
            script,
            pose,
        } => {
            let script = match script {
                Some(s) => parse_script(&s)?,
                None => default_flight(),
            };
            let pose = match pose {
                Some(path) => {
                    let text = std::fs::read_to_string(&path)
                        .with_context(|| format!("reading pose file {path}"))?;
                    serde_json::from_str(&text)
                        .with_context(|| format!("parsing pose file {path}"))?
                }
                None => CameraPose::default(),
            };
            fly(frames, Duration::from_millis(frame_ms), every, script, pose);
        }
    }

    Ok(())
}

/// One frame's worth of scripted input.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ScriptEvent {
    /// Key held for the duration of the frame.
    Hold(Key),
    /// Pointer travel in pixels over the frame.
    Look(f32, f32),
}

fn parse_script(script: &str) -> Result<Vec<Vec<ScriptEvent>>> {
    script.split(',').map(|t| parse_token(t.trim())).collect()
}

fn parse_token(token: &str) -> Result<Vec<ScriptEvent>> {
    if token.is_empty() || token == "idle" {
        return Ok(Vec::new());
    }
    token
        .split('+')
        .map(|part| {
            if let Some(rest) = part.strip_prefix("look:") {
                let (dx, dy) = rest
                    .split_once(':')
                    .with_context(|| format!("look token needs dx:dy, got {part:?}"))?;
                Ok(ScriptEvent::Look(
                    dx.parse().with_context(|| format!("bad look dx in {part:?}"))?,
                    dy.parse().with_context(|| format!("bad look dy in {part:?}"))?,
                ))
            } else {
                Ok(ScriptEvent::Hold(part.parse::<Key>()?))
            }
        })
        .collect()
}

/// The canned route used when no script is given: cruise into the field,
/// sweep the view right while moving, strafe, then step the blend factor up.
fn default_flight() -> Vec<Vec<ScriptEvent>> {
    let mut frames = Vec::new();
    for _ in 0..90 {
        frames.push(vec![ScriptEvent::Hold(Key::W)]);
    }
    for _ in 0..30 {
        frames.push(vec![ScriptEvent::Hold(Key::W), ScriptEvent::Look(4.0, -1.0)]);
    }
    for _ in 0..45 {
        frames.push(vec![ScriptEvent::Hold(Key::A)]);
    }
    for _ in 0..45 {
        frames.push(vec![ScriptEvent::Hold(Key::ArrowRight)]);
    }
    frames
}

fn fly(
    frames: usize,
    frame_dt: Duration,
    every: usize,
    script: Vec<Vec<ScriptEvent>>,
    pose: CameraPose,
) {
    let every = every.max(1);
    let mut camera = FlyCamera::new(pose);
    let mut input = InputState::default();
    let mut blend = SteppedValue::default();
    let mut clock = FrameClock::new();

    let scene = CubeField::new();
    let renderer = DebugTextRenderer::new();
    let projection = Projection::default();

    // Simulated timeline: real wall time never enters the loop.
    let start = Instant::now();
    let mut cursor = glam::Vec2::new(400.0, 300.0);
    input.pointer_moved(cursor.x, cursor.y);

    'flight: for frame in 0..frames {
        let now = start + frame_dt * (frame as u32 + 1);
        let elapsed = (now - start).as_secs_f32();

        // Frame order: clock, then orientation, then movement, then view.
        camera.set_delta_time(clock.tick(now));

        let events = script.get(frame).map_or(&[][..], Vec::as_slice);
        let mut held = Vec::new();
        for event in events {
            match *event {
                ScriptEvent::Hold(key) => {
                    input.key_pressed(key);
                    held.push(key);
                }
                ScriptEvent::Look(dx, dy) => {
                    cursor += glam::Vec2::new(dx, dy);
                    if let Some(Action::Look { yaw_deg, pitch_deg }) =
                        input.pointer_moved(cursor.x, cursor.y)
                    {
                        camera.add_yaw(yaw_deg);
                        camera.add_pitch(pitch_deg);
                    }
                }
            }
        }

        for action in input.poll(now) {
            match action {
                Action::Move(dir) => apply_move(&mut camera, dir),
                Action::BlendUp => {
                    blend.inc();
                }
                Action::BlendDown => {
                    blend.dec();
                }
                Action::Quit => {
                    tracing::info!(frame, "quit requested, ending flight");
                    break 'flight;
                }
                Action::Look { .. } | Action::Noop => {}
            }
        }

        if frame % every == 0 {
            let frame_input = FrameInput {
                view: camera.view(),
                elapsed,
                blend: blend.get(),
            };
            println!("{}", renderer.render(&scene, &frame_input, &projection));
        }

        for key in held {
            input.key_released(key);
        }
    }

    println!(
        "Final pose: yaw={:.1} pitch={:.1} position=({:.2}, {:.2}, {:.2})",
        camera.yaw_deg(),
        camera.pitch_deg(),
        camera.position.x,
        camera.position.y,
        camera.position.z
    );
}

fn apply_move(camera: &mut FlyCamera, dir: MoveDir) {
    match dir {
        MoveDir::Forward => camera.move_forward(),
        MoveDir::Backward => camera.move_backward(),
        MoveDir::Left => camera.move_left(),
        MoveDir::Right => camera.move_right(),
        MoveDir::ForwardLeft => camera.move_forward_left(),
        MoveDir::ForwardRight => camera.move_forward_right(),
        MoveDir::BackwardLeft => camera.move_backward_left(),
        MoveDir::BackwardRight => camera.move_backward_right(),
    }
}
