//! Headless flythrough demo.
//!
//! Drives a [`FreeLookCamera`] through a scripted sequence of held keys and
//! mouse motion at a capped frame rate, logging the camera pose once per
//! second. An optional argument names a TOML options file.
//!
//! ```text
//! RUST_LOG=info freelook [options.toml]
//! ```

use std::path::PathBuf;

use freelook::options::KeybindingOptions;
use freelook::util::frame_timing::FrameTiming;
use freelook::{
    CameraUniform, FreeLookCamera, FreelookError, InputEvent, InputState,
    KeyAction, Options, Projection,
};

/// One leg of the scripted flythrough.
struct Phase {
    frames: u32,
    held: &'static [KeyAction],
    mouse: (i32, i32),
}

const SCRIPT: &[Phase] = &[
    Phase {
        frames: 90,
        held: &[KeyAction::MoveForward],
        mouse: (0, 0),
    },
    Phase {
        frames: 60,
        held: &[],
        mouse: (6, 0),
    },
    Phase {
        frames: 60,
        held: &[KeyAction::StrafeLeft, KeyAction::Ascend],
        mouse: (0, -3),
    },
    Phase {
        frames: 2,
        held: &[KeyAction::ToggleMouseLook],
        mouse: (0, 0),
    },
    Phase {
        frames: 60,
        held: &[KeyAction::MoveBackward],
        mouse: (40, 40),
    },
    Phase {
        frames: 2,
        held: &[KeyAction::ToggleMouseLook],
        mouse: (0, 0),
    },
    Phase {
        frames: 60,
        held: &[KeyAction::StrafeRight, KeyAction::Descend],
        mouse: (-6, 3),
    },
];

/// Scripted phase for a frame index; the script loops.
fn phase_at(frame: u32) -> &'static Phase {
    let cycle: u32 = SCRIPT.iter().map(|p| p.frames).sum();
    let mut offset = frame % cycle;
    for phase in SCRIPT {
        if offset < phase.frames {
            return phase;
        }
        offset -= phase.frames;
    }
    &SCRIPT[0]
}

/// Key events that move the held set from `previous` to `next`.
fn transition(
    previous: &[KeyAction],
    next: &[KeyAction],
    bindings: &KeybindingOptions,
) -> Vec<InputEvent> {
    let released = previous
        .iter()
        .filter(|a| !next.contains(a))
        .filter_map(|a| bindings.key_for(*a))
        .map(InputEvent::key_up);
    let pressed = next
        .iter()
        .filter(|a| !previous.contains(a))
        .filter_map(|a| bindings.key_for(*a))
        .map(InputEvent::key_down);
    released.chain(pressed).collect()
}

fn run(options: &Options) -> Result<(), FreelookError> {
    let bindings = &options.keybindings;
    let demo = &options.demo;

    let mut camera = FreeLookCamera::from_options(&options.camera)?;
    let mut projection = Projection::from_options(&options.camera);
    projection.resize(demo.width, demo.height);

    let mut input = InputState::new();
    let mut uniform = CameraUniform::new();
    let mut timing = FrameTiming::new(demo.target_fps);
    let mut held: &[KeyAction] = &[];
    let mut toggle_was_down = false;

    log::info!(
        "Flythrough: {} frames at {} fps, {}x{}",
        demo.frames,
        demo.target_fps,
        demo.width,
        demo.height
    );

    for frame in 0..demo.frames {
        while !timing.should_render() {
            std::thread::sleep(timing.time_until_next_frame());
        }

        let phase = phase_at(frame);
        let mut events = transition(held, phase.held, bindings);
        held = phase.held;
        if phase.mouse != (0, 0) {
            events.push(InputEvent::MouseMotion {
                dx: phase.mouse.0,
                dy: phase.mouse.1,
            });
        }
        if frame + 1 == demo.frames {
            events.extend(
                bindings.key_for(KeyAction::Quit).map(InputEvent::key_down),
            );
        }

        input.begin_frame();
        for event in &events {
            input.handle_event(event);
        }

        if input.is_action_pressed(KeyAction::Quit, bindings) {
            log::info!("Quit requested at frame {frame}");
            break;
        }

        let toggle_down =
            input.is_action_pressed(KeyAction::ToggleMouseLook, bindings);
        if toggle_down && !toggle_was_down {
            let enabled = !camera.is_mouse_enabled();
            camera.enable_mouse(enabled);
            log::info!("Mouse look {}", if enabled { "on" } else { "off" });
        }
        toggle_was_down = toggle_down;

        camera.advance(&input.snapshot(bindings));
        uniform.update(&mut camera, &projection);
        timing.end_frame();

        if let Some(report) = timing.take_report() {
            log::info!(
                "{} frames in {:.2?} ({:.1} fps, smoothed {:.1})",
                report.frames,
                report.elapsed,
                report.fps(),
                timing.fps()
            );
            log::debug!(
                "position {:?} phi {:.2} theta {:.2}",
                camera.position(),
                camera.phi(),
                camera.theta()
            );
        }
    }

    log::info!(
        "Final pose: position {:?}, target {:?}, orientation {:?}",
        camera.position(),
        camera.target(),
        camera.orientation()
    );
    Ok(())
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => match Options::load(&path) {
            Ok(options) => options,
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = run(&options) {
        log::error!("{e}");
        std::process::exit(1);
    }
}
