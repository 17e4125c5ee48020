use anyhow::{anyhow, Result};
use glam::Vec3;
use log::{debug, info};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use cyber_mage::engine::game_loop::{GameLoop, FIXED_TIMESTEP};
use cyber_mage::engine::host::{HostCapabilities, LogSink};
use cyber_mage::engine::input::InputManager;
use cyber_mage::game::characters::{CharacterStats, InputDispatcher};
use cyber_mage::game::game_mode::{GameMode, DEFAULT_PAWN_PATH};

/// Pawn classes this host knows how to spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PawnKind {
    SideScroller,
}

/// Stand-in for a physics engine: integrates movement intent and logs it
#[derive(Debug, Default)]
struct ConsoleHost {
    position: Vec3,
    jumping: bool,
}

impl HostCapabilities for ConsoleHost {
    fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        if scale != 0.0 {
            self.position += direction * scale * FIXED_TIMESTEP;
            debug!("Moving {:+.2}, now at {}", scale, self.position);
        }
    }

    fn jump(&mut self) {
        if !self.jumping {
            self.jumping = true;
            info!("Jump!");
        }
    }

    fn stop_jumping(&mut self) {
        self.jumping = false;
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    info!("Starting Cyber Mage...");

    let game_mode = GameMode::new(|path: &str| {
        (path == DEFAULT_PAWN_PATH).then_some(PawnKind::SideScroller)
    });
    let mut character = game_mode
        .spawn_default_pawn(&CharacterStats::default())
        .ok_or_else(|| anyhow!("No default pawn class bound"))?;

    let mut input = InputManager::with_defaults();
    let mut dispatcher = InputDispatcher::new(ConsoleHost::default(), LogSink::new());
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Cyber Mage")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    let pressed = key_event.state == ElementState::Pressed;
                    match key_event.physical_key {
                        PhysicalKey::Code(KeyCode::Escape) if pressed => elwt.exit(),
                        PhysicalKey::Code(KeyCode::KeyP) if pressed && !key_event.repeat => {
                            game_loop.toggle_pause();
                            input.reset();
                        }
                        _ => input.process_keyboard_event(&key_event),
                    }
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    input.process_mouse_button(button, state);
                }
                WindowEvent::Touch(touch) => input.process_touch(&touch),
                WindowEvent::Focused(false) => input.reset(),
                WindowEvent::RedrawRequested => {
                    for _ in 0..game_loop.begin_frame() {
                        for input_event in input.drain_tick() {
                            dispatcher.dispatch(&mut character, input_event);
                        }
                    }
                    window.request_redraw();
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            Event::LoopExiting => {
                info!(
                    "Session over after {} ticks: combo {:?} ({} presses past the final stage), {} notifications",
                    game_loop.tick_count(),
                    character.melee_combo(),
                    character.combat.absorbed_presses(),
                    dispatcher.sink().shown()
                );
            }
            _ => {}
        })
        .map_err(|e| anyhow!("Event loop error: {}", e))?;

    Ok(())
}
