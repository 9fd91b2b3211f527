use std::time::{Duration, Instant};

use anyhow::Result;
use log::{debug, info};
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

use lane_fighter::engine::game_loop::GameLoop;
use lane_fighter::engine::input::{Action, InputManager};
use lane_fighter::game::characters::{ClipPlayer, FighterStats, PlayerId};
use lane_fighter::game::{MatchConfig, MatchSession};

/// How long the KO screen holds before the next round
const ROUND_RESET_DELAY: Duration = Duration::from_secs(3);

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Lane Fighter...");

    let mut input = InputManager::new(2)?;
    let mut game_loop = GameLoop::new();
    let mut session = MatchSession::new(
        MatchConfig::default(),
        FighterStats::standard(),
        [ClipPlayer::with_fighter_clips(), ClipPlayer::with_fighter_clips()],
    )?;
    let mut knocked_out_at: Option<Instant> = None;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Lane Fighter")
        .with_inner_size(winit::dpi::LogicalSize::new(1280, 720))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(false),
                ..
            } => {
                input.reset_all();
                game_loop.pause();
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                if input.any_player_just_pressed(Action::Quit) {
                    info!("Quit pressed, shutting down...");
                    elwt.exit();
                    return;
                }
                if input.any_player_just_pressed(Action::Pause) {
                    game_loop.toggle_pause();
                }

                let ticks = game_loop.begin_frame();
                for _ in 0..ticks {
                    if knocked_out_at.is_some() {
                        break;
                    }

                    let report = session.tick(&input, game_loop.fixed_timestep());
                    for impact in report.impacts.iter().flatten() {
                        debug!(
                            "{} pose: {}",
                            impact.victim,
                            session.fighter(impact.victim).animator().sample()
                        );
                        info!(
                            "P1 {:.0}% | P2 {:.0}%",
                            session.fighter(PlayerId::P1).health_ratio() * 100.0,
                            session.fighter(PlayerId::P2).health_ratio() * 100.0
                        );
                        if impact.health <= 0.0 {
                            if let Some(winner) = session.winner() {
                                info!("{} wins the round", winner);
                            }
                            knocked_out_at = Some(Instant::now());
                        }
                    }
                }

                // The KO screen holds while paused
                if game_loop.is_paused() {
                    if let Some(at) = knocked_out_at.as_mut() {
                        *at = Instant::now();
                    }
                } else if knocked_out_at.is_some_and(|at| at.elapsed() >= ROUND_RESET_DELAY) {
                    session.reset();
                    knocked_out_at = None;
                }

                input.update();
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
