//! Headless demo shell
//!
//! Drives the engine with a scripted input sequence at the same cadence a
//! windowed shell would, then reports the outcome. Useful for smoke-testing
//! the core without a display.

use std::time::{SystemTime, UNIX_EPOCH};

use space_defender::sim::GameMode;
use space_defender::{Action, Engine};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or(0)
        });

    let mut engine = Engine::new(seed);
    engine.key_down(Action::Confirm);

    // Two minutes of scripted play: strafe side to side, fire steadily
    let mut held: Option<Action> = None;
    for tick in 0u32..7200 {
        if tick % 8 == 0 {
            engine.key_down(Action::Fire);
        }
        if tick % 90 == 0 {
            if let Some(action) = held.take() {
                engine.key_up(action);
            }
            let next = if (tick / 90) % 2 == 0 {
                Action::Left
            } else {
                Action::Right
            };
            engine.key_down(next);
            held = Some(next);
        }

        engine.update();

        if engine.state().mode == GameMode::GameOver {
            log::info!("demo run ended at tick {tick}");
            break;
        }
    }

    let state = engine.state();
    let frame = engine.frame();
    println!(
        "seed {seed}: score={} lives={} level={} (last frame: {} fans, {} spans)",
        state.player.score,
        state.player.lives,
        state.level,
        frame.fans.len(),
        frame.spans.len(),
    );
}
