//! Example Bounce headless entry point
//!
//! Runs the simulation against a fixed 60 Hz frame clock with a short
//! scripted input sequence, then prints the final frame snapshot as JSON.
//!
//! Usage: `example-bounce [config.json] [seconds]`

use std::path::PathBuf;
use std::process::ExitCode;

use example_bounce::assets::load_sprite;
use example_bounce::input::{InputEvent, Key};
use example_bounce::{Config, Driver};

/// Seconds simulated when not given on the command line
const DEFAULT_SECONDS: f32 = 5.0;

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Example Bounce (headless) starting...");

    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f32>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    let config = Config::load_or_default(config_path.as_deref());
    let sprite = load_sprite(&config.bouncer_image);

    let mut driver = match Driver::new(config, &sprite) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let frame_dt = driver.config().sim_dt();
    let frames = (seconds / frame_dt).round() as u64;
    let grower_center = driver.world().grower.center();

    for frame in 0..frames {
        // Nudge the mover toward the grower and click it once a second
        if frame % 15 == 0 {
            driver.push_input(InputEvent::Key(Key::Down));
        }
        if frame % 60 == 0 {
            driver.push_input(InputEvent::Click {
                x: grower_center.x,
                y: grower_center.y,
            });
        }
        driver.frame(frame_dt);
    }

    let report = driver.last_report();
    log::info!(
        "Ran {} ticks: mover highlighted={}, grower highlighted={}",
        driver.world().time_ticks,
        report.mover_highlighted,
        report.grower_highlighted
    );

    match serde_json::to_string_pretty(&driver.snapshot()) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to serialize snapshot: {e}");
            ExitCode::FAILURE
        }
    }
}
