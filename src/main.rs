//! Bouncing Ball entry point
//!
//! Initializes logging and settings, then runs the game loop.

use bouncing_ball::Settings;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Bouncing Ball starting...");

    let settings = Settings::load();
    bouncing_ball::platform::run(settings)
}
