use macroquad::prelude::*;
use once_cell::sync::Lazy;

mod pong;
mod tuning;

use pong::Pong;
use tuning::Tuning;

const TUNING_PATH: &str = "assets/pong.json";

/// Read once, on first use by `window_conf`.
static TUNING: Lazy<Tuning> = Lazy::new(|| troupe::tuning::load_or_default(TUNING_PATH));

// macroquad asks for the window config before `main` runs, so logging starts here.
fn window_conf() -> Conf {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let tuning = &*TUNING;
    Conf {
        window_title: "pong".to_owned(),
        window_width: tuning.screen_width as i32,
        window_height: tuning.screen_height as i32,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    troupe::run(Pong::new(TUNING.clone())).await;
}
