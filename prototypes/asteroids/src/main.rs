use anyhow::Context;
use macroquad::prelude::*;
use once_cell::sync::Lazy;

mod game;
mod tuning;

use game::{Asteroids, ASTEROID_TEXTURE, LASER_TEXTURE, SHIP_TEXTURE};
use tuning::Tuning;

const ASSET_DIR: &str = "assets";
const TUNING_PATH: &str = "assets/asteroids.json";

/// Read once, on first use by `window_conf`.
static TUNING: Lazy<Tuning> = Lazy::new(|| troupe::tuning::load_or_default(TUNING_PATH));

// macroquad asks for the window config before `main` runs, so logging starts here.
fn window_conf() -> Conf {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let tuning = &*TUNING;
    Conf {
        window_title: "asteroids".to_owned(),
        window_width: tuning.screen_width as i32,
        window_height: tuning.screen_height as i32,
        fullscreen: false,
        ..Default::default()
    }
}

async fn setup() -> anyhow::Result<Asteroids> {
    let tuning = TUNING.clone();
    let textures = troupe::Textures::load(
        ASSET_DIR,
        &[SHIP_TEXTURE, LASER_TEXTURE, ASTEROID_TEXTURE],
    )
    .await
    .context("couldn't load asteroids textures")?;
    Ok(Asteroids::new(tuning, &textures))
}

#[macroquad::main(window_conf)]
async fn main() {
    match setup().await {
        Ok(game) => troupe::run(game).await,
        Err(err) => log::error!("{:#}", err),
    }
}
