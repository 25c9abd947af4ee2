use anyhow::Context;
use macroquad::prelude::*;
use once_cell::sync::Lazy;

mod game;
mod tuning;

use game::{Spaceship, FAR_LAYERS, SHIP_FRAMES, STAR_LAYERS};
use tuning::Tuning;

const ASSET_DIR: &str = "assets";
const TUNING_PATH: &str = "assets/spaceship.json";

/// Read once, on first use by `window_conf`.
static TUNING: Lazy<Tuning> = Lazy::new(|| troupe::tuning::load_or_default(TUNING_PATH));

// macroquad asks for the window config before `main` runs, so logging starts here.
fn window_conf() -> Conf {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let tuning = &*TUNING;
    Conf {
        window_title: "spaceship".to_owned(),
        window_width: tuning.screen_width as i32,
        window_height: tuning.screen_height as i32,
        fullscreen: false,
        ..Default::default()
    }
}

async fn setup() -> anyhow::Result<Spaceship> {
    let tuning = TUNING.clone();
    let mut names: Vec<&str> = SHIP_FRAMES
        .iter()
        .chain(FAR_LAYERS.iter())
        .chain(STAR_LAYERS.iter())
        .copied()
        .collect();
    names.sort_unstable();
    names.dedup();
    let textures = troupe::Textures::load(ASSET_DIR, &names)
        .await
        .context("couldn't load spaceship textures")?;
    Ok(Spaceship::new(&tuning, &textures))
}

#[macroquad::main(window_conf)]
async fn main() {
    match setup().await {
        Ok(game) => troupe::run(game).await,
        Err(err) => log::error!("{:#}", err),
    }
}
