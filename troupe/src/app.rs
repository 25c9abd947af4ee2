//! # App
//!
//! The frame loop every chapter shares: read input, wait out the rest of the frame, update, draw, present. Escape quits from any game.

use macroquad::prelude::{clear_background, get_time, next_frame, KeyCode, BLACK};

use crate::{clock::FrameClock, input::InputState};

pub trait Game {
    fn process_input(&mut self, input: &InputState);

    /// `dt` is in seconds, already clamped by the [FrameClock].
    fn update(&mut self, dt: f32);

    /// Called after the screen has been cleared.
    fn draw(&self);

    /// The loop stops as soon as this returns false.
    fn is_running(&self) -> bool;
}

pub async fn run<G: Game>(mut game: G) {
    let mut clock = FrameClock::new(get_time());
    let mut frames: u64 = 0;
    while game.is_running() {
        let input = InputState::capture();
        if input.is_held(KeyCode::Escape) {
            log::info!("escape pressed, quitting");
            break;
        }
        game.process_input(&input);

        let dt = clock.wait_and_tick(get_time);
        game.update(dt);

        clear_background(BLACK);
        game.draw();
        frames += 1;
        next_frame().await;
    }
    log::info!("stopped after {} frames", frames);
}
