use std::f32::consts::TAU;

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,

    pub asteroid_count: usize,
    /// Pixels per second.
    pub asteroid_speed: f32,
    pub asteroid_radius: f32,

    /// Pixels per second.
    pub ship_forward_speed: f32,
    /// Radians per second.
    pub ship_angular_speed: f32,
    pub ship_radius: f32,
    /// Seconds the ship stays gone after an asteroid hits it.
    pub respawn_delay: f32,

    /// Pixels per second.
    pub laser_speed: f32,
    pub laser_radius: f32,
    /// Seconds.
    pub laser_lifetime: f32,
    /// Seconds between shots.
    pub fire_cooldown: f32,

    /// Fixes the asteroid field; random every run when unset.
    pub seed: Option<u64>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 1024.0,
            screen_height: 768.0,
            asteroid_count: 20,
            asteroid_speed: 150.0,
            asteroid_radius: 40.0,
            ship_forward_speed: 300.0,
            ship_angular_speed: TAU,
            ship_radius: 28.0,
            respawn_delay: 1.5,
            laser_speed: 800.0,
            laser_radius: 11.0,
            laser_lifetime: 1.0,
            fire_cooldown: 0.5,
            seed: None,
        }
    }
}
