use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    pub ship_start: [f32; 2],
    pub ship_scale: f32,
    /// Pixels per second for D/A.
    pub horizontal_speed: f32,
    /// Pixels per second for S/W.
    pub vertical_speed: f32,
    /// Top-left corner of the area the ship may fly in.
    pub ship_min: [f32; 2],
    /// Bottom-right corner of the area the ship may fly in.
    pub ship_max: [f32; 2],
    pub anim_fps: f32,
    /// Far background, pixels per second.
    pub far_scroll: f32,
    /// Star layer, pixels per second.
    pub stars_scroll: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 1024.0,
            screen_height: 768.0,
            ship_start: [100.0, 384.0],
            ship_scale: 1.5,
            horizontal_speed: 250.0,
            vertical_speed: 300.0,
            ship_min: [25.0, 25.0],
            ship_max: [500.0, 743.0],
            anim_fps: 24.0,
            far_scroll: -100.0,
            stars_scroll: -200.0,
        }
    }
}
