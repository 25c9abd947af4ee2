use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Tuning {
    pub screen_width: f32,
    pub screen_height: f32,
    /// Wall thickness, also the paddle width and ball size.
    pub thickness: f32,
    pub paddle_height: f32,
    /// Pixels per second.
    pub paddle_speed: f32,
    /// Starting velocity of the first ball, pixels per second.
    pub ball_velocity: [f32; 2],
    /// 1 plays against the right wall, 2 puts a second paddle there.
    pub players: u8,
    pub balls: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            screen_width: 1024.0,
            screen_height: 768.0,
            thickness: 15.0,
            paddle_height: 100.0,
            paddle_speed: 300.0,
            ball_velocity: [-200.0, 235.0],
            players: 1,
            balls: 1,
        }
    }
}
