use macroquad::prelude::*;
use troupe::{Game, InputState};

use crate::tuning::Tuning;

/// Paddles sit this far in from their edge of the screen.
const PADDLE_INSET: f32 = 10.0;
/// The ball's x must be within this band in front of a paddle to bounce off it.
const HIT_BAND: (f32, f32) = (20.0, 25.0);
/// Each extra ball leaves at a slightly different angle.
const EXTRA_BALL_TURN: f32 = 0.35;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    up: KeyCode,
    down: KeyCode,
    /// -1 up, 0 still, 1 down.
    dir: f32,
}

impl Paddle {
    fn new(side: Side, pos: Vec2, up: KeyCode, down: KeyCode) -> Self {
        Self {
            side,
            pos,
            up,
            down,
            dir: 0.0,
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

pub struct Pong {
    tuning: Tuning,
    pub paddles: Vec<Paddle>,
    pub balls: Vec<Ball>,
    /// The side that let a ball through, once the game is over.
    pub loser: Option<Side>,
}

impl Pong {
    pub fn new(tuning: Tuning) -> Self {
        let width = tuning.screen_width;
        let mid_y = tuning.screen_height / 2.0;

        let mut paddles = vec![Paddle::new(
            Side::Left,
            Vec2::new(PADDLE_INSET, mid_y),
            KeyCode::W,
            KeyCode::S,
        )];
        if tuning.players >= 2 {
            paddles.push(Paddle::new(
                Side::Right,
                Vec2::new(width - PADDLE_INSET, mid_y),
                KeyCode::I,
                KeyCode::K,
            ));
        }

        let base = Vec2::new(tuning.ball_velocity[0], tuning.ball_velocity[1]);
        let balls = (0..tuning.balls.max(1))
            .map(|i| Ball {
                pos: Vec2::new(width / 2.0, mid_y),
                vel: launch_velocity(base, i),
            })
            .collect();

        log::info!(
            "pong: {} player(s), {} ball(s)",
            paddles.len(),
            tuning.balls.max(1)
        );
        Self {
            tuning,
            paddles,
            balls,
            loser: None,
        }
    }

    fn two_player(&self) -> bool {
        self.paddles.iter().any(|p| p.side == Side::Right)
    }

    fn move_paddles(&mut self, dt: f32) {
        let half = self.tuning.paddle_height / 2.0;
        let top = half + self.tuning.thickness;
        let bottom = self.tuning.screen_height - half - self.tuning.thickness;
        for paddle in self.paddles.iter_mut() {
            if paddle.dir != 0.0 {
                paddle.pos.y += paddle.dir * self.tuning.paddle_speed * dt;
                paddle.pos.y = paddle.pos.y.max(top).min(bottom);
            }
        }
    }

    fn move_balls(&mut self, dt: f32) {
        let Tuning {
            screen_width: width,
            screen_height: height,
            thickness,
            paddle_height,
            ..
        } = self.tuning;
        let two_player = self.two_player();

        for ball in self.balls.iter_mut() {
            ball.pos += ball.vel * dt;

            for paddle in self.paddles.iter() {
                let lined_up = (paddle.pos.y - ball.pos.y).abs() <= paddle_height / 2.0;
                let bounced = match paddle.side {
                    Side::Left => {
                        ball.pos.x >= HIT_BAND.0 && ball.pos.x <= HIT_BAND.1 && ball.vel.x < 0.0
                    }
                    Side::Right => {
                        ball.pos.x >= width - HIT_BAND.1
                            && ball.pos.x <= width - HIT_BAND.0
                            && ball.vel.x > 0.0
                    }
                };
                if lined_up && bounced {
                    ball.vel.x *= -1.0;
                }
            }

            if ball.pos.y <= thickness && ball.vel.y < 0.0 {
                ball.vel.y *= -1.0;
            } else if ball.pos.y >= height - thickness && ball.vel.y > 0.0 {
                ball.vel.y *= -1.0;
            }

            if !two_player && ball.pos.x >= width - thickness && ball.vel.x > 0.0 {
                ball.vel.x *= -1.0;
            }

            if ball.pos.x <= 0.0 {
                self.loser.get_or_insert(Side::Left);
            } else if two_player && ball.pos.x >= width {
                self.loser.get_or_insert(Side::Right);
            }
        }
    }
}

/// The first ball keeps the tuned velocity; later ones are turned a little further each and alternate which way they head.
fn launch_velocity(base: Vec2, index: usize) -> Vec2 {
    let angle = EXTRA_BALL_TURN * index as f32;
    let (sin, cos) = angle.sin_cos();
    let turned = Vec2::new(base.x * cos - base.y * sin, base.x * sin + base.y * cos);
    if index % 2 == 1 {
        Vec2::new(-turned.x, turned.y)
    } else {
        turned
    }
}

impl Game for Pong {
    fn process_input(&mut self, input: &InputState) {
        for paddle in self.paddles.iter_mut() {
            paddle.dir = input.axis(paddle.up, paddle.down);
        }
    }

    fn update(&mut self, dt: f32) {
        if self.loser.is_some() {
            return;
        }
        self.move_paddles(dt);
        self.move_balls(dt);
        if let Some(side) = self.loser {
            log::info!("{:?} side missed the ball, game over", side);
        }
    }

    fn draw(&self) {
        let Tuning {
            screen_width: width,
            screen_height: height,
            thickness,
            paddle_height,
            ..
        } = self.tuning;

        draw_rectangle(0.0, 0.0, width, thickness, WHITE);
        draw_rectangle(0.0, height - thickness, width, thickness, WHITE);
        if !self.two_player() {
            draw_rectangle(width - thickness, 0.0, thickness, height, WHITE);
        }
        for paddle in self.paddles.iter() {
            draw_rectangle(
                paddle.pos.x - thickness / 2.0,
                paddle.pos.y - paddle_height / 2.0,
                thickness,
                paddle_height,
                WHITE,
            );
        }
        for ball in self.balls.iter() {
            draw_rectangle(
                ball.pos.x - thickness / 2.0,
                ball.pos.y - thickness / 2.0,
                thickness,
                thickness,
                WHITE,
            );
        }
    }

    fn is_running(&self) -> bool {
        self.loser.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_ball(pos: Vec2, vel: Vec2) -> Pong {
        let mut pong = Pong::new(Tuning::default());
        pong.balls = vec![Ball { pos, vel }];
        pong
    }

    fn two_players() -> Pong {
        Pong::new(Tuning {
            players: 2,
            ..Tuning::default()
        })
    }

    #[test]
    fn starts_centered() {
        let pong = Pong::new(Tuning::default());
        assert_eq!(pong.paddles.len(), 1);
        assert_eq!(pong.paddles[0].pos, Vec2::new(10.0, 384.0));
        assert_eq!(pong.balls.len(), 1);
        assert_eq!(pong.balls[0].pos, Vec2::new(512.0, 384.0));
        assert_eq!(pong.balls[0].vel, Vec2::new(-200.0, 235.0));
        assert!(pong.is_running());
    }

    #[test]
    fn paddle_moves_and_clamps() {
        let mut pong = Pong::new(Tuning::default());
        pong.process_input(&InputState::from_held(&[KeyCode::S]));
        pong.move_paddles(0.5);
        assert_eq!(pong.paddles[0].pos.y, 534.0);

        pong.move_paddles(10.0);
        // screen height - half paddle - wall
        assert_eq!(pong.paddles[0].pos.y, 768.0 - 50.0 - 15.0);

        pong.process_input(&InputState::from_held(&[KeyCode::W]));
        pong.move_paddles(10.0);
        assert_eq!(pong.paddles[0].pos.y, 65.0);
    }

    #[test]
    fn opposing_keys_hold_still() {
        let mut pong = Pong::new(Tuning::default());
        pong.process_input(&InputState::from_held(&[KeyCode::W, KeyCode::S]));
        pong.move_paddles(0.5);
        assert_eq!(pong.paddles[0].pos.y, 384.0);
    }

    #[test]
    fn bounces_off_top_and_bottom_walls() {
        let mut pong = one_ball(Vec2::new(500.0, 16.0), Vec2::new(0.0, -100.0));
        pong.update(0.02);
        assert_eq!(pong.balls[0].vel.y, 100.0);

        let mut pong = one_ball(Vec2::new(500.0, 752.0), Vec2::new(0.0, 100.0));
        pong.update(0.02);
        assert_eq!(pong.balls[0].vel.y, -100.0);
    }

    #[test]
    fn bounces_off_right_wall_with_one_player() {
        let mut pong = one_ball(Vec2::new(1005.0, 300.0), Vec2::new(200.0, 0.0));
        pong.update(0.02);
        assert_eq!(pong.balls[0].vel.x, -200.0);
        assert!(pong.is_running());
    }

    #[test]
    fn bounces_off_left_paddle() {
        let mut pong = one_ball(Vec2::new(26.0, 400.0), Vec2::new(-200.0, 0.0));
        pong.update(0.02);
        assert_eq!(pong.balls[0].vel.x, 200.0);
    }

    #[test]
    fn misses_paddle_out_of_line() {
        let mut pong = one_ball(Vec2::new(26.0, 600.0), Vec2::new(-200.0, 0.0));
        pong.update(0.02);
        assert_eq!(pong.balls[0].vel.x, -200.0);
    }

    #[test]
    fn leaving_the_left_edge_ends_the_game() {
        let mut pong = one_ball(Vec2::new(2.0, 600.0), Vec2::new(-200.0, 0.0));
        pong.update(0.02);
        assert_eq!(pong.loser, Some(Side::Left));
        assert!(!pong.is_running());

        // frozen once over
        let pos = pong.balls[0].pos;
        pong.update(0.02);
        assert_eq!(pong.balls[0].pos, pos);
    }

    #[test]
    fn second_player_replaces_right_wall() {
        let mut pong = two_players();
        assert_eq!(pong.paddles.len(), 2);
        assert_eq!(pong.paddles[1].pos, Vec2::new(1014.0, 384.0));

        pong.balls = vec![Ball {
            pos: Vec2::new(996.0, 384.0),
            vel: Vec2::new(200.0, 0.0),
        }];
        pong.update(0.02);
        assert_eq!(pong.balls[0].vel.x, -200.0);

        pong.balls = vec![Ball {
            pos: Vec2::new(1022.0, 100.0),
            vel: Vec2::new(200.0, 0.0),
        }];
        pong.update(0.02);
        assert_eq!(pong.loser, Some(Side::Right));
    }

    #[test]
    fn second_paddle_uses_i_and_k() {
        let mut pong = two_players();
        pong.process_input(&InputState::from_held(&[KeyCode::I]));
        pong.move_paddles(0.5);
        assert_eq!(pong.paddles[0].pos.y, 384.0);
        assert_eq!(pong.paddles[1].pos.y, 234.0);
    }

    #[test]
    fn extra_balls_head_off_differently() {
        let pong = Pong::new(Tuning {
            balls: 3,
            ..Tuning::default()
        });
        assert_eq!(pong.balls.len(), 3);
        assert_eq!(pong.balls[0].vel, Vec2::new(-200.0, 235.0));
        assert!(pong.balls[1].vel.x > 0.0);
        assert!(pong.balls[2].vel.x < 0.0);
        let speed = pong.balls[0].vel.length();
        for ball in pong.balls.iter() {
            assert!((ball.vel.length() - speed).abs() < 1e-2);
        }
        assert_ne!(pong.balls[0].vel, pong.balls[2].vel);
    }

    #[test]
    fn any_ball_leaving_ends_the_game() {
        let mut pong = Pong::new(Tuning {
            balls: 2,
            ..Tuning::default()
        });
        pong.balls = vec![
            Ball {
                pos: Vec2::new(512.0, 384.0),
                vel: Vec2::new(200.0, 0.0),
            },
            Ball {
                pos: Vec2::new(2.0, 600.0),
                vel: Vec2::new(-200.0, 0.0),
            },
        ];
        pong.update(0.02);
        assert_eq!(pong.loser, Some(Side::Left));
        assert!(!pong.is_running());
        assert!(pong.balls[0].pos.x > 0.0);
    }
}
