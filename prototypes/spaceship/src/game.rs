use macroquad::prelude::*;
use troupe::{
    Actor, ActorId, AnimSpriteComponent, BgSpriteComponent, Body, Game, InputState, Role, Spawner,
    Textures, Transform, World,
};

use crate::tuning::Tuning;

pub const SHIP_FRAMES: [&str; 4] = ["Ship01.png", "Ship02.png", "Ship03.png", "Ship04.png"];
pub const FAR_LAYERS: [&str; 2] = ["Farback01.png", "Farback02.png"];
pub const STAR_LAYERS: [&str; 2] = ["Stars.png", "Stars.png"];

const SHIP_DRAW_ORDER: i32 = 100;
const FAR_DRAW_ORDER: i32 = 10;
const STARS_DRAW_ORDER: i32 = 50;

pub struct Ship {
    /// Pixels per second, set from the keyboard each frame.
    pub velocity: Vec2,
    speed: Vec2,
    min: Vec2,
    max: Vec2,
}

impl Ship {
    fn new(tuning: &Tuning) -> Self {
        Self {
            velocity: Vec2::ZERO,
            speed: Vec2::new(tuning.horizontal_speed, tuning.vertical_speed),
            min: Vec2::from(tuning.ship_min),
            max: Vec2::from(tuning.ship_max),
        }
    }
}

pub enum Cast {
    Ship(Ship),
    Backdrop,
}

impl Role for Cast {
    fn update_actor(&mut self, body: &mut Body, dt: f32, _spawner: &mut Spawner<Self>) {
        if let Cast::Ship(ship) = self {
            let pos = body.transform.position + ship.velocity * dt;
            body.transform.position = pos.max(ship.min).min(ship.max);
        }
    }

    fn actor_input(&mut self, _body: &mut Body, input: &InputState, _spawner: &mut Spawner<Self>) {
        if let Cast::Ship(ship) = self {
            ship.velocity = Vec2::new(
                input.axis(KeyCode::A, KeyCode::D),
                input.axis(KeyCode::W, KeyCode::S),
            ) * ship.speed;
        }
    }
}

pub struct Spaceship {
    pub world: World<Cast>,
    pub ship: ActorId,
}

impl Spaceship {
    pub fn new(tuning: &Tuning, textures: &Textures) -> Self {
        let mut world = World::new();
        let screen = Vec2::new(tuning.screen_width, tuning.screen_height);

        let frames = textures
            .get_all(&SHIP_FRAMES)
            .into_iter()
            .flatten()
            .collect();
        let ship = world.add_actor(
            Actor::new(
                Transform {
                    position: Vec2::from(tuning.ship_start),
                    scale: tuning.ship_scale,
                    rotation: 0.0,
                },
                Cast::Ship(Ship::new(tuning)),
            )
            .with(AnimSpriteComponent::new(frames, SHIP_DRAW_ORDER).with_fps(tuning.anim_fps)),
        );

        world.add_actor(
            Actor::new(Transform::at(screen / 2.0), Cast::Backdrop)
                .with(
                    BgSpriteComponent::new(screen, tuning.far_scroll, FAR_DRAW_ORDER)
                        .with_textures(textures.get_all(&FAR_LAYERS)),
                )
                .with(
                    BgSpriteComponent::new(screen, tuning.stars_scroll, STARS_DRAW_ORDER)
                        .with_textures(textures.get_all(&STAR_LAYERS)),
                ),
        );

        log::info!("spaceship: {} actors loaded", world.len());
        Self { world, ship }
    }

    pub fn ship_position(&self) -> Option<Vec2> {
        self.world.get(self.ship).map(|ship| ship.transform().position)
    }
}

impl Game for Spaceship {
    fn process_input(&mut self, input: &InputState) {
        self.world.process_input(input);
    }

    fn update(&mut self, dt: f32) {
        self.world.update(dt);
    }

    fn draw(&self) {
        self.world.draw();
    }

    fn is_running(&self) -> bool {
        true
    }
}
