use std::f32::consts::{FRAC_PI_2, TAU};

use macroquad::{input::KeyCode, math::Vec2, texture::Texture2D};
use rand::{rngs::StdRng, Rng, SeedableRng};
use troupe::{
    Actor, ActorId, ActorState, Body, CircleComponent, Game, InputComponent, InputState,
    MoveComponent, MoveKeys, Role, ScreenWrap, Spawner, SpriteComponent, Textures, Transform,
    World,
};

use crate::tuning::Tuning;

pub const SHIP_TEXTURE: &str = "Ship.png";
pub const LASER_TEXTURE: &str = "Laser.png";
pub const ASTEROID_TEXTURE: &str = "Asteroid.png";

const SHIP_DRAW_ORDER: i32 = 150;
const DEFAULT_DRAW_ORDER: i32 = 100;

/// What a ship needs to build its lasers.
#[derive(Clone, Copy)]
pub struct LaserKit {
    texture: Option<Texture2D>,
    speed: f32,
    radius: f32,
    lifetime: f32,
    wrap: ScreenWrap,
}

impl LaserKit {
    fn build(&self, from: &Transform) -> Actor<Cast> {
        Actor::new(
            Transform {
                position: from.position,
                rotation: from.rotation,
                scale: 1.0,
            },
            Cast::Laser { ttl: self.lifetime },
        )
        .with(SpriteComponent::new(self.texture, DEFAULT_DRAW_ORDER))
        .with(MoveComponent::new(self.speed, 0.0).wrapping(self.wrap))
        .with(CircleComponent::new(self.radius))
    }
}

pub struct Ship {
    /// Seconds until the next shot is allowed.
    pub cooldown: f32,
    fire_cooldown: f32,
    laser: LaserKit,
}

pub enum Cast {
    Ship(Ship),
    Laser {
        /// Seconds left before the laser fizzles out.
        ttl: f32,
    },
    Asteroid,
}

impl Cast {
    pub fn is_asteroid(&self) -> bool {
        matches!(self, Cast::Asteroid)
    }

    pub fn is_laser(&self) -> bool {
        matches!(self, Cast::Laser { .. })
    }
}

impl Role for Cast {
    fn update_actor(&mut self, body: &mut Body, dt: f32, _spawner: &mut Spawner<Self>) {
        match self {
            Cast::Ship(ship) => ship.cooldown -= dt,
            Cast::Laser { ttl } => {
                *ttl -= dt;
                if *ttl <= 0.0 {
                    body.state = ActorState::Dead;
                }
            }
            Cast::Asteroid => {}
        }
    }

    fn actor_input(&mut self, body: &mut Body, input: &InputState, spawner: &mut Spawner<Self>) {
        if let Cast::Ship(ship) = self {
            if input.is_held(KeyCode::Space) && ship.cooldown <= 0.0 {
                spawner.spawn(ship.laser.build(&body.transform));
                ship.cooldown = ship.fire_cooldown;
            }
        }
    }
}

/// Dead center, nose up.
fn ship_start(tuning: &Tuning) -> Transform {
    Transform {
        position: Vec2::new(tuning.screen_width, tuning.screen_height) / 2.0,
        rotation: FRAC_PI_2,
        scale: 1.0,
    }
}

pub struct Asteroids {
    tuning: Tuning,
    pub world: World<Cast>,
    pub ship: ActorId,
    rng: StdRng,
    asteroid_texture: Option<Texture2D>,
    /// Seconds until the ship comes back, while it is down.
    pub ship_down: Option<f32>,
    pub wave: u32,
}

impl Asteroids {
    pub fn new(tuning: Tuning, textures: &Textures) -> Self {
        let rng = match tuning.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let wrap = ScreenWrap::new(tuning.screen_width, tuning.screen_height);
        let laser = LaserKit {
            texture: textures.get(LASER_TEXTURE),
            speed: tuning.laser_speed,
            radius: tuning.laser_radius,
            lifetime: tuning.laser_lifetime,
            wrap,
        };
        let ship_texture = textures.get(SHIP_TEXTURE);
        let ship = Actor::new(
            ship_start(&tuning),
            Cast::Ship(Ship {
                cooldown: 0.0,
                fire_cooldown: tuning.fire_cooldown,
                laser,
            }),
        )
        .with(SpriteComponent::new(ship_texture, SHIP_DRAW_ORDER))
        .with(
            InputComponent::new(
                MoveKeys::default(),
                tuning.ship_forward_speed,
                tuning.ship_angular_speed,
            )
            .wrapping(wrap),
        )
        .with(CircleComponent::new(tuning.ship_radius));

        let mut world = World::new();
        let ship = world.add_actor(ship);
        let mut game = Self {
            world,
            ship,
            rng,
            asteroid_texture: textures.get(ASTEROID_TEXTURE),
            ship_down: None,
            wave: 1,
            tuning,
        };
        game.spawn_field();
        log::info!(
            "asteroids: wave {} with {} asteroids",
            game.wave,
            game.asteroid_count()
        );
        game
    }

    fn wrap(&self) -> ScreenWrap {
        ScreenWrap::new(self.tuning.screen_width, self.tuning.screen_height)
    }

    /// Adds one asteroid; it drifts along `transform`'s facing.
    pub fn add_asteroid(&mut self, transform: Transform) -> ActorId {
        let asteroid = Actor::new(transform, Cast::Asteroid)
            .with(SpriteComponent::new(self.asteroid_texture, DEFAULT_DRAW_ORDER))
            .with(MoveComponent::new(self.tuning.asteroid_speed, 0.0).wrapping(self.wrap()))
            .with(CircleComponent::new(self.tuning.asteroid_radius));
        self.world.add_actor(asteroid)
    }

    fn spawn_field(&mut self) {
        for _ in 0..self.tuning.asteroid_count {
            let position = Vec2::new(
                self.rng.gen_range(0.0..=self.tuning.screen_width),
                self.rng.gen_range(0.0..=self.tuning.screen_height),
            );
            let rotation = self.rng.gen_range(0.0..TAU);
            self.add_asteroid(Transform {
                position,
                rotation,
                scale: 1.0,
            });
        }
    }

    pub fn asteroid_count(&self) -> usize {
        self.world
            .actors()
            .filter(|a| a.role.is_asteroid() && !a.body.is_dead())
            .count()
    }

    /// Lasers and asteroids that touch destroy each other. Returns how many asteroids went.
    fn resolve_laser_hits(&mut self) -> usize {
        let mut doomed: Vec<ActorId> = Vec::new();
        for laser in self.world.actors().filter(|a| a.role.is_laser() && a.body.is_active()) {
            let hit = self.world.actors().find(|a| {
                a.role.is_asteroid()
                    && !a.body.is_dead()
                    && a.id().map_or(false, |id| !doomed.contains(&id))
                    && laser.body.collides_with(&a.body)
            });
            if let Some(asteroid) = hit {
                doomed.extend(laser.id());
                doomed.extend(asteroid.id());
            }
        }
        for id in doomed.iter() {
            self.world.kill(*id);
        }
        doomed.len() / 2
    }

    fn ship_hit(&self) -> bool {
        let ship = match self.world.get(self.ship) {
            Some(ship) if ship.body.is_active() => ship,
            _ => return false,
        };
        self.world
            .actors()
            .filter(|a| a.role.is_asteroid() && !a.body.is_dead())
            .any(|asteroid| ship.body.collides_with(&asteroid.body))
    }

    fn take_down_ship(&mut self) {
        let start = ship_start(&self.tuning);
        if let Some(ship) = self.world.get_mut(self.ship) {
            ship.set_state(ActorState::Paused);
            ship.body.transform = start;
            if let Some(sprite) = ship.body.component_mut::<SpriteComponent>() {
                sprite.visible = false;
            }
            if let Some(controls) = ship.body.component_mut::<InputComponent>() {
                controls.stop();
            }
        }
        self.ship_down = Some(self.tuning.respawn_delay);
        log::info!("ship destroyed, back in {}s", self.tuning.respawn_delay);
    }

    fn bring_back_ship(&mut self) {
        if let Some(ship) = self.world.get_mut(self.ship) {
            ship.set_state(ActorState::Active);
            if let Some(sprite) = ship.body.component_mut::<SpriteComponent>() {
                sprite.visible = true;
            }
        }
        self.ship_down = None;
        log::info!("ship respawned");
    }
}

impl Game for Asteroids {
    fn process_input(&mut self, input: &InputState) {
        self.world.process_input(input);
    }

    fn update(&mut self, dt: f32) {
        self.world.update(dt);

        let destroyed = self.resolve_laser_hits();
        if destroyed > 0 {
            log::debug!("{} asteroids destroyed", destroyed);
        }

        match self.ship_down {
            Some(left) if left - dt <= 0.0 => self.bring_back_ship(),
            Some(left) => self.ship_down = Some(left - dt),
            None if self.ship_hit() => self.take_down_ship(),
            None => {}
        }

        self.world.sweep_dead();

        if self.tuning.asteroid_count > 0 && self.asteroid_count() == 0 {
            self.wave += 1;
            log::info!("field cleared, starting wave {}", self.wave);
            self.spawn_field();
        }
    }

    fn draw(&self) {
        self.world.draw();
    }

    fn is_running(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(asteroid_count: usize) -> Asteroids {
        Asteroids::new(
            Tuning {
                asteroid_count,
                seed: Some(7),
                ..Tuning::default()
            },
            &Textures::empty(),
        )
    }

    fn lasers(game: &Asteroids) -> usize {
        game.world.actors().filter(|a| a.role.is_laser()).count()
    }

    fn ship(game: &Asteroids) -> &Actor<Cast> {
        game.world.get(game.ship).unwrap()
    }

    #[test]
    fn loads_ship_and_field() {
        let game = seeded(20);
        assert_eq!(game.world.len(), 21);
        assert_eq!(game.asteroid_count(), 20);
        for asteroid in game.world.actors().filter(|a| a.role.is_asteroid()) {
            let pos = asteroid.transform().position;
            assert!(pos.x >= 0.0 && pos.x <= 1024.0);
            assert!(pos.y >= 0.0 && pos.y <= 768.0);
            assert!(asteroid.transform().rotation >= 0.0 && asteroid.transform().rotation < TAU);
        }
        let last = game.world.draw_list().iter().last().map(|e| e.actor);
        assert_eq!(last, Some(game.ship));
        assert_eq!(ship(&game).transform().position, Vec2::new(512.0, 384.0));
    }

    #[test]
    fn same_seed_same_field() {
        let positions = |game: &Asteroids| -> Vec<Vec2> {
            game.world
                .actors()
                .filter(|a| a.role.is_asteroid())
                .map(|a| a.transform().position)
                .collect()
        };
        assert_eq!(positions(&seeded(5)), positions(&seeded(5)));
    }

    #[test]
    fn firing_respects_cooldown() {
        let mut game = seeded(0);
        let fire = InputState::from_held(&[KeyCode::Space]);

        game.process_input(&fire);
        assert_eq!(game.world.pending_len(), 1);
        game.update(0.05);
        assert_eq!(lasers(&game), 1);

        // still cooling down
        game.process_input(&fire);
        game.update(0.05);
        assert_eq!(lasers(&game), 1);

        for _ in 0..9 {
            game.process_input(&InputState::default());
            game.update(0.05);
        }
        game.process_input(&fire);
        game.update(0.05);
        assert_eq!(lasers(&game), 2);
    }

    #[test]
    fn lasers_fly_forward_and_fizzle() {
        let mut game = seeded(0);
        game.process_input(&InputState::from_held(&[KeyCode::Space]));
        game.update(0.05);
        let laser = game.world.actors().find(|a| a.role.is_laser()).unwrap();
        let start = laser.transform().position;
        assert_eq!(start, Vec2::new(512.0, 384.0));

        game.process_input(&InputState::default());
        game.update(0.05);
        let laser = game.world.actors().find(|a| a.role.is_laser()).unwrap();
        // the ship faces straight up
        assert!((laser.transform().position.y - 344.0).abs() < 1e-3);

        for _ in 0..20 {
            game.update(0.05);
        }
        assert_eq!(lasers(&game), 0);
    }

    #[test]
    fn laser_and_asteroid_destroy_each_other() {
        let mut game = seeded(0);
        game.add_asteroid(Transform {
            position: Vec2::new(512.0, 250.0),
            rotation: 0.0,
            scale: 1.0,
        });
        game.process_input(&InputState::from_held(&[KeyCode::Space]));
        game.process_input(&InputState::default());
        for _ in 0..6 {
            game.update(0.05);
        }
        assert_eq!(game.asteroid_count(), 0);
        assert_eq!(lasers(&game), 0);
        assert_eq!(game.world.len(), 1);
        assert_eq!(game.wave, 1);
    }

    #[test]
    fn asteroid_hit_downs_the_ship_for_a_while() {
        let mut game = seeded(0);
        if let Some(ship) = game.world.get_mut(game.ship) {
            ship.body.transform.position = Vec2::new(100.0, 100.0);
        }
        game.add_asteroid(Transform {
            position: Vec2::new(130.0, 100.0),
            rotation: FRAC_PI_2,
            scale: 1.0,
        });
        game.update(0.05);
        assert!(game.ship_down.is_some());
        let downed = ship(&game);
        assert_eq!(downed.state(), ActorState::Paused);
        assert_eq!(downed.transform().position, Vec2::new(512.0, 384.0));
        assert_eq!(downed.body.component::<SpriteComponent>().map(|s| s.visible), Some(false));

        // no shooting while down
        game.process_input(&InputState::from_held(&[KeyCode::Space]));
        assert_eq!(game.world.pending_len(), 0);

        for _ in 0..35 {
            game.update(0.05);
        }
        assert!(game.ship_down.is_none());
        let back = ship(&game);
        assert_eq!(back.state(), ActorState::Active);
        assert_eq!(back.body.component::<SpriteComponent>().map(|s| s.visible), Some(true));
    }

    #[test]
    fn clearing_the_field_starts_a_new_wave() {
        let mut game = seeded(3);
        let ids: Vec<ActorId> = game
            .world
            .actors()
            .filter(|a| a.role.is_asteroid())
            .filter_map(|a| a.id())
            .collect();
        for id in ids {
            game.world.kill(id);
        }
        game.update(0.016);
        assert_eq!(game.wave, 2);
        assert_eq!(game.asteroid_count(), 3);
    }
}
