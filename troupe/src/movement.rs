//! # Movement
//!
//! Moves an actor along its facing direction and turns it, optionally wrapping it around the screen edges. [InputComponent] is the keyboard-driven variant: it sets the speeds from held keys each frame and then moves exactly like [MoveComponent].

use macroquad::{input::KeyCode, math::Vec2};

use crate::{actor::Transform, component::Component, input::InputState};

/// Speeds this close to zero are treated as standing still.
const NEARLY_ZERO: f32 = 0.001;

/// Teleports anything that leaves the screen to the opposite edge.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScreenWrap {
    pub width: f32,
    pub height: f32,
}

impl ScreenWrap {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Re-entry lands a couple of pixels inside the opposite edge so it doesn't immediately wrap back.
    pub fn wrap(&self, mut pos: Vec2) -> Vec2 {
        if pos.x < 0.0 {
            pos.x = self.width - 2.0;
        } else if pos.x > self.width {
            pos.x = 2.0;
        }
        if pos.y < 0.0 {
            pos.y = self.height - 2.0;
        } else if pos.y > self.height {
            pos.y = 2.0;
        }
        pos
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct MoveComponent {
    /// Pixels per second along the owner's forward vector.
    pub forward_speed: f32,
    /// Radians per second, counter-clockwise.
    pub angular_speed: f32,
    pub wrap: Option<ScreenWrap>,
}

impl MoveComponent {
    pub fn new(forward_speed: f32, angular_speed: f32) -> Self {
        Self {
            forward_speed,
            angular_speed,
            wrap: None,
        }
    }

    pub fn wrapping(mut self, wrap: ScreenWrap) -> Self {
        self.wrap = Some(wrap);
        self
    }

    fn step(&self, owner: &mut Transform, dt: f32) {
        if self.angular_speed.abs() > NEARLY_ZERO {
            owner.rotation += self.angular_speed * dt;
        }
        if self.forward_speed.abs() > NEARLY_ZERO {
            owner.position += owner.forward() * self.forward_speed * dt;
        }
        if let Some(wrap) = self.wrap {
            owner.position = wrap.wrap(owner.position);
        }
    }
}

impl Component for MoveComponent {
    fn update_order(&self) -> i32 {
        10
    }

    fn update(&mut self, owner: &mut Transform, dt: f32) {
        self.step(owner, dt);
    }
}

/// Which keys drive an [InputComponent].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveKeys {
    pub forward: KeyCode,
    pub back: KeyCode,
    /// Counter-clockwise on screen.
    pub turn_left: KeyCode,
    pub turn_right: KeyCode,
}

impl Default for MoveKeys {
    fn default() -> Self {
        Self {
            forward: KeyCode::W,
            back: KeyCode::S,
            turn_left: KeyCode::A,
            turn_right: KeyCode::D,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct InputComponent {
    pub movement: MoveComponent,
    pub keys: MoveKeys,
    pub max_forward_speed: f32,
    pub max_angular_speed: f32,
}

impl InputComponent {
    pub fn new(keys: MoveKeys, max_forward_speed: f32, max_angular_speed: f32) -> Self {
        Self {
            movement: MoveComponent::default(),
            keys,
            max_forward_speed,
            max_angular_speed,
        }
    }

    pub fn wrapping(mut self, wrap: ScreenWrap) -> Self {
        self.movement.wrap = Some(wrap);
        self
    }

    /// Zeroes both speeds, e.g. when the owner is reset.
    pub fn stop(&mut self) {
        self.movement.forward_speed = 0.0;
        self.movement.angular_speed = 0.0;
    }
}

impl Component for InputComponent {
    fn update_order(&self) -> i32 {
        self.movement.update_order()
    }

    fn update(&mut self, owner: &mut Transform, dt: f32) {
        self.movement.step(owner, dt);
    }

    fn process_input(&mut self, _owner: &Transform, input: &InputState) {
        self.movement.forward_speed =
            input.axis(self.keys.back, self.keys.forward) * self.max_forward_speed;
        self.movement.angular_speed =
            input.axis(self.keys.turn_right, self.keys.turn_left) * self.max_angular_speed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn moves_along_forward() {
        let mut transform = Transform::at(Vec2::new(100.0, 100.0));
        transform.rotation = FRAC_PI_2;
        let mut movement = MoveComponent::new(150.0, 0.0);
        movement.update(&mut transform, 0.5);
        assert!((transform.position.x - 100.0).abs() < 1e-3);
        assert!((transform.position.y - 25.0).abs() < 1e-3);
    }

    #[test]
    fn turns_counter_clockwise() {
        let mut transform = Transform::default();
        let mut movement = MoveComponent::new(0.0, PI);
        movement.update(&mut transform, 0.25);
        assert!((transform.rotation - PI / 4.0).abs() < 1e-6);
        assert_eq!(transform.position, Vec2::ZERO);
    }

    #[test]
    fn wraps_to_opposite_edge() {
        let wrap = ScreenWrap::new(1024.0, 768.0);
        assert_eq!(wrap.wrap(Vec2::new(-1.0, 10.0)), Vec2::new(1022.0, 10.0));
        assert_eq!(wrap.wrap(Vec2::new(1025.0, 10.0)), Vec2::new(2.0, 10.0));
        assert_eq!(wrap.wrap(Vec2::new(10.0, -3.0)), Vec2::new(10.0, 766.0));
        assert_eq!(wrap.wrap(Vec2::new(10.0, 769.0)), Vec2::new(10.0, 2.0));
        assert_eq!(wrap.wrap(Vec2::new(1024.0, 768.0)), Vec2::new(1024.0, 768.0));
    }

    #[test]
    fn movement_applies_wrap() {
        let mut transform = Transform::at(Vec2::new(1020.0, 300.0));
        let mut movement = MoveComponent::new(200.0, 0.0).wrapping(ScreenWrap::new(1024.0, 768.0));
        movement.update(&mut transform, 0.05);
        assert_eq!(transform.position, Vec2::new(2.0, 300.0));
    }

    #[test]
    fn input_sets_speeds_from_keys() {
        let mut input_component = InputComponent::new(MoveKeys::default(), 300.0, 2.0 * PI);
        let transform = Transform::default();

        input_component.process_input(&transform, &InputState::from_held(&[KeyCode::W, KeyCode::A]));
        assert_eq!(input_component.movement.forward_speed, 300.0);
        assert_eq!(input_component.movement.angular_speed, 2.0 * PI);

        input_component.process_input(&transform, &InputState::from_held(&[KeyCode::S, KeyCode::D]));
        assert_eq!(input_component.movement.forward_speed, -300.0);
        assert_eq!(input_component.movement.angular_speed, -2.0 * PI);

        input_component.process_input(&transform, &InputState::default());
        assert_eq!(input_component.movement.forward_speed, 0.0);
        assert_eq!(input_component.movement.angular_speed, 0.0);
    }

    #[test]
    fn input_component_moves_like_movement() {
        let mut input_component = InputComponent::new(MoveKeys::default(), 300.0, 0.0);
        let mut transform = Transform::at(Vec2::new(500.0, 500.0));
        input_component.process_input(&transform, &InputState::from_held(&[KeyCode::W]));
        input_component.update(&mut transform, 0.1);
        assert!((transform.position.x - 530.0).abs() < 1e-3);
        assert!((transform.position.y - 500.0).abs() < 1e-3);
    }
}
