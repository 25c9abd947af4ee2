//! # Collision
//!
//! Circle-vs-circle overlap tests. There is no broad phase: games compare the bodies they care about pairwise.

use macroquad::math::Vec2;

use crate::{actor::Transform, component::Component};

/// A collision circle centered on its owner, scaled along with it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CircleComponent {
    pub radius: f32,
}

impl CircleComponent {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    pub fn scaled_radius(&self, owner: &Transform) -> f32 {
        self.radius * owner.scale
    }

    pub fn intersects(&self, owner: &Transform, other: &CircleComponent, other_owner: &Transform) -> bool {
        circles_overlap(
            owner.position,
            self.scaled_radius(owner),
            other_owner.position,
            other.scaled_radius(other_owner),
        )
    }
}

impl Component for CircleComponent {}

/// Touching counts as overlapping.
pub fn circles_overlap(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    let radii = a_radius + b_radius;
    (a - b).length_squared() <= radii * radii
}
