//! # Sprites
//!
//! Draws a texture centered on its owner, scaled and rotated along with it.

use macroquad::prelude::{draw_texture_ex, DrawTextureParams, Texture2D, Vec2, WHITE};

use crate::{actor::Transform, component::Component};

pub const DEFAULT_DRAW_ORDER: i32 = 100;

pub struct SpriteComponent {
    texture: Option<Texture2D>,
    /// Texture size in pixels, before the owner's scale.
    size: Vec2,
    draw_order: i32,
    pub visible: bool,
}

impl SpriteComponent {
    /// A sprite without a texture draws nothing until [SpriteComponent::set_texture] is called.
    pub fn new(texture: Option<Texture2D>, draw_order: i32) -> Self {
        let mut sprite = Self {
            texture: None,
            size: Vec2::ZERO,
            draw_order,
            visible: true,
        };
        sprite.set_texture(texture);
        sprite
    }

    pub fn set_texture(&mut self, texture: Option<Texture2D>) {
        self.size = texture
            .map(|tex| Vec2::new(tex.width(), tex.height()))
            .unwrap_or(Vec2::ZERO);
        self.texture = texture;
    }

    pub fn texture(&self) -> Option<Texture2D> {
        self.texture
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }
}

impl Component for SpriteComponent {
    fn draw_order(&self) -> Option<i32> {
        Some(self.draw_order)
    }

    fn draw(&self, owner: &Transform) {
        if !self.visible {
            return;
        }
        if let Some(texture) = self.texture {
            draw_centered(texture, self.size, owner);
        }
    }
}

/// Shared with the animated sprite.
pub(crate) fn draw_centered(texture: Texture2D, size: Vec2, owner: &Transform) {
    let dest = size * owner.scale;
    let corner = owner.position - dest / 2.0;
    draw_texture_ex(
        texture,
        corner.x,
        corner.y,
        WHITE,
        DrawTextureParams {
            dest_size: Some(dest),
            // macroquad rotates clockwise on screen
            rotation: -owner.rotation,
            ..Default::default()
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untextured_sprite_still_claims_a_draw_slot() {
        let sprite = SpriteComponent::new(None, 150);
        assert_eq!(sprite.draw_order(), Some(150));
        assert_eq!(sprite.size(), Vec2::ZERO);
        assert!(sprite.visible);
        // drawing without a texture is a no-op and needs no window
        sprite.draw(&Transform::default());
    }
}
