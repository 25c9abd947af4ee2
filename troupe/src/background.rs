//! # Scrolling backgrounds
//!
//! A background is a row of screen-sized layers laid side by side that slides horizontally. When a layer has scrolled completely off the left edge it jumps to the back of the row, so a handful of textures make an endless strip. Stack several backgrounds at different speeds and draw orders for parallax.

use macroquad::prelude::{draw_texture_ex, DrawTextureParams, Texture2D, Vec2, WHITE};

use crate::{actor::Transform, component::Component};

pub const DEFAULT_BG_DRAW_ORDER: i32 = 10;

struct Layer {
    texture: Option<Texture2D>,
    offset: Vec2,
}

pub struct BgSpriteComponent {
    layers: Vec<Layer>,
    screen_size: Vec2,
    /// Pixels per second; negative scrolls left.
    pub scroll_speed: f32,
    draw_order: i32,
}

impl BgSpriteComponent {
    pub fn new(screen_size: Vec2, scroll_speed: f32, draw_order: i32) -> Self {
        Self {
            layers: Vec::new(),
            screen_size,
            scroll_speed,
            draw_order,
        }
    }

    /// Lays the textures out left to right, one screen width apart. `None` entries keep their slot in the row but draw nothing.
    pub fn set_textures(&mut self, textures: Vec<Option<Texture2D>>) {
        let width = self.screen_size.x;
        self.layers = textures
            .into_iter()
            .enumerate()
            .map(|(i, texture)| Layer {
                texture,
                offset: Vec2::new(i as f32 * width, 0.0),
            })
            .collect();
    }

    pub fn with_textures(mut self, textures: Vec<Option<Texture2D>>) -> Self {
        self.set_textures(textures);
        self
    }

    pub fn offsets(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.layers.iter().map(|layer| layer.offset)
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }
}

impl Component for BgSpriteComponent {
    fn update(&mut self, _owner: &mut Transform, dt: f32) {
        let width = self.screen_size.x;
        // one pixel of overlap hides the seam
        let back_of_row = (self.layers.len() as f32 - 1.0) * width - 1.0;
        for layer in self.layers.iter_mut() {
            layer.offset.x += self.scroll_speed * dt;
            if layer.offset.x < -width {
                layer.offset.x = back_of_row;
            }
        }
    }

    fn draw_order(&self) -> Option<i32> {
        Some(self.draw_order)
    }

    fn draw(&self, owner: &Transform) {
        let origin = owner.position - self.screen_size / 2.0;
        for layer in self.layers.iter() {
            if let Some(texture) = layer.texture {
                let corner = origin + layer.offset;
                draw_texture_ex(
                    texture,
                    corner.x,
                    corner.y,
                    WHITE,
                    DrawTextureParams {
                        dest_size: Some(self.screen_size),
                        ..Default::default()
                    },
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xs(bg: &BgSpriteComponent) -> Vec<f32> {
        bg.offsets().map(|offset| offset.x).collect()
    }

    #[test]
    fn layers_start_side_by_side() {
        let bg = BgSpriteComponent::new(Vec2::new(1024.0, 768.0), -100.0, DEFAULT_BG_DRAW_ORDER)
            .with_textures(vec![None, None, None]);
        assert_eq!(xs(&bg), vec![0.0, 1024.0, 2048.0]);
    }

    #[test]
    fn scrolls_and_recycles_layers() {
        let mut bg = BgSpriteComponent::new(Vec2::new(100.0, 50.0), -100.0, DEFAULT_BG_DRAW_ORDER)
            .with_textures(vec![None, None]);
        let mut owner = Transform::default();

        bg.update(&mut owner, 0.5);
        assert_eq!(xs(&bg), vec![-50.0, 50.0]);

        // first layer passes -width and jumps to the back of the row
        bg.update(&mut owner, 0.625);
        assert_eq!(xs(&bg), vec![99.0, -12.5]);
    }

    #[test]
    fn draw_order_is_configurable() {
        let bg = BgSpriteComponent::new(Vec2::new(10.0, 10.0), 0.0, 50);
        assert_eq!(bg.draw_order(), Some(50));
        assert_eq!(bg.layer_count(), 0);
    }
}
