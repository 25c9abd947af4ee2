//! # Animation
//!
//! Flip-book animation: a sprite whose texture steps through a list of frames at a fixed rate. Frames can be split into named clips (a walk cycle, a one-shot punch), each of which either cycles or plays once and holds its last frame.

use macroquad::texture::Texture2D;
use serde::Deserialize;

use crate::{actor::Transform, component::Component, sprite::SpriteComponent};

pub const DEFAULT_FPS: f32 = 24.0;

/// A named run of frames.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Clip {
    pub name: String,
    /// Index of the first frame.
    pub start: usize,
    /// Number of frames.
    pub len: usize,
    /// Cycle back to the start, or stop on the last frame.
    pub looping: bool,
}

impl Clip {
    pub fn new(name: &str, start: usize, len: usize, looping: bool) -> Self {
        Self {
            name: name.to_owned(),
            start,
            len,
            looping,
        }
    }
}

/// Frame timing for one clip, independent of any textures.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameCycle {
    pub fps: f32,
    start: usize,
    len: usize,
    looping: bool,
    /// Fractional frame within the clip.
    frame: f32,
    finished: bool,
}

impl FrameCycle {
    pub fn new(fps: f32, start: usize, len: usize, looping: bool) -> Self {
        Self {
            fps,
            start,
            len,
            looping,
            frame: 0.0,
            finished: false,
        }
    }

    /// Switches to a new run of frames, starting from its first frame.
    pub fn restart(&mut self, start: usize, len: usize, looping: bool) {
        *self = Self::new(self.fps, start, len, looping);
    }

    /// Moves time forward and returns the absolute frame index to show.
    pub fn advance(&mut self, dt: f32) -> usize {
        if self.len == 0 || self.finished {
            return self.current();
        }
        let len = self.len as f32;
        self.frame += self.fps * dt;
        if self.looping {
            self.frame = self.frame.rem_euclid(len);
        } else if self.frame >= len {
            self.frame = len - 1.0;
            self.finished = true;
        }
        self.current()
    }

    pub fn current(&self) -> usize {
        if self.len == 0 {
            return self.start;
        }
        self.start + (self.frame as usize).min(self.len - 1)
    }

    /// A one-shot clip that has reached its last frame.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

pub struct AnimSpriteComponent {
    sprite: SpriteComponent,
    frames: Vec<Texture2D>,
    clips: Vec<Clip>,
    playing: Option<usize>,
    cycle: FrameCycle,
}

impl AnimSpriteComponent {
    /// Plays every frame in a loop until told otherwise.
    pub fn new(frames: Vec<Texture2D>, draw_order: i32) -> Self {
        let mut anim = Self {
            sprite: SpriteComponent::new(None, draw_order),
            frames: Vec::new(),
            clips: Vec::new(),
            playing: None,
            cycle: FrameCycle::new(DEFAULT_FPS, 0, 0, true),
        };
        anim.set_frames(frames);
        anim
    }

    pub fn with_fps(mut self, fps: f32) -> Self {
        self.cycle.fps = fps;
        self
    }

    /// Replaces the frames and goes back to looping over all of them.
    pub fn set_frames(&mut self, frames: Vec<Texture2D>) {
        self.sprite.set_texture(frames.first().copied());
        self.cycle.restart(0, frames.len(), true);
        self.frames = frames;
        self.playing = None;
    }

    pub fn add_clip(&mut self, clip: Clip) {
        self.clips.push(clip);
    }

    /// Starts the named clip from its first frame. Unknown names are ignored.
    pub fn play(&mut self, name: &str) {
        match self.clips.iter().position(|clip| clip.name == name) {
            Some(idx) => {
                let clip = &self.clips[idx];
                let len = clip.len.min(self.frames.len().saturating_sub(clip.start));
                self.cycle.restart(clip.start, len, clip.looping);
                self.playing = Some(idx);
                self.show(self.cycle.current());
            }
            None => log::warn!("no animation clip named {:?}", name),
        }
    }

    /// Name of the clip playing, or `None` when looping over all frames.
    pub fn playing(&self) -> Option<&str> {
        self.playing.map(|idx| self.clips[idx].name.as_str())
    }

    pub fn current_frame(&self) -> usize {
        self.cycle.current()
    }

    pub fn is_finished(&self) -> bool {
        self.cycle.is_finished()
    }

    pub fn sprite_mut(&mut self) -> &mut SpriteComponent {
        &mut self.sprite
    }

    fn show(&mut self, frame: usize) {
        if let Some(texture) = self.frames.get(frame) {
            self.sprite.set_texture(Some(*texture));
        }
    }
}

impl Component for AnimSpriteComponent {
    fn update(&mut self, _owner: &mut Transform, dt: f32) {
        let frame = self.cycle.advance(dt);
        self.show(frame);
    }

    fn draw_order(&self) -> Option<i32> {
        self.sprite.draw_order()
    }

    fn draw(&self, owner: &Transform) {
        self.sprite.draw(owner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn looping_cycle_wraps() {
        let mut cycle = FrameCycle::new(24.0, 0, 4, true);
        assert_eq!(cycle.advance(1.0 / 24.0 + 1e-4), 1);
        assert_eq!(cycle.advance(2.0 / 24.0), 3);
        assert_eq!(cycle.advance(1.0 / 24.0), 0);
        assert!(!cycle.is_finished());
    }

    #[test]
    fn big_steps_wrap_more_than_once() {
        let mut cycle = FrameCycle::new(10.0, 0, 4, true);
        // 10.5 frames in: 2.5 frames into the third lap
        assert_eq!(cycle.advance(1.05), 2);
    }

    #[test]
    fn one_shot_holds_last_frame() {
        let mut cycle = FrameCycle::new(10.0, 5, 3, false);
        assert_eq!(cycle.current(), 5);
        assert_eq!(cycle.advance(0.15), 6);
        assert!(!cycle.is_finished());
        assert_eq!(cycle.advance(1.0), 7);
        assert!(cycle.is_finished());
        assert_eq!(cycle.advance(1.0), 7);
    }

    #[test]
    fn restart_resets_progress() {
        let mut cycle = FrameCycle::new(10.0, 0, 3, false);
        cycle.advance(5.0);
        assert!(cycle.is_finished());
        cycle.restart(3, 2, true);
        assert_eq!(cycle.current(), 3);
        assert!(!cycle.is_finished());
        assert_eq!(cycle.fps, 10.0);
    }

    #[test]
    fn empty_clip_stays_put() {
        let mut cycle = FrameCycle::new(24.0, 0, 0, true);
        assert_eq!(cycle.advance(1.0), 0);
    }

    #[test]
    fn unknown_clip_is_ignored() {
        let mut anim = AnimSpriteComponent::new(Vec::new(), 100);
        anim.add_clip(Clip::new("walk", 0, 6, true));
        anim.play("jump");
        assert_eq!(anim.playing(), None);
        anim.play("walk");
        assert_eq!(anim.playing(), Some("walk"));
        // no frames loaded, so the clip is empty and never advances
        anim.update(&mut Transform::default(), 1.0);
        assert_eq!(anim.current_frame(), 0);
    }

    #[test]
    fn clips_deserialize() {
        let clip: Clip =
            serde_json::from_str(r#"{"name": "punch", "start": 15, "len": 3, "looping": false}"#)
                .unwrap();
        assert_eq!(clip, Clip::new("punch", 15, 3, false));
    }
}
