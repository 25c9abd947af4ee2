//! # Troupe
//!
//! A troupe is a company of actors, each playing their part on the same stage.
//!
//! Troupe is a small actor/component layer for 2d games on top of macroquad. A [World] owns a flat list of [Actor]s; each actor carries a [Transform], a short list of [Component]s, and a game-specific [Role]. Every frame the world hands input to its actors, updates them, promotes actors that were spawned mid-frame, sweeps out the dead, and draws sprites in draw order.

pub mod actor;
pub mod animation;
pub mod app;
pub mod assets;
pub mod background;
pub mod clock;
pub mod collision;
pub mod component;
pub mod draw_order;
pub mod input;
pub mod movement;
pub mod sprite;
pub mod tuning;
pub mod world;

pub use actor::{Actor, ActorId, ActorState, Body, Role, Spawner, Transform};
pub use animation::{AnimSpriteComponent, Clip, FrameCycle};
pub use app::{run, Game};
pub use assets::Textures;
pub use background::BgSpriteComponent;
pub use clock::FrameClock;
pub use collision::CircleComponent;
pub use component::{Component, ComponentKey};
pub use draw_order::DrawList;
pub use input::InputState;
pub use movement::{InputComponent, MoveComponent, MoveKeys, ScreenWrap};
pub use sprite::SpriteComponent;
pub use world::World;
