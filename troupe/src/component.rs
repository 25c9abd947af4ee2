//! # Components
//!
//! Components are small behaviors attached to an actor: moving it, drawing it, reading the keyboard for it, giving it a collision circle. An actor runs its components in ascending update order every frame, and the world draws the drawable ones in ascending draw order.

use std::any::Any;

use crate::{actor::Transform, input::InputState};

/// Identifies a component within the body that owns it. Keys are handed out in insertion order and never reused within a body.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ComponentKey(pub(crate) u32);

/// Lets a boxed component be downcast back to its concrete type.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

/// A behavior attached to an actor. Every hook has a do-nothing default, so a component only overrides what it cares about.
pub trait Component: AsAny + 'static {
    /// Lower orders update first.
    fn update_order(&self) -> i32 {
        100
    }

    fn update(&mut self, _owner: &mut Transform, _dt: f32) {}

    fn process_input(&mut self, _owner: &Transform, _input: &InputState) {}

    /// `Some` if the world should draw this component, and where in the draw order it goes.
    fn draw_order(&self) -> Option<i32> {
        None
    }

    fn draw(&self, _owner: &Transform) {}
}

/// A component as stored on a body.
pub(crate) struct ComponentSlot {
    pub(crate) key: ComponentKey,
    pub(crate) component: Box<dyn Component>,
}

impl ComponentSlot {
    pub(crate) fn downcast_ref<C: Component>(&self) -> Option<&C> {
        (*self.component).as_any().downcast_ref::<C>()
    }

    pub(crate) fn downcast_mut<C: Component>(&mut self) -> Option<&mut C> {
        (*self.component).as_any_mut().downcast_mut::<C>()
    }
}
