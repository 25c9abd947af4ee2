//! # Actors
//!
//! An actor is a game object: a [Transform], a state saying whether it is live, paused, or dead, a list of [Component]s, and a [Role] carrying whatever the game needs on top. The transform, state, and components live together in a [Body] so that a role can borrow them while the actor is busy running it.

use macroquad::math::Vec2;

use crate::{
    collision::CircleComponent,
    component::{Component, ComponentKey, ComponentSlot},
    input::InputState,
};

/// Identifies an actor within a [crate::World]. Assigned when the actor enters the world.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ActorId(pub(crate) u32);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ActorState {
    /// Takes input, updates, and is drawn.
    Active,
    /// Skipped by input and update, but still drawn.
    Paused,
    /// Removed from the world at the end of the current update.
    Dead,
}

/// Position, uniform scale, and rotation of an actor.
///
/// Rotation is in radians and turns counter-clockwise on screen; screen y grows downward.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Transform {
    pub position: Vec2,
    pub scale: f32,
    pub rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            scale: 1.0,
            rotation: 0.0,
        }
    }
}

impl Transform {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Unit vector the actor is facing.
    pub fn forward(&self) -> Vec2 {
        Vec2::new(self.rotation.cos(), -self.rotation.sin())
    }
}

/// Everything an actor owns apart from its role.
pub struct Body {
    pub state: ActorState,
    pub transform: Transform,
    components: Vec<ComponentSlot>,
    next_key: u32,
}

impl Body {
    pub fn new(transform: Transform) -> Self {
        Self {
            state: ActorState::Active,
            transform,
            components: Vec::new(),
            next_key: 0,
        }
    }

    /// Adds a component, keeping the list sorted by update order. Components with equal orders keep the order they were added in.
    ///
    /// Once an actor is in a world, go through [World::add_component](crate::World::add_component) instead so drawables reach the draw list.
    pub(crate) fn add_component<C: Component>(&mut self, component: C) -> ComponentKey {
        let key = ComponentKey(self.next_key);
        self.next_key += 1;
        let order = component.update_order();
        let idx = self
            .components
            .iter()
            .position(|slot| slot.component.update_order() > order)
            .unwrap_or(self.components.len());
        self.components.insert(
            idx,
            ComponentSlot {
                key,
                component: Box::new(component),
            },
        );
        key
    }

    /// The first component of type `C`, if any.
    pub fn component<C: Component>(&self) -> Option<&C> {
        self.components.iter().find_map(|slot| slot.downcast_ref::<C>())
    }

    pub fn component_mut<C: Component>(&mut self) -> Option<&mut C> {
        self.components
            .iter_mut()
            .find_map(|slot| slot.downcast_mut::<C>())
    }

    /// Every component of type `C`, in update order.
    pub fn components_of<C: Component>(&self) -> impl Iterator<Item = &C> {
        self.components
            .iter()
            .filter_map(|slot| slot.downcast_ref::<C>())
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn is_active(&self) -> bool {
        self.state == ActorState::Active
    }

    pub fn is_dead(&self) -> bool {
        self.state == ActorState::Dead
    }

    /// Whether both bodies carry a circle and the circles overlap.
    pub fn collides_with(&self, other: &Body) -> bool {
        match (
            self.component::<CircleComponent>(),
            other.component::<CircleComponent>(),
        ) {
            (Some(a), Some(b)) => a.intersects(&self.transform, b, &other.transform),
            _ => false,
        }
    }

    pub(crate) fn slot(&self, key: ComponentKey) -> Option<&dyn Component> {
        self.components
            .iter()
            .find(|slot| slot.key == key)
            .map(|slot| &*slot.component)
    }

    /// `(draw order, key)` for every drawable component.
    pub(crate) fn drawables(&self) -> impl Iterator<Item = (i32, ComponentKey)> + '_ {
        self.components
            .iter()
            .filter_map(|slot| slot.component.draw_order().map(|order| (order, slot.key)))
    }

    fn update_components(&mut self, dt: f32) {
        let transform = &mut self.transform;
        for slot in self.components.iter_mut() {
            slot.component.update(transform, dt);
        }
    }

    fn process_component_input(&mut self, input: &InputState) {
        let transform = &self.transform;
        for slot in self.components.iter_mut() {
            slot.component.process_input(transform, input);
        }
    }
}

/// Game-specific behavior layered on top of an actor's components.
pub trait Role: Sized + 'static {
    /// Runs after the actor's components have updated. Only called for active actors.
    fn update_actor(&mut self, _body: &mut Body, _dt: f32, _spawner: &mut Spawner<Self>) {}

    /// Runs after the actor's components have processed input. Only called for active actors.
    fn actor_input(&mut self, _body: &mut Body, _input: &InputState, _spawner: &mut Spawner<Self>) {}
}

/// Collects actors created while the world is busy iterating its own. They join the world's pending queue once the pass is over.
pub struct Spawner<R> {
    spawned: Vec<Actor<R>>,
}

impl<R> Default for Spawner<R> {
    fn default() -> Self {
        Self {
            spawned: Vec::new(),
        }
    }
}

impl<R> Spawner<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, actor: Actor<R>) {
        self.spawned.push(actor);
    }

    pub fn len(&self) -> usize {
        self.spawned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty()
    }

    pub(crate) fn drain(&mut self) -> std::vec::Drain<'_, Actor<R>> {
        self.spawned.drain(..)
    }
}

pub struct Actor<R> {
    pub(crate) id: Option<ActorId>,
    pub body: Body,
    pub role: R,
}

impl<R: Role> Actor<R> {
    pub fn new(transform: Transform, role: R) -> Self {
        Self {
            id: None,
            body: Body::new(transform),
            role,
        }
    }

    /// Adds a component while the actor is still being built, before it joins a world.
    pub fn with<C: Component>(mut self, component: C) -> Self {
        self.body.add_component(component);
        self
    }

    /// `None` until the actor has been added to a world.
    pub fn id(&self) -> Option<ActorId> {
        self.id
    }

    pub fn transform(&self) -> &Transform {
        &self.body.transform
    }

    pub fn state(&self) -> ActorState {
        self.body.state
    }

    pub fn set_state(&mut self, state: ActorState) {
        self.body.state = state;
    }

    pub fn update(&mut self, dt: f32, spawner: &mut Spawner<R>) {
        if !self.body.is_active() {
            return;
        }
        self.body.update_components(dt);
        self.role.update_actor(&mut self.body, dt, spawner);
    }

    pub fn process_input(&mut self, input: &InputState, spawner: &mut Spawner<R>) {
        if !self.body.is_active() {
            return;
        }
        self.body.process_component_input(input);
        self.role.actor_input(&mut self.body, input, spawner);
    }
}
