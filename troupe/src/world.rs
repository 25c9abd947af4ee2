//! # World
//!
//! The world owns every actor and runs their lifecycle. Actors created while the world is iterating (a ship firing a laser, say) can't join the actor list mid-pass, so they wait in a pending queue and are promoted once the update pass is over. Actors marked dead are swept out at the end of the same update, along with their entries in the draw list.

use std::collections::HashMap;

use crate::{
    actor::{Actor, ActorId, ActorState, Role, Spawner},
    component::{Component, ComponentKey},
    draw_order::DrawList,
    input::InputState,
};

pub struct World<R> {
    actors: Vec<Actor<R>>,
    /// Position of each live actor in `actors`.
    index: HashMap<ActorId, usize>,
    pending: Vec<Actor<R>>,
    sprites: DrawList,
    next_id: u32,
}

impl<R: Role> Default for World<R> {
    fn default() -> Self {
        Self {
            actors: Vec::new(),
            index: HashMap::new(),
            pending: Vec::new(),
            sprites: DrawList::new(),
            next_id: 0,
        }
    }
}

impl<R: Role> World<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an actor straight into the world. Its drawable components join the draw list right away.
    pub fn add_actor(&mut self, mut actor: Actor<R>) -> ActorId {
        let id = self.assign_id(&mut actor);
        self.register(actor);
        id
    }

    /// Attaches a component to an actor already in the world, pending or not. A drawable component joins the draw list as soon as its actor is in the actor list.
    pub fn add_component<C: Component>(
        &mut self,
        id: ActorId,
        component: C,
    ) -> Option<ComponentKey> {
        let order = component.draw_order();
        if let Some(actor) = self.get_mut(id) {
            let key = actor.body.add_component(component);
            if let Some(order) = order {
                self.sprites.insert(order, id, key);
            }
            return Some(key);
        }
        // pending actors register their sprites on promotion
        self.pending
            .iter_mut()
            .find(|actor| actor.id == Some(id))
            .map(|actor| actor.body.add_component(component))
    }

    /// Hands input to every active actor. Anything spawned waits in the pending queue until the next [World::update].
    pub fn process_input(&mut self, input: &InputState) {
        let mut spawner = Spawner::new();
        for actor in self.actors.iter_mut() {
            actor.process_input(input, &mut spawner);
        }
        self.enqueue(&mut spawner);
    }

    /// Updates every actor, promotes pending actors, then sweeps out the dead.
    pub fn update(&mut self, dt: f32) {
        let mut spawner = Spawner::new();
        for actor in self.actors.iter_mut() {
            actor.update(dt, &mut spawner);
        }
        self.enqueue(&mut spawner);
        self.promote_pending();
        self.sweep_dead();
    }

    /// Draws every registered component, back to front.
    pub fn draw(&self) {
        for entry in self.sprites.iter() {
            if let Some(actor) = self.get(entry.actor) {
                if let Some(component) = actor.body.slot(entry.key) {
                    component.draw(&actor.body.transform);
                }
            }
        }
    }

    pub fn get(&self, id: ActorId) -> Option<&Actor<R>> {
        self.index.get(&id).and_then(|&idx| self.actors.get(idx))
    }

    pub fn get_mut(&mut self, id: ActorId) -> Option<&mut Actor<R>> {
        let idx = *self.index.get(&id)?;
        self.actors.get_mut(idx)
    }

    /// Marks an actor dead; it goes away at the end of the next update.
    pub fn kill(&mut self, id: ActorId) {
        let target = self
            .actors
            .iter_mut()
            .chain(self.pending.iter_mut())
            .find(|actor| actor.id == Some(id));
        if let Some(actor) = target {
            actor.set_state(ActorState::Dead);
        }
    }

    pub fn actors(&self) -> impl Iterator<Item = &Actor<R>> {
        self.actors.iter()
    }

    pub fn actors_mut(&mut self) -> impl Iterator<Item = &mut Actor<R>> {
        self.actors.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.sprites
    }

    /// Drops every actor, pending or not. Ids keep counting up, so stale ids never alias new actors.
    pub fn unload(&mut self) {
        log::debug!(
            "unloading {} actors ({} pending)",
            self.actors.len(),
            self.pending.len()
        );
        self.actors.clear();
        self.index.clear();
        self.pending.clear();
        self.sprites.clear();
    }

    fn assign_id(&mut self, actor: &mut Actor<R>) -> ActorId {
        let id = ActorId(self.next_id);
        self.next_id += 1;
        actor.id = Some(id);
        id
    }

    fn register(&mut self, actor: Actor<R>) {
        if let Some(id) = actor.id {
            for (order, key) in actor.body.drawables() {
                self.sprites.insert(order, id, key);
            }
            self.index.insert(id, self.actors.len());
        }
        self.actors.push(actor);
    }

    fn enqueue(&mut self, spawner: &mut Spawner<R>) {
        let spawned: Vec<_> = spawner.drain().collect();
        for mut actor in spawned {
            self.assign_id(&mut actor);
            self.pending.push(actor);
        }
    }

    fn promote_pending(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        log::debug!("promoting {} pending actors", self.pending.len());
        let pending = std::mem::take(&mut self.pending);
        for actor in pending {
            self.register(actor);
        }
    }

    /// Removes dead actors and their draw entries. [World::update] does this on its own; call it directly after killing actors outside an update to have them gone before the next draw.
    pub fn sweep_dead(&mut self) {
        let dead: Vec<ActorId> = self
            .actors
            .iter()
            .filter(|actor| actor.body.is_dead())
            .filter_map(|actor| actor.id)
            .collect();
        if dead.is_empty() {
            return;
        }
        log::debug!("sweeping {} dead actors", dead.len());
        self.actors.retain(|actor| !actor.body.is_dead());
        for id in dead {
            self.sprites.remove_actor(id);
        }
        self.index = self
            .actors
            .iter()
            .enumerate()
            .filter_map(|(idx, actor)| actor.id.map(|id| (id, idx)))
            .collect();
    }
}
