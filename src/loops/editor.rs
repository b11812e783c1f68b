//! Editor loop.
//!
//! Owns the editor entity store. In play mode every tick moves the
//! controllable object from the held keys; outside play mode the tick only
//! drains input and the tool operations (select, drag, zoom) are available.

use bevy_ecs::component::Mutable;
use bevy_ecs::prelude::*;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::components::mapposition::MapPosition;
use crate::components::physics::PhysicsBody;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sceneobject::{Behaviors, ObjectKind, SceneObject, Selected};
use crate::components::tint::Tint;
use crate::events::editor::{
    DragEndEvent, DragMoveEvent, DragStartEvent, SelectObjectEvent, ZoomEvent,
};
use crate::resources::camera2d::EditorCamera;
use crate::resources::editormode::{DragState, EditorMode};
use crate::resources::gameconfig::SimConfig;
use crate::resources::input::{InputBindings, InputBridge, InputSender, InputState};
use crate::resources::playfield::PlayField;
use crate::resources::worldtime::WorldTime;
use crate::snapshot::{EditorSnapshot, SceneObjectSnapshot, editor_snapshot};
use crate::systems::editorcontroller::editor_controller;
use crate::systems::editortools::{
    observe_drag_end, observe_drag_move, observe_drag_start, observe_select_object, observe_zoom,
};
use crate::systems::gamestate::editor_in_play_mode;
use crate::systems::input::update_input_state;
use crate::systems::time::update_world_time;

/// Smallest scale an object can be edited down to.
pub const MIN_SCALE: f32 = 0.1;

/// Description of a scene object to place in the editor.
///
/// Used by the template catalog's starter scenes and by asset placement. A
/// missing `id` gets a generated one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ObjectSpec {
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: ObjectKind,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub rotation: f32,
    pub scale: f32,
    pub color: String,
    pub behaviors: Vec<String>,
    pub physics: PhysicsBody,
}

impl Default for ObjectSpec {
    fn default() -> Self {
        ObjectSpec {
            id: None,
            kind: ObjectKind::Other,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            rotation: 0.0,
            scale: 1.0,
            color: "#00D4FF".to_string(),
            behaviors: Vec::new(),
            physics: PhysicsBody::default(),
        }
    }
}

impl ObjectSpec {
    pub fn new(kind: ObjectKind, x: f32, y: f32) -> Self {
        ObjectSpec {
            kind,
            x,
            y,
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_behaviors<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.behaviors = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_depth(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub fn with_physics(mut self, physics: PhysicsBody) -> Self {
        self.physics = physics;
        self
    }
}

/// The scene shown before any template is picked.
pub fn default_scene() -> Vec<ObjectSpec> {
    vec![
        ObjectSpec::new(ObjectKind::Player, 200.0, 300.0)
            .with_id("1")
            .with_behaviors(["jump", "run"]),
        ObjectSpec::new(ObjectKind::Platform, 400.0, 400.0)
            .with_id("2")
            .with_color("#00FF88")
            .with_physics(PhysicsBody::new(10.0, 0.8, false, true)),
    ]
}

pub struct EditorLoop {
    world: World,
    schedule: Schedule,
    input: InputSender,
    interval: Duration,
    next_order: u32,
    next_generated_id: u64,
}

impl EditorLoop {
    /// Build a fresh editor store holding `scene`.
    pub fn new(config: &SimConfig, scene: &[ObjectSpec]) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(config.play_field());
        world.insert_resource(config.clone());
        world.insert_resource(InputState::default());
        world.insert_resource(InputBindings::default());
        let bridge = InputBridge::default();
        let input = bridge.sender();
        world.insert_resource(bridge);
        world.insert_resource(EditorMode::default());
        world.insert_resource(DragState::default());
        world.insert_resource(EditorCamera::default());

        world.add_observer(observe_select_object);
        world.add_observer(observe_drag_start);
        world.add_observer(observe_drag_move);
        world.add_observer(observe_drag_end);
        world.add_observer(observe_zoom);
        world.flush();

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                update_input_state,
                editor_controller.run_if(editor_in_play_mode),
            )
                .chain(),
        );

        let mut editor = EditorLoop {
            world,
            schedule,
            input,
            interval: config.editor_interval(),
            next_order: 0,
            next_generated_id: 1,
        };
        for spec in scene {
            editor.add_object(spec.clone());
        }
        editor
    }

    /// Run one tick.
    pub fn tick(&mut self) {
        update_world_time(&mut self.world, self.interval.as_secs_f32());
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    pub fn tick_interval(&self) -> Duration {
        self.interval
    }

    /// Sending half of the input bridge, for presentation code.
    pub fn input(&self) -> InputSender {
        self.input.clone()
    }

    pub fn press(&self, key: &str) {
        self.input.press(key);
    }

    pub fn release(&self, key: &str) {
        self.input.release(key);
    }

    // ---- mode ----

    pub fn play_mode(&self) -> bool {
        self.world.resource::<EditorMode>().play_mode
    }

    /// Switch play mode. Entering play mode ends any drag; leaving it drops
    /// every held key, including key events still queued on the bridge.
    pub fn set_play_mode(&mut self, on: bool) {
        self.world.resource_mut::<EditorMode>().play_mode = on;
        if on {
            self.world.resource_mut::<DragState>().active = None;
        } else {
            let dropped = self.world.resource::<InputBridge>().pending().count();
            if dropped > 0 {
                debug!("dropped {} queued key event(s)", dropped);
            }
            self.world.resource_mut::<InputState>().clear();
        }
        info!("editor play mode {}", if on { "on" } else { "off" });
    }

    pub fn is_3d(&self) -> bool {
        self.world.resource::<PlayField>().is_3d
    }

    /// Switch between 2-D and 3-D. Existing positions are re-clamped, which
    /// pulls stored depths into range when entering 3-D.
    pub fn set_3d(&mut self, is_3d: bool) {
        let field = self.world.resource::<PlayField>().with_3d(is_3d);
        self.world.insert_resource(field);
        let mut query = self.world.query::<&mut MapPosition>();
        for mut position in query.iter_mut(&mut self.world) {
            position.clamp_to(&field);
        }
        info!("editor switched to {}", if is_3d { "3D" } else { "2D" });
    }

    // ---- store ----

    fn find(&mut self, id: &str) -> Option<Entity> {
        self.world
            .query::<(Entity, &SceneObject)>()
            .iter(&self.world)
            .find(|(_, object)| object.id == id)
            .map(|(entity, _)| entity)
    }

    /// Add an object. Its position is clamped to the field. Returns the id,
    /// or None when the id is already taken.
    pub fn add_object(&mut self, spec: ObjectSpec) -> Option<String> {
        let id = match spec.id {
            Some(id) => id,
            None => loop {
                let candidate = format!("obj-{}", self.next_generated_id);
                self.next_generated_id += 1;
                if self.find(&candidate).is_none() {
                    break candidate;
                }
            },
        };
        if self.find(&id).is_some() {
            debug!("add_object: id {} already in use", id);
            return None;
        }
        let field = *self.world.resource::<PlayField>();
        let mut position = MapPosition::new(spec.x, spec.y).with_depth(spec.z);
        position.clamp_to(&field);
        let mut physics = spec.physics;
        physics.sanitize();
        let order = self.next_order;
        self.next_order += 1;
        self.world.spawn((
            SceneObject::new(id.clone(), spec.kind, order),
            position,
            Rotation::new(spec.rotation),
            Scale::new(spec.scale.max(MIN_SCALE)),
            Tint::new(spec.color),
            Behaviors::from_tags(spec.behaviors),
            physics,
        ));
        debug!("added object {} ({:?})", id, spec.kind);
        Some(id)
    }

    /// Explicit removal, the only way an editor object leaves the store.
    pub fn remove_object(&mut self, id: &str) -> bool {
        let Some(entity) = self.find(id) else {
            return false;
        };
        let mut drag = self.world.resource_mut::<DragState>();
        if drag.active.is_some_and(|d| d.entity == entity) {
            drag.active = None;
        }
        self.world.despawn(entity)
    }

    pub fn object_count(&mut self) -> usize {
        self.world.query::<&SceneObject>().iter(&self.world).count()
    }

    fn edit<C: Component<Mutability = Mutable>>(
        &mut self,
        id: &str,
        f: impl FnOnce(&mut C),
    ) -> bool {
        let Some(entity) = self.find(id) else {
            return false;
        };
        match self.world.get_mut::<C>(entity) {
            Some(mut component) => {
                f(&mut *component);
                true
            }
            None => false,
        }
    }

    /// Move an object; `z` is kept when `None`. Clamped to the field.
    pub fn set_position(&mut self, id: &str, x: f32, y: f32, z: Option<f32>) -> bool {
        if !x.is_finite() || !y.is_finite() || z.is_some_and(|z| !z.is_finite()) {
            return false;
        }
        let field = *self.world.resource::<PlayField>();
        self.edit::<MapPosition>(id, |position| {
            position.x = x;
            position.y = y;
            if let Some(z) = z {
                position.z = z;
            }
            position.clamp_to(&field);
        })
    }

    pub fn set_rotation(&mut self, id: &str, degrees: f32) -> bool {
        degrees.is_finite() && self.edit::<Rotation>(id, |r| r.degrees = degrees)
    }

    pub fn set_scale(&mut self, id: &str, factor: f32) -> bool {
        factor.is_finite() && self.edit::<Scale>(id, |s| s.factor = factor.max(MIN_SCALE))
    }

    pub fn set_color(&mut self, id: &str, color: &str) -> bool {
        self.edit::<Tint>(id, |t| t.color = color.to_string())
    }

    pub fn set_mass(&mut self, id: &str, mass: f32) -> bool {
        self.edit::<PhysicsBody>(id, |p| p.set_mass(mass))
    }

    pub fn set_friction(&mut self, id: &str, friction: f32) -> bool {
        self.edit::<PhysicsBody>(id, |p| p.set_friction(friction))
    }

    pub fn set_gravity(&mut self, id: &str, gravity: bool) -> bool {
        self.edit::<PhysicsBody>(id, |p| p.gravity = gravity)
    }

    pub fn set_collision(&mut self, id: &str, collision: bool) -> bool {
        self.edit::<PhysicsBody>(id, |p| p.collision = collision)
    }

    /// Toggle a behavior tag. Returns whether the tag is now present.
    pub fn toggle_behavior(&mut self, id: &str, tag: &str) -> Option<bool> {
        let mut present = None;
        self.edit::<Behaviors>(id, |b| present = Some(b.toggle(tag)));
        present
    }

    // ---- tools ----

    pub fn select(&mut self, id: Option<&str>) {
        self.world.trigger(SelectObjectEvent {
            id: id.map(str::to_string),
        });
        self.world.flush();
    }

    pub fn selected_id(&mut self) -> Option<String> {
        self.world
            .query_filtered::<&SceneObject, With<Selected>>()
            .iter(&self.world)
            .next()
            .map(|object| object.id.clone())
    }

    pub fn begin_drag(&mut self, id: &str) {
        self.world.trigger(DragStartEvent { id: id.to_string() });
        self.world.flush();
    }

    /// Pointer delta in screen pixels since the drag started.
    pub fn drag_to(&mut self, dx: f32, dy: f32) {
        self.world.trigger(DragMoveEvent { dx, dy });
    }

    pub fn end_drag(&mut self) {
        self.world.trigger(DragEndEvent);
    }

    pub fn zoom(&mut self, wheel_delta: f32) {
        self.world.trigger(ZoomEvent { wheel_delta });
    }

    pub fn camera_zoom(&self) -> f32 {
        self.world.resource::<EditorCamera>().zoom
    }

    // ---- output ----

    pub fn snapshot(&mut self) -> EditorSnapshot {
        editor_snapshot(&mut self.world)
    }

    pub fn object(&mut self, id: &str) -> Option<SceneObjectSnapshot> {
        self.snapshot().objects.into_iter().find(|o| o.id == id)
    }
}
