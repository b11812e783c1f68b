//! Editor interaction state.
//!
//! [`EditorMode`] tells whether the editor is in play (playtest) mode, in
//! which case tool operations are rejected and the tick loop moves the
//! controllable object. [`DragState`] remembers the object and its origin
//! while a free-drag is in progress.

use bevy_ecs::prelude::{Entity, Resource};

use crate::components::mapposition::MapPosition;

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct EditorMode {
    pub play_mode: bool,
}

/// An in-progress free-drag.
#[derive(Clone, Copy, Debug)]
pub struct ActiveDrag {
    pub entity: Entity,
    /// Object position when the drag started.
    pub origin: MapPosition,
}

#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct DragState {
    pub active: Option<ActiveDrag>,
}
