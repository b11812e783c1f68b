//! Editor tool events.
//!
//! Tool operations (selection, free-drag, zoom) are triggered on the editor
//! world and handled by the observers in [`crate::systems::editortools`].
//! They are ignored while play mode is on.

use bevy_ecs::prelude::*;

/// Select the object with the given id, or clear the selection with `None`.
#[derive(Event, Debug, Clone)]
pub struct SelectObjectEvent {
    pub id: Option<String>,
}

/// Start dragging the object with the given id from its current position.
#[derive(Event, Debug, Clone)]
pub struct DragStartEvent {
    pub id: String,
}

/// Pointer moved during a drag. Deltas are screen pixels measured from the
/// point where the drag started.
#[derive(Event, Debug, Clone, Copy)]
pub struct DragMoveEvent {
    pub dx: f32,
    pub dy: f32,
}

/// Pointer released.
#[derive(Event, Debug, Clone, Copy)]
pub struct DragEndEvent;

/// Mouse wheel over the canvas.
#[derive(Event, Debug, Clone, Copy)]
pub struct ZoomEvent {
    pub wheel_delta: f32,
}
