//! Editor tool observers.
//!
//! Selection, free-drag and camera zoom arrive as events triggered on the
//! editor world. Every observer checks [`EditorMode`] first: tools are inert
//! while play mode is on.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::mapposition::MapPosition;
use crate::components::sceneobject::{SceneObject, Selected};
use crate::events::editor::{
    DragEndEvent, DragMoveEvent, DragStartEvent, SelectObjectEvent, ZoomEvent,
};
use crate::resources::camera2d::EditorCamera;
use crate::resources::editormode::{ActiveDrag, DragState, EditorMode};
use crate::resources::playfield::PlayField;

/// Exclusive selection: at most one object carries [`Selected`].
pub fn observe_select_object(
    trigger: On<SelectObjectEvent>,
    mut commands: Commands,
    mode: Res<EditorMode>,
    objects: Query<(Entity, &SceneObject)>,
    selected: Query<Entity, With<Selected>>,
) {
    if mode.play_mode {
        debug!("select ignored in play mode");
        return;
    }
    for entity in selected.iter() {
        commands.entity(entity).remove::<Selected>();
    }
    let Some(id) = trigger.event().id.as_deref() else {
        return;
    };
    match objects.iter().find(|(_, object)| object.id == id) {
        Some((entity, _)) => {
            commands.entity(entity).insert(Selected);
        }
        None => debug!("select: no object with id {}", id),
    }
}

/// Start a drag and select the dragged object.
pub fn observe_drag_start(
    trigger: On<DragStartEvent>,
    mut commands: Commands,
    mode: Res<EditorMode>,
    mut drag: ResMut<DragState>,
    objects: Query<(Entity, &SceneObject, &MapPosition)>,
    selected: Query<Entity, With<Selected>>,
) {
    if mode.play_mode {
        debug!("drag ignored in play mode");
        return;
    }
    let id = trigger.event().id.as_str();
    let Some((entity, _, position)) = objects.iter().find(|(_, object, _)| object.id == id) else {
        debug!("drag: no object with id {}", id);
        return;
    };
    for other in selected.iter() {
        commands.entity(other).remove::<Selected>();
    }
    commands.entity(entity).insert(Selected);
    drag.active = Some(ActiveDrag {
        entity,
        origin: *position,
    });
}

/// Move the dragged object to its origin plus the pointer delta, scaled by
/// the camera zoom and clamped to the field.
pub fn observe_drag_move(
    trigger: On<DragMoveEvent>,
    drag: Res<DragState>,
    camera: Res<EditorCamera>,
    field: Res<PlayField>,
    mut positions: Query<&mut MapPosition>,
) {
    let Some(active) = drag.active else {
        return;
    };
    let event = trigger.event();
    let (dx, dy) = camera.screen_to_world_delta(event.dx, event.dy);
    if let Ok(mut position) = positions.get_mut(active.entity) {
        let mut next = active.origin;
        next.x += dx;
        next.y += dy;
        next.clamp_to(&field);
        *position = next;
    }
}

pub fn observe_drag_end(_trigger: On<DragEndEvent>, mut drag: ResMut<DragState>) {
    drag.active = None;
}

pub fn observe_zoom(trigger: On<ZoomEvent>, mode: Res<EditorMode>, mut camera: ResMut<EditorCamera>) {
    if mode.play_mode {
        debug!("zoom ignored in play mode");
        return;
    }
    camera.zoom_by_wheel(trigger.event().wheel_delta);
}
