//! Read-only views handed to the presentation layer.
//!
//! Each loop builds one of these after a tick. They own their data, derive
//! `Serialize` for the headless binary's `--json` output and never reference
//! the ECS world they came from.

use bevy_ecs::prelude::*;
use bevy_ecs::query::Has;
use serde::Serialize;

use crate::components::actor::{Actor, ActorKind};
use crate::components::fieldposition::FieldPosition;
use crate::components::mapposition::MapPosition;
use crate::components::physics::PhysicsBody;
use crate::components::player::MiniPlayer;
use crate::components::rotation::Rotation;
use crate::components::scale::Scale;
use crate::components::sceneobject::{Behaviors, ObjectKind, SceneObject, Selected};
use crate::components::tint::Tint;
use crate::resources::camera2d::EditorCamera;
use crate::resources::editormode::EditorMode;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::playfield::PlayField;
use crate::resources::session::{AuxState, GameType, Session};
use crate::resources::timeline::{KeyframeId, Timeline};
use crate::resources::worldtime::WorldTime;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneObjectSnapshot {
    pub id: String,
    pub kind: ObjectKind,
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub rotation: f32,
    pub scale: f32,
    pub color: String,
    pub behaviors: Vec<String>,
    pub physics: PhysicsBody,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditorSnapshot {
    pub tick: u64,
    pub play_mode: bool,
    pub field: PlayField,
    pub zoom: f32,
    /// Objects in scene order.
    pub objects: Vec<SceneObjectSnapshot>,
}

impl EditorSnapshot {
    pub fn object(&self, id: &str) -> Option<&SceneObjectSnapshot> {
        self.objects.iter().find(|o| o.id == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ActorSnapshot {
    pub id: u64,
    pub kind: ActorKind,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub tick: u64,
    pub state: GameStates,
    pub game_type: GameType,
    pub score: u32,
    pub lives: u32,
    pub game_speed: f32,
    pub aux: AuxState,
    pub sound_enabled: bool,
    pub player: FieldPosition,
    /// Actors ordered by id.
    pub actors: Vec<ActorSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackSnapshot {
    pub id: String,
    pub name: String,
    pub property: String,
    pub visible: bool,
    pub locked: bool,
    pub keyframes: usize,
    /// Sampled value at the playhead; `None` for an empty track.
    pub value: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSnapshot {
    pub current_time: f32,
    pub current_frame: u64,
    pub duration: f32,
    pub fps: u32,
    pub zoom: f32,
    pub playing: bool,
    pub selected: Vec<KeyframeId>,
    pub tracks: Vec<TrackSnapshot>,
}

pub fn editor_snapshot(world: &mut World) -> EditorSnapshot {
    let mut objects: Vec<(u32, SceneObjectSnapshot)> = world
        .query::<(
            &SceneObject,
            &MapPosition,
            Option<&Rotation>,
            Option<&Scale>,
            Option<&Tint>,
            Option<&Behaviors>,
            Option<&PhysicsBody>,
            Has<Selected>,
        )>()
        .iter(world)
        .map(
            |(object, position, rotation, scale, tint, behaviors, physics, selected)| {
                (
                    object.order,
                    SceneObjectSnapshot {
                        id: object.id.clone(),
                        kind: object.kind,
                        x: position.x,
                        y: position.y,
                        z: position.z,
                        rotation: rotation.map(|r| r.degrees).unwrap_or(0.0),
                        scale: scale.map(|s| s.factor).unwrap_or(1.0),
                        color: tint.cloned().unwrap_or_default().color,
                        behaviors: behaviors
                            .map(|b| b.iter().map(str::to_string).collect())
                            .unwrap_or_default(),
                        physics: physics.copied().unwrap_or_default(),
                        selected,
                    },
                )
            },
        )
        .collect();
    objects.sort_by_key(|(order, _)| *order);

    EditorSnapshot {
        tick: world.resource::<WorldTime>().frame_count,
        play_mode: world.resource::<EditorMode>().play_mode,
        field: *world.resource::<PlayField>(),
        zoom: world.resource::<EditorCamera>().zoom,
        objects: objects.into_iter().map(|(_, o)| o).collect(),
    }
}

pub fn game_snapshot(world: &mut World) -> GameSnapshot {
    let player = world
        .query_filtered::<&FieldPosition, With<MiniPlayer>>()
        .iter(world)
        .next()
        .copied()
        .unwrap_or_default();
    let mut actors: Vec<ActorSnapshot> = world
        .query::<(&Actor, &FieldPosition)>()
        .iter(world)
        .map(|(actor, position)| ActorSnapshot {
            id: actor.id,
            kind: actor.kind,
            x: position.x,
            y: position.y,
        })
        .collect();
    actors.sort_by_key(|a| a.id);

    let session = world.resource::<Session>();
    GameSnapshot {
        tick: world.resource::<WorldTime>().frame_count,
        state: world.resource::<GameState>().get(),
        game_type: session.game_type,
        score: session.score,
        lives: session.lives,
        game_speed: session.game_speed,
        aux: session.aux.clone(),
        sound_enabled: session.sound_enabled,
        player,
        actors,
    }
}

pub fn timeline_snapshot(timeline: &Timeline) -> TimelineSnapshot {
    let time = timeline.current_time();
    TimelineSnapshot {
        current_time: time,
        current_frame: timeline.current_frame(),
        duration: timeline.duration(),
        fps: timeline.fps(),
        zoom: timeline.zoom(),
        playing: timeline.is_playing(),
        selected: timeline.selected().to_vec(),
        tracks: timeline
            .tracks()
            .iter()
            .map(|t| TrackSnapshot {
                id: t.id.clone(),
                name: t.name.clone(),
                property: t.property.clone(),
                visible: t.visible,
                locked: t.locked,
                keyframes: t.keyframes().len(),
                value: t.sample(time),
            })
            .collect(),
    }
}
