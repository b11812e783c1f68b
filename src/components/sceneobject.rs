//! Editor scene object identity, type tag and behaviour tags.
//!
//! A scene object entity is made of a [`SceneObject`] plus
//! [`MapPosition`](super::mapposition::MapPosition),
//! [`Rotation`](super::rotation::Rotation), [`Scale`](super::scale::Scale),
//! [`Tint`](super::tint::Tint), [`Behaviors`] and
//! [`PhysicsBody`](super::physics::PhysicsBody). The editor selection is a
//! [`Selected`] marker on at most one of them.

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Discrete type tag of a scene object.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectKind {
    Player,
    Enemy,
    Platform,
    Character,
    #[serde(rename = "3d-model")]
    Model3d,
    Environment,
    #[default]
    #[serde(other)]
    Other,
}

/// Identity of a scene object inside the editor store.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct SceneObject {
    /// Stable, unique identifier supplied by the template or asset placement.
    pub id: String,
    pub kind: ObjectKind,
    /// Insertion order; the store is iterated in this order.
    pub order: u32,
}

impl SceneObject {
    pub fn new(id: impl Into<String>, kind: ObjectKind, order: u32) -> Self {
        SceneObject {
            id: id.into(),
            kind,
            order,
        }
    }
}

/// Behaviour tags attached to a scene object (`"jump"`, `"shoot"`, ...).
///
/// Tags are kept unique; their order carries no meaning.
#[derive(Component, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Behaviors(pub SmallVec<[String; 4]>);

impl Behaviors {
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut b = Behaviors::default();
        for tag in tags {
            b.insert(tag);
        }
        b
    }

    pub fn has(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Add a tag. Returns false if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.has(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    /// Remove a tag. Returns false if it was not present.
    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|t| t.as_str() != tag);
        self.0.len() != before
    }

    /// Flip a tag on or off. Returns whether the tag is present afterwards.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.remove(tag) {
            false
        } else {
            self.insert(tag);
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Marker for the single selected scene object.
#[derive(Component, Clone, Copy, Debug)]
pub struct Selected;

/// True when this object is eligible to receive player input.
pub fn is_controllable(object: &SceneObject, behaviors: &Behaviors) -> bool {
    object.kind == ObjectKind::Player || behaviors.has("player")
}
