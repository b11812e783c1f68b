//! Transient user-facing notices.
//!
//! Loops never touch presentation state directly. They emit [`Notice`]
//! messages, which the [`Studio`](crate::studio::Studio) drains into its
//! [`NotificationCenter`](crate::resources::notifications::NotificationCenter).

use bevy_ecs::message::Message;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
}

#[derive(Message, Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub text: String,
    pub level: NoticeLevel,
    /// Seconds the notice stays visible.
    pub lifetime: f32,
}

impl Notice {
    pub fn new(text: impl Into<String>, level: NoticeLevel, lifetime: f32) -> Self {
        Notice {
            text: text.into(),
            level,
            lifetime,
        }
    }
}
