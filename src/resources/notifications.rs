//! Notification center.
//!
//! Collects [`Notice`]s drained from the loops (and raised by the studio
//! itself) and expires each one once its lifetime has run out. Expiry counts
//! down like a time-to-live: every [`NotificationCenter::advance`] subtracts
//! the elapsed seconds and drops entries at or below zero.

use serde::Serialize;

use crate::events::notice::Notice;

/// A notice and the seconds it has left.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveNotice {
    pub notice: Notice,
    pub remaining: f32,
}

#[derive(Debug, Default)]
pub struct NotificationCenter {
    active: Vec<ActiveNotice>,
}

impl NotificationCenter {
    pub fn push(&mut self, notice: Notice) {
        log::debug!("Notice: {}", notice.text);
        let remaining = notice.lifetime;
        self.active.push(ActiveNotice { notice, remaining });
    }

    pub fn extend(&mut self, notices: impl IntoIterator<Item = Notice>) {
        for notice in notices {
            self.push(notice);
        }
    }

    /// Count down every notice by `dt` seconds and drop the expired ones.
    pub fn advance(&mut self, dt: f32) {
        for entry in self.active.iter_mut() {
            entry.remaining -= dt;
        }
        self.active.retain(|entry| entry.remaining > 0.0);
    }

    /// Visible notices, oldest first.
    pub fn active(&self) -> &[ActiveNotice] {
        &self.active
    }

    pub fn clear(&mut self) {
        self.active.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::notice::NoticeLevel;

    #[test]
    fn test_notices_expire_individually() {
        let mut center = NotificationCenter::default();
        center.push(Notice::new("short", NoticeLevel::Info, 1.0));
        center.push(Notice::new("long", NoticeLevel::Success, 3.0));

        center.advance(0.5);
        assert_eq!(center.active().len(), 2);

        center.advance(0.5);
        assert_eq!(center.active().len(), 1);
        assert_eq!(center.active()[0].notice.text, "long");

        center.advance(2.0);
        assert!(center.active().is_empty());
    }
}
