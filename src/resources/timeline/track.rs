//! Animation tracks.
//!
//! A track animates one property through a time-ordered list of keyframes.
//! Every insertion re-sorts the list with a stable sort, so keyframes sharing
//! a time keep their insertion order.

use serde::Serialize;

use super::keyframe::{Keyframe, KeyframeId, ease, lerp_f32};

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AnimationTrack {
    pub id: String,
    pub name: String,
    /// Property animated by this track, e.g. `position-x`.
    pub property: String,
    pub visible: bool,
    /// Locked tracks reject new keyframes and keyframe edits.
    pub locked: bool,
    keyframes: Vec<Keyframe>,
}

impl AnimationTrack {
    pub fn new(id: impl Into<String>, name: impl Into<String>, property: impl Into<String>) -> Self {
        AnimationTrack {
            id: id.into(),
            name: name.into(),
            property: property.into(),
            visible: true,
            locked: false,
            keyframes: Vec::new(),
        }
    }

    pub fn with_keyframes(mut self, keyframes: impl IntoIterator<Item = Keyframe>) -> Self {
        for kf in keyframes {
            self.insert(kf);
        }
        self
    }

    /// Keyframes in non-decreasing time order.
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Insert without checking the lock and restore time order.
    pub(crate) fn insert(&mut self, keyframe: Keyframe) {
        self.keyframes.push(keyframe);
        self.sort();
    }

    pub(crate) fn remove(&mut self, id: KeyframeId) -> Option<Keyframe> {
        let idx = self.keyframes.iter().position(|k| k.id == id)?;
        Some(self.keyframes.remove(idx))
    }

    pub fn contains(&self, id: KeyframeId) -> bool {
        self.keyframes.iter().any(|k| k.id == id)
    }

    pub fn get(&self, id: KeyframeId) -> Option<&Keyframe> {
        self.keyframes.iter().find(|k| k.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: KeyframeId) -> Option<&mut Keyframe> {
        self.keyframes.iter_mut().find(|k| k.id == id)
    }

    /// Stable sort by time.
    pub(crate) fn sort(&mut self) {
        self.keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
    }

    /// Sample the track at `time`.
    ///
    /// Before the first keyframe the first value holds, after the last one
    /// the last value holds. Between two keyframes the earlier one's easing
    /// shapes the curve. Returns `None` for a track without keyframes.
    pub fn sample(&self, time: f32) -> Option<f32> {
        let first = self.keyframes.first()?;
        let last = self.keyframes.last()?;
        if time <= first.time {
            return Some(first.value);
        }
        if time >= last.time {
            return Some(last.value);
        }
        // first.time < time < last.time, so both neighbours exist.
        let idx = self.keyframes.partition_point(|k| k.time <= time);
        let a = &self.keyframes[idx - 1];
        let b = &self.keyframes[idx];
        let span = b.time - a.time;
        if span <= 0.0 {
            return Some(b.value);
        }
        let t = ease(a.easing, (time - a.time) / span);
        Some(lerp_f32(a.value, b.value, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::timeline::keyframe::Easing;

    fn kf(id: u64, time: f32, value: f32, easing: Easing) -> Keyframe {
        Keyframe::new(id, time, value, "position-x", easing)
    }

    #[test]
    fn test_insert_keeps_time_order_and_ties_stable() {
        let mut track = AnimationTrack::new("t", "T", "position-x");
        track.insert(kf(1, 5.0, 0.0, Easing::Linear));
        track.insert(kf(2, 1.0, 0.0, Easing::Linear));
        track.insert(kf(3, 5.0, 0.0, Easing::Linear));
        track.insert(kf(4, 3.0, 0.0, Easing::Linear));
        let ids: Vec<u64> = track.keyframes().iter().map(|k| k.id.0).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn test_sample_empty() {
        let track = AnimationTrack::new("t", "T", "scale");
        assert_eq!(track.sample(1.0), None);
    }

    #[test]
    fn test_sample_exact_keyframe_times() {
        let track = AnimationTrack::new("t", "T", "position-x").with_keyframes([
            kf(1, 0.0, 0.0, Easing::EaseOut),
            kf(2, 2.0, 100.0, Easing::EaseInOut),
            kf(3, 5.0, 200.0, Easing::EaseIn),
        ]);
        assert_eq!(track.sample(0.0), Some(0.0));
        assert_eq!(track.sample(2.0), Some(100.0));
        assert_eq!(track.sample(5.0), Some(200.0));
    }

    #[test]
    fn test_sample_holds_outside_range() {
        let track = AnimationTrack::new("t", "T", "position-y").with_keyframes([
            kf(1, 1.0, 0.0, Easing::Linear),
            kf(2, 3.0, -50.0, Easing::EaseOut),
        ]);
        assert_eq!(track.sample(0.5), Some(0.0));
        assert_eq!(track.sample(9.0), Some(-50.0));
    }

    #[test]
    fn test_sample_uses_earlier_easing() {
        let linear = AnimationTrack::new("a", "A", "p").with_keyframes([
            kf(1, 0.0, 0.0, Easing::Linear),
            kf(2, 1.0, 100.0, Easing::EaseIn),
        ]);
        let eased = AnimationTrack::new("b", "B", "p").with_keyframes([
            kf(1, 0.0, 0.0, Easing::EaseIn),
            kf(2, 1.0, 100.0, Easing::Linear),
        ]);
        assert!((linear.sample(0.5).unwrap() - 50.0).abs() < 1e-4);
        assert!((eased.sample(0.5).unwrap() - 25.0).abs() < 1e-4);
    }

    #[test]
    fn test_sample_monotonic_towards_next_value() {
        let track = AnimationTrack::new("t", "T", "rotation").with_keyframes([
            kf(1, 0.0, 360.0, Easing::EaseInOut),
            kf(2, 4.0, 0.0, Easing::Linear),
        ]);
        let mut prev = track.sample(0.0).unwrap();
        for i in 1..=40 {
            let v = track.sample(i as f32 * 0.1).unwrap();
            assert!(v <= prev + 1e-4);
            prev = v;
        }
        assert_eq!(prev, 0.0);
    }

    #[test]
    fn test_remove() {
        let mut track = AnimationTrack::new("t", "T", "p")
            .with_keyframes([kf(1, 0.0, 0.0, Easing::Linear), kf(2, 1.0, 1.0, Easing::Linear)]);
        assert!(track.remove(KeyframeId(1)).is_some());
        assert!(track.remove(KeyframeId(1)).is_none());
        assert_eq!(track.keyframes().len(), 1);
    }
}
