//! Keyframes and easing curves.
//!
//! The easing of a keyframe shapes the segment that *starts* at it, up to the
//! next keyframe on the same track. The curves are the quadratic family:
//!
//! | easing        | f(t)                                   |
//! |---------------|----------------------------------------|
//! | `linear`      | t                                      |
//! | `ease-in`     | t²                                     |
//! | `ease-out`    | t(2 − t)                               |
//! | `ease-in-out` | 2t² for t < ½, otherwise −1 + (4 − 2t)t |
//!
//! All of them map 0 → 0 and 1 → 1 and are monotonic in between, so a sampled
//! value always moves steadily from one keyframe value towards the next.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interpolation shape between two keyframes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Starts slow, accelerates.
    EaseIn,
    /// Starts fast, decelerates.
    EaseOut,
    /// Slow start and end.
    #[default]
    EaseInOut,
}

/// Apply an easing function to a normalized time value.
///
/// The input `t` is clamped to [0.0, 1.0] and transformed according to the
/// easing curve.
pub fn ease(e: Easing, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    match e {
        Easing::Linear => t,
        Easing::EaseIn => t * t,
        Easing::EaseOut => t * (2.0 - t),
        Easing::EaseInOut => {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        }
    }
}

/// Linearly interpolate between two floats.
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Unique keyframe identifier within a timeline.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyframeId(pub u64);

impl fmt::Display for KeyframeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub id: KeyframeId,
    /// Seconds from the start of the timeline.
    pub time: f32,
    pub value: f32,
    /// Name of the animated property, copied from the owning track.
    pub property: String,
    pub easing: Easing,
}

impl Keyframe {
    pub fn new(id: u64, time: f32, value: f32, property: &str, easing: Easing) -> Self {
        Keyframe {
            id: KeyframeId(id),
            time,
            value,
            property: property.to_string(),
            easing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    const ALL: [Easing; 4] = [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn test_ease_endpoints() {
        for e in ALL {
            assert!(approx_eq(ease(e, 0.0), 0.0), "{:?} at 0", e);
            assert!(approx_eq(ease(e, 1.0), 1.0), "{:?} at 1", e);
        }
    }

    #[test]
    fn test_ease_clamps_input() {
        for e in ALL {
            assert!(approx_eq(ease(e, -0.5), 0.0));
            assert!(approx_eq(ease(e, 1.5), 1.0));
        }
    }

    #[test]
    fn test_ease_monotonic() {
        for e in ALL {
            let mut prev = ease(e, 0.0);
            for i in 1..=100 {
                let v = ease(e, i as f32 / 100.0);
                assert!(v >= prev - EPSILON, "{:?} not monotonic at {}", e, i);
                prev = v;
            }
        }
    }

    #[test]
    fn test_ease_shapes() {
        assert!(approx_eq(ease(Easing::Linear, 0.25), 0.25));
        assert!(approx_eq(ease(Easing::EaseIn, 0.5), 0.25));
        assert!(approx_eq(ease(Easing::EaseOut, 0.5), 0.75));
        assert!(approx_eq(ease(Easing::EaseInOut, 0.5), 0.5));
        assert!(ease(Easing::EaseInOut, 0.25) < 0.25);
        assert!(ease(Easing::EaseInOut, 0.75) > 0.75);
    }

    #[test]
    fn test_easing_serde_names() {
        assert_eq!(
            serde_json::to_string(&Easing::EaseInOut).unwrap(),
            "\"ease-in-out\""
        );
        let e: Easing = serde_json::from_str("\"ease-in\"").unwrap();
        assert_eq!(e, Easing::EaseIn);
    }

    #[test]
    fn test_lerp() {
        assert!(approx_eq(lerp_f32(0.0, 10.0, 0.5), 5.0));
        assert!(approx_eq(lerp_f32(10.0, -10.0, 0.25), 5.0));
    }
}
