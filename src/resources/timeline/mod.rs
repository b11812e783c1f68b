//! Keyframe timeline resource.
//!
//! [`Timeline`] owns the animation tracks, the playhead and the keyframe
//! selection. Playback is driven one frame at a time by
//! [`timeline_playback`](crate::systems::timeline::timeline_playback); every
//! other operation is a direct method call.
//!
//! The playhead is derived from a play origin plus a frame counter rather than
//! accumulated, so a playback of duration D at F frames per second always
//! reaches D within ⌈D·F⌉ frames.

pub mod keyframe;
pub mod track;

use bevy_ecs::prelude::Resource;
use log::{debug, info};
use std::time::Duration;

pub use keyframe::{Easing, Keyframe, KeyframeId, ease, lerp_f32};
pub use track::AnimationTrack;

pub const MIN_FPS: u32 = 1;
pub const MAX_FPS: u32 = 240;
pub const MIN_DURATION: f32 = 0.1;
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;
/// Pixels per second of timeline at zoom 1.
pub const PIXELS_PER_SECOND: f32 = 100.0;
pub const DEFAULT_DURATION: f32 = 10.0;
pub const DEFAULT_FPS: u32 = 60;

/// Sampled value of one track at the playhead.
#[derive(Clone, Debug, PartialEq)]
pub struct TrackSample {
    pub track_id: String,
    pub property: String,
    pub value: Option<f32>,
}

#[derive(Resource, Clone, Debug)]
pub struct Timeline {
    tracks: Vec<AnimationTrack>,
    current_time: f32,
    duration: f32,
    fps: u32,
    zoom: f32,
    playing: bool,
    selected: Vec<KeyframeId>,
    next_keyframe_id: u64,
    next_track_seq: u64,
    play_origin: f32,
    frames_played: u64,
}

impl Default for Timeline {
    fn default() -> Self {
        Timeline::new(DEFAULT_DURATION, DEFAULT_FPS)
    }
}

impl Timeline {
    /// Empty timeline. Duration and fps are clamped to their valid ranges.
    pub fn new(duration: f32, fps: u32) -> Self {
        Timeline {
            tracks: Vec::new(),
            current_time: 0.0,
            duration: clamp_duration(duration),
            fps: fps.clamp(MIN_FPS, MAX_FPS),
            zoom: 1.0,
            playing: false,
            selected: Vec::new(),
            next_keyframe_id: 1,
            next_track_seq: 1,
            play_origin: 0.0,
            frames_played: 0,
        }
    }

    /// Timeline seeded with the four starter tracks.
    pub fn with_default_tracks(duration: f32, fps: u32) -> Self {
        let mut tl = Timeline::new(duration, fps);
        let mut id = 0u64;
        let mut next = || {
            id += 1;
            id
        };
        let pos_x = AnimationTrack::new("track-pos-x", "Position X", "position-x").with_keyframes([
            Keyframe::new(next(), 0.0, 0.0, "position-x", Easing::EaseOut),
            Keyframe::new(next(), 2.0, 100.0, "position-x", Easing::EaseInOut),
            Keyframe::new(next(), 5.0, 200.0, "position-x", Easing::EaseIn),
        ]);
        let pos_y = AnimationTrack::new("track-pos-y", "Position Y", "position-y").with_keyframes([
            Keyframe::new(next(), 1.0, 0.0, "position-y", Easing::Linear),
            Keyframe::new(next(), 3.0, -50.0, "position-y", Easing::EaseOut),
        ]);
        let rotation = AnimationTrack::new("track-rotation", "Rotation", "rotation").with_keyframes([
            Keyframe::new(next(), 0.0, 0.0, "rotation", Easing::Linear),
            Keyframe::new(next(), 4.0, 360.0, "rotation", Easing::Linear),
        ]);
        let scale = AnimationTrack::new("track-scale", "Scale", "scale").with_keyframes([
            Keyframe::new(next(), 0.0, 1.0, "scale", Easing::EaseInOut),
            Keyframe::new(next(), 2.5, 1.5, "scale", Easing::EaseInOut),
            Keyframe::new(next(), 5.0, 1.0, "scale", Easing::EaseInOut),
        ]);
        tl.tracks = vec![pos_x, pos_y, rotation, scale];
        tl.next_keyframe_id = next();
        tl
    }

    // ---- accessors ----

    pub fn tracks(&self) -> &[AnimationTrack] {
        &self.tracks
    }

    pub fn track(&self, id: &str) -> Option<&AnimationTrack> {
        self.tracks.iter().find(|t| t.id == id)
    }

    fn track_mut(&mut self, id: &str) -> Option<&mut AnimationTrack> {
        self.tracks.iter_mut().find(|t| t.id == id)
    }

    fn track_of_mut(&mut self, id: KeyframeId) -> Option<&mut AnimationTrack> {
        self.tracks.iter_mut().find(|t| t.contains(id))
    }

    pub fn keyframe(&self, id: KeyframeId) -> Option<&Keyframe> {
        self.tracks.iter().find_map(|t| t.get(id))
    }

    pub fn current_time(&self) -> f32 {
        self.current_time
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn selected(&self) -> &[KeyframeId] {
        &self.selected
    }

    pub fn is_selected(&self, id: KeyframeId) -> bool {
        self.selected.contains(&id)
    }

    /// Interval between playback frames.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.fps as f64)
    }

    /// Frame index of the playhead.
    pub fn current_frame(&self) -> u64 {
        (self.current_time * self.fps as f32).floor().max(0.0) as u64
    }

    // ---- playback ----

    fn rebase(&mut self) {
        self.play_origin = self.current_time;
        self.frames_played = 0;
    }

    pub fn play(&mut self) {
        if !self.playing {
            self.playing = true;
            self.rebase();
            debug!("timeline playing from {:.3}s", self.current_time);
        }
    }

    pub fn pause(&mut self) {
        if self.playing {
            self.playing = false;
            debug!("timeline paused at {:.3}s", self.current_time);
        }
    }

    /// Stop playback and rewind the playhead to 0.
    pub fn stop(&mut self) {
        self.playing = false;
        self.current_time = 0.0;
        self.rebase();
        info!("timeline stopped");
    }

    pub fn toggle_playback(&mut self) -> bool {
        if self.playing {
            self.pause();
        } else {
            self.play();
        }
        self.playing
    }

    /// Advance the playhead by one frame.
    ///
    /// Reaching the end stops playback and rewinds to 0. Returns true while
    /// playback continues. Does nothing when paused.
    pub fn advance_frame(&mut self) -> bool {
        if !self.playing {
            return false;
        }
        self.frames_played += 1;
        let t = self.play_origin + self.frames_played as f32 / self.fps as f32;
        if t >= self.duration {
            self.playing = false;
            self.current_time = 0.0;
            self.rebase();
            info!("timeline reached end ({:.2}s), rewinding", self.duration);
            false
        } else {
            self.current_time = t;
            true
        }
    }

    pub fn skip_to_start(&mut self) {
        self.current_time = 0.0;
        self.rebase();
    }

    pub fn skip_to_end(&mut self) {
        self.current_time = self.duration;
        self.rebase();
    }

    /// Move the playhead; clamped to [0, duration].
    pub fn scrub(&mut self, time: f32) {
        self.current_time = clamp_time(time, self.duration);
        self.rebase();
    }

    /// Clamped to at least 0.1 s. The playhead is pulled inside the new range.
    pub fn set_duration(&mut self, duration: f32) {
        self.duration = clamp_duration(duration);
        if self.current_time > self.duration {
            self.current_time = self.duration;
        }
        self.rebase();
    }

    pub fn set_fps(&mut self, fps: u32) {
        self.fps = fps.clamp(MIN_FPS, MAX_FPS);
        self.rebase();
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = if zoom.is_nan() {
            1.0
        } else {
            zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        };
    }

    // ---- geometry ----

    /// Width in pixels of the whole timeline.
    pub fn timeline_width(&self) -> f32 {
        self.duration * PIXELS_PER_SECOND * self.zoom
    }

    pub fn time_to_px(&self, time: f32) -> f32 {
        time / self.duration * self.timeline_width()
    }

    /// Pixel offset to time, clamped to [0, duration].
    pub fn px_to_time(&self, px: f32) -> f32 {
        clamp_time(px / self.timeline_width() * self.duration, self.duration)
    }

    // ---- tracks ----

    /// Append a new empty track and return its id.
    pub fn add_track(&mut self) -> String {
        let seq = self.next_track_seq;
        self.next_track_seq += 1;
        let id = format!("track-custom-{}", seq);
        self.tracks
            .push(AnimationTrack::new(id.clone(), format!("New Track {}", seq), "custom"));
        info!("added track {}", id);
        id
    }

    /// Returns the new visibility, or None for an unknown track.
    pub fn toggle_track_visibility(&mut self, track_id: &str) -> Option<bool> {
        let track = self.track_mut(track_id)?;
        track.visible = !track.visible;
        Some(track.visible)
    }

    /// Returns the new lock state, or None for an unknown track.
    pub fn toggle_track_lock(&mut self, track_id: &str) -> Option<bool> {
        let track = self.track_mut(track_id)?;
        track.locked = !track.locked;
        Some(track.locked)
    }

    // ---- keyframes ----

    /// Insert a keyframe with value 0 and ease-in-out at `time`.
    ///
    /// Time is clamped into [0, duration]. Returns None when the track is
    /// unknown or locked.
    pub fn add_keyframe(&mut self, track_id: &str, time: f32) -> Option<KeyframeId> {
        let time = clamp_time(time, self.duration);
        let id = self.next_keyframe_id;
        let track = self.track_mut(track_id)?;
        if track.locked {
            debug!("track {} is locked, keyframe rejected", track_id);
            return None;
        }
        let property = track.property.clone();
        track.insert(Keyframe::new(id, time, 0.0, &property, Easing::default()));
        self.next_keyframe_id += 1;
        debug!("keyframe {} added to {} at {:.3}s", id, track_id, time);
        Some(KeyframeId(id))
    }

    /// Insert a keyframe at a horizontal pixel offset in the track lane.
    pub fn add_keyframe_at_px(&mut self, track_id: &str, px: f32) -> Option<KeyframeId> {
        let time = self.px_to_time(px);
        self.add_keyframe(track_id, time)
    }

    /// Single select replaces the selection. Multi select toggles membership.
    pub fn select_keyframe(&mut self, id: KeyframeId, multi: bool) {
        if multi {
            if let Some(pos) = self.selected.iter().position(|s| *s == id) {
                self.selected.remove(pos);
            } else {
                self.selected.push(id);
            }
        } else {
            self.selected.clear();
            self.selected.push(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    pub fn delete_keyframe(&mut self, id: KeyframeId) -> bool {
        let removed = self
            .track_of_mut(id)
            .and_then(|t| t.remove(id))
            .is_some();
        self.selected.retain(|s| *s != id);
        removed
    }

    /// Delete every selected keyframe and clear the selection.
    pub fn delete_selected(&mut self) -> usize {
        let ids = std::mem::take(&mut self.selected);
        let mut count = 0;
        for id in ids {
            if self.delete_keyframe(id) {
                count += 1;
            }
        }
        if count > 0 {
            info!("deleted {} keyframe(s)", count);
        }
        count
    }

    /// Returns false for unknown keyframes, locked tracks or non-finite values.
    pub fn set_keyframe_value(&mut self, id: KeyframeId, value: f32) -> bool {
        if !value.is_finite() {
            return false;
        }
        match self.track_of_mut(id) {
            Some(track) if !track.locked => match track.get_mut(id) {
                Some(kf) => {
                    kf.value = value;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    pub fn set_keyframe_easing(&mut self, id: KeyframeId, easing: Easing) -> bool {
        match self.track_of_mut(id) {
            Some(track) if !track.locked => match track.get_mut(id) {
                Some(kf) => {
                    kf.easing = easing;
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Move a keyframe in time, clamped to [0, duration], and re-sort its track.
    pub fn move_keyframe(&mut self, id: KeyframeId, time: f32) -> bool {
        let time = clamp_time(time, self.duration);
        match self.track_of_mut(id) {
            Some(track) if !track.locked => {
                let Some(kf) = track.get_mut(id) else {
                    return false;
                };
                kf.time = time;
                track.sort();
                true
            }
            _ => false,
        }
    }

    // ---- sampling ----

    pub fn sample(&self, track_id: &str, time: f32) -> Option<f32> {
        self.track(track_id).and_then(|t| t.sample(time))
    }

    /// Sample every track at the playhead.
    pub fn sample_all(&self) -> Vec<TrackSample> {
        self.tracks
            .iter()
            .map(|t| TrackSample {
                track_id: t.id.clone(),
                property: t.property.clone(),
                value: t.sample(self.current_time),
            })
            .collect()
    }
}

fn clamp_duration(duration: f32) -> f32 {
    if duration.is_nan() {
        DEFAULT_DURATION
    } else {
        duration.max(MIN_DURATION)
    }
}

fn clamp_time(time: f32, duration: f32) -> f32 {
    if time.is_nan() {
        0.0
    } else {
        time.clamp(0.0, duration)
    }
}
