//! Timeline integration tests: playback through the loop, editing, sampling.

use protoplay::loops::timeline::TimelineLoop;
use protoplay::resources::gameconfig::SimConfig;
use protoplay::resources::timeline::Timeline;
use protoplay::resources::timeline::keyframe::Easing;

const EPSILON: f32 = 1e-4;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn ticks_until_stopped(tl: &mut TimelineLoop, limit: u32) -> u32 {
    let mut ticks = 0;
    while tl.is_playing() && ticks < limit {
        tl.tick();
        ticks += 1;
    }
    ticks
}

#[test]
fn playback_reaches_the_end_within_duration_times_fps_ticks() {
    for (duration, fps) in [(1.0, 10), (2.5, 3), (0.1, 60), (10.0, 60), (3.3, 24)] {
        let mut tl = TimelineLoop::with_timeline(Timeline::new(duration, fps));
        tl.timeline_mut().play();
        let ticks = ticks_until_stopped(&mut tl, 10_000);
        let bound = (duration * fps as f32).ceil() as u32;
        assert!(ticks <= bound, "{duration}s at {fps}fps took {ticks} ticks");
        assert!(!tl.is_playing());
        assert_eq!(tl.timeline().current_time(), 0.0);
    }
}

#[test]
fn paused_loop_does_not_advance() {
    let mut tl = TimelineLoop::new(&SimConfig::new());
    for _ in 0..5 {
        tl.tick();
    }
    assert_eq!(tl.timeline().current_time(), 0.0);

    tl.timeline_mut().play();
    for _ in 0..30 {
        tl.tick();
    }
    tl.timeline_mut().pause();
    let at = tl.timeline().current_time();
    assert!(approx_eq(at, 0.5));
    tl.tick();
    assert_eq!(tl.timeline().current_time(), at);
    assert_eq!(tl.timeline().current_frame(), 30);
}

#[test]
fn keyframes_stay_sorted_through_edits() {
    let mut tl = Timeline::with_default_tracks(10.0, 60);
    let a = tl.add_keyframe("track-rotation", 2.0).unwrap();
    let b = tl.add_keyframe("track-rotation", 9.0).unwrap();
    assert!(tl.move_keyframe(a, 8.5));
    assert!(tl.move_keyframe(b, 0.5));
    assert!(tl.move_keyframe(a, 42.0));

    let times: Vec<f32> = tl
        .track("track-rotation")
        .unwrap()
        .keyframes()
        .iter()
        .map(|k| k.time)
        .collect();
    assert_eq!(times, vec![0.0, 0.5, 4.0, 10.0]);
}

#[test]
fn locked_track_rejects_edits_but_not_deletion() {
    let mut tl = Timeline::with_default_tracks(10.0, 60);
    let before = tl.track("track-pos-y").unwrap().keyframes().len();
    let first = tl.track("track-pos-y").unwrap().keyframes()[0].id;

    assert_eq!(tl.toggle_track_lock("track-pos-y"), Some(true));
    assert!(tl.add_keyframe("track-pos-y", 5.0).is_none());
    assert!(!tl.set_keyframe_value(first, 9.0));
    assert!(!tl.set_keyframe_easing(first, Easing::EaseIn));
    assert!(!tl.move_keyframe(first, 2.0));
    assert_eq!(tl.track("track-pos-y").unwrap().keyframes().len(), before);

    tl.select_keyframe(first, false);
    assert_eq!(tl.delete_selected(), 1);
    assert_eq!(tl.track("track-pos-y").unwrap().keyframes().len(), before - 1);

    assert_eq!(tl.toggle_track_lock("track-pos-y"), Some(false));
    assert!(tl.add_keyframe("track-pos-y", 5.0).is_some());
}

#[test]
fn multi_select_and_bulk_delete() {
    let mut tl = Timeline::with_default_tracks(10.0, 60);
    let x = tl.add_keyframe("track-pos-x", 7.0).unwrap();
    let s = tl.add_keyframe("track-scale", 7.0).unwrap();
    tl.select_keyframe(x, true);
    tl.select_keyframe(s, true);
    tl.select_keyframe(x, true);
    assert_eq!(tl.selected(), &[s]);
    tl.select_keyframe(x, true);
    assert_eq!(tl.delete_selected(), 2);
    assert!(tl.selected().is_empty());
    assert!(tl.keyframe(x).is_none());
    assert!(tl.keyframe(s).is_none());
}

#[test]
fn samples_follow_the_playhead() {
    let mut tl = TimelineLoop::new(&SimConfig::new());
    tl.timeline_mut().scrub(2.0);
    let samples = tl.samples();
    let rotation = samples
        .iter()
        .find(|s| s.track_id == "track-rotation")
        .unwrap();
    assert!(approx_eq(rotation.value.unwrap(), 180.0));
    let pos_x = samples.iter().find(|s| s.track_id == "track-pos-x").unwrap();
    assert!(approx_eq(pos_x.value.unwrap(), 100.0));

    // past the last keyframe the last value holds
    tl.timeline_mut().scrub(9.0);
    let scale = tl
        .samples()
        .into_iter()
        .find(|s| s.track_id == "track-scale")
        .unwrap();
    assert!(approx_eq(scale.value.unwrap(), 1.0));
}

#[test]
fn new_tracks_accept_keyframes_from_pixels() {
    let mut tl = Timeline::with_default_tracks(10.0, 60);
    let id = tl.add_track();
    tl.set_zoom(2.0);
    let kf = tl.add_keyframe_at_px(&id, 300.0).unwrap();
    assert!(approx_eq(tl.keyframe(kf).unwrap().time, 1.5));
    assert_eq!(tl.keyframe(kf).unwrap().property, "custom");
}

#[test]
fn snapshot_serializes() {
    let tl = TimelineLoop::new(&SimConfig::new());
    let json = serde_json::to_value(tl.snapshot()).unwrap();
    assert_eq!(json["tracks"].as_array().unwrap().len(), 4);
}
