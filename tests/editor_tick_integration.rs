//! Editor tick integration tests: keyboard movement, clamping, tools.

use protoplay::components::physics::PhysicsBody;
use protoplay::components::sceneobject::ObjectKind;
use protoplay::loops::editor::{EditorLoop, ObjectSpec, default_scene};
use protoplay::resources::gameconfig::SimConfig;

fn playtest(scene: &[ObjectSpec]) -> EditorLoop {
    let mut editor = EditorLoop::new(&SimConfig::new(), scene);
    editor.set_play_mode(true);
    editor
}

fn position(editor: &mut EditorLoop, id: &str) -> (f32, f32, f32) {
    let obj = editor.object(id).unwrap();
    (obj.x, obj.y, obj.z)
}

#[test]
fn held_left_moves_player_one_step_per_tick() {
    let mut editor = playtest(&default_scene());
    editor.press("ArrowLeft");
    editor.tick();
    assert_eq!(position(&mut editor, "1"), (195.0, 300.0, 0.0));
    editor.tick();
    assert_eq!(position(&mut editor, "1"), (190.0, 300.0, 0.0));

    editor.release("ArrowLeft");
    editor.tick();
    assert_eq!(position(&mut editor, "1").0, 190.0);
}

#[test]
fn platform_without_behaviors_does_not_move() {
    let mut editor = playtest(&default_scene());
    editor.press("d");
    editor.tick();
    assert_eq!(position(&mut editor, "2"), (400.0, 400.0, 0.0));
}

#[test]
fn only_first_controllable_object_moves() {
    let scene = vec![
        ObjectSpec::new(ObjectKind::Character, 100.0, 100.0)
            .with_id("a")
            .with_behaviors(["player"]),
        ObjectSpec::new(ObjectKind::Player, 300.0, 300.0).with_id("b"),
    ];
    let mut editor = playtest(&scene);
    editor.press("d");
    editor.tick();
    assert_eq!(position(&mut editor, "a").0, 105.0);
    assert_eq!(position(&mut editor, "b").0, 300.0);
}

#[test]
fn positions_stay_clamped_while_keys_are_held() {
    let mut editor = playtest(&default_scene());
    editor.press("a");
    editor.press("w");
    for _ in 0..200 {
        editor.tick();
        let (x, y, _) = position(&mut editor, "1");
        assert!((0.0..=800.0).contains(&x));
        assert!((0.0..=600.0).contains(&y));
    }
    assert_eq!(position(&mut editor, "1"), (0.0, 0.0, 0.0));

    editor.release("a");
    editor.release("w");
    editor.press("d");
    editor.press("s");
    for _ in 0..300 {
        editor.tick();
    }
    assert_eq!(position(&mut editor, "1"), (800.0, 600.0, 0.0));
}

#[test]
fn vertical_keys_drive_depth_in_3d() {
    let mut editor = playtest(&default_scene());
    editor.set_3d(true);
    editor.press("ArrowUp");
    editor.tick();
    assert_eq!(position(&mut editor, "1"), (200.0, 300.0, -5.0));

    for _ in 0..100 {
        editor.tick();
    }
    assert_eq!(position(&mut editor, "1").2, -200.0);
}

#[test]
fn space_lifts_jumping_player() {
    let mut editor = playtest(&default_scene());
    editor.press(" ");
    editor.tick();
    assert_eq!(position(&mut editor, "1").1, 290.0);
}

#[test]
fn leaving_play_mode_drops_held_keys() {
    let mut editor = playtest(&default_scene());
    editor.press("d");
    editor.tick();
    editor.set_play_mode(false);
    editor.set_play_mode(true);
    editor.tick();
    assert_eq!(position(&mut editor, "1").0, 205.0);
}

#[test]
fn generated_ids_and_physics_sanitizing() {
    let mut editor = EditorLoop::new(&SimConfig::new(), &[]);
    let spec = ObjectSpec::new(ObjectKind::Enemy, 10.0, 10.0)
        .with_physics(PhysicsBody::new(-4.0, 2.0, true, true));
    let id = editor.add_object(spec).unwrap();
    assert!(id.starts_with("obj-"));
    let obj = editor.object(&id).unwrap();
    assert!(obj.physics.mass >= 0.1);
    assert!(obj.physics.friction <= 1.0);
}

#[test]
fn zoom_scales_drag_deltas() {
    let mut editor = EditorLoop::new(&SimConfig::new(), &default_scene());
    editor.zoom(-1.0);
    let zoom = editor.camera_zoom();
    assert!(zoom > 1.0);
    editor.begin_drag("2");
    editor.drag_to(10.0 * zoom, 0.0);
    editor.end_drag();
    let (x, _, _) = position(&mut editor, "2");
    assert!((x - 410.0).abs() < 1e-3);
}
