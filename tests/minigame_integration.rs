//! Mini-game integration tests: movement sweep, scoring, lives and game over.

use protoplay::components::actor::ActorKind;
use protoplay::events::audio::AudioCue;
use protoplay::loops::minigame::MiniGameLoop;
use protoplay::resources::gameconfig::SimConfig;
use protoplay::resources::gamestate::GameStates;
use protoplay::resources::session::{AuxState, GameType};

fn quiet_config(lives: u32) -> SimConfig {
    let mut config = SimConfig::new().with_seed(7);
    config.spawn_rate = 0.0;
    config.speed_increment = 0.0;
    config.lives = lives;
    config
}

fn game(game_type: GameType, lives: u32) -> MiniGameLoop {
    MiniGameLoop::new(game_type, &quiet_config(lives))
}

// =============================================================================
// Movement and off-field sweep
// =============================================================================

#[test]
fn enemy_leaving_the_bottom_is_removed_without_penalty() {
    let mut game = game(GameType::Shooting, 3);
    game.spawn_actor(ActorKind::Enemy, 20.0, 109.0, 2.0);

    game.tick();

    let snap = game.snapshot();
    assert!(snap.actors.is_empty());
    assert_eq!(snap.score, 0);
    assert_eq!(snap.lives, 3);
    assert_eq!(snap.state, GameStates::Playing);
}

#[test]
fn runner_obstacles_scroll_left() {
    let mut game = game(GameType::Running, 3);
    game.spawn_actor(ActorKind::Obstacle, 90.0, 40.0, 2.0);
    game.tick();
    game.tick();
    let snap = game.snapshot();
    assert_eq!(snap.actors.len(), 1);
    assert_eq!(snap.actors[0].x, 86.0);
    assert_eq!(snap.actors[0].y, 40.0);
}

#[test]
fn projectiles_rise_and_spend_ammo() {
    let mut game = game(GameType::Shooting, 3);
    game.press("space");
    game.tick();
    let snap = game.snapshot();
    assert_eq!(snap.actors.len(), 1);
    assert_eq!(snap.actors[0].kind, ActorKind::Projectile);
    // fired at y 45 and already moved once
    assert_eq!(snap.actors[0].y, 37.0);
    assert!(matches!(snap.aux, AuxState::Shooting { ammo: 99, .. }));

    // held key does not fire again
    game.tick();
    let snap = game.snapshot();
    assert_eq!(snap.actors.len(), 1);
    assert_eq!(snap.actors[0].y, 29.0);
    assert_eq!(game.drain_audio_cues(), vec![AudioCue::Shoot]);
}

// =============================================================================
// Scoring
// =============================================================================

#[test]
fn collectible_within_reach_scores_on_the_same_tick() {
    let mut game = game(GameType::Shooting, 3);
    game.spawn_actor(ActorKind::Collectible, 53.0, 50.0, 0.0);

    game.tick();

    let snap = game.snapshot();
    assert_eq!(snap.score, 10);
    assert!(snap.actors.is_empty());
    assert!(matches!(snap.aux, AuxState::Shooting { ammo: 110, .. }));
    assert_eq!(game.drain_audio_cues(), vec![AudioCue::Collect]);
}

#[test]
fn puzzle_collectibles_are_worth_more() {
    let mut game = game(GameType::Puzzle, 3);
    game.spawn_actor(ActorKind::Collectible, 50.0, 50.0, 0.0);
    game.tick();
    assert_eq!(game.snapshot().score, 50);
}

#[test]
fn collectible_out_of_reach_stays() {
    let mut game = game(GameType::Shooting, 3);
    game.spawn_actor(ActorKind::Collectible, 56.0, 50.0, 0.0);
    game.tick();
    let snap = game.snapshot();
    assert_eq!(snap.score, 0);
    assert_eq!(snap.actors.len(), 1);
}

#[test]
fn muted_session_emits_no_cues() {
    let mut game = game(GameType::Shooting, 3);
    assert!(!game.toggle_sound());
    game.spawn_actor(ActorKind::Collectible, 50.0, 50.0, 0.0);
    game.tick();
    assert_eq!(game.snapshot().score, 10);
    assert!(game.drain_audio_cues().is_empty());
}

// =============================================================================
// Lives and game over
// =============================================================================

#[test]
fn hazard_costs_a_life() {
    let mut game = game(GameType::Shooting, 3);
    game.spawn_actor(ActorKind::Enemy, 50.0, 48.0, 0.0);
    game.tick();
    let snap = game.snapshot();
    assert_eq!(snap.lives, 2);
    assert_eq!(snap.state, GameStates::Playing);
    assert!(snap.actors.is_empty());
}

#[test]
fn last_life_ends_the_game_on_the_same_tick() {
    let mut game = game(GameType::Running, 1);
    game.spawn_actor(ActorKind::Obstacle, 50.0, 80.0, 0.0);
    game.spawn_actor(ActorKind::Obstacle, 90.0, 30.0, 2.0);

    game.tick();

    let snap = game.snapshot();
    assert_eq!(snap.state, GameStates::GameOver);
    assert_eq!(snap.lives, 0);
    let notices = game.drain_notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].text, "Game Over! Final score: 0");

    // nothing moves, spawns or ticks afterwards
    let frozen = game.snapshot();
    for _ in 0..20 {
        game.tick();
    }
    let after = game.snapshot();
    assert_eq!(after.tick, frozen.tick);
    assert_eq!(after.actors.len(), 1);
    assert_eq!(after.actors[0].x, frozen.actors[0].x);
    assert_eq!(after.state, GameStates::GameOver);
}

#[test]
fn jumping_runner_clears_an_obstacle() {
    let mut game = game(GameType::Running, 1);
    game.press(" ");
    game.tick();
    assert_eq!(game.snapshot().player.y, 65.0);

    game.spawn_actor(ActorKind::Obstacle, 50.0, 80.0, 0.0);
    game.tick();
    assert_eq!(game.snapshot().state, GameStates::Playing);
    assert_eq!(game.actor_count(), 1);
}

#[test]
fn reset_after_game_over_starts_fresh() {
    let mut game = game(GameType::Shooting, 1);
    game.spawn_actor(ActorKind::Enemy, 50.0, 50.0, 0.0);
    game.tick();
    assert_eq!(game.state(), GameStates::GameOver);

    game.reset();
    let snap = game.snapshot();
    assert_eq!(snap.state, GameStates::Playing);
    assert_eq!(snap.lives, 1);
    assert_eq!(snap.score, 0);
    assert!(snap.actors.is_empty());
    assert_eq!((snap.player.x, snap.player.y), (50.0, 50.0));
}

#[test]
fn spawner_fills_the_field_over_time() {
    let mut config = SimConfig::new().with_seed(11);
    config.spawn_rate = 1.0;
    let mut game = MiniGameLoop::new(GameType::Shooting, &config);
    game.set_player_position(5.0, 95.0);
    game.tick();
    let snap = game.snapshot();
    assert_eq!(snap.actors.len(), 1);
    assert!((10.0..=90.0).contains(&snap.actors[0].x));
    assert_eq!(snap.actors[0].y, -5.0);
}
