//! Mini-game loop.
//!
//! Owns one session of a template mini-game. A tick drains input and, only
//! while the session is playing, runs in order:
//!
//! 1. player controller
//! 2. actor movement and off-field sweep
//! 3. spawner
//! 4. session bookkeeping (genre counters, speed ramp)
//! 5. collision and scoring
//!
//! Movement and spawning always precede collision, and collision skips actors
//! spawned in the current tick. Paused and game over sessions do not advance
//! at all, not even their clock.

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use log::info;
use std::time::Duration;

use crate::components::actor::{Actor, ActorKind};
use crate::components::fieldposition::FieldPosition;
use crate::components::player::{JumpLanding, MiniPlayer};
use crate::events::audio::AudioCue;
use crate::events::gamestate::observe_game_over;
use crate::events::notice::Notice;
use crate::resources::gameconfig::SimConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::{InputBindings, InputBridge, InputSender, InputState};
use crate::resources::session::{GameType, Session};
use crate::resources::spawner::SpawnerState;
use crate::resources::worldtime::WorldTime;
use crate::snapshot::{GameSnapshot, game_snapshot};
use crate::systems::actormovement::actor_movement;
use crate::systems::collision::collision_resolver;
use crate::systems::gamestate::state_is_playing;
use crate::systems::input::update_input_state;
use crate::systems::messages::update_messages;
use crate::systems::playercontroller::minigame_player_controller;
use crate::systems::session::session_progress;
use crate::systems::spawner::actor_spawner;
use crate::systems::time::update_world_time;

pub struct MiniGameLoop {
    world: World,
    schedule: Schedule,
    input: InputSender,
    interval: Duration,
    lives: u32,
}

impl MiniGameLoop {
    /// Start a fresh session of `game_type`, already playing.
    pub fn new(game_type: GameType, config: &SimConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default());
        world.insert_resource(config.clone());
        world.insert_resource(Session::new(game_type, config.lives));
        world.insert_resource(GameState::new());
        world.insert_resource(SpawnerState::new(config.seed));
        world.insert_resource(InputState::default());
        world.insert_resource(InputBindings::default());
        let bridge = InputBridge::default();
        let input = bridge.sender();
        world.insert_resource(bridge);
        world.init_resource::<Messages<AudioCue>>();
        world.init_resource::<Messages<Notice>>();

        world.add_observer(observe_game_over);
        world.flush();

        let (x, y) = game_type.player_start();
        world.spawn((MiniPlayer, FieldPosition::new(x, y)));

        let mut schedule = Schedule::default();
        schedule.add_systems(
            (
                (
                    update_messages::<AudioCue>,
                    update_messages::<Notice>,
                    update_input_state,
                ),
                (
                    minigame_player_controller,
                    actor_movement,
                    actor_spawner,
                    session_progress,
                    collision_resolver,
                )
                    .chain()
                    .run_if(state_is_playing),
            )
                .chain(),
        );

        info!("mini-game started: {:?}", game_type);
        MiniGameLoop {
            world,
            schedule,
            input,
            interval: config.minigame_interval(),
            lives: config.lives,
        }
    }

    /// Run one tick. Simulated time only advances while playing.
    pub fn tick(&mut self) {
        if self.state() == GameStates::Playing {
            update_world_time(&mut self.world, self.interval.as_secs_f32());
        }
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    pub fn tick_interval(&self) -> Duration {
        self.interval
    }

    pub fn input(&self) -> InputSender {
        self.input.clone()
    }

    pub fn press(&self, key: &str) {
        self.input.press(key);
    }

    pub fn release(&self, key: &str) {
        self.input.release(key);
    }

    pub fn state(&self) -> GameStates {
        self.world.resource::<GameState>().get()
    }

    pub fn session(&self) -> &Session {
        self.world.resource::<Session>()
    }

    /// Playing and paused swap; game over stays game over.
    pub fn toggle_pause(&mut self) -> GameStates {
        let state = self.world.resource_mut::<GameState>().toggle_pause();
        info!("mini-game {:?}", state);
        state
    }

    /// Flip the sound preference. Returns the new value.
    pub fn toggle_sound(&mut self) -> bool {
        let mut session = self.world.resource_mut::<Session>();
        session.sound_enabled = !session.sound_enabled;
        session.sound_enabled
    }

    /// Start over: score, lives, speed and genre counters return to their
    /// initial values, every actor is removed and the player goes back to the
    /// start. Actor ids keep counting up.
    pub fn reset(&mut self) {
        let lives = self.lives;
        let game_type = {
            let mut session = self.world.resource_mut::<Session>();
            session.reset(lives);
            session.game_type
        };
        self.world.resource_mut::<GameState>().set(GameStates::Playing);
        self.world.resource_mut::<InputState>().clear();

        let actors: Vec<Entity> = self
            .world
            .query_filtered::<Entity, With<Actor>>()
            .iter(&self.world)
            .collect();
        for entity in actors {
            self.world.despawn(entity);
        }

        let (x, y) = game_type.player_start();
        let players: Vec<Entity> = self
            .world
            .query_filtered::<Entity, With<MiniPlayer>>()
            .iter(&self.world)
            .collect();
        for entity in players {
            let mut player = self.world.entity_mut(entity);
            player.remove::<JumpLanding>();
            player.insert(FieldPosition::new(x, y));
        }
        info!("mini-game reset");
    }

    /// Place an actor directly, bypassing the spawner. It becomes eligible for
    /// collision on the next tick.
    pub fn spawn_actor(&mut self, kind: ActorKind, x: f32, y: f32, speed: f32) -> u64 {
        let tick = self.world.resource::<WorldTime>().frame_count;
        let id = self.world.resource_mut::<SpawnerState>().next_id();
        self.world
            .spawn((Actor::new(id, kind, speed, tick), FieldPosition::new(x, y)));
        id
    }

    pub fn set_player_position(&mut self, x: f32, y: f32) {
        let players: Vec<Entity> = self
            .world
            .query_filtered::<Entity, With<MiniPlayer>>()
            .iter(&self.world)
            .collect();
        for entity in players {
            self.world.entity_mut(entity).insert(FieldPosition::new(x, y));
        }
    }

    pub fn actor_count(&mut self) -> usize {
        self.world.query::<&Actor>().iter(&self.world).count()
    }

    pub fn drain_audio_cues(&mut self) -> Vec<AudioCue> {
        self.world
            .resource_mut::<Messages<AudioCue>>()
            .drain()
            .collect()
    }

    pub fn drain_notices(&mut self) -> Vec<Notice> {
        self.world.resource_mut::<Messages<Notice>>().drain().collect()
    }

    pub fn snapshot(&mut self) -> GameSnapshot {
        game_snapshot(&mut self.world)
    }
}
