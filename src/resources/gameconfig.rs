//! Simulation configuration resource.
//!
//! Manages tuning values loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [field]
//! width = 800
//! height = 600
//! depth = 200
//!
//! [editor]
//! tick_ms = 16
//! step = 5
//! jump_offset = 10
//!
//! [minigame]
//! tick_ms = 50
//! spawn_rate = 0.02
//! speed_increment = 0.001
//! max_speed = 3.0
//! hit_radius = 5
//! lives = 3
//! seed = 42
//!
//! [timeline]
//! fps = 60
//! duration = 10
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

use crate::resources::playfield::{
    DEFAULT_FIELD_DEPTH, DEFAULT_FIELD_HEIGHT, DEFAULT_FIELD_WIDTH, PlayField,
};

/// Default safe values for startup
const DEFAULT_EDITOR_TICK_MS: u64 = 16;
const DEFAULT_EDITOR_STEP: f32 = 5.0;
const DEFAULT_JUMP_OFFSET: f32 = 10.0;
const DEFAULT_MINIGAME_TICK_MS: u64 = 50;
const DEFAULT_SPAWN_RATE: f32 = 0.02;
const DEFAULT_SPEED_INCREMENT: f32 = 0.001;
const DEFAULT_MAX_SPEED: f32 = 3.0;
const DEFAULT_HIT_RADIUS: f32 = 5.0;
const DEFAULT_LIVES: u32 = 3;
const DEFAULT_TIMELINE_FPS: u32 = 60;
const DEFAULT_TIMELINE_DURATION: f32 = 10.0;
const DEFAULT_CONFIG_PATH: &str = "./protoplay.ini";

/// Simulation configuration resource.
///
/// Every loop receives a copy when it is created; later edits do not reach
/// running loops.
#[derive(Resource, Debug, Clone)]
pub struct SimConfig {
    /// Editor play-field width in pixels.
    pub field_width: f32,
    /// Editor play-field height in pixels.
    pub field_height: f32,
    /// Half-extent of the depth axis in 3-D mode.
    pub field_depth: f32,
    /// Editor tick interval in milliseconds.
    pub editor_tick_ms: u64,
    /// Editor movement per tick while a direction is held.
    pub editor_step: f32,
    /// Instant upward offset applied by the jump behaviour.
    pub jump_offset: f32,
    /// Mini-game tick interval in milliseconds.
    pub minigame_tick_ms: u64,
    /// Base spawn probability per tick, multiplied by the game speed.
    pub spawn_rate: f32,
    /// Game speed added every tick.
    pub speed_increment: f32,
    /// Game speed ceiling.
    pub max_speed: f32,
    /// Actor-to-player distance below which a collision resolves.
    pub hit_radius: f32,
    /// Lives at the start of a session.
    pub lives: u32,
    /// Optional seed for the spawner; random when absent.
    pub seed: Option<u64>,
    /// Default timeline playback rate.
    pub timeline_fps: u32,
    /// Default timeline duration in seconds.
    pub timeline_duration: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SimConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            field_depth: DEFAULT_FIELD_DEPTH,
            editor_tick_ms: DEFAULT_EDITOR_TICK_MS,
            editor_step: DEFAULT_EDITOR_STEP,
            jump_offset: DEFAULT_JUMP_OFFSET,
            minigame_tick_ms: DEFAULT_MINIGAME_TICK_MS,
            spawn_rate: DEFAULT_SPAWN_RATE,
            speed_increment: DEFAULT_SPEED_INCREMENT,
            max_speed: DEFAULT_MAX_SPEED,
            hit_radius: DEFAULT_HIT_RADIUS,
            lives: DEFAULT_LIVES,
            seed: None,
            timeline_fps: DEFAULT_TIMELINE_FPS,
            timeline_duration: DEFAULT_TIMELINE_DURATION,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Use a fixed spawner seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        let float = |section: &str, key: &str| config.getfloat(section, key).ok().flatten();
        let uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();

        // [field] section
        if let Some(width) = float("field", "width") {
            self.field_width = width as f32;
        }
        if let Some(height) = float("field", "height") {
            self.field_height = height as f32;
        }
        if let Some(depth) = float("field", "depth") {
            self.field_depth = depth as f32;
        }

        // [editor] section
        if let Some(ms) = uint("editor", "tick_ms") {
            self.editor_tick_ms = ms;
        }
        if let Some(step) = float("editor", "step") {
            self.editor_step = step as f32;
        }
        if let Some(offset) = float("editor", "jump_offset") {
            self.jump_offset = offset as f32;
        }

        // [minigame] section
        if let Some(ms) = uint("minigame", "tick_ms") {
            self.minigame_tick_ms = ms;
        }
        if let Some(rate) = float("minigame", "spawn_rate") {
            self.spawn_rate = rate as f32;
        }
        if let Some(inc) = float("minigame", "speed_increment") {
            self.speed_increment = inc as f32;
        }
        if let Some(max) = float("minigame", "max_speed") {
            self.max_speed = max as f32;
        }
        if let Some(radius) = float("minigame", "hit_radius") {
            self.hit_radius = radius as f32;
        }
        if let Some(lives) = uint("minigame", "lives") {
            self.lives = lives as u32;
        }
        if let Some(seed) = uint("minigame", "seed") {
            self.seed = Some(seed);
        }

        // [timeline] section
        if let Some(fps) = uint("timeline", "fps") {
            self.timeline_fps = fps as u32;
        }
        if let Some(duration) = float("timeline", "duration") {
            self.timeline_duration = duration as f32;
        }

        info!(
            "Loaded config: field {}x{} (depth {}), editor {}ms, minigame {}ms, timeline {}fps/{}s",
            self.field_width,
            self.field_height,
            self.field_depth,
            self.editor_tick_ms,
            self.minigame_tick_ms,
            self.timeline_fps,
            self.timeline_duration
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [field] section
        config.set("field", "width", Some(self.field_width.to_string()));
        config.set("field", "height", Some(self.field_height.to_string()));
        config.set("field", "depth", Some(self.field_depth.to_string()));

        // [editor] section
        config.set("editor", "tick_ms", Some(self.editor_tick_ms.to_string()));
        config.set("editor", "step", Some(self.editor_step.to_string()));
        config.set("editor", "jump_offset", Some(self.jump_offset.to_string()));

        // [minigame] section
        config.set("minigame", "tick_ms", Some(self.minigame_tick_ms.to_string()));
        config.set("minigame", "spawn_rate", Some(self.spawn_rate.to_string()));
        config.set(
            "minigame",
            "speed_increment",
            Some(self.speed_increment.to_string()),
        );
        config.set("minigame", "max_speed", Some(self.max_speed.to_string()));
        config.set("minigame", "hit_radius", Some(self.hit_radius.to_string()));
        config.set("minigame", "lives", Some(self.lives.to_string()));
        if let Some(seed) = self.seed {
            config.set("minigame", "seed", Some(seed.to_string()));
        }

        // [timeline] section
        config.set("timeline", "fps", Some(self.timeline_fps.to_string()));
        config.set("timeline", "duration", Some(self.timeline_duration.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Play-field bounds described by this configuration.
    pub fn play_field(&self) -> PlayField {
        PlayField::new(self.field_width, self.field_height, self.field_depth)
    }

    /// Editor tick interval, never below one millisecond.
    pub fn editor_interval(&self) -> Duration {
        Duration::from_millis(self.editor_tick_ms.max(1))
    }

    /// Mini-game tick interval, never below one millisecond.
    pub fn minigame_interval(&self) -> Duration {
        Duration::from_millis(self.minigame_tick_ms.max(1))
    }
}
