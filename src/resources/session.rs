//! Mini-game session resource: score, lives, difficulty and the
//! game-type-specific auxiliary record.
//!
//! The auxiliary state is a tagged union keyed by [`GameType`]; each variant
//! has its own fixed shape and is only reached through matching.

use bevy_ecs::prelude::Resource;
use serde::{Deserialize, Serialize};

pub const STARTING_LIVES: u32 = 3;
pub const STARTING_GAME_SPEED: f32 = 1.0;
pub const STARTING_AMMO: u32 = 100;
pub const MAX_FUEL: f32 = 100.0;

/// Gameplay category of a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameType {
    Shooting,
    Running,
    Flying,
    Puzzle,
    Action,
    Casual,
    Platformer,
}

impl GameType {
    /// Lower-case name, as used in template data.
    pub fn as_str(self) -> &'static str {
        match self {
            GameType::Shooting => "shooting",
            GameType::Running => "running",
            GameType::Flying => "flying",
            GameType::Puzzle => "puzzle",
            GameType::Action => "action",
            GameType::Casual => "casual",
            GameType::Platformer => "platformer",
        }
    }

    /// Points awarded for one collectible.
    pub fn collect_points(self) -> u32 {
        match self {
            GameType::Puzzle => 50,
            _ => 10,
        }
    }

    /// Player step per tick while a direction is held.
    pub fn player_step(self) -> f32 {
        match self {
            GameType::Flying => 2.0,
            _ => 3.0,
        }
    }

    /// Whether the player may move vertically.
    pub fn allows_vertical_movement(self) -> bool {
        matches!(self, GameType::Flying | GameType::Shooting)
    }

    /// Where the player starts (percentage space).
    pub fn player_start(self) -> (f32, f32) {
        match self {
            GameType::Running => (50.0, 80.0),
            _ => (50.0, 50.0),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            GameType::Shooting => "Aim and shoot at targets and enemies",
            GameType::Running => "Run, jump, and navigate through levels",
            GameType::Flying => "Soar through the skies with flight controls",
            GameType::Puzzle => "Solve challenging brain teasers",
            GameType::Action => "Fast-paced gameplay with quick reactions",
            GameType::Casual => "Easy to learn, fun to play",
            GameType::Platformer => "Jump between platforms and obstacles",
        }
    }
}

/// Game-type-specific auxiliary state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AuxState {
    Shooting {
        ammo: u32,
        power_ups: u32,
        level: u32,
    },
    Running {
        /// Distance in tenths of a metre.
        distance: f32,
        speed: f32,
    },
    Flying {
        altitude: f32,
        fuel: f32,
        wind: f32,
    },
    Puzzle {
        moves: u32,
        matches: u32,
        combo: u32,
    },
    None,
}

impl AuxState {
    /// Initial record for `game_type`.
    pub fn initial(game_type: GameType) -> Self {
        match game_type {
            GameType::Shooting => AuxState::Shooting {
                ammo: STARTING_AMMO,
                power_ups: 0,
                level: 1,
            },
            GameType::Running => AuxState::Running {
                distance: 0.0,
                speed: 5.0,
            },
            GameType::Flying => AuxState::Flying {
                altitude: 50.0,
                fuel: MAX_FUEL,
                wind: 0.0,
            },
            GameType::Puzzle => AuxState::Puzzle {
                moves: 0,
                matches: 0,
                combo: 0,
            },
            GameType::Action | GameType::Casual | GameType::Platformer => AuxState::None,
        }
    }

    /// Resource refill granted by a collectible.
    pub fn refill(&mut self) {
        match self {
            AuxState::Shooting { ammo, .. } => *ammo += 10,
            AuxState::Flying { fuel, .. } => *fuel = (*fuel + 20.0).min(MAX_FUEL),
            _ => {}
        }
    }

    /// Distance in whole metres, for running games.
    pub fn distance_m(&self) -> Option<u32> {
        match self {
            AuxState::Running { distance, .. } => Some((distance / 10.0).floor() as u32),
            _ => None,
        }
    }
}

/// Score, lives and difficulty of one mini-game run.
#[derive(Resource, Debug, Clone)]
pub struct Session {
    pub game_type: GameType,
    pub score: u32,
    /// Never negative; the session ends when it reaches zero.
    pub lives: u32,
    /// Difficulty multiplier, non-decreasing and capped by the config.
    pub game_speed: f32,
    pub aux: AuxState,
    pub sound_enabled: bool,
}

impl Session {
    pub fn new(game_type: GameType, lives: u32) -> Self {
        Session {
            game_type,
            score: 0,
            lives,
            game_speed: STARTING_GAME_SPEED,
            aux: AuxState::initial(game_type),
            sound_enabled: true,
        }
    }

    /// Reinitialise every field except the sound preference.
    pub fn reset(&mut self, lives: u32) {
        let sound_enabled = self.sound_enabled;
        *self = Session::new(self.game_type, lives);
        self.sound_enabled = sound_enabled;
    }

    /// Add points and keep the shooting level in step with the score.
    pub fn add_score(&mut self, points: u32) {
        self.score += points;
        if let AuxState::Shooting { level, .. } = &mut self.aux {
            *level = self.score / 100 + 1;
        }
    }

    /// Remove one life. Returns true when this loss ended the game.
    pub fn lose_life(&mut self) -> bool {
        if self.lives == 0 {
            return false;
        }
        self.lives -= 1;
        self.lives == 0
    }

    /// Raise the game speed by `increment`, never beyond `max`.
    pub fn ramp_speed(&mut self, increment: f32, max: f32) {
        self.game_speed = (self.game_speed + increment).min(max).max(self.game_speed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_aux_shapes() {
        assert_eq!(
            AuxState::initial(GameType::Shooting),
            AuxState::Shooting {
                ammo: 100,
                power_ups: 0,
                level: 1
            }
        );
        assert!(matches!(
            AuxState::initial(GameType::Flying),
            AuxState::Flying { fuel, .. } if fuel == 100.0
        ));
        assert_eq!(AuxState::initial(GameType::Casual), AuxState::None);
    }

    #[test]
    fn test_refill() {
        let mut aux = AuxState::initial(GameType::Shooting);
        aux.refill();
        assert!(matches!(aux, AuxState::Shooting { ammo: 110, .. }));

        let mut aux = AuxState::Flying {
            altitude: 50.0,
            fuel: 90.0,
            wind: 0.0,
        };
        aux.refill();
        assert!(matches!(aux, AuxState::Flying { fuel, .. } if fuel == 100.0));

        let mut aux = AuxState::initial(GameType::Puzzle);
        aux.refill();
        assert_eq!(aux, AuxState::initial(GameType::Puzzle));
    }

    #[test]
    fn test_lose_life_never_negative() {
        let mut s = Session::new(GameType::Action, 1);
        assert!(s.lose_life());
        assert_eq!(s.lives, 0);
        assert!(!s.lose_life());
        assert_eq!(s.lives, 0);
    }

    #[test]
    fn test_shooting_level_follows_score() {
        let mut s = Session::new(GameType::Shooting, 3);
        s.add_score(250);
        assert!(matches!(s.aux, AuxState::Shooting { level: 3, .. }));
    }

    #[test]
    fn test_speed_ramp_is_capped() {
        let mut s = Session::new(GameType::Running, 3);
        for _ in 0..5000 {
            s.ramp_speed(0.001, 3.0);
        }
        assert_eq!(s.game_speed, 3.0);
    }

    #[test]
    fn test_reset_keeps_sound_preference() {
        let mut s = Session::new(GameType::Flying, 3);
        s.sound_enabled = false;
        s.add_score(40);
        s.lose_life();
        s.reset(3);
        assert_eq!(s.score, 0);
        assert_eq!(s.lives, 3);
        assert!(!s.sound_enabled);
    }

    #[test]
    fn test_collect_points() {
        assert_eq!(GameType::Puzzle.collect_points(), 50);
        assert_eq!(GameType::Shooting.collect_points(), 10);
    }
}
