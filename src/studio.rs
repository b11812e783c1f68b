//! Studio: view composition and ticker ownership.
//!
//! The studio shows one of three views. The editor and mini-game views each
//! own a loop with its own timer, and at most one of those timers runs at a
//! time: leaving a view stops its timer before anything else happens, so no
//! tick can reach a torn-down loop. The timeline has its own timer which runs
//! only while the timeline is playing, whatever the view.
//!
//! Loops report user-facing messages as [`Notice`]s; the studio collects them
//! into its [`NotificationCenter`], which expires them on the studio clock.

use log::{debug, info};
use std::time::Duration;

use crate::components::sceneobject::ObjectKind;
use crate::components::physics::PhysicsBody;
use crate::events::audio::AudioCue;
use crate::events::notice::{Notice, NoticeLevel};
use crate::loops::editor::{EditorLoop, ObjectSpec, default_scene};
use crate::loops::minigame::MiniGameLoop;
use crate::loops::timeline::TimelineLoop;
use crate::resources::gameconfig::SimConfig;
use crate::resources::gamestate::GameStates;
use crate::resources::notifications::{ActiveNotice, NotificationCenter};
use crate::scheduler::{Scheduler, TimerHandle};
use crate::templates::{ALL_CATEGORIES, GameTemplate, TemplateCatalog};

pub const TEMPLATE_LOADED_SECS: f32 = 3.0;
pub const PLAYTEST_SECS: f32 = 4.0;
pub const ASSET_ADDED_SECS: f32 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Templates,
    Editor,
    MiniGame,
}

pub struct Studio {
    config: SimConfig,
    catalog: TemplateCatalog,
    category: String,
    view: View,
    current_template: Option<GameTemplate>,
    scheduler: Scheduler,
    editor: Option<EditorLoop>,
    editor_timer: Option<TimerHandle>,
    minigame: Option<MiniGameLoop>,
    minigame_timer: Option<TimerHandle>,
    timeline: TimelineLoop,
    timeline_timer: Option<TimerHandle>,
    notifications: NotificationCenter,
    audio: Vec<AudioCue>,
    placement: fastrand::Rng,
}

impl Studio {
    /// Studio on the template view with the built-in catalog.
    pub fn new(config: SimConfig) -> Result<Self, String> {
        Ok(Self::with_catalog(config, TemplateCatalog::builtin()?))
    }

    pub fn with_catalog(config: SimConfig, catalog: TemplateCatalog) -> Self {
        let placement = match config.seed {
            Some(seed) => fastrand::Rng::with_seed(seed),
            None => fastrand::Rng::new(),
        };
        Studio {
            timeline: TimelineLoop::new(&config),
            config,
            catalog,
            category: ALL_CATEGORIES.to_string(),
            view: View::Templates,
            current_template: None,
            scheduler: Scheduler::new(),
            editor: None,
            editor_timer: None,
            minigame: None,
            minigame_timer: None,
            timeline_timer: None,
            notifications: NotificationCenter::default(),
            audio: Vec::new(),
            placement,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub fn current_template(&self) -> Option<&GameTemplate> {
        self.current_template.as_ref()
    }

    // ---- template browsing ----

    pub fn set_category(&mut self, category: &str) {
        self.category = category.to_string();
    }

    /// Templates matching the current category filter.
    pub fn visible_templates(&self) -> Vec<&GameTemplate> {
        self.catalog.by_category(&self.category)
    }

    // ---- view switching ----

    fn stop_editor(&mut self) {
        if let Some(handle) = self.editor_timer.take() {
            self.scheduler.stop(handle);
        }
        self.editor = None;
    }

    fn stop_minigame(&mut self) {
        if let Some(handle) = self.minigame_timer.take() {
            self.scheduler.stop(handle);
        }
        self.minigame = None;
    }

    fn template(&self, id: &str) -> Result<GameTemplate, String> {
        self.catalog
            .get(id)
            .cloned()
            .ok_or_else(|| format!("Unknown template '{}'", id))
    }

    /// Open the editor with the default scene, no template.
    pub fn open_editor(&mut self) {
        self.stop_minigame();
        self.stop_editor();
        self.editor = Some(EditorLoop::new(&self.config, &default_scene()));
        self.current_template = None;
        self.view = View::Editor;
    }

    /// Build a fresh editor store from the template's starter scene.
    pub fn load_template(&mut self, id: &str) -> Result<(), String> {
        let template = self.template(id)?;
        self.stop_minigame();
        self.stop_editor();
        let scene = self.catalog.starter_scene(template.game_type);
        self.editor = Some(EditorLoop::new(&self.config, &scene));
        self.view = View::Editor;
        info!("template {} loaded into the editor", template.id);
        self.notifications.push(Notice::new(
            format!("{} template loaded! Start customizing your game.", template.name),
            NoticeLevel::Success,
            TEMPLATE_LOADED_SECS,
        ));
        self.current_template = Some(template);
        Ok(())
    }

    /// Start a fresh mini-game for the template and its ticker.
    pub fn play_template(&mut self, id: &str) -> Result<(), String> {
        let template = self.template(id)?;
        if !template.playable {
            return Err(format!("Template '{}' is not playable", id));
        }
        self.stop_editor();
        self.stop_minigame();
        let game = MiniGameLoop::new(template.game_type, &self.config);
        self.minigame_timer = Some(self.scheduler.start(game.tick_interval()));
        self.minigame = Some(game);
        self.view = View::MiniGame;
        self.current_template = Some(template);
        Ok(())
    }

    pub fn back_to_templates(&mut self) {
        self.stop_editor();
        self.stop_minigame();
        self.current_template = None;
        self.view = View::Templates;
    }

    // ---- mini-game session ----

    /// Pause or resume the mini-game. Pausing stops its ticker; resuming
    /// starts a fresh one. Returns None outside the mini-game view.
    pub fn toggle_pause(&mut self) -> Option<GameStates> {
        if self.view != View::MiniGame {
            return None;
        }
        let state = self.minigame.as_mut()?.toggle_pause();
        self.sync_minigame_timer();
        Some(state)
    }

    /// Start the current mini-game over, ticker included.
    pub fn reset_game(&mut self) -> bool {
        if self.view != View::MiniGame {
            return false;
        }
        let Some(game) = self.minigame.as_mut() else {
            return false;
        };
        game.reset();
        self.sync_minigame_timer();
        true
    }

    /// The mini-game ticker runs exactly while the session is playing.
    fn sync_minigame_timer(&mut self) {
        let playing = self
            .minigame
            .as_ref()
            .is_some_and(|game| game.state() == GameStates::Playing);
        match (playing, self.minigame_timer) {
            (true, None) => {
                if let Some(game) = &self.minigame {
                    self.minigame_timer = Some(self.scheduler.start(game.tick_interval()));
                }
            }
            (false, Some(handle)) => {
                self.scheduler.stop(handle);
                self.minigame_timer = None;
            }
            _ => {}
        }
    }

    /// Toggle editor play mode and its ticker. Returns the new play mode, or
    /// None outside the editor view.
    pub fn toggle_playtest(&mut self) -> Option<bool> {
        if self.view != View::Editor {
            return None;
        }
        let editor = self.editor.as_mut()?;
        let on = !editor.play_mode();
        editor.set_play_mode(on);
        if on {
            let interval = editor.tick_interval();
            self.editor_timer = Some(self.scheduler.start(interval));
            self.notifications.push(Notice::new(
                "Playtest mode activated! Use WASD or arrow keys to move.",
                NoticeLevel::Success,
                PLAYTEST_SECS,
            ));
        } else if let Some(handle) = self.editor_timer.take() {
            self.scheduler.stop(handle);
        }
        Some(on)
    }

    /// Place an asset in the editor at a random spot near the middle of the
    /// field. Returns the new object id.
    pub fn place_asset(&mut self, name: &str, kind: ObjectKind, behaviors: &[&str]) -> Option<String> {
        let x = self.placement.f32() * 400.0 + 100.0;
        let y = self.placement.f32() * 300.0 + 100.0;
        let z_roll = self.placement.f32();
        let editor = self.editor.as_mut()?;
        let z = if editor.is_3d() { z_roll * 200.0 - 100.0 } else { 0.0 };
        let spec = ObjectSpec::new(kind, x, y)
            .with_depth(z)
            .with_behaviors(behaviors.iter().copied())
            .with_physics(PhysicsBody::new(
                1.0,
                0.5,
                kind != ObjectKind::Environment,
                true,
            ));
        let id = editor.add_object(spec)?;
        self.notifications.push(Notice::new(
            format!("{} added to scene!", name),
            NoticeLevel::Info,
            ASSET_ADDED_SECS,
        ));
        Some(id)
    }

    // ---- input ----

    /// Route a key press to the loop of the current view.
    pub fn press(&mut self, key: &str) {
        match self.view {
            View::Editor => match &self.editor {
                Some(editor) if editor.play_mode() => editor.press(key),
                _ => debug!("key {} ignored outside playtest", key),
            },
            View::MiniGame => {
                if let Some(game) = &self.minigame {
                    game.press(key);
                }
            }
            View::Templates => debug!("key {} ignored on the template view", key),
        }
    }

    pub fn release(&mut self, key: &str) {
        match self.view {
            View::Editor => {
                if let Some(editor) = self.editor.as_ref().filter(|e| e.play_mode()) {
                    editor.release(key);
                }
            }
            View::MiniGame => {
                if let Some(game) = &self.minigame {
                    game.release(key);
                }
            }
            View::Templates => {}
        }
    }

    // ---- timeline ----

    /// Start or stop timeline playback together with its ticker.
    pub fn toggle_timeline_playback(&mut self) -> bool {
        let playing = self.timeline.timeline_mut().toggle_playback();
        self.sync_timeline_timer();
        playing
    }

    /// Stop timeline playback, rewind to 0 and clear its ticker.
    pub fn stop_timeline_playback(&mut self) {
        self.timeline.timeline_mut().stop();
        self.sync_timeline_timer();
    }

    fn sync_timeline_timer(&mut self) {
        match (self.timeline.is_playing(), self.timeline_timer) {
            (true, None) => {
                let interval = self.timeline.tick_interval();
                self.timeline_timer = Some(self.scheduler.start(interval));
            }
            (true, Some(handle)) => {
                self.scheduler
                    .set_interval(handle, self.timeline.tick_interval());
            }
            (false, Some(handle)) => {
                self.scheduler.stop(handle);
                self.timeline_timer = None;
            }
            (false, None) => {}
        }
    }

    pub fn timeline(&self) -> &TimelineLoop {
        &self.timeline
    }

    /// Direct access for editing operations. Playback state changes made here
    /// take effect on the ticker at the next [`Studio::advance`].
    pub fn timeline_mut(&mut self) -> &mut TimelineLoop {
        &mut self.timeline
    }

    // ---- clock ----

    /// Let `dt` of wall time pass: expire notices and run every due tick.
    pub fn advance(&mut self, dt: Duration) {
        self.notifications.advance(dt.as_secs_f32());
        self.sync_timeline_timer();
        for handle in self.scheduler.advance(dt) {
            if Some(handle) == self.editor_timer {
                if let Some(editor) = self.editor.as_mut() {
                    editor.tick();
                }
            } else if Some(handle) == self.minigame_timer {
                if let Some(game) = self.minigame.as_mut() {
                    game.tick();
                    self.notifications.extend(game.drain_notices());
                    self.audio.extend(game.drain_audio_cues());
                }
                self.sync_minigame_timer();
            } else if Some(handle) == self.timeline_timer {
                self.timeline.tick();
                if !self.timeline.is_playing() {
                    self.sync_timeline_timer();
                }
            } else {
                debug!("stale timer {:?} fired", handle);
            }
        }
    }

    /// Whether the ticker of `view` is running.
    pub fn is_ticking(&self, view: View) -> bool {
        let handle = match view {
            View::Editor => self.editor_timer,
            View::MiniGame => self.minigame_timer,
            View::Templates => None,
        };
        handle.is_some_and(|h| self.scheduler.is_running(h))
    }

    pub fn is_timeline_ticking(&self) -> bool {
        self.timeline_timer
            .is_some_and(|h| self.scheduler.is_running(h))
    }

    pub fn running_timers(&self) -> usize {
        self.scheduler.running_count()
    }

    // ---- output ----

    pub fn editor(&mut self) -> Option<&mut EditorLoop> {
        self.editor.as_mut()
    }

    pub fn minigame(&mut self) -> Option<&mut MiniGameLoop> {
        self.minigame.as_mut()
    }

    pub fn notifications(&self) -> &[ActiveNotice] {
        self.notifications.active()
    }

    pub fn drain_audio_cues(&mut self) -> Vec<AudioCue> {
        std::mem::take(&mut self.audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn studio() -> Studio {
        let mut config = SimConfig::new().with_seed(5);
        config.spawn_rate = 0.0;
        Studio::new(config).unwrap()
    }

    #[test]
    fn test_starts_on_templates() {
        let s = studio();
        assert_eq!(s.view(), View::Templates);
        assert_eq!(s.visible_templates().len(), 8);
        assert_eq!(s.running_timers(), 0);
    }

    #[test]
    fn test_unknown_template() {
        let mut s = studio();
        assert!(s.load_template("nope").is_err());
        assert!(s.play_template("nope").is_err());
        assert_eq!(s.view(), View::Templates);
    }

    #[test]
    fn test_place_asset() {
        let mut s = studio();
        assert!(s.place_asset("Tree", ObjectKind::Environment, &[]).is_none());
        s.open_editor();
        let id = s.place_asset("Tree", ObjectKind::Environment, &["sway"]).unwrap();
        let obj = s.editor().unwrap().object(&id).unwrap();
        assert!((100.0..500.0).contains(&obj.x));
        assert!((100.0..400.0).contains(&obj.y));
        assert!(!obj.physics.gravity);
        assert!(s
            .notifications()
            .iter()
            .any(|n| n.notice.text == "Tree added to scene!"));
    }
}
