//! Protoplay main entry point.
//!
//! Headless driver for the prototyping studio. Built on:
//! - **bevy_ecs** for the editor, mini-game and timeline simulation loops
//! - **serde_json** for the template catalog and snapshot output
//! - **clap** for the command line
//!
//! # Modes
//!
//! - `--list-templates` prints the catalog
//! - `--template <ID>` plays a template mini-game
//! - `--editor` runs an editor playtest on the default scene
//! - `--timeline` plays the default timeline
//!
//! Ticks are dispatched through the studio scheduler. By default every step
//! advances the clock by exactly one tick interval; `--realtime` sleeps
//! between steps and feeds the measured wall time instead.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --template endless-runner --hold space --ticks 300 --json
//! ```

use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use protoplay::resources::gameconfig::SimConfig;
use protoplay::resources::gamestate::GameStates;
use protoplay::studio::{Studio, View};
use protoplay::templates::TemplateCatalog;

/// Protoplay headless studio
#[derive(Parser)]
#[command(version, about = "Headless game-prototyping studio: editor, timeline and template mini-games")]
struct Cli {
    /// INI configuration file (default: ./protoplay.ini when present).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the template catalog and exit.
    #[arg(long)]
    list_templates: bool,

    /// Play the mini-game of a template.
    #[arg(long, value_name = "ID", conflicts_with_all = ["editor", "timeline"])]
    template: Option<String>,

    /// Run an editor playtest on the default scene.
    #[arg(long, conflicts_with = "timeline")]
    editor: bool,

    /// Play the default timeline.
    #[arg(long)]
    timeline: bool,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 200)]
    ticks: u64,

    /// Spawner and placement seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Comma-separated keys held for the whole run.
    #[arg(long, value_name = "KEYS", value_delimiter = ',')]
    hold: Vec<String>,

    /// Pace ticks with wall-clock sleeps.
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON.
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<SimConfig, String> {
    let mut config = match &cli.config {
        Some(path) => {
            let mut config = SimConfig::with_path(path.clone());
            config.load_from_file()?;
            config
        }
        None => {
            let mut config = SimConfig::new();
            if config.config_path.exists() {
                if let Err(e) = config.load_from_file() {
                    warn!("{e}; using defaults");
                }
            }
            config
        }
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(&cli)?;

    if cli.list_templates || (cli.template.is_none() && !cli.editor && !cli.timeline) {
        list_templates(&TemplateCatalog::builtin()?);
        return Ok(());
    }

    let mut studio = Studio::new(config)?;
    let interval;
    if let Some(id) = &cli.template {
        studio.play_template(id)?;
        interval = studio.config().minigame_interval();
    } else if cli.editor {
        studio.open_editor();
        studio.toggle_playtest();
        interval = studio.config().editor_interval();
    } else {
        studio.toggle_timeline_playback();
        interval = studio.timeline().tick_interval();
    }

    for key in &cli.hold {
        studio.press(key.trim());
    }

    let mut last = Instant::now();
    for _ in 0..cli.ticks {
        let dt = if cli.realtime {
            std::thread::sleep(interval);
            let now = Instant::now();
            let elapsed = now - last;
            last = now;
            elapsed
        } else {
            interval
        };
        studio.advance(dt);
        if finished(&mut studio) {
            break;
        }
    }
    // let the last notices show up in the output
    studio.advance(Duration::ZERO);

    report(&mut studio, cli.json)
}

fn finished(studio: &mut Studio) -> bool {
    match studio.view() {
        View::MiniGame => studio
            .minigame()
            .is_some_and(|game| game.state() == GameStates::GameOver),
        View::Editor => false,
        View::Templates => !studio.is_timeline_ticking(),
    }
}

fn list_templates(catalog: &TemplateCatalog) {
    for template in catalog.templates() {
        println!(
            "{:<18} {} {:<16} {:<10} {:?}{}",
            template.id,
            template.preview,
            template.name,
            template.category,
            template.difficulty,
            if template.playable { "  [playable]" } else { "" }
        );
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize snapshot: {}", e))
}

fn report(studio: &mut Studio, json: bool) -> Result<(), String> {
    for notice in studio.notifications() {
        info!("[{:?}] {}", notice.notice.level, notice.notice.text);
    }
    let cues = studio.drain_audio_cues();
    if !cues.is_empty() {
        info!("{} audio cues played", cues.len());
    }

    match studio.view() {
        View::MiniGame => {
            let game = studio
                .minigame()
                .ok_or_else(|| "Mini-game was torn down".to_string())?;
            let snapshot = game.snapshot();
            if json {
                println!("{}", to_json(&snapshot)?);
            } else {
                println!(
                    "tick {} {:?}: score {} lives {} speed {:.1} actors {}",
                    snapshot.tick,
                    snapshot.state,
                    snapshot.score,
                    snapshot.lives,
                    snapshot.game_speed,
                    snapshot.actors.len()
                );
            }
        }
        View::Editor => {
            let editor = studio
                .editor()
                .ok_or_else(|| "Editor was torn down".to_string())?;
            let snapshot = editor.snapshot();
            if json {
                println!("{}", to_json(&snapshot)?);
            } else {
                for object in &snapshot.objects {
                    println!(
                        "{:<16} {:?} at ({:.0}, {:.0}, {:.0})",
                        object.id, object.kind, object.x, object.y, object.z
                    );
                }
            }
        }
        View::Templates => {
            let snapshot = studio.timeline().snapshot();
            if json {
                println!("{}", to_json(&snapshot)?);
            } else {
                println!(
                    "frame {} at {:.2}s of {:.2}s, {}",
                    snapshot.current_frame,
                    snapshot.current_time,
                    snapshot.duration,
                    if snapshot.playing { "playing" } else { "stopped" }
                );
            }
        }
    }
    Ok(())
}
