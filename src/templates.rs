//! Template catalog.
//!
//! The built-in catalog ships as JSON (`assets/templates.json`) compiled into
//! the binary. Besides the template list it carries the filter categories and
//! the starter scene loaded into the editor for each game type.
//!
//! # JSON Format
//!
//! ```json
//! {
//!   "categories": [{ "id": "all", "name": "All Templates" }],
//!   "templates": [{
//!     "id": "space-shooter", "name": "Space Shooter", "description": "...",
//!     "preview": "🚀", "category": "action", "difficulty": "Medium",
//!     "playable": true, "gameType": "shooting"
//!   }],
//!   "scenes": {
//!     "shooting": [{ "id": "player-ship", "type": "player", "x": 150, "y": 400 }],
//!     "default": [{ "id": "template-player", "type": "player", "x": 150, "y": 300 }]
//!   }
//! }
//! ```
//!
//! Game types without their own scene get the `default` one.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::loops::editor::ObjectSpec;
use crate::resources::session::GameType;

/// Catalog compiled into the binary.
pub const BUILTIN_CATALOG: &str = include_str!("../assets/templates.json");

/// Category id that matches every template.
pub const ALL_CATEGORIES: &str = "all";

const DEFAULT_SCENE: &str = "default";

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub preview: String,
    pub category: String,
    pub difficulty: Difficulty,
    pub playable: bool,
    pub game_type: GameType,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
}

#[derive(Deserialize, Debug)]
struct CatalogData {
    categories: Vec<Category>,
    templates: Vec<GameTemplate>,
    scenes: FxHashMap<String, Vec<ObjectSpec>>,
}

#[derive(Debug, Clone)]
pub struct TemplateCatalog {
    categories: Vec<Category>,
    templates: Vec<GameTemplate>,
    scenes: FxHashMap<String, Vec<ObjectSpec>>,
}

impl TemplateCatalog {
    /// Parse the built-in catalog.
    pub fn builtin() -> Result<Self, String> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse and validate a catalog: template ids must be unique and a
    /// `default` scene must exist.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let data: CatalogData =
            serde_json::from_str(json).map_err(|e| format!("Invalid template catalog: {}", e))?;

        {
            let mut seen = FxHashSet::default();
            for template in &data.templates {
                if !seen.insert(template.id.as_str()) {
                    return Err(format!("Duplicate template id '{}'", template.id));
                }
            }
        }
        if !data.scenes.contains_key(DEFAULT_SCENE) {
            return Err("Template catalog has no default scene".to_string());
        }
        log::debug!(
            "loaded {} templates, {} scenes",
            data.templates.len(),
            data.scenes.len()
        );
        Ok(TemplateCatalog {
            categories: data.categories,
            templates: data.templates,
            scenes: data.scenes,
        })
    }

    pub fn load_from_file(path: &str) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read template catalog {}: {}", path, e))?;
        Self::from_json(&json)
    }

    pub fn templates(&self) -> &[GameTemplate] {
        &self.templates
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, id: &str) -> Option<&GameTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Templates in `category`, or all of them for [`ALL_CATEGORIES`].
    pub fn by_category(&self, category: &str) -> Vec<&GameTemplate> {
        self.templates
            .iter()
            .filter(|t| category == ALL_CATEGORIES || t.category == category)
            .collect()
    }

    /// Objects placed in the editor when a template of `game_type` is loaded.
    pub fn starter_scene(&self, game_type: GameType) -> Vec<ObjectSpec> {
        self.scenes
            .get(game_type.as_str())
            .or_else(|| self.scenes.get(DEFAULT_SCENE))
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sceneobject::ObjectKind;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = TemplateCatalog::builtin().unwrap();
        assert_eq!(catalog.templates().len(), 8);
        assert_eq!(catalog.categories()[0].id, ALL_CATEGORIES);
        let shooter = catalog.get("space-shooter").unwrap();
        assert_eq!(shooter.game_type, GameType::Shooting);
        assert_eq!(shooter.difficulty, Difficulty::Medium);
        assert!(catalog.get("tetris").is_none());
    }

    #[test]
    fn test_category_filter() {
        let catalog = TemplateCatalog::builtin().unwrap();
        assert_eq!(catalog.by_category(ALL_CATEGORIES).len(), 8);
        let casual: Vec<&str> = catalog
            .by_category("casual")
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(casual, vec!["flappy-bird", "whack-mole", "crossy-road"]);
        assert!(catalog.by_category("racing").is_empty());
    }

    #[test]
    fn test_starter_scenes() {
        let catalog = TemplateCatalog::builtin().unwrap();
        let running = catalog.starter_scene(GameType::Running);
        assert_eq!(running.len(), 2);
        assert_eq!(running[1].kind, ObjectKind::Platform);
        assert_eq!(running[1].physics.mass, 100.0);
        let puzzle = catalog.starter_scene(GameType::Puzzle);
        assert_eq!(puzzle[0].id.as_deref(), Some("template-player"));
        let shooting = catalog.starter_scene(GameType::Shooting);
        assert_eq!(shooting[1].rotation, 180.0);
    }

    #[test]
    fn test_rejects_duplicates_and_missing_default() {
        let dup = r#"{"categories":[],"scenes":{"default":[]},"templates":[
            {"id":"a","name":"A","description":"","preview":"","category":"x","difficulty":"Easy","playable":true,"gameType":"action"},
            {"id":"a","name":"B","description":"","preview":"","category":"x","difficulty":"Easy","playable":true,"gameType":"action"}
        ]}"#;
        assert!(TemplateCatalog::from_json(dup).unwrap_err().contains("Duplicate"));
        let no_default = r#"{"categories":[],"scenes":{},"templates":[]}"#;
        assert!(TemplateCatalog::from_json(no_default).is_err());
        assert!(TemplateCatalog::from_json("not json").is_err());
    }
}
