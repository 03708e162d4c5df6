use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::{EngineError, EngineResult, Size};

/// Dimensions of the main drawing canvas. The main canvas is not part of
/// the workshop catalog; it is a fixed-size grid of its own.
pub const DEFAULT_CANVAS_SIZE: Size = Size { width: 128, height: 32 };

/// Static descriptor of a supported workshop grid size.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridEntry {
    pub id: String,

    #[serde(rename = "w")]
    pub width: i32,

    #[serde(rename = "h")]
    pub height: i32,

    /// Display size of one pixel. Presentation metadata for the UI layer,
    /// the engine never consults it.
    #[serde(default)]
    pub px_size: i32,

    #[serde(default)]
    pub scalable: bool,

    /// Id of the grid this one upscales into (2x in both axes).
    #[serde(default)]
    pub next: Option<String>,
}

impl GridEntry {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}

/// The fixed table of supported workshop grid sizes.
///
/// Configuration handed in from the outside (or [`DEFAULT_CATALOG`]),
/// not engine state. Consulted for upscale-chain resolution.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GridCatalog {
    pub entries: Vec<GridEntry>,
}

impl GridCatalog {
    pub fn get(&self, id: &str) -> Option<&GridEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    /// Resolves the entry a scalable grid upscales into.
    pub fn upscale_target(&self, entry: &GridEntry) -> EngineResult<&GridEntry> {
        if !entry.scalable {
            return Err(EngineError::NotScalable { id: entry.id.clone() });
        }
        let Some(next) = entry.next.as_deref() else {
            return Err(EngineError::NotScalable { id: entry.id.clone() });
        };
        self.get(next).ok_or_else(|| EngineError::UnknownGridId { id: next.to_string() })
    }

    /// Checks the catalog invariants: positive dimensions, unique ids and
    /// a doubling upscale chain.
    pub fn validate(&self) -> EngineResult<()> {
        for entry in &self.entries {
            if entry.width <= 0 || entry.height <= 0 {
                return Err(EngineError::invalid_catalog(format!("'{}' has non-positive dimensions", entry.id)));
            }
            if self.entries.iter().filter(|e| e.id == entry.id).count() > 1 {
                return Err(EngineError::invalid_catalog(format!("duplicate id '{}'", entry.id)));
            }
            if entry.scalable {
                let target = self.upscale_target(entry)?;
                if target.width != entry.width * 2 || target.height != entry.height * 2 {
                    return Err(EngineError::invalid_catalog(format!(
                        "'{}' upscales into '{}' which is not double its size",
                        entry.id, target.id
                    )));
                }
            }
        }
        Ok(())
    }

    /// Loads and validates a catalog from TOML config text.
    pub fn from_toml(text: &str) -> EngineResult<Self> {
        let catalog: GridCatalog = toml::from_str(text)?;
        catalog.validate()?;
        Ok(catalog)
    }
}

lazy_static! {
    /// Built-in workshop catalog: the 8x8 -> 16x16 -> 32x32 scalable chain
    /// plus the standalone 8x16 and 16x8 grids.
    pub static ref DEFAULT_CATALOG: GridCatalog = GridCatalog {
        entries: vec![
            GridEntry {
                id: "g8".to_string(),
                width: 8,
                height: 8,
                px_size: 18,
                scalable: true,
                next: Some("g16".to_string()),
            },
            GridEntry {
                id: "g16".to_string(),
                width: 16,
                height: 16,
                px_size: 10,
                scalable: true,
                next: Some("g32".to_string()),
            },
            GridEntry {
                id: "g32".to_string(),
                width: 32,
                height: 32,
                px_size: 6,
                scalable: false,
                next: None,
            },
            GridEntry {
                id: "g8x16".to_string(),
                width: 8,
                height: 16,
                px_size: 12,
                scalable: false,
                next: None,
            },
            GridEntry {
                id: "g16x8".to_string(),
                width: 16,
                height: 8,
                px_size: 12,
                scalable: false,
                next: None,
            },
        ],
    };
}
