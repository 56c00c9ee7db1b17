//! Exhibit Registry Module
//!
//! Static lookup of the interactive targets in the museum: wall paintings,
//! the interactive photo table, and the zoom-out sentinel used by the UI's
//! "back" control. Exhibits are built once at startup (from JSON or from the
//! built-in default museum) and read-only thereafter.
//!
//! The registry only carries what navigation needs: a world position, a
//! kind/placement pair, and the descriptive payload (title + narration).
//! Whether the scene layer renders the real asset or fallback geometry is
//! irrelevant here.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What an interactive target is. Exhaustively matched when computing zoom
/// behavior, so a new kind cannot be added without deciding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExhibitKind {
    /// A painting the camera zooms in on
    Painting,
    /// The interactive table: opens the overlay instead of a camera flight
    Table,
    /// UI "back" entry: selecting it behaves as a zoom-out request
    ZoomOutSentinel,
}

/// Orientation hint for computing the zoom-in viewing position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Mounted flat on a wall; viewed from 3 units along the wall normal
    WallMounted,
    /// Standing free on the floor; viewed from a (+2, +2) diagonal offset
    FreeStanding,
}

/// One interactive target. Immutable after registry construction.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exhibit {
    /// Stable identifier used in intents and events
    pub id: String,
    pub kind: ExhibitKind,
    pub placement: Placement,
    /// World-space position of the exhibit itself
    pub position: Vec3,
    /// Title shown in the popup
    pub display_name: String,
    /// Narrated description
    pub narration_text: String,
}

/// Errors raised while building a registry from configuration.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to parse exhibit configuration: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate exhibit id: {0}")]
    DuplicateId(String),
    #[error("exhibit configuration is empty")]
    Empty,
}

/// Read-only collection of exhibits, looked up by id.
#[derive(Clone, Debug)]
pub struct ExhibitRegistry {
    exhibits: Vec<Exhibit>,
}

impl ExhibitRegistry {
    /// Build a registry from a list of exhibits.
    ///
    /// Fails on duplicate ids or an empty list.
    pub fn new(exhibits: Vec<Exhibit>) -> Result<Self, RegistryError> {
        if exhibits.is_empty() {
            return Err(RegistryError::Empty);
        }
        for (i, exhibit) in exhibits.iter().enumerate() {
            if exhibits[..i].iter().any(|e| e.id == exhibit.id) {
                return Err(RegistryError::DuplicateId(exhibit.id.clone()));
            }
        }
        Ok(Self { exhibits })
    }

    /// Build a registry from a JSON array of exhibits.
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let exhibits: Vec<Exhibit> = serde_json::from_str(json)?;
        let registry = Self::new(exhibits)?;
        println!(
            "[ExhibitRegistry] Loaded {} exhibits from configuration",
            registry.len()
        );
        Ok(registry)
    }

    /// Look up an exhibit by id.
    pub fn get(&self, id: &str) -> Option<&Exhibit> {
        self.exhibits.iter().find(|e| e.id == id)
    }

    /// Iterate all exhibits in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Exhibit> {
        self.exhibits.iter()
    }

    /// Number of registered exhibits.
    pub fn len(&self) -> usize {
        self.exhibits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exhibits.is_empty()
    }

    /// The museum as shipped: nine wall paintings and the interactive table.
    pub fn default_museum() -> Self {
        let wall = |id: &str, pos: Vec3, name: &str, narration: &str| Exhibit {
            id: id.to_string(),
            kind: ExhibitKind::Painting,
            placement: Placement::WallMounted,
            position: pos,
            display_name: name.to_string(),
            narration_text: narration.to_string(),
        };

        let exhibits = vec![
            // Front wall (z = -6.9)
            wall(
                "teal-serenity",
                Vec3::new(-2.0, 2.5, -6.9),
                "Teal Serenity",
                "This serene teal painting evokes feelings of calm and tranquility.",
            ),
            wall(
                "coral-passion",
                Vec3::new(0.0, 2.5, -6.9),
                "Coral Passion",
                "This vibrant coral painting radiates warmth and energy.",
            ),
            wall(
                "golden-dreams",
                Vec3::new(2.0, 2.5, -6.9),
                "Golden Dreams",
                "This bright golden painting brings light and optimism.",
            ),
            // West wall (x = -7.4)
            wall(
                "mint-harmony",
                Vec3::new(-7.4, 2.5, -3.0),
                "Mint Harmony",
                "This soft mint painting brings balance and peace.",
            ),
            wall(
                "sage-wisdom",
                Vec3::new(-7.4, 2.5, 0.0),
                "Sage Wisdom",
                "This wise sage painting represents growth and natural beauty.",
            ),
            wall(
                "sunny-disposition",
                Vec3::new(-7.4, 2.5, 3.0),
                "Sunny Disposition",
                "This cheerful yellow painting lifts spirits.",
            ),
            // East wall (x = 8)
            wall(
                "purple-majesty",
                Vec3::new(8.0, 2.5, -3.0),
                "Purple Majesty",
                "This regal purple painting commands attention.",
            ),
            wall(
                "rose-blush",
                Vec3::new(8.0, 2.5, 0.0),
                "Rose Blush",
                "This delicate rose painting captures softness.",
            ),
            wall(
                "emerald-forest",
                Vec3::new(8.0, 2.5, 3.0),
                "Emerald Forest",
                "This rich emerald painting brings vitality.",
            ),
            // Interactive photo table
            Exhibit {
                id: "photo-table".to_string(),
                kind: ExhibitKind::Table,
                placement: Placement::FreeStanding,
                position: Vec3::new(2.0, 1.0, 5.0),
                display_name: "Roz Wyman Family Collection".to_string(),
                narration_text: "Explore the family photo album and documentary.".to_string(),
            },
        ];

        // The shipped layout has unique ids and is non-empty
        Self { exhibits }
    }
}

impl Default for ExhibitRegistry {
    fn default() -> Self {
        Self::default_museum()
    }
}
