//! Furniture catalogue: the placeable item types and their fixed presets.

#[cfg(test)]
#[path = "furniture_test.rs"]
mod furniture_test;

use serde::{Deserialize, Serialize};

/// A placeable furniture type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureKind {
    Sofa,
    Table,
    Chair,
}

/// Fixed dimensions for a furniture type, in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FurniturePreset {
    pub width: f64,
    pub height: f64,
    /// Corner rounding radius. Zero means square corners.
    pub corner_radius: f64,
}

impl FurnitureKind {
    /// Every kind, in toolbar order.
    pub const ALL: [Self; 3] = [Self::Sofa, Self::Table, Self::Chair];

    /// Preset dimensions for this kind.
    #[must_use]
    pub fn preset(self) -> FurniturePreset {
        match self {
            Self::Sofa => FurniturePreset { width: 180.0, height: 80.0, corner_radius: 10.0 },
            Self::Table => FurniturePreset { width: 120.0, height: 120.0, corner_radius: 0.0 },
            Self::Chair => FurniturePreset { width: 60.0, height: 60.0, corner_radius: 0.0 },
        }
    }

    /// Human-readable name for UI labels.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sofa => "Sofa",
            Self::Table => "Table",
            Self::Chair => "Chair",
        }
    }

    /// DOM identifier of the toolbar control that adds this kind.
    #[must_use]
    pub fn control_id(self) -> &'static str {
        match self {
            Self::Sofa => "add-sofa",
            Self::Table => "add-table",
            Self::Chair => "add-chair",
        }
    }

    /// Resolve a toolbar control identifier. Unknown identifiers yield `None`.
    #[must_use]
    pub fn from_control_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.control_id() == id)
    }
}
