//! Static asset catalog.
//!
//! Ordered records of display name, icon reference and category, consumed
//! read-only by presentational surfaces. A record whose icon is missing
//! renders a placeholder; its siblings are unaffected.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::VitrineError;

/// Opaque icon handle (asset path or sprite name).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconRef(pub String);

/// Record grouping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Languages, frameworks and tools.
    #[default]
    Technology,
    /// Offered services.
    Service,
    /// Short project tags.
    Tag,
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    /// Display name.
    pub name: String,
    /// Icon, if one is available.
    #[serde(default)]
    pub icon: Option<IconRef>,
    /// Grouping.
    #[serde(default)]
    pub category: Category,
}

/// What to draw in a record's icon position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSlot<'a> {
    /// Draw this icon.
    Icon(&'a IconRef),
    /// Draw an empty placeholder.
    Placeholder,
}

impl AssetRecord {
    /// Record with an icon.
    #[must_use]
    pub fn new(name: &str, icon: &str, category: Category) -> Self {
        Self {
            name: name.to_owned(),
            icon: Some(IconRef(icon.to_owned())),
            category,
        }
    }

    /// Icon to draw, or a placeholder when the reference is absent or
    /// empty.
    #[must_use]
    pub fn icon_slot(&self) -> IconSlot<'_> {
        match &self.icon {
            Some(icon) if !icon.0.trim().is_empty() => IconSlot::Icon(icon),
            _ => {
                log::debug!("no icon for {:?}, using placeholder", self.name);
                IconSlot::Placeholder
            }
        }
    }
}

/// Ordered list of [`AssetRecord`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Records in display order.
    #[serde(default, rename = "record")]
    pub records: Vec<AssetRecord>,
}

impl Catalog {
    /// Built-in technology list.
    #[must_use]
    pub fn builtin() -> Self {
        let tech = |name: &str, icon: &str| {
            AssetRecord::new(name, icon, Category::Technology)
        };
        Self {
            records: vec![
                tech("HTML 5", "html"),
                tech("CSS 3", "css"),
                tech("JavaScript", "javascript"),
                tech("TypeScript", "typescript"),
                tech("React JS", "reactjs"),
                tech("Redux Toolkit", "redux"),
                tech("Tailwind CSS", "tailwind"),
                tech("Node JS", "nodejs"),
                tech("MongoDB", "mongodb"),
                tech("Next.js", "nextjs"),
                tech("Git", "git"),
                tech("Figma", "figma"),
                tech("PostgreSQL", "postgresql"),
            ],
        }
    }

    /// Parse a catalog from TOML (`[[record]]` tables).
    pub fn from_toml_str(content: &str) -> Result<Self, VitrineError> {
        toml::from_str(content)
            .map_err(|e| VitrineError::CatalogParse(e.to_string()))
    }

    /// Load a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, VitrineError> {
        let content = std::fs::read_to_string(path).map_err(VitrineError::Io)?;
        let catalog = Self::from_toml_str(&content)?;
        log::info!(
            "loaded {} catalog records from {}",
            catalog.records.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Records of one category, in order.
    pub fn by_category(
        &self,
        category: Category,
    ) -> impl Iterator<Item = &AssetRecord> {
        self.records.iter().filter(move |r| r.category == category)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
