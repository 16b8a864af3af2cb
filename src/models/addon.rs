//! Catalog entry types for purchasable addons.
//!
//! These mirror the storefront catalog JSON (camelCase on the wire). The
//! cart only ever stores [`Addon::id`]; everything else is display
//! metadata consumed by the pages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Addon category.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AddonType {
    Mob,
    Item,
    Block,
}

impl fmt::Display for AddonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Mob => "mob",
            Self::Item => "item",
            Self::Block => "block",
        };
        write!(f, "{}", label)
    }
}

/// Short and long description text for an addon.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct AddonDescription {
    /// One-line summary shown on listing cards.
    pub short: String,
    /// Full description shown on the detail page.
    pub long: String,
}

/// A purchasable catalog entry.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Addon {
    /// Unique catalog key, referenced by the cart.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    pub slug: String,
    /// Addon category.
    #[serde(rename = "type")]
    pub kind: AddonType,
    /// Listing and detail description text.
    pub description: AddonDescription,
    /// Price in the storefront currency.
    pub price: f64,
    /// Thumbnail image path.
    pub thumbnail: String,
    /// Gallery image paths, in display order.
    pub gallery: Vec<String>,
    /// Tags for categorization.
    pub tags: Vec<String>,
    /// Supported Minecraft version (display only).
    pub mc_version: String,
    /// Download size label (display only).
    pub file_size: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addon_deserializes_catalog_entry() {
        let json = r#"{
            "id": "addon-zombie-king",
            "name": "Zombie King",
            "slug": "zombie-king",
            "type": "mob",
            "description": {
                "short": "A crowned undead boss.",
                "long": "Spawns in abandoned castles and commands zombie hordes."
            },
            "price": 4.99,
            "thumbnail": "/images/zombie-king/thumb.png",
            "gallery": ["/images/zombie-king/1.png", "/images/zombie-king/2.png"],
            "tags": ["boss", "undead"],
            "mcVersion": "1.21",
            "fileSize": "2.4 MB"
        }"#;

        let addon: Addon = serde_json::from_str(json).expect("valid catalog entry");
        assert_eq!(addon.id, "addon-zombie-king");
        assert_eq!(addon.kind, AddonType::Mob);
        assert_eq!(addon.description.short, "A crowned undead boss.");
        assert_eq!(addon.gallery.len(), 2);
        assert_eq!(addon.mc_version, "1.21");
        assert_eq!(addon.file_size, "2.4 MB");
    }

    #[test]
    fn test_addon_type_labels() {
        assert_eq!(AddonType::Mob.to_string(), "mob");
        assert_eq!(AddonType::Item.to_string(), "item");
        assert_eq!(AddonType::Block.to_string(), "block");
    }
}
