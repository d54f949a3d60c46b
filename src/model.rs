//! Image-set data model: JSON-facing definitions and the validated boundary
//! object the engine runs over.

use crate::foundation::error::{KaitenError, KaitenResult};
use crate::machine::SlideIndex;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One named entry (a dish, an interior shot) owning one or more slides.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ItemDef {
    /// Display name shown alongside the item's slides.
    pub name: String,
    /// Longer caption; empty when the item has none.
    #[serde(default)]
    pub description: String,
    /// Ordered image refs (URIs), one slide each. Must be non-empty.
    pub images: Vec<String>,
}

/// JSON-facing definition of one carousel's content.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ImageSetDef {
    /// Items in display order. May be empty (a "coming soon" track).
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

impl ImageSetDef {
    /// Single-track definition from captioned images, one item per slide —
    /// the flat gallery shape, as opposed to the grouped menu shape.
    pub fn from_captioned_images<I, S>(images: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self {
            items: images
                .into_iter()
                .map(|(caption, image)| ItemDef {
                    name: caption.into(),
                    description: String::new(),
                    images: vec![image.into()],
                })
                .collect(),
        }
    }
}

/// One named category of a multi-track page (e.g. a menu column).
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CategoryDef {
    /// Stable identifier, unique within its collection.
    pub id: String,
    /// Human-readable heading.
    pub name: String,
    /// Items in display order. May be empty (a "coming soon" column).
    #[serde(default)]
    pub items: Vec<ItemDef>,
}

impl CategoryDef {
    /// Build this category's independent image set.
    pub fn image_set(&self) -> KaitenResult<ImageSet> {
        ImageSet::from_def(ImageSetDef {
            items: self.items.clone(),
        })
    }
}

/// JSON-facing definition of a multi-track page: independent carousels
/// grouped under named categories. Grouping is presentation-side only; each
/// category runs its own [`ImageSet`] and its own timer.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CollectionDef {
    /// Categories in display order.
    #[serde(default)]
    pub categories: Vec<CategoryDef>,
}

impl CollectionDef {
    /// Parse a collection from a JSON reader. Call [`validate`] before use.
    ///
    /// [`validate`]: CollectionDef::validate
    pub fn from_reader<R: std::io::Read>(r: R) -> KaitenResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| KaitenError::serde(format!("parse collection JSON: {e}")))
    }

    /// Parse a collection from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> KaitenResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            KaitenError::validation(format!("open collection JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Parse a collection from a JSON string.
    pub fn from_json_str(s: &str) -> KaitenResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| KaitenError::serde(format!("parse collection JSON: {e}")))
    }

    /// Validate category ids (non-empty, unique) and every category's items.
    pub fn validate(&self) -> KaitenResult<()> {
        let mut seen = std::collections::BTreeSet::new();
        for cat in &self.categories {
            if cat.id.trim().is_empty() {
                return Err(KaitenError::validation("category id must be non-empty"));
            }
            if !seen.insert(cat.id.as_str()) {
                return Err(KaitenError::validation(format!(
                    "duplicate category id '{}'",
                    cat.id
                )));
            }
            validate_items(&cat.items)?;
        }
        Ok(())
    }
}

fn validate_items(items: &[ItemDef]) -> KaitenResult<()> {
    for item in items {
        if item.name.trim().is_empty() {
            return Err(KaitenError::validation("item name must be non-empty"));
        }
        if item.images.is_empty() {
            return Err(KaitenError::validation(format!(
                "item '{}' must declare at least one image",
                item.name
            )));
        }
        if item.images.iter().any(|r| r.trim().is_empty()) {
            return Err(KaitenError::validation(format!(
                "item '{}' has an empty image ref",
                item.name
            )));
        }
    }
    Ok(())
}

/// Validated, ordered image-set boundary object.
///
/// Flattening every item's image refs in order yields the addressable slide
/// sequence; the slide count is the sum of per-item image counts. Slide→item
/// lookups are derived on every read rather than cached, so they can never
/// drift from the live set.
#[derive(Clone, Debug)]
pub struct ImageSet {
    items: Vec<ItemDef>,
}

impl ImageSet {
    /// Validate and adopt a definition.
    pub fn from_def(def: ImageSetDef) -> KaitenResult<Self> {
        validate_items(&def.items)?;
        Ok(Self { items: def.items })
    }

    /// Parse an image set from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> KaitenResult<Self> {
        let def: ImageSetDef = serde_json::from_reader(r)
            .map_err(|e| KaitenError::serde(format!("parse image set JSON: {e}")))?;
        Self::from_def(def)
    }

    /// Parse an image set from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> KaitenResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            KaitenError::validation(format!("open image set JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Items in display order.
    pub fn items(&self) -> &[ItemDef] {
        &self.items
    }

    /// Total addressable slides, summed on read.
    pub fn slide_count(&self) -> usize {
        self.items.iter().map(|item| item.images.len()).sum()
    }

    /// Whether the set has no slides at all (the degenerate "coming soon"
    /// state; such a set must not drive a state machine).
    pub fn is_empty(&self) -> bool {
        self.slide_count() == 0
    }

    /// The item owning `slide`, as `(item index, item)`.
    ///
    /// The owner is the first item whose cumulative image-count range
    /// contains the slide. Derived on every call, never cached.
    pub fn item_for_slide(&self, slide: SlideIndex) -> Option<(usize, &ItemDef)> {
        let mut running = 0usize;
        for (idx, item) in self.items.iter().enumerate() {
            running += item.images.len();
            if slide.0 < running {
                return Some((idx, item));
            }
        }
        None
    }

    /// Image ref at `slide` in the flattened sequence.
    pub fn image_ref(&self, slide: SlideIndex) -> Option<&str> {
        let mut remaining = slide.0;
        for item in &self.items {
            if remaining < item.images.len() {
                return Some(&item.images[remaining]);
            }
            remaining -= item.images.len();
        }
        None
    }
}

#[cfg(test)]
#[path = "../tests/unit/model.rs"]
mod tests;
