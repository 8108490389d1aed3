//! Quick-link list model and its persisted JSON form.
//!
//! The front-end reads the list once at startup and writes it back on every
//! explicit save from the link editor. Anything malformed falls back to the
//! placeholder set; decoding never fails into the render loop.

use crate::config::QUICK_LINK_SLOTS;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

impl QuickLink {
    /// Placeholder entry for slot `index` (zero-based).
    pub fn placeholder(index: usize) -> Self {
        Self {
            label: format!("Link {}", index + 1),
            url: "#".to_string(),
        }
    }

    /// Display label, falling back to the slot placeholder when empty.
    pub fn display_label(&self, index: usize) -> String {
        if self.label.is_empty() {
            format!("Link {}", index + 1)
        } else {
            self.label.clone()
        }
    }

    /// Navigation target, `#` when no URL is set.
    pub fn href(&self) -> &str {
        if self.url.is_empty() {
            "#"
        } else {
            &self.url
        }
    }
}

#[derive(Debug, Error)]
pub enum LinksError {
    #[error("failed to encode quick links: {0}")]
    Encode(#[from] serde_json::Error),
}

/// The five placeholder entries used when nothing valid is persisted.
pub fn default_links() -> Vec<QuickLink> {
    (0..QUICK_LINK_SLOTS).map(QuickLink::placeholder).collect()
}

/// Decode a persisted link list, padding or truncating to exactly
/// `QUICK_LINK_SLOTS` entries. `None`, empty, or malformed input yields
/// the placeholder set.
pub fn decode_links(stored: Option<&str>) -> Vec<QuickLink> {
    let mut links = match stored {
        Some(raw) => match serde_json::from_str::<Vec<QuickLink>>(raw) {
            Ok(list) => list,
            Err(e) => {
                log::warn!("ignoring malformed stored links: {e}");
                Vec::new()
            }
        },
        None => Vec::new(),
    };
    if links.is_empty() {
        return default_links();
    }
    links.truncate(QUICK_LINK_SLOTS);
    for i in links.len()..QUICK_LINK_SLOTS {
        links.push(QuickLink::placeholder(i));
    }
    links
}

/// Encode the list for storage.
pub fn encode_links(links: &[QuickLink]) -> Result<String, LinksError> {
    Ok(serde_json::to_string(links)?)
}

/// Apply one edited field, trimming whitespace. `kind` mirrors the editor
/// input tagging: `label` or `url`.
pub fn set_link_field(links: &mut [QuickLink], index: usize, kind: &str, value: &str) {
    if let Some(link) = links.get_mut(index) {
        let value = value.trim().to_string();
        match kind {
            "label" => link.label = value,
            "url" => link.url = value,
            _ => {}
        }
    }
}
