//! Show/hide toggle shared by the listing and the generated menu

use serde::{Deserialize, Serialize};

/// Whether a node is shown in a given surface (listing or menu)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Show,
    Hide,
}

impl Visibility {
    /// Host meta values: only an explicit `hide` hides.
    pub fn from_meta(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("hide") => Visibility::Hide,
            _ => Visibility::Show,
        }
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Visibility::Hide)
    }
}
