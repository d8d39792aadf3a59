//! Flash prevention before the controller starts.
//!
//! Pages render before scripts finish loading. When the stored preference is
//! dark, [`prepaint`] marks the root and paints dark colors inline so the
//! first frame is not light. The inline colors are only a stopgap: the
//! controller removes them on its first apply, after which the stylesheet
//! and the root class decide the colors.

use crate::controller::DARK_CLASS;
use crate::dom::{Document, Element};
use crate::mode::ThemeMode;
use crate::store::PreferenceStore;

/// Inline background painted before the stylesheet takes over.
pub const PREPAINT_BACKGROUND: &str = "#0f1419";

/// Inline text color painted before the stylesheet takes over.
pub const PREPAINT_COLOR: &str = "#e4e7eb";

const PAINTED_PROPERTIES: [&str; 2] = ["background-color", "color"];

/// Pre-paints `doc` from the stored preference.
///
/// Only a stored `Dark` preference does anything; the system signal is not
/// consulted. Returns `true` if the document was painted.
pub fn prepaint(store: &dyn PreferenceStore, doc: &mut Document) -> bool {
    if store.get() != Some(ThemeMode::Dark) {
        return false;
    }
    let root = doc.root_mut();
    root.add_class(DARK_CLASS);
    root.set_style(PAINTED_PROPERTIES[0], PREPAINT_BACKGROUND);
    root.set_style(PAINTED_PROPERTIES[1], PREPAINT_COLOR);
    true
}

/// Removes the inline colors left by [`prepaint`].
pub(crate) fn clear_prepaint(root: &mut Element) {
    for property in PAINTED_PROPERTIES {
        root.set_style(property, "");
    }
}
