//! Rendering of the Focused/Unfocused states onto an editor.

use super::Limelight;
use crate::host::{CONTEXT_IS_ACTIVE, EditorHost, EditorView};
use crate::text::complement;

impl<H: EditorHost> Limelight<H> {
    /// Render `editor` according to its own focus state.
    ///
    /// Focused: dim everything around the focused range, scroll it into the
    /// viewport center, raise the context flag. Unfocused: lower the flag.
    pub(crate) fn apply_focus(&self, editor: &EditorView) {
        match self.focus.get(&editor.uri) {
            Some(range) => {
                let decoration = self.dim_decoration(false);
                let dim_ranges = complement(range, editor.line_count).to_vec();
                log::debug!(
                    target: "limelight::render",
                    "dimming {} around {:?} ({} ranges)",
                    editor.uri,
                    range,
                    dim_ranges.len()
                );
                self.host
                    .set_dim_ranges(&editor.uri, decoration.handle, &dim_ranges);
                self.host.reveal_range(&editor.uri, range);
                self.host.set_context(CONTEXT_IS_ACTIVE, true);
            }
            None => {
                // Clear any stale dimming, but never build a decoration
                // just to apply an empty list.
                if let Some(decoration) = self.dim.current() {
                    self.host.set_dim_ranges(&editor.uri, decoration.handle, &[]);
                }
                self.host.set_context(CONTEXT_IS_ACTIVE, false);
            }
        }
    }

    /// Clear all dimming in `editor`, drop its focus entry, lower the flag.
    pub(crate) fn reset_editor_focus(&self, editor: &EditorView) {
        let decoration = self.dim_decoration(false);
        self.host.set_dim_ranges(&editor.uri, decoration.handle, &[]);
        self.focus.remove(&editor.uri);
        self.host.set_context(CONTEXT_IS_ACTIVE, false);
    }
}
