//! Host event handlers: editor switches, configuration changes, document
//! lifecycle.

use url::Url;

use super::Limelight;
use crate::host::{CONTEXT_IS_ACTIVE, EditorHost, EditorView};

impl<H: EditorHost> Limelight<H> {
    /// The host's active editor changed.
    ///
    /// The new editor is re-rendered per its own focus state. When
    /// `persistOnTabSwitch` is off, every document's focus is dropped
    /// instead and the context flag lowered.
    pub fn active_editor_changed(&self, editor: Option<&EditorView>) {
        if let Some(editor) = editor {
            log::debug!(
                target: "limelight::events",
                "active editor changed: {}",
                editor.uri
            );
            self.apply_focus(editor);
        }

        if !self.settings(false).persist_on_tab_switch {
            if let Some(editor) = editor {
                self.reset_editor_focus(editor);
            }
            self.focus.clear();
            self.host.set_context(CONTEXT_IS_ACTIVE, false);
        }
    }

    /// The host's configuration changed.
    ///
    /// When the change touches the `limelight` section, the settings and
    /// dim-style caches are rebuilt and the active editor re-rendered.
    /// Focus entries are untouched.
    pub fn configuration_changed(&self, affects_limelight: bool) {
        if !affects_limelight {
            return;
        }

        log::debug!(
            target: "limelight::events",
            "configuration changed, rebuilding dim decoration"
        );
        self.dim_decoration(true);
        if let Some(editor) = self.host.active_editor() {
            self.apply_focus(&editor);
        }
    }

    /// A document closed; prune its focus entry so the table cannot grow
    /// without bound.
    pub fn document_closed(&self, uri: &Url) {
        if self.focus.remove(uri).is_some() {
            log::debug!(target: "limelight::events", "pruned focus entry for {}", uri);
        }
    }
}
