//! The command surface: six handlers operating on the active editor.
//!
//! Provider rejections are caught here, logged, and swallowed; the command
//! then appears to do nothing, and no state changes.

use super::Limelight;
use crate::host::{CONTEXT_IS_ACTIVE, EditorHost};
use crate::symbols::deepest_symbol_at;

/// Shown when the symbol provider has nothing for the document.
pub const NO_SYMBOLS_MESSAGE: &str = "No language symbols found. Is the language supported?";

/// Shown when the reference provider returns no results.
pub const NO_REFERENCES_MESSAGE: &str = "No references found.";

/// Host command identifiers, for palette and keybinding registration.
pub const COMMAND_TOGGLE_BLOCK_FOCUS: &str = "limelight.toggleBlockFocus";
pub const COMMAND_SET_BLOCK_FOCUS: &str = "limelight.setBlockFocus";
pub const COMMAND_TOGGLE_SELECTION_FOCUS: &str = "limelight.toggleSelectionFocus";
pub const COMMAND_SET_SELECTION_FOCUS: &str = "limelight.setSelectionFocus";
pub const COMMAND_CLEAR_FOCUS: &str = "limelight.clearFocus";
pub const COMMAND_PEEK_REF: &str = "limelight.peekRef";

impl<H: EditorHost> Limelight<H> {
    /// Toggle symbol-block focus: clear when focused, otherwise focus the
    /// deepest symbol enclosing the cursor.
    pub async fn toggle_block_focus(&self) {
        let Some(editor) = self.host.active_editor() else {
            return;
        };

        if self.focus.contains(&editor.uri) {
            self.reset_editor_focus(&editor);
            return;
        }

        match self.host.document_symbols(&editor.uri).await {
            Ok(None) => {
                self.host.show_info_message(NO_SYMBOLS_MESSAGE);
            }
            Ok(Some(symbols)) => {
                if let Some(symbol) = deepest_symbol_at(&symbols, editor.cursor) {
                    self.focus.insert(editor.uri.clone(), symbol.range);
                    self.apply_focus(&editor);
                }
            }
            Err(error) => {
                log::error!(
                    target: "limelight::commands",
                    "toggle_block_focus: symbol query failed: {}",
                    error
                );
            }
        }
    }

    /// Focus the deepest symbol enclosing the cursor, re-targeting an
    /// existing focus; focusing the same range again clears it.
    pub async fn set_block_focus(&self) {
        let Some(editor) = self.host.active_editor() else {
            self.host.set_context(CONTEXT_IS_ACTIVE, false);
            return;
        };

        match self.host.document_symbols(&editor.uri).await {
            Ok(None) => {
                self.host.show_info_message(NO_SYMBOLS_MESSAGE);
                self.reset_editor_focus(&editor);
            }
            Ok(Some(symbols)) => {
                if let Some(symbol) = deepest_symbol_at(&symbols, editor.cursor) {
                    let range = symbol.range;
                    if self.focus.get(&editor.uri) == Some(range) {
                        self.reset_editor_focus(&editor);
                        return;
                    }
                    self.focus.insert(editor.uri.clone(), range);
                    self.apply_focus(&editor);
                }
            }
            Err(error) => {
                log::error!(
                    target: "limelight::commands",
                    "set_block_focus: symbol query failed: {}",
                    error
                );
            }
        }
    }

    /// Toggle selection focus: clear when focused, otherwise focus the
    /// current selection if it is non-empty.
    pub fn toggle_selection_focus(&self) {
        let Some(editor) = self.host.active_editor() else {
            return;
        };

        if self.focus.contains(&editor.uri) {
            self.reset_editor_focus(&editor);
            return;
        }

        if let Some(selection) = editor.selection {
            self.focus.insert(editor.uri.clone(), selection);
            self.apply_focus(&editor);
        }
    }

    /// Focus the current selection, re-targeting an existing focus. An
    /// empty selection, or one equal to the old range, only clears.
    pub fn set_selection_focus(&self) {
        let Some(editor) = self.host.active_editor() else {
            return;
        };

        let existing = self.focus.get(&editor.uri);
        if existing.is_some() {
            self.reset_editor_focus(&editor);
            match editor.selection {
                None => return,
                Some(selection) if existing == Some(selection) => return,
                Some(_) => {}
            }
        }

        if let Some(selection) = editor.selection {
            self.focus.insert(editor.uri.clone(), selection);
            self.apply_focus(&editor);
        }
    }

    /// Clear the active editor's focus, if any.
    pub fn clear_focus(&self) {
        let Some(editor) = self.host.active_editor() else {
            return;
        };

        if self.focus.contains(&editor.uri) {
            self.reset_editor_focus(&editor);
        }
    }

    /// Peek references to the symbol under the cursor. Holds no focus
    /// state; shares only the command surface.
    pub async fn peek_references(&self) {
        let Some(editor) = self.host.active_editor() else {
            return;
        };

        match self.host.references(&editor.uri, editor.cursor).await {
            Ok(Some(locations)) if !locations.is_empty() => {
                self.host
                    .peek_locations(&editor.uri, editor.cursor, &locations);
            }
            Ok(_) => {
                self.host.show_info_message(NO_REFERENCES_MESSAGE);
            }
            Err(error) => {
                log::error!(
                    target: "limelight::commands",
                    "peek_references: reference query failed: {}",
                    error
                );
            }
        }
    }
}
