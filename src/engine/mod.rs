//! The focus controller: per-document focus state and the transitions
//! driven by commands and host events.

mod commands;
mod events;
mod focus_table;
mod render;

pub use commands::{
    COMMAND_CLEAR_FOCUS, COMMAND_PEEK_REF, COMMAND_SET_BLOCK_FOCUS, COMMAND_SET_SELECTION_FOCUS,
    COMMAND_TOGGLE_BLOCK_FOCUS, COMMAND_TOGGLE_SELECTION_FOCUS, NO_REFERENCES_MESSAGE,
    NO_SYMBOLS_MESSAGE,
};
pub use focus_table::FocusTable;

use std::sync::Arc;
use url::Url;

use crate::config::{LimelightSettings, SettingsCache};
use crate::decoration::{DimDecoration, DimDecorationCache};
use crate::host::{CONTEXT_IS_ACTIVE, EditorHost};
use crate::text::Range;

/// The focus-dimming engine.
///
/// Owns the host handle, the per-document focus table, and the settings and
/// decoration caches. Constructing it is activation; [`Limelight::shutdown`]
/// is deactivation and releases everything registered with the host.
pub struct Limelight<H: EditorHost> {
    host: H,
    focus: FocusTable,
    settings: SettingsCache,
    dim: DimDecorationCache,
}

impl<H: EditorHost> Limelight<H> {
    pub fn new(host: H) -> Self {
        Self {
            host,
            focus: FocusTable::new(),
            settings: SettingsCache::new(),
            dim: DimDecorationCache::new(),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Whether `uri` currently has a focused range.
    pub fn is_focused(&self, uri: &Url) -> bool {
        self.focus.contains(uri)
    }

    /// The focused range for `uri`, if any.
    pub fn focused_range(&self, uri: &Url) -> Option<Range> {
        self.focus.get(uri)
    }

    /// Current settings snapshot; `reload` bypasses the cache.
    pub fn settings(&self, reload: bool) -> Arc<LimelightSettings> {
        self.settings.get(reload, || self.host.configuration())
    }

    /// Current dim decoration (style + host handle); `reload` rebuilds it
    /// from freshly resolved settings and disposes the superseded handle.
    pub fn dim_decoration(&self, reload: bool) -> Arc<DimDecoration> {
        self.dim.get(&self.host, &self.settings, reload)
    }

    /// Deactivate: dispose the registered decoration handle, drop all focus
    /// entries, lower the context flag.
    pub fn shutdown(&self) {
        if let Some(decoration) = self.dim.take() {
            self.host.dispose_decoration(decoration.handle);
        }
        self.focus.clear();
        self.host.set_context(CONTEXT_IS_ACTIVE, false);
    }
}
