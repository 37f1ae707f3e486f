//! The seam between the focus engine and the host editor.
//!
//! The engine never touches a concrete editor API. The active-editor
//! snapshot, settings reads, provider queries, the decoration surface,
//! messages, and the UI-context flag all come through [`EditorHost`].
//! Provider queries are the only asynchronous methods; a command handler
//! suspends there and nowhere else.

use async_trait::async_trait;
use serde_json::Value;
use url::Url;

use crate::decoration::DimStyle;
use crate::error::LimelightResult;
use crate::symbols::SymbolNode;
use crate::text::{Position, Range};

/// UI-context flag mirroring whether the active document is focused.
/// Consumers (keybinding `when` clauses) read it by this key.
pub const CONTEXT_IS_ACTIVE: &str = "limelight.isActive";

/// Opaque handle for a decoration style registered with the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecorationId(u64);

impl DecorationId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// A range inside some document, as returned by the reference provider.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub uri: Url,
    pub range: Range,
}

impl Location {
    pub fn new(uri: Url, range: Range) -> Self {
        Self { uri, range }
    }
}

/// Snapshot of the host's active editor at the moment a handler runs.
#[derive(Debug, Clone)]
pub struct EditorView {
    /// Canonical identity of the open document.
    pub uri: Url,
    /// Total number of lines in the document.
    pub line_count: u32,
    /// Cursor position (the active end of the selection).
    pub cursor: Position,
    /// Current selection, `None` when empty.
    pub selection: Option<Range>,
}

/// Host collaborators consumed by the focus engine.
#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Snapshot of the currently active editor, if any.
    fn active_editor(&self) -> Option<EditorView>;

    /// The resolved `limelight` settings section.
    fn configuration(&self) -> Value;

    /// Query the document-symbol provider. `None` means the provider had
    /// nothing for this document (e.g. unsupported language).
    async fn document_symbols(&self, uri: &Url) -> LimelightResult<Option<Vec<SymbolNode>>>;

    /// Query the reference provider at a position.
    async fn references(
        &self,
        uri: &Url,
        position: Position,
    ) -> LimelightResult<Option<Vec<Location>>>;

    /// Register a decoration style, returning a handle for later
    /// application and disposal.
    fn create_dim_decoration(&self, style: &DimStyle) -> DecorationId;

    /// Release a registered decoration style.
    fn dispose_decoration(&self, id: DecorationId);

    /// Apply the decoration to `ranges` in the editor showing `uri`.
    /// Idempotent, last call wins; an empty list clears all dimming.
    fn set_dim_ranges(&self, uri: &Url, decoration: DecorationId, ranges: &[Range]);

    /// Scroll `range` into the center of the viewport.
    fn reveal_range(&self, uri: &Url, range: Range);

    /// Set a UI-context flag consumed by the host's keybinding machinery.
    fn set_context(&self, key: &str, value: bool);

    /// Show an informational message to the user.
    fn show_info_message(&self, message: &str);

    /// Open the host's reference-peek UI anchored at `position`.
    fn peek_locations(&self, uri: &Url, position: Position, locations: &[Location]);
}
