pub mod config;
pub mod decoration;
pub mod engine;
pub mod error;
pub mod host;
pub mod symbols;
pub mod text;

// Re-export the main engine type and the surfaces hosts wire up against
pub use config::{CONFIG_SECTION, LimelightSettings, SettingsCache};
pub use decoration::{DimDecoration, DimDecorationCache, DimStyle, RangeBehavior, ThemeStyle};
pub use engine::{FocusTable, Limelight, NO_REFERENCES_MESSAGE, NO_SYMBOLS_MESSAGE};
pub use error::{LimelightError, LimelightResult};
pub use host::{CONTEXT_IS_ACTIVE, DecorationId, EditorHost, EditorView, Location};
pub use symbols::{SymbolKind, SymbolNode, deepest_symbol_at};
pub use text::{DimRanges, Position, Range, complement};
