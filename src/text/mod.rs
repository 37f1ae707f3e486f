pub mod complement;
pub mod position;

// Re-export main types and functions
pub use complement::{DimRanges, complement};
pub use position::{Position, Range};
