pub mod cache;
pub mod style;

pub use cache::{DimDecoration, DimDecorationCache};
pub use style::{DimStyle, RangeBehavior, ThemeStyle};
