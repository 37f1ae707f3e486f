pub mod cache;
pub mod settings;

pub use cache::SettingsCache;
pub use settings::{
    CONFIG_SECTION, DEFAULT_DARK_THEME_COLOR, DEFAULT_LIGHT_THEME_COLOR, DEFAULT_OPACITY,
    DEFAULT_PERSIST_ON_TAB_SWITCH, LimelightSettings,
};
