use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name of the configuration section this engine reads its settings from.
pub const CONFIG_SECTION: &str = "limelight";

pub const DEFAULT_OPACITY: f64 = 0.1;
pub const DEFAULT_LIGHT_THEME_COLOR: &str = "rgb(0, 0, 0)";
pub const DEFAULT_DARK_THEME_COLOR: &str = "rgb(255, 255, 255)";
pub const DEFAULT_PERSIST_ON_TAB_SWITCH: bool = true;

/// Immutable snapshot of the user-configurable values.
///
/// Built from the host's resolved `limelight` settings section; a key that
/// is absent or malformed falls back to its default, per key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LimelightSettings {
    /// Opacity applied to dimmed lines, in `(0, 1]`.
    pub opacity: f64,
    /// Dim color under light themes.
    pub light_theme_color: String,
    /// Dim color under dark themes.
    pub dark_theme_color: String,
    /// Keep focus entries alive when the active editor changes.
    pub persist_on_tab_switch: bool,
}

impl Default for LimelightSettings {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            light_theme_color: DEFAULT_LIGHT_THEME_COLOR.to_string(),
            dark_theme_color: DEFAULT_DARK_THEME_COLOR.to_string(),
            persist_on_tab_switch: DEFAULT_PERSIST_ON_TAB_SWITCH,
        }
    }
}

impl LimelightSettings {
    /// Resolve a settings snapshot from the host-supplied section value.
    ///
    /// Resolution is lenient: each key is read independently and falls back
    /// to its default when missing or of the wrong type. An opacity outside
    /// `(0, 1]` (or non-finite) counts as malformed.
    pub fn from_section(section: &Value) -> Self {
        Self {
            opacity: read_setting(section, "opacity")
                .filter(|opacity| is_valid_opacity(*opacity))
                .unwrap_or(DEFAULT_OPACITY),
            light_theme_color: read_setting(section, "lightThemeColor")
                .unwrap_or_else(|| DEFAULT_LIGHT_THEME_COLOR.to_string()),
            dark_theme_color: read_setting(section, "darkThemeColor")
                .unwrap_or_else(|| DEFAULT_DARK_THEME_COLOR.to_string()),
            persist_on_tab_switch: read_setting(section, "persistOnTabSwitch")
                .unwrap_or(DEFAULT_PERSIST_ON_TAB_SWITCH),
        }
    }
}

fn read_setting<T: DeserializeOwned>(section: &Value, key: &str) -> Option<T> {
    section
        .get(key)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
}

fn is_valid_opacity(opacity: f64) -> bool {
    opacity.is_finite() && opacity > 0.0 && opacity <= 1.0
}
