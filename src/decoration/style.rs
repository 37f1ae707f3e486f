use serde::Serialize;

use crate::config::LimelightSettings;

/// How a dimmed range grows when the document is edited at its edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RangeBehavior {
    OpenOpen,
    ClosedOpen,
    OpenClosed,
    /// Edits at either edge stay inside the dimmed range.
    ClosedClosed,
}

/// Text styling applied to dimmed lines under one theme.
///
/// Everything except the color is an explicit reset so dimming never
/// introduces text-decoration changes of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeStyle {
    pub color: String,
    pub text_decoration: String,
    pub font_style: String,
    pub font_weight: String,
}

impl ThemeStyle {
    fn plain(color: &str) -> Self {
        Self {
            color: color.to_string(),
            text_decoration: "none".to_string(),
            font_style: "normal".to_string(),
            font_weight: "normal".to_string(),
        }
    }
}

/// How to render a dimmed line, independent of which ranges it is applied
/// to. Built once per settings generation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimStyle {
    pub is_whole_line: bool,
    pub range_behavior: RangeBehavior,
    pub opacity: f64,
    pub light: ThemeStyle,
    pub dark: ThemeStyle,
}

impl DimStyle {
    pub fn from_settings(settings: &LimelightSettings) -> Self {
        Self {
            is_whole_line: true,
            range_behavior: RangeBehavior::ClosedClosed,
            opacity: settings.opacity,
            light: ThemeStyle::plain(&settings.light_theme_color),
            dark: ThemeStyle::plain(&settings.dark_theme_color),
        }
    }
}
