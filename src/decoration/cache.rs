//! Cached pairing of the dim style with its host-side decoration handle.

use arc_swap::ArcSwapOption;
use std::sync::Arc;

use super::style::DimStyle;
use crate::config::SettingsCache;
use crate::host::{DecorationId, EditorHost};

/// A dim style together with the handle the host registered for it.
#[derive(Debug, Clone, PartialEq)]
pub struct DimDecoration {
    pub style: DimStyle,
    pub handle: DecorationId,
}

/// Memoized dim decoration, rebuilt whenever the settings generation
/// changes.
///
/// Mirrors the settings-cache contract: `get` returns the cached decoration
/// unless absent or a reload is requested; a rebuild reads the current
/// settings (propagating the reload flag), registers the new style with the
/// host, and disposes the superseded handle.
pub struct DimDecorationCache {
    cached: ArcSwapOption<DimDecoration>,
}

impl Default for DimDecorationCache {
    fn default() -> Self {
        Self::new()
    }
}

impl DimDecorationCache {
    pub fn new() -> Self {
        Self {
            cached: ArcSwapOption::const_empty(),
        }
    }

    pub fn get<H: EditorHost + ?Sized>(
        &self,
        host: &H,
        settings: &SettingsCache,
        reload: bool,
    ) -> Arc<DimDecoration> {
        if !reload {
            if let Some(decoration) = self.cached.load_full() {
                return decoration;
            }
        }

        let settings = settings.get(reload, || host.configuration());
        let style = DimStyle::from_settings(&settings);
        let handle = host.create_dim_decoration(&style);
        log::debug!(
            target: "limelight::render",
            "registered dim decoration {:?} (opacity {})",
            handle,
            style.opacity
        );

        let decoration = Arc::new(DimDecoration { style, handle });
        if let Some(stale) = self.cached.swap(Some(Arc::clone(&decoration))) {
            host.dispose_decoration(stale.handle);
        }
        decoration
    }

    /// The cached decoration, if one has been built. Never builds.
    pub fn current(&self) -> Option<Arc<DimDecoration>> {
        self.cached.load_full()
    }

    /// Drop the cached decoration, returning it so the caller can dispose
    /// the handle.
    pub fn take(&self) -> Option<Arc<DimDecoration>> {
        self.cached.swap(None)
    }
}
