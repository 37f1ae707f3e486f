//! Process-wide settings cache.

use arc_swap::ArcSwapOption;
use serde_json::Value;
use std::sync::Arc;

use super::settings::LimelightSettings;

/// Memoized store for the resolved settings snapshot.
///
/// `get` returns the cached snapshot unless it is empty or a reload is
/// forced, in which case the section is re-read through `read_section`,
/// resolved, and stored as the new cache.
pub struct SettingsCache {
    cached: ArcSwapOption<LimelightSettings>,
}

impl Default for SettingsCache {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsCache {
    pub fn new() -> Self {
        Self {
            cached: ArcSwapOption::const_empty(),
        }
    }

    /// Get the current settings snapshot.
    ///
    /// `read_section` supplies the raw `limelight` section from the host; it
    /// is only invoked on a cache miss or when `reload` is true.
    pub fn get(&self, reload: bool, read_section: impl FnOnce() -> Value) -> Arc<LimelightSettings> {
        if !reload {
            if let Some(settings) = self.cached.load_full() {
                return settings;
            }
        }

        let settings = Arc::new(LimelightSettings::from_section(&read_section()));
        log::debug!(
            target: "limelight::config",
            "resolved settings: {:?}",
            settings
        );
        self.cached.store(Some(Arc::clone(&settings)));
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;

    #[test]
    fn test_reads_lazily_and_caches() {
        let cache = SettingsCache::new();
        let reads = Cell::new(0);
        let read = || {
            reads.set(reads.get() + 1);
            json!({ "opacity": 0.4 })
        };

        let first = cache.get(false, read);
        assert_eq!(first.opacity, 0.4);
        assert_eq!(reads.get(), 1);

        // Second access must not re-read the section.
        let second = cache.get(false, || {
            reads.set(reads.get() + 1);
            json!({ "opacity": 0.9 })
        });
        assert_eq!(second.opacity, 0.4);
        assert_eq!(reads.get(), 1);
    }

    #[test]
    fn test_reload_replaces_the_snapshot() {
        let cache = SettingsCache::new();
        cache.get(false, || json!({ "opacity": 0.4 }));

        let reloaded = cache.get(true, || json!({ "opacity": 0.7 }));
        assert_eq!(reloaded.opacity, 0.7);

        // The reloaded snapshot becomes the new cache.
        let cached = cache.get(false, || unreachable!("must hit the cache"));
        assert_eq!(cached.opacity, 0.7);
    }
}
