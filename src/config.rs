//! Tunables shared by the web UI and the terminal runner.

/// Runtime settings. There is no settings file; callers start from
/// [`Settings::default`] and override individual fields from CLI flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Vertical scroll offset (px) past which "back to top" appears.
    pub scroll_threshold_px: f64,
    /// Shortest tick period a caller may request.
    pub min_interval_ms: u32,
    /// Longest tick period a caller may request.
    pub max_interval_ms: u32,
    /// Sleep between frames in the terminal runner instead of printing
    /// every frame immediately.
    pub realtime: bool,
}

pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 300.0;

impl Default for Settings {
    fn default() -> Self {
        Self {
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            min_interval_ms: 500,
            max_interval_ms: 10_000,
            realtime: false,
        }
    }
}

impl Settings {
    /// Resolve the tick period for a topic: the override, clamped to the
    /// allowed range, or the topic's own period.
    pub fn interval_for(&self, topic_interval_ms: u32, requested: Option<u32>) -> u32 {
        match requested {
            Some(ms) => ms.clamp(self.min_interval_ms, self.max_interval_ms),
            None => topic_interval_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.scroll_threshold_px, 300.0);
        assert!(!settings.realtime);
    }

    #[test]
    fn test_interval_override_clamped() {
        let settings = Settings::default();
        assert_eq!(settings.interval_for(2500, None), 2500);
        assert_eq!(settings.interval_for(2500, Some(1000)), 1000);
        assert_eq!(settings.interval_for(2500, Some(1)), 500);
        assert_eq!(settings.interval_for(2500, Some(60_000)), 10_000);
    }
}
