//! Drag configuration.
//!
//! Loaded from JSON with every field optional; missing fields fall back to
//! the values in [`crate::constants`].

use crate::constants::{
    AUTO_SCROLL_HOT_ZONE, AUTO_SCROLL_INTERVAL_SECS, AUTO_SCROLL_STEP_FRACTION,
    LONG_PRESS_DELAY_SECS, LONG_PRESS_SLOP,
};
use crate::error::{DragError, DragResult};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Seconds a press must be held before the drag begins
    pub long_press_delay: f64,
    /// Movement allowed during the hold
    pub long_press_slop: f32,
    /// Seconds between edge-scroll checks
    pub auto_scroll_interval: f64,
    /// Width of the strip outside each scrollable edge
    pub hot_zone_width: f32,
    /// Fraction of the viewport scrolled per tick
    pub scroll_step_fraction: f32,
    /// Scroll vertical surfaces near their top/bottom edges
    pub vertical_edge_scroll: bool,
    /// Canvas region that deletes the item when the drag ends over it
    pub delete_zone: Option<Rect>,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            long_press_delay: LONG_PRESS_DELAY_SECS,
            long_press_slop: LONG_PRESS_SLOP,
            auto_scroll_interval: AUTO_SCROLL_INTERVAL_SECS,
            hot_zone_width: AUTO_SCROLL_HOT_ZONE,
            scroll_step_fraction: AUTO_SCROLL_STEP_FRACTION,
            vertical_edge_scroll: true,
            delete_zone: None,
        }
    }
}

impl DragConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> DragResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_json(&contents)?;
        tracing::debug!("Loaded drag config from {}", path.display());
        Ok(config)
    }

    pub fn from_json(json: &str) -> DragResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> DragResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn with_delete_zone(mut self, zone: Rect) -> Self {
        self.delete_zone = Some(zone);
        self
    }

    pub fn validate(&self) -> DragResult<()> {
        if !(self.long_press_delay.is_finite() && self.long_press_delay >= 0.0) {
            return Err(DragError::InvalidConfig(format!(
                "long_press_delay must be >= 0, got {}",
                self.long_press_delay
            )));
        }
        if !(self.long_press_slop.is_finite() && self.long_press_slop >= 0.0) {
            return Err(DragError::InvalidConfig(format!(
                "long_press_slop must be >= 0, got {}",
                self.long_press_slop
            )));
        }
        if !(self.auto_scroll_interval.is_finite() && self.auto_scroll_interval > 0.0) {
            return Err(DragError::InvalidConfig(format!(
                "auto_scroll_interval must be > 0, got {}",
                self.auto_scroll_interval
            )));
        }
        for (name, secs) in [
            ("long_press_delay", self.long_press_delay),
            ("auto_scroll_interval", self.auto_scroll_interval),
        ] {
            if Duration::try_from_secs_f64(secs).is_err() {
                return Err(DragError::InvalidConfig(format!(
                    "{name} is out of range for a duration, got {secs}"
                )));
            }
        }
        if !(self.hot_zone_width.is_finite() && self.hot_zone_width > 0.0) {
            return Err(DragError::InvalidConfig(format!(
                "hot_zone_width must be > 0, got {}",
                self.hot_zone_width
            )));
        }
        if !(self.scroll_step_fraction > 0.0 && self.scroll_step_fraction <= 1.0) {
            return Err(DragError::InvalidConfig(format!(
                "scroll_step_fraction must be in (0, 1], got {}",
                self.scroll_step_fraction
            )));
        }
        if let Some(zone) = self.delete_zone {
            if zone.is_degenerate() {
                return Err(DragError::InvalidConfig(
                    "delete_zone must have a positive area".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Hold time before a press turns into a drag. Values that `validate`
    /// would reject saturate instead of panicking.
    pub fn long_press_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.long_press_delay).unwrap_or(Duration::MAX)
    }

    pub fn auto_scroll_period(&self) -> Duration {
        Duration::try_from_secs_f64(self.auto_scroll_interval).unwrap_or(Duration::MAX)
    }
}
