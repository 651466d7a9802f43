//! Tier heights and gesture tuning for a sheet.

use crate::state::SheetValue;

/// Fixed tier heights and thresholds for a [`SheetController`].
///
/// Heights are in logical pixels, velocities in logical pixels per second.
/// The defaults reproduce the classic three-tier sheet: half expanded at
/// 400, fully expanded at 700, with a 500 px/s flick threshold and a
/// 300 ms snap transition.
///
/// [`SheetController`]: crate::SheetController
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetConfig {
    /// Resting height of the [`SheetValue::HalfExpanded`] tier.
    pub half_expanded_height: f32,
    /// Resting height of the [`SheetValue::Expanded`] tier. Also the upper
    /// clamp for the height while dragging.
    pub expanded_height: f32,
    /// Release speed above which a gesture counts as a flick. Exactly this
    /// speed does not; the comparison is strict.
    pub flick_threshold: f32,
    /// Duration of the snap transition reported to the host.
    pub animation_millis: u64,
}

impl SheetConfig {
    /// Panics if the heights are not positive and ascending, or the
    /// threshold is not positive. Invalid tier tables are a programming
    /// error, not a runtime condition.
    pub fn new(
        half_expanded_height: f32,
        expanded_height: f32,
        flick_threshold: f32,
        animation_millis: u64,
    ) -> Self {
        assert!(
            half_expanded_height > 0.0 && expanded_height > half_expanded_height,
            "sheet tier heights must be positive and ascending (half {half_expanded_height}, expanded {expanded_height})"
        );
        assert!(
            flick_threshold > 0.0,
            "flick threshold must be positive, got {flick_threshold}"
        );
        Self {
            half_expanded_height,
            expanded_height,
            flick_threshold,
            animation_millis,
        }
    }

    /// The fixed resting height of a tier. This table is the only source of
    /// animation targets.
    pub fn height_for(&self, value: SheetValue) -> f32 {
        match value {
            SheetValue::Hidden => 0.0,
            SheetValue::HalfExpanded => self.half_expanded_height,
            SheetValue::Expanded => self.expanded_height,
        }
    }

    pub fn max_height(&self) -> f32 {
        self.expanded_height
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self::new(400.0, 700.0, 500.0, 300)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tier_table() {
        let config = SheetConfig::default();
        assert_eq!(config.height_for(SheetValue::Hidden), 0.0);
        assert_eq!(config.height_for(SheetValue::HalfExpanded), 400.0);
        assert_eq!(config.height_for(SheetValue::Expanded), 700.0);
        assert_eq!(config.max_height(), 700.0);
        assert_eq!(config.animation_millis, 300);
    }

    #[test]
    #[should_panic(expected = "ascending")]
    fn rejects_descending_heights() {
        SheetConfig::new(700.0, 400.0, 500.0, 300);
    }

    #[test]
    #[should_panic(expected = "ascending")]
    fn rejects_non_positive_heights() {
        SheetConfig::new(0.0, 700.0, 500.0, 300);
    }

    #[test]
    #[should_panic(expected = "threshold")]
    fn rejects_non_positive_threshold() {
        SheetConfig::new(400.0, 700.0, 0.0, 300);
    }
}
