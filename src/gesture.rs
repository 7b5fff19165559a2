//! Gesture Interpretation
//!
//! Turns raw taps and presses into select / toggle / rename intents using
//! elapsed-time thresholds.

use crate::config::GestureConfig;

/// What a tap on an item means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    /// First tap: select the item and reveal its delete control
    Select(u64),
    /// Second tap inside the window: toggle completion, clear selection
    ToggleComplete(u64),
}

/// Remembers the previous tap so the next one can be classified
#[derive(Debug, Clone, Copy, Default)]
pub struct TapTracker {
    last: Option<(u64, f64)>,
}

impl TapTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a tap on `item_id` at `now_ms`.
    ///
    /// A double tap needs both taps on the same item, strictly less than
    /// `double_tap_ms` apart. A double tap resets the tracker so a third tap
    /// starts over.
    pub fn tap(&mut self, item_id: u64, now_ms: f64, config: &GestureConfig) -> TapOutcome {
        match self.last {
            Some((last_id, at)) if last_id == item_id && now_ms - at < config.double_tap_ms => {
                self.last = None;
                TapOutcome::ToggleComplete(item_id)
            }
            _ => {
                self.last = Some((item_id, now_ms));
                TapOutcome::Select(item_id)
            }
        }
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Whether a press held for `held_ms` qualifies as a long press
pub fn is_long_press(held_ms: f64, config: &GestureConfig) -> bool {
    held_ms >= f64::from(config.long_press_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: GestureConfig = GestureConfig::DEFAULT;

    #[test]
    fn test_single_tap_selects() {
        let mut taps = TapTracker::new();
        assert_eq!(taps.tap(1, 1000.0, &CONFIG), TapOutcome::Select(1));
    }

    #[test]
    fn test_double_tap_inside_window_toggles() {
        let mut taps = TapTracker::new();
        taps.tap(1, 1000.0, &CONFIG);
        assert_eq!(taps.tap(1, 1299.0, &CONFIG), TapOutcome::ToggleComplete(1));
    }

    #[test]
    fn test_window_boundary_is_exclusive() {
        let mut taps = TapTracker::new();
        taps.tap(1, 1000.0, &CONFIG);
        assert_eq!(taps.tap(1, 1300.0, &CONFIG), TapOutcome::Select(1));
    }

    #[test]
    fn test_slow_second_tap_restarts_window() {
        let mut taps = TapTracker::new();
        taps.tap(1, 0.0, &CONFIG);
        taps.tap(1, 1000.0, &CONFIG);
        assert_eq!(taps.tap(1, 1100.0, &CONFIG), TapOutcome::ToggleComplete(1));
    }

    #[test]
    fn test_tap_on_other_item_is_fresh() {
        let mut taps = TapTracker::new();
        taps.tap(1, 1000.0, &CONFIG);
        assert_eq!(taps.tap(2, 1050.0, &CONFIG), TapOutcome::Select(2));
        assert_eq!(taps.tap(2, 1100.0, &CONFIG), TapOutcome::ToggleComplete(2));
    }

    #[test]
    fn test_triple_tap_toggles_once() {
        let mut taps = TapTracker::new();
        taps.tap(1, 0.0, &CONFIG);
        taps.tap(1, 100.0, &CONFIG);
        assert_eq!(taps.tap(1, 200.0, &CONFIG), TapOutcome::Select(1));
    }

    #[test]
    fn test_reset_forgets_last_tap() {
        let mut taps = TapTracker::new();
        taps.tap(1, 0.0, &CONFIG);
        taps.reset();
        assert_eq!(taps.tap(1, 10.0, &CONFIG), TapOutcome::Select(1));
    }

    #[test]
    fn test_long_press_threshold() {
        assert!(!is_long_press(499.0, &CONFIG));
        assert!(is_long_press(500.0, &CONFIG));
    }
}
