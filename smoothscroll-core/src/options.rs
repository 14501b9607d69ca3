use std::fmt;
use std::rc::Rc;

use crate::{Easing, LimitSlack};

/// Returns extra slack (in pixels) for one end of the scroll range.
///
/// Modifiers are read when a surface is bound and on every navigation signal, so they can
/// depend on layout that changes between pages (e.g. a footer that only some routes have).
pub type LimitModifier = Rc<dyn Fn() -> f64>;

/// Configuration for [`crate::ScrollEngine`].
///
/// Cloning is cheap: modifiers are stored in `Rc`s, so callers can tweak a field and call
/// `ScrollEngine::set_options` without rebuilding closures.
pub struct ScrollOptions {
    /// Pixels travelled per wheel tick.
    pub distance: f64,
    /// Duration of wheel and momentum animations, in milliseconds. Converted to frames at
    /// 60 fps; `0` jumps straight to the target.
    pub duration_ms: u64,
    /// Timing curve for wheel and momentum animations.
    pub timing: Easing,
    /// Extra room above the top of the content.
    pub limit_top: Option<LimitModifier>,
    /// Extra room below the bottom of the content.
    pub limit_bottom: Option<LimitModifier>,
    /// Keep the offset when the navigation context changes instead of returning to the top.
    pub preserve_across_navigation: bool,
}

impl Clone for ScrollOptions {
    fn clone(&self) -> Self {
        Self {
            distance: self.distance,
            duration_ms: self.duration_ms,
            timing: self.timing,
            limit_top: self.limit_top.clone(),
            limit_bottom: self.limit_bottom.clone(),
            preserve_across_navigation: self.preserve_across_navigation,
        }
    }
}

impl ScrollOptions {
    /// Creates options with the default ease-out timing, no slack and no preservation across
    /// navigation.
    pub fn new(distance: f64, duration_ms: u64) -> Self {
        Self {
            distance,
            duration_ms,
            timing: Easing::default(),
            limit_top: None,
            limit_bottom: None,
            preserve_across_navigation: false,
        }
    }

    pub fn with_distance(mut self, distance: f64) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_timing(mut self, timing: impl Into<Easing>) -> Self {
        self.timing = timing.into();
        self
    }

    pub fn with_limit_top(mut self, limit_top: Option<impl Fn() -> f64 + 'static>) -> Self {
        self.limit_top = limit_top.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_limit_bottom(mut self, limit_bottom: Option<impl Fn() -> f64 + 'static>) -> Self {
        self.limit_bottom = limit_bottom.map(|f| Rc::new(f) as _);
        self
    }

    pub fn with_preserve_across_navigation(mut self, preserve: bool) -> Self {
        self.preserve_across_navigation = preserve;
        self
    }

    /// Reads both limit modifiers. Missing modifiers count as zero.
    pub(crate) fn read_slack(&self) -> LimitSlack {
        LimitSlack {
            top: self.limit_top.as_ref().map_or(0.0, |f| f()),
            bottom: self.limit_bottom.as_ref().map_or(0.0, |f| f()),
        }
    }
}

impl fmt::Debug for ScrollOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollOptions")
            .field("distance", &self.distance)
            .field("duration_ms", &self.duration_ms)
            .field("timing", &self.timing)
            .field("limit_top", &self.limit_top.as_ref().map(|_| ".."))
            .field("limit_bottom", &self.limit_bottom.as_ref().map(|_| ".."))
            .field(
                "preserve_across_navigation",
                &self.preserve_across_navigation,
            )
            .finish()
    }
}

/// A programmatic scroll request for [`crate::ScrollEngine::manual_scroll`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManualScroll {
    /// Absolute scroll distance from the top (positive). The offset ends at `-to`.
    pub to: f64,
    pub duration_ms: u64,
    /// Timing curve; the default ease-out when `None`.
    pub timing: Option<Easing>,
}

impl ManualScroll {
    pub fn new(to: f64, duration_ms: u64) -> Self {
        Self {
            to,
            duration_ms,
            timing: None,
        }
    }

    pub fn with_timing(mut self, timing: impl Into<Easing>) -> Self {
        self.timing = Some(timing.into());
        self
    }
}
