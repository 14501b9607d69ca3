use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use smoothscroll_core::{Listener, ListenerRegistry, listener};

/// CSS-like length unit of a parallax translation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Unit {
    #[default]
    Percent,
    Px,
    Vh,
    Vw,
    Vmax,
    Vmin,
}

impl Unit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Percent => "%",
            Self::Px => "px",
            Self::Vh => "vh",
            Self::Vw => "vw",
            Self::Vmax => "vmax",
            Self::Vmin => "vmin",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formats a vertical translation, e.g. `translateY(12.5%)`.
pub fn translate_y(value: f64, unit: Unit) -> String {
    let value = if value == 0.0 { 0.0 } else { value };
    format!("translateY({value}{unit})")
}

/// Where the element sits when it enters the viewport from the bottom (`start`) and when it
/// leaves through the top (`end`).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParallaxBounds {
    pub start: f64,
    pub end: f64,
    pub unit: Unit,
}

impl ParallaxBounds {
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            unit: Unit::default(),
        }
    }

    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }
}

/// The element's bounding box on the scroll axis, relative to the viewport, measured while the
/// scroll offset was zero.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementRect {
    pub top: f64,
    pub height: f64,
}

impl ElementRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }
}

/// Receives the translation computed for the tracked element.
pub trait TransformTarget {
    fn set_translate(&mut self, value: f64, unit: Unit);
}

impl<T: TransformTarget + ?Sized> TransformTarget for &mut T {
    fn set_translate(&mut self, value: f64, unit: Unit) {
        (**self).set_translate(value, unit);
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Mapping {
    /// Scroll distance before the element starts entering the viewport, capped at one viewport.
    distance: f64,
    /// Translation change per scrolled pixel.
    per_px: f64,
}

/// Couples the scroll position to an element's translation.
///
/// While the element crosses the viewport, its translation moves linearly from
/// `bounds.start` to `bounds.end`. Scroll updates are ignored while the element is not
/// intersecting the viewport or before its geometry is known.
#[derive(Debug)]
pub struct Parallax<T> {
    bounds: ParallaxBounds,
    target: T,
    viewport_height: f64,
    rect: Option<ElementRect>,
    intersecting: bool,
    mapping: Option<Mapping>,
}

impl<T: TransformTarget> Parallax<T> {
    pub fn new(bounds: ParallaxBounds, target: T, viewport_height: f64) -> Self {
        Self {
            bounds,
            target,
            viewport_height,
            rect: None,
            intersecting: false,
            mapping: None,
        }
    }

    pub fn bounds(&self) -> ParallaxBounds {
        self.bounds
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    pub fn rect(&self) -> Option<ElementRect> {
        self.rect
    }

    /// Updates the element geometry (e.g. after a layout change).
    pub fn set_rect(&mut self, rect: ElementRect) {
        self.rect = Some(rect);
        self.remap();
    }

    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height;
        self.remap();
    }

    pub fn set_intersecting(&mut self, intersecting: bool) {
        if self.intersecting != intersecting {
            strace!(intersecting, "Parallax::set_intersecting");
        }
        self.intersecting = intersecting;
    }

    pub fn is_intersecting(&self) -> bool {
        self.intersecting
    }

    /// Translation change per scrolled pixel, once the geometry is known.
    pub fn per_px(&self) -> Option<f64> {
        self.mapping.map(|m| m.per_px)
    }

    /// The translation for `scroll`, regardless of visibility.
    pub fn offset_for(&self, scroll: f64) -> Option<f64> {
        let mapping = self.mapping?;
        let rect = self.rect?;
        let scrolled = scroll.abs() + mapping.distance - rect.top;
        Some(self.bounds.start + mapping.per_px * scrolled)
    }

    /// Applies the translation for `scroll` when the element is visible.
    ///
    /// Returns the written value, or `None` when nothing was written.
    pub fn on_scroll(&mut self, scroll: f64) -> Option<f64> {
        if !self.intersecting {
            return None;
        }
        let value = self.offset_for(scroll)?;
        self.target.set_translate(value, self.bounds.unit);
        Some(value)
    }

    fn remap(&mut self) {
        let Some(rect) = self.rect else {
            self.mapping = None;
            return;
        };

        let distance = if rect.top <= self.viewport_height {
            rect.top
        } else {
            self.viewport_height
        };
        let span = rect.height + distance;
        if span <= 0.0 || !span.is_finite() {
            swarn!(
                top = rect.top,
                height = rect.height,
                "Parallax: element has no scroll span, ignoring scroll updates"
            );
            self.mapping = None;
            return;
        }

        let per_px = (self.bounds.end - self.bounds.start) / span;
        strace!(distance, per_px, "Parallax::remap");
        self.mapping = Some(Mapping { distance, per_px });
    }
}

impl<T: TransformTarget + 'static> Parallax<T> {
    /// Subscribes a shared mapper to `registry` and returns the listener, which is needed to
    /// unsubscribe it again.
    pub fn attach(this: &Rc<RefCell<Self>>, registry: &ListenerRegistry) -> Listener {
        let parallax = Rc::clone(this);
        let l = listener(move |scroll, _max| match parallax.try_borrow_mut() {
            Ok(mut p) => {
                p.on_scroll(scroll);
            }
            Err(_) => {
                strace!("Parallax: mapper busy, skipping scroll update");
            }
        });
        registry.subscribe([Rc::clone(&l)]);
        l
    }
}
