//! Scroll consumers built on top of `smoothscroll-core`.
//!
//! - [`Parallax`]: maps the broadcast scroll position to an element translation while the
//!   element crosses the viewport.
//! - [`TransitionPlayer`]: interpolates a set of style properties frame by frame, with
//!   numbers embedded in free text (`translateX(50%)`, `12px`) eased in place.
//!
//! ```
//! use smoothscroll_effects::{Properties, PropertyValue, map_properties, stringify};
//!
//! let from = Properties::new()
//!     .with("transform", PropertyValue::text("translateX(50%)"))
//!     .with("opacity", 0.0);
//! let to = Properties::new()
//!     .with("transform", PropertyValue::text("translateX(0%)"))
//!     .with("opacity", 1.0);
//!
//! let mapped = map_properties(&from, &to).unwrap();
//! let half = stringify(&mapped, 0.5);
//! assert_eq!(half.get("transform").unwrap().to_string(), "translateX(25%)");
//! assert_eq!(half.get("opacity").unwrap().to_string(), "0.5");
//! ```
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod error;
mod parallax;
mod properties;
mod transition;


pub use error::TransitionError;
pub use parallax::{ElementRect, Parallax, ParallaxBounds, TransformTarget, Unit, translate_y};
pub use properties::{
    MappedProperty, MappedValue, NumberTemplate, Properties, PropertyValue, apply_ease,
    map_properties, stringify,
};
pub use transition::{StyleTarget, Transition, TransitionPlayer};
