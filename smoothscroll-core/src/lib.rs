//! A headless custom-scroll engine.
//!
//! For scroll consumers (parallax, property transitions), see the `smoothscroll-effects` crate.
//!
//! This crate turns wheel ticks, touch sequences and programmatic scroll requests into
//! frame-accurate, interruptible animations: it keeps the offset/target state, eases towards
//! the target one frame at a time, clamps every value to elastic limits, and broadcasts each
//! applied position to listeners.
//!
//! It is UI-agnostic. The host is expected to provide:
//! - a [`Surface`]: something that accepts an offset and reports its geometry
//! - a [`FramePacer`]: requests a callback on the next display refresh
//! - gesture events, forwarded to the `on_*` handlers of [`ScrollEngine`]
//!
//! ```
//! use smoothscroll_core::{Geometry, ManualPacer, ScrollEngine, ScrollOptions, Surface};
//!
//! struct Page(f64);
//!
//! impl Surface for Page {
//!     fn set_offset(&mut self, offset: f64) {
//!         self.0 = offset;
//!     }
//!
//!     fn geometry(&self) -> Geometry {
//!         Geometry::new(3000.0, 800.0)
//!     }
//! }
//!
//! let mut engine = ScrollEngine::with_surface(
//!     ScrollOptions::new(100.0, 250),
//!     ManualPacer::new(),
//!     Page(0.0),
//! );
//! engine.on_wheel(120.0).unwrap();
//! while let Some(frame) = engine.pacer_mut().next_frame() {
//!     engine.on_frame(frame).unwrap();
//! }
//! assert_eq!(engine.offset(), -100.0);
//! ```
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod completion;
mod easing;
mod engine;
mod error;
mod frame;
mod listeners;
mod options;
mod scheduler;
mod state;
mod touch;
mod types;

#[cfg(test)]
mod tests;

pub use completion::{AnimationOutcome, Completion, CompletionResolver};
pub use easing::{CubicBezier, Easing};
pub use engine::ScrollEngine;
pub use error::ScrollError;
pub use frame::{FRAMES_PER_SECOND, FrameCounter, frames_for_duration, progress};
pub use listeners::{Listener, ListenerRegistry, listener};
pub use options::{LimitModifier, ManualScroll, ScrollOptions};
pub use scheduler::{FrameHandle, FramePacer, FrameScheduler, ManualPacer};
pub use state::ScrollSnapshot;
pub use touch::TouchTracker;
pub use types::{Geometry, LimitSlack, Limits, ScrollPhase, Surface, Tick};
