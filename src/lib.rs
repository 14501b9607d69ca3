//! Frame-accurate, interruptible custom scrolling.
//!
//! This crate re-exports the scroll engine from `smoothscroll-core` and the scroll consumers
//! (parallax, property transitions) from `smoothscroll-effects`.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use smoothscroll::{
//!     ElementRect, Geometry, ManualPacer, Parallax, ParallaxBounds, ScrollEngine,
//!     ScrollOptions, Surface, TransformTarget, Unit,
//! };
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
//! #[derive(Default)]
//! struct Hero(Option<f64>);
//!
//! impl TransformTarget for Hero {
//!     fn set_translate(&mut self, value: f64, _unit: Unit) {
//!         self.0 = Some(value);
//!     }
//! }
//!
//! let mut engine = ScrollEngine::with_surface(
//!     ScrollOptions::new(100.0, 200),
//!     ManualPacer::new(),
//!     Page(0.0),
//! );
//!
//! let hero = Rc::new(RefCell::new(Parallax::new(
//!     ParallaxBounds::new(0.0, 250.0),
//!     Hero::default(),
//!     800.0,
//! )));
//! hero.borrow_mut().set_rect(ElementRect::new(0.0, 500.0));
//! hero.borrow_mut().set_intersecting(true);
//! Parallax::attach(&hero, engine.listeners());
//!
//! engine.on_wheel(1.0).unwrap();
//! while let Some(frame) = engine.pacer_mut().next_frame() {
//!     engine.on_frame(frame).unwrap();
//! }
//!
//! assert_eq!(engine.offset(), -100.0);
//! assert_eq!(hero.borrow().target().0, Some(50.0));
//! ```
#![forbid(unsafe_code)]

pub use smoothscroll_core::*;
pub use smoothscroll_effects::*;
