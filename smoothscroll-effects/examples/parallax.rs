// Example: a hero image drifting as the page scrolls past it.
use std::cell::RefCell;
use std::rc::Rc;

use smoothscroll_core::{Geometry, ManualPacer, ScrollEngine, ScrollOptions, Surface};
use smoothscroll_effects::{
    ElementRect, Parallax, ParallaxBounds, TransformTarget, Unit, translate_y,
};

struct Page(f64);

impl Surface for Page {
    fn set_offset(&mut self, offset: f64) {
        self.0 = offset;
    }

    fn geometry(&self) -> Geometry {
        Geometry::new(4_000.0, 800.0)
    }
}

#[derive(Default)]
struct Element {
    transform: String,
}

impl TransformTarget for Element {
    fn set_translate(&mut self, value: f64, unit: Unit) {
        self.transform = translate_y(value, unit);
    }
}

fn main() {
    let mut engine = ScrollEngine::with_surface(
        ScrollOptions::new(150.0, 200),
        ManualPacer::new(),
        Page(0.0),
    );

    let hero = Rc::new(RefCell::new(Parallax::new(
        ParallaxBounds::new(-30.0, 30.0),
        Element::default(),
        800.0,
    )));
    {
        // Measured by the host while the page sat at the top.
        let mut h = hero.borrow_mut();
        h.set_rect(ElementRect::new(1_000.0, 400.0));
        println!("per_px={:?}", h.per_px());
    }
    let l = Parallax::attach(&hero, engine.listeners());

    for step in 0..12 {
        // A visibility observer would drive this; approximate it from the offset.
        let scroll = -engine.offset();
        hero.borrow_mut()
            .set_intersecting(scroll + 800.0 >= 1_000.0 && scroll <= 1_400.0);

        engine.on_wheel(1.0).unwrap();
        while let Some(frame) = engine.pacer_mut().next_frame() {
            engine.on_frame(frame).unwrap();
        }
        println!(
            "step={step} scroll={} transform={:?}",
            -engine.offset(),
            hero.borrow().target().transform
        );
    }

    engine.unsubscribe(&l);
}
