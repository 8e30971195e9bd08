//! Drawing primitives the game module imports from `env`.
//!
//! The module only knows four calls: `set_color`, `draw_circle`,
//! `draw_line` and `set_player_index`. The first three land here and are
//! replayed onto a [`DrawTarget`], which is the canvas 2D context in the
//! browser.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::error::HostError;

/// The slice of the 2D context API the primitives need.
pub trait DrawTarget {
    fn set_fill_style(&self, style: &str);
    fn set_stroke_style(&self, style: &str);
    fn begin_path(&self);
    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), HostError>;
    fn move_to(&self, x: f64, y: f64);
    fn line_to(&self, x: f64, y: f64);
    fn fill(&self);
    fn stroke(&self);
    /// Size the backing canvas to `size`×`size` and clear it.
    fn reset_surface(&self, size: u32);
}

impl DrawTarget for CanvasRenderingContext2d {
    fn set_fill_style(&self, style: &str) {
        self.set_fill_style_str(style);
    }

    fn set_stroke_style(&self, style: &str) {
        self.set_stroke_style_str(style);
    }

    fn begin_path(&self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), HostError> {
        CanvasRenderingContext2d::arc(self, x, y, radius, start, end)?;
        Ok(())
    }

    fn move_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn fill(&self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn stroke(&self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn reset_surface(&self, size: u32) {
        // Assigning the size also resets the context state.
        if let Some(canvas) = self.canvas() {
            canvas.set_width(size);
            canvas.set_height(size);
        }
        self.clear_rect(0.0, 0.0, f64::from(size), f64::from(size));
    }
}

/// CSS color for the channel values the module passes, unvalidated.
pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, a)
}

/// Implements the module's drawing imports on top of a [`DrawTarget`].
pub struct Primitives<T> {
    target: T,
    offset: f64,
}

impl<T: DrawTarget> Primitives<T> {
    pub fn new(target: T, offset: f64) -> Self {
        Self { target, offset }
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn set_color(&self, r: f64, g: f64, b: f64, a: f64) {
        let style = rgba(r, g, b, a);
        self.target.set_fill_style(&style);
        self.target.set_stroke_style(&style);
    }

    pub fn draw_circle(&self, x: f64, y: f64, radius: f64) -> Result<(), HostError> {
        self.target.begin_path();
        self.target
            .arc(x + self.offset, y + self.offset, radius, 0.0, TAU)?;
        self.target.fill();
        Ok(())
    }

    pub fn draw_line(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) {
        self.target.begin_path();
        self.target.move_to(min_x + self.offset, min_y + self.offset);
        self.target.line_to(max_x + self.offset, max_y + self.offset);
        self.target.stroke();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every context call as a readable string.
    #[derive(Default)]
    pub(crate) struct FakeContext {
        pub ops: RefCell<Vec<String>>,
    }

    impl FakeContext {
        fn push(&self, op: String) {
            self.ops.borrow_mut().push(op);
        }

        pub fn take(&self) -> Vec<String> {
            self.ops.take()
        }
    }

    impl DrawTarget for FakeContext {
        fn set_fill_style(&self, style: &str) {
            self.push(format!("fill_style {style}"));
        }
        fn set_stroke_style(&self, style: &str) {
            self.push(format!("stroke_style {style}"));
        }
        fn begin_path(&self) {
            self.push("begin_path".into());
        }
        fn arc(&self, x: f64, y: f64, radius: f64, start: f64, end: f64) -> Result<(), HostError> {
            self.push(format!("arc {x} {y} {radius} {start} {end:.4}"));
            Ok(())
        }
        fn move_to(&self, x: f64, y: f64) {
            self.push(format!("move_to {x} {y}"));
        }
        fn line_to(&self, x: f64, y: f64) {
            self.push(format!("line_to {x} {y}"));
        }
        fn fill(&self) {
            self.push("fill".into());
        }
        fn stroke(&self) {
            self.push("stroke".into());
        }
        fn reset_surface(&self, size: u32) {
            self.push(format!("reset {size}"));
        }
    }

    #[test]
    fn rgba_formats_like_css() {
        assert_eq!(rgba(255.0, 0.0, 0.0, 255.0), "rgba(255, 0, 0, 255)");
        assert_eq!(rgba(10.0, 20.5, 30.0, 0.5), "rgba(10, 20.5, 30, 0.5)");
    }

    #[test]
    fn set_color_sets_fill_and_stroke() {
        let prims = Primitives::new(FakeContext::default(), 0.5);
        prims.set_color(0.0, 255.0, 0.0, 255.0);
        assert_eq!(
            prims.target().take(),
            vec![
                "fill_style rgba(0, 255, 0, 255)",
                "stroke_style rgba(0, 255, 0, 255)",
            ]
        );
    }

    #[test]
    fn circle_is_offset_by_half_a_pixel() {
        let prims = Primitives::new(FakeContext::default(), 0.5);
        prims.draw_circle(85.0, 170.0, 2.0).unwrap();
        assert_eq!(
            prims.target().take(),
            vec!["begin_path", "arc 85.5 170.5 2 0 6.2832", "fill"]
        );
    }

    #[test]
    fn line_is_offset_by_half_a_pixel() {
        let prims = Primitives::new(FakeContext::default(), 0.5);
        prims.draw_line(10.0, 20.0, 10.0, 40.0);
        assert_eq!(
            prims.target().take(),
            vec!["begin_path", "move_to 10.5 20.5", "line_to 10.5 40.5", "stroke"]
        );
    }

    #[test]
    fn offset_is_configurable() {
        let prims = Primitives::new(FakeContext::default(), 0.0);
        prims.draw_line(1.0, 2.0, 3.0, 4.0);
        let ops = prims.target().take();
        assert_eq!(ops[1], "move_to 1 2");
        assert_eq!(ops[2], "line_to 3 4");
    }
}
