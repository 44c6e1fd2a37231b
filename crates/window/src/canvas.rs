use macroquad::prelude::{clear_background, draw_rectangle};

use manlab_core::{Canvas, Color, Rect};

/// The default macroquad screen: pixel coordinates, origin top-left.
pub struct Screen;

fn to_mq(c: Color) -> macroquad::prelude::Color {
    macroquad::prelude::Color::from_rgba(c.r, c.g, c.b, c.a)
}

impl Canvas for Screen {
    fn clear(&mut self, color: Color) {
        clear_background(to_mq(color));
    }

    // Whole pixels, truncated like an integer rect.
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        draw_rectangle(
            rect.x.trunc(),
            rect.y.trunc(),
            rect.w.trunc(),
            rect.h.trunc(),
            to_mq(color),
        );
    }
}
