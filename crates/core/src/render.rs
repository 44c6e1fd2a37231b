use crate::{Rect, World};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

pub const SKY: Color = Color::rgb(50, 50, 255);
pub const PLAYER: Color = Color::rgb(200, 12, 255);
pub const PLATFORM: Color = Color::rgb(255, 255, 255);
pub const ATTACK: Color = Color::rgb(230, 40, 40);

/// Drawing surface provided by the host. Presenting the frame is left to the
/// host loop.
pub trait Canvas {
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

pub fn draw_world<C: Canvas + ?Sized>(world: &World, canvas: &mut C) {
    canvas.clear(SKY);
    canvas.fill_rect(world.actor.rect(), PLAYER);

    for p in world.platforms() {
        canvas.fill_rect(*p.rect(), PLATFORM);
    }

    if world.actor.attacking() {
        canvas.fill_rect(world.actor.attack_box, ATTACK);
    }
}
