#![allow(clippy::many_single_char_names)]

use serde::{Deserialize, Serialize};

pub mod collision;
pub mod config;
pub mod input;
pub mod physics;
pub mod render;
pub mod replay;
pub mod world;

pub use collision::{player_collision, Contact};
pub use config::{Layout, Params};
pub use input::{apply_input, Buttons};
pub use physics::{integrate, player_limits, resolve_contacts, step, Events};
pub use render::{draw_world, Canvas, Color};
pub use replay::{Replay, ReplayError, Trace};
pub use world::{Actor, Facing, Platform, World, WorldError, PLATFORM_CAPACITY};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

/// Axis-aligned box stored as `[min, max]` per axis.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Aabb {
    pub x: [f32; 2],
    pub y: [f32; 2],
}

impl Aabb {
    #[inline]
    pub fn of(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x: [x, x + w],
            y: [y, y + h],
        }
    }
}

impl From<Rect> for Aabb {
    fn from(r: Rect) -> Self {
        Aabb::of(r.x, r.y, r.w, r.h)
    }
}
