use serde::{Deserialize, Serialize};

use crate::Rect;

/// Per-frame tuning. Values are in pixels per frame and assume a
/// vsync-bound loop; nothing here is scaled by a timestep.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    // Vertical
    pub gravity: f32,

    // Velocity limits
    pub max_speed: f32,
    pub drag: f32,
    pub rest_speed: f32,

    // Input impulses
    pub move_impulse: f32,
    pub jump_impulse: f32,

    // Attack box anchor, relative to the actor's top-left
    pub reach_left: f32,
    pub reach_right: f32,
    pub attack_drop: f32,

    // Reset key target
    pub reset_x: f32,
    pub reset_y: f32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            gravity: 4.0,

            max_speed: 20.0,
            drag: 5.0,
            rest_speed: 5.0,

            move_impulse: 10.0,
            jump_impulse: 10.0,

            reach_left: 50.0,
            reach_right: 100.0,
            attack_drop: 75.0,

            reset_x: 500.0,
            reset_y: 500.0,
        }
    }
}

/// Level geometry used by [`World::load`](crate::World::load).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub spawn_x: f32,
    pub spawn_y: f32,
    pub actor_w: f32,
    pub actor_h: f32,
    pub attack_w: f32,
    pub attack_h: f32,

    /// Number of tiles in the floor row.
    pub floor_tiles: u32,
    pub floor_x: f32,
    pub floor_y: f32,
    pub tile_w: f32,
    pub tile_h: f32,

    /// Extra platforms appended after the floor row.
    pub ledges: Vec<Rect>,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            spawn_x: 960.0,
            spawn_y: 540.0,
            actor_w: 100.0,
            actor_h: 200.0,
            attack_w: 50.0,
            attack_h: 50.0,

            floor_tiles: 40,
            floor_x: -200.0,
            floor_y: 800.0,
            tile_w: 100.0,
            tile_h: 100.0,

            ledges: Vec::new(),
        }
    }
}

impl Layout {
    pub fn floor(&self) -> impl Iterator<Item = Rect> + '_ {
        (0..self.floor_tiles).map(move |i| Rect {
            x: self.floor_x + self.tile_w * i as f32,
            y: self.floor_y,
            w: self.tile_w,
            h: self.tile_h,
        })
    }
}
