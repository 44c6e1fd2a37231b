use thiserror::Error;

use crate::{Aabb, Layout, Rect};

pub const PLATFORM_CAPACITY: usize = 100;

#[derive(Debug, Error, PartialEq)]
pub enum WorldError {
    #[error("platform capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },
    #[error("platform {index} has a negative extent ({w}x{h})")]
    NegativeExtent { index: usize, w: f32, h: f32 },
}

#[repr(u8)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Facing {
    Left = 0,
    #[default]
    Right = 1,
}

/// The player rectangle.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default)]
pub struct Actor {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
    pub vx: f32,
    pub vy: f32,

    /// Refreshed from the position once per step, before integration.
    /// Collision always reads this copy, so it trails the position by a frame.
    pub bbox: Aabb,

    pub facing: Facing,
    pub attack: u8,
    pub attack_box: Rect,
}

impl Actor {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            bbox: Aabb::of(x, y, w, h),
            ..Self::default()
        }
    }

    #[inline]
    pub fn refresh_bounds(&mut self) {
        self.bbox = Aabb::of(self.x, self.y, self.w, self.h);
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        Rect { x: self.x, y: self.y, w: self.w, h: self.h }
    }

    #[inline]
    pub fn attacking(&self) -> bool {
        self.attack != 0
    }
}

/// A static collidable rectangle. Its box is computed once here and never
/// touched again.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Platform {
    rect: Rect,
    bbox: Aabb,
}

impl Platform {
    pub fn new(rect: Rect) -> Self {
        Self { rect, bbox: rect.into() }
    }

    #[inline]
    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    #[inline]
    pub fn bbox(&self) -> &Aabb {
        &self.bbox
    }
}

#[derive(Clone, Debug)]
pub struct World {
    pub actor: Actor,
    pub(crate) platforms: Vec<Platform>,
}

impl World {
    pub fn new(actor: Actor) -> Self {
        Self {
            actor,
            platforms: Vec::with_capacity(PLATFORM_CAPACITY),
        }
    }

    /// Builds the actor and the platform set. Platforms are only ever added
    /// here, in layout order.
    pub fn load(layout: &Layout) -> Result<Self, WorldError> {
        let mut actor = Actor::new(layout.spawn_x, layout.spawn_y, layout.actor_w, layout.actor_h);
        actor.attack_box.w = layout.attack_w;
        actor.attack_box.h = layout.attack_h;

        let mut world = World::new(actor);
        for rect in layout.floor().chain(layout.ledges.iter().copied()) {
            world.add_platform(rect)?;
        }

        log::debug!(
            "world loaded: {} platforms, actor at ({}, {})",
            world.platforms.len(),
            world.actor.x,
            world.actor.y
        );
        Ok(world)
    }

    pub fn add_platform(&mut self, rect: Rect) -> Result<(), WorldError> {
        let index = self.platforms.len();
        if index >= PLATFORM_CAPACITY {
            return Err(WorldError::CapacityExceeded { capacity: PLATFORM_CAPACITY });
        }
        // Collision assumes [min, max] ranges and does not check them.
        if rect.w < 0.0 || rect.h < 0.0 {
            return Err(WorldError::NegativeExtent { index, w: rect.w, h: rect.h });
        }
        self.platforms.push(Platform::new(rect));
        Ok(())
    }

    #[inline]
    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }
}
