use crate::{Aabb, Actor};

/// Which side of the actor was pushed out of an obstacle.
#[repr(i32)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Contact {
    #[default]
    None = 0,
    /// Actor's right side hit; it now sits left of the obstacle.
    Right = 1,
    /// Actor's left side hit; it now sits right of the obstacle.
    Left = 2,
    /// Standing on the obstacle.
    Bottom = 3,
    /// Head against the obstacle's underside.
    Top = 4,
}

impl Contact {
    #[inline]
    pub fn code(self) -> i32 {
        self as i32
    }
}

#[inline]
fn inside(v: f32, lo: f32, hi: f32) -> bool {
    lo < v && v < hi
}

/// Resolves the actor against one static box.
///
/// Overlap is judged on `actor.bbox`, not the live position. Penetrations are
/// signed (never positive) and the axis pick compares them as-is, so this is
/// not a minimum-translation solve: an exact tie between the axes resolves
/// nothing.
///
/// Edges that coincide never count as inside. An actor whose x-range equals
/// the obstacle's has no side overlap, so no vertical penetration is measured
/// and nothing is resolved: it passes straight through a tile it is aligned
/// with. The same goes for an actor spanning exactly between two tile edges.
///
/// Only one of `x`/`y` is written per call, and the matching velocity is only
/// zeroed when it points further into the obstacle.
pub fn player_collision(actor: &mut Actor, obstacle: &Aabb) -> Contact {
    let (ax, ay) = (actor.bbox.x, actor.bbox.y);
    let (ox, oy) = (obstacle.x, obstacle.y);

    let bottom = inside(oy[1], ay[0], ay[1]) || inside(ay[1], oy[0], oy[1]);
    let top = inside(oy[0], ay[0], ay[1]) || inside(ay[0], oy[0], oy[1]);
    let right = inside(ox[1], ax[0], ax[1]) || inside(ax[1], ox[0], ox[1]);
    let left = inside(ox[0], ax[0], ax[1]) || inside(ax[0], ox[0], ox[1]);

    // X
    let (overlap_x, dir_x) = if bottom || top {
        if inside(ax[1], ox[0], ox[1]) {
            (ox[0] - ax[1], Contact::Right)
        } else if inside(ax[0], ox[0], ox[1]) {
            (ax[0] - ox[1], Contact::Left)
        } else {
            (0.0, Contact::None)
        }
    } else {
        (0.0, Contact::None)
    };

    // Y
    let (overlap_y, dir_y) = if left || right {
        if inside(ay[1], oy[0], oy[1]) {
            (oy[0] - ay[1], Contact::Bottom)
        } else if inside(ay[0], oy[0], oy[1]) {
            (ay[0] - oy[1], Contact::Top)
        } else {
            (0.0, Contact::None)
        }
    } else {
        (0.0, Contact::None)
    };

    if overlap_x == 0.0 && overlap_y == 0.0 {
        return Contact::None;
    }

    if overlap_x > overlap_y || overlap_y == 0.0 {
        match dir_x {
            Contact::Right => {
                actor.x = ox[0] - actor.w;
                if actor.vx > 0.0 { actor.vx = 0.0; }
            }
            Contact::Left => {
                actor.x = ox[1];
                if actor.vx < 0.0 { actor.vx = 0.0; }
            }
            _ => return Contact::None,
        }
        dir_x
    } else if overlap_y > overlap_x || overlap_x == 0.0 {
        match dir_y {
            Contact::Bottom => {
                actor.y = oy[0] - actor.h;
                if actor.vy > 0.0 { actor.vy = 0.0; }
            }
            Contact::Top => {
                actor.y = oy[1];
                if actor.vy < 0.0 { actor.vy = 0.0; }
            }
            _ => return Contact::None,
        }
        dir_y
    } else {
        Contact::None
    }
}
