use crate::{player_collision, Actor, Contact, Facing, Params, World};

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Events {
    /// Some platform top caught the actor this frame.
    pub landed: u8,
    pub bonked: u8,
    pub walled: u8,
}

#[inline]
fn clamp(x: f32, lo: f32, hi: f32) -> f32 {
    x.max(lo).min(hi)
}

fn limit_axis(v: f32, params: &Params) -> f32 {
    let max = params.max_speed;
    let rest = params.rest_speed;

    let mut v = clamp(v, -max, max);

    if v < max && v > rest {
        v -= params.drag;
    } else if v > -max && v < -rest {
        v += params.drag;
    }

    if v.abs() <= rest { v = 0.0; }
    v
}

/// Hard speed cap, flat drag inside the band, then snap to rest.
/// Each axis is limited on its own.
pub fn player_limits(params: &Params, actor: &mut Actor) {
    actor.vx = limit_axis(actor.vx, params);
    actor.vy = limit_axis(actor.vy, params);
}

/// Collision pass: every platform, in order, against the actor's stored box.
pub fn resolve_contacts(world: &mut World) -> Events {
    let mut ev = Events::default();
    let actor = &mut world.actor;

    for (i, p) in world.platforms.iter().enumerate() {
        let contact = player_collision(actor, p.bbox());
        match contact {
            Contact::None => continue,
            Contact::Bottom => ev.landed = 1,
            Contact::Top => ev.bonked = 1,
            Contact::Left | Contact::Right => ev.walled = 1,
        }
        log::trace!("contact {contact:?} with platform {i}: ({}, {})", actor.x, actor.y);
    }

    ev
}

/// Everything after the collision pass: box refresh, Euler move, limits,
/// gravity and the attack anchor.
pub fn integrate(params: &Params, actor: &mut Actor) {
    actor.refresh_bounds();

    actor.x += actor.vx;
    actor.y += actor.vy;

    player_limits(params, actor);
    // Added after limiting so it carries into next frame's move.
    actor.vy += params.gravity;

    actor.attack_box.x = match actor.facing {
        Facing::Left => actor.x - params.reach_left,
        Facing::Right => actor.x + params.reach_right,
    };
    actor.attack_box.y = actor.y + params.attack_drop;
}

/// One frame. Host calls this exactly once per rendered frame; the
/// constants assume a vsync-bound loop.
pub fn step(params: &Params, world: &mut World) -> Events {
    let ev = resolve_contacts(world);
    integrate(params, &mut world.actor);
    ev
}

#[cfg(test)]
mod tests {
    use super::{integrate, player_limits, resolve_contacts, step};
    use crate::{Actor, Facing, Layout, Params, Rect, World};

    fn limited(vx: f32, vy: f32) -> (f32, f32) {
        let mut a = Actor { vx, vy, ..Actor::default() };
        player_limits(&Params::default(), &mut a);
        (a.vx, a.vy)
    }

    #[test]
    fn hard_cap_then_band_then_rest() {
        assert_eq!(limited(35.0, -35.0), (20.0, -20.0));
        assert_eq!(limited(20.0, -20.0), (20.0, -20.0));
        assert_eq!(limited(12.0, -12.0), (7.0, -7.0));
        assert_eq!(limited(19.0, -6.0), (14.0, 0.0));
        assert_eq!(limited(8.0, -8.0), (0.0, 0.0));
        assert_eq!(limited(5.0, -5.0), (0.0, 0.0));
        assert_eq!(limited(4.0, -1.0), (0.0, 0.0));
    }

    #[test]
    fn limits_are_idempotent_at_the_band_edges() {
        let params = Params::default();
        for v in [0.0, 5.0, -5.0, 20.0, -20.0] {
            let mut once = Actor { vx: v, vy: v, ..Actor::default() };
            player_limits(&params, &mut once);

            let mut twice = once;
            player_limits(&params, &mut twice);

            assert_eq!((once.vx, once.vy), (twice.vx, twice.vy), "v = {v}");
        }
    }

    #[test]
    fn free_fall_settles_at_gravity_per_frame() {
        // The +4 never leaves the rest band, so each frame moves exactly 4px.
        let params = Params::default();
        let mut world = World::new(Actor::new(0.0, 0.0, 100.0, 200.0));

        for frame in 1..=30u32 {
            let ev = step(&params, &mut world);
            assert_eq!(ev, Default::default());
            assert_eq!(world.actor.vy, 4.0);
            assert_eq!(world.actor.y, 4.0 * (frame - 1) as f32);
        }
    }

    #[test]
    fn box_trails_the_position_by_one_move() {
        let params = Params::default();
        let mut a = Actor::new(0.0, 0.0, 10.0, 10.0);
        a.vx = 12.0;

        integrate(&params, &mut a);

        assert_eq!(a.bbox.x, [0.0, 10.0]);
        assert_eq!(a.x, 12.0);
        assert_eq!(a.vx, 7.0);
        assert_eq!(a.vy, 4.0);
    }

    #[test]
    fn attack_box_follows_facing() {
        let params = Params::default();
        let mut a = Actor::new(300.0, 100.0, 100.0, 200.0);

        a.facing = Facing::Right;
        integrate(&params, &mut a);
        assert_eq!(a.attack_box.x, 400.0);
        assert_eq!(a.attack_box.y, 175.0);

        a.facing = Facing::Left;
        integrate(&params, &mut a);
        assert_eq!(a.attack_box.x, 250.0);
    }

    #[test]
    fn contacts_are_reported_per_kind() {
        let mut world = World::new(Actor::new(960.0, 604.0, 100.0, 200.0));
        world.actor.vy = 4.0;
        world.add_platform(Rect { x: 900.0, y: 800.0, w: 100.0, h: 100.0 }).unwrap();

        let ev = resolve_contacts(&mut world);

        assert_eq!(ev.landed, 1);
        assert_eq!((ev.bonked, ev.walled), (0, 0));
        assert_eq!((world.actor.y, world.actor.vy), (600.0, 0.0));
    }

    #[test]
    fn reset_position_is_picked_up_by_the_next_box_refresh() {
        let params = Params::default();
        let mut world = World::load(&Layout::default()).unwrap();
        world.actor.x = params.reset_x;
        world.actor.y = params.reset_y;

        step(&params, &mut world);

        assert_eq!(world.actor.bbox.x, [500.0, 600.0]);
        assert_eq!(world.actor.bbox.y, [500.0, 700.0]);
    }

    #[test]
    fn reset_point_is_tile_aligned_and_falls_through_the_floor() {
        // x = 500 lines up with the 100px floor grid, so no tile catches it.
        let params = Params::default();
        let mut world = World::load(&Layout::default()).unwrap();
        world.actor.x = params.reset_x;
        world.actor.y = params.reset_y;

        let mut landed = 0;
        for _ in 0..300 {
            landed += step(&params, &mut world).landed as u32;
        }

        assert_eq!(landed, 0);
        assert_eq!(world.actor.x, 500.0);
        assert!(world.actor.y > 900.0, "y = {}", world.actor.y);
    }

    #[test]
    fn off_grid_reset_lands() {
        let params = Params { reset_x: 510.0, ..Params::default() };
        let mut world = World::load(&Layout::default()).unwrap();
        world.actor.x = params.reset_x;
        world.actor.y = params.reset_y;

        for _ in 0..300 {
            step(&params, &mut world);
        }

        assert!(world.actor.y >= 600.0 && world.actor.y <= 608.0, "y = {}", world.actor.y);
    }
}
