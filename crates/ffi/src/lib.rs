use manlab_core::{Aabb, Actor, Buttons, Events, Layout, Params, World};

#[no_mangle]
pub extern "C" fn man_default_params(out: *mut Params) {
    if out.is_null() { return; }
    unsafe { *out = Params::default(); }
}

/// Default level. Returns null if it cannot be built; free with
/// `man_world_free`.
#[no_mangle]
pub extern "C" fn man_world_new() -> *mut World {
    match World::load(&Layout::default()) {
        Ok(world) => Box::into_raw(Box::new(world)),
        Err(e) => {
            log::error!("man_world_new: {e}");
            std::ptr::null_mut()
        }
    }
}

#[no_mangle]
pub extern "C" fn man_world_free(world: *mut World) {
    if world.is_null() { return; }
    unsafe { drop(Box::from_raw(world)); }
}

#[no_mangle]
pub extern "C" fn man_world_actor(world: *const World, out: *mut Actor) {
    if world.is_null() || out.is_null() { return; }
    unsafe { *out = (*world).actor; }
}

#[no_mangle]
pub extern "C" fn man_world_apply_input(world: *mut World, params: *const Params, input_bits: u8) {
    if world.is_null() || params.is_null() { return; }
    let w = unsafe { &mut *world };
    let p = unsafe { &*params };
    manlab_core::apply_input(p, &mut w.actor, Buttons::from_bits_truncate(input_bits));
}

#[no_mangle]
pub extern "C" fn man_world_step(world: *mut World, params: *const Params) -> Events {
    if world.is_null() || params.is_null() { return Events::default(); }
    let w = unsafe { &mut *world };
    let p = unsafe { &*params };
    manlab_core::step(p, w)
}

/// Resolves one actor against a single box given as `[min, max]` ranges.
/// Returns 0 none, 1 right, 2 left, 3 bottom, 4 top.
#[no_mangle]
pub extern "C" fn man_player_collision(actor: *mut Actor, obj_x: *const f32, obj_y: *const f32) -> i32 {
    if actor.is_null() || obj_x.is_null() || obj_y.is_null() { return 0; }
    let a = unsafe { &mut *actor };
    let obstacle = unsafe {
        Aabb {
            x: [*obj_x, *obj_x.add(1)],
            y: [*obj_y, *obj_y.add(1)],
        }
    };
    manlab_core::player_collision(a, &obstacle).code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_handle_lifecycle() {
        let mut params = Params { gravity: 0.0, ..Params::default() };
        man_default_params(&mut params);
        assert_eq!(params.gravity, 4.0);

        let world = man_world_new();
        assert!(!world.is_null());

        man_world_apply_input(world, &params, Buttons::RIGHT.bits());
        let _ = man_world_step(world, &params);

        let mut actor = Actor::default();
        man_world_actor(world, &mut actor);
        assert_eq!(actor.x, 970.0);

        man_world_free(world);
    }

    #[test]
    fn null_handles_are_ignored() {
        let params = Params::default();
        assert_eq!(man_world_step(std::ptr::null_mut(), &params), Events::default());
        man_world_free(std::ptr::null_mut());
    }

    #[test]
    fn collision_takes_two_ranges() {
        let mut actor = Actor::new(100.0, 100.0, 100.0, 200.0);
        actor.vy = 8.0;
        let xs = [150.0f32, 250.0];
        let ys = [280.0f32, 380.0];

        assert_eq!(man_player_collision(&mut actor, xs.as_ptr(), ys.as_ptr()), 3);
        assert_eq!((actor.y, actor.vy), (80.0, 0.0));
    }
}
