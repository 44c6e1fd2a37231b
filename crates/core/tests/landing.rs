use manlab_core::{integrate, resolve_contacts, step, Layout, Params, World};

fn dropped_from_top() -> World {
    let layout = Layout {
        spawn_y: 0.0,
        ..Layout::default()
    };
    World::load(&layout).unwrap()
}

#[test]
fn actor_dropped_from_the_top_comes_to_rest_on_the_floor() {
    let params = Params::default();
    let mut world = dropped_from_top();
    let rest_y = 800.0 - world.actor.h;

    // 4px per frame from y = 0 reaches the floor well within this.
    let mut first_landing = None;
    for frame in 0..300 {
        if step(&params, &mut world).landed != 0 && first_landing.is_none() {
            first_landing = Some(frame);
        }
    }
    assert!(first_landing.is_some(), "never touched the floor");

    // The box lags a frame, so the actor dips into the floor and is lifted
    // back out on a short cycle. Every lift leaves it exactly on top, at rest.
    let mut landings = 0;
    for _ in 0..30 {
        let ev = resolve_contacts(&mut world);
        if ev.landed != 0 {
            landings += 1;
            assert_eq!(world.actor.y, rest_y);
            assert_eq!(world.actor.vy, 0.0);
        }
        integrate(&params, &mut world.actor);
        assert!(world.actor.y >= rest_y && world.actor.y <= rest_y + 8.0, "y = {}", world.actor.y);
        assert_eq!(world.actor.x, 960.0);
    }
    assert_eq!(landings, 10);
}

#[test]
fn jumping_leaves_and_returns_to_the_floor() {
    let params = Params::default();
    let mut world = dropped_from_top();
    for _ in 0..300 {
        step(&params, &mut world);
    }

    for _ in 0..10 {
        world.actor.vy -= params.jump_impulse;
        step(&params, &mut world);
    }
    assert!(world.actor.y < 600.0 - 40.0, "y = {}", world.actor.y);

    for _ in 0..200 {
        step(&params, &mut world);
    }
    assert!(world.actor.y >= 600.0 && world.actor.y <= 608.0, "y = {}", world.actor.y);
}
