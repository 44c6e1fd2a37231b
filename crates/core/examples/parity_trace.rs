use manlab_core::{apply_input, step, Buttons, Layout, Params, Trace, World};

fn main() {
    let params = Params::default();
    let layout = Layout {
        spawn_y: 0.0,
        ..Layout::default()
    };
    let mut world = World::load(&layout).expect("default layout fits");
    let mut trace = Trace::default();

    for frame in 0..240 {
        let mut buttons = Buttons::empty();
        if (160..200).contains(&frame) {
            buttons |= Buttons::RIGHT;
        }
        if frame == 200 {
            buttons |= Buttons::JUMP | Buttons::ATTACK;
        }

        apply_input(&params, &mut world.actor, buttons);
        let ev = step(&params, &mut world);
        trace.record(&world.actor, ev);
    }

    let a = &world.actor;
    println!(
        "{}",
        serde_json::json!({
            "x": a.x,
            "y": a.y,
            "vx": a.vx,
            "vy": a.vy,
            "landed": trace.landed,
            "bonked": trace.bonked,
            "walled": trace.walled,
            "hash": format!("{:#018x}", trace.hash),
        })
    );
}
