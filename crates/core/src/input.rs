use crate::{Actor, Facing, Params};

bitflags::bitflags! {
    #[repr(transparent)]
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
    pub struct Buttons: u8 {
        const LEFT   = 1 << 0;
        const RIGHT  = 1 << 1;
        const JUMP   = 1 << 2;
        const ATTACK = 1 << 3;
        const RESET  = 1 << 4;
    }
}

/// Applies one frame of held keys. Impulses add straight onto the velocity;
/// the limiter in the physics step is the only thing that shapes them.
pub fn apply_input(params: &Params, actor: &mut Actor, buttons: Buttons) {
    if buttons.contains(Buttons::LEFT) {
        actor.vx -= params.move_impulse;
        actor.facing = Facing::Left;
    }
    if buttons.contains(Buttons::RIGHT) {
        actor.vx += params.move_impulse;
        actor.facing = Facing::Right;
    }
    if buttons.contains(Buttons::JUMP) {
        actor.vy -= params.jump_impulse;
    }

    actor.attack = buttons.contains(Buttons::ATTACK) as u8;

    // Teleport only; the box catches up on the next refresh.
    if buttons.contains(Buttons::RESET) {
        actor.x = params.reset_x;
        actor.y = params.reset_y;
    }
}
