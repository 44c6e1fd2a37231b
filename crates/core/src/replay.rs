use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{apply_input, step, Actor, Buttons, Events, Layout, Params, World, WorldError};

const FNV_OFFSET: u64 = 0xcbf29ce484222325;
const FNV_PRIME: u64 = 0x100000001b3;

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("malformed replay: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    World(#[from] WorldError),
}

/// A recorded session: optional tuning and level, plus one `Buttons` byte per
/// frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Replay {
    #[serde(default)]
    pub params: Params,
    #[serde(default)]
    pub layout: Layout,
    pub inputs: Vec<u8>,
}

pub struct Frame<'a> {
    pub index: usize,
    pub buttons: Buttons,
    pub actor: &'a Actor,
    pub events: Events,
}

/// Running fingerprint of a replay. Two runs with equal traces moved the
/// actor identically at whole-pixel resolution.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Trace {
    pub frames: u32,
    pub hash: u64,
    pub landed: u32,
    pub bonked: u32,
    pub walled: u32,
}

impl Default for Trace {
    fn default() -> Self {
        Self {
            frames: 0,
            hash: FNV_OFFSET,
            landed: 0,
            bonked: 0,
            walled: 0,
        }
    }
}

impl Trace {
    pub fn record(&mut self, actor: &Actor, ev: Events) {
        self.frames += 1;
        self.landed += ev.landed as u32;
        self.bonked += ev.bonked as u32;
        self.walled += ev.walled as u32;

        for value in [
            actor.x.round() as i64,
            actor.y.round() as i64,
            actor.vx.round() as i64,
            actor.vy.round() as i64,
            actor.facing as i64,
            actor.attack as i64,
        ] {
            for b in value.to_le_bytes() {
                self.hash ^= b as u64;
                self.hash = self.hash.wrapping_mul(FNV_PRIME);
            }
        }
    }
}

impl Replay {
    pub fn from_json(src: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(src)?)
    }

    /// Replays every frame the way the desktop loop does (input, then step)
    /// and hands each post-step state to `on_frame`.
    pub fn run<F>(&self, mut on_frame: F) -> Result<Trace, ReplayError>
    where
        F: FnMut(&Frame<'_>),
    {
        let mut world = World::load(&self.layout)?;
        let mut trace = Trace::default();

        for (index, bits) in self.inputs.iter().enumerate() {
            let buttons = Buttons::from_bits_truncate(*bits);
            apply_input(&self.params, &mut world.actor, buttons);
            let events = step(&self.params, &mut world);
            trace.record(&world.actor, events);

            on_frame(&Frame {
                index,
                buttons,
                actor: &world.actor,
                events,
            });
        }

        Ok(trace)
    }
}
