use wasm_bindgen::prelude::*;
use manlab_core::{Buttons, Layout, Params, World};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

#[wasm_bindgen]
pub struct Game {
    params: Params,
    world: World,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Game, JsValue> {
        let world = World::load(&Layout::default()).map_err(js_err)?;
        Ok(Game { params: Params::default(), world })
    }

    /// Teleport; the collision box catches up on the next step.
    pub fn reset(&mut self, x: f32, y: f32) {
        self.world.actor.x = x;
        self.world.actor.y = y;
    }

    /// Partial params as JSON; missing keys take their defaults.
    pub fn set_params_json(&mut self, json: &str) -> Result<(), JsValue> {
        self.params = serde_json::from_str(json).map_err(js_err)?;
        Ok(())
    }

    /// Packed rects: [x,y,w,h, x,y,w,h, ...]
    pub fn platforms(&self) -> Box<[f32]> {
        self.world
            .platforms()
            .iter()
            .flat_map(|p| {
                let r = p.rect();
                [r.x, r.y, r.w, r.h]
            })
            .collect()
    }

    /// Apply held keys and step once; returns actor state and events as a
    /// JS object.
    pub fn step(&mut self, input_bits: u8) -> Result<JsValue, JsValue> {
        let buttons = Buttons::from_bits_truncate(input_bits);
        manlab_core::apply_input(&self.params, &mut self.world.actor, buttons);
        let ev = manlab_core::step(&self.params, &mut self.world);

        let a = &self.world.actor;
        let obj = js_sys::Object::new();
        let set = |k: &str, v: JsValue| js_sys::Reflect::set(&obj, &k.into(), &v).map(|_| ());
        set("x", JsValue::from_f64(a.x as f64))?;
        set("y", JsValue::from_f64(a.y as f64))?;
        set("vx", JsValue::from_f64(a.vx as f64))?;
        set("vy", JsValue::from_f64(a.vy as f64))?;
        set("facing_left", JsValue::from_bool(a.facing == manlab_core::Facing::Left))?;
        set("attack", JsValue::from_bool(a.attacking()))?;
        set("att_x", JsValue::from_f64(a.attack_box.x as f64))?;
        set("att_y", JsValue::from_f64(a.attack_box.y as f64))?;
        set("landed", JsValue::from_bool(ev.landed != 0))?;
        set("bonked", JsValue::from_bool(ev.bonked != 0))?;
        set("walled", JsValue::from_bool(ev.walled != 0))?;

        Ok(JsValue::from(obj))
    }
}
