pub mod events;
pub mod setup;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::CanvasRenderingContext2d;
use std::cell::RefCell;
use std::rc::Rc;

use crate::canvas::renderer;
use crate::state::APP_STATE;

fn request_frame(callback: &Closure<dyn FnMut()>) {
    let requested = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no global window"))
        .and_then(|w| w.request_animation_frame(callback.as_ref().unchecked_ref()));
    if let Err(e) = requested {
        web_sys::console::error_1(&format!("request_animation_frame failed: {:?}", e).into());
    }
}

/// Drive the background scene: one `update` + `draw` per display refresh.
pub fn setup_animation_loop(ctx: CanvasRenderingContext2d) {
    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = js_sys::Date::now();
        APP_STATE.with(|state| {
            let mut state = state.borrow_mut();
            let t = state.scene_time(now);
            let viewport = state.viewport;
            match state.scene.as_mut() {
                Some(scene) => {
                    scene.update(t);
                    scene.draw(&ctx, &viewport);
                }
                None => renderer::clear(&ctx, &viewport),
            }
        });

        if let Some(next) = f.borrow().as_ref() {
            request_frame(next);
        }
    }) as Box<dyn FnMut()>));

    if let Some(first) = g.borrow().as_ref() {
        request_frame(first);
    };
}
