//! Browser wiring: canvas, imports, Tangle, listeners and the frame loop.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, HtmlCanvasElement, KeyboardEvent, PointerEvent, Window,
};

use crate::config::HostConfig;
use crate::connection::ConnectionState;
use crate::controller::Controller;
use crate::error::HostError;
use crate::latch::PlayerIndexLatch;
use crate::primitives::Primitives;
use crate::room_name;
use crate::tangle::TangleInstance;

type Host = Rc<Controller<TangleInstance>>;
type Canvas2d = Rc<Primitives<CanvasRenderingContext2d>>;

/// Start the game: pick a room, load the module through Tangle, then hook
/// up input and the animation loop.
pub async fn start(config: HostConfig) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;

    room_name::ensure_location_fragment(&window.location())?;

    let (canvas, context) = find_canvas(&document, &config.canvas_id)?;
    let primitives: Canvas2d = Rc::new(Primitives::new(context, config.pixel_offset));
    let latch = Rc::new(PlayerIndexLatch::new());
    let host: Host = Rc::new(Controller::new(latch.clone(), config.arena_size));

    let imports = build_imports(&primitives, &latch)?;
    let options = build_options(&host, config.fixed_update_interval)?;

    let source = window.fetch_with_str(&config.module_url);
    let instance = TangleInstance::instantiate(&source, &imports, &options).await?;
    log::info!("instantiated {}", config.module_url);

    listen_pointer(&window, &canvas, &host)?;
    listen_keys(&document, &host)?;

    host.attach(instance)?;
    start_animation_loop(&window, host, primitives)
}

fn find_canvas(
    document: &Document,
    id: &str,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), HostError> {
    let canvas = document
        .get_element_by_id(id)
        .ok_or_else(|| HostError::CanvasNotFound(id.to_string()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| HostError::NotACanvas(id.to_string()))?;
    let context = canvas
        .get_context("2d")?
        .ok_or(HostError::NoContext)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| HostError::NoContext)?;
    Ok((canvas, context))
}

/// The `{ env: { ... } }` import object the game module links against.
fn build_imports(primitives: &Canvas2d, latch: &Rc<PlayerIndexLatch>) -> Result<Object, HostError> {
    let env = Object::new();

    let p = primitives.clone();
    let set_color = Closure::<dyn Fn(f64, f64, f64, f64)>::new(move |r, g, b, a| {
        p.set_color(r, g, b, a);
    });
    Reflect::set(&env, &"set_color".into(), set_color.as_ref())?;
    set_color.forget();

    let p = primitives.clone();
    let draw_circle = Closure::<dyn Fn(f64, f64, f64)>::new(move |x, y, radius| {
        if let Err(e) = p.draw_circle(x, y, radius) {
            log::error!("draw_circle: {}", e);
        }
    });
    Reflect::set(&env, &"draw_circle".into(), draw_circle.as_ref())?;
    draw_circle.forget();

    let p = primitives.clone();
    let draw_line = Closure::<dyn Fn(f64, f64, f64, f64)>::new(move |min_x, min_y, max_x, max_y| {
        p.draw_line(min_x, min_y, max_x, max_y);
    });
    Reflect::set(&env, &"draw_line".into(), draw_line.as_ref())?;
    draw_line.forget();

    let l = latch.clone();
    let set_player_index = Closure::<dyn Fn(f64)>::new(move |index: f64| {
        if index < 0.0 {
            log::warn!("set_player_index({}) ignored, negative", index);
            return;
        }
        l.set(index as u32);
    });
    Reflect::set(&env, &"set_player_index".into(), set_player_index.as_ref())?;
    set_player_index.forget();

    let imports = Object::new();
    Reflect::set(&imports, &"env".into(), &env)?;
    Ok(imports)
}

/// Options for `Tangle.instantiateStreaming`.
fn build_options(host: &Host, fixed_update_interval: f64) -> Result<Object, HostError> {
    let options = Object::new();
    Reflect::set(
        &options,
        &"fixed_update_interval".into(),
        &JsValue::from_f64(fixed_update_interval),
    )?;

    let h = host.clone();
    let on_state_change = Closure::<dyn Fn(JsValue)>::new(move |state: JsValue| {
        let state = match state.as_f64() {
            Some(raw) => ConnectionState::from_raw(raw),
            None => {
                log::warn!("unexpected tangle state {:?}", state);
                return;
            }
        };
        if let Err(e) = h.on_state_change(state) {
            log::error!("player_joined: {}", e);
        }
    });
    Reflect::set(
        &options,
        &"on_state_change_callback".into(),
        on_state_change.as_ref(),
    )?;
    on_state_change.forget();

    Ok(options)
}

fn viewport_width(window: &Window) -> f64 {
    match window.visual_viewport() {
        Some(viewport) => viewport.width(),
        None => window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or(0.0),
    }
}

fn listen_pointer(window: &Window, canvas: &HtmlCanvasElement, host: &Host) -> Result<(), HostError> {
    let w = window.clone();
    let h = host.clone();
    let on_pointer = Closure::<dyn FnMut(PointerEvent)>::new(move |event: PointerEvent| {
        let x = f64::from(event.client_x());
        if let Err(e) = h.on_pointer(x, viewport_width(&w)) {
            log::error!("turn: {}", e);
        }
    });
    canvas.add_event_listener_with_callback("pointerdown", on_pointer.as_ref().unchecked_ref())?;
    on_pointer.forget();
    Ok(())
}

fn listen_keys(document: &Document, host: &Host) -> Result<(), HostError> {
    let h = host.clone();
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        if let Err(e) = h.on_key(&event.code()) {
            log::error!("turn: {}", e);
        }
    });
    document.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
    on_key.forget();
    Ok(())
}

/// Draw every animation frame for the life of the page. The closure keeps
/// a handle to itself so it can reschedule.
fn start_animation_loop(window: &Window, host: Host, primitives: Canvas2d) -> Result<(), HostError> {
    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = frame.clone();
    let w = window.clone();

    *frame.borrow_mut() = Some(Closure::new(move || {
        if let Err(e) = host.frame(primitives.target()) {
            log::error!("frame: {}", e);
        }
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(e) = w.request_animation_frame(callback.as_ref().unchecked_ref()) {
                log::error!("request_animation_frame: {:?}", e);
            }
        }
    }));

    if let Some(callback) = frame.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
