//! Plexus Background Component
//! Full-viewport canvas redrawn on every animation frame

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MouseEvent};

use crate::plexus::{CanvasRenderer, Plexus, LAYERS};
use crate::utils::constants::PLEXUS_CANVAS_ID;

#[component]
pub fn PlexusBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

    // Start once, as soon as the canvas is in the DOM
    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        let Some(canvas) = canvas_ref.get() else {
            return false;
        };
        if let Err(e) = start_animation(canvas) {
            log::error!("[PLEXUS] Animation not started: {}", e);
        }
        true
    });

    view! {
        <canvas
            id=PLEXUS_CANVAS_ID
            class="plexus-bg"
            node_ref=canvas_ref
        ></canvas>
    }
}

fn start_animation(canvas: HtmlCanvasElement) -> Result<(), String> {
    let window = web_sys::window().ok_or("no window")?;
    let renderer = Rc::new(CanvasRenderer::new(canvas.clone())?);

    let (width, height) = renderer.fit_to_window();
    let plexus = Rc::new(RefCell::new(Plexus::new(width, height, &LAYERS, js_sys::Math::random)));
    log::info!("[PLEXUS] Started on {}x{} canvas", width, height);

    // Resize
    {
        let plexus = plexus.clone();
        let renderer = renderer.clone();
        listen(&window, "resize", move |_| {
            let (width, height) = renderer.fit_to_window();
            plexus.borrow_mut().resize(width, height);
        })?;
    }

    // Pointer tracking and ripple
    {
        let plexus = plexus.clone();
        listen(&canvas, "mousemove", move |e| {
            if let Some((x, y)) = client_point(&e) {
                plexus.borrow_mut().pointer_moved(x, y);
            }
        })?;
    }
    {
        let plexus = plexus.clone();
        listen(&canvas, "mouseleave", move |_| {
            plexus.borrow_mut().pointer_left();
        })?;
    }
    {
        let plexus = plexus.clone();
        listen(&canvas, "mousedown", move |e| {
            if let Some((x, y)) = client_point(&e) {
                plexus.borrow_mut().pointer_pressed(x, y);
            }
        })?;
    }

    // Frame loop: the callback re-schedules itself through the shared slot
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    *slot.borrow_mut() = Some(Closure::new(move || {
        {
            let mut plexus = plexus.borrow_mut();
            plexus.step();
            renderer.paint(&plexus.frame());
        }
        if let Some(callback) = next.borrow().as_ref() {
            request_animation_frame(callback);
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        request_animation_frame(callback);
    }
    Ok(())
}

/// Attach `handler` for the lifetime of the page
fn listen<F>(target: &web_sys::EventTarget, event: &str, handler: F) -> Result<(), String>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| format!("{} listener: {:?}", event, e))?;
    closure.forget();
    Ok(())
}

/// Viewport coordinates of a mouse event
fn client_point(event: &Event) -> Option<(f64, f64)> {
    event
        .dyn_ref::<MouseEvent>()
        .map(|e| (f64::from(e.client_x()), f64::from(e.client_y())))
}

fn request_animation_frame(callback: &Closure<dyn FnMut()>) {
    let scheduled = web_sys::window()
        .map(|window| window.request_animation_frame(callback.as_ref().unchecked_ref()));
    if !matches!(scheduled, Some(Ok(_))) {
        log::error!("[PLEXUS] requestAnimationFrame failed, animation stopped");
    }
}
