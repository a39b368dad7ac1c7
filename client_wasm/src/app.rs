//! Browser wiring: canvas lookup, input listeners, resize and the frame loop

use crate::input::{is_touch_device, pointer_to_logical};
use crate::renderer::Renderer;
use crate::simulation::LocalGame;
use game_core::{DisplayScale, GameMap, StagedInput};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    AddEventListenerOptions, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent,
    Window,
};

/// Canvas element used when the page does not name one
pub const DEFAULT_CANVAS_ID: &str = "pingPongCanvas";

struct App {
    game: LocalGame,
    renderer: Renderer,
    ctx: CanvasRenderingContext2d,
    input: Rc<RefCell<StagedInput>>,
}

/// Start the game on the canvas with the given element id.
///
/// A page without a usable canvas or 2D context is left untouched.
#[wasm_bindgen]
pub fn start(canvas_id: Option<String>) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        web_sys::console::warn_1(&"Logger already initialised".into());
    }

    let Some(window) = web_sys::window() else {
        log::warn!("No window, not starting");
        return Ok(());
    };
    let Some(document) = window.document() else {
        log::warn!("No document, not starting");
        return Ok(());
    };

    let canvas_id = canvas_id.unwrap_or_else(|| DEFAULT_CANVAS_ID.to_string());
    let Some(element) = document.get_element_by_id(&canvas_id) else {
        log::warn!("No element with id '{}', not starting", canvas_id);
        return Ok(());
    };
    let Ok(canvas) = element.dyn_into::<HtmlCanvasElement>() else {
        log::warn!("Element '{}' is not a canvas, not starting", canvas_id);
        return Ok(());
    };
    let Some(ctx) = canvas
        .get_context("2d")?
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        log::warn!("2D context unavailable, not starting");
        return Ok(());
    };

    let map = GameMap::with_size(canvas.width() as f32, canvas.height() as f32);
    let show_touch_hint = window
        .navigator()
        .user_agent()
        .map(|ua| is_touch_device(&ua))
        .unwrap_or(false);
    let seed = js_sys::Date::now() as u64;

    let game = LocalGame::new(seed, map);
    let renderer = Renderer::new(map, game.config.clone(), show_touch_hint);
    log::info!(
        "Pong starting: {}x{} arena, seed {}, touch hint {}",
        map.width,
        map.height,
        seed,
        show_touch_hint
    );

    let input = Rc::new(RefCell::new(StagedInput::new()));

    apply_display_scale(&canvas, &map);
    setup_resize_handler(&window, &canvas, map)?;
    setup_input_handlers(&canvas, map, input.clone())?;

    let app = Rc::new(RefCell::new(App {
        game,
        renderer,
        ctx,
        input,
    }));
    request_animation_frame(&window, app);

    Ok(())
}

/// Size the canvas element to its container, keeping the aspect ratio
fn apply_display_scale(canvas: &HtmlCanvasElement, map: &GameMap) {
    let container_width = canvas
        .parent_element()
        .map(|parent| parent.client_width())
        .unwrap_or(0);
    let scale = DisplayScale::fit(container_width as f32, map.width, map.height);

    let style = canvas.style();
    if let Err(e) = style
        .set_property("width", &scale.css_width())
        .and_then(|_| style.set_property("height", &scale.css_height()))
    {
        log::warn!("Failed to resize canvas: {:?}", e);
    }
}

fn setup_resize_handler(
    window: &Window,
    canvas: &HtmlCanvasElement,
    map: GameMap,
) -> Result<(), JsValue> {
    let canvas = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
        apply_display_scale(&canvas, &map);
    });
    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Stage the logical y of the first touch, suppressing scroll and zoom
fn stage_touch(
    event: &TouchEvent,
    canvas: &HtmlCanvasElement,
    map: &GameMap,
    input: &RefCell<StagedInput>,
) {
    event.prevent_default();
    if let Some(touch) = event.touches().get(0) {
        let rect = canvas.get_bounding_client_rect();
        let y = pointer_to_logical(
            touch.client_y() as f32,
            rect.top() as f32,
            rect.height() as f32,
            map.height,
        );
        input.borrow_mut().stage(y);
    }
}

fn setup_input_handlers(
    canvas: &HtmlCanvasElement,
    map: GameMap,
    input: Rc<RefCell<StagedInput>>,
) -> Result<(), JsValue> {
    // Mouse move
    {
        let input = input.clone();
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let y = pointer_to_logical(
                event.client_y() as f32,
                rect.top() as f32,
                rect.height() as f32,
                map.height,
            );
            input.borrow_mut().stage(y);
        });
        canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }

    // Touch start and move; non-passive so default scrolling can be cancelled
    let options = AddEventListenerOptions::new();
    options.set_passive(false);
    for event_name in ["touchstart", "touchmove"] {
        let input = input.clone();
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
            stage_touch(&event, &canvas_clone, &map, &input);
        });
        canvas.add_event_listener_with_callback_and_add_event_listener_options(
            event_name,
            closure.as_ref().unchecked_ref(),
            &options,
        )?;
        closure.forget();
    }

    Ok(())
}

fn request_animation_frame(window: &Window, app: Rc<RefCell<App>>) {
    // Released by the JS side once the frame has run
    let callback = Closure::once_into_js(move |_time: f64| {
        game_loop(app);
    });
    if let Err(e) = window.request_animation_frame(callback.unchecked_ref()) {
        log::warn!("Failed to schedule frame: {:?}", e);
    }
}

fn game_loop(app: Rc<RefCell<App>>) {
    {
        let mut guard = app.borrow_mut();
        let app = &mut *guard;

        {
            let mut input = app.input.borrow_mut();
            app.game.step(&mut input);
        }

        let snapshot = app.game.snapshot();
        if let Err(e) = app.renderer.draw(&mut app.ctx, &snapshot) {
            log::warn!("Frame {} not drawn: {}", snapshot.frame, e);
        }
    }

    if let Some(window) = web_sys::window() {
        request_animation_frame(&window, app);
    }
}
