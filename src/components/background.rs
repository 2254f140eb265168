use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, Window};
use yew::prelude::*;

use crate::config;
use crate::network::Network;

const POINT_FILL: &str = "rgba(110, 231, 183, 0.5)";

fn link_stroke(alpha: f64) -> String {
    format!("rgba(110, 231, 183, {:.3})", alpha)
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Everything the running loop owns. Dropping it stops the animation.
struct Animation {
    window: Window,
    frame: Rc<Cell<Option<i32>>>,
    tick: FrameCallback,
    on_resize: Closure<dyn FnMut()>,
    debounce: Rc<RefCell<Option<Timeout>>>,
}

impl Drop for Animation {
    fn drop(&mut self) {
        if let Some(id) = self.frame.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
        self.debounce.borrow_mut().take();
        // The frame closure holds a handle to its own cell.
        self.tick.borrow_mut().take();
    }
}

fn viewport(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0);
    let height = window
        .document()
        .and_then(|d| d.body())
        .map(|b| f64::from(b.scroll_height()))
        .unwrap_or(0.0);
    (width, height)
}

fn fit(canvas: &HtmlCanvasElement, network: &mut Network, window: &Window) {
    let (width, height) = viewport(window);
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    network.reseed(width, height, web_sys::js_sys::Math::random);
    log::debug!("Background reseeded at {}x{}", width, height);
}

fn draw(ctx: &CanvasRenderingContext2d, network: &Network) {
    let (width, height) = network.size();
    ctx.clear_rect(0.0, 0.0, width, height);

    let points = network.points();
    ctx.set_line_width(1.0);
    for link in network.links() {
        let (a, b) = (points[link.from], points[link.to]);
        ctx.set_stroke_style_str(&link_stroke(link.alpha));
        ctx.begin_path();
        ctx.move_to(a.x, a.y);
        ctx.line_to(b.x, b.y);
        ctx.stroke();
    }

    ctx.set_fill_style_str(POINT_FILL);
    for p in points {
        ctx.begin_path();
        let _ = ctx.arc(p.x, p.y, config::NETWORK_POINT_RADIUS, 0.0, TAU);
        ctx.fill();
    }
}

fn start(canvas: HtmlCanvasElement) -> Option<Animation> {
    let window = window()?;
    let ctx = canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()?;

    let network = Rc::new(RefCell::new(Network::default()));
    fit(&canvas, &mut network.borrow_mut(), &window);

    let frame = Rc::new(Cell::new(None));
    let tick: FrameCallback = Rc::new(RefCell::new(None));
    {
        let this = tick.clone();
        let frame = frame.clone();
        let network = network.clone();
        let window = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            {
                let mut network = network.borrow_mut();
                network.step();
                draw(&ctx, &network);
            }
            if let Some(callback) = this.borrow().as_ref() {
                frame.set(
                    window
                        .request_animation_frame(callback.as_ref().unchecked_ref())
                        .ok(),
                );
            }
        }) as Box<dyn FnMut()>));
    }
    if let Some(callback) = tick.borrow().as_ref() {
        frame.set(
            window
                .request_animation_frame(callback.as_ref().unchecked_ref())
                .ok(),
        );
    }

    let debounce = Rc::new(RefCell::new(None));
    let on_resize = {
        let debounce = debounce.clone();
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            let network = network.clone();
            let window = window.clone();
            let canvas = canvas.clone();
            // Replacing the pending timeout cancels it.
            *debounce.borrow_mut() = Some(Timeout::new(
                config::NETWORK_RESIZE_DEBOUNCE_MS,
                move || fit(&canvas, &mut network.borrow_mut(), &window),
            ));
        }) as Box<dyn FnMut()>)
    };
    if window
        .add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Could not watch window resizes for the background");
    }

    Some(Animation {
        window,
        frame,
        tick,
        on_resize,
        debounce,
    })
}

#[function_component(AnimatedBackground)]
pub fn animated_background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |_| {
                let animation = canvas_ref.cast::<HtmlCanvasElement>().and_then(start);
                if animation.is_none() {
                    log::warn!("Animated background could not start");
                }
                move || drop(animation)
            },
            (),
        );
    }

    html! {
        <>
            <style>
                {r#"
                .network-background {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 0;
                    pointer-events: none;
                }
                "#}
            </style>
            <canvas ref={canvas_ref} class="network-background" aria-hidden="true"></canvas>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_stroke_is_a_css_color() {
        assert_eq!(link_stroke(0.8), "rgba(110, 231, 183, 0.800)");
        assert_eq!(link_stroke(0.0), "rgba(110, 231, 183, 0.000)");
    }
}
