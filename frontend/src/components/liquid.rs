use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

use crate::config;
use crate::effects::liquid::{LiquidField, LiquidSettings};
use crate::effects::{ElementSurface, PointerEvent, PointerSurface, Transformable};

pub const PALETTE: &[&str] = &["#5227FF", "#FF9FFC", "#B19EEF"];

const BLOB_COUNT: usize = 7;

#[derive(Properties, PartialEq)]
pub struct LiquidSurfaceProps {
    #[prop_or(PALETTE)]
    pub colors: &'static [&'static str],
    #[prop_or_default]
    pub settings: LiquidSettings,
    /// Canvas pixels per CSS pixel.
    #[prop_or(0.5)]
    pub resolution: f64,
    #[prop_or_default]
    pub class: Classes,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

fn draw(ctx: &CanvasRenderingContext2d, field: &LiquidField, colors: &[&str]) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, field.width(), field.height());
    ctx.set_global_composite_operation("lighter")?;
    for blob in field.blobs() {
        let gradient = ctx.create_radial_gradient(blob.x, blob.y, 0.0, blob.x, blob.y, blob.radius)?;
        gradient.add_color_stop(0.0, colors[blob.color % colors.len()])?;
        gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)")?;
        ctx.set_fill_style_canvas_gradient(&gradient);
        ctx.fill_rect(
            blob.x - blob.radius,
            blob.y - blob.radius,
            blob.radius * 2.0,
            blob.radius * 2.0,
        );
    }
    Ok(())
}

/// Canvas size in device pixels for the element's current layout size.
fn canvas_size(canvas: &HtmlCanvasElement, resolution: f64) -> (u32, u32) {
    let scale = |css: i32| ((f64::from(css.max(1))) * resolution).round().max(1.0) as u32;
    (scale(canvas.client_width()), scale(canvas.client_height()))
}

/// Pointer source for the canvas. The surface usually sits under other
/// layers with `pointer-events: none`, so moves are taken from the whole
/// document and mapped into the canvas box.
fn page_surface(canvas: &HtmlCanvasElement) -> ElementSurface {
    let root = canvas
        .owner_document()
        .and_then(|document| document.document_element());
    match root {
        Some(root) => ElementSurface::new(root.into()),
        None => ElementSurface::new(canvas.clone().into()),
    }
}

/// Animated blob field. Only mount it while motion is allowed.
#[function_component(LiquidSurface)]
pub fn liquid_surface(props: &LiquidSurfaceProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let settings = props.settings.clone();
        let colors = props.colors;
        let resolution = props.resolution;
        use_effect_with_deps(
            move |_| {
                let running = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    let ctx = match context_2d(&canvas) {
                        Ok(ctx) => ctx,
                        Err(err) => {
                            warn!("Liquid surface disabled: {:?}", err);
                            return None;
                        }
                    };
                    if colors.is_empty() {
                        warn!("Liquid surface has no colors");
                        return None;
                    }

                    let (width, height) = canvas_size(&canvas, resolution);
                    canvas.set_width(width);
                    canvas.set_height(height);
                    let field = Rc::new(RefCell::new(LiquidField::new(
                        settings,
                        f64::from(width),
                        f64::from(height),
                        BLOB_COUNT,
                        colors.len(),
                    )));

                    let pointer = {
                        let field = Rc::clone(&field);
                        let element = canvas.clone();
                        page_surface(&canvas).subscribe(Box::new(move |event| {
                            let mut field = field.borrow_mut();
                            match event {
                                PointerEvent::Move(at) => field.track(element.bounds(), at),
                                PointerEvent::Leave => field.pointer_left(),
                            }
                        }))
                    };

                    let ticker = Interval::new(config::LIQUID_TICK_MS, move || {
                        let (width, height) = canvas_size(&canvas, resolution);
                        let mut field = field.borrow_mut();
                        if canvas.width() != width || canvas.height() != height {
                            canvas.set_width(width);
                            canvas.set_height(height);
                            field.resize(f64::from(width), f64::from(height));
                        }
                        field.step(f64::from(config::LIQUID_TICK_MS));
                        if let Err(err) = draw(&ctx, &field, colors) {
                            warn!("Liquid frame failed: {:?}", err);
                        }
                    });

                    debug!("Liquid surface started at {}x{}", width, height);
                    Some((ticker, pointer))
                });
                move || drop(running)
            },
            (),
        );
    }

    html! {
        <canvas ref={canvas_ref} class={classes!("liquid-surface", props.class.clone())} aria-hidden="true"></canvas>
    }
}

