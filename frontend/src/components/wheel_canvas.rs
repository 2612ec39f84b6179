use std::f64::consts::TAU;

use shared::spin_wheel::{label_angle, segment_span, segment_under_pointer, Segment};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const GOLD: &str = "#D4AF37";
const POINTER_RED: &str = "#E50000";
const FALLBACK_COLORS: [&str; 2] = ["#E50000", "#000000"];

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub segments: Vec<Segment>,
    pub angle: f64,
    /// Canvas width and height in pixels.
    #[prop_or(300)]
    pub size: u32,
    /// Brighten the slice under the pointer.
    #[prop_or_default]
    pub highlight: bool,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.segments.clone(), props.angle, props.highlight),
            move |(segments, angle, highlight)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    match context_2d(&canvas) {
                        Some(context) => {
                            if let Err(err) = draw_wheel(&context, &canvas, segments, *angle, *highlight) {
                                log::error!("failed to draw wheel: {:?}", err);
                            }
                        }
                        None => log::warn!("2d canvas context unavailable"),
                    }
                }
            },
        );
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={props.size.to_string()}
            height={props.size.to_string()}
            class="rounded-full border-4 border-[#D4AF37] shadow-lg drop-shadow-[0_0_10px_rgba(212,175,55,0.5)]"
        />
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
}

fn draw_wheel(
    context: &CanvasRenderingContext2d,
    canvas: &HtmlCanvasElement,
    segments: &[Segment],
    angle: f64,
    highlight: bool,
) -> Result<(), JsValue> {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = center_x.min(center_y) - 10.0;
    let count = segments.len();

    context.clear_rect(0.0, 0.0, width, height);
    if count == 0 {
        return Ok(());
    }

    let font = if width >= 350.0 { "bold 10px Arial" } else { "bold 12px Arial" };
    let lit = highlight.then(|| segment_under_pointer(count, angle));

    for (i, segment) in segments.iter().enumerate() {
        let (start, end) = segment_span(count, i, angle);

        context.begin_path();
        context.move_to(center_x, center_y);
        context.arc(center_x, center_y, radius, start, end)?;
        context.close_path();
        let color = segment
            .color
            .as_deref()
            .unwrap_or(FALLBACK_COLORS[i % FALLBACK_COLORS.len()]);
        context.set_fill_style_str(color);
        context.fill();
        if lit == Some(i) {
            context.set_fill_style_str("rgba(212, 175, 55, 0.35)");
            context.fill();
        }
        context.set_stroke_style_str(GOLD);
        context.set_line_width(2.0);
        context.stroke();

        // Label
        context.save();
        context.translate(center_x, center_y)?;
        context.rotate(label_angle(count, i, angle))?;
        context.set_text_align("right");
        context.set_fill_style_str("#FFFFFF");
        context.set_font(font);
        context.fill_text(&segment.label, radius - 15.0, 5.0)?;
        context.restore();
    }

    // Hub
    context.begin_path();
    context.arc(center_x, center_y, 15.0, 0.0, TAU)?;
    context.set_fill_style_str(GOLD);
    context.fill();

    // Pointer at 3 o'clock
    context.begin_path();
    context.move_to(center_x + radius + 10.0, center_y);
    context.line_to(center_x + radius - 10.0, center_y - 15.0);
    context.line_to(center_x + radius - 10.0, center_y + 15.0);
    context.close_path();
    context.set_fill_style_str(POINTER_RED);
    context.fill();
    context.set_stroke_style_str("#FFFFFF");
    context.set_line_width(2.0);
    context.stroke();

    Ok(())
}
