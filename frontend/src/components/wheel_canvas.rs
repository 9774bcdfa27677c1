use std::f64::consts::PI;
use std::rc::Rc;

use shared::shared_wheel_game::{WheelLayout, POINTER_ANGLE_DEG};
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const CANVAS_SIZE: u32 = 450;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub layout: Rc<WheelLayout>,
    /// Clockwise rotation in degrees
    pub rotation: f64,
    pub is_spinning: bool,
}

/// Degrees clockwise from 12 o'clock to canvas radians, which start at 3 o'clock.
fn to_canvas_radians(degrees: f64) -> f64 {
    (degrees - 90.0) * PI / 180.0
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .map(|element| element.class_list().contains("dark"))
        .unwrap_or(false)
}

fn draw_segments(context: &CanvasRenderingContext2d, layout: &WheelLayout, center: f64, radius: f64) {
    for segment in layout.segments() {
        context.begin_path();
        context.set_fill_style_str(&segment.color);
        context.move_to(center, center);
        let _ = context.arc(
            center,
            center,
            radius,
            to_canvas_radians(segment.start_deg),
            to_canvas_radians(segment.end_deg()),
        );
        context.close_path();
        context.fill();

        // Divider on the leading edge
        context.begin_path();
        context.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
        context.set_line_width(2.5);
        context.move_to(center, center);
        let edge = to_canvas_radians(segment.start_deg);
        context.line_to(center + radius * edge.cos(), center + radius * edge.sin());
        context.stroke();
    }

    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#ffffff");
    context.set_font("bold 18px 'Segoe UI', Roboto, system-ui, sans-serif");
    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
    context.set_shadow_blur(3.0);
    context.set_shadow_offset_x(1.0);
    context.set_shadow_offset_y(1.0);

    for segment in layout.segments() {
        context.save();
        let _ = context.translate(center, center);
        let _ = context.rotate(to_canvas_radians(segment.midpoint_deg()));
        let _ = context.translate(radius * 0.62, 0.0);
        let _ = context.fill_text(&segment.label, 0.0, 0.0);
        context.restore();
    }

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
    context.set_shadow_offset_x(0.0);
    context.set_shadow_offset_y(0.0);
}

fn draw_hub(context: &CanvasRenderingContext2d, center: f64, radius: f64, dark: bool) {
    let inner_radius = radius * 0.18;

    context.begin_path();
    context.set_fill_style_str(if dark { "#2d3142" } else { "#7c4a1e" });
    let _ = context.arc(center, center, inner_radius, 0.0, 2.0 * PI);
    context.fill();

    context.begin_path();
    context.set_stroke_style_str("rgba(255, 255, 255, 0.8)");
    context.set_line_width(3.0);
    let _ = context.arc(center, center, inner_radius, 0.0, 2.0 * PI);
    context.stroke();
}

fn draw_pointer(context: &CanvasRenderingContext2d, center: f64, radius: f64, is_spinning: bool) {
    let tip = to_canvas_radians(POINTER_ANGLE_DEG);
    let tip_x = center + (radius - 10.0) * tip.cos();
    let tip_y = center + (radius - 10.0) * tip.sin();

    context.set_shadow_color(if is_spinning { "rgba(255, 215, 130, 0.8)" } else { "rgba(0, 0, 0, 0.3)" });
    context.set_shadow_blur(if is_spinning { 10.0 } else { 4.0 });

    context.begin_path();
    context.move_to(tip_x, tip_y);
    context.line_to(tip_x - 18.0, tip_y - 36.0);
    context.line_to(tip_x + 18.0, tip_y - 36.0);
    context.close_path();
    context.set_fill_style_str(if is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#7c4a1e");
    context.set_line_width(2.0);
    context.stroke();

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let layout = props.layout.clone();

        use_effect_with((props.rotation, props.is_spinning), move |(rotation, is_spinning)| {
            let context = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
            });

            if let Some(context) = context {
                let size = f64::from(CANVAS_SIZE);
                let center = size / 2.0;
                let radius = center - 40.0;
                let dark = is_dark_mode();

                context.clear_rect(0.0, 0.0, size, size);

                // Rim
                context.begin_path();
                context.set_fill_style_str(if dark { "#1a1c2e" } else { "#7c4a1e" });
                let _ = context.arc(center, center, radius + 10.0, 0.0, 2.0 * PI);
                context.fill();

                context.save();
                let _ = context.translate(center, center);
                let _ = context.rotate(*rotation * PI / 180.0);
                let _ = context.translate(-center, -center);
                draw_segments(&context, &layout, center, radius);
                context.restore();

                draw_hub(&context, center, radius, dark);
                draw_pointer(&context, center, radius, *is_spinning);
            }
            || ()
        });
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-full max-w-[450px] h-auto rounded-full transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(255, 170, 60, 0.5));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_twelve_o_clock_is_minus_quarter_turn() {
        assert!((to_canvas_radians(0.0) + PI / 2.0).abs() < 1e-12);
        assert!(to_canvas_radians(90.0).abs() < 1e-12);
    }
}
