use shared::models::DailyStat;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::{Html, Properties, function_component, html, use_effect_with, use_node_ref};

use crate::charts::canvas::CanvasSurface;
use crate::charts::draw_claims_chart;

#[derive(Properties, PartialEq)]
pub struct ClaimsChartProps {
    pub stats: Vec<DailyStat>,
    #[prop_or(640)]
    pub width: u32,
    #[prop_or(240)]
    pub height: u32,
}

/// Canvas host for the claims bar chart; redraws whenever the series or the
/// surface dimensions change.
#[function_component(ClaimsChart)]
pub fn claims_chart(props: &ClaimsChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let deps = (props.stats.clone(), props.width, props.height);
        use_effect_with(deps, move |(stats, width, height)| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                canvas.set_width(*width);
                canvas.set_height(*height);
                let ctx = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()
                    .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok());
                if let Some(ctx) = ctx {
                    let mut surface = CanvasSurface::new(&ctx);
                    draw_claims_chart(&mut surface, f64::from(*width), f64::from(*height), stats);
                }
            }
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="w-full"
            width={props.width.to_string()}
            height={props.height.to_string()}
        />
    }
}
