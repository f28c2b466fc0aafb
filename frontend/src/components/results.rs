use super::super::{Model, Msg};
use shared::copy;
use shared::{ProbabilityRow, ResultView, Session};
use yew::prelude::*;

pub fn render_results(model: &Model, ctx: &Context<Model>) -> Html {
    let reset = ctx.link().callback(|_| Msg::Reset);

    match model.controller.session() {
        Session::Succeeded { image, result } => {
            let view = ResultView::from_response(result);

            html! {
                <div class="prediction-result">
                    <h2 title={format!("Analysis results for: {}", image.name())}>
                        { copy::RESULT_HEADING }
                    </h2>
                    <div class="predicted-class">
                        <h3>
                            {"Prediction: "}
                            <span class={view.verdict.css_class()}>{ &view.predicted_class }</span>
                        </h3>
                        <p class={classes!("verdict", view.verdict.css_class())}>
                            { view.verdict.headline() }
                        </p>
                    </div>
                    <div class="probabilities">
                        <h4>{ copy::CONFIDENCE_HEADING }</h4>
                        { for view.rows.iter().map(render_probability_row) }
                    </div>
                    <div class="disclaimer">
                        <p>
                            <strong>{"Disclaimer: "}</strong>
                            { copy::RESULT_DISCLAIMER }
                        </p>
                    </div>
                    <button onclick={reset} class="reset-btn">
                        { copy::RESET_AFTER_RESULT_LABEL }
                    </button>
                </div>
            }
        }
        session if session.can_reset() => html! {
            <button onclick={reset} class="reset-btn">
                { copy::RESET_AFTER_ERROR_LABEL }
            </button>
        },
        _ => html! {},
    }
}

fn render_probability_row(row: &ProbabilityRow) -> Html {
    let kind = if row.positive { "positive" } else { "negative" };

    html! {
        <div class={classes!("probability-item", kind)} key={row.label.clone()}>
            <div class="probability-label">
                <span>{ &row.label }</span>
                <span>{ &row.percentage }</span>
            </div>
            <div class="probability-bar">
                <div class="probability-fill" style={row.bar_style()}></div>
            </div>
        </div>
    }
}
