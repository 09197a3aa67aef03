use super::super::{Model, Msg};
use flamescope_shared::ModelType;
use flamescope_shared::render::{DetectionsView, ResultSummary, ResultsView, summarize};
use strum::IntoEnumIterator;
use yew::prelude::*;

pub fn render_result_page(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="results-page">
            <div class="results-grid">
                { for ModelType::iter().map(|model_type| html! {
                    <section class="results-panel" key={model_type.to_string()}>
                        <h2 class="panel-title">{ model_type.title() }</h2>
                        { render_results(&summarize(model.state.result_for(model_type))) }
                    </section>
                }) }
            </div>
            <div class="button-container">
                <button
                    class="analyze-btn"
                    title="Back to upload (Esc)"
                    onclick={link.callback(|_| Msg::GoBack)}
                >
                    <i class="fa-solid fa-arrow-left"></i>{" Go Back"}
                </button>
            </div>
        </div>
    }
}

pub fn render_results(view: &ResultsView) -> Html {
    match view {
        ResultsView::Placeholder(message) => html! {
            <p class="no-results-message">{ *message }</p>
        },
        ResultsView::Summary(summary) => render_summary(summary),
    }
}

fn render_summary(summary: &ResultSummary) -> Html {
    html! {
        <div class="results-container">
            <h3 class="result-header">{ summary.heading }</h3>
            if let Some(result_id) = &summary.result_id {
                <p class="result-meta">{ result_id }</p>
            }
            if let Some(recorded) = &summary.recorded {
                <p class="result-meta">{ recorded }</p>
            }
            if let Some(url) = &summary.image_url {
                <div class="annotated-image">
                    <img src={url.clone()} alt="Processed Image" />
                </div>
            }
            <p class="processing-time">{ &summary.processing_time }</p>
            if let Some(line) = &summary.classification {
                <p class={classes!("classification", if line.is_fire { "fire" } else { "no-fire" })}>
                    { &line.text }
                </p>
            }
            if let Some(detections) = &summary.detections {
                { render_detections(detections) }
            }
        </div>
    }
}

fn render_detections(detections: &DetectionsView) -> Html {
    match detections {
        DetectionsView::NoneFound(message) => html! {
            <p class="no-detections">{ *message }</p>
        },
        DetectionsView::Rows { heading, rows } => html! {
            <div class="detections">
                <h3 class="detections-heading">{ heading }</h3>
                <ul>
                    { for rows.iter().enumerate().map(|(index, row)| html! {
                        <li class="detection-item" key={index}>
                            <p>{ &row.confidence }</p>
                            <p>{ &row.class_name }</p>
                            <p class="truncate">{ &row.bounding_box }</p>
                        </li>
                    }) }
                </ul>
            </div>
        },
    }
}
