use super::super::api;
use super::super::{Model, Msg};
use flamescope_shared::{
    ApiConfig, Completion, FetchError, PredictionResponse, RequestTicket, Submission, ViewMode,
};
use gloo_file::File as GlooFile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>, submission: Submission<GlooFile>) -> bool {
    if model.state.in_flight() {
        log::warn!("Submitting {} while a request is still in flight", submission.model_type);
    }

    let ticket = model.state.begin_submit(submission.model_type);
    log::info!(
        "Submitting {} for {} (generation {})",
        submission.name,
        submission.model_type,
        ticket.generation
    );
    send_prediction_request(ctx, model.api.clone(), ticket, submission.file);
    true
}

pub fn handle_prediction_finished(
    model: &mut Model,
    ticket: RequestTicket,
    outcome: Result<PredictionResponse, FetchError>,
) -> bool {
    model.state.complete(ticket, outcome) == Completion::Applied
}

pub fn handle_go_back(model: &mut Model) -> bool {
    if model.state.view() != ViewMode::Result {
        return false;
    }
    model.state.go_back();
    true
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = model.theme.toggled();
    model.theme.apply();
    model.theme.store();
    true
}

pub fn handle_health_checked(model: &mut Model, online: bool) -> bool {
    model.backend_online = Some(online);
    true
}

pub fn send_prediction_request(ctx: &Context<Model>, api: ApiConfig, ticket: RequestTicket, file: GlooFile) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let outcome = api::predict(&api, &file, ticket.model_type).await;
            link.send_message(Msg::PredictionFinished(ticket, outcome));
        }
    });
}

pub fn send_health_check(ctx: &Context<Model>, api: ApiConfig) {
    spawn_local({
        let link = ctx.link().clone();

        async move {
            let online = match api::check_health(&api).await {
                Ok(status) if status.is_ok() => true,
                Ok(status) => {
                    log::warn!("Model service reports status {:?}", status.status);
                    false
                }
                Err(e) => {
                    log::warn!("Health check against {} failed: {}", api.origin(), e);
                    false
                }
            };
            link.send_message(Msg::HealthChecked(online));
        }
    });
}
