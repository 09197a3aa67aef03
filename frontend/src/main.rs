mod api;
mod components;

use components::handlers;
use components::header::render_header;
use components::results::render_result_page;
use components::spinner::Spinner;
use components::theme_toggle::{Theme, render_theme_toggle};
use components::uploader::Uploader;
use components::utils::render_error_message;
use flamescope_shared::{
    ApiConfig, AppState, FetchError, ModelType, Phase, PredictionResponse, RequestTicket,
    Submission, ViewMode,
};
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use strum::IntoEnumIterator;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

// Yew msg components
pub enum Msg {
    Submit(Submission<GlooFile>),
    PredictionFinished(RequestTicket, Result<PredictionResponse, FetchError>),
    GoBack,
    HealthChecked(bool),
    ToggleTheme,
}

// Main component
pub struct Model {
    state: AppState,
    api: ApiConfig,
    theme: Theme,
    backend_online: Option<bool>,
    on_submit: Callback<Submission<GlooFile>>,
    _key_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let api = ApiConfig::from_build_env();
        let theme = Theme::load();
        theme.apply();

        let key_listener = web_sys::window().map(|window| {
            let link = ctx.link().clone();
            EventListener::new(&window, "keydown", move |event| {
                if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
                    if key_event.key() == "Escape" {
                        link.send_message(Msg::GoBack);
                    }
                }
            })
        });

        handlers::send_health_check(ctx, api.clone());

        Self {
            state: AppState::new(),
            api,
            theme,
            backend_online: None,
            on_submit: ctx.link().callback(Msg::Submit),
            _key_listener: key_listener,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit(submission) => handlers::handle_submit(self, ctx, submission),
            Msg::PredictionFinished(ticket, outcome) => {
                handlers::handle_prediction_finished(self, ticket, outcome)
            }
            Msg::GoBack => handlers::handle_go_back(self),
            Msg::HealthChecked(online) => handlers::handle_health_checked(self, online),
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header(self.backend_online) }
                <div class="top-right">
                    { render_theme_toggle(self.theme, ctx.link()) }
                </div>

                <main class="main-content">
                {
                    match self.state.view() {
                        ViewMode::Result => render_result_page(self, ctx),
                        ViewMode::Form => self.render_form(),
                    }
                }
                </main>

                <footer class="app-footer">
                    <p>{ format!("Fire & smoke detection | {}", self.api.origin()) }</p>
                </footer>
            </div>
        }
    }
}

impl Model {
    fn render_form(&self) -> Html {
        let loading = self.state.phase() == Phase::Loading;

        html! {
            <>
                if loading {
                    <Spinner />
                }
                { render_error_message(self) }
                <div class="upload-section">
                    { for ModelType::iter().map(|model_type| html! {
                        <Uploader
                            key={model_type.to_string()}
                            model_type={model_type}
                            on_submit={self.on_submit.clone()}
                            disabled={loading}
                        />
                    }) }
                </div>
            </>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Flamescope starting...");
    yew::Renderer::<Model>::new().render();
}
