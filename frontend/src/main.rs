mod api;
mod components;

use components::handlers;
use components::header::{render_header, ServiceHealth};
use components::results::render_results;
use components::upload_section::render_upload_section;
use components::utils::render_error_message;
use gloo_events::{EventListener, EventListenerOptions};
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::copy;
use shared::{
    ClientConfig, Controller, HealthStatus, PredictError, PredictionResponse, PreviewSource,
    RequestId,
};
use web_sys::DragEvent;
use yew::prelude::*;

// Models
/// Browser file handle staged by the controller; its preview is an object
/// URL revoked when the last clone is dropped.
#[derive(Clone)]
pub struct UploadFile(GlooFile);

impl From<GlooFile> for UploadFile {
    fn from(file: GlooFile) -> Self {
        Self(file)
    }
}

impl UploadFile {
    pub fn as_file(&self) -> &GlooFile {
        &self.0
    }
}

impl PreviewSource for UploadFile {
    type Preview = ObjectUrl;

    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.raw_mime_type()
    }

    fn create_preview(&self) -> ObjectUrl {
        ObjectUrl::from(self.0.clone())
    }
}

// Yew msg components
pub enum Msg {
    // Input events
    FilePicked(GlooFile),
    HandleDrop(DragEvent),
    SetDragging(bool),

    // Analysis operations
    Submit,
    PredictionResolved(RequestId, Result<PredictionResponse, PredictError>),
    Reset,

    // UI states
    DismissError,
    HealthChecked(Result<HealthStatus, PredictError>),
}

// Main component
pub struct Model {
    controller: Controller<UploadFile>,
    config: ClientConfig,
    in_flight: Option<handlers::InFlightRequest>,
    validation_error: Option<String>,
    error_dismissed: bool,
    is_dragging: bool,
    health: ServiceHealth,
    _drag_guards: Vec<EventListener>,
}

// Files dropped outside the drop zone must not navigate the tab away.
fn window_drag_guards() -> Vec<EventListener> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };

    ["dragover", "drop"]
        .into_iter()
        .map(|event_type| {
            EventListener::new_with_options(
                &window,
                event_type,
                EventListenerOptions::enable_prevent_default(),
                |event| event.prevent_default(),
            )
        })
        .collect()
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = ClientConfig::from_env_value(option_env!("DERMAINSPECT_API_BASE"));
        log::info!("Using classification service at {}", config.api_base());

        handlers::send_health_check(ctx, &config);

        Self {
            controller: Controller::new(),
            config,
            in_flight: None,
            validation_error: None,
            error_dismissed: false,
            is_dragging: false,
            health: ServiceHealth::Checking,
            _drag_guards: window_drag_guards(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Input events
            Msg::FilePicked(file) => handlers::handle_file_picked(self, file),
            Msg::HandleDrop(event) => handlers::handle_drop(self, event),
            Msg::SetDragging(is_dragging) => {
                let changed = self.is_dragging != is_dragging;
                self.is_dragging = is_dragging;
                changed
            }

            // Analysis operations
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::PredictionResolved(id, outcome) => {
                handlers::handle_prediction_resolved(self, id, outcome)
            }
            Msg::Reset => handlers::handle_reset(self),

            // UI states
            Msg::DismissError => {
                self.validation_error = None;
                self.error_dismissed = true;
                true
            }
            Msg::HealthChecked(result) => handlers::handle_health_checked(self, result),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header(&self.health) }

                <main class="main-content">
                    <h1>{ copy::PAGE_HEADING }</h1>
                    { render_upload_section(self, ctx) }
                    { render_error_message(self, ctx) }
                    { render_results(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>
                        <strong>{"Medical Disclaimer: "}</strong>
                        { copy::FOOTER_DISCLAIMER }
                    </p>
                    <p class="footer-note">
                        { copy::FOOTER_NOTE }
                    </p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("DermaInspect starting...");
    yew::Renderer::<Model>::new().render();
}
