use super::super::{Model, Msg, UploadFile};
use super::header::ServiceHealth;
use super::utils::first_file;
use crate::api;
use futures::future::{AbortHandle, Abortable};
use gloo_file::File as GlooFile;
use shared::{ClientConfig, HealthStatus, Phase, PredictError, PredictionResponse, RequestId};
use wasm_bindgen_futures::spawn_local;
use web_sys::DragEvent;
use yew::prelude::*;

/// Handle on the one request in flight. Dropping it aborts the request,
/// so a reset or an unmounted component never receives a late result.
pub struct InFlightRequest {
    id: RequestId,
    abort: AbortHandle,
}

impl InFlightRequest {
    pub fn id(&self) -> RequestId {
        self.id
    }
}

impl Drop for InFlightRequest {
    fn drop(&mut self) {
        self.abort.abort();
    }
}

fn clear_notices(model: &mut Model) {
    model.validation_error = None;
    model.error_dismissed = false;
}

pub fn handle_file_picked(model: &mut Model, file: GlooFile) -> bool {
    if model.controller.select_file(UploadFile::from(file)) {
        clear_notices(model);
        true
    } else {
        false
    }
}

pub fn handle_drop(model: &mut Model, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    let file = event
        .data_transfer()
        .and_then(|data_transfer| data_transfer.files())
        .as_ref()
        .and_then(first_file);

    if let Some(file) = file {
        if model.controller.drop_file(UploadFile::from(file)) {
            clear_notices(model);
        }
    }

    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    match model.controller.submit() {
        Ok(submission) => {
            clear_notices(model);
            model.in_flight = Some(send_prediction_request(
                ctx,
                &model.config,
                submission.id,
                submission.file,
            ));
            true
        }
        Err(e) if e.is_user_facing() => {
            model.validation_error = Some(e.to_string());
            model.error_dismissed = false;
            true
        }
        Err(e) => {
            log::debug!("Submit ignored: {}", e);
            false
        }
    }
}

pub fn handle_prediction_resolved(
    model: &mut Model,
    id: RequestId,
    outcome: Result<PredictionResponse, PredictError>,
) -> bool {
    if !model.controller.resolve(id, outcome) {
        return false;
    }

    if model.in_flight.as_ref().map(InFlightRequest::id) == Some(id) {
        model.in_flight = None;
    }
    if model.controller.phase() == Phase::Failed {
        model.error_dismissed = false;
    }
    true
}

pub fn handle_reset(model: &mut Model) -> bool {
    model.in_flight = None;
    model.controller.reset();
    clear_notices(model);
    model.is_dragging = false;
    true
}

pub fn handle_health_checked(model: &mut Model, result: Result<HealthStatus, PredictError>) -> bool {
    model.health = match result {
        Ok(status) => {
            log::info!(
                "Classification service is up (status: {}, model loaded: {})",
                status.status,
                status.model_loaded
            );
            ServiceHealth::Online {
                model_loaded: status.model_loaded,
            }
        }
        Err(e) => {
            log::warn!("Classification service health check failed: {}", e);
            ServiceHealth::Offline
        }
    };
    true
}

pub fn send_prediction_request(
    ctx: &Context<Model>,
    config: &ClientConfig,
    id: RequestId,
    file: UploadFile,
) -> InFlightRequest {
    let (abort, registration) = AbortHandle::new_pair();
    let link = ctx.link().clone();
    let url = config.predict_url().to_string();

    spawn_local(async move {
        let request = Abortable::new(api::predict_image(&url, file.as_file()), registration);
        match request.await {
            Ok(outcome) => link.send_message(Msg::PredictionResolved(id, outcome)),
            Err(_) => log::info!("Prediction request {} aborted", id),
        }
    });

    InFlightRequest { id, abort }
}

pub fn send_health_check(ctx: &Context<Model>, config: &ClientConfig) {
    let link = ctx.link().clone();
    let url = config.health_url().to_string();

    spawn_local(async move {
        let result = api::check_health(&url).await;
        link.send_message(Msg::HealthChecked(result));
    });
}
