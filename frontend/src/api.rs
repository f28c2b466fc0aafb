use gloo_file::File as GlooFile;
use gloo_net::http::{Request, Response};
use shared::{HealthStatus, PredictError, PredictionResponse};
use wasm_bindgen::JsValue;
use web_sys::FormData;

fn network_error(err: gloo_net::Error) -> PredictError {
    PredictError::Network(err.to_string())
}

fn js_error(err: JsValue) -> PredictError {
    PredictError::Network(format!("{:?}", err))
}

/// Reads the body and turns a non-2xx status into a service error.
async fn read_body(response: Response) -> Result<String, PredictError> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;

    if response.ok() {
        Ok(body)
    } else {
        log::error!("Server error: {} - {}", status, body);
        Err(PredictError::from_status(status, &body))
    }
}

/// `POST /predict` with the image in the multipart field `file`.
pub async fn predict_image(url: &str, file: &GlooFile) -> Result<PredictionResponse, PredictError> {
    let form_data = FormData::new().map_err(js_error)?;
    form_data
        .append_with_blob_and_filename("file", file.as_ref(), &file.name())
        .map_err(js_error)?;

    log::info!("Uploading {} ({} bytes) to {}", file.name(), file.size(), url);
    let response = Request::post(url)
        .body(form_data)
        .map_err(network_error)?
        .send()
        .await
        .map_err(|e| {
            log::error!("Network error: {}", e);
            network_error(e)
        })?;

    let body = read_body(response).await?;
    PredictionResponse::from_json(&body).inspect_err(|e| log::error!("{}", e))
}

pub async fn check_health(url: &str) -> Result<HealthStatus, PredictError> {
    let response = Request::get(url).send().await.map_err(network_error)?;
    let body = read_body(response).await?;
    Ok(HealthStatus::from_json(&body))
}
