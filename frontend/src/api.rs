use flamescope_shared::{ApiConfig, FetchError, HealthStatus, ModelType, PredictionResponse};
use gloo_file::File as GlooFile;
use gloo_net::http::Request;
use web_sys::FormData;

pub fn build_form_data(file: &GlooFile, model_type: ModelType) -> Result<FormData, FetchError> {
    let form_data = FormData::new()
        .map_err(|e| FetchError::Request(format!("FormData unavailable: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename("image", file.as_ref(), &file.name())
        .map_err(|e| FetchError::Request(format!("Failed to attach image: {:?}", e)))?;
    form_data
        .append_with_str("model_type", model_type.as_ref())
        .map_err(|e| FetchError::Request(format!("Failed to attach model type: {:?}", e)))?;

    Ok(form_data)
}

/// Sends one image to the inference service. No retry, no timeout.
pub async fn predict(
    api: &ApiConfig,
    file: &GlooFile,
    model_type: ModelType,
) -> Result<PredictionResponse, FetchError> {
    let url = api.predict_url();
    let form_data = build_form_data(file, model_type)?;
    let started = js_sys::Date::now();

    let response = Request::post(&url)
        .body(form_data)
        .map_err(|e| FetchError::Request(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    log::info!(
        "POST {} ({}) answered {} after {:.0} ms",
        url,
        model_type,
        response.status(),
        js_sys::Date::now() - started
    );

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::backend(status, &body));
    }

    response
        .json::<PredictionResponse>()
        .await
        .map_err(|e| FetchError::Malformed(e.to_string()))
}

pub async fn check_health(api: &ApiConfig) -> Result<HealthStatus, FetchError> {
    let response = Request::get(&api.health_url())
        .send()
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(FetchError::backend(status, &body));
    }

    response
        .json::<HealthStatus>()
        .await
        .map_err(|e| FetchError::Malformed(e.to_string()))
}
