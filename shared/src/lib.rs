use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod config;
pub mod copy;
pub mod controller;
pub mod error;
pub mod session;
pub mod view;

pub use config::ClientConfig;
pub use controller::{Controller, RequestId, Submission};
pub use error::{ConfigError, PredictError, SubmitError, GENERIC_FAILURE_MESSAGE};
pub use session::{is_droppable_image, Phase, PreviewSource, Session, StagedImage};
pub use view::{ProbabilityRow, ResultView, Verdict};

/// Class code the service returns for the disease-positive class.
pub const POSITIVE_CLASS: &str = "Lep";

#[derive(Debug, Clone, PartialEq)]
pub struct ClassProbability {
    pub label: String,
    pub value: f64,
}

/// Successful `/predict` payload. `probabilities` keeps the key order of
/// the service JSON and is never renormalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawPrediction", into = "RawPrediction")]
pub struct PredictionResponse {
    pub predicted_class: String,
    pub probabilities: Vec<ClassProbability>,
}

#[derive(Serialize, Deserialize)]
struct RawPrediction {
    predicted_class: String,
    probabilities: Map<String, Value>,
}

impl TryFrom<RawPrediction> for PredictionResponse {
    type Error = String;

    fn try_from(raw: RawPrediction) -> Result<Self, Self::Error> {
        let probabilities = raw
            .probabilities
            .into_iter()
            .map(|(label, value)| match value.as_f64() {
                Some(value) => Ok(ClassProbability { label, value }),
                None => Err(format!("probability for `{}` is not a number: {}", label, value)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            predicted_class: raw.predicted_class,
            probabilities,
        })
    }
}

impl From<PredictionResponse> for RawPrediction {
    fn from(response: PredictionResponse) -> Self {
        let probabilities = response
            .probabilities
            .into_iter()
            .map(|p| (p.label, Value::from(p.value)))
            .collect();

        Self {
            predicted_class: response.predicted_class,
            probabilities,
        }
    }
}

impl PredictionResponse {
    /// Parses a 2xx body. A body missing `predicted_class` or
    /// `probabilities` is reported as a malformed response.
    pub fn from_json(body: &str) -> Result<Self, PredictError> {
        serde_json::from_str(body).map_err(|e| PredictError::MalformedResponse(e.to_string()))
    }
}

/// Error payload the service attaches to failed requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extracts a usable service message from an error body, if any.
    pub fn message_from(body: &str) -> Option<String> {
        serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .filter(|msg| !msg.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub model_loaded: bool,
}

impl HealthStatus {
    /// Any 2xx body counts as alive; fields are read best-effort.
    pub fn from_json(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_service_key_order() {
        let body = r#"{"predicted_class":"Non-Lep","probabilities":{"Non-Lep":0.6,"Lep":0.4}}"#;
        let response = PredictionResponse::from_json(body).unwrap();

        let labels: Vec<_> = response.probabilities.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Non-Lep", "Lep"]);
        assert_eq!(response.predicted_class, "Non-Lep");
        assert_eq!(response.probabilities[1].value, 0.4);
    }

    #[test]
    fn does_not_renormalize_probabilities() {
        let body = r#"{"predicted_class":"Lep","probabilities":{"Lep":0.9,"Non-Lep":0.3}}"#;
        let response = PredictionResponse::from_json(body).unwrap();
        let total: f64 = response.probabilities.iter().map(|p| p.value).sum();
        assert!((total - 1.2).abs() < 1e-9);
    }

    #[test]
    fn missing_fields_are_malformed() {
        for body in [
            r#"{"probabilities":{"Lep":1.0}}"#,
            r#"{"predicted_class":"Lep"}"#,
            r#"{"predicted_class":null,"probabilities":{}}"#,
            "not json",
        ] {
            let err = PredictionResponse::from_json(body).unwrap_err();
            assert!(matches!(err, PredictError::MalformedResponse(_)), "{body}");
        }
    }

    #[test]
    fn non_numeric_probability_is_malformed() {
        let body = r#"{"predicted_class":"Lep","probabilities":{"Lep":"high"}}"#;
        let err = PredictionResponse::from_json(body).unwrap_err();
        match err {
            PredictError::MalformedResponse(msg) => assert!(msg.contains("Lep"), "{msg}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn serializes_back_to_service_shape() {
        let body = r#"{"predicted_class":"Lep","probabilities":{"Lep":0.87,"Non-Lep":0.13}}"#;
        let response = PredictionResponse::from_json(body).unwrap();
        assert_eq!(serde_json::to_string(&response).unwrap(), body);
    }

    #[test]
    fn error_body_message() {
        assert_eq!(
            ErrorBody::message_from(r#"{"error":"file too large"}"#).as_deref(),
            Some("file too large")
        );
        assert_eq!(ErrorBody::message_from(r#"{"error":""}"#), None);
        assert_eq!(ErrorBody::message_from(r#"{"detail":"nope"}"#), None);
        assert_eq!(ErrorBody::message_from("<html>502</html>"), None);
    }

    #[test]
    fn health_status_is_best_effort() {
        let status = HealthStatus::from_json(r#"{"status":"healthy","model_loaded":true,"x":1}"#);
        assert_eq!(status.status, "healthy");
        assert!(status.model_loaded);

        assert_eq!(HealthStatus::from_json("ok"), HealthStatus::default());
    }
}
