use base64::{Engine as _, engine::general_purpose};
use bytes::Bytes;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    domain::{
        common::{DetectorConfig, entities::app_errors::CoreError},
        meal::{entities::Detection, ports::FoodDetector},
        storage::value_objects::ImageFileName,
    },
    infrastructure::detection::{RawDetection, filter_detections},
};

/// Client for an object detection inference service.
///
/// The service receives `{"image": <base64>, "filename": ...}` and answers
/// `{"detections": [{"class_id": 0, "confidence": 0.87}, ...]}`.
#[derive(Debug, Clone)]
pub struct HttpFoodDetector {
    endpoint: String,
    confidence_threshold: f64,
    dish_classes: Vec<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct DetectionRequest {
    image: String,
    filename: String,
}

#[derive(Debug, Deserialize)]
struct DetectionResponse {
    #[serde(default)]
    detections: Vec<RawDetection>,
}

impl HttpFoodDetector {
    pub fn new(config: DetectorConfig) -> Result<Self, CoreError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build detector HTTP client: {}", e);
                CoreError::ExternalServiceError(format!("Detector client error: {}", e))
            })?;

        tracing::info!(
            endpoint = %config.endpoint,
            confidence_threshold = config.confidence_threshold,
            classes = config.dish_classes.len(),
            "Initializing food detector client"
        );

        Ok(Self {
            endpoint: config.endpoint,
            confidence_threshold: config.confidence_threshold,
            dish_classes: config.dish_classes,
            client,
        })
    }

    async fn call_detector(&self, request: DetectionRequest) -> Result<Vec<RawDetection>, CoreError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Detector request failed: {}", e);
                CoreError::ExternalServiceError(format!("Detector error: {}", e))
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Detector error: {} - {}", status, error_text);
            return Err(CoreError::ExternalServiceError(format!(
                "Detector returned error: {} - {}",
                status, error_text
            )));
        }

        let detection_response: DetectionResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse detector response: {}", e);
            CoreError::ExternalServiceError(format!("Failed to parse detector response: {}", e))
        })?;

        Ok(detection_response.detections)
    }
}

impl FoodDetector for HttpFoodDetector {
    #[instrument(skip(self, image), fields(size = image.len()))]
    async fn detect(
        &self,
        file_name: ImageFileName,
        image: Bytes,
    ) -> Result<Vec<Detection>, CoreError> {
        let request = DetectionRequest {
            image: general_purpose::STANDARD.encode(&image),
            filename: file_name.to_string(),
        };

        let raw = self.call_detector(request).await?;
        let detections = filter_detections(&raw, &self.dish_classes, self.confidence_threshold);

        tracing::debug!(
            raw = raw.len(),
            kept = detections.len(),
            "Detector response filtered"
        );

        Ok(detections)
    }
}
