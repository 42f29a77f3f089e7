use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError,
    meal::{
        entities::{Detection, MealAnalysis, MealResolution},
        value_objects::UploadMealInput,
    },
    storage::{entities::StoredImage, value_objects::ImageFileName},
};

/// Object detection model reached as an external collaborator.
///
/// Implementations return only detections that cleared their confidence
/// threshold and map to a known dish, in model output order.
#[cfg_attr(test, mockall::automock)]
pub trait FoodDetector: Send + Sync + 'static {
    fn detect(
        &self,
        file_name: ImageFileName,
        image: Bytes,
    ) -> impl Future<Output = Result<Vec<Detection>, CoreError>> + Send;
}

pub trait MealService: Send + Sync {
    /// Stores the image, runs detection and resolves the dish ingredients.
    /// Fails with `NoFoodDetected` when the detector finds nothing.
    fn analyze_meal(
        &self,
        input: UploadMealInput,
    ) -> impl Future<Output = Result<MealAnalysis, CoreError>> + Send;

    fn resolve_meal(&self, detections: &[Detection]) -> MealResolution;

    fn read_upload(
        &self,
        file_name: String,
    ) -> impl Future<Output = Result<StoredImage, CoreError>> + Send;
}
