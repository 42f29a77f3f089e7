use std::sync::Arc;

use crate::domain::{
    meal::ports::FoodDetector,
    reference_data::{
        ports::ReferenceSource,
        services::{ReferenceDataHandle, ReferenceDataStore},
    },
    storage::ports::ImageStoragePort,
};

/// Application service wiring the reference tables to the detector and the
/// upload storage. Cloning is cheap; all collaborators are shared.
pub struct Service<RS, D, IS>
where
    RS: ReferenceSource,
    D: FoodDetector,
    IS: ImageStoragePort,
{
    pub(crate) reference_source: Arc<RS>,
    pub(crate) reference_data: Arc<ReferenceDataHandle>,
    pub(crate) food_detector: Arc<D>,
    pub(crate) image_storage: Arc<IS>,
}

impl<RS, D, IS> Service<RS, D, IS>
where
    RS: ReferenceSource,
    D: FoodDetector,
    IS: ImageStoragePort,
{
    pub fn new(
        reference_source: RS,
        reference_data: ReferenceDataStore,
        food_detector: D,
        image_storage: IS,
    ) -> Self {
        Self {
            reference_source: Arc::new(reference_source),
            reference_data: Arc::new(ReferenceDataHandle::new(reference_data)),
            food_detector: Arc::new(food_detector),
            image_storage: Arc::new(image_storage),
        }
    }

    pub fn reference_data(&self) -> Arc<ReferenceDataStore> {
        self.reference_data.snapshot()
    }
}

impl<RS, D, IS> Clone for Service<RS, D, IS>
where
    RS: ReferenceSource,
    D: FoodDetector,
    IS: ImageStoragePort,
{
    fn clone(&self) -> Self {
        Self {
            reference_source: Arc::clone(&self.reference_source),
            reference_data: Arc::clone(&self.reference_data),
            food_detector: Arc::clone(&self.food_detector),
            image_storage: Arc::clone(&self.image_storage),
        }
    }
}
