use crate::{
    domain::{
        common::{NutrilensConfig, entities::app_errors::CoreError, services::Service},
        reference_data::services::ReferenceDataStore,
    },
    infrastructure::{
        detection::HttpFoodDetector, reference_data::CsvReferenceSource,
        storage::LocalImageStorage,
    },
};

pub type NutrilensService = Service<CsvReferenceSource, HttpFoodDetector, LocalImageStorage>;

/// Builds the service. Reference data is loaded before this returns, so a
/// missing or unreadable table stops startup.
pub async fn create_service(config: NutrilensConfig) -> Result<NutrilensService, CoreError> {
    let reference_source = CsvReferenceSource::new(config.reference_data);
    let reference_data = ReferenceDataStore::load(&reference_source)?;

    let food_detector = HttpFoodDetector::new(config.detector)?;
    let image_storage = LocalImageStorage::new(config.storage).await?;

    Ok(Service::new(
        reference_source,
        reference_data,
        food_detector,
        image_storage,
    ))
}
