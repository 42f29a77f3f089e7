use chrono::Local;
use tracing::{error, info, instrument, warn};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    meal::{
        entities::{Detection, MealAnalysis, MealResolution},
        helpers::resolve_ingredients,
        ports::{FoodDetector, MealService},
        value_objects::UploadMealInput,
    },
    reference_data::ports::ReferenceSource,
    storage::{entities::StoredImage, ports::ImageStoragePort, value_objects::ImageFileName},
};

/// Prefix that keeps repeated uploads of the same file name apart.
fn upload_prefix() -> String {
    Local::now().format("%Y%m%d%H%M%S_").to_string()
}

impl<RS, D, IS> MealService for Service<RS, D, IS>
where
    RS: ReferenceSource,
    D: FoodDetector,
    IS: ImageStoragePort,
{
    #[instrument(skip(self, input), fields(file_name = %input.file_name, size = input.data.len()))]
    async fn analyze_meal(&self, input: UploadMealInput) -> Result<MealAnalysis, CoreError> {
        let file_name = ImageFileName::parse(&input.file_name)?;
        let stored_name = file_name.with_prefix(&upload_prefix());

        let image_file = self
            .image_storage
            .save_image(stored_name.clone(), input.data.clone())
            .await?;

        // A failing detector is reported to the user like an empty result.
        let detections = self
            .food_detector
            .detect(stored_name, input.data)
            .await
            .unwrap_or_else(|e| {
                error!(error = %e, "Food detection failed");
                Vec::new()
            });

        let resolution = self.resolve_meal(&detections);
        let Some(primary) = resolution.primary else {
            warn!(image_file = %image_file, "No food detected");
            return Err(CoreError::NoFoodDetected { image_file });
        };

        info!(
            dish = %primary.dish_name,
            confidence = primary.confidence,
            all_dishes = %resolution.all_dishes,
            "Meal analyzed"
        );

        Ok(MealAnalysis {
            dish: primary.dish_name,
            all_dishes: resolution.all_dishes,
            image_file,
            defaults: resolution.main_ingredients,
            additionals: resolution.additional_ingredients,
            confidence: primary.confidence,
            suggestions: Vec::new(),
        })
    }

    fn resolve_meal(&self, detections: &[Detection]) -> MealResolution {
        let reference_data = self.reference_data.snapshot();
        resolve_ingredients(detections, &reference_data.dishes)
    }

    async fn read_upload(&self, file_name: String) -> Result<StoredImage, CoreError> {
        let file_name = ImageFileName::parse_stored(&file_name)?;
        let data = self.image_storage.read_image(file_name.clone()).await?;

        Ok(StoredImage {
            content_type: file_name.content_type(),
            data,
        })
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::*;
    use crate::domain::{
        meal::ports::MockFoodDetector,
        reference_data::{
            ports::MockReferenceSource,
            services::{DishCatalog, NutritionTable, ReferenceDataStore},
            value_objects::DishIngredientRow,
        },
        storage::ports::MockImageStoragePort,
    };

    const IMAGE: &[u8] = b"\x89PNG fake image";

    fn reference_data() -> ReferenceDataStore {
        let rows = vec![
            DishIngredientRow {
                food_name: "Burger".to_string(),
                ingredient_name: "Bun".to_string(),
                ingredient_type: "main".to_string(),
                std_quantity: "60".to_string(),
                std_unit: "g".to_string(),
            },
            DishIngredientRow {
                food_name: String::new(),
                ingredient_name: "Cheese".to_string(),
                ingredient_type: "additional".to_string(),
                std_quantity: "20".to_string(),
                std_unit: "g".to_string(),
            },
        ];
        ReferenceDataStore::new(DishCatalog::from_rows(rows), NutritionTable::default())
    }

    fn detector(result: Result<Vec<Detection>, CoreError>) -> MockFoodDetector {
        let mut detector = MockFoodDetector::new();
        detector
            .expect_detect()
            .times(1)
            .returning(move |_, _| {
                let result = result.clone();
                Box::pin(async move { result })
            });
        detector
    }

    fn saving_storage() -> MockImageStoragePort {
        let mut storage = MockImageStoragePort::new();
        storage
            .expect_save_image()
            .times(1)
            .withf(|_, payload| *payload == Bytes::from_static(IMAGE))
            .returning(|file_name, _| Box::pin(async move { Ok(file_name.to_string()) }));
        storage
    }

    fn service(
        detector: MockFoodDetector,
        storage: MockImageStoragePort,
    ) -> Service<MockReferenceSource, MockFoodDetector, MockImageStoragePort> {
        Service::new(MockReferenceSource::new(), reference_data(), detector, storage)
    }

    fn upload(file_name: &str) -> UploadMealInput {
        UploadMealInput {
            file_name: file_name.to_string(),
            data: Bytes::from_static(IMAGE),
        }
    }

    #[tokio::test]
    async fn test_analyze_meal_resolves_ingredients() {
        let service = service(
            detector(Ok(vec![
                Detection::new("Burger", 0.45),
                Detection::new("Donut", 0.82),
            ])),
            saving_storage(),
        );

        let analysis = service.analyze_meal(upload("lunch.png")).await.unwrap();

        assert_eq!(analysis.dish, "Donut");
        assert_eq!(analysis.confidence, 0.82);
        assert_eq!(analysis.all_dishes, "Burger, Donut");
        assert_eq!(analysis.defaults.len(), 1);
        assert_eq!(analysis.defaults[0].name, "Bun");
        assert_eq!(analysis.defaults[0].grams, 60.0);
        assert_eq!(analysis.additionals[0].grams, 0.0);
        assert!(analysis.suggestions.is_empty());
        assert!(analysis.image_file.ends_with("_lunch.png"));
    }

    #[tokio::test]
    async fn test_analyze_meal_without_detections_is_rejected() {
        let service = service(detector(Ok(Vec::new())), saving_storage());

        let result = service.analyze_meal(upload("empty plate.jpg")).await;

        match result {
            Err(CoreError::NoFoodDetected { image_file }) => {
                assert!(image_file.ends_with("_empty_plate.jpg"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_detector_failure_is_treated_as_no_detection() {
        let service = service(
            detector(Err(CoreError::ExternalServiceError(
                "model offline".to_string(),
            ))),
            saving_storage(),
        );

        let result = service.analyze_meal(upload("roti.jpeg")).await;

        assert!(matches!(result, Err(CoreError::NoFoodDetected { .. })));
    }

    #[tokio::test]
    async fn test_unsupported_file_is_rejected_before_any_io() {
        let mut detector = MockFoodDetector::new();
        detector.expect_detect().times(0);
        let mut storage = MockImageStoragePort::new();
        storage.expect_save_image().times(0);
        let service = service(detector, storage);

        let result = service.analyze_meal(upload("menu.pdf")).await;

        assert_eq!(result, Err(CoreError::UnsupportedImageType));
    }

    #[tokio::test]
    async fn test_read_upload_returns_bytes_and_content_type() {
        let mut storage = MockImageStoragePort::new();
        storage
            .expect_read_image()
            .times(1)
            .withf(|file_name| file_name.as_str() == "20250101120000_lunch.png")
            .returning(|_| Box::pin(async { Ok(Bytes::from_static(IMAGE)) }));
        let service = service(MockFoodDetector::new(), storage);

        let stored = service
            .read_upload("20250101120000_lunch.png".to_string())
            .await
            .unwrap();

        assert_eq!(stored.content_type, "image/png");
        assert_eq!(stored.data, Bytes::from_static(IMAGE));
    }

    #[tokio::test]
    async fn test_read_upload_rejects_traversal() {
        let mut storage = MockImageStoragePort::new();
        storage.expect_read_image().times(0);
        let service = service(MockFoodDetector::new(), storage);

        let result = service.read_upload("../Cargo.toml".to_string()).await;

        assert_eq!(result, Err(CoreError::NotFound));
    }
}
