pub mod http_detector;

pub use http_detector::HttpFoodDetector;

use crate::domain::meal::entities::Detection;

/// Class names of the bundled dish detection model, indexed by class id.
pub const DEFAULT_DISH_CLASSES: [&str; 10] = [
    "Biryani", "Burger", "Dhokla", "Donut", "Gravy", "Idli", "Jalebi", "Roll", "Roti", "Kulfi",
];

pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.3;

/// Raw model output for one bounding box.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct RawDetection {
    pub class_id: usize,
    pub confidence: f64,
}

/// Drops boxes under the confidence threshold or with an unknown class id and
/// names the rest. Model output order is kept.
pub fn filter_detections(
    raw: &[RawDetection],
    dish_classes: &[String],
    confidence_threshold: f64,
) -> Vec<Detection> {
    raw.iter()
        .filter(|detection| detection.confidence >= confidence_threshold)
        .filter_map(|detection| {
            dish_classes
                .get(detection.class_id)
                .map(|name| Detection::new(name.clone(), detection.confidence))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes() -> Vec<String> {
        DEFAULT_DISH_CLASSES.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_filter_detections() {
        let raw = vec![
            RawDetection {
                class_id: 8,
                confidence: 0.91,
            },
            RawDetection {
                class_id: 0,
                confidence: 0.29,
            },
            RawDetection {
                class_id: 42,
                confidence: 0.99,
            },
            RawDetection {
                class_id: 0,
                confidence: 0.3,
            },
        ];

        let detections = filter_detections(&raw, &classes(), DEFAULT_CONFIDENCE_THRESHOLD);

        assert_eq!(
            detections,
            vec![Detection::new("Roti", 0.91), Detection::new("Biryani", 0.3)]
        );
    }
}
