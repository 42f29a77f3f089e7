use std::{path::PathBuf, time::Duration};

use clap::{ArgAction, Args as ClapArgs, Parser};
use nutrilens_core::{
    domain::common::{DetectorConfig, NutrilensConfig, ReferenceDataConfig, StorageConfig},
    infrastructure::detection::{DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_DISH_CLASSES},
};
use url::Url;

#[derive(Debug, Clone, Parser)]
#[command(name = "nutrilens-api", version, about = "Meal photo nutrition estimation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub reference_data: ReferenceDataArgs,

    #[command(flatten)]
    pub detector: DetectorArgs,

    #[command(flatten)]
    pub storage: StorageArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 5000)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated origins, `*` allows any origin.
    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(
        long = "server-metrics-enabled",
        env = "METRICS_ENABLED",
        default_value_t = true,
        action = ArgAction::Set
    )]
    pub metrics_enabled: bool,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct ReferenceDataArgs {
    #[arg(long = "ingredients-csv", env = "INGREDIENTS_CSV", default_value = "merged_dataset.csv")]
    pub ingredients_csv: PathBuf,

    #[arg(
        long = "nutrition-csv",
        env = "NUTRITION_CSV",
        default_value = "merged_food_data_with_values.csv"
    )]
    pub nutrition_csv: PathBuf,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct DetectorArgs {
    #[arg(
        long = "detector-url",
        env = "DETECTOR_URL",
        default_value = "http://127.0.0.1:8000/detect"
    )]
    pub url: Url,

    #[arg(
        long = "detector-confidence-threshold",
        env = "DETECTOR_CONFIDENCE_THRESHOLD",
        default_value_t = DEFAULT_CONFIDENCE_THRESHOLD
    )]
    pub confidence_threshold: f64,

    #[arg(long = "detector-timeout-secs", env = "DETECTOR_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Dish names in class id order.
    #[arg(long = "dish-classes", env = "DISH_CLASSES", value_delimiter = ',')]
    pub dish_classes: Vec<String>,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct StorageArgs {
    #[arg(long = "upload-dir", env = "UPLOAD_DIR", default_value = "uploads")]
    pub upload_dir: PathBuf,
}

#[derive(Debug, Clone, ClapArgs)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for NutrilensConfig {
    fn from(args: Args) -> Self {
        let dish_classes = if args.detector.dish_classes.is_empty() {
            DEFAULT_DISH_CLASSES.iter().map(|c| c.to_string()).collect()
        } else {
            args.detector
                .dish_classes
                .iter()
                .map(|c| c.trim().to_string())
                .collect()
        };

        NutrilensConfig {
            reference_data: ReferenceDataConfig {
                ingredients_path: args.reference_data.ingredients_csv,
                nutrition_path: args.reference_data.nutrition_csv,
            },
            detector: DetectorConfig {
                endpoint: args.detector.url.to_string(),
                confidence_threshold: args.detector.confidence_threshold,
                timeout: Duration::from_secs(args.detector.timeout_secs),
                dish_classes,
            },
            storage: StorageConfig {
                upload_dir: args.storage.upload_dir,
            },
        }
    }
}
