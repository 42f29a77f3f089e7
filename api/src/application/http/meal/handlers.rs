pub mod get_upload;
pub mod upload_meal;
