use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError, storage::value_objects::ImageFileName,
};

/// Storage for uploaded meal images.
#[cfg_attr(test, mockall::automock)]
pub trait ImageStoragePort: Send + Sync + 'static {
    /// Persists the image and returns the name it was stored under.
    fn save_image(
        &self,
        file_name: ImageFileName,
        payload: Bytes,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn read_image(
        &self,
        file_name: ImageFileName,
    ) -> impl Future<Output = Result<Bytes, CoreError>> + Send;
}
