use bytes::Bytes;

#[derive(Debug, Clone)]
pub struct UploadMealInput {
    pub file_name: String,
    pub data: Bytes,
}
