use bytes::Bytes;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredImage {
    pub content_type: &'static str,
    pub data: Bytes,
}
