pub mod detection;
pub mod reference_data;
pub mod storage;
