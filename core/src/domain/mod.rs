pub mod common;
pub mod meal;
pub mod nutrition;
pub mod reference_data;
pub mod storage;
