pub mod health;
pub mod meal;
pub mod nutrition;
pub mod reference_data;
pub mod server;
