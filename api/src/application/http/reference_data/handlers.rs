pub mod reload_reference_data;
