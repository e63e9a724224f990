pub mod backend;
pub mod market_data;
