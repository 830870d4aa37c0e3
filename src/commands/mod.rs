pub mod data;
pub mod output;
pub mod utils;
pub mod views;
