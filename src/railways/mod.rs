//! Indian-railway tools backed by the IRCTC train-search API on RapidAPI.

pub mod api;
pub mod format;

pub use api::RailwayClient;
pub use format::validate_train_number;
