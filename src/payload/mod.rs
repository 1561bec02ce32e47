pub mod builder;
pub mod payload_model;
