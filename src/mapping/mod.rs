pub mod capture;
pub mod evaluator;
pub mod mapping_model;
pub mod preview;
