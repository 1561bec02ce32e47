pub mod binding;
pub mod layout_model;
