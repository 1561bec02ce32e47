pub mod request;
pub mod sender;
pub mod template;
pub mod webhook_model;
