#![allow(dead_code)]

pub mod fixtures;
pub mod recording_sender;
