//! Fin Assist — terminal chat front end for a financial assistant backend.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod orchestrator;
pub mod presets;
pub mod profile;
pub mod ui;
