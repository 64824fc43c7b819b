pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod quiz;
pub mod ticker;
pub mod ui;
pub mod view_models;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::QuizApp;
