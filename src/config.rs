// src/config.rs

use crate::error::ConfigError;
use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "https://quiz-36de.onrender.com/questions";
pub const SECS_PER_QUESTION: u32 = 30;

#[cfg(not(target_arch = "wasm32"))]
const ENDPOINT_ENV: &str = "TIMED_QUIZ_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuizConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_seconds_per_question")]
    pub seconds_per_question: u32,
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_seconds_per_question() -> u32 {
    SECS_PER_QUESTION
}

fn default_window_title() -> String {
    "Timed Quiz".to_string()
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            seconds_per_question: default_seconds_per_question(),
            window_title: default_window_title(),
        }
    }
}

impl QuizConfig {
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Carga la configuración embebida y aplica los overrides del entorno.
    pub fn load() -> Self {
        let file_content = include_str!("data/quiz_config.yaml");
        let mut config = match Self::from_yaml(file_content) {
            Ok(c) => c,
            Err(err) => {
                log::warn!("{err}; usando valores por defecto");
                Self::default()
            }
        };

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(endpoint) = std::env::var(ENDPOINT_ENV)
            .ok()
            .filter(|s| !s.trim().is_empty())
        {
            log::info!("endpoint de preguntas sobrescrito por {ENDPOINT_ENV}: {endpoint}");
            config.endpoint = endpoint.trim().to_string();
        }

        config
    }
}
