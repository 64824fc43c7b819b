use thiserror::Error;

/// Fallos al descargar el banco de preguntas.
#[derive(Debug, Error)]
pub enum FetchError {
    #[cfg(not(target_arch = "wasm32"))]
    #[error("error conectando con el servidor de preguntas: {0}")]
    Http(#[from] reqwest::Error),

    #[error("el servidor de preguntas devolvió HTTP {0}")]
    Status(u16),

    #[error("respuesta JSON inválida: {0}")]
    Parse(#[from] serde_json::Error),

    #[cfg(target_arch = "wasm32")]
    #[error("fetch falló en el navegador: {0}")]
    Js(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuración YAML inválida: {0}")]
    Parse(#[from] serde_yaml::Error),
}
