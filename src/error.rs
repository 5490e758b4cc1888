use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to read PBF file: {0}")]
    Pbf(#[from] osmpbf::Error),
    #[error("Invalid config: {0}")]
    Config(#[from] serde_yml::Error),
    #[error("Graph snapshot error: {0}")]
    Persistence(#[from] postcard::Error),
    #[error("Unsupported source '{0}'")]
    UnsupportedSource(String),
}

pub type Result<T> = std::result::Result<T, Error>;
