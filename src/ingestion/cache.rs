use crate::{
    error::{Error, Result},
    structures::Ingestor,
};

#[derive(Debug)]
pub enum SourceLocation {
    Local(String),
    Remote(String),
    Unknown(String),
}

/// Resolves an ingestor's url to a file on disk.
///
/// Map data has to be fetched beforehand; remote sources are rejected.
pub fn resolve_path(input: &Ingestor) -> Result<String> {
    match input.location() {
        SourceLocation::Local(path) => Ok(path),
        SourceLocation::Remote(url) => Err(Error::UnsupportedSource(format!(
            "{url} (download it and use a path: url)"
        ))),
        SourceLocation::Unknown(url) => Err(Error::UnsupportedSource(format!(
            "unknown url scheme for '{}': {url}",
            input.label()
        ))),
    }
}
