use crate::extensions::path_ext::FileName;
use crate::models::DeviceConfigurationKind;
use crate::serialization::DeserializationError;
use crate::serialization::json::deserialize_json;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// A device configuration decoded from one payload file.
#[derive(Debug)]
pub struct Payload {
    pub path: PathBuf,
    pub configuration: DeviceConfigurationKind,
}

impl Payload {
    pub fn file_name(&self) -> &str {
        self.path.string_file_name()
    }
}

#[instrument]
pub fn load_payloads_from(directory: &str, extension: &str) -> Result<Vec<Payload>, LoaderError> {
    info!("📁 Loading payloads...");
    let mut files = list_files(directory, extension).map_err(|e| LoaderError::Io { source: e, path: None })?;
    files.sort();

    let results = load_files(files);
    let (payloads, errors): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);

    for error in errors.iter().filter_map(|res| res.as_ref().err()) {
        log_error(error);
    }

    info!("📁 Loading payloads... OK, {} loaded, {} failed", payloads.len(), errors.len());
    Ok(payloads.into_iter().filter_map(Result::ok).collect())
}

#[instrument]
fn list_files(directory: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in fs::read_dir(directory)? {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
                    files.push(path);
                }
            }
            Err(err) => warn!("⚠️ Unable to read directory entry: {}", err),
        }
    }

    Ok(files)
}

#[instrument(skip_all)]
fn load_files(paths: Vec<PathBuf>) -> Vec<Result<Payload, LoaderError>> {
    paths.into_iter().map(load_file).collect()
}

fn load_file(path: PathBuf) -> Result<Payload, LoaderError> {
    let content = match fs::read(&path) {
        Ok(content) => content,
        Err(err) => {
            return Err(LoaderError::Io {
                source: err,
                path: Some(path),
            });
        }
    };

    match deserialize_json(&content, DeviceConfigurationKind::create_from_discriminator_value) {
        Ok(Some(configuration)) => Ok(Payload { path, configuration }),
        Ok(None) => Err(LoaderError::Empty { path }),
        Err(err) => Err(LoaderError::Decode { source: err, path }),
    }
}

#[instrument(skip_all)]
fn log_error(error: &LoaderError) {
    match error {
        LoaderError::Decode { source, path } => warn!("⚠️ Failed to load '{}': {}", path.string_file_name(), source),
        LoaderError::Empty { path } => warn!("⚠️ Failed to load '{}': document is null", path.string_file_name()),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to load '{}': {}", path.string_file_name(), source),
            None => warn!("⚠️ {}", source),
        },
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    Decode { source: DeserializationError, path: PathBuf },
    #[error("document is null")]
    Empty { path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
}
