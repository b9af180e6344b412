use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building or persisting a brain.
#[derive(Error, Debug)]
pub enum BrainError {
	#[error("Input file not found: {}", .0.display())]
	InputNotFound(PathBuf),

	#[error(
		"Unable to decode {} as Windows-1252: byte 0x{byte:02X} at offset {offset} is undefined",
		path.display()
	)]
	Decode { path: PathBuf, byte: u8, offset: usize },

	#[error("Threshold must be between 0.0 and 1.0, got {0}")]
	InvalidThreshold(f64),

	#[error("Invalid channel name: {0:?}")]
	InvalidChannel(String),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),
}

pub type BrainResult<T> = Result<T, BrainError>;
