// ABOUTME: Error types for the json-slides pipeline
// ABOUTME: One root cause per failure, with slide and field context where it applies

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Side of a two-column slide, used to attribute content errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Left,
    Right,
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Left => f.write_str("left"),
            Column::Right => f.write_str("right"),
        }
    }
}

/// Rejection raised by a layout while validating slide data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("slide content must be an object")]
    NotAnObject,

    #[error("slide needs a valid title")]
    MissingTitle,

    #[error("{field} must be text")]
    InvalidText { field: &'static str },

    #[error("the {0} column is required")]
    MissingColumn(Column),

    #[error("the {0} column heading must be text")]
    InvalidHeading(Column),

    #[error("{}", bullets_not_array(.0))]
    BulletsNotArray(Option<Column>),

    #[error("{}", bullet_not_text(.column, .index))]
    BulletNotText {
        column: Option<Column>,
        index: usize,
    },
}

fn bullets_not_array(column: &Option<Column>) -> String {
    match column {
        Some(column) => format!("the {} column bullets must be an array", column),
        None => "bullets must be an array".to_string(),
    }
}

fn bullet_not_text(column: &Option<Column>, index: &usize) -> String {
    match column {
        Some(column) => format!("bullet {} of the {} column must be text", index, column),
        None => format!("bullet {} must be text", index),
    }
}

#[derive(Error, Debug)]
pub enum SlideError {
    #[error("The input is not valid JSON, check the syntax: {0}")]
    MalformedInput(#[from] serde_json::Error),

    #[error("The presentation metadata is missing")]
    MissingMetadata,

    #[error("The presentation metadata is malformed: {0}")]
    MalformedMetadata(String),

    #[error("The slides must be an array")]
    MalformedSlideList,

    #[error("Slide at position {position} is malformed: {reason}")]
    MalformedSlide { position: usize, reason: String },

    #[error("Slide {slide_id}: layout type \"{tag}\" does not exist")]
    UnknownLayoutType { slide_id: i64, tag: String },

    #[error("Slide {slide_id}: {source}")]
    InvalidContent {
        slide_id: i64,
        #[source]
        source: ContentError,
    },

    #[error("Layout type \"{0}\" is registered more than once")]
    DuplicateLayoutType(String),

    #[error("Unexpected error: {0}")]
    Internal(String),

    #[error("No presentation has been generated yet. Process a manifest first.")]
    NoPresentationAvailable,

    #[error("Failed to read file: {0}")]
    FileReadError(#[from] std::io::Error),

    #[error("Path not found: {0}")]
    PathNotFoundError(PathBuf),

    #[error("Invalid resource path: {0}")]
    InvalidResourcePath(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl SlideError {
    /// Stable machine-readable code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            SlideError::MalformedInput(_) => ErrorCode::InvalidJson,
            SlideError::MissingMetadata
            | SlideError::MalformedMetadata(_)
            | SlideError::MalformedSlideList
            | SlideError::MalformedSlide { .. } => ErrorCode::MissingData,
            SlideError::UnknownLayoutType { .. } => ErrorCode::UnknownLayout,
            SlideError::InvalidContent { .. } => ErrorCode::InvalidContent,
            SlideError::DuplicateLayoutType(_) | SlideError::ConfigError(_) => {
                ErrorCode::ConfigError
            }
            SlideError::Internal(_) => ErrorCode::InternalError,
            SlideError::NoPresentationAvailable => ErrorCode::NoPresentation,
            SlideError::FileReadError(_)
            | SlideError::PathNotFoundError(_)
            | SlideError::InvalidResourcePath(_) => ErrorCode::IoError,
        }
    }

    /// Id of the slide this error is attributed to, if any.
    pub fn slide_id(&self) -> Option<i64> {
        match self {
            SlideError::UnknownLayoutType { slide_id, .. }
            | SlideError::InvalidContent { slide_id, .. } => Some(*slide_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidJson,
    MissingData,
    UnknownLayout,
    InvalidContent,
    InternalError,
    NoPresentation,
    IoError,
    ConfigError,
}

/// Serializable snapshot of a failure, suitable for handing to a host UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorReport {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slide_id: Option<i64>,
    pub timestamp: String,
}

impl From<&SlideError> for ErrorReport {
    fn from(err: &SlideError) -> Self {
        Self {
            code: err.code(),
            message: err.to_string(),
            slide_id: err.slide_id(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SlideError>;
