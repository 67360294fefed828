//! Error types for the document helpers.
//!
//! Failures raised by the wrapped XML crates (`roxmltree` while parsing,
//! `sxd-xpath` while querying) are carried through unchanged so callers can
//! inspect the underlying error.

use thiserror::Error;

/// Main error type for the library.
#[derive(Debug, Error)]
pub enum XmlUtilError {
    /// Input bytes were not valid UTF-8.
    #[error("Only valid UTF-8 data is supported: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    /// Input contained no markup at all.
    #[error("Resulting document is empty")]
    EmptyDocument,

    /// Input parsed but produced no root element.
    #[error("Root node is empty")]
    EmptyRoot,

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Path expression could not be compiled or evaluated.
    #[error("XPath query failed: {0}")]
    Query(#[from] sxd_xpath::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for document operations.
pub type Result<T> = std::result::Result<T, XmlUtilError>;
