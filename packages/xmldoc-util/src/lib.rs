//! xmldoc-util - Convenience layer over an owned XML DOM.
//!
//! This crate wraps a mutable XML tree in [`EasyDocument`], a document that
//! always has a root element, and adds helpers for the chores that come up
//! around it: building documents from maps, copying subtrees between
//! documents, evaluating path queries and dispatching child elements to
//! handlers by tag name.
//!
//! # Example
//!
//! ```
//! use xmldoc_util::xml::{get_number, StringMap};
//! use xmldoc_util::EasyDocument;
//!
//! let mut data = StringMap::new();
//! data.insert("port".to_string(), "8080".to_string());
//!
//! let doc = EasyDocument::from_string_map(&data, "server");
//! assert_eq!(get_number::<u16, _>(doc.root(), "port").unwrap(), 8080);
//! ```
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`config`]: Defaults and parse options
//! - [`error`]: Error types and Result alias
//! - [`document`]: The [`EasyDocument`] wrapper
//! - [`xml`]: Navigation, import, map fillers and path queries
//! - [`serial`]: Compact and indented serialization
//! - [`registry`]: Tag-name dispatch of child elements

pub mod config;
pub mod document;
pub mod error;
pub mod registry;
pub mod serial;
pub mod xml;

// Re-export commonly used items
pub use document::EasyDocument;
pub use error::{Result, XmlUtilError};
pub use registry::{map_node, CallbackMap, NodeHandler};
