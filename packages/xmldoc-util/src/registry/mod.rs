//! Tag-name dispatch over child elements.
//!
//! Handlers are registered in a [`CallbackMap`] under the local tag name
//! they process. [`map_node`] then walks the children of a node once and
//! hands each element to its handler.

mod core;
mod dispatch;
mod handler;

pub use self::core::CallbackMap;
pub use dispatch::map_node;
pub use handler::NodeHandler;
