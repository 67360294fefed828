//! Callback map from tag names to handlers.

use std::collections::{HashMap, HashSet};
use std::fmt;

use sxd_document::dom::Element;

use super::dispatch::map_node;
use super::handler::NodeHandler;

/// Registry mapping element tag names to handlers.
///
/// Handlers may borrow state from the caller for `'a`, which is how they
/// report results.
///
/// # Examples
/// ```
/// use sxd_document::dom::Element;
/// use xmldoc_util::registry::CallbackMap;
/// use xmldoc_util::xml::get_text;
/// use xmldoc_util::EasyDocument;
///
/// let doc: EasyDocument = "<user><name>Ada</name><age>36</age></user>".parse().unwrap();
///
/// let mut name = String::new();
/// let mut callbacks = CallbackMap::new();
/// callbacks.register("name", |node: Element<'_>| name = get_text(node));
/// callbacks.dispatch(doc.root(), None);
/// drop(callbacks);
///
/// assert_eq!(name, "Ada");
/// ```
#[derive(Default)]
pub struct CallbackMap<'a> {
    handlers: HashMap<String, Box<dyn NodeHandler + 'a>>,
}

impl<'a> CallbackMap<'a> {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler for a specific tag name.
    ///
    /// A later registration for the same tag replaces the earlier one.
    pub fn register(&mut self, tag_name: impl Into<String>, handler: impl NodeHandler + 'a) {
        self.handlers.insert(tag_name.into(), Box::new(handler));
    }

    /// Get the handler registered for a tag.
    pub fn get_handler_mut(&mut self, tag_name: &str) -> Option<&mut (dyn NodeHandler + 'a)> {
        self.handlers.get_mut(tag_name).map(|handler| handler.as_mut())
    }

    /// Check if a handler is registered for a tag.
    #[must_use]
    pub fn has_handler(&self, tag_name: &str) -> bool {
        self.handlers.contains_key(tag_name)
    }

    /// Return set of all registered tag names.
    #[must_use]
    pub fn registered_tags(&self) -> HashSet<&str> {
        self.handlers.keys().map(|s| s.as_str()).collect()
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Route each child element of `node` to its handler.
    ///
    /// See [`map_node`].
    pub fn dispatch(&mut self, node: Element<'_>, on_unknown: Option<&mut dyn FnMut(&str)>) {
        map_node(node, self, on_unknown);
    }
}

impl fmt::Debug for CallbackMap<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tags: Vec<&str> = self.registered_tags().into_iter().collect();
        tags.sort_unstable();
        f.debug_struct("CallbackMap").field("tags", &tags).finish()
    }
}
