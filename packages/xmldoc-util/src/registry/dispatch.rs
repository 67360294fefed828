//! Tag-name dispatch over the children of a node.

use sxd_document::dom::Element;

use super::core::CallbackMap;
use crate::xml::{element_children, get_tag_name};

/// Invoke the registered handler for each child element of `node`.
///
/// Children are visited once each, in document order, and matched on their
/// local tag name. A child with no registered handler is reported to
/// `on_unknown` by tag name when it is given and skipped otherwise. Text,
/// comment and processing-instruction children are never dispatched.
///
/// # Examples
/// ```
/// use sxd_document::dom::Element;
/// use xmldoc_util::registry::{map_node, CallbackMap};
/// use xmldoc_util::EasyDocument;
///
/// let doc: EasyDocument = "<r><a/><b/><c/></r>".parse().unwrap();
///
/// let mut seen = Vec::new();
/// let mut unknown = Vec::new();
/// {
///     let mut callbacks = CallbackMap::new();
///     callbacks.register("a", |_: Element<'_>| seen.push("a"));
///     let mut on_unknown = |tag: &str| unknown.push(tag.to_string());
///     map_node(doc.root(), &mut callbacks, Some(&mut on_unknown));
/// }
///
/// assert_eq!(seen, vec!["a"]);
/// assert_eq!(unknown, vec!["b", "c"]);
/// ```
pub fn map_node(
    node: Element<'_>,
    callbacks: &mut CallbackMap<'_>,
    mut on_unknown: Option<&mut dyn FnMut(&str)>,
) {
    for child in element_children(node) {
        let tag = get_tag_name(child);
        match callbacks.get_handler_mut(tag) {
            Some(handler) => {
                tracing::trace!(tag = %tag, "Dispatching child");
                handler.handle(child);
            }
            None => match on_unknown.as_deref_mut() {
                Some(report) => report(tag),
                None => tracing::trace!(tag = %tag, "No handler for child, skipping"),
            },
        }
    }
}
