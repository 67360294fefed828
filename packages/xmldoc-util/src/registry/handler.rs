//! Node handler trait definition.

use sxd_document::dom::Element;

/// Trait for node handlers.
///
/// A handler receives each child element whose tag name it was registered
/// for. It returns nothing; results are recorded through whatever state the
/// handler captures.
///
/// Every `FnMut(Element<'_>)` closure is a handler, so most callers never
/// implement this trait by hand.
pub trait NodeHandler {
    /// Process one matched element.
    fn handle(&mut self, node: Element<'_>);
}

impl<F> NodeHandler for F
where
    F: FnMut(Element<'_>),
{
    fn handle(&mut self, node: Element<'_>) {
        self(node)
    }
}
