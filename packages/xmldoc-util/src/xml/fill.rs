//! Populate a container element from simple key/value mappings.
//!
//! Each filler appends children in the iteration order of its input. The
//! map aliases below are ordered by key, so documents built from them are
//! reproducible.
//!
//! Keys become tag names as given. They must be valid XML names (no spaces,
//! not starting with a digit, and so on); they are not checked, and an
//! invalid key yields output that does not parse back.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use sxd_document::dom::Element;

/// Key to text value.
pub type StringMap = BTreeMap<String, String>;

/// Key to a list of text values, one child per value.
pub type StringVecMap = BTreeMap<String, Vec<String>>;

/// Key to a presence flag.
pub type BoolMap = BTreeMap<String, bool>;

/// Append `<key>value</key>` to `container`.
///
/// `key` must be a valid XML name. It is not checked: `"a b"` is written as
/// `<a b>1</a b>`, which is not well-formed.
///
/// # Examples
/// ```
/// use xmldoc_util::EasyDocument;
/// use xmldoc_util::xml::write_kv;
///
/// let doc = EasyDocument::with_root_name("user");
/// write_kv(doc.root(), "name", "Ada");
/// assert_eq!(doc.to_string(), "<?xml version=\"1.0\"?><user><name>Ada</name></user>");
/// ```
pub fn write_kv<'d>(container: Element<'d>, key: &str, value: &str) -> Element<'d> {
    let doc = container.document();
    let child = doc.create_element(key);
    child.append_child(doc.create_text(value));
    container.append_child(child);
    child
}

/// Append one text-holding child per entry.
///
/// Keys must be valid XML names, as for [`write_kv`].
pub fn fill_node_strings<I, K, V>(container: Element<'_>, data: I)
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    for (key, value) in data {
        write_kv(container, key.as_ref(), value.as_ref());
    }
}

/// Append one text-holding child per value, repeating the key.
///
/// Values of a key keep their list order. Keys must be valid XML names,
/// as for [`write_kv`].
pub fn fill_node_string_lists<I, K, L>(container: Element<'_>, data: I)
where
    I: IntoIterator<Item = (K, L)>,
    K: AsRef<str>,
    L: IntoIterator,
    L::Item: AsRef<str>,
{
    for (key, values) in data {
        for value in values {
            write_kv(container, key.as_ref(), value.as_ref());
        }
    }
}

/// Append an empty child for every key whose flag is set.
///
/// Keys must be valid XML names, as for [`write_kv`].
///
/// # Examples
/// ```
/// use xmldoc_util::xml::{fill_node_flags, BoolMap};
/// use xmldoc_util::EasyDocument;
///
/// let flags = BoolMap::from([("on".to_string(), true), ("off".to_string(), false)]);
/// let doc = EasyDocument::with_root_name("flags");
/// fill_node_flags(doc.root(), &flags);
/// assert_eq!(doc.to_string(), "<?xml version=\"1.0\"?><flags><on/></flags>");
/// ```
pub fn fill_node_flags<I, K, B>(container: Element<'_>, data: I)
where
    I: IntoIterator<Item = (K, B)>,
    K: AsRef<str>,
    B: Borrow<bool>,
{
    let doc = container.document();
    for (key, flag) in data {
        if *flag.borrow() {
            container.append_child(doc.create_element(key.as_ref()));
        }
    }
}
