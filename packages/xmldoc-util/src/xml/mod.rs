//! XML helpers: navigation, subtree import, map fillers and path queries.

mod fill;
mod import;
mod query;
mod utils;

pub use fill::{
    fill_node_flags, fill_node_string_lists, fill_node_strings, write_kv, BoolMap, StringMap,
    StringVecMap,
};
pub use import::{import_child, import_element, import_parsed_child, import_parsed_element};
pub use query::{get_boolean, get_number, get_string, FromXPathNumber};
pub use utils::{
    copy_children, element_children, find_child, find_children, get_tag_name, get_text, has_tag,
};
