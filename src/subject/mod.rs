mod schema;
mod value;

pub use schema::Schema;
pub use value::{Record, Value};

use std::borrow::Cow;
use std::fmt;

/// An element that grammars can be matched against.
///
/// Attribute lookup is explicit: `attribute` is the only way predicates reach
/// into an element, so a grammar never depends on runtime reflection.
pub trait Subject: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Declared type of the element, compared by typed predicates.
    fn type_name(&self) -> &str;

    /// Value of the named attribute, or `None` when the element has no such attribute.
    fn attribute(&self, name: &str) -> Option<Cow<'_, Self>>;

    /// Textual form of the element, if it has one.
    fn as_text(&self) -> Option<&str> {
        None
    }
}
