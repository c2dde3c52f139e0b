use hashbrown::{HashMap as FastHashMap, HashSet as FastHashSet};
use serde::{Deserialize, Serialize};

use crate::grammar::{GrammarError, GrammarResult};

/// Known element types and the attributes each one exposes.
///
/// Typed predicates are validated against it when a grammar is built, so a
/// misspelled type or attribute fails at construction instead of silently
/// never matching.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    types: FastHashMap<String, FastHashSet<String>>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type<S, I, A>(mut self, type_name: S, attributes: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        self.types
            .entry(type_name.into())
            .or_default()
            .extend(attributes.into_iter().map(Into::into));
        self
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.types.contains_key(type_name)
    }

    pub fn check_type(&self, type_name: &str) -> GrammarResult<()> {
        if self.has_type(type_name) {
            Ok(())
        } else {
            Err(GrammarError::UnknownType {
                type_name: type_name.to_string(),
            })
        }
    }

    pub fn check_attribute(&self, type_name: &str, attribute: &str) -> GrammarResult<()> {
        match self.types.get(type_name) {
            None => Err(GrammarError::UnknownType {
                type_name: type_name.to_string(),
            }),
            Some(attributes) if attributes.contains(attribute) => Ok(()),
            Some(_) => Err(GrammarError::UnknownAttribute {
                type_name: type_name.to_string(),
                attribute: attribute.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_when_attribute_unknown_then_reports_type_and_attribute() {
        let schema = Schema::new().with_type("A", ["attr"]);
        schema
            .check_attribute("A", "attr")
            .expect("declared attribute should validate");

        match schema.check_attribute("A", "other") {
            Err(GrammarError::UnknownAttribute {
                type_name,
                attribute,
            }) => {
                assert_eq!(type_name, "A");
                assert_eq!(attribute, "other");
            }
            other => panic!("expected unknown attribute, got {other:?}"),
        }
    }

    #[test]
    fn schema_when_type_unknown_then_rejects() {
        let schema = Schema::new().with_type("A", Vec::<String>::new());
        assert!(schema.check_type("A").is_ok());
        match schema.check_type("B") {
            Err(GrammarError::UnknownType { type_name }) => assert_eq!(type_name, "B"),
            other => panic!("expected unknown type, got {other:?}"),
        }
    }
}
