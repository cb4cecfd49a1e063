use serde::{Deserialize, Serialize};
use std::fmt;

/// Person - an individual working at a Site
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Integer primary key assigned by the store
    pub id: i64,

    /// Human-readable name
    pub name: String,

    /// Site this Person belongs to (ON DELETE CASCADE)
    pub site_id: i64,

    /// Free-form notes.
    ///
    /// `None` when the column was deferred by a column-restricted fetch; the
    /// stored column is never NULL.
    pub notes: Option<String>,
}

impl Person {
    /// Create a fully loaded Person
    pub fn new(id: i64, name: impl Into<String>, site_id: i64, notes: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            site_id,
            notes: Some(notes.into()),
        }
    }

    /// Create a Person with the notes column deferred
    pub fn deferred(id: i64, name: impl Into<String>, site_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            site_id,
            notes: None,
        }
    }

    /// Check whether the notes column has been loaded
    pub fn has_notes_loaded(&self) -> bool {
        self.notes.is_some()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A Person not yet persisted (no id)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPerson {
    pub name: String,
    pub site_id: i64,
    pub notes: String,
}

impl NewPerson {
    pub fn new(name: impl Into<String>, site_id: i64, notes: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            site_id,
            notes: notes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_person_has_notes_loaded() {
        let person = Person::new(1, "Ada", 2, "likes radio");
        assert!(person.has_notes_loaded());
        assert_eq!(person.notes.as_deref(), Some("likes radio"));
    }

    #[test]
    fn test_deferred_person_has_no_notes() {
        let person = Person::deferred(1, "Ada", 2);
        assert!(!person.has_notes_loaded());
        assert_eq!(person.to_string(), "Ada");
    }
}
