use serde::{Deserialize, Serialize};
use std::fmt;

/// Observatory - the root of the placement hierarchy
///
/// e.g. Green Bank Observatory, National Radio Astronomy Observatory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Observatory {
    /// Integer primary key assigned by the store
    pub id: i64,

    /// Human-readable name
    pub name: String,
}

impl Observatory {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

impl fmt::Display for Observatory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_name() {
        let obs = Observatory::new(1, "Green Bank Observatory");
        assert_eq!(obs.to_string(), "Green Bank Observatory");
    }
}
