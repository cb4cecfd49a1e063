use serde::{Deserialize, Serialize};
use std::fmt;

/// Site - a physical location belonging to exactly one Observatory
///
/// e.g. Green Bank, Charlottesville, Socorro
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub id: i64,
    pub name: String,

    /// Owning Observatory (ON DELETE CASCADE)
    pub observatory_id: i64,
}

impl Site {
    pub fn new(id: i64, name: impl Into<String>, observatory_id: i64) -> Self {
        Self {
            id,
            name: name.into(),
            observatory_id,
        }
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
