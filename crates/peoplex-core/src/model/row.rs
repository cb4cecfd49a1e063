use serde::{Deserialize, Serialize};

use super::{Observatory, Person, Site};

/// One materialized (person, observatory, site) result row
///
/// Field order follows the listing order used by every fetch strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonRow {
    pub person: Person,
    pub observatory: Observatory,
    pub site: Site,
}

impl PersonRow {
    pub fn new(person: Person, observatory: Observatory, site: Site) -> Self {
        Self {
            person,
            observatory,
            site,
        }
    }

    /// Flatten to (person name, observatory name, site name)
    pub fn labels(&self) -> (String, String, String) {
        (
            self.person.name.clone(),
            self.observatory.name.clone(),
            self.site.name.clone(),
        )
    }

    /// Check that the row's foreign keys agree with the entities it carries
    pub fn is_consistent(&self) -> bool {
        self.person.site_id == self.site.id && self.site.observatory_id == self.observatory.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_order_is_person_observatory_site() {
        let row = PersonRow::new(
            Person::deferred(1, "Ada", 10),
            Observatory::new(100, "Green Bank Observatory"),
            Site::new(10, "Green Bank", 100),
        );

        assert_eq!(
            row.labels(),
            (
                "Ada".to_string(),
                "Green Bank Observatory".to_string(),
                "Green Bank".to_string()
            )
        );
        assert!(row.is_consistent());
    }

    #[test]
    fn test_mismatched_site_is_inconsistent() {
        let row = PersonRow::new(
            Person::deferred(1, "Ada", 11),
            Observatory::new(100, "Green Bank Observatory"),
            Site::new(10, "Green Bank", 100),
        );

        assert!(!row.is_consistent());
    }
}
