//! Strategy selection and dispatch

#![allow(clippy::result_large_err)]

use std::fmt;
use std::str::FromStr;

use peoplex_core::errors::{ExError, PeopleXError};
use peoplex_core::model::PersonRow;
use peoplex_store::errors::Result;
use peoplex_store::{PersonQuery, StoreHandle};
use serde::{Deserialize, Serialize};

use crate::commands::get_people::{
    get_people_naive, get_people_qs_only, get_people_select_related,
    get_people_select_related_only, get_people_values,
};

/// One of the five fetch strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStrategy {
    Naive,
    SelectRelatedOnly,
    SelectRelated,
    QsOnly,
    Values,
}

impl FetchStrategy {
    /// Every strategy, in presentation order
    pub const ALL: [FetchStrategy; 5] = [
        FetchStrategy::Naive,
        FetchStrategy::SelectRelatedOnly,
        FetchStrategy::SelectRelated,
        FetchStrategy::QsOnly,
        FetchStrategy::Values,
    ];

    /// Stable name used on the command line and in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchStrategy::Naive => "naive",
            FetchStrategy::SelectRelatedOnly => "select_related_only",
            FetchStrategy::SelectRelated => "select_related",
            FetchStrategy::QsOnly => "qs_only",
            FetchStrategy::Values => "values",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FetchStrategy::Naive => "Naive iteration",
            FetchStrategy::SelectRelatedOnly => "Eager load with restricted columns",
            FetchStrategy::SelectRelated => "Eager load",
            FetchStrategy::QsOnly => "Restricted columns, lazy relations",
            FetchStrategy::Values => "Flat projection",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FetchStrategy::Naive => {
                "Fetch all person columns, then each person's site and observatory one row at a time"
            }
            FetchStrategy::SelectRelatedOnly => {
                "Fetch person name and site id with site and observatory joined in one query"
            }
            FetchStrategy::SelectRelated => {
                "Fetch every person column with site and observatory joined in one query"
            }
            FetchStrategy::QsOnly => {
                "Fetch person name and site id, then each site and observatory one row at a time"
            }
            FetchStrategy::Values => {
                "Fetch person, site and observatory names as flat values in one query"
            }
        }
    }

    /// Whether fetches grow with the number of people
    pub fn is_per_row(&self) -> bool {
        matches!(self, FetchStrategy::Naive | FetchStrategy::QsOnly)
    }
}

impl fmt::Display for FetchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FetchStrategy {
    type Err = ExError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FetchStrategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| PeopleXError::UnknownStrategy { name: s.to_string() }.into())
    }
}

/// Name, title and description of one strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StrategyInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

impl From<FetchStrategy> for StrategyInfo {
    fn from(strategy: FetchStrategy) -> Self {
        Self {
            name: strategy.as_str(),
            title: strategy.title(),
            description: strategy.description(),
        }
    }
}

/// Describe every strategy, in presentation order
pub fn strategy_catalog() -> Vec<StrategyInfo> {
    FetchStrategy::ALL.into_iter().map(StrategyInfo::from).collect()
}

/// Result of one strategy: materialized rows or flat names
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "rows", rename_all = "snake_case")]
pub enum PeopleListing {
    Entities(Vec<PersonRow>),
    Labels(Vec<(String, String, String)>),
}

impl PeopleListing {
    pub fn len(&self) -> usize {
        match self {
            PeopleListing::Entities(rows) => rows.len(),
            PeopleListing::Labels(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// (person name, observatory name, site name) for every row
    pub fn labels(&self) -> Vec<(String, String, String)> {
        match self {
            PeopleListing::Entities(rows) => rows.iter().map(PersonRow::labels).collect(),
            PeopleListing::Labels(rows) => rows.clone(),
        }
    }
}

/// Run one strategy against the store
pub fn list_people(
    store: &StoreHandle<'_>,
    query: &PersonQuery,
    strategy: FetchStrategy,
) -> Result<PeopleListing> {
    let listing = match strategy {
        FetchStrategy::Naive => PeopleListing::Entities(get_people_naive(store, query)?),
        FetchStrategy::SelectRelatedOnly => {
            PeopleListing::Entities(get_people_select_related_only(store, query)?)
        }
        FetchStrategy::SelectRelated => {
            PeopleListing::Entities(get_people_select_related(store, query)?)
        }
        FetchStrategy::QsOnly => PeopleListing::Entities(get_people_qs_only(store, query)?),
        FetchStrategy::Values => PeopleListing::Labels(get_people_values(store, query)?),
    };
    Ok(listing)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for strategy in FetchStrategy::ALL {
            assert_eq!(strategy.as_str().parse::<FetchStrategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_unknown_name_is_invalid_input() {
        let err = "prefetch_related".parse::<FetchStrategy>().unwrap_err();
        assert_eq!(err.kind(), peoplex_core::ExErrorKind::InvalidInput);
    }

    #[test]
    fn test_catalog_lists_every_strategy_once() {
        let names: Vec<&str> = strategy_catalog().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec!["naive", "select_related_only", "select_related", "qs_only", "values"]
        );
        assert!(strategy_catalog().iter().all(|s| !s.description.is_empty()));
    }

    #[test]
    fn test_only_lazy_strategies_are_per_row() {
        let per_row: Vec<_> = FetchStrategy::ALL
            .into_iter()
            .filter(FetchStrategy::is_per_row)
            .collect();
        assert_eq!(per_row, vec![FetchStrategy::Naive, FetchStrategy::QsOnly]);
    }
}
