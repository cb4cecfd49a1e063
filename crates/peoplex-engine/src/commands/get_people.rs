//! The five fetch strategies
//!
//! Each returns people in store order as (person, observatory, site). They
//! differ only in the fetches issued against the `StoreHandle`:
//!
//! | strategy | fetches for N people |
//! |---|---|
//! | `get_people_naive` | 1 + 2N |
//! | `get_people_select_related_only` | 1 |
//! | `get_people_select_related` | 1 |
//! | `get_people_qs_only` | 1 + 2N |
//! | `get_people_values` | 1 |

#![allow(clippy::result_large_err)]

use peoplex_core::model::{Person, PersonRow};
use peoplex_store::errors::Result;
use peoplex_store::{PersonColumns, PersonQuery, StoreHandle};

/// List person/observatory/site by iterating people and fetching each
/// person's site, then the site's observatory, on demand
pub fn get_people_naive(store: &StoreHandle<'_>, query: &PersonQuery) -> Result<Vec<PersonRow>> {
    store
        .people(query)?
        .into_iter()
        .map(|person| with_lazy_relations(store, person))
        .collect()
}

/// List person/observatory/site with site and observatory joined into the
/// person fetch, person columns restricted to name and site
pub fn get_people_select_related_only(
    store: &StoreHandle<'_>,
    query: &PersonQuery,
) -> Result<Vec<PersonRow>> {
    store.people_with_relations(query, PersonColumns::NameAndSite)
}

/// List person/observatory/site with site and observatory joined into the
/// person fetch
pub fn get_people_select_related(
    store: &StoreHandle<'_>,
    query: &PersonQuery,
) -> Result<Vec<PersonRow>> {
    store.people_with_relations(query, PersonColumns::All)
}

/// List person/observatory/site from a column-restricted person fetch,
/// relations still fetched on demand per row
pub fn get_people_qs_only(store: &StoreHandle<'_>, query: &PersonQuery) -> Result<Vec<PersonRow>> {
    store
        .people_only(query)?
        .into_iter()
        .map(|person| with_lazy_relations(store, person))
        .collect()
}

/// List person/observatory/site names with one flat projection
///
/// The store returns (name, site, observatory); output is reordered to
/// (name, observatory, site) to match the other strategies.
pub fn get_people_values(
    store: &StoreHandle<'_>,
    query: &PersonQuery,
) -> Result<Vec<(String, String, String)>> {
    Ok(store
        .people_values(query)?
        .into_iter()
        .map(|(name, site, observatory)| (name, observatory, site))
        .collect())
}

fn with_lazy_relations(store: &StoreHandle<'_>, person: Person) -> Result<PersonRow> {
    let site = store.fetch_site(person.site_id)?;
    let observatory = store.fetch_observatory(site.observatory_id)?;
    Ok(PersonRow::new(person, observatory, site))
}
