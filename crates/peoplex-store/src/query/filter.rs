//! Query handle over the Person collection

/// Which people a fetch covers
///
/// Results are always ordered by person id, the store's insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonQuery {
    site_id: Option<i64>,
    observatory_id: Option<i64>,
    limit: Option<usize>,
}

impl PersonQuery {
    /// Every Person in the store
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to people at one Site
    pub fn site(mut self, site_id: i64) -> Self {
        self.site_id = Some(site_id);
        self
    }

    /// Restrict to people at any Site of one Observatory
    pub fn observatory(mut self, observatory_id: i64) -> Self {
        self.observatory_id = Some(observatory_id);
        self
    }

    /// Keep at most `limit` people
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Render `select_from` followed by this query's WHERE, ORDER BY and LIMIT
    ///
    /// `select_from` must name the people table as `people`. Returns the SQL
    /// and its positional parameters.
    pub(crate) fn to_sql(&self, select_from: &str) -> (String, Vec<i64>) {
        let mut sql = String::from(select_from);
        let mut conditions = Vec::new();
        let mut params = Vec::new();

        if let Some(site_id) = self.site_id {
            conditions.push("people.site_id = ?");
            params.push(site_id);
        }
        if let Some(observatory_id) = self.observatory_id {
            conditions.push("people.site_id IN (SELECT id FROM sites WHERE observatory_id = ?)");
            params.push(observatory_id);
        }

        if !conditions.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&conditions.join(" AND "));
        }

        sql.push_str(" ORDER BY people.id");

        if let Some(limit) = self.limit {
            // SQLite limits are signed; anything larger means no limit
            sql.push_str(" LIMIT ?");
            params.push(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        (sql, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_orders_by_id() {
        let (sql, params) = PersonQuery::all().to_sql("SELECT people.id FROM people");
        assert_eq!(sql, "SELECT people.id FROM people ORDER BY people.id");
        assert!(params.is_empty());
    }

    #[test]
    fn test_filters_and_limit() {
        let (sql, params) = PersonQuery::all()
            .site(3)
            .observatory(1)
            .limit(10)
            .to_sql("SELECT people.id FROM people");

        assert_eq!(
            sql,
            "SELECT people.id FROM people WHERE people.site_id = ? AND \
             people.site_id IN (SELECT id FROM sites WHERE observatory_id = ?) \
             ORDER BY people.id LIMIT ?"
        );
        assert_eq!(params, vec![3, 1, 10]);
    }

    #[test]
    fn test_oversized_limit_clamps_to_i64_max() {
        let (_, params) = PersonQuery::all()
            .limit(usize::MAX)
            .to_sql("SELECT people.id FROM people");
        assert_eq!(params, vec![i64::MAX]);
    }
}
