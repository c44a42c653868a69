//! Conjunction filter over the in-memory row set.

use crate::models::project::ProjectRecord;

/// Year/location/query predicates, AND-combined. `None` (the CLI's "All"
/// sentinel, or a blank query) bypasses the corresponding predicate.
#[derive(Debug, Clone, Default)]
pub struct ProjectFilter {
    pub year: Option<i32>,
    pub location: Option<String>,
    pub query: Option<String>,
}

impl ProjectFilter {
    pub fn new(year: Option<i32>, location: Option<String>, query: Option<String>) -> Self {
        // A blank or whitespace-only query means "no query".
        let query = query.and_then(|q| {
            let q = q.trim().to_string();
            if q.is_empty() {
                None
            } else {
                Some(q)
            }
        });
        Self {
            year,
            location,
            query,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.location.is_none() && self.query.is_none()
    }

    pub fn matches(&self, record: &ProjectRecord) -> bool {
        if let Some(year) = self.year {
            if record.year != year {
                return false;
            }
        }
        if let Some(location) = &self.location {
            if record.location != *location {
                return false;
            }
        }
        if let Some(query) = &self.query {
            let q = query.to_lowercase();
            let hit = record.code.to_lowercase().contains(&q)
                || record.name.to_lowercase().contains(&q)
                || record.location.to_lowercase().contains(&q);
            if !hit {
                return false;
            }
        }
        true
    }

    /// Order-preserving sub-sequence of the input, never a re-sort.
    pub fn apply(&self, records: &[ProjectRecord]) -> Vec<ProjectRecord> {
        records
            .iter()
            .filter(|r| self.matches(r))
            .cloned()
            .collect()
    }
}
