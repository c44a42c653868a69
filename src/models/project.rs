use chrono::NaiveDate;
use serde::Serialize;

/// Column headers of the "Projects" sheet, in persisted order.
/// Every store save and every export must emit exactly these, in this order.
pub const COLUMNS: [&str; 7] = [
    "Year",
    "Project Code",
    "Project Name",
    "Location",
    "Project Start",
    "Project End",
    "Project Team",
];

/// One row of the project registry.
///
/// Identity for edit/delete is the ordinal position within the most recent
/// full load. Indices shift after a delete, so they are only valid for one
/// load cycle.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ProjectRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Project Code")]
    pub code: String,
    #[serde(rename = "Project Name")]
    pub name: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Project Start")]
    pub start: NaiveDate,
    #[serde(rename = "Project End")]
    pub end: NaiveDate,
    #[serde(rename = "Project Team")]
    pub team: String,
}

impl ProjectRecord {
    /// Team usernames: comma-split, trimmed, lower-cased, empties dropped.
    /// Parsed on demand; the stored field stays a single verbatim string.
    pub fn team_members(&self) -> Vec<String> {
        self.team
            .split(',')
            .map(|t| t.trim().to_lowercase())
            .filter(|t| !t.is_empty())
            .collect()
    }

    /// Flatten to display strings in column order (table/pdf rendering).
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.year.to_string(),
            self.code.clone(),
            self.name.clone(),
            self.location.clone(),
            self.start.format("%Y-%m-%d").to_string(),
            self.end.format("%Y-%m-%d").to_string(),
            self.team.clone(),
        ]
    }
}

pub fn records_to_table(records: &[ProjectRecord]) -> Vec<Vec<String>> {
    records.iter().map(ProjectRecord::to_row).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(team: &str) -> ProjectRecord {
        ProjectRecord {
            year: 2024,
            code: "P-001".into(),
            name: "Harbor upgrade".into(),
            location: "NYC".into(),
            start: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
            team: team.into(),
        }
    }

    #[test]
    fn team_members_split_trim_lowercase() {
        let r = record(" Alice , bob,CAROL ,, ");
        assert_eq!(r.team_members(), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn empty_team_yields_no_members() {
        assert!(record("").team_members().is_empty());
        assert!(record(" , ,").team_members().is_empty());
    }

    #[test]
    fn to_row_follows_column_order() {
        let row = record("alice").to_row();
        assert_eq!(row.len(), COLUMNS.len());
        assert_eq!(row[0], "2024");
        assert_eq!(row[4], "2024-01-10");
        assert_eq!(row[5], "2024-01-12");
    }
}
