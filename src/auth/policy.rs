//! Row-level authorization.
//!
//! Admins may do anything. Everyone else may only mutate rows whose
//! Project Team lists their username (comma-split, trimmed, case-insensitive).
//! The check runs on every attempt against the freshly loaded row; team
//! membership is never cached across loads.

use crate::auth::Session;
use crate::models::project::ProjectRecord;

/// May this session edit or delete the given row?
pub fn can_mutate(session: &Session, record: &ProjectRecord) -> bool {
    if session.is_admin() {
        return true;
    }
    let user = session.username().to_lowercase();
    record.team_members().iter().any(|m| *m == user)
}

/// Creating a row has no team to consult; only admins may add.
pub fn can_create(session: &Session) -> bool {
    session.is_admin()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::account::{Role, UserAccount};
    use chrono::{NaiveDate, Utc};

    fn session(username: &str, role: Role) -> Session {
        Session {
            user: UserAccount {
                username: username.to_string(),
                password: String::new(),
                role,
            },
            started_at: Utc::now(),
        }
    }

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
    fn admin_may_mutate_regardless_of_team() {
        let s = session("boss", Role::Admin);
        assert!(can_mutate(&s, &record("")));
        assert!(can_mutate(&s, &record("alice,bob")));
    }

    #[test]
    fn member_match_is_case_insensitive_and_trimmed() {
        let s = session("Alice", Role::Viewer);
        assert!(can_mutate(&s, &record(" ALICE , bob")));
        assert!(can_mutate(&s, &record("alice")));
    }

    #[test]
    fn non_member_is_denied() {
        let s = session("carol", Role::Viewer);
        assert!(!can_mutate(&s, &record("alice,bob")));
    }

    #[test]
    fn empty_team_is_admin_only() {
        assert!(!can_mutate(&session("alice", Role::Viewer), &record("")));
        assert!(can_mutate(&session("root", Role::Admin), &record("")));
    }

    #[test]
    fn substring_of_a_name_does_not_count() {
        let s = session("ali", Role::Viewer);
        assert!(!can_mutate(&s, &record("alice,bob")));
    }

    #[test]
    fn only_admin_may_create() {
        assert!(can_create(&session("root", Role::Admin)));
        assert!(!can_create(&session("alice", Role::Viewer)));
        assert!(!can_create(&session("pm", Role::Other("manager".into()))));
    }
}
