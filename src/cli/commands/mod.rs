pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;

use std::env;

use crate::auth::{load_accounts, PlaintextVerifier, Session};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Authenticate this invocation and build its Session. Credentials come from
/// the global flags, falling back to PROJTRACK_USER / PROJTRACK_PASSWORD.
pub(crate) fn login(cli: &Cli, cfg: &Config) -> AppResult<Session> {
    let username = cli
        .user
        .clone()
        .or_else(|| env::var("PROJTRACK_USER").ok())
        .ok_or_else(|| {
            AppError::Config(
                "no user given; pass --user/--password or set PROJTRACK_USER/PROJTRACK_PASSWORD"
                    .to_string(),
            )
        })?;
    let password = cli
        .password
        .clone()
        .or_else(|| env::var("PROJTRACK_PASSWORD").ok())
        .unwrap_or_default();

    let accounts = load_accounts(cfg);
    Session::login(&accounts, &PlaintextVerifier, &username, &password)
}

/// Map a `--year` CLI value to the filter's Option ("all" is the bypass
/// sentinel).
pub(crate) fn parse_year_filter(year: &Option<String>) -> AppResult<Option<i32>> {
    match year {
        None => Ok(None),
        Some(y) if y.eq_ignore_ascii_case("all") => Ok(None),
        Some(y) => y
            .trim()
            .parse::<i32>()
            .map(Some)
            .map_err(|_| AppError::InvalidYear(y.clone())),
    }
}

/// Same sentinel convention for `--location`.
pub(crate) fn parse_location_filter(location: &Option<String>) -> Option<String> {
    match location {
        None => None,
        Some(l) if l.eq_ignore_ascii_case("all") => None,
        Some(l) => Some(l.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_filter_sentinel_and_parse() {
        assert_eq!(parse_year_filter(&None).unwrap(), None);
        assert_eq!(parse_year_filter(&Some("all".into())).unwrap(), None);
        assert_eq!(parse_year_filter(&Some("All".into())).unwrap(), None);
        assert_eq!(parse_year_filter(&Some("2024".into())).unwrap(), Some(2024));
        assert!(parse_year_filter(&Some("20x4".into())).is_err());
    }

    #[test]
    fn location_filter_sentinel() {
        assert_eq!(parse_location_filter(&Some("all".into())), None);
        assert_eq!(
            parse_location_filter(&Some("NYC".into())),
            Some("NYC".into())
        );
    }
}
