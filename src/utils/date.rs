use chrono::{Duration, NaiveDate};

/// Parse a CLI date in `YYYY-MM-DD` form.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Basic date for an all-day iCalendar value (`YYYYMMDD`).
pub fn ics_date(d: &NaiveDate) -> String {
    d.format("%Y%m%d").to_string()
}

// Excel stores dates as serial day counts from an 1899-12-30 epoch.
const EXCEL_EPOCH: (i32, u32, u32) = (1899, 12, 30);

fn excel_epoch() -> NaiveDate {
    let (y, m, d) = EXCEL_EPOCH;
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// NaiveDate → Excel date serial (whole days, no time component).
pub fn date_to_excel_serial(d: &NaiveDate) -> f64 {
    (*d - excel_epoch()).num_days() as f64
}

/// Excel date serial → NaiveDate. Fractional day parts (times) are dropped;
/// serials before the epoch are rejected.
pub fn excel_serial_to_date(serial: f64) -> Option<NaiveDate> {
    if serial < 0.0 {
        return None;
    }
    excel_epoch().checked_add_signed(Duration::days(serial.trunc() as i64))
}
