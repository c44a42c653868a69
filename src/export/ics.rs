//! iCalendar encoders: one all-day VEVENT per project.
//!
//! All-day events use the exclusive end-date convention, so DTEND is the
//! stored Project End plus one calendar day; without the +1 a compliant
//! reader treats the event as a zero-length span. The UID comes from the
//! project code, not the row index, so it survives row reordering.

use chrono::{Duration, Utc};

use crate::models::project::ProjectRecord;
use crate::utils::date::ics_date;

const PRODID: &str = "-//projtrack//EN";

/// One VCALENDAR containing a single event.
pub fn ics_for_record(record: &ProjectRecord) -> Vec<u8> {
    build_calendar(std::slice::from_ref(record), &utc_stamp())
}

/// One VCALENDAR wrapping every record's event in a single
/// header/footer pair.
pub fn ics_for_records(records: &[ProjectRecord]) -> Vec<u8> {
    build_calendar(records, &utc_stamp())
}

fn utc_stamp() -> String {
    Utc::now().format("%Y%m%dT%H%M%SZ").to_string()
}

fn build_calendar(records: &[ProjectRecord], dtstamp: &str) -> Vec<u8> {
    let mut ics = String::from("BEGIN:VCALENDAR\nVERSION:2.0\n");
    ics.push_str(&format!("PRODID:{PRODID}\n"));
    for record in records {
        push_event(&mut ics, record, dtstamp);
    }
    ics.push_str("END:VCALENDAR\n");
    ics.into_bytes()
}

fn push_event(ics: &mut String, record: &ProjectRecord, dtstamp: &str) {
    let end_exclusive = record.end + Duration::days(1);

    ics.push_str("BEGIN:VEVENT\n");
    ics.push_str(&format!("UID:{}@projtrack\n", record.code));
    ics.push_str(&format!("DTSTAMP:{dtstamp}\n"));
    ics.push_str(&format!("DTSTART;VALUE=DATE:{}\n", ics_date(&record.start)));
    ics.push_str(&format!("DTEND;VALUE=DATE:{}\n", ics_date(&end_exclusive)));
    ics.push_str(&format!("SUMMARY:{} - {}\n", record.code, record.name));
    ics.push_str(&format!("LOCATION:{}\n", record.location));
    ics.push_str(&format!("DESCRIPTION:Team: {}\n", record.team));
    ics.push_str("END:VEVENT\n");
}
