use serde::Serialize;

use crate::model::{AttendeeRecord, Event};

pub const CSV_HEADER: &str = "address,registered_at";

/// Attendee list as CSV, one row per record, timestamps in Unix seconds.
pub fn attendees_csv(attendees: &[AttendeeRecord]) -> String {
    let mut out = String::from(CSV_HEADER);
    for row in attendees {
        out.push('\n');
        out.push_str(&row.address);
        out.push(',');
        out.push_str(&row.registered_at.to_string());
    }
    out
}

#[derive(Serialize)]
struct AttendanceReport<'a> {
    event: &'a Event,
    total: usize,
    attendees: &'a [AttendeeRecord],
}

pub fn attendees_json(event: &Event, attendees: &[AttendeeRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&AttendanceReport { event, total: attendees.len(), attendees })
}

pub fn csv_file_name(event_id: u64) -> String {
    format!("presence_event_{event_id}.csv")
}
