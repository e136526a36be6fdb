//! Attendee pagination.
//!
//! The events contract hands out attendee rows by raw index, inactive rows
//! included. Both walkers below advance their cursor by the number of rows
//! returned and keep only the active ones.

use crate::adapter::EventsContract;
use crate::cancel::CancelToken;
use crate::error::ClientError;
use crate::model::AttendeeRecord;
use crate::oplog::OpLog;

pub const DEFAULT_COLLECT_PAGE: u32 = 25;
pub const DEFAULT_FEED_PAGE: u32 = 10;

/// Result of a full walk. `attendees` holds everything gathered before a
/// failure, if there was one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerOutcome {
    pub attendees: Vec<AttendeeRecord>,
    pub fetches: u32,
    pub error: Option<ClientError>,
}

impl PagerOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

/// Materializes the complete active attendee set of one event.
pub struct AttendeePager<'a> {
    events: &'a dyn EventsContract,
    page_size: u32,
}

impl<'a> AttendeePager<'a> {
    pub fn new(events: &'a dyn EventsContract, page_size: u32) -> Self {
        AttendeePager { events, page_size: page_size.max(1) }
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetches pages until one comes back short or empty. A failed fetch
    /// stops the walk without retrying and is reported to `log`.
    pub fn collect(&self, event_id: u64, cancel: &CancelToken, now: u64, log: &mut OpLog) -> PagerOutcome {
        let mut outcome = PagerOutcome { attendees: Vec::new(), fetches: 0, error: None };
        let mut cursor = 0u64;

        loop {
            if let Err(err) = cancel.check() {
                outcome.error = Some(err);
                break;
            }

            outcome.fetches += 1;
            let page = match self.events.list_attendees(event_id, cursor, self.page_size) {
                Ok(page) => page,
                Err(err) => {
                    log.report(now, "loading attendees", &err);
                    outcome.error = Some(err);
                    break;
                }
            };

            if let Err(err) = cancel.check() {
                outcome.error = Some(err);
                break;
            }

            let fetched = page.len();
            cursor += fetched as u64;
            outcome.attendees.extend(page.into_iter().filter(|row| row.active));

            if fetched < self.page_size as usize {
                break;
            }
        }
        outcome
    }
}

/// Incremental "load more" listing of one event's attendees.
#[derive(Debug, Clone)]
pub struct AttendeeFeed {
    event_id: u64,
    page_size: u32,
    cursor: u64,
    has_more: bool,
    attendees: Vec<AttendeeRecord>,
}

impl AttendeeFeed {
    pub fn new(event_id: u64, page_size: u32) -> Self {
        AttendeeFeed {
            event_id,
            page_size: page_size.max(1),
            cursor: 0,
            has_more: true,
            attendees: Vec::new(),
        }
    }

    pub fn event_id(&self) -> u64 {
        self.event_id
    }

    pub fn attendees(&self) -> &[AttendeeRecord] {
        &self.attendees
    }

    pub fn cursor(&self) -> u64 {
        self.cursor
    }

    /// True while the last page came back full.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Loads the next page and returns how many active attendees it added.
    ///
    /// Nothing changes on failure or cancellation.
    pub fn load_more(
        &mut self,
        events: &dyn EventsContract,
        cancel: &CancelToken,
        now: u64,
        log: &mut OpLog,
    ) -> Result<usize, ClientError> {
        if !self.has_more {
            return Ok(0);
        }
        cancel.check()?;

        let page = events
            .list_attendees(self.event_id, self.cursor, self.page_size)
            .inspect_err(|err| log.report(now, "loading attendees", err))?;
        cancel.check()?;

        let fetched = page.len();
        let before = self.attendees.len();
        self.cursor += fetched as u64;
        self.has_more = fetched == self.page_size as usize;
        self.attendees.extend(page.into_iter().filter(|row| row.active));

        let added = self.attendees.len() - before;
        if added == 0 && !self.has_more {
            log.info(now, "no more attendees");
        } else {
            log.success(now, format!("loaded {added} attendees"));
        }
        Ok(added)
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.has_more = true;
        self.attendees.clear();
    }
}
