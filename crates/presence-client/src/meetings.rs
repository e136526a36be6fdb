use presence_common::EventStatus;

use crate::adapter::EventsContract;
use crate::cancel::CancelToken;
use crate::error::ClientError;
use crate::model::Event;
use crate::oplog::OpLog;

/// How many ended events the combined meeting list pulls in.
pub const RECENT_CLOSED_LIMIT: u32 = 20;

/// Combines listings, keeping the first copy of each id, latest start first.
pub fn merge_meetings(lists: impl IntoIterator<Item = Vec<Event>>) -> Vec<Event> {
    let mut merged: Vec<Event> = Vec::new();
    for event in lists.into_iter().flatten() {
        if !merged.iter().any(|known| known.id == event.id) {
            merged.push(event);
        }
    }
    merged.sort_by(|a, b| b.start_ts.cmp(&a.start_ts).then(b.id.cmp(&a.id)));
    merged
}

/// Upcoming events plus the most recent closed ones.
pub fn load_meetings(events: &dyn EventsContract, cancel: &CancelToken) -> Result<Vec<Event>, ClientError> {
    cancel.check()?;
    let upcoming = events.list_upcoming()?;
    cancel.check()?;
    let closed = events.list_closed(0, RECENT_CLOSED_LIMIT)?;
    cancel.check()?;
    Ok(merge_meetings([upcoming, closed]))
}

/// Picks the meeting a presence page opens on: the requested one when it
/// is listed, else the first one running at `now`, else the first listed.
pub fn select_meeting(meetings: &[Event], requested: Option<u64>, now: u64) -> Option<&Event> {
    if let Some(found) = requested.and_then(|id| meetings.iter().find(|event| event.id == id)) {
        return Some(found);
    }
    meetings
        .iter()
        .find(|event| event.status(now) == EventStatus::Active)
        .or_else(|| meetings.first())
}

/// Incremental listing of ended events, newest first.
#[derive(Debug, Clone)]
pub struct ClosedFeed {
    page_size: u32,
    cursor: u64,
    has_more: bool,
    events: Vec<Event>,
}

impl ClosedFeed {
    pub fn new(page_size: u32) -> Self {
        ClosedFeed { page_size: page_size.max(1), cursor: 0, has_more: true, events: Vec::new() }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

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
            .list_closed(self.cursor, self.page_size)
            .inspect_err(|err| log.report(now, "loading closed meetings", err))?;
        cancel.check()?;

        let fetched = page.len();
        self.cursor += fetched as u64;
        self.has_more = fetched == self.page_size as usize;
        self.events.extend(page);
        log.success(now, format!("loaded {fetched} closed meetings"));
        Ok(fetched)
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.has_more = true;
        self.events.clear();
    }
}
