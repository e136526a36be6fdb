use presence_common::{is_valid_claim_token, pre_window_start, EventStatus};
use serde::Serialize;

use crate::error::ClientError;

/// Client-side copy of an on-chain event.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Event {
    pub id: u64,
    pub name: String,
    pub start_ts: u64,
    pub end_ts: u64,
}

impl Event {
    pub fn status(&self, now: u64) -> EventStatus {
        EventStatus::at(now, self.start_ts, self.end_ts)
    }

    /// First second at which registration is accepted.
    pub fn opens_at(&self) -> u64 {
        pre_window_start(self.start_ts, self.end_ts)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AttendeeRecord {
    pub address: String,
    pub registered_at: u64,
    pub active: bool,
}

/// One-time credential hash issued by the role contract.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ClaimToken(pub [u8; 32]);

impl ClaimToken {
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parses user input, surrounding whitespace allowed.
    pub fn from_hex(input: &str) -> Result<Self, ClientError> {
        let trimmed = input.trim();
        if !is_valid_claim_token(trimmed) {
            return Err(ClientError::validation("claim token", "expected a hexadecimal token"));
        }
        if trimmed.len() != 64 {
            return Err(ClientError::validation(
                "claim token",
                format!("expected 64 hex characters, got {}", trimmed.len()),
            ));
        }

        let mut bytes = [0u8; 32];
        hex::decode_to_slice(trimmed, &mut bytes)
            .map_err(|err| ClientError::validation("claim token", err.to_string()))?;
        Ok(ClaimToken(bytes))
    }
}
