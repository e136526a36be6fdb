#![cfg_attr(not(test), no_std)]
//! Shared building blocks for PresenceTrack.
//!
//! The events contract and the off-chain client both depend on this crate so
//! that the registration window, role identifiers and wire types are defined
//! exactly once.

pub mod contract_id;
pub mod gate;
pub mod roles;
pub mod status;
pub mod types;

pub use contract_id::{is_valid_claim_token, is_valid_contract_id, CONTRACT_ID_LEN};
pub use gate::{evaluate, pre_window_start, Eligibility, EligibilityInput, EARLY_REGISTRATION_WINDOW};
pub use roles::{Role, ROLE_ADMIN, ROLE_ASSOCIATE, ROLE_SUPERVISOR};
pub use status::EventStatus;
pub use types::{AttendeeInfo, EventData, EventSummary};

#[cfg(test)]
mod test;
