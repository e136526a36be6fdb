//! # presence-client
//!
//! Client-side orchestration for **PresenceTrack**.
//!
//! The contracts are the source of truth; this crate decides what is worth
//! sending to them. It resolves which events contract to use, snapshots the
//! roles of the connected wallet, gates registrations locally so a doomed
//! transaction never reaches the wallet, and walks paginated attendee lists.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use presence_client::{PresenceDesk, RegistrationPolicy, RoleWatcher};
//!
//! let mut watcher = RoleWatcher::new();
//! let snapshot = watcher.refresh(Some(wallet), &roles, &cancel, now, &mut log)?;
//! let mut desk = PresenceDesk::new(&roles, &events, RegistrationPolicy::default());
//! desk.connect(wallet, now)?;
//! desk.register_presence(event_id, &snapshot, now)?;
//! ```

pub mod adapter;
pub mod cache;
pub mod cancel;
pub mod config;
pub mod desk;
pub mod error;
pub mod export;
pub mod links;
pub mod meetings;
pub mod model;
pub mod oplog;
pub mod pager;
pub mod resolver;
pub mod roles;
pub mod soroban;

pub use adapter::{EventsContract, RoleContract};
pub use cache::{ContractCache, MemoryCache};
pub use cancel::CancelToken;
pub use config::{Network, NetworkConfig};
pub use desk::{PresenceDesk, RegistrationPolicy};
pub use error::{ClientError, ErrorKind};
pub use model::{AttendeeRecord, ClaimToken, Event};
pub use oplog::{Level, OpLog};
pub use pager::{AttendeeFeed, AttendeePager, PagerOutcome};
pub use resolver::EventContractResolver;
pub use roles::{RoleSnapshot, RoleWatcher};
pub use soroban::{SorobanOwnerRules, SorobanPresenceEvents};

pub use presence_common::{Eligibility, EventStatus, Role};
