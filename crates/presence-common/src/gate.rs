//! Presence eligibility gate.
//!
//! A pure decision over the current time, the event window, whether the
//! caller already registered and whether it holds the role the calling
//! surface requires. The events contract runs it against the ledger clock and
//! the client runs it before building a transaction, so a doomed registration
//! never reaches the wallet for a signature.

/// Registration opens this many seconds before an event starts.
pub const EARLY_REGISTRATION_WINDOW: u64 = 7200;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EligibilityInput {
    /// Sampled once by the caller. The gate never reads a clock.
    pub now: u64,
    pub start_ts: u64,
    pub end_ts: u64,
    pub already_registered: bool,
    pub has_required_role: bool,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Eligibility {
    Allowed,
    DeniedTooEarly,
    DeniedEnded,
    DeniedAlreadyRegistered,
    DeniedMissingRole,
}

impl Eligibility {
    pub const fn is_allowed(self) -> bool {
        matches!(self, Eligibility::Allowed)
    }

    /// Short human readable reason, suitable for a notification.
    pub const fn reason(self) -> &'static str {
        match self {
            Eligibility::Allowed => "registration allowed",
            Eligibility::DeniedTooEarly => "registration opens 2 hours before the start",
            Eligibility::DeniedEnded => "event ended, registration closed",
            Eligibility::DeniedAlreadyRegistered => "already registered for this event",
            Eligibility::DeniedMissingRole => "missing the role required to register",
        }
    }
}

/// First second at which registration is accepted.
///
/// Events starting within the first two hours of the epoch, and events with
/// no end, open at zero.
pub const fn pre_window_start(start_ts: u64, end_ts: u64) -> u64 {
    if end_ts > 0 && start_ts > EARLY_REGISTRATION_WINDOW {
        start_ts - EARLY_REGISTRATION_WINDOW
    } else {
        0
    }
}

/// Checks run in a fixed order: an ended event is terminal whatever the
/// other inputs are, then duplicate registration, then role, then the early
/// window.
pub const fn evaluate(input: &EligibilityInput) -> Eligibility {
    let opens_at = pre_window_start(input.start_ts, input.end_ts);
    if input.now > input.end_ts {
        Eligibility::DeniedEnded
    } else if input.already_registered {
        Eligibility::DeniedAlreadyRegistered
    } else if !input.has_required_role {
        Eligibility::DeniedMissingRole
    } else if input.now < opens_at {
        Eligibility::DeniedTooEarly
    } else {
        Eligibility::Allowed
    }
}
