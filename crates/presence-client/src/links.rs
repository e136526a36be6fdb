use crate::error::ClientError;
use crate::model::ClaimToken;

fn base(origin: &str) -> &str {
    origin.trim().trim_end_matches('/')
}

/// Link a recipient opens to redeem a credential.
pub fn claim_link(origin: &str, token: &ClaimToken) -> String {
    format!("{}/claim?token={}", base(origin), token.to_hex())
}

/// Link encoded in the QR code shown at an event.
pub fn presence_link(origin: &str, event_id: u64) -> String {
    format!("{}/presence/{event_id}", base(origin))
}

/// Extracts the claim token from a pasted claim link or from a bare token.
pub fn token_from_link(input: &str) -> Result<ClaimToken, ClientError> {
    let input = input.trim();
    let Some((_, query)) = input.split_once('?') else {
        return ClaimToken::from_hex(input);
    };

    let query = query.split('#').next().unwrap_or_default();
    query
        .split('&')
        .find_map(|pair| pair.strip_prefix("token="))
        .ok_or_else(|| ClientError::validation("claim link", "missing token parameter"))
        .and_then(ClaimToken::from_hex)
}

/// Event id from a presence link, as scanned from a QR code.
pub fn event_from_link(input: &str) -> Result<u64, ClientError> {
    let path = input.trim().split(['?', '#']).next().unwrap_or_default();
    let (_, id) = path
        .trim_end_matches('/')
        .rsplit_once("/presence/")
        .ok_or_else(|| ClientError::validation("presence link", "not a presence link"))?;
    id.parse()
        .map_err(|_| ClientError::validation("presence link", format!("bad event id {id:?}")))
}
