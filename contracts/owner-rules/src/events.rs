use soroban_sdk::{Address, BytesN, String, contractevent};


#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CredentialMinted {
    #[topic]
    pub role_id: u32,
    #[topic]
    pub owner: Address,
    pub token_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CredentialRevoked {
    #[topic]
    pub role_id: u32,
    #[topic]
    pub owner: Address,
    pub token_id: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AdminTransferred {
    #[topic]
    pub previous: Address,
    pub admin: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimLinkGenerated {
    #[topic]
    pub role_id: u32,
    #[topic]
    pub recipient: Address,
    pub claim_hash: BytesN<32>,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChanged {
    pub paused: bool,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BaseUriUpdated {
    pub uri: String,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventContractUpdated {
    pub contract_id: String,
}
