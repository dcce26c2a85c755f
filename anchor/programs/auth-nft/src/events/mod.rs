use anchor_lang::prelude::*;

#[event]
pub struct RegistryInitialized {
    pub admin: Pubkey,
    pub first_verifier: Pubkey,
}

#[event]
pub struct VerifierAdded {
    pub admin: Pubkey,
    pub verifier: Pubkey,
}

#[event]
pub struct VerifierRemoved {
    pub admin: Pubkey,
    pub verifier: Pubkey,
}

#[event]
pub struct RegistryClosed {
    pub admin: Pubkey,
    pub reclaimed_lamports: u64,
}

/// Emitted once per certificate for off-chain indexers.
#[event]
pub struct CertificateIssued {
    pub verifier: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub product_id: String,
    pub brand: String,
    pub category: String,
    pub metadata_uri: String,
    pub timestamp: i64,
}
