use anchor_lang::prelude::*;

pub mod auth;
pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod issuance;
pub mod machine;
pub mod states;
pub mod store;

#[cfg(test)]
mod testing;

use instructions::*;
#[allow(unused_imports)]
use states::*;

declare_id!("PiPdvPTVMpMJ2W32Ce8uX8SLjBZ9CMDf4f9BoJBU46b");

#[program]
pub mod auth_nft {
    use super::*;

    /// Creates the registry with the deployment admin and one verifier.
    pub fn initialize(ctx: Context<InitializeCtx>, first_verifier: Pubkey) -> Result<()> {
        instructions::initialize(ctx, first_verifier)
    }

    pub fn add_verifier(ctx: Context<ManageVerifierCtx>, verifier: Pubkey) -> Result<()> {
        instructions::add_verifier(ctx, verifier)
    }

    pub fn remove_verifier(ctx: Context<ManageVerifierCtx>, verifier: Pubkey) -> Result<()> {
        instructions::remove_verifier(ctx, verifier)
    }

    /// Deletes the registry and refunds its rent to the admin. `initialize`
    /// can be called again afterwards.
    pub fn close_registry(ctx: Context<CloseRegistryCtx>) -> Result<()> {
        instructions::close_registry(ctx)
    }

    /// Mints a one-of-one certificate to `owner`. Caller must be a verifier.
    pub fn issue_certificate(
        ctx: Context<IssueCertificateCtx>,
        product_id: String,
        brand: String,
        category: String,
        metadata_uri: String,
    ) -> Result<()> {
        instructions::issue_certificate(ctx, product_id, brand, category, metadata_uri)
    }
}
