use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::machine;
use crate::store::AccountSlot;

pub fn add_verifier(ctx: Context<ManageVerifierCtx>, verifier: Pubkey) -> Result<()> {
    let mut slot = AccountSlot::new(
        ctx.accounts.registry.to_account_info(),
        ctx.program_id,
        ctx.bumps.registry,
    );

    let event = machine::add_verifier(&mut slot, ctx.accounts.admin.key(), verifier)?;

    msg!("Verifier {} added", event.verifier);
    emit!(event);

    Ok(())
}

/// Accounts shared by `add_verifier` and `remove_verifier`.
#[derive(Accounts)]
pub struct ManageVerifierCtx<'info> {
    /// CHECK: decoded and checked against the admin by the handler
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: UncheckedAccount<'info>,

    pub admin: Signer<'info>,
}
