use anchor_lang::prelude::*;

use crate::auth::Authority;
use crate::constants::REGISTRY_SEED;
use crate::machine;
use crate::store::AccountSlot;

pub fn initialize(ctx: Context<InitializeCtx>, first_verifier: Pubkey) -> Result<()> {
    let admin = &ctx.accounts.admin;

    let mut slot = AccountSlot::new(
        ctx.accounts.registry.to_account_info(),
        ctx.program_id,
        ctx.bumps.registry,
    )
    .funded_by(
        admin.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
    );

    let event = machine::initialize(
        &mut slot,
        &Authority::deployed(),
        admin.key(),
        first_verifier,
    )?;

    msg!(
        "Registry initialized by {} with verifier {}",
        event.admin,
        event.first_verifier
    );
    emit!(event);

    Ok(())
}

#[derive(Accounts)]
pub struct InitializeCtx<'info> {
    /// CHECK: allocated by the handler so an existing record fails with
    /// `AlreadyInitialized` instead of a system program error
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: UncheckedAccount<'info>,

    #[account(mut)]
    pub admin: Signer<'info>,
    pub system_program: Program<'info, System>
}
