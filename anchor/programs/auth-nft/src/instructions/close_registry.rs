use anchor_lang::prelude::*;

use crate::auth::Authority;
use crate::constants::REGISTRY_SEED;
use crate::machine;
use crate::store::AccountSlot;

pub fn close_registry(ctx: Context<CloseRegistryCtx>) -> Result<()> {
    let admin = &ctx.accounts.admin;

    let mut slot = AccountSlot::new(
        ctx.accounts.registry.to_account_info(),
        ctx.program_id,
        ctx.bumps.registry,
    )
    .refunding(admin.to_account_info());

    let event = machine::close(&mut slot, &Authority::deployed(), admin.key())?;

    msg!(
        "Registry closed, {} lamports returned to {}",
        event.reclaimed_lamports,
        event.admin
    );
    emit!(event);

    Ok(())
}

#[derive(Accounts)]
pub struct CloseRegistryCtx<'info> {
    /// CHECK: may hold an older layout; the handler decides who can close it
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: UncheckedAccount<'info>,

    // Receives the rent deposit
    #[account(mut)]
    pub admin: Signer<'info>,
}
