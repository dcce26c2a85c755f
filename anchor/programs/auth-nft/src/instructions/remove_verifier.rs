use anchor_lang::prelude::*;

use crate::instructions::ManageVerifierCtx;
use crate::machine;
use crate::store::AccountSlot;

pub fn remove_verifier(ctx: Context<ManageVerifierCtx>, verifier: Pubkey) -> Result<()> {
    let mut slot = AccountSlot::new(
        ctx.accounts.registry.to_account_info(),
        ctx.program_id,
        ctx.bumps.registry,
    );

    let event = machine::remove_verifier(&mut slot, ctx.accounts.admin.key(), verifier)?;

    msg!("Verifier {} removed", event.verifier);
    emit!(event);

    Ok(())
}
