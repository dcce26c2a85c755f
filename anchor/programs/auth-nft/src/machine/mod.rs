//! Registry transitions: `Uninitialized -> Active -> Closed (-> Active ...)`.
//!
//! Each function authorizes, validates, and only then writes to the slot, so
//! a failed call leaves the stored record untouched.

use anchor_lang::prelude::*;

use crate::auth::{require_admin, Authority};
use crate::errors::ErrorCode;
use crate::events::{RegistryClosed, RegistryInitialized, VerifierAdded, VerifierRemoved};
use crate::states::Registry;
use crate::store::{RegistrySlot, SlotState};

pub fn initialize<S: RegistrySlot>(
    slot: &mut S,
    authority: &Authority,
    caller: Pubkey,
    first_verifier: Pubkey,
) -> Result<RegistryInitialized> {
    authority.require_deployment_admin(&caller)?;

    if slot.inspect()? != SlotState::Vacant {
        return err!(ErrorCode::AlreadyInitialized);
    }

    slot.create(&Registry::new(caller, first_verifier))?;

    Ok(RegistryInitialized {
        admin: caller,
        first_verifier,
    })
}

pub fn add_verifier<S: RegistrySlot>(
    slot: &mut S,
    caller: Pubkey,
    verifier: Pubkey,
) -> Result<VerifierAdded> {
    let mut record = slot.load_active()?;
    require_admin(&caller, &record)?;

    record.add_verifier(verifier)?;
    slot.save(&record)?;

    Ok(VerifierAdded {
        admin: caller,
        verifier,
    })
}

pub fn remove_verifier<S: RegistrySlot>(
    slot: &mut S,
    caller: Pubkey,
    verifier: Pubkey,
) -> Result<VerifierRemoved> {
    let mut record = slot.load_active()?;
    require_admin(&caller, &record)?;

    record.remove_verifier(&verifier)?;
    slot.save(&record)?;

    Ok(VerifierRemoved {
        admin: caller,
        verifier,
    })
}

/// Destroys the record and hands its deposit back to the admin.
///
/// A record that no longer decodes (older layout) has no readable admin, so
/// the deployment admin is checked instead. This is the only way to clear
/// such an account and initialize again.
pub fn close<S: RegistrySlot>(
    slot: &mut S,
    authority: &Authority,
    caller: Pubkey,
) -> Result<RegistryClosed> {
    match slot.inspect()? {
        SlotState::Active(record) => require_admin(&caller, &record)?,
        SlotState::Unreadable => authority.require_deployment_admin(&caller)?,
        SlotState::Vacant => return err!(ErrorCode::NotInitialized),
    }

    let reclaimed_lamports = slot.release()?;

    Ok(RegistryClosed {
        admin: caller,
        reclaimed_lamports,
    })
}
