//! Role checks. Every handler runs these before touching any account data.

use anchor_lang::prelude::*;

use crate::constants::ADMIN;
use crate::errors::ErrorCode;
use crate::states::Registry;

/// The admin identity a deployment was built with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Authority {
    admin: Pubkey,
}

impl Authority {
    pub const fn new(admin: Pubkey) -> Self {
        Self { admin }
    }

    pub const fn deployed() -> Self {
        Self::new(ADMIN)
    }

    #[cfg(test)]
    pub fn admin(&self) -> Pubkey {
        self.admin
    }

    pub fn require_deployment_admin(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.admin, ErrorCode::Unauthorized);
        Ok(())
    }
}

pub fn require_admin(caller: &Pubkey, record: &Registry) -> Result<()> {
    require_keys_eq!(*caller, record.admin, ErrorCode::Unauthorized);
    Ok(())
}

pub fn require_verifier(caller: &Pubkey, record: &Registry) -> Result<()> {
    require!(record.is_verifier(caller), ErrorCode::Unauthorized);
    Ok(())
}
