use anchor_lang::prelude::*;

use crate::constants::{ANCHOR_DISCRIMINATOR_SIZE, MAX_VERIFIERS};
use crate::errors::ErrorCode;

/// Singleton registry of the admin and the verifiers allowed to issue
/// certificates. Lives at the `REGISTRY_SEED` PDA.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Registry {
    pub admin: Pubkey,
    #[max_len(MAX_VERIFIERS)]
    pub verifiers: Vec<Pubkey>,
}

impl Registry {
    /// Bytes reserved for the account, tag included.
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR_SIZE + Registry::INIT_SPACE;

    pub fn new(admin: Pubkey, first_verifier: Pubkey) -> Self {
        Self {
            admin,
            verifiers: vec![first_verifier],
        }
    }

    pub fn is_verifier(&self, identity: &Pubkey) -> bool {
        self.verifiers.contains(identity)
    }

    pub fn add_verifier(&mut self, identity: Pubkey) -> Result<()> {
        require!(!self.is_verifier(&identity), ErrorCode::AlreadyPresent);
        require!(
            self.verifiers.len() < MAX_VERIFIERS,
            ErrorCode::TooManyVerifiers
        );

        self.verifiers.push(identity);
        Ok(())
    }

    pub fn remove_verifier(&mut self, identity: &Pubkey) -> Result<()> {
        let position = self
            .verifiers
            .iter()
            .position(|v| v == identity)
            .ok_or(ErrorCode::NotFound)?;

        self.verifiers.remove(position);
        Ok(())
    }

    /// Checks the invariants a freshly decoded record must satisfy.
    pub(crate) fn is_well_formed(&self) -> bool {
        if self.verifiers.len() > MAX_VERIFIERS {
            return false;
        }
        self.verifiers
            .iter()
            .enumerate()
            .all(|(i, v)| !self.verifiers[..i].contains(v))
    }
}
