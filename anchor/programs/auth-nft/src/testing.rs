//! In-memory stand-ins for the registry account and the token programs.

use std::collections::{HashMap, HashSet};

use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::issuance::{CertificateDescription, TokenLedger, TokenMetadata};
use crate::states::Registry;
use crate::store::{decode, encode, RegistrySlot, SlotState};

pub fn key(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

pub fn assert_error<T>(result: Result<T>, expected: ErrorCode) {
    match result {
        Ok(_) => panic!("expected an error, call succeeded"),
        Err(err) => assert_eq!(err, Error::from(expected)),
    }
}

#[derive(Default)]
pub struct MemorySlot {
    data: Option<Vec<u8>>,
    lamports: u64,
}

impl MemorySlot {
    pub fn with_bytes(data: Vec<u8>) -> Self {
        let lamports = Rent::default().minimum_balance(data.len());
        Self {
            data: Some(data),
            lamports,
        }
    }

    pub fn bytes(&self) -> Option<&[u8]> {
        self.data.as_deref()
    }

    pub fn record(&self) -> Option<Registry> {
        self.data.as_deref().and_then(|data| decode(data).ok())
    }

    pub fn lamports(&self) -> u64 {
        self.lamports
    }
}

impl RegistrySlot for MemorySlot {
    fn inspect(&self) -> Result<SlotState> {
        Ok(match self.data.as_deref() {
            None => SlotState::Vacant,
            Some(data) => match decode(data) {
                Ok(record) => SlotState::Active(record),
                Err(_) => SlotState::Unreadable,
            },
        })
    }

    fn create(&mut self, record: &Registry) -> Result<()> {
        if self.data.is_some() {
            return Err(ProgramError::AccountAlreadyInitialized.into());
        }
        self.data = Some(encode(record)?);
        self.lamports = Rent::default().minimum_balance(Registry::SPACE);
        Ok(())
    }

    fn save(&mut self, record: &Registry) -> Result<()> {
        if self.data.is_none() {
            return Err(ProgramError::UninitializedAccount.into());
        }
        self.data = Some(encode(record)?);
        Ok(())
    }

    fn release(&mut self) -> Result<u64> {
        self.data = None;
        Ok(std::mem::take(&mut self.lamports))
    }
}

/// Token ledger that tracks supply, balances and metadata per mint.
#[derive(Default)]
pub struct MemoryLedger {
    pub supply: HashMap<Pubkey, u64>,
    pub balances: HashMap<(Pubkey, Pubkey), u64>,
    pub metadata: HashMap<Pubkey, TokenMetadata>,
    pub sealed: HashSet<Pubkey>,
    pub descriptions: Vec<CertificateDescription>,
    pub fail_metadata: bool,
}

impl MemoryLedger {
    pub fn balance(&self, mint: &Pubkey, owner: &Pubkey) -> u64 {
        self.balances.get(&(*mint, *owner)).copied().unwrap_or(0)
    }

    pub fn tokens_held_by(&self, owner: &Pubkey) -> u64 {
        self.balances
            .iter()
            .filter(|((_, holder), _)| holder == owner)
            .map(|(_, amount)| amount)
            .sum()
    }
}

impl TokenLedger for MemoryLedger {
    fn mint_unit(&mut self, mint: &Pubkey, owner: &Pubkey) -> Result<()> {
        if self.supply.contains_key(mint) {
            return Err(ProgramError::AccountAlreadyInitialized.into());
        }
        self.supply.insert(*mint, 1);
        *self.balances.entry((*mint, *owner)).or_default() += 1;
        Ok(())
    }

    fn attach_metadata(&mut self, mint: &Pubkey, metadata: &TokenMetadata) -> Result<()> {
        if self.fail_metadata {
            return Err(ProgramError::InvalidAccountData.into());
        }
        self.metadata.insert(*mint, metadata.clone());
        Ok(())
    }

    fn seal_supply(&mut self, mint: &Pubkey) -> Result<()> {
        if self.supply.get(mint) != Some(&1) {
            return Err(ProgramError::InvalidArgument.into());
        }
        self.sealed.insert(*mint);
        Ok(())
    }

    fn record_description(&mut self, description: &CertificateDescription) -> Result<()> {
        self.descriptions.push(description.clone());
        Ok(())
    }
}
