//! Storage of the singleton registry record.
//!
//! The record lives at a PDA derived from `REGISTRY_SEED` and the program id.
//! Its layout is the Anchor discriminator of [`Registry`], the admin key, a
//! little-endian `u32` count and the verifier keys, zero padded up to
//! [`Registry::SPACE`]. The discriminator doubles as the layout version and is
//! checked before any field is read.

use anchor_lang::prelude::*;
use anchor_lang::Discriminator;

use crate::constants::{ANCHOR_DISCRIMINATOR_SIZE, CERTIFICATE_SEED, REGISTRY_SEED};
use crate::errors::ErrorCode;
use crate::states::Registry;

pub mod pda;

pub use pda::AccountSlot;

/// What currently occupies the registry address.
#[derive(Debug, PartialEq, Eq)]
pub enum SlotState {
    Vacant,
    Active(Registry),
    /// Something lives there but it does not decode as a current `Registry`.
    Unreadable,
}

pub trait RegistrySlot {
    fn inspect(&self) -> Result<SlotState>;

    /// Allocates the slot and writes the first record. Only valid when vacant.
    fn create(&mut self, record: &Registry) -> Result<()>;

    fn save(&mut self, record: &Registry) -> Result<()>;

    /// Deallocates the slot, returning the reclaimed deposit in lamports.
    fn release(&mut self) -> Result<u64>;

    fn load_active(&self) -> Result<Registry> {
        match self.inspect()? {
            SlotState::Active(record) => Ok(record),
            SlotState::Vacant => err!(ErrorCode::NotInitialized),
            SlotState::Unreadable => err!(ErrorCode::CorruptOrWrongVersion),
        }
    }
}

pub fn decode(data: &[u8]) -> Result<Registry> {
    require_gte!(
        data.len(),
        ANCHOR_DISCRIMINATOR_SIZE,
        ErrorCode::CorruptOrWrongVersion
    );

    let (tag, mut body) = data.split_at(ANCHOR_DISCRIMINATOR_SIZE);
    require!(
        tag == &Registry::DISCRIMINATOR[..],
        ErrorCode::CorruptOrWrongVersion
    );

    let record = Registry::deserialize(&mut body)
        .map_err(|_| error!(ErrorCode::CorruptOrWrongVersion))?;
    require!(record.is_well_formed(), ErrorCode::CorruptOrWrongVersion);

    Ok(record)
}

/// Serializes `record` into a buffer of exactly `Registry::SPACE` bytes.
pub fn encode(record: &Registry) -> Result<Vec<u8>> {
    let mut data = Vec::with_capacity(Registry::SPACE);
    record.try_serialize(&mut data)?;
    require_gte!(
        Registry::SPACE,
        data.len(),
        ErrorCode::TooManyVerifiers
    );

    data.resize(Registry::SPACE, 0);
    Ok(data)
}

pub fn registry_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[REGISTRY_SEED], program_id)
}

pub fn certificate_address(program_id: &Pubkey, mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CERTIFICATE_SEED, mint.as_ref()], program_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_error, key};

    #[test]
    fn round_trip_keeps_admin_and_order() {
        let mut record = Registry::new(key(1), key(2));
        record.add_verifier(key(3)).unwrap();

        let bytes = encode(&record).unwrap();
        let decoded = decode(&bytes).unwrap();

        assert_eq!(decoded.admin, key(1));
        assert_eq!(decoded.verifiers, vec![key(2), key(3)]);
    }

    #[test]
    fn layout_is_tag_admin_then_counted_keys() {
        let mut record = Registry::new(key(1), key(2));
        record.add_verifier(key(3)).unwrap();
        let bytes = encode(&record).unwrap();

        assert_eq!(bytes.len(), Registry::SPACE);
        assert_eq!(&bytes[..8], &Registry::DISCRIMINATOR[..]);
        assert_eq!(&bytes[8..40], key(1).as_ref());
        assert_eq!(&bytes[40..44], &2u32.to_le_bytes());
        assert_eq!(&bytes[44..76], key(2).as_ref());
        assert_eq!(&bytes[76..108], key(3).as_ref());
        assert!(bytes[108..].iter().all(|b| *b == 0));
    }

    #[test]
    fn wrong_tag_is_rejected() {
        let mut bytes = encode(&Registry::new(key(1), key(2))).unwrap();
        bytes[0] ^= 0xff;
        assert_error(decode(&bytes), ErrorCode::CorruptOrWrongVersion);
    }

    #[test]
    fn legacy_single_verifier_layout_is_rejected() {
        // Older deployments stored only `State { verifier }`.
        let legacy_tag = anchor_lang::solana_program::hash::hash(b"account:State").to_bytes();
        let mut bytes = legacy_tag[..8].to_vec();
        bytes.extend_from_slice(key(9).as_ref());

        assert_error(decode(&bytes), ErrorCode::CorruptOrWrongVersion);
    }

    #[test]
    fn truncated_data_is_rejected() {
        let bytes = encode(&Registry::new(key(1), key(2))).unwrap();
        assert_error(decode(&bytes[..5]), ErrorCode::CorruptOrWrongVersion);
        assert_error(decode(&bytes[..60]), ErrorCode::CorruptOrWrongVersion);
        assert_error(decode(&[]), ErrorCode::CorruptOrWrongVersion);
    }

    #[test]
    fn duplicated_verifiers_on_disk_are_rejected() {
        let record = Registry {
            admin: key(1),
            verifiers: vec![key(2), key(2)],
        };
        let bytes = encode(&record).unwrap();
        assert_error(decode(&bytes), ErrorCode::CorruptOrWrongVersion);
    }

    #[test]
    fn addresses_are_deterministic() {
        let program_id = crate::ID;
        assert_eq!(registry_address(&program_id), registry_address(&program_id));

        let (registry, _) = registry_address(&program_id);
        let (certificate, _) = certificate_address(&program_id, &key(5));
        assert_ne!(registry, certificate);
        assert_ne!(certificate, certificate_address(&program_id, &key(6)).0);
    }
}
