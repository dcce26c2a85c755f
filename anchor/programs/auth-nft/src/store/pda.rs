use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Allocate, Assign, CreateAccount, Transfer};

use crate::constants::REGISTRY_SEED;
use crate::errors::ErrorCode;
use crate::states::Registry;
use crate::store::{decode, encode, RegistrySlot, SlotState};

/// Registry slot backed by the PDA account passed to an instruction.
///
/// Allocation needs a payer and the system program (`funded_by`); release
/// needs the account that receives the deposit (`refunding`).
pub struct AccountSlot<'a, 'info> {
    account: AccountInfo<'info>,
    program_id: &'a Pubkey,
    bump: u8,
    payer: Option<AccountInfo<'info>>,
    system_program: Option<AccountInfo<'info>>,
    refund_to: Option<AccountInfo<'info>>,
}

impl<'a, 'info> AccountSlot<'a, 'info> {
    pub fn new(account: AccountInfo<'info>, program_id: &'a Pubkey, bump: u8) -> Self {
        Self {
            account,
            program_id,
            bump,
            payer: None,
            system_program: None,
            refund_to: None,
        }
    }

    pub fn funded_by(
        mut self,
        payer: AccountInfo<'info>,
        system_program: AccountInfo<'info>,
    ) -> Self {
        self.payer = Some(payer);
        self.system_program = Some(system_program);
        self
    }

    pub fn refunding(mut self, recipient: AccountInfo<'info>) -> Self {
        self.refund_to = Some(recipient);
        self
    }

    // Mirrors what Anchor's `init` does, including the case where someone
    // pre-funded the PDA to block a plain `create_account`.
    fn allocate(&self) -> Result<()> {
        let payer = self.payer.clone().ok_or(ProgramError::NotEnoughAccountKeys)?;
        let system = self
            .system_program
            .clone()
            .ok_or(ProgramError::NotEnoughAccountKeys)?;

        let bump = [self.bump];
        let seeds: &[&[u8]] = &[REGISTRY_SEED, &bump];
        let signer = &[seeds];

        let space = Registry::SPACE;
        let required = Rent::get()?.minimum_balance(space);
        let current = self.account.lamports();

        if current == 0 {
            system_program::create_account(
                CpiContext::new_with_signer(
                    system,
                    CreateAccount {
                        from: payer,
                        to: self.account.clone(),
                    },
                    signer,
                ),
                required,
                space as u64,
                self.program_id,
            )?;
            return Ok(());
        }

        let top_up = required.saturating_sub(current);
        if top_up > 0 {
            system_program::transfer(
                CpiContext::new(
                    system.clone(),
                    Transfer {
                        from: payer,
                        to: self.account.clone(),
                    },
                ),
                top_up,
            )?;
        }

        system_program::allocate(
            CpiContext::new_with_signer(
                system.clone(),
                Allocate {
                    account_to_allocate: self.account.clone(),
                },
                signer,
            ),
            space as u64,
        )?;

        system_program::assign(
            CpiContext::new_with_signer(
                system,
                Assign {
                    account_to_assign: self.account.clone(),
                },
                signer,
            ),
            self.program_id,
        )
    }
}

impl<'a, 'info> RegistrySlot for AccountSlot<'a, 'info> {
    fn inspect(&self) -> Result<SlotState> {
        if self.account.owner == &system_program::ID && self.account.data_is_empty() {
            return Ok(SlotState::Vacant);
        }
        if self.account.owner != self.program_id {
            return Ok(SlotState::Unreadable);
        }

        let data = self.account.try_borrow_data()?;
        Ok(match decode(&data) {
            Ok(record) => SlotState::Active(record),
            Err(_) => SlotState::Unreadable,
        })
    }

    fn create(&mut self, record: &Registry) -> Result<()> {
        self.allocate()?;
        self.save(record)
    }

    fn save(&mut self, record: &Registry) -> Result<()> {
        let bytes = encode(record)?;
        let mut data = self.account.try_borrow_mut_data()?;
        require_gte!(data.len(), bytes.len(), ErrorCode::CorruptOrWrongVersion);

        data[..bytes.len()].copy_from_slice(&bytes);
        Ok(())
    }

    fn release(&mut self) -> Result<u64> {
        let recipient = self
            .refund_to
            .clone()
            .ok_or(ProgramError::NotEnoughAccountKeys)?;

        let reclaimed = drain_lamports(&self.account, &recipient)?;

        self.account.assign(&system_program::ID);
        self.account.realloc(0, false)?;

        Ok(reclaimed)
    }
}

/// Moves every lamport held by `from` into `to`, returning the amount moved.
fn drain_lamports(from: &AccountInfo, to: &AccountInfo) -> Result<u64> {
    let amount = from.lamports();
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(ProgramError::ArithmeticOverflow)?;

    **to.try_borrow_mut_lamports()? = credited;
    **from.try_borrow_mut_lamports()? = 0;

    Ok(amount)
}
