use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::metadata::mpl_token_metadata::types::DataV2;
use anchor_spl::metadata::{
    create_master_edition_v3, create_metadata_accounts_v3, CreateMasterEditionV3,
    CreateMetadataAccountsV3, Metadata,
};
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};

use crate::constants::{ANCHOR_DISCRIMINATOR_SIZE, CERTIFICATE_SEED, REGISTRY_SEED};
use crate::issuance::{
    self, CertificateAttributes, CertificateDescription, IssueRequest, TokenLedger, TokenMetadata,
};
use crate::states::CertificateRecord;
use crate::store::AccountSlot;

pub fn issue_certificate(
    ctx: Context<IssueCertificateCtx>,
    product_id: String,
    brand: String,
    category: String,
    metadata_uri: String,
) -> Result<()> {
    let issued_at = Clock::get()?.unix_timestamp;

    let slot = AccountSlot::new(
        ctx.accounts.registry.to_account_info(),
        ctx.program_id,
        ctx.bumps.registry,
    );

    let request = IssueRequest {
        verifier: ctx.accounts.verifier.key(),
        owner: ctx.accounts.owner.key(),
        mint: ctx.accounts.mint.key(),
        attributes: CertificateAttributes {
            product_id,
            brand,
            category,
        },
        metadata_uri,
    };

    let mut ledger = SplLedger {
        registry_bump: ctx.bumps.registry,
        certificate_bump: ctx.bumps.certificate,
        accounts: ctx.accounts,
    };

    let event = issuance::issue(&slot, &mut ledger, request, issued_at)?;

    msg!(
        "Certificate {} for {} issued to {} by {}",
        event.mint,
        event.product_id,
        event.owner,
        event.verifier
    );
    emit!(event);

    Ok(())
}

#[derive(Accounts)]
pub struct IssueCertificateCtx<'info> {
    /// CHECK: decoded by the handler; also the mint and update authority
    #[account(
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: UncheckedAccount<'info>,

    #[account(mut)]
    pub verifier: Signer<'info>,

    /// CHECK: any wallet may receive a certificate
    pub owner: UncheckedAccount<'info>,

    // Fresh keypair per certificate; `init` fails if the address is taken.
    #[account(
        init,
        payer = verifier,
        mint::decimals = 0,
        mint::authority = registry,
        mint::freeze_authority = registry
    )]
    pub mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = verifier,
        associated_token::mint = mint,
        associated_token::authority = owner
    )]
    pub owner_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = verifier,
        space = ANCHOR_DISCRIMINATOR_SIZE + CertificateRecord::INIT_SPACE,
        seeds = [
            CERTIFICATE_SEED,
            mint.key().as_ref()
        ],
        bump
    )]
    pub certificate: Box<Account<'info, CertificateRecord>>,

    /// CHECK: derived and checked by the token metadata program
    #[account(mut)]
    pub metadata: UncheckedAccount<'info>,

    /// CHECK: derived and checked by the token metadata program
    #[account(mut)]
    pub master_edition: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub token_metadata_program: Program<'info, Metadata>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

/// Issues through SPL Token and Metaplex, signing as the registry PDA.
struct SplLedger<'a, 'info> {
    accounts: &'a mut IssueCertificateCtx<'info>,
    registry_bump: u8,
    certificate_bump: u8,
}

// The mint and the holder's token account are pinned by the account
// constraints above, so the keys passed in are not re-checked here.
impl<'a, 'info> TokenLedger for SplLedger<'a, 'info> {
    fn mint_unit(&mut self, _mint: &Pubkey, _owner: &Pubkey) -> Result<()> {
        let bump = [self.registry_bump];
        let seeds: &[&[u8]] = &[REGISTRY_SEED, &bump];
        let accounts = &self.accounts;

        token::mint_to(
            CpiContext::new_with_signer(
                accounts.token_program.to_account_info(),
                MintTo {
                    mint: accounts.mint.to_account_info(),
                    to: accounts.owner_token_account.to_account_info(),
                    authority: accounts.registry.to_account_info(),
                },
                &[seeds],
            ),
            1,
        )
    }

    fn attach_metadata(&mut self, _mint: &Pubkey, metadata: &TokenMetadata) -> Result<()> {
        let bump = [self.registry_bump];
        let seeds: &[&[u8]] = &[REGISTRY_SEED, &bump];
        let accounts = &self.accounts;

        create_metadata_accounts_v3(
            CpiContext::new_with_signer(
                accounts.token_metadata_program.to_account_info(),
                CreateMetadataAccountsV3 {
                    metadata: accounts.metadata.to_account_info(),
                    mint: accounts.mint.to_account_info(),
                    mint_authority: accounts.registry.to_account_info(),
                    payer: accounts.verifier.to_account_info(),
                    update_authority: accounts.registry.to_account_info(),
                    system_program: accounts.system_program.to_account_info(),
                    rent: accounts.rent.to_account_info(),
                },
                &[seeds],
            ),
            DataV2 {
                name: metadata.name.clone(),
                symbol: metadata.symbol.clone(),
                uri: metadata.uri.clone(),
                seller_fee_basis_points: 0,
                creators: None,
                collection: None,
                uses: None,
            },
            false, // immutable
            true,
            None,
        )
    }

    fn seal_supply(&mut self, _mint: &Pubkey) -> Result<()> {
        let bump = [self.registry_bump];
        let seeds: &[&[u8]] = &[REGISTRY_SEED, &bump];
        let accounts = &self.accounts;

        create_master_edition_v3(
            CpiContext::new_with_signer(
                accounts.token_metadata_program.to_account_info(),
                CreateMasterEditionV3 {
                    edition: accounts.master_edition.to_account_info(),
                    mint: accounts.mint.to_account_info(),
                    update_authority: accounts.registry.to_account_info(),
                    mint_authority: accounts.registry.to_account_info(),
                    payer: accounts.verifier.to_account_info(),
                    metadata: accounts.metadata.to_account_info(),
                    token_program: accounts.token_program.to_account_info(),
                    system_program: accounts.system_program.to_account_info(),
                    rent: accounts.rent.to_account_info(),
                },
                &[seeds],
            ),
            Some(0),
        )
    }

    fn record_description(&mut self, description: &CertificateDescription) -> Result<()> {
        let certificate = &mut self.accounts.certificate;

        certificate.mint = description.mint;
        certificate.verifier = description.verifier;
        certificate.owner = description.owner;
        certificate.product_id = description.attributes.product_id.clone();
        certificate.brand = description.attributes.brand.clone();
        certificate.category = description.attributes.category.clone();
        certificate.metadata_uri = description.metadata_uri.clone();
        certificate.issued_at = description.issued_at;
        certificate.bump = self.certificate_bump;

        Ok(())
    }
}
