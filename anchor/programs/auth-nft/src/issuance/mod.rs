//! Certificate issuance: a verifier mints a one-of-one token to an owner and
//! binds it to product attributes.

use anchor_lang::prelude::*;

use crate::auth::require_verifier;
use crate::constants::{
    ALLOWED_URI_SCHEMES, CERTIFICATE_NAME_PREFIX, CERTIFICATE_SYMBOL, MAX_BRAND_LEN,
    MAX_CATEGORY_LEN, MAX_METADATA_URI_LEN, MAX_NAME_LEN, MAX_PRODUCT_ID_LEN,
};
use crate::errors::ErrorCode;
use crate::events::CertificateIssued;
use crate::store::RegistrySlot;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateAttributes {
    pub product_id: String,
    pub brand: String,
    pub category: String,
}

impl CertificateAttributes {
    pub fn validate(&self) -> Result<()> {
        require!(
            !self.product_id.is_empty() && !self.brand.is_empty() && !self.category.is_empty(),
            ErrorCode::EmptyRequiredField
        );
        require!(
            self.product_id.len() <= MAX_PRODUCT_ID_LEN,
            ErrorCode::ProductIdTooLong
        );
        require!(self.brand.len() <= MAX_BRAND_LEN, ErrorCode::BrandTooLong);
        require!(
            self.category.len() <= MAX_CATEGORY_LEN,
            ErrorCode::CategoryTooLong
        );
        Ok(())
    }

    /// Token name shown by wallets, cut to the metadata program's limit.
    pub fn display_name(&self) -> String {
        let mut name = format!("{CERTIFICATE_NAME_PREFIX}{} {}", self.brand, self.product_id);
        if name.len() > MAX_NAME_LEN {
            let mut end = MAX_NAME_LEN;
            while !name.is_char_boundary(end) {
                end -= 1;
            }
            name.truncate(end);
        }
        name
    }
}

pub fn validate_metadata_uri(uri: &str) -> Result<()> {
    require!(!uri.is_empty(), ErrorCode::EmptyRequiredField);
    require!(
        uri.len() <= MAX_METADATA_URI_LEN,
        ErrorCode::MetadataUriTooLong
    );
    require!(
        ALLOWED_URI_SCHEMES
            .iter()
            .any(|scheme| uri.starts_with(scheme)),
        ErrorCode::InvalidMetadataUri
    );
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub uri: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CertificateDescription {
    pub mint: Pubkey,
    pub verifier: Pubkey,
    pub owner: Pubkey,
    pub attributes: CertificateAttributes,
    pub metadata_uri: String,
    pub issued_at: i64,
}

/// The token programs a certificate is created through. Calls arrive in the
/// order they are declared here.
pub trait TokenLedger {
    /// Puts exactly one unit of `mint` in `owner`'s holding account.
    fn mint_unit(&mut self, mint: &Pubkey, owner: &Pubkey) -> Result<()>;

    fn attach_metadata(&mut self, mint: &Pubkey, metadata: &TokenMetadata) -> Result<()>;

    /// Fixes supply at its current value of one.
    fn seal_supply(&mut self, mint: &Pubkey) -> Result<()>;

    fn record_description(&mut self, description: &CertificateDescription) -> Result<()>;
}

#[derive(Clone, Debug)]
pub struct IssueRequest {
    pub verifier: Pubkey,
    pub owner: Pubkey,
    pub mint: Pubkey,
    pub attributes: CertificateAttributes,
    pub metadata_uri: String,
}

pub fn issue<S: RegistrySlot, L: TokenLedger>(
    slot: &S,
    ledger: &mut L,
    request: IssueRequest,
    issued_at: i64,
) -> Result<CertificateIssued> {
    let record = slot.load_active()?;
    require_verifier(&request.verifier, &record)?;

    request.attributes.validate()?;
    validate_metadata_uri(&request.metadata_uri)?;

    let metadata = TokenMetadata {
        name: request.attributes.display_name(),
        symbol: CERTIFICATE_SYMBOL.to_string(),
        uri: request.metadata_uri.clone(),
    };

    ledger.mint_unit(&request.mint, &request.owner)?;
    ledger.attach_metadata(&request.mint, &metadata)?;
    ledger.seal_supply(&request.mint)?;

    let IssueRequest {
        verifier,
        owner,
        mint,
        attributes,
        metadata_uri,
    } = request;

    ledger.record_description(&CertificateDescription {
        mint,
        verifier,
        owner,
        attributes: attributes.clone(),
        metadata_uri: metadata_uri.clone(),
        issued_at,
    })?;

    Ok(CertificateIssued {
        verifier,
        owner,
        mint,
        product_id: attributes.product_id,
        brand: attributes.brand,
        category: attributes.category,
        metadata_uri,
        timestamp: issued_at,
    })
}
