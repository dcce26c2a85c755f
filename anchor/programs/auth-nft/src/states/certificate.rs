use anchor_lang::prelude::*;

use crate::constants::{
    MAX_BRAND_LEN, MAX_CATEGORY_LEN, MAX_METADATA_URI_LEN, MAX_PRODUCT_ID_LEN,
};

/// On-chain description of an issued certificate, written once at issuance.
#[account]
#[derive(InitSpace)]
pub struct CertificateRecord {
    pub mint: Pubkey,
    pub verifier: Pubkey,
    // First holder; later transfers do not update this.
    pub owner: Pubkey,
    #[max_len(MAX_PRODUCT_ID_LEN)]
    pub product_id: String,
    #[max_len(MAX_BRAND_LEN)]
    pub brand: String,
    #[max_len(MAX_CATEGORY_LEN)]
    pub category: String,
    #[max_len(MAX_METADATA_URI_LEN)]
    pub metadata_uri: String,
    pub issued_at: i64,
    pub bump: u8,
}
