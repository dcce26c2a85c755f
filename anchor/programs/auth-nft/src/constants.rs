use anchor_lang::prelude::*;

pub const ANCHOR_DISCRIMINATOR_SIZE: usize = 8;

// The only key allowed to initialize the registry. Baked into the build so
// `initialize` can never take the admin from instruction data.
// 2LY2VTc5MjFW2wvJiMpuNZABWyScjfZw5pK8fXd9tPfp
pub const ADMIN: Pubkey = Pubkey::new_from_array([
    19, 220, 205, 156, 156, 0, 85, 129, 38, 173, 242, 255, 107, 96, 183, 80, 198, 172, 50, 131,
    224, 15, 153, 118, 6, 169, 62, 197, 156, 159, 84, 91,
]);

pub const REGISTRY_SEED: &[u8] = b"state";
pub const CERTIFICATE_SEED: &[u8] = b"certificate";

pub const MAX_VERIFIERS: usize = 32;

pub const MAX_PRODUCT_ID_LEN: usize = 64;
pub const MAX_BRAND_LEN: usize = 64;
pub const MAX_CATEGORY_LEN: usize = 64;

// Metaplex limits
pub const MAX_METADATA_URI_LEN: usize = 200;
pub const MAX_NAME_LEN: usize = 32;

pub const CERTIFICATE_NAME_PREFIX: &str = "AuthNFT - ";
pub const CERTIFICATE_SYMBOL: &str = "AUTHNFT";

pub const ALLOWED_URI_SCHEMES: [&str; 3] = ["https://", "ipfs://", "ar://"];
