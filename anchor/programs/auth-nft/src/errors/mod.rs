use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Signer is not allowed to perform this action")]
    Unauthorized,

    #[msg("The registry has already been initialized")]
    AlreadyInitialized,

    #[msg("The registry has not been initialized")]
    NotInitialized,

    #[msg("Verifier is already in the registry")]
    AlreadyPresent,

    #[msg("Verifier is not in the registry")]
    NotFound,

    #[msg("Registry account has an unknown layout or is corrupt")]
    CorruptOrWrongVersion,

    #[msg("Verifier list is full")]
    TooManyVerifiers,

    #[msg("Required field cannot be empty")]
    EmptyRequiredField,

    #[msg("Maximum product id length is 64")]
    ProductIdTooLong,

    #[msg("Maximum brand length is 64")]
    BrandTooLong,

    #[msg("Maximum category length is 64")]
    CategoryTooLong,

    #[msg("Maximum metadata URI length is 200")]
    MetadataUriTooLong,

    #[msg("Metadata URI must start with https://, ipfs:// or ar://")]
    InvalidMetadataUri,
}
