pub mod initialize;
pub mod add_verifier;
pub mod remove_verifier;
pub mod close_registry;
pub mod issue_certificate;

pub use initialize::*;
pub use add_verifier::*;
pub use remove_verifier::*;
pub use close_registry::*;
pub use issue_certificate::*;
