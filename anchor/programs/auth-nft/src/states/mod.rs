pub mod registry;
pub mod certificate;

pub use registry::*;
pub use certificate::*;
