//! JWT issuance and verification.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::{Claims, ClaimsUser};
pub use decoder::JwtDecoder;
pub use encoder::JwtEncoder;
