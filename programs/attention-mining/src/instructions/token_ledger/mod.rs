pub mod ensure_profile;
pub mod mint_tokens;
pub mod transfer_tokens;
pub mod burn_tokens;

pub use ensure_profile::*;
pub use mint_tokens::*;
pub use transfer_tokens::*;
pub use burn_tokens::*;
