pub mod initialize_protocol;
pub mod set_authority;
pub mod token_ledger;
pub mod validator_pool;
pub mod content_registry;
pub mod campaign_manager;
pub mod governance;

pub use initialize_protocol::*;
pub use set_authority::*;
pub use token_ledger::*;
pub use validator_pool::*;
pub use content_registry::*;
pub use campaign_manager::*;
pub use governance::*;
