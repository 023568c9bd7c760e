pub mod create_campaign;
pub mod record_attention;
pub mod close_campaign;

pub use create_campaign::*;
pub use record_attention::*;
pub use close_campaign::*;
