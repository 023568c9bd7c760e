pub mod become_validator;
pub mod unstake;
pub mod slash_validator;

pub use become_validator::*;
pub use unstake::*;
pub use slash_validator::*;
