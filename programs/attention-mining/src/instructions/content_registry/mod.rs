pub mod submit_content;
pub mod validate_content;
pub mod settle_validation;

pub use submit_content::*;
pub use validate_content::*;
pub use settle_validation::*;
