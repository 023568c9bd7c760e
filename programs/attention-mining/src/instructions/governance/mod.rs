pub mod create_proposal;
pub mod vote_on_proposal;
pub mod resolve_proposal;
pub mod execute_proposal;

pub use create_proposal::*;
pub use vote_on_proposal::*;
pub use resolve_proposal::*;
pub use execute_proposal::*;
