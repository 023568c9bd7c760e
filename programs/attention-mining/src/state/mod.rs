// =============================================================================
// ATTENTION MINING STATE MODULE
// =============================================================================
//
// Account layouts and the economic rules that operate on them. Everything in
// here is plain data plus pure functions over `&mut` records and an explicit
// `height`; instruction handlers load accounts, call into these, and the
// runtime persists the records only when the call succeeds.
//
// Architecture (leaf-first):
// - ProtocolState: authority, parameters, supply accounting
// - UserProfile + ledger: balances, reputation, mint/transfer/burn
// - ValidatorStake: stake escrow and slashing
// - ContentItem: submissions, quorum validation, settlement
// - Campaign: escrowed reward pools and attention payouts
// - Proposal + VoteRecord: token-weighted parameter governance
// =============================================================================

pub mod protocol;
pub mod profile;
pub mod ledger;
pub mod validator;
pub mod content;
pub mod campaign;
pub mod governance;

pub use protocol::*;
pub use profile::*;
pub use validator::*;
pub use content::*;
pub use campaign::*;
pub use governance::*;
