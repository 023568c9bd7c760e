use anchor_lang::prelude::*;

pub mod errors;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{
    ContentStatus, ParameterChange, ProposalStatus, ProtocolParams, SettlementOutcome,
    TargetMetric, VoteTally,
};

declare_id!("AttnMining9Pr8tocoLv1HeightDrivenLedgerXk4Q");

#[program]
pub mod attention_mining {
    use super::*;

    // === Protocol Administration ===

    /// Create the protocol singleton with the signer as authority
    pub fn initialize_protocol(
        ctx: Context<InitializeProtocol>,
        params: ProtocolParams,
    ) -> Result<()> {
        instructions::initialize_protocol::handler(ctx, params)
    }

    /// Hand the protocol authority to another key
    pub fn set_authority(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
        instructions::set_authority::handler(ctx, new_authority)
    }

    // === Token Ledger ===

    /// Create the signer's profile if it does not exist yet
    pub fn ensure_profile(ctx: Context<EnsureProfile>) -> Result<()> {
        instructions::token_ledger::ensure_profile::handler(ctx)
    }

    /// Authority-only issuance; returns the recipient's new balance
    pub fn mint(ctx: Context<MintTokens>, recipient: Pubkey, amount: u64) -> Result<u64> {
        instructions::token_ledger::mint_tokens::handler(ctx, recipient, amount)
    }

    pub fn transfer(ctx: Context<TransferTokens>, recipient: Pubkey, amount: u64) -> Result<()> {
        instructions::token_ledger::transfer_tokens::handler(ctx, recipient, amount)
    }

    /// Destroy tokens from the signer's balance; returns what is left
    pub fn burn(ctx: Context<BurnTokens>, amount: u64) -> Result<u64> {
        instructions::token_ledger::burn_tokens::handler(ctx, amount)
    }

    // === Validator Pool ===

    /// Lock `stake` tokens and become an active validator
    pub fn become_validator(ctx: Context<BecomeValidator>, stake: u64) -> Result<()> {
        instructions::validator_pool::become_validator::handler(ctx, stake)
    }

    /// Withdraw the remaining stake once every validation is settled
    pub fn unstake(ctx: Context<Unstake>) -> Result<u64> {
        instructions::validator_pool::unstake::handler(ctx)
    }

    /// Authority-only burn from a validator's stake
    pub fn slash(ctx: Context<SlashValidator>, validator: Pubkey, amount: u64) -> Result<u64> {
        instructions::validator_pool::slash_validator::handler(ctx, validator, amount)
    }

    // === Content Registry ===

    /// Register content by its metadata hash; returns the content id
    pub fn submit_content(ctx: Context<SubmitContent>, metadata_hash: [u8; 32]) -> Result<u64> {
        instructions::content_registry::submit_content::handler(ctx, metadata_hash)
    }

    /// Score pending content (0-10)
    pub fn validate_content(ctx: Context<ValidateContent>, score: u8) -> Result<ContentStatus> {
        instructions::content_registry::validate_content::handler(ctx, score)
    }

    /// Reward or slash one validator of finalized content
    pub fn settle_validation(ctx: Context<SettleValidation>) -> Result<SettlementOutcome> {
        instructions::content_registry::settle_validation::handler(ctx)
    }

    // === Campaign Manager ===

    /// Escrow `budget` into a new campaign; returns the campaign id
    pub fn create_campaign(
        ctx: Context<CreateCampaign>,
        budget: u64,
        target_metric: TargetMetric,
        duration: u64,
    ) -> Result<u64> {
        instructions::campaign_manager::create_campaign::handler(ctx, budget, target_metric, duration)
    }

    /// Pay the signer for attention on validated content; returns the reward paid
    pub fn record_attention(
        ctx: Context<RecordAttention>,
        duration: u64,
        quality: u8,
    ) -> Result<u64> {
        instructions::campaign_manager::record_attention::handler(ctx, duration, quality)
    }

    /// Refund the unspent pool of an ended campaign to its creator
    pub fn close_campaign(ctx: Context<CloseCampaign>) -> Result<u64> {
        instructions::campaign_manager::close_campaign::handler(ctx)
    }

    // === Governance ===

    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        description: String,
        change: ParameterChange,
    ) -> Result<u64> {
        instructions::governance::create_proposal::handler(ctx, description, change)
    }

    /// Vote with the signer's current balance as weight
    pub fn vote_on_proposal(ctx: Context<VoteOnProposal>, support: bool) -> Result<VoteTally> {
        instructions::governance::vote_on_proposal::handler(ctx, support)
    }

    pub fn resolve_proposal(ctx: Context<ResolveProposal>) -> Result<ProposalStatus> {
        instructions::governance::resolve_proposal::handler(ctx)
    }

    /// Apply the parameter change of a passed proposal
    pub fn execute_proposal(ctx: Context<ExecuteProposal>) -> Result<()> {
        instructions::governance::execute_proposal::handler(ctx)
    }
}
