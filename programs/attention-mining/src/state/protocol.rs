use anchor_lang::prelude::*;

use crate::errors::AttentionError;

// =============================================================================
// PROTOCOL STATE
// =============================================================================
//
// Singleton holding the authority, every tunable parameter and the supply
// accounting. Tokens live in exactly one of four places: a profile balance,
// a campaign escrow, a validator stake, or they were burned. The counters
// here let the conservation invariant be checked from this account alone:
//
//   total_minted - total_burned == circulating + total_escrowed + total_staked
// =============================================================================

/// Highest score a validator or an attention report may carry
pub const MAX_SCORE: u8 = 10;

/// Upper bound on validators per content item (sizes the inline entry list)
pub const MAX_VALIDATION_QUORUM: usize = 9;

/// Basis point denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Aggregate scores are kept in hundredths of a score point
pub const SCORE_PRECISION: u64 = 100;

/// Each quality point is worth 10% of the base reward
pub const QUALITY_STEP_BPS: u64 = BPS_DENOMINATOR / MAX_SCORE as u64;

/// Tunable parameters. Initialized by the authority, amended by governance.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct ProtocolParams {
    /// Minimum stake to become a validator
    pub min_validator_stake: u64,
    /// Minimum balance required to open a proposal
    pub min_proposal_stake: u64,
    /// Distinct validator scores needed to finalize content
    pub validation_quorum: u8,
    /// Aggregate score (0-10) a content item needs to be Validated
    pub quality_threshold: u8,
    /// Allowed distance (score points) between a validator and the aggregate
    pub slash_tolerance: u8,
    /// Share of remaining stake burned for an out-of-tolerance validation
    pub slash_bps: u16,
    /// Tokens minted to a validator for each in-tolerance validation
    pub validator_reward: u64,
    /// Tokens per second of full-quality attention at neutral reputation
    pub base_rate: u64,
    /// Reported durations are capped at this many seconds
    pub max_attention_duration: u64,
    /// Proposal voting period in slots
    pub voting_period: u64,
    /// Minimum token-weighted participation for a proposal to pass
    pub governance_quorum: u64,
    pub min_reputation: i32,
    pub max_reputation: i32,
    /// Multiplier gained per reputation point (basis points)
    pub reputation_bonus_bps: u16,
    /// Reputation change for a submitter when content finalizes
    pub submitter_reputation_delta: i32,
    /// Reputation change for a validator when its validation is settled
    pub validator_reputation_delta: i32,
    /// Reputation gained per paid attention event
    pub attention_reputation_delta: i32,
}

impl Default for ProtocolParams {
    fn default() -> Self {
        Self {
            min_validator_stake: 100,
            min_proposal_stake: 50,
            validation_quorum: 3,
            quality_threshold: 6,
            slash_tolerance: 3,
            slash_bps: 1_000,
            validator_reward: 5,
            base_rate: 1,
            max_attention_duration: 3_600,
            voting_period: 100,
            governance_quorum: 150,
            min_reputation: -1_000,
            max_reputation: 1_000,
            reputation_bonus_bps: 5,
            submitter_reputation_delta: 10,
            validator_reputation_delta: 5,
            attention_reputation_delta: 1,
        }
    }
}

impl ProtocolParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.validation_quorum >= 1
                && self.validation_quorum as usize <= MAX_VALIDATION_QUORUM,
            AttentionError::InvalidParameter
        );
        require!(
            self.quality_threshold <= MAX_SCORE && self.slash_tolerance <= MAX_SCORE,
            AttentionError::InvalidParameter
        );
        require!(
            self.slash_bps as u64 <= BPS_DENOMINATOR,
            AttentionError::InvalidParameter
        );
        require!(
            self.min_reputation <= 0 && self.max_reputation >= 0,
            AttentionError::InvalidParameter
        );
        require!(
            self.submitter_reputation_delta >= 0
                && self.validator_reputation_delta >= 0
                && self.attention_reputation_delta >= 0,
            AttentionError::InvalidParameter
        );
        // The lowest reputation must still yield a non-negative multiplier
        let floor = BPS_DENOMINATOR as i64
            + self.min_reputation as i64 * self.reputation_bonus_bps as i64;
        require!(floor >= 0, AttentionError::InvalidParameter);
        require!(
            self.voting_period > 0 && self.min_validator_stake > 0,
            AttentionError::InvalidParameter
        );
        Ok(())
    }

    /// Apply a governance change. The receiver is untouched on error.
    pub fn apply(&mut self, change: &ParameterChange) -> Result<()> {
        let mut next = *self;
        let value = change.value;
        match change.parameter {
            ProtocolParameter::MinValidatorStake => next.min_validator_stake = value,
            ProtocolParameter::MinProposalStake => next.min_proposal_stake = value,
            ProtocolParameter::ValidationQuorum => next.validation_quorum = narrow(value)?,
            ProtocolParameter::QualityThreshold => next.quality_threshold = narrow(value)?,
            ProtocolParameter::SlashTolerance => next.slash_tolerance = narrow(value)?,
            ProtocolParameter::SlashBps => next.slash_bps = narrow(value)?,
            ProtocolParameter::ValidatorReward => next.validator_reward = value,
            ProtocolParameter::BaseRate => next.base_rate = value,
            ProtocolParameter::MaxAttentionDuration => next.max_attention_duration = value,
            ProtocolParameter::VotingPeriod => next.voting_period = value,
            ProtocolParameter::GovernanceQuorum => next.governance_quorum = value,
            ProtocolParameter::ReputationBonusBps => next.reputation_bonus_bps = narrow(value)?,
        }
        next.validate()?;
        *self = next;
        Ok(())
    }
}

fn narrow<T: TryFrom<u64>>(value: u64) -> Result<T> {
    T::try_from(value).map_err(|_| error!(AttentionError::InvalidParameter))
}

/// Parameters that governance may change
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum ProtocolParameter {
    MinValidatorStake,
    MinProposalStake,
    ValidationQuorum,
    QualityThreshold,
    SlashTolerance,
    SlashBps,
    ValidatorReward,
    BaseRate,
    MaxAttentionDuration,
    VotingPeriod,
    GovernanceQuorum,
    ReputationBonusBps,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct ParameterChange {
    pub parameter: ProtocolParameter,
    pub value: u64,
}

impl Default for ParameterChange {
    fn default() -> Self {
        Self {
            parameter: ProtocolParameter::BaseRate,
            value: 0,
        }
    }
}

#[account]
#[derive(Default, Debug, PartialEq, InitSpace)]
pub struct ProtocolState {
    /// Identity allowed to mint, slash and hand over authority
    pub authority: Pubkey,
    pub params: ProtocolParams,

    // === Id counters ===
    pub next_content_id: u64,
    pub next_campaign_id: u64,
    pub next_proposal_id: u64,

    // === Supply accounting ===
    pub total_minted: u64,
    pub total_burned: u64,
    /// Unspent campaign pools
    pub total_escrowed: u64,
    /// Active validator stakes
    pub total_staked: u64,
    /// Everything ever paid out of campaign pools
    pub total_rewards_paid: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl ProtocolState {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    pub fn initialize(&mut self, authority: Pubkey, params: ProtocolParams, bump: u8) -> Result<()> {
        require_keys_neq!(authority, Pubkey::default(), AttentionError::InvalidAuthority);
        params.validate()?;

        *self = Self {
            authority,
            params,
            bump,
            ..Self::default()
        };
        Ok(())
    }

    pub fn require_authority(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.authority, AttentionError::Unauthorized);
        Ok(())
    }

    pub fn set_authority(&mut self, caller: &Pubkey, new_authority: Pubkey) -> Result<()> {
        self.require_authority(caller)?;
        require_keys_neq!(new_authority, Pubkey::default(), AttentionError::InvalidAuthority);
        self.authority = new_authority;
        Ok(())
    }

    /// Tokens sitting in profile balances
    pub fn circulating(&self) -> u64 {
        self.total_minted
            .saturating_sub(self.total_burned)
            .saturating_sub(self.total_escrowed)
            .saturating_sub(self.total_staked)
    }

    pub fn next_content_id(&mut self) -> Result<u64> {
        bump_counter(&mut self.next_content_id)
    }

    pub fn next_campaign_id(&mut self) -> Result<u64> {
        bump_counter(&mut self.next_campaign_id)
    }

    pub fn next_proposal_id(&mut self) -> Result<u64> {
        bump_counter(&mut self.next_proposal_id)
    }
}

fn bump_counter(counter: &mut u64) -> Result<u64> {
    let id = *counter;
    *counter = id.checked_add(1).ok_or(AttentionError::MathOverflow)?;
    Ok(id)
}
