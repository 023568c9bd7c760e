use anchor_lang::prelude::*;

use crate::errors::AttentionError;
use crate::state::ledger;
use crate::state::profile::UserProfile;
use crate::state::protocol::{ProtocolParams, ProtocolState, MAX_SCORE, MAX_VALIDATION_QUORUM, SCORE_PRECISION};
use crate::state::validator::ValidatorStake;

// =============================================================================
// CONTENT REGISTRY
// =============================================================================
//
// Content starts Pending and collects one score per distinct validator. When
// the score count reaches the quorum snapshotted at submission, the item
// finalizes exactly once: Validated when the running average reaches the
// quality threshold, Rejected otherwise, and the submitter's reputation moves
// accordingly.
//
// Settlement happens afterwards, one validator at a time. Scores further than
// the tolerance from the final aggregate are slashed through the validator
// pool; the rest are paid the validator reward. Calls only go from here into
// the validator pool, never back.
// =============================================================================

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum ContentStatus {
    #[default]
    Pending,
    Validated,
    Rejected,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub struct ValidationEntry {
    pub validator: Pubkey,
    pub score: u8,
    pub settled: bool,
}

/// What settling a validation did to the validator
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettlementOutcome {
    /// Within tolerance; tokens minted to the validator
    Rewarded(u64),
    /// Outside tolerance; tokens burned from the stake
    Slashed(u64),
}

#[account]
#[derive(Default, Debug, PartialEq, InitSpace)]
pub struct ContentItem {
    pub content_id: u64,
    pub submitter: Pubkey,
    /// Off-chain metadata commitment
    pub metadata_hash: [u8; 32],

    // === Validation ===
    /// Final aggregate rounded down to whole score points (set on finalization)
    pub quality_score: u8,
    /// Running average of validator scores, in hundredths
    pub aggregate_score: u16,
    pub score_sum: u32,
    pub validation_count: u8,
    /// Quorum in force when the content was submitted
    pub quorum: u8,
    #[max_len(MAX_VALIDATION_QUORUM)]
    pub validations: Vec<ValidationEntry>,
    pub status: ContentStatus,

    // === Settlement terms, fixed at finalization ===
    pub slash_tolerance: u8,
    pub slash_bps: u16,
    pub validator_reward: u64,

    // === Timing ===
    pub submitted_at: u64,
    pub finalized_at: Option<u64>,

    // === Attention ===
    pub attention_events: u64,
    pub total_attention: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl ContentItem {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    pub fn is_initialized(&self) -> bool {
        self.submitter != Pubkey::default()
    }

    /// Register a new Pending item. The account is keyed by (submitter, hash),
    /// so an initialized account means the submitter already sent this hash.
    pub fn submit(
        &mut self,
        protocol: &mut ProtocolState,
        submitter: &mut UserProfile,
        metadata_hash: [u8; 32],
        height: u64,
        bump: u8,
    ) -> Result<u64> {
        require!(!self.is_initialized(), AttentionError::DuplicateSubmission);

        let submitted = submitter
            .contents_submitted
            .checked_add(1)
            .ok_or(AttentionError::MathOverflow)?;
        let content_id = protocol.next_content_id()?;

        *self = Self {
            content_id,
            submitter: submitter.owner,
            metadata_hash,
            quorum: protocol.params.validation_quorum,
            status: ContentStatus::Pending,
            submitted_at: height,
            bump,
            ..Self::default()
        };
        submitter.contents_submitted = submitted;
        Ok(content_id)
    }

    pub fn has_validated(&self, validator: &Pubkey) -> bool {
        self.validations.iter().any(|v| v.validator == *validator)
    }

    /// Record one validator's score. Returns the status after the score.
    pub fn validate(
        &mut self,
        stake: &mut ValidatorStake,
        submitter: &mut UserProfile,
        score: u8,
        params: &ProtocolParams,
        height: u64,
    ) -> Result<ContentStatus> {
        require!(score <= MAX_SCORE, AttentionError::InvalidScore);
        require!(stake.is_active, AttentionError::Unauthorized);
        require!(
            stake.amount >= params.min_validator_stake,
            AttentionError::BelowMinimumThreshold
        );
        require_keys_neq!(stake.validator, self.submitter, AttentionError::Unauthorized);
        require!(
            self.status == ContentStatus::Pending,
            AttentionError::InvalidContent
        );
        require!(
            !self.has_validated(&stake.validator),
            AttentionError::AlreadyValidated
        );
        require_keys_eq!(submitter.owner, self.submitter, AttentionError::InvalidContent);

        let pending = stake
            .pending_validations
            .checked_add(1)
            .ok_or(AttentionError::MathOverflow)?;
        let count = self.validation_count + 1;
        let sum = self.score_sum + score as u32;
        let aggregate = (sum as u64 * SCORE_PRECISION / count as u64) as u16;

        self.validations.push(ValidationEntry {
            validator: stake.validator,
            score,
            settled: false,
        });
        self.validation_count = count;
        self.score_sum = sum;
        self.aggregate_score = aggregate;

        stake.pending_validations = pending;
        stake.validations_performed = stake.validations_performed.saturating_add(1);

        if count >= self.quorum {
            self.finalize(submitter, params, height);
        }
        Ok(self.status)
    }

    fn finalize(&mut self, submitter: &mut UserProfile, params: &ProtocolParams, height: u64) {
        let threshold = params.quality_threshold as u64 * SCORE_PRECISION;
        if self.aggregate_score as u64 >= threshold {
            self.status = ContentStatus::Validated;
            submitter.update_reputation(params.submitter_reputation_delta, params);
        } else {
            self.status = ContentStatus::Rejected;
            submitter.update_reputation(-params.submitter_reputation_delta, params);
        }
        self.quality_score = (self.aggregate_score as u64 / SCORE_PRECISION) as u8;
        self.slash_tolerance = params.slash_tolerance;
        self.slash_bps = params.slash_bps;
        self.validator_reward = params.validator_reward;
        self.finalized_at = Some(height);
    }

    /// Distance between a score and the aggregate, in hundredths
    pub fn deviation(&self, score: u8) -> u64 {
        (score as u64 * SCORE_PRECISION).abs_diff(self.aggregate_score as u64)
    }

    /// Settle one validator's entry on a finalized item: release its pending
    /// lock and either slash or reward it.
    pub fn settle(
        &mut self,
        protocol: &mut ProtocolState,
        stake: &mut ValidatorStake,
        validator: &mut UserProfile,
    ) -> Result<SettlementOutcome> {
        require!(
            self.status != ContentStatus::Pending,
            AttentionError::NotFinalized
        );
        require_keys_eq!(validator.owner, stake.validator, AttentionError::Unauthorized);
        let index = self
            .validations
            .iter()
            .position(|v| v.validator == stake.validator)
            .ok_or(AttentionError::Unauthorized)?;
        let entry = self.validations[index];
        require!(!entry.settled, AttentionError::AlreadySettled);

        let params = protocol.params;
        let pending = stake
            .pending_validations
            .checked_sub(1)
            .ok_or(AttentionError::MathOverflow)?;
        let tolerance = self.slash_tolerance as u64 * SCORE_PRECISION;

        let outcome = if self.deviation(entry.score) > tolerance {
            let amount = stake.slash_amount(self.slash_bps);
            if amount > 0 {
                stake.slash(protocol, amount)?;
            }
            validator.update_reputation(-params.validator_reputation_delta, &params);
            SettlementOutcome::Slashed(amount)
        } else {
            let reward = self.validator_reward;
            if reward > 0 {
                let earnings = validator
                    .total_earnings
                    .checked_add(reward)
                    .ok_or(AttentionError::MathOverflow)?;
                ledger::issue(protocol, validator, reward)?;
                validator.total_earnings = earnings;
            }
            validator.update_reputation(params.validator_reputation_delta, &params);
            SettlementOutcome::Rewarded(reward)
        };

        stake.pending_validations = pending;
        self.validations[index].settled = true;
        Ok(outcome)
    }

    pub(crate) fn record_attention(&mut self, seconds: u64) {
        self.attention_events = self.attention_events.saturating_add(1);
        self.total_attention = self.total_attention.saturating_add(seconds);
    }
}
