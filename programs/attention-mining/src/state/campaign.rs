use anchor_lang::prelude::*;

use crate::errors::AttentionError;
use crate::state::content::{ContentItem, ContentStatus};
use crate::state::profile::{reputation_multiplier_bps, UserProfile};
use crate::state::protocol::{ProtocolParams, ProtocolState, BPS_DENOMINATOR, MAX_SCORE, QUALITY_STEP_BPS};

// =============================================================================
// CAMPAIGN MANAGER
// =============================================================================
//
// A campaign escrows its creator's budget and pays it out to users who report
// attention on Validated content. Payouts never exceed the pool: the call that
// would overdraw it receives exactly the remainder and closes the campaign.
// After the end height anyone may close it, which refunds whatever is left to
// the creator exactly once.
// =============================================================================

/// What the campaign creator is optimizing for
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum TargetMetric {
    Views,
    #[default]
    Duration,
    Engagement,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub enum CampaignStatus {
    /// Paying out attention rewards
    #[default]
    Active,
    /// Past its end height and refunded
    Expired,
    /// Pool exhausted before the end height
    Closed,
}

#[account]
#[derive(Default, Debug, PartialEq, InitSpace)]
pub struct Campaign {
    pub campaign_id: u64,
    pub creator: Pubkey,

    // === Pool ===
    /// Total reward pool escrowed at creation
    pub budget: u64,
    /// Paid out so far; never exceeds the budget
    pub spent: u64,
    pub target_metric: TargetMetric,

    // === Timing ===
    pub start_height: u64,
    pub end_height: u64,

    pub status: CampaignStatus,
    /// Attention events that were paid from this campaign
    pub attention_events: u64,
    /// Amount returned to the creator on close
    pub refunded_amount: u64,

    /// PDA bump seed
    pub bump: u8,
}

impl Campaign {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    /// Escrow `budget` from the creator and start the campaign.
    #[allow(clippy::too_many_arguments)]
    pub fn open(
        &mut self,
        protocol: &mut ProtocolState,
        creator: &mut UserProfile,
        budget: u64,
        target_metric: TargetMetric,
        duration: u64,
        height: u64,
        bump: u8,
    ) -> Result<u64> {
        require!(budget > 0 && duration > 0, AttentionError::InvalidAmount);

        let balance = creator.checked_debit(budget)?;
        let total_escrowed = protocol
            .total_escrowed
            .checked_add(budget)
            .ok_or(AttentionError::MathOverflow)?;
        let end_height = height
            .checked_add(duration)
            .ok_or(AttentionError::MathOverflow)?;
        let campaign_id = protocol.next_campaign_id()?;

        creator.balance = balance;
        protocol.total_escrowed = total_escrowed;

        *self = Self {
            campaign_id,
            creator: creator.owner,
            budget,
            target_metric,
            start_height: height,
            end_height,
            status: CampaignStatus::Active,
            bump,
            ..Self::default()
        };
        Ok(campaign_id)
    }

    pub fn remaining(&self) -> u64 {
        self.budget.saturating_sub(self.spent)
    }

    pub fn is_accepting(&self, height: u64) -> bool {
        self.status == CampaignStatus::Active && height < self.end_height
    }

    /// Pay `user` for an attention event on `content`. Returns the amount paid.
    pub fn record_attention(
        &mut self,
        protocol: &mut ProtocolState,
        user: &mut UserProfile,
        content: &mut ContentItem,
        duration: u64,
        quality: u8,
        height: u64,
    ) -> Result<u64> {
        require!(quality <= MAX_SCORE, AttentionError::InvalidScore);
        require!(self.is_accepting(height), AttentionError::CampaignExpired);
        require!(
            content.status == ContentStatus::Validated,
            AttentionError::InvalidContent
        );

        let params = protocol.params;
        let reward = compute_reward(&params, duration, quality, user.reputation)?;
        let paid = reward.min(self.remaining());
        let seconds = duration.min(params.max_attention_duration);

        let balance = user.checked_credit(paid)?;
        let earnings = user
            .total_earnings
            .checked_add(paid)
            .ok_or(AttentionError::MathOverflow)?;
        let rewards_paid = protocol
            .total_rewards_paid
            .checked_add(paid)
            .ok_or(AttentionError::MathOverflow)?;
        let total_escrowed = protocol
            .total_escrowed
            .checked_sub(paid)
            .ok_or(AttentionError::MathOverflow)?;

        user.balance = balance;
        user.total_earnings = earnings;
        user.total_attention = user.total_attention.saturating_add(seconds);
        user.attention_events = user.attention_events.saturating_add(1);
        if paid > 0 {
            user.update_reputation(params.attention_reputation_delta, &params);
        }

        protocol.total_rewards_paid = rewards_paid;
        protocol.total_escrowed = total_escrowed;

        content.record_attention(seconds);

        self.spent += paid;
        self.attention_events = self.attention_events.saturating_add(1);
        if self.remaining() == 0 {
            self.status = CampaignStatus::Closed;
        }
        Ok(paid)
    }

    /// Refund the unspent pool once the end height is reached.
    /// Returns the refunded amount; zero on every call after the first.
    ///
    /// Not named `close`: on `Account<Campaign>` that would resolve to
    /// `AccountsClose::close` before reaching this method.
    pub fn refund_unspent(
        &mut self,
        protocol: &mut ProtocolState,
        creator: &mut UserProfile,
        height: u64,
    ) -> Result<u64> {
        require!(height >= self.end_height, AttentionError::NotExpired);
        if self.status == CampaignStatus::Expired {
            return Ok(0);
        }
        require_keys_eq!(creator.owner, self.creator, AttentionError::Unauthorized);

        let refund = self.remaining();
        let balance = creator.checked_credit(refund)?;
        let total_escrowed = protocol
            .total_escrowed
            .checked_sub(refund)
            .ok_or(AttentionError::MathOverflow)?;

        creator.balance = balance;
        protocol.total_escrowed = total_escrowed;

        self.refunded_amount = refund;
        self.status = CampaignStatus::Expired;
        Ok(refund)
    }
}

/// Reward for one attention event before the pool clamp:
///
/// `base_rate * min(duration, cap) * quality_bps * reputation_bps / 10000^2`
///
/// Zero when duration or quality is zero and non-decreasing in duration.
pub fn compute_reward(
    params: &ProtocolParams,
    duration: u64,
    quality: u8,
    reputation: i32,
) -> Result<u64> {
    require!(quality <= MAX_SCORE, AttentionError::InvalidScore);

    let seconds = duration.min(params.max_attention_duration) as u128;
    let quality_bps = quality as u128 * QUALITY_STEP_BPS as u128;
    let reputation_bps = reputation_multiplier_bps(params, reputation) as u128;

    let numerator = (params.base_rate as u128)
        .checked_mul(seconds)
        .and_then(|v| v.checked_mul(quality_bps))
        .and_then(|v| v.checked_mul(reputation_bps))
        .ok_or(AttentionError::MathOverflow)?;
    let reward = numerator / (BPS_DENOMINATOR as u128 * BPS_DENOMINATOR as u128);

    u64::try_from(reward).map_err(|_| error!(AttentionError::MathOverflow))
}
