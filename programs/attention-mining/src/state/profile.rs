use anchor_lang::prelude::*;

use crate::errors::AttentionError;
use crate::state::protocol::{ProtocolParams, BPS_DENOMINATOR};

// =============================================================================
// USER PROFILE
// =============================================================================
//
// One per identity, created on first interaction and never closed. Holds the
// spendable token balance alongside reputation and attention statistics.
// Reputation is only ever moved by the protocol itself (content finalization,
// settlement, paid attention) and feeds the reward multiplier.
// =============================================================================

#[account]
#[derive(Default, Debug, PartialEq, InitSpace)]
pub struct UserProfile {
    /// The identity this profile belongs to
    pub owner: Pubkey,
    /// Spendable token balance
    pub balance: u64,
    /// Bounded reputation score
    pub reputation: i32,
    /// Cumulative tokens earned from attention and validation
    pub total_earnings: u64,
    /// Set while the owner holds an active validator stake
    pub is_validator: bool,
    /// Seconds of attention credited (after the duration cap)
    pub total_attention: u64,
    /// Attention events recorded
    pub attention_events: u64,
    /// Content items submitted
    pub contents_submitted: u64,
    /// Height at which the profile was created
    pub created_at: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl UserProfile {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    /// Zero-initialize the profile if it does not exist yet.
    /// Returns true when the profile was created by this call.
    /// Initialize on first use. Returns whether the profile was created.
    pub fn ensure(&mut self, owner: Pubkey, height: u64, bump: u8) -> Result<bool> {
        if self.is_initialized() {
            return Ok(false);
        }
        // An all-zero owner would read as uninitialized forever
        require_keys_neq!(owner, Pubkey::default(), AttentionError::InvalidOwner);

        *self = Self {
            owner,
            created_at: height,
            bump,
            ..Self::default()
        };
        Ok(true)
    }

    pub(crate) fn checked_credit(&self, amount: u64) -> Result<u64> {
        Ok(self
            .balance
            .checked_add(amount)
            .ok_or(AttentionError::MathOverflow)?)
    }

    pub(crate) fn checked_debit(&self, amount: u64) -> Result<u64> {
        Ok(self
            .balance
            .checked_sub(amount)
            .ok_or(AttentionError::InsufficientBalance)?)
    }

    /// Clamped reputation adjustment. Returns the new reputation.
    pub fn update_reputation(&mut self, delta: i32, params: &ProtocolParams) -> i32 {
        let next = (self.reputation as i64 + delta as i64)
            .clamp(params.min_reputation as i64, params.max_reputation as i64);
        self.reputation = next as i32;
        self.reputation
    }

    pub fn reputation_multiplier_bps(&self, params: &ProtocolParams) -> u64 {
        reputation_multiplier_bps(params, self.reputation)
    }
}

/// Reward multiplier for a reputation score, in basis points.
/// Neutral reputation is 1.0x; the result never goes below zero.
pub fn reputation_multiplier_bps(params: &ProtocolParams, reputation: i32) -> u64 {
    let bps = BPS_DENOMINATOR as i64 + reputation as i64 * params.reputation_bonus_bps as i64;
    bps.max(0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_is_idempotent() {
        let owner = Pubkey::new_unique();
        let mut profile = UserProfile::default();
        assert!(profile.ensure(owner, 7, 254).unwrap());
        profile.balance = 40;

        assert!(!profile.ensure(owner, 9, 1).unwrap());
        assert_eq!(profile.balance, 40);
        assert_eq!(profile.created_at, 7);
        assert_eq!(profile.bump, 254);
    }

    #[test]
    fn zero_owner_is_refused() {
        let mut profile = UserProfile::default();
        assert_eq!(
            profile.ensure(Pubkey::default(), 3, 255).unwrap_err(),
            AttentionError::InvalidOwner.into()
        );
        assert!(!profile.is_initialized());
    }

    #[test]
    fn reputation_is_clamped() {
        let params = ProtocolParams::default();
        let mut profile = UserProfile::default();

        assert_eq!(profile.update_reputation(5_000, &params), params.max_reputation);
        assert_eq!(profile.update_reputation(i32::MIN, &params), params.min_reputation);
    }

    #[test]
    fn multiplier_tracks_reputation_within_bounds() {
        let params = ProtocolParams::default();
        assert_eq!(reputation_multiplier_bps(&params, 0), 10_000);
        assert_eq!(reputation_multiplier_bps(&params, 1_000), 15_000);
        assert_eq!(reputation_multiplier_bps(&params, -1_000), 5_000);
    }
}
