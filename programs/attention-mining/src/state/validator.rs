use anchor_lang::prelude::*;

use crate::errors::AttentionError;
use crate::state::profile::UserProfile;
use crate::state::protocol::{ProtocolState, BPS_DENOMINATOR};

// =============================================================================
// VALIDATOR POOL
// =============================================================================
//
// Stake is moved out of the owner's balance into this record and counted in
// ProtocolState::total_staked while active. Slashing burns straight out of
// the stake, so `amount` is always deposits minus slashing and unstaking
// simply returns it.
//
// A validator accrues one pending validation per content item it scores and
// stays locked until each of those is settled.
// =============================================================================

#[account]
#[derive(Default, Debug, PartialEq, InitSpace)]
pub struct ValidatorStake {
    /// The validator identity
    pub validator: Pubkey,
    /// Currently staked (already net of slashing)
    pub amount: u64,
    pub is_active: bool,
    /// Lifetime amount burned by slashing
    pub slashed_total: u64,
    /// Scored content items not yet settled
    pub pending_validations: u32,
    /// Lifetime validations performed
    pub validations_performed: u64,
    /// Height of the latest activation
    pub activated_at: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl ValidatorStake {
    pub const SIZE: usize = 8 + Self::INIT_SPACE;

    /// Move `stake` from the profile balance into escrow and activate.
    pub fn activate(
        &mut self,
        protocol: &mut ProtocolState,
        profile: &mut UserProfile,
        stake: u64,
        height: u64,
        bump: u8,
    ) -> Result<()> {
        require!(!self.is_active, AttentionError::AlreadyValidator);
        require!(
            stake >= protocol.params.min_validator_stake,
            AttentionError::BelowMinimumThreshold
        );
        if self.validator != Pubkey::default() {
            require_keys_eq!(self.validator, profile.owner, AttentionError::Unauthorized);
        }

        let balance = profile.checked_debit(stake)?;
        let total_staked = protocol
            .total_staked
            .checked_add(stake)
            .ok_or(AttentionError::MathOverflow)?;

        profile.balance = balance;
        profile.is_validator = true;
        protocol.total_staked = total_staked;

        self.validator = profile.owner;
        self.amount = stake;
        self.is_active = true;
        self.pending_validations = 0;
        self.activated_at = height;
        self.bump = bump;
        Ok(())
    }

    /// Return the remaining stake to the owner and deactivate.
    ///
    /// Every validation stays pending until `ContentItem::settle` runs for it,
    /// including on content that has already finalized. Settlement is
    /// permissionless, so a validator releases its own lock by settling.
    pub fn unstake(&mut self, protocol: &mut ProtocolState, profile: &mut UserProfile) -> Result<u64> {
        require!(self.is_active, AttentionError::NotValidator);
        require!(
            self.pending_validations == 0,
            AttentionError::PendingValidations
        );

        let returned = self.amount;
        let balance = profile.checked_credit(returned)?;
        let total_staked = protocol
            .total_staked
            .checked_sub(returned)
            .ok_or(AttentionError::MathOverflow)?;

        profile.balance = balance;
        profile.is_validator = false;
        protocol.total_staked = total_staked;

        self.amount = 0;
        self.is_active = false;
        Ok(returned)
    }

    /// Burn `amount` out of the stake. Returns the remaining stake.
    pub fn slash(&mut self, protocol: &mut ProtocolState, amount: u64) -> Result<u64> {
        require!(amount > 0, AttentionError::InvalidAmount);
        require!(self.is_active, AttentionError::NotValidator);
        require!(amount <= self.amount, AttentionError::InsufficientStake);

        let total_staked = protocol
            .total_staked
            .checked_sub(amount)
            .ok_or(AttentionError::MathOverflow)?;
        let total_burned = protocol
            .total_burned
            .checked_add(amount)
            .ok_or(AttentionError::MathOverflow)?;
        let slashed_total = self
            .slashed_total
            .checked_add(amount)
            .ok_or(AttentionError::MathOverflow)?;

        protocol.total_staked = total_staked;
        protocol.total_burned = total_burned;
        self.slashed_total = slashed_total;
        self.amount -= amount;
        Ok(self.amount)
    }

    /// Share of the remaining stake that `bps` represents
    pub fn slash_amount(&self, bps: u16) -> u64 {
        (self.amount as u128 * bps as u128 / BPS_DENOMINATOR as u128) as u64
    }
}
