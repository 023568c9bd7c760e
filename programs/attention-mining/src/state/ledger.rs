use anchor_lang::prelude::*;

use crate::errors::AttentionError;
use crate::state::profile::UserProfile;
use crate::state::protocol::ProtocolState;

// =============================================================================
// TOKEN LEDGER
// =============================================================================
//
// Mint, transfer and burn over profile balances. Every operation computes all
// of its new values first and only then writes them, so an error leaves every
// record exactly as it was.
// =============================================================================

pub fn balance_of(profile: &UserProfile) -> u64 {
    profile.balance
}

/// Authority-only issuance. Returns the recipient's new balance.
pub fn mint(
    protocol: &mut ProtocolState,
    caller: &Pubkey,
    to: &mut UserProfile,
    amount: u64,
) -> Result<u64> {
    protocol.require_authority(caller)?;
    issue(protocol, to, amount)
}

/// Issuance without the authority check, for rewards the protocol itself pays.
pub(crate) fn issue(protocol: &mut ProtocolState, to: &mut UserProfile, amount: u64) -> Result<u64> {
    require!(amount > 0, AttentionError::InvalidAmount);
    require!(to.is_initialized(), AttentionError::InvalidOwner);

    let total_minted = protocol
        .total_minted
        .checked_add(amount)
        .ok_or(AttentionError::MathOverflow)?;
    let balance = to.checked_credit(amount)?;

    protocol.total_minted = total_minted;
    to.balance = balance;
    Ok(balance)
}

pub fn transfer(from: &mut UserProfile, to: &mut UserProfile, amount: u64) -> Result<()> {
    require!(amount > 0, AttentionError::InvalidAmount);
    require!(to.is_initialized(), AttentionError::InvalidOwner);
    require_keys_neq!(from.owner, to.owner, AttentionError::SelfTransfer);

    let from_balance = from.checked_debit(amount)?;
    let to_balance = to.checked_credit(amount)?;

    from.balance = from_balance;
    to.balance = to_balance;
    Ok(())
}

/// Destroy tokens from a balance. Returns the remaining balance.
pub fn burn(protocol: &mut ProtocolState, from: &mut UserProfile, amount: u64) -> Result<u64> {
    require!(amount > 0, AttentionError::InvalidAmount);

    let balance = from.checked_debit(amount)?;
    let total_burned = protocol
        .total_burned
        .checked_add(amount)
        .ok_or(AttentionError::MathOverflow)?;

    from.balance = balance;
    protocol.total_burned = total_burned;
    Ok(balance)
}
