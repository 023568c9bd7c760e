use anchor_lang::prelude::*;
use crate::state::{ContentItem, ProtocolState, SettlementOutcome, UserProfile, ValidatorStake};

// =============================================================================
// SETTLE VALIDATION
// =============================================================================
//
// Permissionless. Once content has finalized, each of its validations can be
// settled exactly once: in-tolerance scores are paid, the rest are slashed.
// Settling releases one pending validation from the validator's stake lock.
// =============================================================================

#[derive(Accounts)]
pub struct SettleValidation<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    #[account(mut)]
    pub content: Account<'info, ContentItem>,

    #[account(
        mut,
        seeds = [b"validator", stake.validator.as_ref()],
        bump = stake.bump,
    )]
    pub stake: Account<'info, ValidatorStake>,

    #[account(
        mut,
        seeds = [b"profile", stake.validator.as_ref()],
        bump = validator_profile.bump,
    )]
    pub validator_profile: Account<'info, UserProfile>,
}

pub fn handler(ctx: Context<SettleValidation>) -> Result<SettlementOutcome> {
    let accounts = ctx.accounts;
    let outcome = accounts.content.settle(
        &mut accounts.protocol,
        &mut accounts.stake,
        &mut accounts.validator_profile,
    )?;

    match outcome {
        SettlementOutcome::Rewarded(amount) => msg!(
            "Validator {} rewarded {} for content {}",
            accounts.stake.validator,
            amount,
            accounts.content.content_id
        ),
        SettlementOutcome::Slashed(amount) => msg!(
            "Validator {} slashed {} for content {}",
            accounts.stake.validator,
            amount,
            accounts.content.content_id
        ),
    }
    Ok(outcome)
}
