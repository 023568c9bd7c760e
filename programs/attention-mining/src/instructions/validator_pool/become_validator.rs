use anchor_lang::prelude::*;
use crate::state::{ProtocolState, UserProfile, ValidatorStake};

// =============================================================================
// BECOME VALIDATOR
// =============================================================================
//
// Locks `stake` out of the caller's balance. The stake account outlives an
// unstake, so a former validator re-activates through the same PDA.
// =============================================================================

#[derive(Accounts)]
pub struct BecomeValidator<'info> {
    #[account(mut)]
    pub validator: Signer<'info>,

    #[account(
        mut,
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    #[account(
        init_if_needed,
        payer = validator,
        space = UserProfile::SIZE,
        seeds = [b"profile", validator.key().as_ref()],
        bump,
    )]
    pub profile: Account<'info, UserProfile>,

    #[account(
        init_if_needed,
        payer = validator,
        space = ValidatorStake::SIZE,
        seeds = [b"validator", validator.key().as_ref()],
        bump,
    )]
    pub stake: Account<'info, ValidatorStake>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<BecomeValidator>, stake: u64) -> Result<()> {
    let height = Clock::get()?.slot;
    let bump = ctx.bumps.stake;
    let profile_bump = ctx.bumps.profile;
    let accounts = ctx.accounts;

    accounts
        .profile
        .ensure(accounts.validator.key(), height, profile_bump)?;

    accounts.stake.activate(
        &mut accounts.protocol,
        &mut accounts.profile,
        stake,
        height,
        bump,
    )?;

    msg!(
        "Validator {} staked {} (total staked: {})",
        accounts.validator.key(),
        stake,
        accounts.protocol.total_staked
    );
    Ok(())
}
