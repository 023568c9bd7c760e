use anchor_lang::prelude::*;
use crate::state::{ProtocolState, UserProfile, ValidatorStake};

#[derive(Accounts)]
pub struct Unstake<'info> {
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

    /// A missing stake loads empty and is refused as NotValidator
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

pub fn handler(ctx: Context<Unstake>) -> Result<u64> {
    let height = Clock::get()?.slot;
    let bump = ctx.bumps.profile;
    let accounts = ctx.accounts;

    accounts
        .profile
        .ensure(accounts.validator.key(), height, bump)?;
    let returned = accounts
        .stake
        .unstake(&mut accounts.protocol, &mut accounts.profile)?;

    msg!("Validator {} unstaked {}", accounts.validator.key(), returned);
    Ok(returned)
}
