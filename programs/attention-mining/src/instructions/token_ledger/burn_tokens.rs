use anchor_lang::prelude::*;
use crate::state::{ledger, ProtocolState, UserProfile};

#[derive(Accounts)]
pub struct BurnTokens<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    #[account(
        init_if_needed,
        payer = owner,
        space = UserProfile::SIZE,
        seeds = [b"profile", owner.key().as_ref()],
        bump,
    )]
    pub profile: Account<'info, UserProfile>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<BurnTokens>, amount: u64) -> Result<u64> {
    let height = Clock::get()?.slot;
    let bump = ctx.bumps.profile;
    let accounts = ctx.accounts;

    accounts.profile.ensure(accounts.owner.key(), height, bump)?;
    let remaining = ledger::burn(&mut accounts.protocol, &mut accounts.profile, amount)?;

    msg!(
        "Burned {} from {} (balance: {}, total burned: {})",
        amount,
        accounts.owner.key(),
        remaining,
        accounts.protocol.total_burned
    );
    Ok(remaining)
}
