use anchor_lang::prelude::*;
use crate::state::{ledger, ProtocolState, UserProfile};

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct MintTokens<'info> {
    /// Must be the protocol authority
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    #[account(
        init_if_needed,
        payer = authority,
        space = UserProfile::SIZE,
        seeds = [b"profile", recipient.as_ref()],
        bump,
    )]
    pub recipient_profile: Account<'info, UserProfile>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<MintTokens>, recipient: Pubkey, amount: u64) -> Result<u64> {
    let height = Clock::get()?.slot;
    let protocol = &mut ctx.accounts.protocol;
    let profile = &mut ctx.accounts.recipient_profile;

    profile.ensure(recipient, height, ctx.bumps.recipient_profile)?;
    let balance = ledger::mint(protocol, &ctx.accounts.authority.key(), profile, amount)?;

    msg!("Minted {} to {} (balance: {})", amount, recipient, balance);
    Ok(balance)
}
