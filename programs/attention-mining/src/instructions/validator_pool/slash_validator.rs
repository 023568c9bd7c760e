use anchor_lang::prelude::*;
use crate::state::{ProtocolState, ValidatorStake};

// Authority-initiated slash. Settlement slashes go through
// `settle_validation` instead and never need a signer.

#[derive(Accounts)]
#[instruction(validator: Pubkey)]
pub struct SlashValidator<'info> {
    /// Must be the protocol authority
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    /// Loads empty for keys that never staked; refused as NotValidator
    #[account(
        init_if_needed,
        payer = authority,
        space = ValidatorStake::SIZE,
        seeds = [b"validator", validator.as_ref()],
        bump,
    )]
    pub stake: Account<'info, ValidatorStake>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SlashValidator>, validator: Pubkey, amount: u64) -> Result<u64> {
    let accounts = ctx.accounts;
    accounts.protocol.require_authority(&accounts.authority.key())?;

    let remaining = accounts.stake.slash(&mut accounts.protocol, amount)?;

    msg!(
        "Slashed validator {} by {} (remaining stake: {})",
        validator,
        amount,
        remaining
    );
    Ok(remaining)
}
