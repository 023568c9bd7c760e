use anchor_lang::prelude::*;
use crate::state::ProtocolState;

#[derive(Accounts)]
pub struct SetAuthority<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,
}

pub fn handler(ctx: Context<SetAuthority>, new_authority: Pubkey) -> Result<()> {
    let protocol = &mut ctx.accounts.protocol;
    protocol.set_authority(&ctx.accounts.authority.key(), new_authority)?;

    msg!("Set protocol authority to {}", new_authority);
    Ok(())
}
