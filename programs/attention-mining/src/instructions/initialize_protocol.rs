use anchor_lang::prelude::*;
use crate::state::{ProtocolParams, ProtocolState};

#[derive(Accounts)]
pub struct InitializeProtocol<'info> {
    /// Becomes the protocol authority
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = ProtocolState::SIZE,
        seeds = [b"protocol"],
        bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeProtocol>, params: ProtocolParams) -> Result<()> {
    let protocol = &mut ctx.accounts.protocol;
    protocol.initialize(ctx.accounts.authority.key(), params, ctx.bumps.protocol)?;

    msg!(
        "Initialized attention mining protocol (authority: {}, validation quorum: {}, governance quorum: {})",
        protocol.authority,
        params.validation_quorum,
        params.governance_quorum
    );

    Ok(())
}
