use anchor_lang::prelude::*;
use crate::state::{Proposal, ProtocolState};

#[derive(Accounts)]
pub struct ExecuteProposal<'info> {
    pub executor: Signer<'info>,

    #[account(
        mut,
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    #[account(
        mut,
        seeds = [b"proposal", &proposal.proposal_id.to_le_bytes()],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, Proposal>,
}

pub fn handler(ctx: Context<ExecuteProposal>) -> Result<()> {
    let accounts = ctx.accounts;
    let change = accounts.proposal.execute(&mut accounts.protocol)?;

    msg!(
        "Proposal {} executed: {:?} is now {}",
        accounts.proposal.proposal_id,
        change.parameter,
        change.value
    );
    Ok(())
}
