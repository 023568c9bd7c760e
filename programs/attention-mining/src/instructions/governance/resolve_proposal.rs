use anchor_lang::prelude::*;
use crate::state::{Proposal, ProposalStatus};

#[derive(Accounts)]
pub struct ResolveProposal<'info> {
    /// Anyone can resolve after the voting period
    pub resolver: Signer<'info>,

    #[account(
        mut,
        seeds = [b"proposal", &proposal.proposal_id.to_le_bytes()],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, Proposal>,
}

pub fn handler(ctx: Context<ResolveProposal>) -> Result<ProposalStatus> {
    let height = Clock::get()?.slot;
    let proposal = &mut ctx.accounts.proposal;

    let status = proposal.resolve(height)?;

    msg!(
        "Proposal {} resolved: {:?} (for: {}, against: {}, quorum: {})",
        proposal.proposal_id,
        status,
        proposal.votes_for,
        proposal.votes_against,
        proposal.quorum
    );
    Ok(status)
}
