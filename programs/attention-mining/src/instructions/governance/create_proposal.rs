use anchor_lang::prelude::*;
use crate::state::{ParameterChange, Proposal, ProtocolState, UserProfile};

#[derive(Accounts)]
pub struct CreateProposal<'info> {
    #[account(mut)]
    pub proposer: Signer<'info>,

    #[account(
        mut,
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    /// Balance must meet the proposal minimum (not locked)
    #[account(
        init_if_needed,
        payer = proposer,
        space = UserProfile::SIZE,
        seeds = [b"profile", proposer.key().as_ref()],
        bump,
    )]
    pub proposer_profile: Account<'info, UserProfile>,

    #[account(
        init,
        payer = proposer,
        space = Proposal::SIZE,
        seeds = [b"proposal", &protocol.next_proposal_id.to_le_bytes()],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateProposal>,
    description: String,
    change: ParameterChange,
) -> Result<u64> {
    let height = Clock::get()?.slot;
    let bump = ctx.bumps.proposal;
    let profile_bump = ctx.bumps.proposer_profile;
    let accounts = ctx.accounts;

    accounts
        .proposer_profile
        .ensure(accounts.proposer.key(), height, profile_bump)?;

    let proposal_id = accounts.proposal.open(
        &mut accounts.protocol,
        &accounts.proposer_profile,
        description,
        change,
        height,
        bump,
    )?;

    msg!(
        "Proposal {} by {}: set {:?} to {} (voting ends at {}, quorum: {})",
        proposal_id,
        accounts.proposer.key(),
        change.parameter,
        change.value,
        accounts.proposal.end_height,
        accounts.proposal.quorum
    );
    Ok(proposal_id)
}
