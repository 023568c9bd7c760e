use anchor_lang::prelude::*;
use crate::state::{Proposal, UserProfile, VoteRecord, VoteTally};

// =============================================================================
// VOTE ON PROPOSAL
// =============================================================================
//
// Weight is the voter's balance right now. The vote record PDA is keyed by
// (proposal, voter); a second vote finds it initialized and is refused.
// =============================================================================

#[derive(Accounts)]
pub struct VoteOnProposal<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        init_if_needed,
        payer = voter,
        space = UserProfile::SIZE,
        seeds = [b"profile", voter.key().as_ref()],
        bump,
    )]
    pub voter_profile: Account<'info, UserProfile>,

    #[account(
        mut,
        seeds = [b"proposal", &proposal.proposal_id.to_le_bytes()],
        bump = proposal.bump,
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        init_if_needed,
        payer = voter,
        space = VoteRecord::SIZE,
        seeds = [b"vote", proposal.key().as_ref(), voter.key().as_ref()],
        bump,
    )]
    pub vote_record: Account<'info, VoteRecord>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<VoteOnProposal>, support: bool) -> Result<VoteTally> {
    let height = Clock::get()?.slot;
    let bump = ctx.bumps.vote_record;
    let profile_bump = ctx.bumps.voter_profile;
    let accounts = ctx.accounts;

    accounts
        .voter_profile
        .ensure(accounts.voter.key(), height, profile_bump)?;

    let tally = accounts.proposal.cast_vote(
        &mut accounts.vote_record,
        &accounts.voter_profile,
        support,
        height,
        bump,
    )?;

    msg!(
        "Vote on proposal {} by {}: {} with weight {} (for: {}, against: {})",
        accounts.proposal.proposal_id,
        accounts.voter.key(),
        if support { "for" } else { "against" },
        accounts.vote_record.weight,
        tally.votes_for,
        tally.votes_against
    );
    Ok(tally)
}
