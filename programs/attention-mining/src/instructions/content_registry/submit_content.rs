use anchor_lang::prelude::*;
use crate::state::{ContentItem, ProtocolState, UserProfile};

// =============================================================================
// SUBMIT CONTENT
// =============================================================================
//
// The content PDA is keyed by (submitter, metadata hash), so a resubmission
// lands on the already-initialized account and fails as a duplicate.
// =============================================================================

#[derive(Accounts)]
#[instruction(metadata_hash: [u8; 32])]
pub struct SubmitContent<'info> {
    #[account(mut)]
    pub submitter: Signer<'info>,

    #[account(
        mut,
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    #[account(
        init_if_needed,
        payer = submitter,
        space = UserProfile::SIZE,
        seeds = [b"profile", submitter.key().as_ref()],
        bump,
    )]
    pub profile: Account<'info, UserProfile>,

    #[account(
        init_if_needed,
        payer = submitter,
        space = ContentItem::SIZE,
        seeds = [b"content", submitter.key().as_ref(), metadata_hash.as_ref()],
        bump,
    )]
    pub content: Account<'info, ContentItem>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SubmitContent>, metadata_hash: [u8; 32]) -> Result<u64> {
    let height = Clock::get()?.slot;
    let profile_bump = ctx.bumps.profile;
    let content_bump = ctx.bumps.content;
    let accounts = ctx.accounts;

    accounts
        .profile
        .ensure(accounts.submitter.key(), height, profile_bump)?;
    let content_id = accounts.content.submit(
        &mut accounts.protocol,
        &mut accounts.profile,
        metadata_hash,
        height,
        content_bump,
    )?;

    msg!(
        "Content {} submitted by {} (quorum: {})",
        content_id,
        accounts.submitter.key(),
        accounts.content.quorum
    );
    Ok(content_id)
}
