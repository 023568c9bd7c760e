use anchor_lang::prelude::*;
use crate::state::{ContentItem, ContentStatus, ProtocolState, UserProfile, ValidatorStake};

#[derive(Accounts)]
pub struct ValidateContent<'info> {
    #[account(mut)]
    pub validator: Signer<'info>,

    #[account(
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    /// Callers that never staked load an inactive record and are refused
    #[account(
        init_if_needed,
        payer = validator,
        space = ValidatorStake::SIZE,
        seeds = [b"validator", validator.key().as_ref()],
        bump,
    )]
    pub stake: Account<'info, ValidatorStake>,

    #[account(mut)]
    pub content: Account<'info, ContentItem>,

    /// Reputation moves when the quorum is reached
    #[account(
        mut,
        seeds = [b"profile", content.submitter.as_ref()],
        bump = submitter_profile.bump,
    )]
    pub submitter_profile: Account<'info, UserProfile>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<ValidateContent>, score: u8) -> Result<ContentStatus> {
    let height = Clock::get()?.slot;
    let accounts = ctx.accounts;
    let params = accounts.protocol.params;

    let status = accounts.content.validate(
        &mut accounts.stake,
        &mut accounts.submitter_profile,
        score,
        &params,
        height,
    )?;

    msg!(
        "Validator {} scored content {} at {} ({}/{})",
        accounts.validator.key(),
        accounts.content.content_id,
        score,
        accounts.content.validation_count,
        accounts.content.quorum
    );
    if status != ContentStatus::Pending {
        msg!(
            "Content {} finalized as {:?} (aggregate: {})",
            accounts.content.content_id,
            status,
            accounts.content.aggregate_score
        );
    }
    Ok(status)
}
