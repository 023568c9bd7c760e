use anchor_lang::prelude::*;
use crate::state::{Campaign, CampaignStatus, ContentItem, ProtocolState, UserProfile};

// =============================================================================
// RECORD ATTENTION
// =============================================================================
//
// Pays the viewer out of the campaign pool for time spent on validated
// content. A pool smaller than the computed reward is paid out in full and
// the campaign closes.
// =============================================================================

#[derive(Accounts)]
pub struct RecordAttention<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    #[account(
        init_if_needed,
        payer = user,
        space = UserProfile::SIZE,
        seeds = [b"profile", user.key().as_ref()],
        bump,
    )]
    pub user_profile: Account<'info, UserProfile>,

    #[account(
        mut,
        seeds = [b"campaign", &campaign.campaign_id.to_le_bytes()],
        bump = campaign.bump,
    )]
    pub campaign: Account<'info, Campaign>,

    #[account(mut)]
    pub content: Account<'info, ContentItem>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<RecordAttention>, duration: u64, quality: u8) -> Result<u64> {
    let height = Clock::get()?.slot;
    let bump = ctx.bumps.user_profile;
    let accounts = ctx.accounts;

    accounts.user_profile.ensure(accounts.user.key(), height, bump)?;
    let paid = accounts.campaign.record_attention(
        &mut accounts.protocol,
        &mut accounts.user_profile,
        &mut accounts.content,
        duration,
        quality,
        height,
    )?;

    msg!(
        "Attention on content {} in campaign {}: {}s at quality {}, paid {} to {}",
        accounts.content.content_id,
        accounts.campaign.campaign_id,
        duration,
        quality,
        paid,
        accounts.user.key()
    );
    if accounts.campaign.status == CampaignStatus::Closed {
        msg!("Campaign {} pool exhausted", accounts.campaign.campaign_id);
    }
    Ok(paid)
}
