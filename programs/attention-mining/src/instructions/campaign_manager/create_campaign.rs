use anchor_lang::prelude::*;
use crate::state::{Campaign, ProtocolState, TargetMetric, UserProfile};

#[derive(Accounts)]
pub struct CreateCampaign<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    /// Budget is debited from here into the campaign escrow
    #[account(
        init_if_needed,
        payer = creator,
        space = UserProfile::SIZE,
        seeds = [b"profile", creator.key().as_ref()],
        bump,
    )]
    pub creator_profile: Account<'info, UserProfile>,

    #[account(
        init,
        payer = creator,
        space = Campaign::SIZE,
        seeds = [b"campaign", &protocol.next_campaign_id.to_le_bytes()],
        bump,
    )]
    pub campaign: Account<'info, Campaign>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateCampaign>,
    budget: u64,
    target_metric: TargetMetric,
    duration: u64,
) -> Result<u64> {
    let height = Clock::get()?.slot;
    let bump = ctx.bumps.campaign;
    let profile_bump = ctx.bumps.creator_profile;
    let accounts = ctx.accounts;

    accounts
        .creator_profile
        .ensure(accounts.creator.key(), height, profile_bump)?;

    let campaign_id = accounts.campaign.open(
        &mut accounts.protocol,
        &mut accounts.creator_profile,
        budget,
        target_metric,
        duration,
        height,
        bump,
    )?;

    msg!(
        "Campaign {} created by {} (budget: {}, metric: {:?}, ends at: {})",
        campaign_id,
        accounts.creator.key(),
        budget,
        target_metric,
        accounts.campaign.end_height
    );
    Ok(campaign_id)
}
