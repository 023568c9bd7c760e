use anchor_lang::prelude::*;
use crate::state::{Campaign, ProtocolState, UserProfile};

// Anyone may close an ended campaign; the refund always goes to its creator.

#[derive(Accounts)]
pub struct CloseCampaign<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [b"protocol"],
        bump = protocol.bump,
    )]
    pub protocol: Account<'info, ProtocolState>,

    #[account(
        mut,
        seeds = [b"campaign", &campaign.campaign_id.to_le_bytes()],
        bump = campaign.bump,
    )]
    pub campaign: Account<'info, Campaign>,

    #[account(
        mut,
        seeds = [b"profile", campaign.creator.as_ref()],
        bump = creator_profile.bump,
    )]
    pub creator_profile: Account<'info, UserProfile>,
}

pub fn handler(ctx: Context<CloseCampaign>) -> Result<u64> {
    let height = Clock::get()?.slot;
    let accounts = ctx.accounts;

    let refund = accounts.campaign.refund_unspent(
        &mut accounts.protocol,
        &mut accounts.creator_profile,
        height,
    )?;

    msg!(
        "Campaign {} closed (spent: {}, refunded: {})",
        accounts.campaign.campaign_id,
        accounts.campaign.spent,
        refund
    );
    Ok(refund)
}
