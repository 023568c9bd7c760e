use anchor_lang::prelude::*;
use crate::errors::AttentionError;
use crate::state::{ledger, UserProfile};

#[derive(Accounts)]
#[instruction(recipient: Pubkey)]
pub struct TransferTokens<'info> {
    #[account(mut)]
    pub sender: Signer<'info>,

    /// An empty profile fails the balance check rather than account loading
    #[account(
        init_if_needed,
        payer = sender,
        space = UserProfile::SIZE,
        seeds = [b"profile", sender.key().as_ref()],
        bump,
    )]
    pub sender_profile: Account<'info, UserProfile>,

    /// Created on first receipt
    #[account(
        init_if_needed,
        payer = sender,
        space = UserProfile::SIZE,
        seeds = [b"profile", recipient.as_ref()],
        bump,
        constraint = recipient != sender.key() @ AttentionError::SelfTransfer,
    )]
    pub recipient_profile: Account<'info, UserProfile>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<TransferTokens>, recipient: Pubkey, amount: u64) -> Result<()> {
    let height = Clock::get()?.slot;
    let sender = ctx.accounts.sender.key();
    let sender_profile = &mut ctx.accounts.sender_profile;
    sender_profile.ensure(sender, height, ctx.bumps.sender_profile)?;
    let recipient_profile = &mut ctx.accounts.recipient_profile;
    recipient_profile.ensure(recipient, height, ctx.bumps.recipient_profile)?;

    ledger::transfer(sender_profile, recipient_profile, amount)?;

    msg!(
        "Transferred {} from {} to {}",
        amount,
        sender,
        recipient
    );
    Ok(())
}
