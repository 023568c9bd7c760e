use anchor_lang::prelude::*;
use crate::state::UserProfile;

// =============================================================================
// ENSURE PROFILE
// =============================================================================
//
// Profiles are created lazily: by the owner here, or implicitly when someone
// sends them tokens. Calling this on an existing profile changes nothing.
// =============================================================================

#[derive(Accounts)]
pub struct EnsureProfile<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init_if_needed,
        payer = owner,
        space = UserProfile::SIZE,
        seeds = [b"profile", owner.key().as_ref()],
        bump,
    )]
    pub profile: Account<'info, UserProfile>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<EnsureProfile>) -> Result<()> {
    let height = Clock::get()?.slot;
    let profile = &mut ctx.accounts.profile;

    if profile.ensure(ctx.accounts.owner.key(), height, ctx.bumps.profile)? {
        msg!("Created profile for {}", profile.owner);
    }
    Ok(())
}
