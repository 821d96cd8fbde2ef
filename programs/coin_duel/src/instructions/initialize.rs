use anchor_lang::prelude::*;

use crate::{error::DuelError, state::*};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // `init` on a fixed-seed PDA makes the config a singleton: a second call
    // lands on the same address and fails at account creation.
    #[account(
        init,
        payer = authority,
        space = GlobalConfig::LEN,
        seeds = [b"config"],
        bump
    )]
    pub config: Account<'info, GlobalConfig>,

    /// CHECK: Fee recipient can be any account; it only ever receives lamports
    pub fee_recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<Initialize>,
    fee_rate_bps: u16,
    resolution_fee_lamports: u64,
) -> Result<()> {
    require!(fee_rate_bps <= 10_000, DuelError::InvalidFeeRate);
    GlobalConfig::validate_fee_recipient(&ctx.accounts.fee_recipient.key())?;

    let config = &mut ctx.accounts.config;
    config.authority = ctx.accounts.authority.key();
    config.fee_recipient = ctx.accounts.fee_recipient.key();
    config.fee_rate_bps = fee_rate_bps;
    config.resolution_fee_lamports = resolution_fee_lamports;
    config.bump = ctx.bumps.config;

    msg!(
        "Config initialized: fee {} bps, resolution fee {} lamports",
        fee_rate_bps,
        resolution_fee_lamports
    );

    Ok(())
}
