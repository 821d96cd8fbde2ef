use anchor_lang::prelude::*;

use crate::{error::DuelError, state::*};

#[derive(Accounts)]
pub struct UpdateConfig<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"config"],
        bump = config.bump,
        has_one = authority @ DuelError::Unauthorized
    )]
    pub config: Account<'info, GlobalConfig>,
}

pub fn update_fee_recipient(ctx: Context<UpdateConfig>, new_recipient: Pubkey) -> Result<()> {
    GlobalConfig::validate_fee_recipient(&new_recipient)?;

    let config = &mut ctx.accounts.config;
    config.fee_recipient = new_recipient;
    emit_config_updated(config);
    Ok(())
}

pub fn update_fee_rate(ctx: Context<UpdateConfig>, new_rate_bps: u16) -> Result<()> {
    require!(new_rate_bps <= 10_000, DuelError::InvalidFeeRate);

    let config = &mut ctx.accounts.config;
    config.fee_rate_bps = new_rate_bps;
    emit_config_updated(config);
    Ok(())
}

pub fn update_resolution_fee(ctx: Context<UpdateConfig>, new_fee_lamports: u64) -> Result<()> {
    let config = &mut ctx.accounts.config;
    config.resolution_fee_lamports = new_fee_lamports;
    emit_config_updated(config);
    Ok(())
}

fn emit_config_updated(config: &GlobalConfig) {
    emit!(ConfigUpdated {
        authority: config.authority,
        fee_recipient: config.fee_recipient,
        fee_rate_bps: config.fee_rate_bps,
        resolution_fee_lamports: config.resolution_fee_lamports,
    });
}
