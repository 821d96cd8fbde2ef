use anchor_lang::prelude::*;

mod error;
mod instructions;
mod outcome;
mod state;

use instructions::*;

declare_id!("4wVjz9Ajh5BVSQi6rGiiPX9mnTXQx98biyyjLEJ78grb");

#[program]
pub mod coin_duel {
    use super::*;

    /// Create the global config singleton: operator authority, fee recipient,
    /// fee rate, and the flat keeper incentive.
    pub fn initialize(
        ctx: Context<Initialize>,
        fee_rate_bps: u16,
        resolution_fee_lamports: u64,
    ) -> Result<()> {
        instructions::initialize::handler(ctx, fee_rate_bps, resolution_fee_lamports)
    }

    pub fn update_fee_recipient(ctx: Context<UpdateConfig>, new_recipient: Pubkey) -> Result<()> {
        instructions::update_config::update_fee_recipient(ctx, new_recipient)
    }

    pub fn update_fee_rate(ctx: Context<UpdateConfig>, new_rate_bps: u16) -> Result<()> {
        instructions::update_config::update_fee_rate(ctx, new_rate_bps)
    }

    pub fn update_resolution_fee(
        ctx: Context<UpdateConfig>,
        new_fee_lamports: u64,
    ) -> Result<()> {
        instructions::update_config::update_resolution_fee(ctx, new_fee_lamports)
    }

    /// Open a game and escrow the creator's stake.
    pub fn create_game(ctx: Context<CreateGame>, wager: u64, nonce: u64) -> Result<()> {
        instructions::create_game::handler(ctx, wager, nonce)
    }

    /// Match the creator's stake and lock the pot; fixes the seed slot.
    pub fn join_game(ctx: Context<JoinGame>) -> Result<()> {
        instructions::join_game::handler(ctx)
    }

    /// Cancel a game: by the creator before anyone joins, or by anyone once
    /// the SlotHashes sysvar has dropped the seed slot and resolution is no
    /// longer possible. Refunds deposits, no fee.
    pub fn cancel_game(ctx: Context<CancelGame>) -> Result<()> {
        instructions::cancel_game::handler(ctx)
    }

    /// Permissionless crank: derive the outcome from post-join ledger entropy
    /// and pay out winner, operator, and the resolver who called this.
    pub fn auto_resolve_game(ctx: Context<AutoResolveGame>) -> Result<()> {
        instructions::auto_resolve::handler(ctx)
    }
}
