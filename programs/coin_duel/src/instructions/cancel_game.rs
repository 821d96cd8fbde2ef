use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::instructions::shared::move_lamports;
use crate::outcome::read_slot_hash;
use crate::{error::DuelError, state::*};

#[derive(Accounts)]
pub struct CancelGame<'info> {
    pub caller: Signer<'info>,

    #[account(
        mut,
        seeds = [b"game", game.creator.as_ref(), game.nonce.to_le_bytes().as_ref()],
        bump = game.bump
    )]
    pub game: Account<'info, Game>,

    /// CHECK: Refund target, validated against game.creator
    #[account(mut)]
    pub creator_account: UncheckedAccount<'info>,

    /// CHECK: Refund target, validated against game.opponent when one joined
    #[account(mut)]
    pub opponent_account: Option<UncheckedAccount<'info>>,

    /// CHECK: SlotHashes sysvar, address-constrained
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<CancelGame>) -> Result<()> {
    let clock = Clock::get()?;

    require!(
        ctx.accounts.creator_account.key() == ctx.accounts.game.creator,
        DuelError::InvalidWinnerAccount
    );

    let (creator_refund, opponent_refund) = ctx.accounts.game.cancellation_refunds()?;
    let reason;

    match ctx.accounts.game.state {
        GameState::Created => {
            // No opponent yet; only the creator may walk away.
            require!(
                ctx.accounts.caller.key() == ctx.accounts.game.creator,
                DuelError::Unauthorized
            );
            reason = "Cancelled by creator before join".to_string();

            let game = &mut ctx.accounts.game;
            game.state = GameState::Cancelled;
            game.escrowed_total = 0;

            move_lamports(
                &game.to_account_info(),
                &ctx.accounts.creator_account.to_account_info(),
                creator_refund,
            )?;
        }
        GameState::Joined => {
            require!(
                ctx.accounts.game.resolution_lapsed(clock.slot),
                DuelError::TimeoutNotElapsed
            );
            // The lapse count is only a lower bound: SlotHashes holds the last
            // 512 produced slots, and skipped slots can keep the seed hash
            // alive well past it. While the hash is still present resolution
            // remains valid, so the refund stays closed until the sysvar has
            // actually dropped the seed slot.
            {
                let data = ctx.accounts.slot_hashes.try_borrow_data()?;
                require!(
                    read_slot_hash(&data, ctx.accounts.game.resolution_slot).is_none(),
                    DuelError::TimeoutNotElapsed
                );
            }
            let opponent_account = ctx
                .accounts
                .opponent_account
                .as_ref()
                .ok_or(DuelError::InvalidWinnerAccount)?;
            require!(
                opponent_account.key() == ctx.accounts.game.opponent,
                DuelError::InvalidWinnerAccount
            );
            reason = "Resolution window lapsed".to_string();

            let game = &mut ctx.accounts.game;
            game.state = GameState::Cancelled;
            game.escrowed_total = 0;

            // Full refund to each depositor, zero fee.
            move_lamports(
                &game.to_account_info(),
                &ctx.accounts.creator_account.to_account_info(),
                creator_refund,
            )?;
            move_lamports(
                &game.to_account_info(),
                &opponent_account.to_account_info(),
                opponent_refund,
            )?;
        }
        _ => return Err(DuelError::InvalidState.into()),
    }

    let game = &ctx.accounts.game;
    emit!(GameCancelled {
        game: game.key(),
        reason,
    });

    Ok(())
}
