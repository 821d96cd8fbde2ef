use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{error::DuelError, state::*};

#[derive(Accounts)]
pub struct JoinGame<'info> {
    #[account(mut)]
    pub opponent: Signer<'info>,

    #[account(
        mut,
        seeds = [b"game", game.creator.as_ref(), game.nonce.to_le_bytes().as_ref()],
        bump = game.bump
    )]
    pub game: Account<'info, Game>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<JoinGame>) -> Result<()> {
    let clock = Clock::get()?;
    let wager = ctx.accounts.game.wager;

    ctx.accounts
        .game
        .validate_join(&ctx.accounts.opponent.key())?;
    require!(
        ctx.accounts.opponent.lamports() >= wager,
        DuelError::InsufficientFunds
    );

    // Matching stake, exact amount dictated by the game record.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.opponent.to_account_info(),
                to: ctx.accounts.game.to_account_info(),
            },
        ),
        wager,
    )?;

    let game = &mut ctx.accounts.game;
    game.opponent = ctx.accounts.opponent.key();
    game.escrowed_total = game
        .escrowed_total
        .checked_add(wager)
        .ok_or(DuelError::ArithmeticOverflow)?;
    game.joined_at_slot = clock.slot;
    // The seed slot lies strictly after this transaction's slot, so its hash
    // is unknowable to both players while their stakes lock.
    game.resolution_slot = clock
        .slot
        .checked_add(RESOLUTION_DELAY_SLOTS)
        .ok_or(DuelError::ArithmeticOverflow)?;
    game.state = GameState::Joined;

    emit!(GameJoined {
        game: game.key(),
        creator: game.creator,
        opponent: game.opponent,
        resolution_slot: game.resolution_slot,
    });

    Ok(())
}
