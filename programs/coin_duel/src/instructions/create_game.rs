use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::{error::DuelError, state::*};

#[derive(Accounts)]
#[instruction(wager: u64, nonce: u64)]
pub struct CreateGame<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        init,
        payer = creator,
        space = Game::LEN,
        seeds = [b"game", creator.key().as_ref(), nonce.to_le_bytes().as_ref()],
        bump
    )]
    pub game: Account<'info, Game>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateGame>, wager: u64, nonce: u64) -> Result<()> {
    let clock = Clock::get()?;

    Game::validate_wager(wager)?;
    require!(
        ctx.accounts.creator.lamports() >= wager,
        DuelError::InsufficientFunds
    );

    // Escrow the creator's stake in the game account itself.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.creator.to_account_info(),
                to: ctx.accounts.game.to_account_info(),
            },
        ),
        wager,
    )?;

    let game = &mut ctx.accounts.game;
    game.creator = ctx.accounts.creator.key();
    game.opponent = Pubkey::default();
    game.wager = wager;
    game.escrowed_total = wager;
    game.state = GameState::Created;
    game.created_at_slot = clock.slot;
    game.joined_at_slot = 0;
    game.resolution_slot = 0;
    game.resolution_seed = [0; 32];
    game.winner = Pubkey::default();
    game.nonce = nonce;
    game.bump = ctx.bumps.game;

    emit!(GameCreated {
        game: game.key(),
        creator: game.creator,
        wager,
        nonce,
    });

    Ok(())
}
