use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;

use crate::instructions::shared::move_lamports;
use crate::outcome::{derive_outcome, derive_seed, read_slot_hash};
use crate::{error::DuelError, state::*};

#[derive(Accounts)]
pub struct AutoResolveGame<'info> {
    // Deliberately unprivileged: any keeper may resolve and collect the flat
    // incentive, so a stalled counterpart cannot strand the pot.
    #[account(mut)]
    pub resolver: Signer<'info>,

    #[account(
        mut,
        seeds = [b"game", game.creator.as_ref(), game.nonce.to_le_bytes().as_ref()],
        bump = game.bump
    )]
    pub game: Account<'info, Game>,

    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, GlobalConfig>,

    /// CHECK: Payout target, validated against game.creator
    #[account(mut)]
    pub creator_account: UncheckedAccount<'info>,

    /// CHECK: Payout target, validated against game.opponent
    #[account(mut)]
    pub opponent_account: UncheckedAccount<'info>,

    /// CHECK: Operator fee target, validated against config.fee_recipient
    #[account(mut)]
    pub fee_recipient_account: UncheckedAccount<'info>,

    /// CHECK: SlotHashes sysvar, address-constrained
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,
}

pub fn handler(ctx: Context<AutoResolveGame>) -> Result<()> {
    let clock = Clock::get()?;
    let game = &ctx.accounts.game;
    let config = &ctx.accounts.config;

    require!(game.can_resolve(), DuelError::InvalidState);
    require!(game.resolution_open(clock.slot), DuelError::TooEarly);
    require!(
        ctx.accounts.creator_account.key() == game.creator,
        DuelError::InvalidWinnerAccount
    );
    require!(
        ctx.accounts.opponent_account.key() == game.opponent,
        DuelError::InvalidWinnerAccount
    );
    require!(
        ctx.accounts.fee_recipient_account.key() == config.fee_recipient,
        DuelError::InvalidFeeRecipient
    );

    let seed = {
        let data = ctx.accounts.slot_hashes.try_borrow_data()?;
        let slot_hash =
            read_slot_hash(&data, game.resolution_slot).ok_or(DuelError::SeedUnavailable)?;
        derive_seed(&slot_hash, &game.key(), game.resolution_slot)
    };

    let side = derive_outcome(&seed);
    let winner_account = match side {
        CoinSide::Heads => &ctx.accounts.creator_account,
        CoinSide::Tails => &ctx.accounts.opponent_account,
    };
    let winner = winner_account.key();
    let payouts = game.calculate_payouts(config.fee_rate_bps, config.resolution_fee_lamports)?;

    // Effects before interactions: once the game is marked Resolved with an
    // empty escrow, a replay of this instruction fails on can_resolve.
    let game = &mut ctx.accounts.game;
    game.winner = winner;
    game.resolution_seed = seed;
    game.state = GameState::Resolved;
    game.escrowed_total = 0;

    let game_info = game.to_account_info();
    move_lamports(&game_info, &winner_account.to_account_info(), payouts.winner)?;
    move_lamports(
        &game_info,
        &ctx.accounts.fee_recipient_account.to_account_info(),
        payouts.operator_fee,
    )?;
    move_lamports(
        &game_info,
        &ctx.accounts.resolver.to_account_info(),
        payouts.resolver_fee,
    )?;

    msg!(
        "Game {} resolved: {:?} at slot {}, winner {}",
        game.key(),
        side,
        game.resolution_slot,
        winner
    );

    emit!(GameResolved {
        game: game.key(),
        winner,
        resolver: ctx.accounts.resolver.key(),
        winner_payout: payouts.winner,
        operator_fee: payouts.operator_fee,
        resolver_fee: payouts.resolver_fee,
    });

    Ok(())
}
