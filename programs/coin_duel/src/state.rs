use anchor_lang::prelude::*;

use crate::error::DuelError;

/// Slots between join and the seed slot. The seed slot's ledger hash does not
/// exist until the slot has been produced, which is strictly after both stakes
/// were locked in the join transaction.
pub const RESOLUTION_DELAY_SLOTS: u64 = 2;

/// Depth of the SlotHashes sysvar. Once the seed slot falls out of the window
/// the game can no longer be resolved and the timeout-cancel path opens.
pub const SEED_RETENTION_SLOTS: u64 = 512;

pub const BPS_DENOMINATOR: u64 = 10_000;

#[account]
pub struct GlobalConfig {
    pub authority: Pubkey,              // 32 bytes
    pub fee_recipient: Pubkey,          // 32 bytes
    pub fee_rate_bps: u16,              // 2 bytes - operator cut of the pot
    pub resolution_fee_lamports: u64,   // 8 bytes - flat keeper incentive
    pub bump: u8,                       // 1 byte
}

impl GlobalConfig {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        32 + // fee_recipient
        2 +  // fee_rate_bps
        8 +  // resolution_fee_lamports
        1;   // bump

    pub fn validate_fee_recipient(recipient: &Pubkey) -> Result<()> {
        require!(
            *recipient != Pubkey::default(),
            DuelError::InvalidFeeRecipient
        );
        Ok(())
    }
}

#[account]
pub struct Game {
    pub creator: Pubkey,            // 32 bytes
    pub opponent: Pubkey,           // 32 bytes - zero until joined
    pub wager: u64,                 // 8 bytes - per side, in lamports
    pub escrowed_total: u64,        // 8 bytes - unreleased deposits held by this game
    pub state: GameState,           // 1 byte
    pub created_at_slot: u64,       // 8 bytes
    pub joined_at_slot: u64,        // 8 bytes - zero until joined
    pub resolution_slot: u64,       // 8 bytes - slot whose ledger hash seeds the outcome
    pub resolution_seed: [u8; 32],  // 32 bytes - recorded at resolve, zero before
    pub winner: Pubkey,             // 32 bytes - zero until resolved
    pub nonce: u64,                 // 8 bytes
    pub bump: u8,                   // 1 byte
}

impl Game {
    pub const LEN: usize = 8 + // discriminator
        32 + // creator
        32 + // opponent
        8 +  // wager
        8 +  // escrowed_total
        1 +  // state
        8 +  // created_at_slot
        8 +  // joined_at_slot
        8 +  // resolution_slot
        32 + // resolution_seed
        32 + // winner
        8 +  // nonce
        1;   // bump

    pub fn can_join(&self) -> bool {
        matches!(self.state, GameState::Created) && self.opponent == Pubkey::default()
    }

    pub fn can_resolve(&self) -> bool {
        matches!(self.state, GameState::Joined)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.state, GameState::Resolved | GameState::Cancelled)
    }

    /// The seed slot's hash is only available once the slot is behind us.
    pub fn resolution_open(&self, current_slot: u64) -> bool {
        current_slot > self.resolution_slot
    }

    /// Lower bound on the timeout-cancel window. SlotHashes keeps the last
    /// 512 produced slots, so when slots were skipped the seed hash can
    /// outlive this count; the cancel path must additionally confirm the
    /// sysvar no longer holds the seed slot.
    pub fn resolution_lapsed(&self, current_slot: u64) -> bool {
        current_slot > self.resolution_slot.saturating_add(SEED_RETENTION_SLOTS)
    }

    /// Stake validation shared by game creation.
    pub fn validate_wager(wager: u64) -> Result<()> {
        require!(wager > 0, DuelError::AmountMismatch);
        Ok(())
    }

    pub fn validate_join(&self, joiner: &Pubkey) -> Result<()> {
        require!(self.can_join(), DuelError::InvalidState);
        require!(*joiner != self.creator, DuelError::SelfPlay);
        Ok(())
    }

    /// Refunds owed on cancellation, (creator, opponent): the exact deposits,
    /// zero fee.
    pub fn cancellation_refunds(&self) -> Result<(u64, u64)> {
        match self.state {
            GameState::Created => Ok((self.wager, 0)),
            GameState::Joined => Ok((self.wager, self.wager)),
            _ => Err(DuelError::InvalidState.into()),
        }
    }

    /// Partitions `escrowed_total` into winner payout, operator fee, and the
    /// flat resolver incentive. All u64 checked math; the bps floor remainder
    /// stays in the winner payout rather than being minted or lost.
    pub fn calculate_payouts(&self, fee_rate_bps: u16, resolver_fee: u64) -> Result<Payouts> {
        let pot = self.escrowed_total;
        let operator_fee = pot
            .checked_mul(fee_rate_bps as u64)
            .ok_or(DuelError::ArithmeticOverflow)?
            .checked_div(BPS_DENOMINATOR)
            .ok_or(DuelError::ArithmeticOverflow)?;
        let winner = pot
            .checked_sub(operator_fee)
            .ok_or(DuelError::ArithmeticOverflow)?
            .checked_sub(resolver_fee)
            .ok_or(DuelError::ArithmeticOverflow)?;
        Ok(Payouts {
            winner,
            operator_fee,
            resolver_fee,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Payouts {
    pub winner: u64,
    pub operator_fee: u64,
    pub resolver_fee: u64,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Created,   // Creator's stake escrowed, waiting for an opponent
    Joined,    // Both stakes escrowed, awaiting resolution
    Resolved,  // Winner paid out
    Cancelled, // Refunded, no fee taken
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoinSide {
    Heads, // creator wins
    Tails, // opponent wins
}

// Events for indexing
#[event]
pub struct GameCreated {
    pub game: Pubkey,
    pub creator: Pubkey,
    pub wager: u64,
    pub nonce: u64,
}

#[event]
pub struct GameJoined {
    pub game: Pubkey,
    pub creator: Pubkey,
    pub opponent: Pubkey,
    pub resolution_slot: u64,
}

#[event]
pub struct GameResolved {
    pub game: Pubkey,
    pub winner: Pubkey,
    pub resolver: Pubkey,
    pub winner_payout: u64,
    pub operator_fee: u64,
    pub resolver_fee: u64,
}

#[event]
pub struct GameCancelled {
    pub game: Pubkey,
    pub reason: String,
}

#[event]
pub struct ConfigUpdated {
    pub authority: Pubkey,
    pub fee_recipient: Pubkey,
    pub fee_rate_bps: u16,
    pub resolution_fee_lamports: u64,
}
