use anchor_lang::prelude::*;

use crate::error::DuelError;

/// Moves lamports out of a program-owned account by direct balance edits.
/// Both sides are computed before either borrow is taken so a failed checked
/// op leaves the balances untouched.
pub fn move_lamports<'info>(
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    let new_from = from
        .lamports()
        .checked_sub(amount)
        .ok_or(DuelError::InsufficientFunds)?;
    let new_to = to
        .lamports()
        .checked_add(amount)
        .ok_or(DuelError::ArithmeticOverflow)?;
    **from.try_borrow_mut_lamports()? = new_from;
    **to.try_borrow_mut_lamports()? = new_to;
    Ok(())
}
