use anchor_lang::prelude::*;

use crate::{
    constants::{MAX_SPLITS, MIN_SPLITS, TOTAL_RATE_BPS},
    errors::ErrorCode,
    state::RecipientEntry,
};

/// Amount owed to one settlement address
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub settlement_address: Pubkey,
    pub share_rate_bps: u16,
    pub amount: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistributionPlan {
    /// One payout per rate table entry, in table order
    pub payouts: Vec<Payout>,
    pub distributed: u64,
    /// Rounding dust left in custody
    pub retained: u64,
}

/// Entry's share of the total amount, floor division
pub fn calculate_payout(total: u64, share_rate_bps: u16) -> Result<u64> {
    let amount: u64 = (total as u128)
        .checked_mul(share_rate_bps as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(TOTAL_RATE_BPS as u128)
        .ok_or(ErrorCode::MathOverflow)?
        .try_into()
        .map_err(|_| ErrorCode::MathOverflow)?;
    Ok(amount)
}

/// Computes every payout for `amount` before any value moves
///
/// The table was validated when written, but payment is permissionless so the
/// stored rates are summed again here, before any payout is computed. Floor
/// division leaves at most `entries.len() - 1` units of dust, which stays in
/// custody.
pub fn plan_distribution(entries: &[RecipientEntry], amount: u64) -> Result<DistributionPlan> {
    require!(
        (MIN_SPLITS..=MAX_SPLITS).contains(&entries.len()),
        ErrorCode::InvalidSplitConfiguration
    );

    // u16 max (65535) * 10 cannot overflow u32
    let total_bps: u32 = entries
        .iter()
        .map(|entry| entry.share_rate_bps as u32)
        .sum();
    require!(
        total_bps == TOTAL_RATE_BPS as u32,
        ErrorCode::InvalidSplitConfiguration
    );

    let mut payouts = Vec::with_capacity(entries.len());
    let mut distributed = 0u64;

    for entry in entries {
        require!(entry.is_bound(), ErrorCode::UnboundRecipient);

        let payout = calculate_payout(amount, entry.share_rate_bps)?;
        distributed = distributed
            .checked_add(payout)
            .ok_or(ErrorCode::MathOverflow)?;

        payouts.push(Payout {
            settlement_address: entry.settlement_address,
            share_rate_bps: entry.share_rate_bps,
            amount: payout,
        });
    }

    let retained = amount
        .checked_sub(distributed)
        .ok_or(ErrorCode::InvalidSplitConfiguration)?;

    Ok(DistributionPlan {
        payouts,
        distributed,
        retained,
    })
}

/// Tokens this payment actually added to custody
/// Transfer-fee mints deliver less than the requested amount
pub fn received_amount(custody_before: u64, custody_after: u64) -> Result<u64> {
    let received = custody_after
        .checked_sub(custody_before)
        .ok_or(ErrorCode::MathOverflow)?;
    Ok(received)
}
