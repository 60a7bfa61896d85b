use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    constants::SPLIT_PLUGIN_SEED,
    distribution::{plan_distribution, received_amount},
    errors::ErrorCode,
    events::{PaymentDistributed, PaymentReceived},
    state::SplitPlugin,
    utils::{transfer_tokens_in, validate_and_send_to_settlement},
};

/// Opaque identifiers carried through to the audit event
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaymentMetadata {
    pub payment_id: [u8; 32],
    pub merchant_id: [u8; 32],
}

#[derive(Accounts)]
pub struct ReceivePayment<'info> {
    #[account(
        seeds = [SPLIT_PLUGIN_SEED, split_plugin.load()?.unique_id.as_ref()],
        bump = split_plugin.load()?.bump
    )]
    pub split_plugin: AccountLoader<'info, SplitPlugin>,

    #[account(
        mut,
        associated_token::mint = mint,
        associated_token::authority = split_plugin,
        associated_token::token_program = token_program,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub mint: InterfaceAccount<'info, Mint>,

    #[account(
        mut,
        token::mint = mint,
        token::authority = payer,
        token::token_program = token_program,
    )]
    pub payer_token_account: InterfaceAccount<'info, TokenAccount>,

    pub payer: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Pulls a token payment into custody and pays every entry its share
/// Permissionless - anyone can pay
/// remaining_accounts: settlement ATAs in rate table order
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, ReceivePayment<'info>>,
    amount: u64,
    metadata: PaymentMetadata,
) -> Result<()> {
    // Phase 1: copy the table and DROP borrow before CPIs
    let (entries, unique_id, bump, table_version) = {
        let split_plugin = ctx.accounts.split_plugin.load()?;
        let entries = split_plugin.rate_table()?.to_vec();

        // A bad table is rejected before any value moves
        plan_distribution(&entries, amount)?;

        (
            entries,
            split_plugin.unique_id,
            split_plugin.bump,
            split_plugin.table_version,
        )
    };

    require!(
        ctx.remaining_accounts.len() >= entries.len(),
        ErrorCode::InsufficientRemainingAccounts
    );

    // Phase 2: custody in, then every payout in table order
    let custody_before = ctx.accounts.vault.amount;
    transfer_tokens_in(
        &ctx.accounts.payer_token_account,
        &ctx.accounts.vault,
        &ctx.accounts.mint,
        &ctx.accounts.payer,
        &ctx.accounts.token_program,
        amount,
    )?;

    // Only what reached the vault is split; older custody stays put
    ctx.accounts.vault.reload()?;
    let received = received_amount(custody_before, ctx.accounts.vault.amount)?;
    let plan = plan_distribution(&entries, received)?;

    let seeds = &[SPLIT_PLUGIN_SEED, unique_id.as_ref(), &[bump]];
    let signer_seeds = &[&seeds[..]];

    let plugin_key = ctx.accounts.split_plugin.key();
    let token = ctx.accounts.mint.key();

    for (payout, settlement_ata) in plan.payouts.iter().zip(ctx.remaining_accounts.iter()) {
        validate_and_send_to_settlement(
            settlement_ata,
            &payout.settlement_address,
            payout.amount,
            &ctx.accounts.mint,
            &ctx.accounts.vault,
            &ctx.accounts.split_plugin.to_account_info(),
            &ctx.accounts.token_program,
            signer_seeds,
        )?;

        emit!(PaymentDistributed {
            plugin: plugin_key,
            settlement_address: payout.settlement_address,
            token,
            amount: payout.amount,
            share_rate_bps: payout.share_rate_bps,
        });
    }

    #[cfg(feature = "verbose")]
    msg!(
        "Distributed {} of {} received, retained {}",
        plan.distributed,
        received,
        plan.retained
    );

    emit!(PaymentReceived {
        plugin: plugin_key,
        payer: ctx.accounts.payer.key(),
        token,
        amount,
        received,
        distributed: plan.distributed,
        retained: plan.retained,
        payment_id: metadata.payment_id,
        merchant_id: metadata.merchant_id,
        table_version,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
