use anchor_lang::prelude::*;

use crate::{
    constants::{NATIVE_TOKEN, NATIVE_VAULT_SEED, SPLIT_PLUGIN_SEED},
    distribution::plan_distribution,
    errors::ErrorCode,
    events::{PaymentDistributed, PaymentReceived},
    state::SplitPlugin,
    utils::{transfer_native_in, validate_and_send_native},
};

use super::receive_payment::PaymentMetadata;

#[derive(Accounts)]
pub struct ReceiveNativePayment<'info> {
    #[account(
        seeds = [SPLIT_PLUGIN_SEED, split_plugin.load()?.unique_id.as_ref()],
        bump = split_plugin.load()?.bump
    )]
    pub split_plugin: AccountLoader<'info, SplitPlugin>,

    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED, split_plugin.key().as_ref()],
        bump = split_plugin.load()?.native_vault_bump
    )]
    pub native_vault: SystemAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Lamport counterpart of receive_payment
/// Permissionless - anyone can pay
/// remaining_accounts: settlement wallets (writable) in rate table order
pub fn handler<'info>(
    ctx: Context<'_, '_, 'info, 'info, ReceiveNativePayment<'info>>,
    amount: u64,
    metadata: PaymentMetadata,
) -> Result<()> {
    let (plan, native_vault_bump, table_version) = {
        let split_plugin = ctx.accounts.split_plugin.load()?;
        (
            plan_distribution(split_plugin.rate_table()?, amount)?,
            split_plugin.native_vault_bump,
            split_plugin.table_version,
        )
    };

    require!(
        ctx.remaining_accounts.len() >= plan.payouts.len(),
        ErrorCode::InsufficientRemainingAccounts
    );

    transfer_native_in(
        &ctx.accounts.payer,
        &ctx.accounts.native_vault,
        &ctx.accounts.system_program,
        amount,
    )?;

    let plugin_key = ctx.accounts.split_plugin.key();

    for (payout, settlement_info) in plan.payouts.iter().zip(ctx.remaining_accounts.iter()) {
        validate_and_send_native(
            settlement_info,
            &payout.settlement_address,
            payout.amount,
            &ctx.accounts.native_vault,
            &plugin_key,
            native_vault_bump,
            &ctx.accounts.system_program,
        )?;

        emit!(PaymentDistributed {
            plugin: plugin_key,
            settlement_address: payout.settlement_address,
            token: NATIVE_TOKEN,
            amount: payout.amount,
            share_rate_bps: payout.share_rate_bps,
        });
    }

    emit!(PaymentReceived {
        plugin: plugin_key,
        payer: ctx.accounts.payer.key(),
        token: NATIVE_TOKEN,
        amount,
        received: amount,
        distributed: plan.distributed,
        retained: plan.retained,
        payment_id: metadata.payment_id,
        merchant_id: metadata.merchant_id,
        table_version,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
