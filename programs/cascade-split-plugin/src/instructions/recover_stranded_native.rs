use anchor_lang::prelude::*;

use crate::{
    authorization::{authorize, Action},
    constants::{NATIVE_TOKEN, NATIVE_VAULT_SEED, SPLIT_PLUGIN_SEED},
    errors::ErrorCode,
    events::StrandedTokensRecovered,
    state::SplitPlugin,
    utils::{recoverable_lamports, transfer_native_out},
};

#[derive(Accounts)]
pub struct RecoverStrandedNative<'info> {
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
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Moves lamports above the rent reserve out of native custody to the owner
pub fn handler(ctx: Context<RecoverStrandedNative>, amount: u64) -> Result<()> {
    let native_vault_bump = {
        let split_plugin = ctx.accounts.split_plugin.load()?;

        authorize(
            Action::RecoverStrandedTokens,
            &ctx.accounts.owner.key(),
            &split_plugin.principals(None),
        )?;

        split_plugin.native_vault_bump
    };

    let reserve = Rent::get()?.minimum_balance(0);
    require!(
        amount <= recoverable_lamports(ctx.accounts.native_vault.lamports(), reserve),
        ErrorCode::InsufficientCustody
    );

    let plugin_key = ctx.accounts.split_plugin.key();

    transfer_native_out(
        &ctx.accounts.native_vault,
        ctx.accounts.owner.to_account_info(),
        &plugin_key,
        native_vault_bump,
        &ctx.accounts.system_program,
        amount,
    )?;

    emit!(StrandedTokensRecovered {
        plugin: plugin_key,
        owner: ctx.accounts.owner.key(),
        token: NATIVE_TOKEN,
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
