use anchor_lang::prelude::*;

use crate::{
    authorization::{authorize, resolve_batch_authority, Action},
    constants::SPLIT_PLUGIN_SEED,
    state::{RateEntryView, SplitPlugin},
};

#[derive(Accounts)]
pub struct ViewRateTable<'info> {
    #[account(
        seeds = [SPLIT_PLUGIN_SEED, split_plugin.load()?.unique_id.as_ref()],
        bump = split_plugin.load()?.bump
    )]
    pub split_plugin: AccountLoader<'info, SplitPlugin>,

    /// CHECK: Only read when the caller is not the operator
    pub batch_authority_record: AccountInfo<'info>,

    pub caller: Signer<'info>,
}

/// Returns the rate table to the operator or the batch authority
pub fn handler(ctx: Context<ViewRateTable>) -> Result<Vec<RateEntryView>> {
    let plugin_key = ctx.accounts.split_plugin.key();
    let split_plugin = ctx.accounts.split_plugin.load()?;
    let caller = ctx.accounts.caller.key();

    // Operator reads never depend on the registry; an unreadable record
    // resolves to no batch authority
    let batch_authority = if caller == split_plugin.operator {
        None
    } else {
        resolve_batch_authority(
            &ctx.accounts.batch_authority_record,
            &split_plugin.factory,
            &plugin_key,
        )
        .ok()
    };

    authorize(
        Action::ViewRateTable,
        &caller,
        &split_plugin.principals(batch_authority),
    )?;

    Ok(split_plugin
        .rate_table()?
        .iter()
        .map(|entry| entry.view())
        .collect())
}
