use anchor_lang::prelude::*;

use crate::{
    authorization::{authorize, Action},
    constants::SPLIT_PLUGIN_SEED,
    events::RateTableUpdated,
    state::{RateInput, SplitPlugin},
};

#[derive(Accounts)]
pub struct UpdateRateTable<'info> {
    #[account(
        mut,
        seeds = [SPLIT_PLUGIN_SEED, split_plugin.load()?.unique_id.as_ref()],
        bump = split_plugin.load()?.bump
    )]
    pub split_plugin: AccountLoader<'info, SplitPlugin>,

    pub operator: Signer<'info>,
}

/// Replaces the rate table wholesale
/// Settlement addresses are cleared and must be bound again by the batch authority
pub fn handler(ctx: Context<UpdateRateTable>, entries: Vec<RateInput>) -> Result<()> {
    let split_plugin = &mut ctx.accounts.split_plugin.load_mut()?;

    authorize(
        Action::UpdateRateTable,
        &ctx.accounts.operator.key(),
        &split_plugin.principals(None),
    )?;

    let old_entry_count = split_plugin.entry_count;

    split_plugin.replace_rate_table(&entries)?;

    emit!(RateTableUpdated {
        plugin: ctx.accounts.split_plugin.key(),
        operator: ctx.accounts.operator.key(),
        old_entry_count,
        new_entry_count: split_plugin.entry_count,
        table_version: split_plugin.table_version,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
