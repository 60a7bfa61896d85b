use anchor_lang::prelude::*;

use crate::{
    authorization::{authorize, resolve_batch_authority, Action},
    constants::SPLIT_PLUGIN_SEED,
    events::SettlementAddressesUpdated,
    state::SplitPlugin,
};

#[derive(Accounts)]
pub struct UpdateSettlementAddresses<'info> {
    #[account(
        mut,
        seeds = [SPLIT_PLUGIN_SEED, split_plugin.load()?.unique_id.as_ref()],
        bump = split_plugin.load()?.bump
    )]
    pub split_plugin: AccountLoader<'info, SplitPlugin>,

    /// CHECK: Validated against the stored factory in resolve_batch_authority
    pub batch_authority_record: AccountInfo<'info>,

    pub batch_authority: Signer<'info>,
}

/// Binds one settlement address per rate table entry, by position
/// Rates are untouched; may be repeated until the table is replaced
pub fn handler(ctx: Context<UpdateSettlementAddresses>, addresses: Vec<Pubkey>) -> Result<()> {
    let plugin_key = ctx.accounts.split_plugin.key();
    let split_plugin = &mut ctx.accounts.split_plugin.load_mut()?;

    // An unreadable or forged record resolves to no batch authority
    let resolved = resolve_batch_authority(
        &ctx.accounts.batch_authority_record,
        &split_plugin.factory,
        &plugin_key,
    )
    .ok();

    authorize(
        Action::UpdateSettlementAddresses,
        &ctx.accounts.batch_authority.key(),
        &split_plugin.principals(resolved),
    )?;
    let batch_authority = ctx.accounts.batch_authority.key();

    split_plugin.bind_settlement_addresses(&addresses)?;

    emit!(SettlementAddressesUpdated {
        plugin: plugin_key,
        batch_authority,
        entry_count: split_plugin.entry_count,
        table_version: split_plugin.table_version,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
