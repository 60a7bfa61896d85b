use anchor_lang::prelude::*;

use crate::{
    constants::SPLIT_PLUGIN_SEED, errors::ErrorCode, events::OwnershipTransferAccepted,
    state::SplitPlugin,
};

#[derive(Accounts)]
pub struct AcceptOwnership<'info> {
    #[account(
        mut,
        seeds = [SPLIT_PLUGIN_SEED, split_plugin.load()?.unique_id.as_ref()],
        bump = split_plugin.load()?.bump
    )]
    pub split_plugin: AccountLoader<'info, SplitPlugin>,

    pub new_owner: Signer<'info>,
}

/// Completes a pending ownership transfer and clears pending_owner
pub fn handler(ctx: Context<AcceptOwnership>) -> Result<()> {
    let split_plugin = &mut ctx.accounts.split_plugin.load_mut()?;

    require!(
        split_plugin.pending_owner != Pubkey::default(),
        ErrorCode::NoPendingTransfer
    );

    require!(
        split_plugin.pending_owner == ctx.accounts.new_owner.key(),
        ErrorCode::Unauthorized
    );

    let old_owner = split_plugin.owner;
    let new_owner = ctx.accounts.new_owner.key();

    split_plugin.owner = new_owner;
    split_plugin.pending_owner = Pubkey::default();

    emit!(OwnershipTransferAccepted {
        plugin: ctx.accounts.split_plugin.key(),
        old_owner,
        new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
