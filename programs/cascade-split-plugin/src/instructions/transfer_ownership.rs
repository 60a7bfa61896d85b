use anchor_lang::prelude::*;

use crate::{
    authorization::{authorize, Action},
    constants::SPLIT_PLUGIN_SEED,
    events::OwnershipTransferProposed,
    state::SplitPlugin,
};

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    #[account(
        mut,
        seeds = [SPLIT_PLUGIN_SEED, split_plugin.load()?.unique_id.as_ref()],
        bump = split_plugin.load()?.bump
    )]
    pub split_plugin: AccountLoader<'info, SplitPlugin>,

    pub owner: Signer<'info>,
}

/// Proposes ownership transfer to a new address (two-step pattern)
/// New owner must call accept_ownership to complete the transfer
/// Can be overwritten by calling again with a different address
/// Set to Pubkey::default() to cancel the pending transfer
pub fn handler(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    let split_plugin = &mut ctx.accounts.split_plugin.load_mut()?;

    authorize(
        Action::TransferOwnership,
        &ctx.accounts.owner.key(),
        &split_plugin.principals(None),
    )?;

    split_plugin.pending_owner = new_owner;

    emit!(OwnershipTransferProposed {
        plugin: ctx.accounts.split_plugin.key(),
        owner: ctx.accounts.owner.key(),
        pending_owner: new_owner,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
