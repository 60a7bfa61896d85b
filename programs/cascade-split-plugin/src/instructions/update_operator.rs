use anchor_lang::prelude::*;

use crate::{
    authorization::{authorize, Action},
    constants::SPLIT_PLUGIN_SEED,
    errors::ErrorCode,
    events::OperatorUpdated,
    state::SplitPlugin,
};

#[derive(Accounts)]
pub struct UpdateOperator<'info> {
    #[account(
        mut,
        seeds = [SPLIT_PLUGIN_SEED, split_plugin.load()?.unique_id.as_ref()],
        bump = split_plugin.load()?.bump
    )]
    pub split_plugin: AccountLoader<'info, SplitPlugin>,

    /// Owner or current operator
    pub authority: Signer<'info>,
}

/// Rotates the operator
pub fn handler(ctx: Context<UpdateOperator>, new_operator: Pubkey) -> Result<()> {
    let split_plugin = &mut ctx.accounts.split_plugin.load_mut()?;

    authorize(
        Action::UpdateOperator,
        &ctx.accounts.authority.key(),
        &split_plugin.principals(None),
    )?;

    // Validate operator is not zero address
    require!(new_operator != Pubkey::default(), ErrorCode::InvalidAddress);

    let old_operator = split_plugin.operator;
    split_plugin.operator = new_operator;

    emit!(OperatorUpdated {
        plugin: ctx.accounts.split_plugin.key(),
        updated_by: ctx.accounts.authority.key(),
        old_operator,
        new_operator,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
