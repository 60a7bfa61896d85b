use anchor_lang::prelude::*;

use crate::{constants::SPLIT_PLUGIN_SEED, state::SplitPlugin};

#[derive(Accounts)]
pub struct ViewOperator<'info> {
    #[account(
        seeds = [SPLIT_PLUGIN_SEED, split_plugin.load()?.unique_id.as_ref()],
        bump = split_plugin.load()?.bump
    )]
    pub split_plugin: AccountLoader<'info, SplitPlugin>,
}

pub fn handler(ctx: Context<ViewOperator>) -> Result<Pubkey> {
    Ok(ctx.accounts.split_plugin.load()?.operator)
}
