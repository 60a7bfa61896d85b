use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::{
    authorization::{authorize, Action},
    constants::SPLIT_PLUGIN_SEED,
    errors::ErrorCode,
    events::StrandedTokensRecovered,
    state::SplitPlugin,
    utils::transfer_tokens_out,
};

#[derive(Accounts)]
pub struct RecoverStrandedTokens<'info> {
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
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token_account: InterfaceAccount<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Moves stranded tokens (direct transfers, rounding dust) to the owner
pub fn handler(ctx: Context<RecoverStrandedTokens>, amount: u64) -> Result<()> {
    let (unique_id, bump) = {
        let split_plugin = ctx.accounts.split_plugin.load()?;

        authorize(
            Action::RecoverStrandedTokens,
            &ctx.accounts.owner.key(),
            &split_plugin.principals(None),
        )?;

        (split_plugin.unique_id, split_plugin.bump)
    };

    require!(
        amount <= ctx.accounts.vault.amount,
        ErrorCode::InsufficientCustody
    );

    let seeds = &[SPLIT_PLUGIN_SEED, unique_id.as_ref(), &[bump]];
    let signer_seeds = &[&seeds[..]];

    transfer_tokens_out(
        &ctx.accounts.vault,
        ctx.accounts.owner_token_account.to_account_info(),
        &ctx.accounts.mint,
        &ctx.accounts.split_plugin.to_account_info(),
        &ctx.accounts.token_program,
        signer_seeds,
        amount,
    )?;

    emit!(StrandedTokensRecovered {
        plugin: ctx.accounts.split_plugin.key(),
        owner: ctx.accounts.owner.key(),
        token: ctx.accounts.mint.key(),
        amount,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
