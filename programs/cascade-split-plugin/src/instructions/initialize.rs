use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer},
};

use crate::{
    constants::{MAX_SPLITS, NATIVE_VAULT_SEED, SPLIT_PLUGIN_SEED, SPLIT_PLUGIN_SIZE},
    errors::ErrorCode,
    events::PluginInitialized,
    state::{RecipientEntry, SplitPlugin},
};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = owner,
        space = SPLIT_PLUGIN_SIZE,
        seeds = [SPLIT_PLUGIN_SEED, unique_id.key().as_ref()],
        bump
    )]
    pub split_plugin: AccountLoader<'info, SplitPlugin>,

    /// Signs so nobody can squat another caller's plugin address
    pub unique_id: Signer<'info>,

    #[account(
        mut,
        seeds = [NATIVE_VAULT_SEED, split_plugin.key().as_ref()],
        bump
    )]
    pub native_vault: SystemAccount<'info>,

    /// CHECK: Registry program that resolves the batch authority; stored, never invoked
    #[account(executable)]
    pub factory: AccountInfo<'info>,

    /// Becomes the plugin owner and pays rent
    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates the plugin with an empty rate table
/// The table stays unconfigured until the operator's first update
pub fn handler(ctx: Context<Initialize>, operator: Pubkey) -> Result<()> {
    require!(operator != Pubkey::default(), ErrorCode::InvalidAddress);

    {
        let split_plugin = &mut ctx.accounts.split_plugin.load_init()?;

        split_plugin.version = 1;
        split_plugin.bump = ctx.bumps.split_plugin;
        split_plugin.native_vault_bump = ctx.bumps.native_vault;
        split_plugin.entry_count = 0;
        split_plugin.table_version = 0;
        split_plugin.owner = ctx.accounts.owner.key();
        split_plugin.pending_owner = Pubkey::default();
        split_plugin.operator = operator;
        split_plugin.factory = ctx.accounts.factory.key();
        split_plugin.unique_id = ctx.accounts.unique_id.key();
        split_plugin.entries = [RecipientEntry::default(); MAX_SPLITS];
    }

    // Native custody must stay rent exempt once payments leave dust behind
    let reserve = Rent::get()?.minimum_balance(0);
    let shortfall = reserve.saturating_sub(ctx.accounts.native_vault.lamports());
    if shortfall > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.owner.to_account_info(),
                    to: ctx.accounts.native_vault.to_account_info(),
                },
            ),
            shortfall,
        )?;
    }

    emit!(PluginInitialized {
        plugin: ctx.accounts.split_plugin.key(),
        owner: ctx.accounts.owner.key(),
        operator,
        factory: ctx.accounts.factory.key(),
        unique_id: ctx.accounts.unique_id.key(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
