use anchor_lang::{
    prelude::*,
    system_program::{self, Transfer},
};
use anchor_spl::{
    associated_token::get_associated_token_address_with_program_id,
    token,
    token_2022::{self, spl_token_2022::state::AccountState},
    token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{constants::NATIVE_VAULT_SEED, errors::ErrorCode};

/// Pulls tokens from the payer into the plugin vault
pub fn transfer_tokens_in<'info>(
    from: &InterfaceAccount<'info, TokenAccount>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    mint: &InterfaceAccount<'info, Mint>,
    payer: &Signer<'info>,
    token_program: &Interface<'info, TokenInterface>,
    amount: u64,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: from.to_account_info(),
        mint: mint.to_account_info(),
        to: vault.to_account_info(),
        authority: payer.to_account_info(),
    };
    let cpi_ctx = CpiContext::new(token_program.to_account_info(), cpi_accounts);
    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)
}

/// Moves tokens out of the plugin vault, signed by the plugin PDA
pub fn transfer_tokens_out<'info>(
    vault: &InterfaceAccount<'info, TokenAccount>,
    to: AccountInfo<'info>,
    mint: &InterfaceAccount<'info, Mint>,
    split_plugin_info: &AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: &[&[&[u8]]],
    amount: u64,
) -> Result<()> {
    let cpi_accounts = TransferChecked {
        from: vault.to_account_info(),
        mint: mint.to_account_info(),
        to,
        authority: split_plugin_info.clone(),
    };
    let cpi_ctx = CpiContext::new_with_signer(
        token_program.to_account_info(),
        cpi_accounts,
        signer_seeds,
    );
    token_interface::transfer_checked(cpi_ctx, amount, mint.decimals)
}

/// Validates the settlement ATA and transfers tokens
/// Payout order is fixed by the rate table; any failure aborts the payment
#[allow(clippy::too_many_arguments)]
pub fn validate_and_send_to_settlement<'info>(
    settlement_ata_info: &'info AccountInfo<'info>,
    settlement_address: &Pubkey,
    amount: u64,
    mint: &InterfaceAccount<'info, Mint>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    split_plugin_info: &AccountInfo<'info>,
    token_program: &Interface<'info, TokenInterface>,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    validate_settlement_ata(
        settlement_ata_info,
        settlement_address,
        &mint.key(),
        &token_program.key(),
    )?;

    if amount == 0 {
        return Ok(()); // Nothing to move after rounding
    }

    transfer_tokens_out(
        vault,
        settlement_ata_info.clone(),
        mint,
        split_plugin_info,
        token_program,
        signer_seeds,
        amount,
    )
}

/// Validates that a settlement ATA exists, is canonical and can receive
pub fn validate_settlement_ata(
    ata_info: &AccountInfo,
    settlement_address: &Pubkey,
    mint: &Pubkey,
    token_program_id: &Pubkey,
) -> Result<()> {
    // Must have data
    require!(!ata_info.data_is_empty(), ErrorCode::SettlementAccountMissing);

    // Derive and validate canonical ATA address
    let expected_ata =
        get_associated_token_address_with_program_id(settlement_address, mint, token_program_id);
    require!(
        ata_info.key() == expected_ata,
        ErrorCode::SettlementAccountInvalid
    );

    // Must be owned by token program (SPL Token or Token-2022)
    let valid_owner = ata_info.owner == &token::ID || ata_info.owner == &token_2022::ID;
    require!(valid_owner, ErrorCode::InvalidTokenProgram);

    let token_account = TokenAccount::try_deserialize(&mut &ata_info.data.borrow()[..])
        .map_err(|_| ErrorCode::SettlementAccountInvalid)?;

    // Owner and mint must match the bound settlement address
    require!(
        token_account.owner == *settlement_address,
        ErrorCode::SettlementAccountInvalid
    );
    require!(token_account.mint == *mint, ErrorCode::SettlementAccountInvalid);

    // A frozen destination would fail inside the token program
    require!(
        token_account.state != AccountState::Frozen,
        ErrorCode::TransferFailure
    );

    Ok(())
}

/// Pulls lamports from the payer into the native vault
pub fn transfer_native_in<'info>(
    payer: &Signer<'info>,
    native_vault: &SystemAccount<'info>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    let cpi_ctx = CpiContext::new(
        system_program.to_account_info(),
        Transfer {
            from: payer.to_account_info(),
            to: native_vault.to_account_info(),
        },
    );
    system_program::transfer(cpi_ctx, amount)
}

/// Moves lamports out of the native vault, signed by the vault PDA
pub fn transfer_native_out<'info>(
    native_vault: &SystemAccount<'info>,
    to: AccountInfo<'info>,
    split_plugin_key: &Pubkey,
    native_vault_bump: u8,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    let seeds = &[
        NATIVE_VAULT_SEED,
        split_plugin_key.as_ref(),
        &[native_vault_bump],
    ];
    let signer_seeds = &[&seeds[..]];

    let cpi_ctx = CpiContext::new_with_signer(
        system_program.to_account_info(),
        Transfer {
            from: native_vault.to_account_info(),
            to,
        },
        signer_seeds,
    );
    system_program::transfer(cpi_ctx, amount)
}

/// Validates a native settlement account and transfers lamports
pub fn validate_and_send_native<'info>(
    settlement_info: &'info AccountInfo<'info>,
    settlement_address: &Pubkey,
    amount: u64,
    native_vault: &SystemAccount<'info>,
    split_plugin_key: &Pubkey,
    native_vault_bump: u8,
    system_program: &Program<'info, System>,
) -> Result<()> {
    require!(
        settlement_info.key() == *settlement_address,
        ErrorCode::SettlementAccountInvalid
    );
    require!(settlement_info.is_writable, ErrorCode::TransferFailure);

    if amount == 0 {
        return Ok(());
    }

    transfer_native_out(
        native_vault,
        settlement_info.clone(),
        split_plugin_key,
        native_vault_bump,
        system_program,
        amount,
    )
}

/// Lamports held above the rent-exempt reserve
pub fn recoverable_lamports(vault_lamports: u64, reserve: u64) -> u64 {
    vault_lamports.saturating_sub(reserve)
}
