use anchor_lang::prelude::*;

pub mod authorization;
pub mod constants;
pub mod distribution;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
mod utils;

use instructions::*;
use state::{RateEntryView, RateInput};

declare_id!("6anbDQNCcVh2f6okexjaX1VGj6tEnizJ1kV5UTBS8Zhi");

// Security contact information (embedded on-chain)
#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "Cascade Split Plugin",
    project_url: "https://cascade-protocol.xyz",
    contacts: "email:hello@cascade-protocol.xyz,link:https://github.com/cascade-protocol/splits/security",
    policy: "https://github.com/cascade-protocol/splits/blob/main/SECURITY.md",
    source_code: "https://github.com/cascade-protocol/splits",
    source_release: "v0.1.0"
}

#[program]
pub mod cascade_split_plugin {
    use super::*;

    /// Creates a plugin instance owned by the signer
    /// The factory program is recorded once and resolves the batch authority
    pub fn initialize(ctx: Context<Initialize>, operator: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, operator)
    }

    /// Replaces the rate table and clears every settlement address
    /// Only callable by the operator
    pub fn update_rate_table(ctx: Context<UpdateRateTable>, entries: Vec<RateInput>) -> Result<()> {
        instructions::update_rate_table::handler(ctx, entries)
    }

    /// Binds settlement addresses to rate table entries by position
    /// Only callable by the batch authority resolved from the factory registry
    pub fn update_settlement_addresses(
        ctx: Context<UpdateSettlementAddresses>,
        addresses: Vec<Pubkey>,
    ) -> Result<()> {
        instructions::update_settlement_addresses::handler(ctx, addresses)
    }

    /// Rotates the operator
    /// Callable by the owner or the current operator
    pub fn update_operator(ctx: Context<UpdateOperator>, new_operator: Pubkey) -> Result<()> {
        instructions::update_operator::handler(ctx, new_operator)
    }

    /// Returns the current operator
    pub fn view_operator(ctx: Context<ViewOperator>) -> Result<Pubkey> {
        instructions::view_operator::handler(ctx)
    }

    /// Returns the rate table
    /// Only callable by the operator or the batch authority
    pub fn view_rate_table(ctx: Context<ViewRateTable>) -> Result<Vec<RateEntryView>> {
        instructions::view_rate_table::handler(ctx)
    }

    /// Receives a token payment and distributes it across the rate table
    /// Permissionless - anyone can call
    pub fn receive_payment<'info>(
        ctx: Context<'_, '_, 'info, 'info, ReceivePayment<'info>>,
        amount: u64,
        metadata: PaymentMetadata,
    ) -> Result<()> {
        instructions::receive_payment::handler(ctx, amount, metadata)
    }

    /// Receives a lamport payment and distributes it across the rate table
    /// Permissionless - anyone can call
    pub fn receive_native_payment<'info>(
        ctx: Context<'_, '_, 'info, 'info, ReceiveNativePayment<'info>>,
        amount: u64,
        metadata: PaymentMetadata,
    ) -> Result<()> {
        instructions::receive_native_payment::handler(ctx, amount, metadata)
    }

    /// Moves stranded tokens out of custody to the owner
    pub fn recover_stranded_tokens(ctx: Context<RecoverStrandedTokens>, amount: u64) -> Result<()> {
        instructions::recover_stranded_tokens::handler(ctx, amount)
    }

    /// Moves stranded lamports above the rent reserve to the owner
    pub fn recover_stranded_native(ctx: Context<RecoverStrandedNative>, amount: u64) -> Result<()> {
        instructions::recover_stranded_native::handler(ctx, amount)
    }

    /// Capability probe, always true
    pub fn supports_distribution_interface(
        ctx: Context<SupportsDistributionInterface>,
    ) -> Result<bool> {
        instructions::supports_distribution_interface::handler(ctx)
    }

    /// Proposes ownership transfer to a new address (two-step pattern)
    /// Only callable by the current owner
    pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::handler(ctx, new_owner)
    }

    /// Accepts a pending ownership transfer
    /// Only callable by the pending owner
    pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
        instructions::accept_ownership::handler(ctx)
    }
}
