use anchor_lang::prelude::*;

#[event]
pub struct PluginInitialized {
    pub plugin: Pubkey,
    pub owner: Pubkey,
    pub operator: Pubkey,
    pub factory: Pubkey,
    pub unique_id: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RateTableUpdated {
    pub plugin: Pubkey,
    pub operator: Pubkey,
    pub old_entry_count: u8,
    pub new_entry_count: u8,
    pub table_version: u64,
    pub timestamp: i64,
}

#[event]
pub struct SettlementAddressesUpdated {
    pub plugin: Pubkey,
    pub batch_authority: Pubkey,
    pub entry_count: u8,
    pub table_version: u64,
    pub timestamp: i64,
}

#[event]
pub struct OperatorUpdated {
    pub plugin: Pubkey,
    pub updated_by: Pubkey,
    pub old_operator: Pubkey,
    pub new_operator: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferProposed {
    pub plugin: Pubkey,
    pub owner: Pubkey,
    pub pending_owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct OwnershipTransferAccepted {
    pub plugin: Pubkey,
    pub old_owner: Pubkey,
    pub new_owner: Pubkey,
    pub timestamp: i64,
}

/// One record per rate table entry paid out
#[event]
pub struct PaymentDistributed {
    pub plugin: Pubkey,
    pub settlement_address: Pubkey,
    pub token: Pubkey,
    pub amount: u64,
    pub share_rate_bps: u16,
}

#[event]
pub struct PaymentReceived {
    pub plugin: Pubkey,
    pub payer: Pubkey,
    pub token: Pubkey,
    /// Requested by the payer
    pub amount: u64,
    /// Added to custody, less any mint transfer fee
    pub received: u64,
    pub distributed: u64,
    pub retained: u64,
    pub payment_id: [u8; 32],
    pub merchant_id: [u8; 32],
    pub table_version: u64,
    pub timestamp: i64,
}

#[event]
pub struct StrandedTokensRecovered {
    pub plugin: Pubkey,
    pub owner: Pubkey,
    pub token: Pubkey,
    pub amount: u64,
    pub timestamp: i64,
}
