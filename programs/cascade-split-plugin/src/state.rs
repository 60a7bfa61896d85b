use anchor_lang::prelude::*;

use crate::{
    authorization::Principals,
    constants::{MAX_SPLITS, MIN_SPLITS, TOTAL_RATE_BPS},
    errors::ErrorCode,
};

/// One payment splitter instance with zero-copy for optimal compute efficiency
#[account(zero_copy(unsafe))]
#[repr(C)]
#[derive(Default)]
pub struct SplitPlugin {
    /// Schema version for future upgrades
    pub version: u8,
    /// Bump seed for PDA derivation (stored for CU optimization)
    pub bump: u8,
    /// Bump seed of the native lamport custody PDA
    pub native_vault_bump: u8,
    /// Number of active rate table entries (0 until first configured)
    pub entry_count: u8,
    pub _padding: [u8; 4],
    /// Incremented on every rate table replacement
    pub table_version: u64,
    /// Owner, may recover stranded funds and rotate the operator
    pub owner: Pubkey,
    /// Pending owner for two-step handover (default = no pending transfer)
    pub pending_owner: Pubkey,
    /// Operator that configures the rate table
    pub operator: Pubkey,
    /// Registry program holding the batch authority record for this plugin
    pub factory: Pubkey,
    /// Unique identifier enabling multiple plugins per owner
    pub unique_id: Pubkey,
    /// Fixed array of entries (use entry_count to determine active entries)
    pub entries: [RecipientEntry; MAX_SPLITS],
}

/// Rate table entry
#[zero_copy(unsafe)]
#[repr(C)]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct RecipientEntry {
    /// Entity the entry represents
    pub source_address: Pubkey,
    /// Payout destination, default until bound by the batch authority
    pub settlement_address: Pubkey,
    /// Opaque chain identifier
    pub chain_tag: u64,
    /// Opaque external asset identifier
    pub asset_ref: u64,
    /// Share in basis points (10000 = 100%)
    pub share_rate_bps: u16,
    pub _reserved: [u8; 6],
}

/// Input struct for rate table entries (used in instruction parameters)
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RateInput {
    pub chain_tag: u64,
    pub asset_ref: u64,
    pub source_address: Pubkey,
    pub share_rate_bps: u16,
}

/// Read model returned by view_rate_table
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RateEntryView {
    pub chain_tag: u64,
    pub asset_ref: u64,
    pub source_address: Pubkey,
    pub settlement_address: Option<Pubkey>,
    pub share_rate_bps: u16,
}

impl RecipientEntry {
    pub fn unbound(input: &RateInput) -> Self {
        Self {
            source_address: input.source_address,
            settlement_address: Pubkey::default(),
            chain_tag: input.chain_tag,
            asset_ref: input.asset_ref,
            share_rate_bps: input.share_rate_bps,
            _reserved: [0; 6],
        }
    }

    pub fn is_bound(&self) -> bool {
        self.settlement_address != Pubkey::default()
    }

    pub fn view(&self) -> RateEntryView {
        RateEntryView {
            chain_tag: self.chain_tag,
            asset_ref: self.asset_ref,
            source_address: self.source_address,
            settlement_address: self.is_bound().then_some(self.settlement_address),
            share_rate_bps: self.share_rate_bps,
        }
    }
}

impl SplitPlugin {
    /// Active entries in table order
    /// A count past the array capacity means the account is corrupt
    pub fn rate_table(&self) -> Result<&[RecipientEntry]> {
        self.entries
            .get(..self.entry_count as usize)
            .ok_or_else(|| error!(ErrorCode::InvalidSplitConfiguration))
    }

    pub fn principals(&self, batch_authority: Option<Pubkey>) -> Principals {
        Principals {
            owner: self.owner,
            operator: self.operator,
            batch_authority,
        }
    }

    /// Replaces the whole rate table; every settlement address becomes unbound
    /// Nothing is written unless all inputs validate
    pub fn replace_rate_table(&mut self, inputs: &[RateInput]) -> Result<()> {
        validate_rate_inputs(inputs)?;

        let next_version = self
            .table_version
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;

        let mut entries = [RecipientEntry::default(); MAX_SPLITS];
        for (slot, input) in entries.iter_mut().zip(inputs) {
            *slot = RecipientEntry::unbound(input);
        }

        self.entries = entries;
        self.entry_count = inputs.len() as u8;
        self.table_version = next_version;

        Ok(())
    }

    /// Binds settlement addresses positionally: addresses[i] -> entry i
    pub fn bind_settlement_addresses(&mut self, addresses: &[Pubkey]) -> Result<()> {
        let count = self.rate_table()?.len();

        require!(
            count > 0 && addresses.len() == count,
            ErrorCode::LengthMismatch
        );
        require!(
            addresses.iter().all(|address| *address != Pubkey::default()),
            ErrorCode::InvalidAddress
        );

        for (entry, address) in self.entries[..count].iter_mut().zip(addresses) {
            entry.settlement_address = *address;
        }

        Ok(())
    }
}

/// Validates entry count, source addresses and the 100% rate total
pub fn validate_rate_inputs(inputs: &[RateInput]) -> Result<()> {
    require!(
        (MIN_SPLITS..=MAX_SPLITS).contains(&inputs.len()),
        ErrorCode::InvalidConfiguration
    );

    require!(
        inputs
            .iter()
            .all(|input| input.source_address != Pubkey::default()),
        ErrorCode::InvalidConfiguration
    );

    // u16 max (65535) * 10 cannot overflow u32, checked anyway
    let total_bps: u32 = inputs
        .iter()
        .try_fold(0u32, |acc, input| acc.checked_add(input.share_rate_bps as u32))
        .ok_or(ErrorCode::MathOverflow)?;

    require!(
        total_bps == TOTAL_RATE_BPS as u32,
        ErrorCode::InvalidConfiguration
    );

    Ok(())
}

// Compile-time size assertions to catch accidental struct changes
const _: () = assert!(std::mem::size_of::<RecipientEntry>() == 88);

// SplitPlugin: See constants.rs for full breakdown = 1064
const _: () = assert!(std::mem::size_of::<SplitPlugin>() == 1056); // 1064 - 8 (discriminator added by Anchor)
