//! Pre-built plugin state shared by the instruction tests
//!
//! A fixture holds every principal and derived address for one plugin
//! so each test only spells out what it changes.

use {
    super::{
        accounts::{executable_account, program_account, system_account},
        instructions::{
            derive_batch_authority_record, derive_native_vault, derive_split_plugin, PROGRAM_ID,
        },
        serialization::{
            serialize_batch_authority_record, serialize_split_plugin, EntryData, PluginData,
            SPLIT_PLUGIN_SIZE,
        },
    },
    solana_sdk::{account::Account, pubkey::Pubkey, rent::Rent},
};

pub struct PluginFixture {
    pub owner: Pubkey,
    pub operator: Pubkey,
    pub batch_authority: Pubkey,
    pub factory: Pubkey,
    pub unique_id: Pubkey,
    pub split_plugin: Pubkey,
    pub bump: u8,
    pub native_vault: Pubkey,
    pub native_vault_bump: u8,
    pub batch_authority_record: Pubkey,
}

impl PluginFixture {
    pub fn new() -> Self {
        let unique_id = Pubkey::new_unique();
        let factory = Pubkey::new_unique();
        let (split_plugin, bump) = derive_split_plugin(&unique_id);
        let (native_vault, native_vault_bump) = derive_native_vault(&split_plugin);
        let (batch_authority_record, _) = derive_batch_authority_record(&factory, &split_plugin);

        Self {
            owner: Pubkey::new_unique(),
            operator: Pubkey::new_unique(),
            batch_authority: Pubkey::new_unique(),
            factory,
            unique_id,
            split_plugin,
            bump,
            native_vault,
            native_vault_bump,
            batch_authority_record,
        }
    }

    /// Plugin state holding the given table at version 1
    pub fn plugin_data(&self, entries: &[EntryData]) -> PluginData {
        PluginData {
            version: 1,
            bump: self.bump,
            native_vault_bump: self.native_vault_bump,
            table_version: if entries.is_empty() { 0 } else { 1 },
            owner: self.owner,
            pending_owner: Pubkey::default(),
            operator: self.operator,
            factory: self.factory,
            unique_id: self.unique_id,
            entries: entries.to_vec(),
        }
    }

    pub fn plugin_account(&self, entries: &[EntryData], rent: &Rent) -> Account {
        self.plugin_account_from(&self.plugin_data(entries), rent)
    }

    pub fn plugin_account_from(&self, plugin: &PluginData, rent: &Rent) -> Account {
        program_account(
            rent.minimum_balance(SPLIT_PLUGIN_SIZE),
            serialize_split_plugin(plugin),
            PROGRAM_ID,
        )
    }

    pub fn plugin(&self, entries: &[EntryData], rent: &Rent) -> (Pubkey, Account) {
        (self.split_plugin, self.plugin_account(entries, rent))
    }

    /// Factory-owned record naming the current batch authority
    pub fn batch_authority_record(&self, rent: &Rent) -> (Pubkey, Account) {
        self.batch_authority_record_naming(&self.batch_authority, rent)
    }

    pub fn batch_authority_record_naming(
        &self,
        batch_authority: &Pubkey,
        rent: &Rent,
    ) -> (Pubkey, Account) {
        let data = serialize_batch_authority_record(&self.split_plugin, batch_authority);
        (
            self.batch_authority_record,
            program_account(rent.minimum_balance(data.len()), data, self.factory),
        )
    }

    pub fn factory_account(&self) -> (Pubkey, Account) {
        (self.factory, executable_account())
    }

    /// Native custody holding the rent reserve plus `extra` lamports
    pub fn native_vault_account(&self, rent: &Rent, extra: u64) -> (Pubkey, Account) {
        (
            self.native_vault,
            system_account(rent.minimum_balance(0) + extra),
        )
    }
}
