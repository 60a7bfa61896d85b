use anchor_lang::prelude::Pubkey;

// Rate configuration
pub const TOTAL_RATE_BPS: u16 = 10000;   // Entries must total 100%

// Rate table limits
pub const MIN_SPLITS: usize = 1;
pub const MAX_SPLITS: usize = 10;

// Sentinel token identity for native lamport payments (events only)
pub const NATIVE_TOKEN: Pubkey = Pubkey::new_from_array([0u8; 32]);

// PDA seeds
pub const SPLIT_PLUGIN_SEED: &[u8] = b"split_plugin";
pub const NATIVE_VAULT_SEED: &[u8] = b"native_vault";
pub const BATCH_AUTHORITY_SEED: &[u8] = b"batch_authority";

// Factory registry record layout (owned by the factory program):
// - record discriminator: 8 (opaque to this program)
// - plugin: 32
// - batch_authority: 32
pub const BATCH_AUTHORITY_RECORD_PLUGIN_OFFSET: usize = 8;
pub const BATCH_AUTHORITY_RECORD_AUTHORITY_OFFSET: usize = 40;
pub const BATCH_AUTHORITY_RECORD_LEN: usize = 72;

// SplitPlugin size calculation:
// - discriminator: 8
// - version: 1
// - bump: 1
// - native_vault_bump: 1
// - entry_count: 1
// - padding: 4
// - table_version: 8
// - owner: 32
// - pending_owner: 32
// - operator: 32
// - factory: 32
// - unique_id: 32
// - entries: [RecipientEntry; 10] = (32 + 32 + 8 + 8 + 2 + 6) * 10 = 880
// Total: 8 + 8 + 8 + 160 + 880 = 1064
pub const SPLIT_PLUGIN_SIZE: usize = 1064;
