//! Serialization helpers for zero-copy Anchor structs
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! Zero-copy structs use raw bytes with 8-byte Anchor discriminator prefix
//! Layout must match #[repr(C)] struct definitions exactly

use solana_sdk::pubkey::Pubkey;

// Constants matching the program
pub const MAX_SPLITS: usize = 10;
pub const RECIPIENT_ENTRY_SIZE: usize = 88;
pub const SPLIT_PLUGIN_SIZE: usize = 1064;
pub const BATCH_AUTHORITY_RECORD_LEN: usize = 72;

const ENTRIES_OFFSET: usize = 184;

// Anchor discriminator (first 8 bytes of sha256("account:SplitPlugin"))
pub const SPLIT_PLUGIN_DISCRIMINATOR: [u8; 8] = [0x73, 0x83, 0xfd, 0x6b, 0x4b, 0x7a, 0xf1, 0x83];

/// Arbitrary account tag the factory writes ahead of the record fields
pub const BATCH_AUTHORITY_RECORD_DISCRIMINATOR: [u8; 8] = *b"batchaut";

/// Rate table entry for serialization
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EntryData {
    pub source_address: Pubkey,
    pub settlement_address: Pubkey,
    pub chain_tag: u64,
    pub asset_ref: u64,
    pub share_rate_bps: u16,
}

impl EntryData {
    /// Entry with a bound settlement address
    pub fn bound(settlement_address: Pubkey, share_rate_bps: u16) -> Self {
        Self {
            source_address: Pubkey::new_unique(),
            settlement_address,
            chain_tag: 1,
            asset_ref: 0,
            share_rate_bps,
        }
    }

    /// Entry awaiting its settlement address
    pub fn unbound(share_rate_bps: u16) -> Self {
        Self::bound(Pubkey::default(), share_rate_bps)
    }
}

/// SplitPlugin fields for serialization
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PluginData {
    pub version: u8,
    pub bump: u8,
    pub native_vault_bump: u8,
    pub table_version: u64,
    pub owner: Pubkey,
    pub pending_owner: Pubkey,
    pub operator: Pubkey,
    pub factory: Pubkey,
    pub unique_id: Pubkey,
    pub entries: Vec<EntryData>,
}

fn write_pubkey(data: &mut [u8], offset: usize, key: &Pubkey) {
    data[offset..offset + 32].copy_from_slice(&key.to_bytes());
}

fn read_pubkey(data: &[u8], offset: usize) -> Pubkey {
    Pubkey::new_from_array(data[offset..offset + 32].try_into().unwrap())
}

fn read_u64(data: &[u8], offset: usize) -> u64 {
    u64::from_le_bytes(data[offset..offset + 8].try_into().unwrap())
}

/// Serialize SplitPlugin for test account data
///
/// Layout (zero-copy #[repr(C)]):
/// - 8 bytes: discriminator
/// - 1 byte each: version, bump, native_vault_bump, entry_count
/// - 4 bytes: padding
/// - 8 bytes: table_version
/// - 32 bytes each: owner, pending_owner, operator, factory, unique_id
/// - 880 bytes: entries [RecipientEntry; 10] = 88 * 10
///
/// RecipientEntry (88 bytes):
/// - 32 source_address, 32 settlement_address, 8 chain_tag, 8 asset_ref,
///   2 share_rate_bps, 6 reserved
pub fn serialize_split_plugin(plugin: &PluginData) -> Vec<u8> {
    assert!(plugin.entries.len() <= MAX_SPLITS);

    let mut data = vec![0u8; SPLIT_PLUGIN_SIZE];

    data[0..8].copy_from_slice(&SPLIT_PLUGIN_DISCRIMINATOR);
    data[8] = plugin.version;
    data[9] = plugin.bump;
    data[10] = plugin.native_vault_bump;
    data[11] = plugin.entries.len() as u8;
    data[16..24].copy_from_slice(&plugin.table_version.to_le_bytes());
    write_pubkey(&mut data, 24, &plugin.owner);
    write_pubkey(&mut data, 56, &plugin.pending_owner);
    write_pubkey(&mut data, 88, &plugin.operator);
    write_pubkey(&mut data, 120, &plugin.factory);
    write_pubkey(&mut data, 152, &plugin.unique_id);

    for (i, entry) in plugin.entries.iter().enumerate() {
        let offset = ENTRIES_OFFSET + i * RECIPIENT_ENTRY_SIZE;
        write_pubkey(&mut data, offset, &entry.source_address);
        write_pubkey(&mut data, offset + 32, &entry.settlement_address);
        data[offset + 64..offset + 72].copy_from_slice(&entry.chain_tag.to_le_bytes());
        data[offset + 72..offset + 80].copy_from_slice(&entry.asset_ref.to_le_bytes());
        data[offset + 80..offset + 82].copy_from_slice(&entry.share_rate_bps.to_le_bytes());
    }

    data
}

/// Deserialize SplitPlugin account data back into test form
///
/// Only the first entry_count entries are returned.
pub fn deserialize_split_plugin(data: &[u8]) -> PluginData {
    assert_eq!(data.len(), SPLIT_PLUGIN_SIZE);
    assert_eq!(data[0..8], SPLIT_PLUGIN_DISCRIMINATOR);

    let entry_count = data[11] as usize;
    let entries = (0..entry_count)
        .map(|i| {
            let offset = ENTRIES_OFFSET + i * RECIPIENT_ENTRY_SIZE;
            EntryData {
                source_address: read_pubkey(data, offset),
                settlement_address: read_pubkey(data, offset + 32),
                chain_tag: read_u64(data, offset + 64),
                asset_ref: read_u64(data, offset + 72),
                share_rate_bps: u16::from_le_bytes([data[offset + 80], data[offset + 81]]),
            }
        })
        .collect();

    PluginData {
        version: data[8],
        bump: data[9],
        native_vault_bump: data[10],
        table_version: read_u64(data, 16),
        owner: read_pubkey(data, 24),
        pending_owner: read_pubkey(data, 56),
        operator: read_pubkey(data, 88),
        factory: read_pubkey(data, 120),
        unique_id: read_pubkey(data, 152),
        entries,
    }
}

/// Entry slots past entry_count, raw bytes
pub fn trailing_entry_bytes(data: &[u8]) -> &[u8] {
    let entry_count = data[11] as usize;
    &data[ENTRIES_OFFSET + entry_count * RECIPIENT_ENTRY_SIZE..]
}

/// Serialize the factory's batch authority record
///
/// Layout:
/// - 8 bytes: discriminator
/// - 32 bytes: plugin
/// - 32 bytes: batch authority
pub fn serialize_batch_authority_record(plugin: &Pubkey, batch_authority: &Pubkey) -> Vec<u8> {
    let mut data = vec![0u8; BATCH_AUTHORITY_RECORD_LEN];
    data[0..8].copy_from_slice(&BATCH_AUTHORITY_RECORD_DISCRIMINATOR);
    write_pubkey(&mut data, 8, plugin);
    write_pubkey(&mut data, 40, batch_authority);
    data
}

/// Rate table entry as returned by view_rate_table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RateEntryView {
    pub chain_tag: u64,
    pub asset_ref: u64,
    pub source_address: Pubkey,
    pub settlement_address: Option<Pubkey>,
    pub share_rate_bps: u16,
}

/// Decode the Borsh-encoded Vec<RateEntryView> return data
pub fn deserialize_rate_table_view(data: &[u8]) -> Vec<RateEntryView> {
    let len = u32::from_le_bytes(data[0..4].try_into().unwrap()) as usize;
    let mut offset = 4;
    let mut views = Vec::with_capacity(len);

    for _ in 0..len {
        let chain_tag = read_u64(data, offset);
        let asset_ref = read_u64(data, offset + 8);
        let source_address = read_pubkey(data, offset + 16);
        offset += 48;

        let settlement_address = match data[offset] {
            0 => {
                offset += 1;
                None
            }
            _ => {
                let key = read_pubkey(data, offset + 1);
                offset += 33;
                Some(key)
            }
        };

        let share_rate_bps = u16::from_le_bytes([data[offset], data[offset + 1]]);
        offset += 2;

        views.push(RateEntryView {
            chain_tag,
            asset_ref,
            source_address,
            settlement_address,
            share_rate_bps,
        });
    }

    assert_eq!(offset, data.len());
    views
}
