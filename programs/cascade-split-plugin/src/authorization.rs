use anchor_lang::prelude::*;

use crate::{
    constants::{
        BATCH_AUTHORITY_RECORD_AUTHORITY_OFFSET, BATCH_AUTHORITY_RECORD_LEN,
        BATCH_AUTHORITY_RECORD_PLUGIN_OFFSET, BATCH_AUTHORITY_SEED,
    },
    errors::ErrorCode,
};

/// Gated operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    UpdateRateTable,
    UpdateSettlementAddresses,
    UpdateOperator,
    ViewRateTable,
    RecoverStrandedTokens,
    TransferOwnership,
    ReceivePayment,
}

/// Principals known at decision time
/// `batch_authority` is None when it was not resolved for this call
#[derive(Clone, Copy, Debug)]
pub struct Principals {
    pub owner: Pubkey,
    pub operator: Pubkey,
    pub batch_authority: Option<Pubkey>,
}

/// A default principal never matches
fn is(principal: &Pubkey, caller: &Pubkey) -> bool {
    *principal != Pubkey::default() && principal == caller
}

impl Principals {
    fn is_owner(&self, caller: &Pubkey) -> bool {
        is(&self.owner, caller)
    }

    fn is_operator(&self, caller: &Pubkey) -> bool {
        is(&self.operator, caller)
    }

    fn is_batch_authority(&self, caller: &Pubkey) -> bool {
        self.batch_authority
            .is_some_and(|authority| is(&authority, caller))
    }
}

pub fn is_allowed(action: Action, caller: &Pubkey, principals: &Principals) -> bool {
    match action {
        Action::UpdateRateTable => principals.is_operator(caller),
        Action::UpdateSettlementAddresses => principals.is_batch_authority(caller),
        Action::UpdateOperator => principals.is_owner(caller) || principals.is_operator(caller),
        Action::ViewRateTable => {
            principals.is_operator(caller) || principals.is_batch_authority(caller)
        }
        Action::RecoverStrandedTokens | Action::TransferOwnership => principals.is_owner(caller),
        Action::ReceivePayment => true,
    }
}

pub fn authorize(action: Action, caller: &Pubkey, principals: &Principals) -> Result<()> {
    if !is_allowed(action, caller, principals) {
        #[cfg(feature = "verbose")]
        msg!("{:?} denied for {}", action, caller);

        return err!(ErrorCode::Unauthorized);
    }
    Ok(())
}

/// Reads the batch authority for `plugin` from the factory registry record
/// Never cached: rotation or revocation in the registry applies immediately
/// Handlers treat a failed read as "no batch authority" and let `authorize`
/// deny the caller
pub fn resolve_batch_authority(
    record_info: &AccountInfo,
    factory: &Pubkey,
    plugin: &Pubkey,
) -> Result<Pubkey> {
    // Must be written by the registry program
    require!(
        record_info.owner == factory,
        ErrorCode::InvalidBatchAuthorityRecord
    );

    // Must be the record the registry keeps for this plugin
    let (expected_record, _) =
        Pubkey::find_program_address(&[BATCH_AUTHORITY_SEED, plugin.as_ref()], factory);
    require!(
        record_info.key() == expected_record,
        ErrorCode::InvalidBatchAuthorityRecord
    );

    let data = record_info.try_borrow_data()?;
    require!(
        data.len() >= BATCH_AUTHORITY_RECORD_LEN,
        ErrorCode::InvalidBatchAuthorityRecord
    );

    let recorded_plugin = Pubkey::try_from(
        &data[BATCH_AUTHORITY_RECORD_PLUGIN_OFFSET..BATCH_AUTHORITY_RECORD_AUTHORITY_OFFSET],
    )
    .map_err(|_| ErrorCode::InvalidBatchAuthorityRecord)?;
    require!(
        recorded_plugin == *plugin,
        ErrorCode::InvalidBatchAuthorityRecord
    );

    let batch_authority = Pubkey::try_from(
        &data[BATCH_AUTHORITY_RECORD_AUTHORITY_OFFSET..BATCH_AUTHORITY_RECORD_LEN],
    )
    .map_err(|_| ErrorCode::InvalidBatchAuthorityRecord)?;

    Ok(batch_authority)
}
