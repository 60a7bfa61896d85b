use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct SupportsDistributionInterface {}

/// Capability probe for routers discovering payment plugins
pub fn handler(_ctx: Context<SupportsDistributionInterface>) -> Result<bool> {
    Ok(true)
}
