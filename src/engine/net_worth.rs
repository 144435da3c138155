//! Net worth from asset and liability balances

use crate::profile::{AssetProfile, LiabilityProfile};

pub fn total_assets(assets: &AssetProfile) -> f64 {
    assets.entries().map(|(_, amount)| amount).sum()
}

pub fn total_liabilities(liabilities: &LiabilityProfile) -> f64 {
    liabilities.entries().map(|(_, amount)| amount).sum()
}

/// Total assets minus total liabilities (may be negative)
pub fn net_worth(assets: &AssetProfile, liabilities: &LiabilityProfile) -> f64 {
    total_assets(assets) - total_liabilities(liabilities)
}
