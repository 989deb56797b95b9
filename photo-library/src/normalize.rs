use crate::config::Platform;
use crate::options::{AssetType, GroupTypes};
use crate::requests::EnumerationRequest;

/// Fill in the enumeration defaults before dispatch.
///
/// `assetType` becomes `All` when unset, and `groupTypes` becomes `All` when
/// unset on platforms that honour it. Every other field passes through
/// untouched, including a missing or invalid page size.
pub fn with_defaults(params: &EnumerationRequest, platform: Platform) -> EnumerationRequest {
    let mut params = params.clone();
    if params.asset_type.is_none() {
        params.asset_type = Some(AssetType::All);
    }
    if params.group_types.is_none() && platform.supports_group_types() {
        params.group_types = Some(GroupTypes::All);
    }
    params
}
