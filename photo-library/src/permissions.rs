use crate::error::CameraRollError;
use crate::native::NativePermissionModule;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Photo library authorization as reported by the OS
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum AuthorizationStatus {
    Granted,
    /// Access to a user-selected subset of the library only
    Limited,
    Denied,
    Unavailable,
    Blocked,
    NotDetermined,
}

impl AuthorizationStatus {
    pub fn allows_read(&self) -> bool {
        matches!(self, AuthorizationStatus::Granted | AuthorizationStatus::Limited)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AuthorizationStatus::Granted => "granted",
            AuthorizationStatus::Limited => "limited",
            AuthorizationStatus::Denied => "denied",
            AuthorizationStatus::Unavailable => "unavailable",
            AuthorizationStatus::Blocked => "blocked",
            AuthorizationStatus::NotDetermined => "not-determined",
        }
    }
}

/// Kind of library access being asked about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AccessLevel {
    ReadWrite,
    AddOnly,
}

/// Permission queries and prompts, delegated to the native module
#[derive(Clone)]
pub struct Permissions {
    native: Arc<dyn NativePermissionModule>,
}

impl Permissions {
    pub fn new(native: Arc<dyn NativePermissionModule>) -> Self {
        Self { native }
    }

    pub async fn check(&self, level: AccessLevel) -> Result<AuthorizationStatus, CameraRollError> {
        log::debug!("check_permission({:?})", level);
        Ok(self.native.check_permission(level).await?)
    }

    pub async fn request_read_write(&self) -> Result<AuthorizationStatus, CameraRollError> {
        log::debug!("request_read_write_permission()");
        Ok(self.native.request_read_write_permission().await?)
    }

    pub async fn request_add_only(&self) -> Result<AuthorizationStatus, CameraRollError> {
        log::debug!("request_add_only_permission()");
        Ok(self.native.request_add_only_permission().await?)
    }

    /// Let the user change the selection of a limited-access library
    pub async fn refresh_photo_selection(&self) -> Result<bool, CameraRollError> {
        log::debug!("refresh_photo_selection()");
        Ok(self.native.refresh_photo_selection().await?)
    }
}

impl std::fmt::Debug for Permissions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Permissions").finish_non_exhaustive()
    }
}
