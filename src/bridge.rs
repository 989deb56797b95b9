//! Message format spoken with the JVM side of the bridge.
//!
//! Every call is `invoke(method, argsJson) -> replyJson`. Arguments travel as
//! a positional JSON array; the reply is either `{"ok": <value>}` or
//! `{"error": {"code": "...", "message": "..."}}`.

use photo_library::NativeError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const SAVE_TO_CAMERA_ROLL: &str = "saveToCameraRoll";
pub const GET_PHOTOS: &str = "getPhotos";
pub const GET_ALBUMS: &str = "getAlbums";
pub const DELETE_PHOTOS: &str = "deletePhotos";
pub const GET_PHOTO_BY_INTERNAL_ID: &str = "getPhotoByInternalID";
pub const GET_PHOTO_THUMBNAIL: &str = "getPhotoThumbnail";
pub const CHECK_PERMISSION: &str = "checkPermission";
pub const REQUEST_READ_WRITE_PERMISSION: &str = "requestReadWritePermission";
pub const REQUEST_ADD_ONLY_PERMISSION: &str = "requestAddOnlyPermission";
pub const REFRESH_PHOTO_SELECTION: &str = "refreshPhotoSelection";

/// Failure as reported by the JVM side
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BridgeFailure {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Reply<T> {
    Ok(T),
    Error(BridgeFailure),
}

/// Serialize positional arguments
pub fn encode_args<T: Serialize>(args: &T) -> Result<String, NativeError> {
    serde_json::to_string(args)
        .map_err(|e| NativeError::Bridge(format!("Failed to encode arguments: {}", e)))
}

/// Decode a reply, turning a reported failure into `NativeError::Rejected`
pub fn decode_reply<T: DeserializeOwned>(reply: &str) -> Result<T, NativeError> {
    match serde_json::from_str::<Reply<T>>(reply)? {
        Reply::Ok(value) => Ok(value),
        Reply::Error(failure) => Err(NativeError::Rejected {
            code: failure.code,
            message: failure.message,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_library::{AuthorizationStatus, MediaType, NativeSaveOptions, Page};

    #[test]
    fn test_encode_positional_args() {
        let options = NativeSaveOptions {
            media_type: MediaType::Photo,
            album: "Trips".to_string(),
        };
        let json = encode_args(&("file:///a.jpg", &options)).unwrap();
        assert_eq!(json, r#"["file:///a.jpg",{"type":"photo","album":"Trips"}]"#);
    }

    #[test]
    fn test_decode_ok_reply() {
        let reply = r#"{"ok":{"edges":[],"page_info":{"has_next_page":false}}}"#;
        let page: Page = decode_reply(reply).unwrap();
        assert!(page.is_complete());

        let status: AuthorizationStatus = decode_reply(r#"{"ok":"limited"}"#).unwrap();
        assert_eq!(status, AuthorizationStatus::Limited);
    }

    #[test]
    fn test_decode_unit_reply() {
        let unit: Result<(), NativeError> = decode_reply(r#"{"ok":null}"#);
        assert!(unit.is_ok());
    }

    #[test]
    fn test_decode_error_reply_is_verbatim() {
        let reply = r#"{"error":{"code":"E_UNABLE_TO_DELETE","message":"Could not delete"}}"#;
        let err = decode_reply::<()>(reply).unwrap_err();
        assert_eq!(err, NativeError::rejected("E_UNABLE_TO_DELETE", "Could not delete"));
    }

    #[test]
    fn test_malformed_reply_is_decode_error() {
        let err = decode_reply::<Page>(r#"{"ok":{"edges":"nope"}}"#).unwrap_err();
        assert!(matches!(err, NativeError::Decode(_)));

        let err = decode_reply::<Page>("not json").unwrap_err();
        assert!(matches!(err, NativeError::Decode(_)));
    }
}
