use crate::error::CameraRollError;
use crate::options::MediaType;

/// Extensions saved as video when the media type is `auto`
const VIDEO_EXTENSIONS: [&str; 2] = ["mov", "mp4"];

/// Reject an empty source URI before anything reaches native code
pub fn validate_source_uri(uri: &str) -> Result<(), CameraRollError> {
    if uri.is_empty() {
        return Err(CameraRollError::Validation(
            "tag must be a valid string".to_string(),
        ));
    }
    Ok(())
}

/// Resolve `auto` from the extension after the last `.` of the URI.
///
/// Explicit types are returned unchanged. A URI without a `.` has an empty
/// extension and resolves to `Photo`.
pub fn infer_media_type(uri: &str, requested: MediaType) -> MediaType {
    if requested != MediaType::Auto {
        return requested;
    }

    let extension = uri.rsplit_once('.').map(|(_, ext)| ext).unwrap_or("");
    if VIDEO_EXTENSIONS
        .iter()
        .any(|video| extension.eq_ignore_ascii_case(video))
    {
        MediaType::Video
    } else {
        MediaType::Photo
    }
}

/// Validate the URI, then resolve the media type to dispatch
pub fn resolve_media_type(uri: &str, requested: MediaType) -> Result<MediaType, CameraRollError> {
    validate_source_uri(uri)?;
    Ok(infer_media_type(uri, requested))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_extensions_any_case() {
        assert_eq!(infer_media_type("foo.MP4", MediaType::Auto), MediaType::Video);
        assert_eq!(infer_media_type("file:///tmp/clip.mov", MediaType::Auto), MediaType::Video);
        assert_eq!(infer_media_type("clip.MoV", MediaType::Auto), MediaType::Video);
    }

    #[test]
    fn test_other_extensions_are_photos() {
        assert_eq!(infer_media_type("foo.jpg", MediaType::Auto), MediaType::Photo);
        assert_eq!(infer_media_type("foo.mp4.jpg", MediaType::Auto), MediaType::Photo);
        assert_eq!(infer_media_type("foo.", MediaType::Auto), MediaType::Photo);
    }

    #[test]
    fn test_no_extension_is_photo() {
        assert_eq!(infer_media_type("foo", MediaType::Auto), MediaType::Photo);
        assert_eq!(infer_media_type("mp4", MediaType::Auto), MediaType::Photo);
    }

    #[test]
    fn test_explicit_type_bypasses_inference() {
        assert_eq!(infer_media_type("foo.mov", MediaType::Photo), MediaType::Photo);
        assert_eq!(infer_media_type("foo.jpg", MediaType::Video), MediaType::Video);
    }

    #[test]
    fn test_empty_uri_is_validation_error() {
        let err = resolve_media_type("", MediaType::Video).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(resolve_media_type("a.mp4", MediaType::Auto), Ok(MediaType::Video));
    }
}
