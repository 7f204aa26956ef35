#![allow(dead_code)]

//! Image capture and import.
//!
//! Two ways in: the camera collaborator (a trait, stubbed server-side) and
//! multipart file import. Both produce `ImageBuffer`s appended to a
//! session's `ImageSet` in arrival order.

use async_trait::async_trait;
use bytes::Bytes;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// One captured or imported image, held in memory until conversion.
#[derive(Debug, Clone)]
pub struct ImageBuffer {
    pub file_name: String,
    pub media_type: String,
    pub data: Bytes,
}

impl ImageBuffer {
    /// Accepts the buffer only when it is an image. Everything else is the
    /// import error the scanner surfaces as a toast.
    pub fn from_upload(file_name: String, media_type: String, data: Bytes) -> Result<Self, AppError> {
        if !media_type.starts_with("image/") {
            return Err(AppError::UnsupportedFileType(media_type));
        }
        Ok(ImageBuffer {
            file_name,
            media_type,
            data,
        })
    }
}

/// Wire-facing summary of a buffered image (the bytes stay server-side).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageInfo {
    pub index: usize,
    pub file_name: String,
    pub media_type: String,
    pub size_bytes: usize,
}

/// Ordered in-memory image set. Append-only except for explicit removal
/// by index.
#[derive(Debug, Clone, Default)]
pub struct ImageSet {
    images: Vec<ImageBuffer>,
}

impl ImageSet {
    /// Appends and returns the new index.
    pub fn push(&mut self, image: ImageBuffer) -> usize {
        self.images.push(image);
        self.images.len() - 1
    }

    /// Removes by index; `false` when out of bounds.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if index >= self.images.len() {
            return false;
        }
        self.images.remove(index);
        true
    }

    pub fn images(&self) -> &[ImageBuffer] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn infos(&self) -> Vec<ImageInfo> {
        self.images
            .iter()
            .enumerate()
            .map(|(index, img)| ImageInfo {
                index,
                file_name: img.file_name.clone(),
                media_type: img.media_type.clone(),
                size_bytes: img.data.len(),
            })
            .collect()
    }
}

/// Constraints requested when opening the camera (rear lens, ideal size —
/// mirroring the scanner's getUserMedia call).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreamConstraints {
    pub facing_mode: String,
    pub ideal_width: u32,
    pub ideal_height: u32,
}

impl Default for StreamConstraints {
    fn default() -> Self {
        StreamConstraints {
            facing_mode: "environment".to_string(),
            ideal_width: 1920,
            ideal_height: 1080,
        }
    }
}

/// An open camera stream handle. Closing is dropping — there is no retry
/// or timeout policy; navigation away just stops the stream.
#[derive(Debug)]
pub struct CameraStream {
    pub constraints: StreamConstraints,
}

/// The camera collaborator. Errors are the two the scanner distinguishes:
/// `PermissionDenied` and `DeviceUnavailable`.
///
/// Carried in `AppState` as `Arc<dyn CameraSource>`.
#[async_trait]
pub trait CameraSource: Send + Sync {
    async fn open_stream(&self, constraints: StreamConstraints) -> Result<CameraStream, AppError>;

    async fn capture_frame(&self, stream: &CameraStream) -> Result<ImageBuffer, AppError>;
}

/// Default server-side camera: there isn't one. Capture endpoints answer
/// `DeviceUnavailable` until a platform integration provides frames.
pub struct NoCamera;

#[async_trait]
impl CameraSource for NoCamera {
    async fn open_stream(&self, _constraints: StreamConstraints) -> Result<CameraStream, AppError> {
        Err(AppError::DeviceUnavailable)
    }

    async fn capture_frame(&self, _stream: &CameraStream) -> Result<ImageBuffer, AppError> {
        Err(AppError::DeviceUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(name: &str) -> ImageBuffer {
        ImageBuffer::from_upload(
            name.to_string(),
            "image/jpeg".to_string(),
            Bytes::from_static(b"\xff\xd8\xff"),
        )
        .unwrap()
    }

    #[test]
    fn test_non_image_upload_is_rejected() {
        let result = ImageBuffer::from_upload(
            "notes.pdf".to_string(),
            "application/pdf".to_string(),
            Bytes::from_static(b"%PDF"),
        );
        assert!(matches!(result, Err(AppError::UnsupportedFileType(t)) if t == "application/pdf"));
    }

    #[test]
    fn test_any_image_subtype_is_accepted() {
        for mt in ["image/png", "image/jpeg", "image/webp"] {
            assert!(ImageBuffer::from_upload("f".into(), mt.into(), Bytes::new()).is_ok());
        }
    }

    #[test]
    fn test_set_preserves_arrival_order() {
        let mut set = ImageSet::default();
        assert_eq!(set.push(jpeg("a.jpg")), 0);
        assert_eq!(set.push(jpeg("b.jpg")), 1);
        let names: Vec<_> = set.images().iter().map(|i| i.file_name.as_str()).collect();
        assert_eq!(names, ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn test_remove_at_bounds() {
        let mut set = ImageSet::default();
        set.push(jpeg("a.jpg"));
        assert!(!set.remove_at(1));
        assert!(set.remove_at(0));
        assert!(set.is_empty());
    }

    #[test]
    fn test_infos_reports_index_and_size() {
        let mut set = ImageSet::default();
        set.push(jpeg("scan-1.jpg"));
        let infos = set.infos();
        assert_eq!(infos[0].index, 0);
        assert_eq!(infos[0].size_bytes, 3);
        assert_eq!(infos[0].media_type, "image/jpeg");
    }

    #[tokio::test]
    async fn test_no_camera_reports_device_unavailable() {
        let camera = NoCamera;
        let result = camera.open_stream(StreamConstraints::default()).await;
        assert!(matches!(result, Err(AppError::DeviceUnavailable)));
    }

    /// Canned-frame camera standing in for a platform integration.
    struct StillCamera;

    #[async_trait]
    impl CameraSource for StillCamera {
        async fn open_stream(
            &self,
            constraints: StreamConstraints,
        ) -> Result<CameraStream, AppError> {
            Ok(CameraStream { constraints })
        }

        async fn capture_frame(&self, _stream: &CameraStream) -> Result<ImageBuffer, AppError> {
            Ok(jpeg("frame.jpg"))
        }
    }

    #[tokio::test]
    async fn test_captured_frames_append_like_imports() {
        let camera = StillCamera;
        let stream = camera.open_stream(StreamConstraints::default()).await.unwrap();
        assert_eq!(stream.constraints.facing_mode, "environment");

        let mut set = ImageSet::default();
        let frame = camera.capture_frame(&stream).await.unwrap();
        assert_eq!(set.push(frame), 0);
        assert_eq!(set.infos()[0].file_name, "frame.jpg");
    }
}
