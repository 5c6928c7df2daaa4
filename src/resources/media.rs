//! Media API: registering uploads and checking their status.

use crate::{Client, ListOptions, Page, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Handle to the Media API.
#[derive(Clone)]
pub struct MediaResource {
    client: Client,
}

/// The overall kind of a media object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Image,
    Video,
    MultipleImages,
    MultipleVideos,
    MultipleMixed,
}

/// The kind of a single item inside a media object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaItemType {
    Image,
    Video,
}

/// One rendition of an image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub url: Option<String>,
}

/// Image facet of a media item, keyed by rendition name (e.g. `"150x150"`).
///
/// Absent fields are skipped on serialization so the unused facet of a
/// flattened [`MediaItem`] contributes nothing to the encoded form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ImageItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub images: HashMap<String, Image>,
}

/// Video facet of a media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct VideoItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
}

/// One item of a media object. Single-kind media populate only the matching
/// facet; the other facet's fields stay absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MediaItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_type: Option<MediaItemType>,
    #[serde(flatten)]
    pub image: ImageItem,
    #[serde(flatten)]
    pub video: VideoItem,
}

/// A media object attached to a pin or search result.
///
/// Single-item media carry their fields inline (the flattened `item`);
/// carousel media list them under `items`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Media {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<MediaItem>>,
    #[serde(flatten)]
    pub item: MediaItem,
}

/// A registered media upload and its processing status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaUpload {
    pub media_id: Option<String>,
    pub media_type: Option<String>,
    /// One of `registered`, `processing`, `succeeded`, `failed`.
    pub status: Option<String>,
}

/// Body for [`MediaResource::register`].
#[derive(Debug, Clone, Serialize)]
pub struct RegisterMediaUploadOpts {
    pub media_type: MediaType,
}

/// Response to [`MediaResource::register`]: where and how to upload the
/// actual bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredMediaUpload {
    pub media_id: Option<String>,
    pub media_type: Option<String>,
    pub upload_url: Option<String>,
    #[serde(default)]
    pub upload_parameters: HashMap<String, String>,
}

impl MediaResource {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists the operating account's media uploads.
    pub async fn list(&self, args: ListOptions) -> Result<Page<MediaUpload>> {
        let response: crate::Response<Page<MediaUpload>> =
            self.client.get_with_query("/media", &args).await?;
        Ok(response.into_data())
    }

    /// Gets a registered media upload, including its current status.
    pub async fn get(&self, media_id: &str) -> Result<MediaUpload> {
        let path = format!("/media/{}", media_id);
        let response: crate::Response<MediaUpload> = self.client.get(path).await?;
        Ok(response.into_data())
    }

    /// Registers the intent to upload media; the response carries the upload
    /// URL and parameters for the actual byte transfer.
    pub async fn register(&self, args: RegisterMediaUploadOpts) -> Result<RegisteredMediaUpload> {
        let response: crate::Response<RegisteredMediaUpload> =
            self.client.post("/media", &args).await?;
        Ok(response.into_data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_uses_snake_case_wire_names() {
        assert_eq!(
            serde_json::to_string(&MediaType::MultipleImages).unwrap(),
            "\"multiple_images\""
        );
        assert_eq!(
            serde_json::from_str::<MediaType>("\"video\"").unwrap(),
            MediaType::Video
        );
    }

    #[test]
    fn single_item_media_decodes_inline_fields() {
        let media: Media = serde_json::from_str(
            r#"{
                "media_type": "image",
                "item_type": "image",
                "title": "cover",
                "images": {"150x150": {"width": 150, "height": 150, "url": "https://example.com/i.png"}}
            }"#,
        )
        .unwrap();
        assert_eq!(media.media_type, Some(MediaType::Image));
        assert_eq!(media.items, None);
        assert_eq!(media.item.item_type, Some(MediaItemType::Image));
        assert_eq!(media.item.image.title.as_deref(), Some("cover"));
        assert_eq!(
            media.item.image.images.get("150x150").and_then(|i| i.width),
            Some(150)
        );
    }

    #[test]
    fn carousel_media_decodes_items() {
        let media: Media = serde_json::from_str(
            r#"{
                "media_type": "multiple_mixed",
                "items": [
                    {"item_type": "image", "title": "one"},
                    {"item_type": "video", "duration": 3.5}
                ]
            }"#,
        )
        .unwrap();
        let items = media.items.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].image.title.as_deref(), Some("one"));
        assert_eq!(items[1].video.duration, Some(3.5));
    }

    #[test]
    fn media_round_trips_without_null_facet_fields() {
        let original = serde_json::json!({
            "media_type": "image",
            "item_type": "image",
            "title": "cover",
            "images": {"150x150": {"width": 150, "height": 150, "url": "https://example.com/i.png"}}
        });
        let media: Media = serde_json::from_value(original.clone()).unwrap();
        // Re-encoding matches what was decoded: the unused video facet and
        // absent image fields are omitted, not emitted as nulls.
        assert_eq!(serde_json::to_value(&media).unwrap(), original);
    }

    #[test]
    fn video_item_skips_absent_fields() {
        let item = MediaItem {
            item_type: Some(MediaItemType::Video),
            video: VideoItem {
                duration: Some(3.5),
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            serde_json::json!({"item_type": "video", "duration": 3.5})
        );
    }

    #[test]
    fn registered_upload_defaults_parameters() {
        let upload: RegisteredMediaUpload = serde_json::from_str(
            r#"{"media_id": "m1", "media_type": "video", "upload_url": "https://up.example.com"}"#,
        )
        .unwrap();
        assert_eq!(upload.media_id.as_deref(), Some("m1"));
        assert!(upload.upload_parameters.is_empty());
    }
}
