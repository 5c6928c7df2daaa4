//! Pins API.

use crate::resources::BoardOwner;
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle to the Pins API.
#[derive(Clone)]
pub struct PinResource {
    client: Client,
}

/// A pin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Pin {
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub link: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub alt_text: Option<String>,
    pub board_id: Option<String>,
    pub board_section_id: Option<String>,
    pub board_owner: Option<BoardOwner>,
}

/// Where the pin's media comes from: an image URL, base64 payload, or a
/// previously registered media upload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PinMediaSource {
    /// One of `image_url`, `image_base64`, `multiple_image_urls`, `video_id`.
    pub source_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_id: Option<String>,
}

impl PinMediaSource {
    /// Media sourced from a publicly reachable image URL.
    pub fn image_url(url: impl Into<String>) -> Self {
        Self {
            source_type: "image_url".to_string(),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Media sourced from a registered upload (see
    /// [`MediaResource::register`](crate::resources::MediaResource::register)).
    pub fn media_id(media_id: impl Into<String>) -> Self {
        Self {
            source_type: "video_id".to_string(),
            media_id: Some(media_id.into()),
            ..Default::default()
        }
    }
}

/// Body for [`PinResource::create`].
#[derive(Debug, Clone, Serialize)]
pub struct CreatePinOpts {
    pub board_id: String,
    pub media_source: PinMediaSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_section_id: Option<String>,
}

#[derive(Serialize)]
struct GetPinOpts<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    ad_account_id: Option<&'a str>,
}

impl PinResource {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a pin on a board or board section owned by the operating
    /// account.
    pub async fn create(&self, args: CreatePinOpts) -> Result<Pin> {
        let response: crate::Response<Pin> = self.client.post("/pins", &args).await?;
        Ok(response.into_data())
    }

    /// Gets a pin by id. `ad_account_id` scopes the lookup to an ad account
    /// and is omitted from the request when `None`.
    pub async fn get(&self, pin_id: &str, ad_account_id: Option<&str>) -> Result<Pin> {
        let path = format!("/pins/{}", pin_id);
        let response: crate::Response<Pin> = self
            .client
            .get_with_query(path, &GetPinOpts { ad_account_id })
            .await?;
        Ok(response.into_data())
    }

    /// Deletes a pin owned by the operating account.
    pub async fn delete(&self, pin_id: &str) -> Result<()> {
        let path = format!("/pins/{}", pin_id);
        self.client.delete(path).await?;
        Ok(())
    }
}
