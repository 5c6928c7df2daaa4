//! Boards API.

use crate::{Client, ListOptions, Page, Pin, Result};
use serde::{Deserialize, Serialize};

/// Handle to the Boards API.
#[derive(Clone)]
pub struct BoardResource {
    client: Client,
}

/// Board visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BoardPrivacy {
    /// Matches every visibility level; only valid as a list filter.
    All,
    Public,
    Protected,
    Secret,
}

/// Cover and preview imagery for a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardMedia {
    pub image_cover_url: Option<String>,
    pub pin_thumbnail_urls: Option<String>,
}

/// The account that owns a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardOwner {
    pub username: Option<String>,
}

/// A board.
///
/// Every field the server may omit is an `Option`, so "absent" is never
/// conflated with an empty value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Board {
    pub id: Option<String>,
    pub created_at: Option<String>,
    pub board_pins_modified_at: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub collaborator_count: Option<u32>,
    pub pin_count: Option<u32>,
    pub follower_count: Option<u32>,
    pub media: Option<BoardMedia>,
    pub owner: Option<BoardOwner>,
    pub privacy: Option<BoardPrivacy>,
}

/// Query options for [`BoardResource::list`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListBoardsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Restrict results to boards with this visibility.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<BoardPrivacy>,
}

impl ListBoardsOpts {
    /// Builds list options from standard pagination options plus a privacy
    /// filter.
    pub fn from_page(page: ListOptions, privacy: Option<BoardPrivacy>) -> Self {
        Self {
            bookmark: page.bookmark,
            page_size: page.page_size,
            privacy,
        }
    }
}

/// Body for [`BoardResource::create`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateBoardOpts {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<BoardPrivacy>,
}

/// Body for [`BoardResource::update`]. Absent fields are left untouched on
/// the server.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBoardOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privacy: Option<BoardPrivacy>,
}

impl BoardResource {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Lists boards owned by the operating account, plus group boards it
    /// collaborates on.
    pub async fn list(&self, args: ListBoardsOpts) -> Result<Page<Board>> {
        let response: crate::Response<Page<Board>> =
            self.client.get_with_query("/boards", &args).await?;
        Ok(response.into_data())
    }

    /// Gets a single board by id.
    pub async fn get(&self, board_id: &str) -> Result<Board> {
        let path = format!("/boards/{}", board_id);
        let response: crate::Response<Board> = self.client.get(path).await?;
        Ok(response.into_data())
    }

    /// Creates a board owned by the operating account.
    pub async fn create(&self, args: CreateBoardOpts) -> Result<Board> {
        let response: crate::Response<Board> = self.client.post("/boards", &args).await?;
        Ok(response.into_data())
    }

    /// Partially updates a board; only the fields set in `args` change.
    pub async fn update(&self, board_id: &str, args: UpdateBoardOpts) -> Result<Board> {
        let path = format!("/boards/{}", board_id);
        let response: crate::Response<Board> = self.client.patch(path, &args).await?;
        Ok(response.into_data())
    }

    /// Deletes a board owned by the operating account.
    pub async fn delete(&self, board_id: &str) -> Result<()> {
        let path = format!("/boards/{}", board_id);
        self.client.delete(path).await?;
        Ok(())
    }

    /// Lists the pins on a board.
    pub async fn list_pins(&self, board_id: &str, args: ListOptions) -> Result<Page<Pin>> {
        let path = format!("/boards/{}/pins", board_id);
        let response: crate::Response<Page<Pin>> =
            self.client.get_with_query(path, &args).await?;
        Ok(response.into_data())
    }
}
