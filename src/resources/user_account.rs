//! User Account API.

use crate::resources::Board;
use crate::{Client, Page, Result};
use serde::{Deserialize, Serialize};

/// Handle to the User Account API.
#[derive(Clone)]
pub struct UserAccountResource {
    client: Client,
}

/// The operating user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    /// `BUSINESS` or `PINNER`.
    pub account_type: Option<String>,
    pub profile_image: Option<String>,
    pub website_url: Option<String>,
    pub username: Option<String>,
}

#[derive(Serialize)]
struct UserAccountOpts<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    ad_account_id: Option<&'a str>,
}

/// Query options for [`UserAccountResource::following_boards`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListFollowingBoardsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    /// Only boards the user explicitly follows, excluding implicit follows
    /// picked up from followed users.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explicit_following: Option<bool>,
}

impl UserAccountResource {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Gets account information for the operating account. `ad_account_id`
    /// scopes the lookup and is omitted when `None`.
    pub async fn get(&self, ad_account_id: Option<&str>) -> Result<UserAccount> {
        let response: crate::Response<UserAccount> = self
            .client
            .get_with_query("/user_account", &UserAccountOpts { ad_account_id })
            .await?;
        Ok(response.into_data())
    }

    /// Lists the boards the user follows, as board summaries.
    pub async fn following_boards(&self, args: ListFollowingBoardsOpts) -> Result<Page<Board>> {
        let response: crate::Response<Page<Board>> = self
            .client
            .get_with_query("/user_account/following/boards", &args)
            .await?;
        Ok(response.into_data())
    }
}
