//! Search API: the operating account's own boards and pins, plus partner
//! pin search.

use crate::resources::{Board, Media, Pin};
use crate::{Client, Page, Result};
use serde::{Deserialize, Serialize};

/// Handle to the Search API.
#[derive(Clone)]
pub struct SearchResource {
    client: Client,
}

/// Query options for searching the operating account's boards and pins.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchUserOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Query options for [`SearchResource::partner_pins`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchPartnerOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    /// Two-letter country code, e.g. `US`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bookmark: Option<String>,
}

/// One partner pin search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SearchResult {
    pub media: Option<Media>,
    pub alt_text: Option<String>,
    pub link: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
}

impl SearchResource {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Searches the operating account's boards, across all board types.
    pub async fn boards(&self, args: SearchUserOpts) -> Result<Page<Board>> {
        let response: crate::Response<Page<Board>> =
            self.client.get_with_query("/search/boards", &args).await?;
        Ok(response.into_data())
    }

    /// Searches the operating account's pins.
    pub async fn pins(&self, args: SearchUserOpts) -> Result<Page<Pin>> {
        let response: crate::Response<Page<Pin>> =
            self.client.get_with_query("/search/pins", &args).await?;
        Ok(response.into_data())
    }

    /// Gets the top pins for a search term (partner search).
    pub async fn partner_pins(&self, args: SearchPartnerOpts) -> Result<Page<SearchResult>> {
        let response: crate::Response<Page<SearchResult>> = self
            .client
            .get_with_query("/search/partner/pins", &args)
            .await?;
        Ok(response.into_data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec;

    #[test]
    fn user_opts_encode_only_present_fields() {
        let opts = SearchUserOpts {
            query: Some("travel".to_string()),
            bookmark: None,
            page_size: None,
        };
        let encoded = codec::encode_query(&opts).unwrap().unwrap();
        assert_eq!(encoded, "query=travel");
    }

    #[test]
    fn partner_opts_encode_in_declaration_order() {
        let opts = SearchPartnerOpts {
            term: Some("sewing".to_string()),
            country_code: Some("US".to_string()),
            limit: Some(10),
            ..Default::default()
        };
        let encoded = codec::encode_query(&opts).unwrap().unwrap();
        assert_eq!(encoded, "term=sewing&country_code=US&limit=10");
    }
}
