//! Terms API: related and suggested search terms.

use crate::codec::comma_separated;
use crate::{Client, Result};
use serde::{Deserialize, Serialize};

/// Handle to the Terms API.
#[derive(Clone)]
pub struct TermsResource {
    client: Client,
}

/// Query options for [`TermsResource::related`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelatedTermsOpts {
    /// Input terms; encoded as a single comma-joined parameter.
    #[serde(
        serialize_with = "comma_separated",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub terms: Vec<String>,
}

/// Related terms for one input term.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedTermsItem {
    pub term: Option<String>,
    #[serde(default)]
    pub related_terms: Vec<String>,
}

/// Response to [`TermsResource::related`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelatedTerms {
    pub id: Option<String>,
    pub related_term_count: Option<u32>,
    #[serde(default)]
    pub related_terms_list: Vec<RelatedTermsItem>,
}

/// Query options for [`TermsResource::suggested`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct SuggestedTermsOpts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl TermsResource {
    pub(crate) fn new(client: Client) -> Self {
        Self { client }
    }

    /// Gets terms logically related to each input term.
    pub async fn related(&self, args: RelatedTermsOpts) -> Result<RelatedTerms> {
        let response: crate::Response<RelatedTerms> =
            self.client.get_with_query("/terms/related", &args).await?;
        Ok(response.into_data())
    }

    /// Gets popular search terms that begin with the input term.
    pub async fn suggested(&self, args: SuggestedTermsOpts) -> Result<Vec<String>> {
        let response: crate::Response<Vec<String>> =
            self.client.get_with_query("/terms/suggested", &args).await?;
        Ok(response.into_data())
    }
}
