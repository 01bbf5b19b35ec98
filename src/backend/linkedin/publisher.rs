//! UGC post publishing
//!
//! Posts are published as member shares through `/ugcPosts`. The created
//! post id comes back in the response body, or in the `x-restli-id` header
//! when the body is empty.

use serde::Serialize;
use serde_json::{json, Value};

use super::{LinkedInClient, LinkedInError};

const RESTLI_ID_HEADER: &str = "x-restli-id";

/// A post accepted by LinkedIn
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PublishedPost {
    pub post_id: String,
    pub linkedin_url: String,
}

impl PublishedPost {
    pub fn new(post_id: impl Into<String>) -> Self {
        let post_id = post_id.into();
        let linkedin_url = format!("https://www.linkedin.com/feed/update/{}", post_id);
        Self {
            post_id,
            linkedin_url,
        }
    }
}

/// Request body for a public text-only share
pub fn ugc_payload(author_urn: &str, content: &str) -> Value {
    json!({
        "author": author_urn,
        "lifecycleState": "PUBLISHED",
        "specificContent": {
            "com.linkedin.ugc.ShareContent": {
                "shareCommentary": { "text": content },
                "shareMediaCategory": "NONE"
            }
        },
        "visibility": {
            "com.linkedin.ugc.MemberNetworkVisibility": "PUBLIC"
        }
    })
}

impl LinkedInClient {
    /// Publish `content` on behalf of `author_urn`
    pub async fn publish(
        &self,
        access_token: &str,
        author_urn: &str,
        content: &str,
    ) -> Result<PublishedPost, LinkedInError> {
        let url = format!("{}/ugcPosts", self.config.api_base);

        let response = self
            .http
            .post(&url)
            .bearer_auth(access_token)
            .header("X-Restli-Protocol-Version", "2.0.0")
            .json(&ugc_payload(author_urn, content))
            .send()
            .await
            .map_err(|e| LinkedInError::Publish(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!("LinkedIn rejected post with {}: {}", status, body);
            return Err(LinkedInError::Publish(format!("{} {}", status, body)));
        }

        let header_id = response
            .headers()
            .get(RESTLI_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body: Value = response.json().await.unwrap_or(Value::Null);
        let post_id = body
            .get("id")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .or(header_id)
            .ok_or_else(|| LinkedInError::Publish("response did not include a post id".to_string()))?;

        tracing::info!("Published LinkedIn post {}", post_id);
        Ok(PublishedPost::new(post_id))
    }
}
