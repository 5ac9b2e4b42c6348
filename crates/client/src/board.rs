//! Typed helpers for the board service.

use lionboard_application::{GatewayError, GatewayResult};
use lionboard_domain::{ItemEnvelope, NewPost, OutboundRequest, Post, Reply};

use crate::client::Client;

impl Client {
    /// Fetches a single post.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors; `Decode` if the response shape is
    /// unexpected.
    pub async fn fetch_post(&self, id: i64) -> GatewayResult<Post> {
        let response = self.get(&format!("/posts/{id}")).await?;
        let envelope: ItemEnvelope<Post> = response
            .json()
            .map_err(|e| GatewayError::Decode(format!("post response: {e}")))?;
        Ok(envelope.item)
    }

    /// Lists the posts on a board.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors; `Decode` if the response shape is
    /// unexpected.
    pub async fn fetch_posts(&self, board_type: &str) -> GatewayResult<Vec<Post>> {
        let request = OutboundRequest::get("/posts").with_param("type", board_type);
        let response = self.send(request).await?;
        let envelope: ItemEnvelope<Vec<Post>> = response
            .json()
            .map_err(|e| GatewayError::Decode(format!("post list response: {e}")))?;
        Ok(envelope.item)
    }

    /// Lists the replies on a post.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors; `Decode` if the response shape is
    /// unexpected.
    pub async fn fetch_replies(&self, post_id: i64) -> GatewayResult<Vec<Reply>> {
        let response = self.get(&format!("/posts/{post_id}/replies")).await?;
        let envelope: ItemEnvelope<Vec<Reply>> = response
            .json()
            .map_err(|e| GatewayError::Decode(format!("reply list response: {e}")))?;
        Ok(envelope.item)
    }

    /// Creates a post and returns the stored copy.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors; `Decode` if the response shape is
    /// unexpected.
    pub async fn create_post(&self, new_post: &NewPost) -> GatewayResult<Post> {
        let body =
            serde_json::to_value(new_post).map_err(|e| GatewayError::Decode(e.to_string()))?;
        let response = self.post("/posts", body).await?;
        let envelope: ItemEnvelope<Post> = response
            .json()
            .map_err(|e| GatewayError::Decode(format!("post response: {e}")))?;
        Ok(envelope.item)
    }
}
