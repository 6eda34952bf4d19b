//! Post service - the real-time update/delete subset
//!
//! Post creation flows through the REST surface; the real-time layer only
//! handles author-initiated edits and deletions, plus the broadcasts that
//! keep community rooms in sync.

use community_core::Post;
use serde::Serialize;
use tracing::instrument;
use validator::Validate;

use crate::dto::{DeletePostRequest, UpdatePostRequest};

use super::context::ServiceContext;
use super::effects::Outcome;
use super::error::{ServiceError, ServiceResult};

/// Identifies the community room a deleted post was broadcast from
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedPost {
    pub post_id: i64,
    pub community_id: i64,
}

/// Post service
pub struct PostService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> PostService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Edit a post. Only the author may edit.
    #[instrument(skip(self, req))]
    pub async fn update(
        &self,
        actor_id: i64,
        req: &UpdatePostRequest,
    ) -> ServiceResult<Outcome<Post>> {
        req.validate()?;

        let post = self.find_post(req.post_id).await?;
        if !post.is_author(actor_id) {
            return Err(ServiceError::forbidden(
                "You are not authorized to update this post",
            ));
        }

        let updated = self
            .ctx
            .posts()
            .update_content(post.id, &req.content)
            .await?;

        Ok(Outcome::new("Post updated successfully", updated))
    }

    /// Delete a post. Only the author may delete. Returns the community id
    /// so the gateway can address the removal broadcast.
    #[instrument(skip(self))]
    pub async fn delete(
        &self,
        actor_id: i64,
        req: &DeletePostRequest,
    ) -> ServiceResult<Outcome<DeletedPost>> {
        req.validate()?;

        let post = self.find_post(req.post_id).await?;
        if !post.is_author(actor_id) {
            return Err(ServiceError::forbidden(
                "You are not authorized to delete this post",
            ));
        }

        self.ctx.posts().delete(post.id).await?;

        Ok(Outcome::new(
            "Post deleted successfully",
            DeletedPost {
                post_id: post.id,
                community_id: post.community_id,
            },
        ))
    }

    async fn find_post(&self, id: i64) -> ServiceResult<Post> {
        self.ctx
            .posts()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Post not found"))
    }
}
