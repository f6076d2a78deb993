//! Product comments and ratings.

use crate::error::CommerceError;
use crate::ids::{CommentId, ProductId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Longest accepted comment body, in characters.
pub const MAX_BODY_CHARS: usize = 2000;

/// A shopper comment on a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: CommentId,
    pub product_id: ProductId,
    pub author: String,
    pub body: String,
    /// Star rating, 1 to 5.
    pub rating: Option<u8>,
    pub created_at: DateTime<Utc>,
}

/// Input for [`CommentBoard::post`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    pub product_id: ProductId,
    pub author: String,
    pub body: String,
    #[serde(default)]
    pub rating: Option<u8>,
}

impl NewComment {
    fn validate(&self) -> Result<(), CommerceError> {
        if self.product_id.is_blank() {
            return Err(CommerceError::Validation("product id is required".to_string()));
        }
        if self.author.trim().is_empty() {
            return Err(CommerceError::Validation("author is required".to_string()));
        }
        let body = self.body.trim();
        if body.is_empty() {
            return Err(CommerceError::Validation("comment is empty".to_string()));
        }
        if body.chars().count() > MAX_BODY_CHARS {
            return Err(CommerceError::Validation(format!(
                "comment is longer than {} characters",
                MAX_BODY_CHARS
            )));
        }
        if let Some(rating) = self.rating {
            if !(1..=5).contains(&rating) {
                return Err(CommerceError::Validation(format!(
                    "rating must be between 1 and 5, got {}",
                    rating
                )));
            }
        }
        Ok(())
    }
}

/// In-memory comment store.
#[derive(Debug, Clone, Default)]
pub struct CommentBoard {
    comments: Vec<Comment>,
}

impl CommentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and store a comment.
    pub fn post(&mut self, new: NewComment) -> Result<&Comment, CommerceError> {
        new.validate()?;

        let comment = Comment {
            id: CommentId::generate(),
            product_id: new.product_id,
            author: new.author.trim().to_string(),
            body: new.body.trim().to_string(),
            rating: new.rating,
            created_at: Utc::now(),
        };
        tracing::debug!(comment_id = %comment.id, product_id = %comment.product_id, "comment posted");

        self.comments.push(comment);
        let index = self.comments.len() - 1;
        Ok(&self.comments[index])
    }

    /// Comments for a product, newest first.
    pub fn for_product(&self, product_id: &ProductId) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self
            .comments
            .iter()
            .rev()
            .filter(|c| &c.product_id == product_id)
            .collect();
        comments.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        comments
    }

    /// Mean of the ratings left on a product.
    pub fn average_rating(&self, product_id: &ProductId) -> Option<f64> {
        let ratings: Vec<f64> = self
            .comments
            .iter()
            .filter(|c| &c.product_id == product_id)
            .filter_map(|c| c.rating.map(f64::from))
            .collect();
        if ratings.is_empty() {
            return None;
        }
        Some(ratings.iter().sum::<f64>() / ratings.len() as f64)
    }

    /// Delete a comment.
    pub fn remove(&mut self, id: &CommentId) -> Result<Comment, CommerceError> {
        let index = self
            .comments
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| CommerceError::CommentNotFound(id.to_string()))?;
        Ok(self.comments.remove(index))
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }
}
