use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use std::sync::{PoisonError, RwLock};
use utoipa::ToSchema;

pub const REQUIRED_FIELDS_MESSAGE: &str = "タイトルと内容は必須です";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Post {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "投稿タイトル")]
    pub title: String,
    #[schema(example = "投稿内容")]
    pub content: String,
}

/// Append-only, insertion-ordered post list kept in process memory.
///
/// Ids are `count + 1`, assigned while holding the write lock, so concurrent
/// writers always observe distinct ids.
#[derive(Debug, Default)]
pub struct PostStore {
    posts: RwLock<Vec<Post>>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the posts the service ships with.
    pub fn seeded() -> Self {
        let seed = [
            ("初期投稿 from v1.0.5", "ようこそ"),
            ("2件目の投稿 from v1.0.5", "こんにちは"),
            ("3件目の投稿 from v1.0.5", "こんばんは"),
        ];

        let posts = seed
            .iter()
            .enumerate()
            .map(|(i, (title, content))| Post {
                id: i as u64 + 1,
                title: title.to_string(),
                content: content.to_string(),
            })
            .collect();

        Self {
            posts: RwLock::new(posts),
        }
    }

    pub fn list_all(&self) -> Vec<Post> {
        self.posts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn create(&self, title: &str, content: &str) -> Result<Post, AppError> {
        if title.is_empty() || content.is_empty() {
            return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
        }

        let mut posts = self.posts.write().unwrap_or_else(PoisonError::into_inner);
        let post = Post {
            id: posts.len() as u64 + 1,
            title: title.to_string(),
            content: content.to_string(),
        };
        posts.push(post.clone());

        Ok(post)
    }

    pub fn len(&self) -> usize {
        self.posts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
