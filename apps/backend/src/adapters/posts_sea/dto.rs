//! DTOs for posts_sea adapter.

#[derive(Debug, Clone)]
pub struct PostCreate {
    pub author_id: i64,
    pub title: String,
    pub content: String,
}

impl PostCreate {
    pub fn new(author_id: i64, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author_id,
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Full replacement of the editable fields.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: i64,
    pub title: String,
    pub content: String,
}
