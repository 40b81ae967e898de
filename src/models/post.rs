//! Blog post model in storage and read form.

use serde::{Deserialize, Serialize};

/// Icon stored on posts created without one.
pub const DEFAULT_ICON: &str = "📝";

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

/// A blog post as persisted in the backing file.
///
/// `date` is kept as `YYYY-MM-DD`. `title` and `excerpt` are nullable because
/// creation does not reject payloads that omit them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BlogPost {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
    #[serde(default = "default_icon")]
    pub icon: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl BlogPost {
    /// Build a new post from a create request, filling optional fields with defaults.
    pub fn from_request(id: i64, date: String, request: &CreatePostRequest) -> Self {
        Self {
            id,
            title: request.title.clone(),
            excerpt: request.excerpt.clone(),
            content: request.content.clone().unwrap_or_default(),
            date,
            icon: request.icon.clone().unwrap_or_else(default_icon),
            tags: request.tags.clone().unwrap_or_default(),
        }
    }

    /// Front-end route of the post.
    pub fn link(&self) -> String {
        format!("/blog/{}", self.id)
    }
}

/// A blog post as returned by the read endpoints.
///
/// `date` holds the display form and `link` is only present on list reads.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PostView {
    #[serde(flatten)]
    pub post: BlogPost,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Request body for creating a new post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_applies_defaults() {
        let request = CreatePostRequest {
            title: Some("T".to_string()),
            excerpt: Some("E".to_string()),
            ..Default::default()
        };

        let post = BlogPost::from_request(7, "2024-04-01".to_string(), &request);

        assert_eq!(post.id, 7);
        assert_eq!(post.title.as_deref(), Some("T"));
        assert_eq!(post.content, "");
        assert_eq!(post.icon, DEFAULT_ICON);
        assert!(post.tags.is_empty());
        assert_eq!(post.link(), "/blog/7");
    }

    #[test]
    fn test_missing_title_serializes_as_null() {
        let post = BlogPost::from_request(1, "2024-04-01".to_string(), &CreatePostRequest::default());
        let value = serde_json::to_value(&post).unwrap();

        assert!(value["title"].is_null());
        assert!(value["excerpt"].is_null());
        assert!(value.get("link").is_none());
    }

    #[test]
    fn test_tolerant_storage_read() {
        let post: BlogPost = serde_json::from_str(r#"{"id": 3, "title": "Only title"}"#).unwrap();

        assert_eq!(post.date, "");
        assert_eq!(post.icon, DEFAULT_ICON);
        assert!(post.excerpt.is_none());
    }

    #[test]
    fn test_view_omits_absent_link() {
        let post: BlogPost = serde_json::from_str(r#"{"id": 2, "title": "A", "excerpt": "B"}"#).unwrap();
        let single = serde_json::to_value(PostView { post: post.clone(), link: None }).unwrap();
        let listed = serde_json::to_value(PostView {
            link: Some(post.link()),
            post,
        })
        .unwrap();

        assert!(single.get("link").is_none());
        assert_eq!(single["id"], 2);
        assert_eq!(listed["link"], "/blog/2");
    }
}
