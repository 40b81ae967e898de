//! Post store owning the backing file.

use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};

use tokio::fs;
use tokio::sync::Mutex;

use super::default_posts;
use crate::errors::AppError;
use crate::models::{BlogPost, CreatePostRequest};

/// Why the backing file could not be turned into a post collection.
#[derive(Debug)]
enum LoadFailure {
    Missing,
    Io(std::io::Error),
    Corrupt(serde_json::Error),
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::Missing => write!(f, "file does not exist"),
            LoadFailure::Io(e) => write!(f, "read failed: {}", e),
            LoadFailure::Corrupt(e) => write!(f, "invalid contents: {}", e),
        }
    }
}

/// Sole owner of blog-post persistence.
pub struct PostStore {
    path: PathBuf,
    /// Held by every write to the backing file, including reseeds.
    write_lock: Mutex<()>,
}

impl PostStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the default posts if the backing file is absent, and return them.
    ///
    /// An existing file is left untouched, even when it is unreadable.
    pub async fn ensure_initialized(&self) -> Result<Vec<BlogPost>, AppError> {
        let _guard = self.write_lock.lock().await;
        self.seed_if_absent().await
    }

    /// Load the full collection in file order.
    ///
    /// Never fails: a missing or unparsable file falls back to the default posts.
    pub async fn load(&self) -> Vec<BlogPost> {
        if let Ok(posts) = self.read_file().await {
            return posts;
        }

        let _guard = self.write_lock.lock().await;
        self.load_locked().await
    }

    /// Overwrite the backing file with the given collection.
    pub async fn save(&self, posts: &[BlogPost]) -> Result<(), AppError> {
        let _guard = self.write_lock.lock().await;
        self.write_file(posts).await
    }

    /// Append a new post built from the request and persist the collection.
    pub async fn create_post(&self, request: &CreatePostRequest) -> Result<BlogPost, AppError> {
        let _guard = self.write_lock.lock().await;

        let mut posts = self.load_locked().await;
        let post = BlogPost::from_request(next_id(&posts), today(), request);
        posts.push(post.clone());
        self.write_file(&posts).await?;

        tracing::info!("Created blog post {}", post.id);
        Ok(post)
    }

    /// Caller must hold `write_lock`.
    async fn load_locked(&self) -> Vec<BlogPost> {
        let failure = match self.read_file().await {
            Ok(posts) => return posts,
            Err(failure) => failure,
        };

        tracing::warn!(
            "Backing file {:?} unusable ({}), falling back to default posts",
            self.path,
            failure
        );

        match self.seed_if_absent().await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::error!("Failed to reseed {:?}: {}", self.path, e);
                default_posts()
            }
        }
    }

    /// Caller must hold `write_lock`.
    async fn seed_if_absent(&self) -> Result<Vec<BlogPost>, AppError> {
        let posts = default_posts();

        let exists = fs::try_exists(&self.path).await.map_err(|e| {
            tracing::error!("Cannot stat {:?}: {}", self.path, e);
            AppError::Storage(format!("Storage error: {}", e))
        })?;

        if !exists {
            tracing::info!(
                "Seeding {:?} with {} default posts",
                self.path,
                posts.len()
            );
            self.write_file(&posts).await?;
        }
        Ok(posts)
    }

    /// Write to a uniquely named sibling temp file, then rename it into place.
    ///
    /// Caller must hold `write_lock`.
    async fn write_file(&self, posts: &[BlogPost]) -> Result<(), AppError> {
        let text = serde_json::to_string_pretty(posts)?;

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).await?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut tmp = tempfile::NamedTempFile::new_in(&dir)?;
            tmp.write_all(text.as_bytes())?;
            tmp.as_file().sync_all()?;
            tmp.persist(&path).map_err(|e| e.error)?;
            Ok(())
        })
        .await
        .map_err(|e| AppError::Storage(format!("Storage task failed: {}", e)))??;

        Ok(())
    }

    async fn read_file(&self) -> Result<Vec<BlogPost>, LoadFailure> {
        let text = fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                LoadFailure::Missing
            } else {
                LoadFailure::Io(e)
            }
        })?;
        serde_json::from_str(&text).map_err(LoadFailure::Corrupt)
    }
}

/// Next identifier: one past the largest existing id, 1 for an empty collection.
pub fn next_id(posts: &[BlogPost]) -> i64 {
    posts.iter().map(|p| p.id).max().unwrap_or(0) + 1
}

/// Today's local date in storage form.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;
    use crate::models::DEFAULT_ICON;

    fn store_in(dir: &TempDir) -> PostStore {
        PostStore::new(dir.path().join("blog_posts.json"))
    }

    fn request(title: &str, excerpt: &str) -> CreatePostRequest {
        CreatePostRequest {
            title: Some(title.to_string()),
            excerpt: Some(excerpt.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_next_id() {
        assert_eq!(next_id(&[]), 1);

        let mut posts = default_posts();
        assert_eq!(next_id(&posts), 7);

        // Gaps are not reused.
        posts.retain(|p| p.id != 6 && p.id != 2);
        assert_eq!(next_id(&posts), 6);
    }

    #[tokio::test]
    async fn test_ensure_initialized_seeds_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let posts = store.ensure_initialized().await.unwrap();

        assert_eq!(posts, default_posts());
        let on_disk: Vec<BlogPost> =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(on_disk, default_posts());
    }

    #[tokio::test]
    async fn test_ensure_initialized_keeps_existing_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "[]").unwrap();

        store.ensure_initialized().await.unwrap();

        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "[]");
        assert!(store.load().await.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file_reseeds() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let posts = store.load().await;

        assert_eq!(posts, default_posts());
        assert!(store.path().exists());
    }

    #[tokio::test]
    async fn test_load_corrupt_file_falls_back() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();

        let posts = store.load().await;

        assert_eq!(posts, default_posts());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = PostStore::new(dir.path().join("nested").join("posts.json"));

        let mut posts = default_posts();
        posts.reverse();
        posts.truncate(3);
        store.save(&posts).await.unwrap();

        assert_eq!(store.load().await, posts);
        // Only the backing file remains next to it; no temp files leak.
        let siblings = std::fs::read_dir(store.path().parent().unwrap()).unwrap().count();
        assert_eq!(siblings, 1);

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains("\"link\""));
    }

    #[tokio::test]
    async fn test_create_post_assigns_id_and_defaults() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        store.ensure_initialized().await.unwrap();

        let post = store.create_post(&request("T", "E")).await.unwrap();

        assert_eq!(post.id, 7);
        assert_eq!(post.date, today());
        assert_eq!(post.icon, DEFAULT_ICON);
        assert!(post.tags.is_empty());
        assert_eq!(post.content, "");

        let posts = store.load().await;
        assert_eq!(posts.len(), 7);
        assert_eq!(posts.last(), Some(&post));
    }

    #[tokio::test]
    async fn test_create_post_over_corrupt_file_replaces_it() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "garbage").unwrap();

        let post = store.create_post(&request("T", "E")).await.unwrap();

        assert_eq!(post.id, 7);
        assert_eq!(store.load().await.len(), 7);
    }

    #[tokio::test]
    async fn test_concurrent_creates_are_not_lost() {
        let dir = TempDir::new().unwrap();
        let store = Arc::new(store_in(&dir));
        store.ensure_initialized().await.unwrap();

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .create_post(&request(&format!("Post {}", i), "E"))
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap().id);
        }
        ids.sort();

        assert_eq!(ids, (7..=14).collect::<Vec<i64>>());
        assert_eq!(store.load().await.len(), 14);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_reseeding_reads_do_not_clobber_create() {
        for round in 0..50 {
            let dir = TempDir::new().unwrap();
            let store = Arc::new(store_in(&dir));

            let readers: Vec<_> = (0..4)
                .map(|_| {
                    let store = store.clone();
                    tokio::spawn(async move { store.load().await })
                })
                .collect();
            let writer = {
                let store = store.clone();
                tokio::spawn(async move { store.create_post(&request("T", "E")).await })
            };

            let created = writer
                .await
                .unwrap()
                .unwrap_or_else(|e| panic!("round {}: create failed: {}", round, e));
            for reader in readers {
                reader.await.unwrap();
            }

            let on_disk: Vec<BlogPost> =
                serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
            assert_eq!(on_disk.len(), 7, "round {}", round);
            assert_eq!(on_disk.last(), Some(&created), "round {}", round);
        }
    }

    #[tokio::test]
    async fn test_unstattable_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = PostStore::new(blocker.join("blog_posts.json"));

        assert!(matches!(
            store.ensure_initialized().await,
            Err(AppError::Storage(_))
        ));
        // Reads still fall back without surfacing the failure.
        assert_eq!(store.load().await, default_posts());
        assert!(matches!(
            store.create_post(&request("T", "E")).await,
            Err(AppError::Storage(_))
        ));
        assert_eq!(std::fs::read_to_string(&blocker).unwrap(), "not a directory");
    }
}
