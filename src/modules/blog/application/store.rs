use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::info;

use crate::modules::blog::domain::defaults::{default_external_posts, default_posts};
use crate::modules::blog::domain::entities::{
    BlogPost, BlogPostPatch, ExternalBlogPost, NewBlogPost,
};
use crate::modules::blog::domain::slug::{slugify, unique_slug};
use crate::shared::id::unique_id;
use crate::shared::persistence::{KeyValueStorage, PersistedStore, Seed, StorageError};

pub const STORAGE_KEY: &str = "portfolio-blog";
pub const STORAGE_VERSION: u32 = 1;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlogState {
    pub posts: Vec<BlogPost>,
    #[serde(default)]
    pub external_posts: Vec<ExternalBlogPost>,
}

impl Default for BlogState {
    fn default() -> Self {
        Self {
            posts: default_posts(),
            external_posts: default_external_posts(),
        }
    }
}

/// Slug for `title` that no other post (`except` excluded) already uses.
fn available_slug(posts: &[BlogPost], title: &str, except: Option<&str>) -> String {
    unique_slug(&slugify(title), |candidate| {
        posts
            .iter()
            .any(|p| p.slug == candidate && Some(p.id.as_str()) != except)
    })
}

/// Persisted blog posts. Slugs are kept unique at write time.
pub struct BlogStore {
    inner: PersistedStore<BlogState>,
}

impl BlogStore {
    pub fn load(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            inner: PersistedStore::load(
                storage,
                STORAGE_KEY,
                STORAGE_VERSION,
                BlogState::default(),
            ),
        }
    }

    pub fn seed() -> Result<Seed, StorageError> {
        Seed::new(STORAGE_KEY, STORAGE_VERSION, &BlogState::default())
    }

    pub fn posts(&self) -> Vec<BlogPost> {
        self.inner.read(|s| s.posts.clone())
    }

    pub fn read<R>(&self, f: impl FnOnce(&BlogState) -> R) -> R {
        self.inner.read(f)
    }

    pub fn subscribe(&self) -> watch::Receiver<BlogState> {
        self.inner.subscribe()
    }

    pub fn external_posts(&self) -> Vec<ExternalBlogPost> {
        self.inner.read(|s| s.external_posts.clone())
    }

    pub fn get_by_id(&self, id: &str) -> Option<BlogPost> {
        self.inner
            .read(|s| s.posts.iter().find(|p| p.id == id).cloned())
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<BlogPost> {
        self.inner
            .read(|s| s.posts.iter().find(|p| p.slug == slug).cloned())
    }

    pub fn add(&self, new_post: NewBlogPost) -> BlogPost {
        let post = self.inner.read(|s| {
            let id = unique_id(|candidate| s.posts.iter().any(|p| p.id == candidate));
            let slug = available_slug(&s.posts, &new_post.title, None);
            new_post.into_post(id, slug)
        });

        self.inner.mutate(|s| {
            s.posts.push(post.clone());
            Some(())
        });

        info!("Blog post {} added as '{}'", post.id, post.slug);
        post
    }

    /// Merges `patch` into the post. A title change re-derives the slug.
    pub fn update(&self, id: &str, patch: BlogPostPatch) -> Option<BlogPost> {
        self.inner.mutate(|s| {
            let index = s.posts.iter().position(|p| p.id == id)?;
            let retitled = patch
                .title
                .as_ref()
                .filter(|title| **title != s.posts[index].title)
                .map(|title| available_slug(&s.posts, title, Some(id)));

            let post = &mut s.posts[index];
            patch.apply(post);
            if let Some(slug) = retitled {
                post.slug = slug;
            }
            Some(post.clone())
        })
    }

    pub fn delete(&self, id: &str) -> bool {
        self.inner
            .mutate(|s| {
                let index = s.posts.iter().position(|p| p.id == id)?;
                s.posts.remove(index);
                Some(())
            })
            .is_some()
    }

    pub fn reset(&self) {
        self.inner.reset();
        info!("Blog reset to defaults");
    }
}
