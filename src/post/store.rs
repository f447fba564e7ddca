use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::post::post::{Post, MAX_RELEVANCE};
use crate::types::feed_view::FeedError;
use crate::types::identifiers::{PostId, TopicId};

/// The feed's post collection.
///
/// Iteration follows ingestion order, which is what ranking falls back to
/// for equal keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostStore {
    posts: Vec<Post>,
    index: BTreeMap<PostId, usize>,
}

impl PostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store, rejecting duplicate ids and out-of-range relevance.
    pub fn from_posts(posts: Vec<Post>) -> Result<Self, FeedError> {
        let mut index = BTreeMap::new();

        for (position, post) in posts.iter().enumerate() {
            if post.ai_relevance > MAX_RELEVANCE {
                return Err(FeedError::RelevanceOutOfRange {
                    id: post.id.as_str().to_string(),
                    relevance: post.ai_relevance,
                });
            }
            if index.insert(post.id.clone(), position).is_some() {
                return Err(FeedError::DuplicatePostId(post.id.as_str().to_string()));
            }
        }

        Ok(Self { posts, index })
    }

    /// Ingest a JSON array of posts.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, FeedError> {
        let posts: Vec<Post> = serde_json::from_reader(reader)?;
        Self::from_posts(posts)
    }

    /// Ingest a JSON seed file.
    pub fn from_path(path: &Path) -> Result<Self, FeedError> {
        let f = File::open(path)?;
        Self::from_reader(BufReader::new(f))
    }

    /// Keep only the posts filed under `topic`, preserving order.
    pub fn scoped_to_topic(self, topic: &TopicId) -> Self {
        let posts = self
            .posts
            .into_iter()
            .filter(|post| post.topic_id.as_ref() == Some(topic))
            .collect::<Vec<_>>();
        let index = posts
            .iter()
            .enumerate()
            .map(|(position, post)| (post.id.clone(), position))
            .collect();

        Self { posts, index }
    }

    pub fn get(&self, id: &PostId) -> Option<&Post> {
        self.index
            .get(id)
            .and_then(|&position| self.posts.get(position))
    }

    pub(crate) fn get_mut(&mut self, id: &PostId) -> Option<&mut Post> {
        self.index
            .get(id)
            .and_then(|&position| self.posts.get_mut(position))
    }

    pub fn contains(&self, id: &PostId) -> bool {
        self.index.contains_key(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.iter()
    }

    pub fn as_slice(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::post::Author;
    use crate::types::identifiers::UserId;

    fn post(id: &str, topic: Option<&str>) -> Post {
        let author = Author::new(UserId::new("u1").unwrap(), "Ada");
        let mut post = Post::new(PostId::new(id).unwrap(), author, 80);
        post.topic_id = topic.map(|t| TopicId::new(t).unwrap());
        post
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = PostStore::from_posts(vec![post("a", None), post("a", None)]).unwrap_err();
        assert!(matches!(err, FeedError::DuplicatePostId(id) if id == "a"));
    }

    #[test]
    fn topic_scope_reindexes() {
        let store = PostStore::from_posts(vec![
            post("a", Some("graphs")),
            post("b", Some("sorting")),
            post("c", Some("graphs")),
        ])
        .unwrap()
        .scoped_to_topic(&TopicId::new("graphs").unwrap());

        assert_eq!(store.len(), 2);
        let c = PostId::new("c").unwrap();
        assert_eq!(store.get(&c).map(|p| p.id.as_str()), Some("c"));
        assert!(!store.contains(&PostId::new("b").unwrap()));
    }
}
