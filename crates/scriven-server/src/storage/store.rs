//! In-memory repository for users, writings, comments, and analytics.
//!
//! The store is the authoritative state and the only mutator of it. Every
//! public method runs as a single critical section over the whole data
//! set: derived-metric maintenance (the vote rescan in particular) spans
//! several maps, and no operation may observe another's partial mutation.
//! Operations are total - lookups return `Option`, rejections return
//! `false` - and never panic.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use scriven_core::integrity::content_fingerprint;
use scriven_types::{Analytics, Comment, User, VoteKind, Writing, WritingDraft, WritingPatch};
use uuid::Uuid;

/// Earnings credited per view, in dollars.
const EARNINGS_PER_VIEW: f64 = 0.1;

/// Default result size for the following feed.
pub const DEFAULT_FOLLOWING_LIMIT: usize = 20;

/// Entity maps plus the secondary lookup indexes. Everything is keyed and
/// cross-referenced by id string; there are no embedded object graphs.
#[derive(Default)]
pub(super) struct Tables {
    pub(super) users: HashMap<String, User>,
    pub(super) writings: HashMap<String, Writing>,
    pub(super) comments: HashMap<String, Comment>,
    pub(super) analytics: HashMap<String, Analytics>,
    pub(super) gov_id_index: HashMap<String, String>,
    pub(super) email_index: HashMap<String, String>,
}

pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::default()),
        }
    }

    /// Create a store preloaded with the fixed sample data set.
    pub fn seeded() -> Self {
        Self {
            tables: RwLock::new(super::seed::tables()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }

    // User operations

    /// Register a new user and a zeroed analytics record.
    ///
    /// Duplicate govId/email rejection is the caller's job; the store
    /// overwrites the index entry if a duplicate slips through.
    pub fn create_user(
        &self,
        gov_id: &str,
        email: &str,
        name: &str,
        verified: bool,
        bio: Option<String>,
        avatar: Option<String>,
    ) -> User {
        let mut tables = self.write();
        let user = User {
            id: Uuid::new_v4().to_string(),
            gov_id: gov_id.to_string(),
            email: email.to_string(),
            name: name.to_string(),
            verified,
            bio,
            avatar,
            followers: Vec::new(),
            following: Vec::new(),
            created_at: Utc::now(),
        };
        tables
            .gov_id_index
            .insert(user.gov_id.clone(), user.id.clone());
        tables
            .email_index
            .insert(user.email.clone(), user.id.clone());
        tables
            .analytics
            .insert(user.id.clone(), Analytics::zeroed(&user.id));
        tables.users.insert(user.id.clone(), user.clone());
        user
    }

    pub fn get_user_by_id(&self, id: &str) -> Option<User> {
        self.read().users.get(id).cloned()
    }

    pub fn get_user_by_gov_id(&self, gov_id: &str) -> Option<User> {
        let tables = self.read();
        let user_id = tables.gov_id_index.get(gov_id)?;
        tables.users.get(user_id).cloned()
    }

    pub fn get_user_by_email(&self, email: &str) -> Option<User> {
        let tables = self.read();
        let user_id = tables.email_index.get(email)?;
        tables.users.get(user_id).cloned()
    }

    /// Record that `follower_id` follows `following_id`.
    ///
    /// Returns false if either id is unknown, the ids are equal, or the
    /// relationship already exists; a repeat call never double-counts.
    pub fn follow_user(&self, follower_id: &str, following_id: &str) -> bool {
        if follower_id == following_id {
            return false;
        }
        let mut tables = self.write();
        if !tables.users.contains_key(follower_id) || !tables.users.contains_key(following_id) {
            return false;
        }
        let already_following = tables
            .users
            .get(follower_id)
            .map(|u| u.following.iter().any(|id| id == following_id))
            .unwrap_or(true);
        if already_following {
            return false;
        }

        if let Some(follower) = tables.users.get_mut(follower_id) {
            follower.following.push(following_id.to_string());
        }
        if let Some(target) = tables.users.get_mut(following_id) {
            target.followers.push(follower_id.to_string());
        }
        if let Some(analytics) = tables.analytics.get_mut(following_id) {
            analytics.followers_count += 1;
        }
        true
    }

    /// Remove the follow relationship; false only if either user is unknown.
    ///
    /// Removal is no-op safe, but the follower count is decremented (floored
    /// at zero) whether or not the relationship existed.
    pub fn unfollow_user(&self, follower_id: &str, following_id: &str) -> bool {
        let mut tables = self.write();
        if !tables.users.contains_key(follower_id) || !tables.users.contains_key(following_id) {
            return false;
        }

        if let Some(follower) = tables.users.get_mut(follower_id) {
            follower.following.retain(|id| id != following_id);
        }
        if let Some(target) = tables.users.get_mut(following_id) {
            target.followers.retain(|id| id != follower_id);
        }
        if let Some(analytics) = tables.analytics.get_mut(following_id) {
            analytics.followers_count = analytics.followers_count.saturating_sub(1);
        }
        true
    }

    // Writing operations

    /// Publish a writing. The content fingerprint is taken here, once.
    pub fn create_writing(&self, author_id: &str, draft: WritingDraft) -> Writing {
        let mut tables = self.write();
        let now = Utc::now();
        let legal_hash = content_fingerprint(&draft.content);
        let writing = Writing {
            id: Uuid::new_v4().to_string(),
            author_id: author_id.to_string(),
            title: draft.title,
            content: draft.content,
            template: draft.template,
            is_public: draft.is_public,
            timestamp: now,
            last_modified: now,
            background: draft.background,
            font_family: draft.font_family,
            color_grade: draft.color_grade,
            images: draft.images,
            links: draft.links,
            views: 0,
            upvotes: Vec::new(),
            downvotes: Vec::new(),
            shares: 0,
            legal_hash,
        };
        if let Some(analytics) = tables.analytics.get_mut(author_id) {
            analytics.writings_count += 1;
        }
        tables.writings.insert(writing.id.clone(), writing.clone());
        writing
    }

    pub fn get_writing_by_id(&self, id: &str) -> Option<Writing> {
        self.read().writings.get(id).cloned()
    }

    /// Unordered; callers sort when presentation requires it.
    pub fn get_writings_by_author(&self, author_id: &str) -> Vec<Writing> {
        self.read()
            .writings
            .values()
            .filter(|w| w.author_id == author_id)
            .cloned()
            .collect()
    }

    /// Unordered; callers sort when presentation requires it.
    pub fn get_public_writings(&self) -> Vec<Writing> {
        self.read()
            .writings
            .values()
            .filter(|w| w.is_public)
            .cloned()
            .collect()
    }

    /// Merge the patch over the record and refresh `last_modified`.
    ///
    /// `legal_hash` stays as taken at creation even when the content
    /// changes.
    pub fn update_writing(&self, id: &str, patch: WritingPatch) -> Option<Writing> {
        let mut tables = self.write();
        let writing = tables.writings.get_mut(id)?;

        if let Some(title) = patch.title {
            writing.title = title;
        }
        if let Some(content) = patch.content {
            writing.content = content;
        }
        if let Some(template) = patch.template {
            writing.template = template;
        }
        if let Some(is_public) = patch.is_public {
            writing.is_public = is_public;
        }
        if let Some(background) = patch.background {
            writing.background = Some(background);
        }
        if let Some(font_family) = patch.font_family {
            writing.font_family = Some(font_family);
        }
        if let Some(color_grade) = patch.color_grade {
            writing.color_grade = Some(color_grade);
        }
        if let Some(images) = patch.images {
            writing.images = Some(images);
        }
        if let Some(links) = patch.links {
            writing.links = Some(links);
        }
        writing.last_modified = Utc::now();

        Some(writing.clone())
    }

    /// Delete a writing and release its slot in the author's count.
    pub fn delete_writing(&self, id: &str) -> bool {
        let mut tables = self.write();
        let writing = match tables.writings.remove(id) {
            Some(writing) => writing,
            None => return false,
        };
        if let Some(analytics) = tables.analytics.get_mut(&writing.author_id) {
            analytics.writings_count = analytics.writings_count.saturating_sub(1);
        }
        true
    }

    /// Cast or switch a vote; false if the writing is unknown.
    ///
    /// The voter is removed from both sets before being added to the
    /// requested one, so each user holds at most one vote per writing.
    /// An upvote recomputes the author's upvote total from every writing
    /// they have; a downvote leaves the stored total untouched.
    pub fn vote_writing(&self, writing_id: &str, user_id: &str, kind: VoteKind) -> bool {
        let mut tables = self.write();
        let author_id = match tables.writings.get_mut(writing_id) {
            Some(writing) => {
                writing.upvotes.retain(|id| id != user_id);
                writing.downvotes.retain(|id| id != user_id);
                match kind {
                    VoteKind::Up => writing.upvotes.push(user_id.to_string()),
                    VoteKind::Down => writing.downvotes.push(user_id.to_string()),
                }
                writing.author_id.clone()
            }
            None => return false,
        };

        if kind == VoteKind::Up {
            let total: u64 = tables
                .writings
                .values()
                .filter(|w| w.author_id == author_id)
                .map(|w| w.upvotes.len() as u64)
                .sum();
            if let Some(analytics) = tables.analytics.get_mut(&author_id) {
                analytics.total_upvotes = total;
            }
        }
        true
    }

    /// Count a view; earnings are reassigned from the new view total.
    pub fn increment_views(&self, writing_id: &str) {
        let mut tables = self.write();
        let author_id = match tables.writings.get_mut(writing_id) {
            Some(writing) => {
                writing.views += 1;
                writing.author_id.clone()
            }
            None => return,
        };
        if let Some(analytics) = tables.analytics.get_mut(&author_id) {
            analytics.total_views += 1;
            analytics.total_earnings = analytics.total_views as f64 * EARNINGS_PER_VIEW;
        }
    }

    /// Count a share.
    pub fn increment_shares(&self, writing_id: &str) {
        let mut tables = self.write();
        let author_id = match tables.writings.get_mut(writing_id) {
            Some(writing) => {
                writing.shares += 1;
                writing.author_id.clone()
            }
            None => return,
        };
        if let Some(analytics) = tables.analytics.get_mut(&author_id) {
            analytics.total_shares += 1;
        }
    }

    // Comment operations

    /// Attach a comment. The writing's existence is the caller's check.
    pub fn create_comment(&self, writing_id: &str, author_id: &str, content: &str) -> Comment {
        let mut tables = self.write();
        let comment = Comment {
            id: Uuid::new_v4().to_string(),
            writing_id: writing_id.to_string(),
            author_id: author_id.to_string(),
            content: content.to_string(),
            timestamp: Utc::now(),
        };
        tables.comments.insert(comment.id.clone(), comment.clone());
        comment
    }

    /// Unordered; callers sort when presentation requires it.
    pub fn get_comments_by_writing(&self, writing_id: &str) -> Vec<Comment> {
        self.read()
            .comments
            .values()
            .filter(|c| c.writing_id == writing_id)
            .cloned()
            .collect()
    }

    // Analytics operations

    pub fn get_analytics(&self, user_id: &str) -> Option<Analytics> {
        self.read().analytics.get(user_id).cloned()
    }

    // Feed operations

    /// Public writings ranked by engagement score, highest first.
    ///
    /// Score is `views + 10 * upvotes + 5 * shares`; the sort is stable so
    /// ties keep their original order within one snapshot.
    pub fn get_trending_writings(&self, limit: usize) -> Vec<Writing> {
        let mut writings = self.get_public_writings();
        writings.sort_by(|a, b| trending_score(b).cmp(&trending_score(a)));
        writings.truncate(limit);
        writings
    }

    /// Public writings from followed accounts, newest first.
    ///
    /// An unknown user gets an empty feed, not an error.
    pub fn get_following_feed(&self, user_id: &str, limit: usize) -> Vec<Writing> {
        let tables = self.read();
        let user = match tables.users.get(user_id) {
            Some(user) => user,
            None => return Vec::new(),
        };
        let mut writings: Vec<Writing> = tables
            .writings
            .values()
            .filter(|w| w.is_public && user.following.iter().any(|id| id == &w.author_id))
            .cloned()
            .collect();
        writings.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        writings.truncate(limit);
        writings
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn trending_score(writing: &Writing) -> u64 {
    writing.views + writing.upvotes.len() as u64 * 10 + writing.shares * 5
}

#[cfg(test)]
mod tests {
    use super::*;
    use scriven_types::Template;

    fn draft(title: &str, public: bool) -> WritingDraft {
        WritingDraft {
            title: title.to_string(),
            content: format!("{title} body"),
            is_public: public,
            ..WritingDraft::default()
        }
    }

    fn user(store: &Store, n: u32) -> User {
        store.create_user(
            &format!("GOV{:06}", n),
            &format!("user{n}@example.com"),
            &format!("User {n}"),
            true,
            None,
            None,
        )
    }

    #[test]
    fn create_user_registers_indexes_and_zeroed_analytics() {
        let store = Store::new();
        let created = store.create_user(
            "GOV123456",
            "writer@example.com",
            "Jane Writer",
            true,
            Some("bio".to_string()),
            None,
        );

        assert_eq!(store.get_user_by_id(&created.id).unwrap().id, created.id);
        assert_eq!(
            store.get_user_by_gov_id("GOV123456").unwrap().id,
            created.id
        );
        assert_eq!(
            store.get_user_by_email("writer@example.com").unwrap().id,
            created.id
        );
        assert!(store.get_user_by_gov_id("GOV000001").is_none());

        let analytics = store.get_analytics(&created.id).unwrap();
        assert_eq!(analytics.total_views, 0);
        assert_eq!(analytics.writings_count, 0);
        assert_eq!(analytics.total_earnings, 0.0);
    }

    #[test]
    fn self_follow_is_rejected_without_mutation() {
        let store = Store::new();
        let a = user(&store, 1);

        assert!(!store.follow_user(&a.id, &a.id));

        let a = store.get_user_by_id(&a.id).unwrap();
        assert!(a.following.is_empty());
        assert!(a.followers.is_empty());
        assert_eq!(store.get_analytics(&a.id).unwrap().followers_count, 0);
    }

    #[test]
    fn follow_is_idempotent() {
        let store = Store::new();
        let a = user(&store, 1);
        let b = user(&store, 2);

        assert!(store.follow_user(&a.id, &b.id));
        assert!(!store.follow_user(&a.id, &b.id));

        let a = store.get_user_by_id(&a.id).unwrap();
        let b = store.get_user_by_id(&b.id).unwrap();
        assert_eq!(a.following, vec![b.id.clone()]);
        assert_eq!(b.followers, vec![a.id.clone()]);
        assert_eq!(store.get_analytics(&b.id).unwrap().followers_count, 1);
    }

    #[test]
    fn follow_rejects_unknown_users() {
        let store = Store::new();
        let a = user(&store, 1);

        assert!(!store.follow_user(&a.id, "missing"));
        assert!(!store.follow_user("missing", &a.id));
    }

    #[test]
    fn unfollow_never_followed_pair_is_a_noop_success() {
        let store = Store::new();
        let a = user(&store, 1);
        let b = user(&store, 2);

        assert!(store.unfollow_user(&a.id, &b.id));
        assert_eq!(store.get_analytics(&b.id).unwrap().followers_count, 0);
        assert!(!store.unfollow_user(&a.id, "missing"));
    }

    #[test]
    fn unfollow_removes_both_sides_and_decrements() {
        let store = Store::new();
        let a = user(&store, 1);
        let b = user(&store, 2);

        store.follow_user(&a.id, &b.id);
        assert!(store.unfollow_user(&a.id, &b.id));

        let a = store.get_user_by_id(&a.id).unwrap();
        let b = store.get_user_by_id(&b.id).unwrap();
        assert!(a.following.is_empty());
        assert!(b.followers.is_empty());
        assert_eq!(store.get_analytics(&b.id).unwrap().followers_count, 0);
    }

    #[test]
    fn create_writing_fingerprints_content_and_counts() {
        let store = Store::new();
        let author = user(&store, 1);

        let writing = store.create_writing(&author.id, draft("First", true));
        assert_eq!(writing.views, 0);
        assert_eq!(writing.shares, 0);
        assert!(writing.upvotes.is_empty());
        assert_eq!(writing.legal_hash.len(), 64);
        assert_eq!(writing.timestamp, writing.last_modified);
        assert_eq!(store.get_analytics(&author.id).unwrap().writings_count, 1);
    }

    #[test]
    fn update_keeps_legal_hash_and_refreshes_last_modified() {
        let store = Store::new();
        let author = user(&store, 1);
        let writing = store.create_writing(&author.id, draft("Original", true));

        let patch = WritingPatch {
            content: Some("rewritten from scratch".to_string()),
            template: Some(Template::Report),
            ..WritingPatch::default()
        };
        let updated = store.update_writing(&writing.id, patch).unwrap();

        assert_eq!(updated.legal_hash, writing.legal_hash);
        assert_eq!(updated.content, "rewritten from scratch");
        assert_eq!(updated.title, "Original");
        assert_eq!(updated.template, Template::Report);
        assert!(updated.last_modified >= writing.last_modified);

        assert!(store.update_writing("missing", WritingPatch::default()).is_none());
    }

    #[test]
    fn delete_unknown_writing_is_false_and_leaves_analytics_alone() {
        let store = Store::new();
        let author = user(&store, 1);
        store.create_writing(&author.id, draft("Kept", true));

        assert!(!store.delete_writing("missing"));
        assert_eq!(store.get_analytics(&author.id).unwrap().writings_count, 1);
    }

    #[test]
    fn delete_decrements_writings_count() {
        let store = Store::new();
        let author = user(&store, 1);
        let first = store.create_writing(&author.id, draft("First", true));
        store.create_writing(&author.id, draft("Second", true));

        assert!(store.delete_writing(&first.id));
        assert!(store.get_writing_by_id(&first.id).is_none());
        assert_eq!(store.get_analytics(&author.id).unwrap().writings_count, 1);
        assert!(!store.delete_writing(&first.id));
        assert_eq!(store.get_analytics(&author.id).unwrap().writings_count, 1);
    }

    #[test]
    fn vote_flip_leaves_exactly_one_membership() {
        let store = Store::new();
        let author = user(&store, 1);
        let voter = user(&store, 2);
        let writing = store.create_writing(&author.id, draft("Voted", true));

        assert!(store.vote_writing(&writing.id, &voter.id, VoteKind::Up));
        assert!(store.vote_writing(&writing.id, &voter.id, VoteKind::Down));

        let writing = store.get_writing_by_id(&writing.id).unwrap();
        assert!(writing.upvotes.is_empty());
        assert_eq!(writing.downvotes, vec![voter.id.clone()]);

        assert!(!store.vote_writing("missing", &voter.id, VoteKind::Up));
    }

    #[test]
    fn upvote_total_is_rescanned_across_all_author_writings() {
        let store = Store::new();
        let author = user(&store, 1);
        let u1 = user(&store, 2);
        let u2 = user(&store, 3);
        let w1 = store.create_writing(&author.id, draft("First", true));
        let w2 = store.create_writing(&author.id, draft("Second", true));

        store.vote_writing(&w1.id, &u1.id, VoteKind::Up);
        store.vote_writing(&w1.id, &u2.id, VoteKind::Up);
        store.vote_writing(&w2.id, &u1.id, VoteKind::Up);
        assert_eq!(store.get_analytics(&author.id).unwrap().total_upvotes, 3);

        // A downvote removes the upvote but does not trigger the rescan,
        // so the stored total goes stale until the next upvote.
        store.vote_writing(&w2.id, &u1.id, VoteKind::Down);
        assert_eq!(store.get_analytics(&author.id).unwrap().total_upvotes, 3);

        store.vote_writing(&w2.id, &u2.id, VoteKind::Up);
        assert_eq!(store.get_analytics(&author.id).unwrap().total_upvotes, 3);
    }

    #[test]
    fn views_accumulate_and_reprice_earnings() {
        let store = Store::new();
        let author = user(&store, 1);
        let writing = store.create_writing(&author.id, draft("Seen", true));

        for _ in 0..10 {
            store.increment_views(&writing.id);
        }

        assert_eq!(store.get_writing_by_id(&writing.id).unwrap().views, 10);
        let analytics = store.get_analytics(&author.id).unwrap();
        assert_eq!(analytics.total_views, 10);
        assert!((analytics.total_earnings - 1.0).abs() < 1e-9);

        // Unknown writing is a no-op.
        store.increment_views("missing");
        assert_eq!(store.get_analytics(&author.id).unwrap().total_views, 10);
    }

    #[test]
    fn shares_accumulate_incrementally() {
        let store = Store::new();
        let author = user(&store, 1);
        let writing = store.create_writing(&author.id, draft("Shared", true));

        for _ in 0..3 {
            store.increment_shares(&writing.id);
        }
        store.increment_shares("missing");

        assert_eq!(store.get_writing_by_id(&writing.id).unwrap().shares, 3);
        assert_eq!(store.get_analytics(&author.id).unwrap().total_shares, 3);
    }

    #[test]
    fn comments_attach_to_their_writing() {
        let store = Store::new();
        let author = user(&store, 1);
        let reader = user(&store, 2);
        let w1 = store.create_writing(&author.id, draft("First", true));
        let w2 = store.create_writing(&author.id, draft("Second", true));

        store.create_comment(&w1.id, &reader.id, "great piece");
        store.create_comment(&w1.id, &author.id, "thank you");
        store.create_comment(&w2.id, &reader.id, "also good");

        let comments = store.get_comments_by_writing(&w1.id);
        assert_eq!(comments.len(), 2);
        assert!(comments.iter().all(|c| c.writing_id == w1.id));
        assert!(store.get_comments_by_writing("missing").is_empty());
    }

    #[test]
    fn trending_ranks_by_engagement_score() {
        let store = Store::new();
        let author = user(&store, 1);
        let viewed = store.create_writing(&author.id, draft("Viewed", true));
        let upvoted = store.create_writing(&author.id, draft("Upvoted", true));
        let hidden = store.create_writing(&author.id, draft("Hidden", false));

        // Score 100 from raw views.
        for _ in 0..100 {
            store.increment_views(&viewed.id);
        }
        // Score 110: 50 views + 6 upvotes * 10.
        for _ in 0..50 {
            store.increment_views(&upvoted.id);
        }
        for n in 10..16 {
            let voter = user(&store, n);
            store.vote_writing(&upvoted.id, &voter.id, VoteKind::Up);
        }
        // Private writings never trend, whatever their numbers.
        for _ in 0..500 {
            store.increment_views(&hidden.id);
        }

        let top = store.get_trending_writings(1);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id, upvoted.id);

        let all = store.get_trending_writings(10);
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, upvoted.id);
        assert_eq!(all[1].id, viewed.id);
    }

    #[test]
    fn trending_truncates_to_limit() {
        let store = Store::new();
        let author = user(&store, 1);
        for i in 0..5 {
            store.create_writing(&author.id, draft(&format!("W{i}"), true));
        }
        assert_eq!(store.get_trending_writings(2).len(), 2);
    }

    #[test]
    fn trending_ties_keep_snapshot_order() {
        let store = Store::new();
        let author = user(&store, 1);
        for i in 0..3 {
            store.create_writing(&author.id, draft(&format!("Tied{i}"), true));
        }

        // All scores are zero; the stable sort must leave the snapshot
        // order untouched.
        let snapshot: Vec<String> = store
            .get_public_writings()
            .into_iter()
            .map(|w| w.id)
            .collect();
        let ranked: Vec<String> = store
            .get_trending_writings(10)
            .into_iter()
            .map(|w| w.id)
            .collect();
        assert_eq!(ranked, snapshot);
    }

    #[test]
    fn following_feed_is_newest_first_and_public_only() {
        let store = Store::new();
        let reader = user(&store, 1);
        let followed = user(&store, 2);
        let stranger = user(&store, 3);
        store.follow_user(&reader.id, &followed.id);

        let older = store.create_writing(&followed.id, draft("Older", true));
        let newer = store.create_writing(&followed.id, draft("Newer", true));
        store.create_writing(&followed.id, draft("Private", false));
        store.create_writing(&stranger.id, draft("Unfollowed", true));

        let feed = store.get_following_feed(&reader.id, DEFAULT_FOLLOWING_LIMIT);
        assert_eq!(
            feed.iter().map(|w| w.id.as_str()).collect::<Vec<_>>(),
            vec![newer.id.as_str(), older.id.as_str()]
        );

        assert!(store.get_following_feed("missing", 20).is_empty());
        assert!(store
            .get_following_feed(&stranger.id, 20)
            .is_empty());
    }

    #[test]
    fn following_feed_truncates_to_limit() {
        let store = Store::new();
        let reader = user(&store, 1);
        let followed = user(&store, 2);
        store.follow_user(&reader.id, &followed.id);
        for i in 0..4 {
            store.create_writing(&followed.id, draft(&format!("W{i}"), true));
        }
        assert_eq!(store.get_following_feed(&reader.id, 3).len(), 3);
    }

    #[test]
    fn registered_author_earns_from_ten_views() {
        let store = Store::new();
        let author = store.create_user("GOV111111", "a@x.com", "A", true, None, None);
        let writing = store.create_writing(&author.id, draft("Debut", true));

        for _ in 0..10 {
            store.increment_views(&writing.id);
        }

        let analytics = store.get_analytics(&author.id).unwrap();
        assert_eq!(analytics.total_views, 10);
        assert!((analytics.total_earnings - 1.0).abs() < 1e-9);
    }
}
