//! Fixed sample data loaded at startup.
//!
//! The platform keeps no persistent state, so every process starts from
//! this data set. The figures mirror the production seed, including
//! analytics earnings that predate the current per-view rate.

use chrono::{Duration, Utc};
use scriven_core::integrity::content_fingerprint;
use scriven_types::{Analytics, Template, User, Writing};
use uuid::Uuid;

use super::store::Tables;

pub(super) fn tables() -> Tables {
    let mut tables = Tables::default();
    let now = Utc::now();

    let jane = User {
        id: Uuid::new_v4().to_string(),
        gov_id: "GOV123456".to_string(),
        email: "writer@example.com".to_string(),
        name: "Jane Writer".to_string(),
        verified: true,
        bio: Some("Professional writer and storyteller".to_string()),
        avatar: None,
        followers: Vec::new(),
        following: Vec::new(),
        created_at: now,
    };

    let john = User {
        id: Uuid::new_v4().to_string(),
        gov_id: "GOV789012".to_string(),
        email: "author@example.com".to_string(),
        name: "John Author".to_string(),
        verified: true,
        bio: Some("Published author and blogger".to_string()),
        avatar: None,
        followers: Vec::new(),
        following: Vec::new(),
        created_at: now,
    };

    let jane_article = Writing {
        id: Uuid::new_v4().to_string(),
        author_id: jane.id.clone(),
        title: "The Future of Human Writing".to_string(),
        content: "In an age where AI can generate text at lightning speed, human writing \
                  has become more precious than ever. This article explores why authentic \
                  human creativity matters..."
            .to_string(),
        template: Template::Article,
        is_public: true,
        timestamp: now - Duration::days(1),
        last_modified: now - Duration::days(1),
        background: None,
        font_family: None,
        color_grade: None,
        images: None,
        links: None,
        views: 1250,
        upvotes: vec![john.id.clone()],
        downvotes: Vec::new(),
        shares: 45,
        legal_hash: content_fingerprint(
            "In an age where AI can generate text at lightning speed, human writing \
             has become more precious than ever. This article explores why authentic \
             human creativity matters...",
        ),
    };

    let john_article = Writing {
        id: Uuid::new_v4().to_string(),
        author_id: john.id.clone(),
        title: "My Journey as a Writer".to_string(),
        content: "Writing has always been my passion. From the first story I wrote as a \
                  child to my published novels today, every word has been crafted with \
                  care and intention..."
            .to_string(),
        template: Template::Article,
        is_public: true,
        timestamp: now - Duration::days(2),
        last_modified: now - Duration::days(2),
        background: None,
        font_family: None,
        color_grade: None,
        images: None,
        links: None,
        views: 890,
        upvotes: vec![jane.id.clone()],
        downvotes: Vec::new(),
        shares: 32,
        legal_hash: content_fingerprint(
            "Writing has always been my passion. From the first story I wrote as a \
             child to my published novels today, every word has been crafted with \
             care and intention...",
        ),
    };

    tables.analytics.insert(
        jane.id.clone(),
        Analytics {
            user_id: jane.id.clone(),
            total_views: 1250,
            total_upvotes: 1,
            total_shares: 45,
            total_earnings: 125.50,
            writings_count: 1,
            followers_count: 0,
        },
    );
    tables.analytics.insert(
        john.id.clone(),
        Analytics {
            user_id: john.id.clone(),
            total_views: 890,
            total_upvotes: 1,
            total_shares: 32,
            total_earnings: 89.00,
            writings_count: 1,
            followers_count: 0,
        },
    );

    tables.gov_id_index.insert(jane.gov_id.clone(), jane.id.clone());
    tables.gov_id_index.insert(john.gov_id.clone(), john.id.clone());
    tables.email_index.insert(jane.email.clone(), jane.id.clone());
    tables.email_index.insert(john.email.clone(), john.id.clone());

    tables
        .writings
        .insert(jane_article.id.clone(), jane_article);
    tables
        .writings
        .insert(john_article.id.clone(), john_article);
    tables.users.insert(jane.id.clone(), jane);
    tables.users.insert(john.id.clone(), john);

    tables
}

#[cfg(test)]
mod tests {
    use crate::storage::Store;

    #[test]
    fn seeded_store_has_sample_accounts_and_writings() {
        let store = Store::seeded();

        let jane = store.get_user_by_gov_id("GOV123456").unwrap();
        let john = store.get_user_by_email("author@example.com").unwrap();
        assert!(jane.verified);
        assert_ne!(jane.id, john.id);

        let public = store.get_public_writings();
        assert_eq!(public.len(), 2);

        let jane_stats = store.get_analytics(&jane.id).unwrap();
        assert_eq!(jane_stats.total_views, 1250);
        assert_eq!(jane_stats.writings_count, 1);
    }

    #[test]
    fn seeded_metrics_keep_accumulating() {
        let store = Store::seeded();
        let jane = store.get_user_by_gov_id("GOV123456").unwrap();
        let writing = store
            .get_writings_by_author(&jane.id)
            .into_iter()
            .next()
            .unwrap();

        store.increment_views(&writing.id);

        let analytics = store.get_analytics(&jane.id).unwrap();
        assert_eq!(analytics.total_views, 1251);
        assert!((analytics.total_earnings - 125.1).abs() < 1e-9);
    }
}
