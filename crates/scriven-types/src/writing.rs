//! Writing content types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Layout template a writing was authored with
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    #[default]
    Blank,
    Report,
    Article,
    Note,
}

impl std::fmt::Display for Template {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Template::Blank => write!(f, "blank"),
            Template::Report => write!(f, "report"),
            Template::Article => write!(f, "article"),
            Template::Note => write!(f, "note"),
        }
    }
}

/// Direction of a vote on a writing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Up,
    Down,
}

/// A published (or draft) piece of content
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Writing {
    pub id: String,
    pub author_id: String,
    pub title: String,
    pub content: String,
    pub template: Template,
    pub is_public: bool,
    /// Creation time; the following feed ranks by this, not `last_modified`.
    pub timestamp: DateTime<Utc>,
    pub last_modified: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_grade: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<String>>,
    pub views: u64,
    /// Voter ids; a user appears in at most one of `upvotes`/`downvotes`.
    pub upvotes: Vec<String>,
    pub downvotes: Vec<String>,
    pub shares: u64,
    /// Content fingerprint taken at creation. Never recomputed, so it
    /// attests to the originally published text even after edits.
    pub legal_hash: String,
}

/// Fields supplied by the author when publishing a writing
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingDraft {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub template: Template,
    #[serde(default)]
    pub is_public: bool,
    pub background: Option<String>,
    pub font_family: Option<String>,
    pub color_grade: Option<String>,
    pub images: Option<Vec<String>>,
    pub links: Option<Vec<String>>,
}

/// Partial update to a writing; `None` fields keep their current values
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WritingPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub template: Option<Template>,
    pub is_public: Option<bool>,
    pub background: Option<String>,
    pub font_family: Option<String>,
    pub color_grade: Option<String>,
    pub images: Option<Vec<String>>,
    pub links: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_uses_lowercase_wire_values() {
        assert_eq!(serde_json::to_string(&Template::Article).unwrap(), "\"article\"");
        let parsed: Template = serde_json::from_str("\"note\"").unwrap();
        assert_eq!(parsed, Template::Note);
    }

    #[test]
    fn vote_kind_round_trips() {
        assert_eq!(serde_json::to_string(&VoteKind::Up).unwrap(), "\"up\"");
        let parsed: VoteKind = serde_json::from_str("\"down\"").unwrap();
        assert_eq!(parsed, VoteKind::Down);
    }

    #[test]
    fn draft_defaults_template_and_visibility() {
        let draft: WritingDraft =
            serde_json::from_str(r#"{"title":"T","content":"C"}"#).unwrap();
        assert_eq!(draft.template, Template::Blank);
        assert!(!draft.is_public);
    }
}
