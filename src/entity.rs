//! Result records returned by the indexed extractions.
//!
//! Every record carries the extracted text exactly as it appears in the
//! input, plus [`Indices`] counted in characters (Unicode scalar values).

use serde::{Deserialize, Serialize};

/// A half-open `[start, end)` range of character offsets.
///
/// Serializes as a two-element sequence, `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(usize, usize)", into = "(usize, usize)")]
pub struct Indices {
    pub start: usize,
    pub end: usize,
}

impl Indices {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "start {} is past end {}", start, end);
        Self { start, end }
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn overlaps(&self, other: &Indices) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<(usize, usize)> for Indices {
    fn from((start, end): (usize, usize)) -> Self {
        Indices { start, end }
    }
}

impl From<Indices> for (usize, usize) {
    fn from(indices: Indices) -> Self {
        (indices.start, indices.end)
    }
}

/// The kind of entity a record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Hashtag,
    Cashtag,
    Url,
    Mention,
    /// A mention that may carry a `/list-slug` suffix.
    MentionOrList,
}

/// Common view over the indexed result records.
pub trait Entity: std::fmt::Debug {
    const KIND: EntityKind;

    /// The semantic text of the entity, without its marker. For list
    /// mentions this is the screen name followed by the slug.
    fn text(&self) -> String;

    fn indices(&self) -> Indices;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HashtagEntity {
    pub hashtag: String,
    pub indices: Indices,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CashtagEntity {
    pub cashtag: String,
    pub indices: Indices,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UrlEntity {
    pub url: String,
    pub indices: Indices,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MentionEntity {
    pub screen_name: String,
    pub indices: Indices,
}

/// A mention that may target a list (`@user/list`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MentionOrListEntity {
    pub screen_name: String,
    /// The `/slug` suffix including its slash, or empty for plain mentions.
    #[serde(default)]
    pub list_slug: String,
    pub indices: Indices,
}

impl MentionOrListEntity {
    pub fn is_list(&self) -> bool {
        !self.list_slug.is_empty()
    }
}

impl Entity for HashtagEntity {
    const KIND: EntityKind = EntityKind::Hashtag;

    fn text(&self) -> String {
        self.hashtag.clone()
    }

    fn indices(&self) -> Indices {
        self.indices
    }
}

impl Entity for CashtagEntity {
    const KIND: EntityKind = EntityKind::Cashtag;

    fn text(&self) -> String {
        self.cashtag.clone()
    }

    fn indices(&self) -> Indices {
        self.indices
    }
}

impl Entity for UrlEntity {
    const KIND: EntityKind = EntityKind::Url;

    fn text(&self) -> String {
        self.url.clone()
    }

    fn indices(&self) -> Indices {
        self.indices
    }
}

impl Entity for MentionEntity {
    const KIND: EntityKind = EntityKind::Mention;

    fn text(&self) -> String {
        self.screen_name.clone()
    }

    fn indices(&self) -> Indices {
        self.indices
    }
}

impl Entity for MentionOrListEntity {
    const KIND: EntityKind = EntityKind::MentionOrList;

    fn text(&self) -> String {
        format!("{}{}", self.screen_name, self.list_slug)
    }

    fn indices(&self) -> Indices {
        self.indices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indices_serialize_as_pair() {
        let entity = HashtagEntity {
            hashtag: "rust".to_string(),
            indices: Indices::new(6, 11),
        };
        let json = serde_json::to_string(&entity).unwrap();
        assert_eq!(json, r#"{"hashtag":"rust","indices":[6,11]}"#);

        let back: HashtagEntity = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entity);
    }

    #[test]
    fn test_list_slug_defaults_to_empty() {
        let entity: MentionOrListEntity =
            serde_json::from_str(r#"{"screen_name":"user","indices":[0,5]}"#).unwrap();
        assert_eq!(entity.list_slug, "");
        assert!(!entity.is_list());
    }

    #[test]
    fn test_overlaps() {
        let a = Indices::new(0, 5);
        assert!(a.overlaps(&Indices::new(4, 6)));
        assert!(!a.overlaps(&Indices::new(5, 9)));
        assert!(!Indices::new(5, 9).overlaps(&a));
    }

    #[test]
    fn test_list_entity_text_includes_slug() {
        let entity = MentionOrListEntity {
            screen_name: "user".to_string(),
            list_slug: "/friends".to_string(),
            indices: Indices::new(0, 13),
        };
        assert_eq!(entity.text(), "user/friends");
        assert_eq!(entity.indices().len(), 13);
    }
}
