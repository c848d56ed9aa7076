#![doc(
    html_logo_url = "https://raw.githubusercontent.com/storyscript/layered-nlp/main/assets/layered-nlp.svg",
    issue_tracker_base_url = "https://github.com/storyscript/layered-nlp/issues/"
)]

//! Entity extraction for tweets.
//!
//! Finds hashtags, cashtags, URLs, @-mentions and the reply target of a short
//! text, and reports where each one sits. Positions are counted in characters
//! (Unicode scalar values), never in bytes, so `Grüße @gulcin` reports the
//! mention at `[6, 13)` even though the `@` is the eighth byte.
//!
//! ## Usage
//!
//! ```
//! use tweet_entities::Extractor;
//!
//! let extractor = Extractor::new("RT @rt_user: $AAPL is up http://example.com #stocks");
//!
//! assert_eq!(extractor.mentioned_usernames(), vec!["rt_user"]);
//! assert_eq!(extractor.cashtags(), vec!["AAPL"]);
//! assert_eq!(extractor.urls(), vec!["http://example.com"]);
//! assert_eq!(extractor.hashtags(), vec!["stocks"]);
//! assert_eq!(extractor.replied_username(), None);
//! ```
//!
//! ## Architecture
//!
//! - [`rules`]: the character class vocabulary and the compiled pattern for
//!   each entity type, built once and shared.
//! - [`Extractor`]: scans the text with one rule per operation, filters
//!   ambiguous mentions and converts byte positions to character offsets.
//! - [`entity`]: the serializable result records.
//! - [`EntityDisplay`]: draws entities under the text, mostly for tests.

mod display;
pub mod entity;
mod extractor;
mod offsets;
pub mod rules;
mod scan;

pub use display::EntityDisplay;
pub use entity::{
    CashtagEntity, Entity, EntityKind, HashtagEntity, Indices, MentionEntity,
    MentionOrListEntity, UrlEntity,
};
pub use extractor::{extract, Extraction, Extractor};
