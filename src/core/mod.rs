// Core algorithm exports
pub mod experience;
pub mod filters;
pub mod matcher;
pub mod normalize;
pub mod scoring;

pub use experience::{experience_overlaps, parse_range, ExperienceRange};
pub use filters::{filter_by_threshold, rank, take_top, AUTO_MATCH_LIMIT, DEFAULT_MIN_SCORE};
pub use matcher::Matcher;
pub use normalize::{canonical, classify, LabelMatch};
pub use scoring::{score_pair, FieldScore, MAX_SCORE};
