pub mod corpus;
pub mod matcher;
pub mod normalize;
pub mod rank;

pub use corpus::{Corpus, Problem};
pub use matcher::{MatchField, MatchHit, BODY_SCORE, TITLE_SCORE};
pub use normalize::{normalize, NormalizedQuery, QueryRejection, MIN_QUERY_CHARS};
pub use rank::rank;
