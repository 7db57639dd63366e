// Career matching: static catalog, keyword scorer, ranker, and the async
// recommendation boundary handlers call into.

pub mod catalog;
pub mod handlers;
pub mod ranking;
pub mod recommender;
pub mod scoring;
