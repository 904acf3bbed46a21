pub mod filter_engine;
pub mod normalize;
pub mod stock_matcher;

// Re-export the engine surface so callers can use `matching::` directly.
pub use filter_engine::{filter_recipes, FilterSpec};
pub use normalize::{normalize, normalize_key};
pub use stock_matcher::{match_against_stock, MatchResult};
