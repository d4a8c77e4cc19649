//! Value objects - immutable types that represent domain concepts

mod wildcard;

pub use wildcard::WildcardPattern;
