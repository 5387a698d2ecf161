pub mod metadata_filter;
pub mod normalize;
