mod feed_parser;
mod metadata_generator;
mod record_filter;
mod record_normalizer;
mod summary_aggregator;

pub use feed_parser::FeedParser;
pub use metadata_generator::MetadataGenerator;
pub use record_filter::RecordFilter;
pub use record_normalizer::RecordNormalizer;
pub use summary_aggregator::SummaryAggregator;
