/// Network adapters for fetching the evidence feed over HTTP
mod http_feed_client;

pub use http_feed_client::HttpFeedClient;
