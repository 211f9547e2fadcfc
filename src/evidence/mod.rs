/// Evidence domain - records, feed model, and pure transformation services
///
/// Nothing in this layer performs I/O; feeds arrive as text through the
/// `FeedSource` port and leave as read models through the renderers.
pub mod domain;
pub mod services;
