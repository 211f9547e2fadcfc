mod feed_source_factory;
mod presenter_factory;
mod renderer_factory;

pub use feed_source_factory::{FeedLocation, FeedSourceFactory};
pub use presenter_factory::{PresenterFactory, PresenterType};
pub use renderer_factory::RendererFactory;
