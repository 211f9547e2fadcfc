/// Filesystem adapters for file I/O operations
mod file_feed_reader;
mod file_writer;

pub use file_feed_reader::FileFeedReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
