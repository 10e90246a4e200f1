pub use tikgrab_core::core::events;

pub mod direct_downloader;
pub mod filename;
pub mod http_client;
pub mod media_buffer;
pub mod resolver;
pub mod url_parser;
