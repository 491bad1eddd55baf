/// Network adapters for Dockerfile link checks
mod caching_link_checker;
mod http_link_checker;

pub use caching_link_checker::CachingLinkChecker;
pub use http_link_checker::HttpLinkChecker;
