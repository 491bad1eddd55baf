use std::fmt;
use std::path::{Path, PathBuf};

/// Tag assumed when an image reference does not carry one
pub const DEFAULT_TAG: &str = "latest";

/// ImageReference value object: `[user/]name[:tag]` plus the fragment it came from
///
/// Parsing is deliberately permissive: any string produces a reference, even
/// a degenerate one. Registry hosts with a port are not supported since the
/// tag is split on the last `:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    user: String,
    name: String,
    tag: String,
    source: Option<PathBuf>,
}

impl ImageReference {
    pub fn new(user: impl Into<String>, name: impl Into<String>, tag: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            name: name.into(),
            tag: tag.into(),
            source: None,
        }
    }

    /// Parses `[user/]name[:tag]`
    pub fn parse(raw: &str) -> Self {
        let (rest, tag) = match raw.rsplit_once(':') {
            Some((rest, tag)) if !tag.is_empty() => (rest, tag),
            Some((rest, _)) => (rest, DEFAULT_TAG),
            None => (raw, DEFAULT_TAG),
        };
        let (user, name) = rest.split_once('/').unwrap_or(("", rest));
        Self::new(user, name, tag)
    }

    /// Attaches the fragment file this reference was declared in
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// `user/name`, or just `name` for images without a user
    pub fn name_without_tag(&self) -> String {
        if self.user.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.user, self.name)
        }
    }

    /// Deduplication key; the tag is not part of an image's identity
    pub fn identity(&self) -> (&str, &str) {
        (&self.user, &self.name)
    }

    /// Docker Hub page of the image; user-less images live under `_/`
    pub fn docker_hub_url(&self) -> String {
        if self.user.is_empty() {
            format!("https://hub.docker.com/_/{}", self.name)
        } else {
            format!("https://hub.docker.com/r/{}/{}", self.user, self.name)
        }
    }
}

impl fmt::Display for ImageReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.name_without_tag(), self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_reference() {
        let image = ImageReference::parse("btcpayserver/lnd:v0.5-beta");
        assert_eq!(image.user(), "btcpayserver");
        assert_eq!(image.name(), "lnd");
        assert_eq!(image.tag(), "v0.5-beta");
        assert!(image.source().is_none());
    }

    #[test]
    fn test_parse_without_tag_defaults_to_latest() {
        let image = ImageReference::parse("btcpayserver/docker-compose-generator");
        assert_eq!(image.name(), "docker-compose-generator");
        assert_eq!(image.tag(), "latest");
    }

    #[test]
    fn test_parse_without_user() {
        let image = ImageReference::parse("nginx:1.16");
        assert_eq!(image.user(), "");
        assert_eq!(image.name(), "nginx");
        assert_eq!(image.tag(), "1.16");
        assert_eq!(image.to_string(), "nginx:1.16");
    }

    #[test]
    fn test_parse_trailing_colon_defaults_to_latest() {
        let image = ImageReference::parse("redis:");
        assert_eq!(image.name(), "redis");
        assert_eq!(image.tag(), "latest");
    }

    #[test]
    fn test_parse_splits_tag_on_last_colon() {
        let image = ImageReference::parse("localhost:5000/app");
        assert_eq!(image.name(), "localhost");
        assert_eq!(image.tag(), "5000/app");
    }

    #[test]
    fn test_parse_splits_user_on_first_slash() {
        let image = ImageReference::parse("a/b/c:1");
        assert_eq!(image.user(), "a");
        assert_eq!(image.name(), "b/c");
    }

    #[test]
    fn test_parse_empty_string_is_degenerate_not_error() {
        let image = ImageReference::parse("");
        assert_eq!(image.name(), "");
        assert_eq!(image.tag(), "latest");
    }

    #[test]
    fn test_name_without_tag_round_trip() {
        for raw in ["btcpayserver/btcpayserver:1.2.3", "shesek/spark-wallet:0.2.9-standalone"] {
            let image = ImageReference::parse(raw);
            let expected = raw.rsplit_once(':').unwrap().0;
            assert_eq!(image.name_without_tag(), expected);
            assert_eq!(image.to_string(), raw);
        }
    }

    #[test]
    fn test_identity_ignores_tag() {
        let a = ImageReference::parse("btcpayserver/bitcoin:0.17.0");
        let b = ImageReference::parse("btcpayserver/bitcoin:0.18.0");
        assert_eq!(a.identity(), b.identity());
        assert_ne!(a, b);
    }

    #[test]
    fn test_with_source() {
        let image = ImageReference::parse("redis:5.0").with_source("fragments/redis.yml");
        assert_eq!(image.source(), Some(Path::new("fragments/redis.yml")));
    }

    #[test]
    fn test_docker_hub_url() {
        assert_eq!(
            ImageReference::parse("btcpayserver/lnd:1").docker_hub_url(),
            "https://hub.docker.com/r/btcpayserver/lnd"
        );
        assert_eq!(
            ImageReference::parse("postgres:9.6.5").docker_hub_url(),
            "https://hub.docker.com/_/postgres"
        );
    }
}
