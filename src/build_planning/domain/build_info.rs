use super::{Architecture, ImageReference, LinkCheck};

/// BuildInfo - resolved build recipe for one container image
///
/// Holds where the image's sources live (repository and git ref) and which
/// Dockerfile builds it on each architecture. Created once by the resolver
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    image: ImageReference,
    git_repository: String,
    git_ref: String,
    dockerfile_amd64: Option<String>,
    dockerfile_arm32v7: Option<String>,
    dockerfile_arm64v8: Option<String>,
    officially_supported: bool,
    docker_hub_url: String,
}

impl BuildInfo {
    pub fn new(
        image: ImageReference,
        git_repository: impl Into<String>,
        git_ref: impl Into<String>,
    ) -> Self {
        let docker_hub_url = image.docker_hub_url();
        Self {
            image,
            git_repository: git_repository.into(),
            git_ref: git_ref.into(),
            dockerfile_amd64: None,
            dockerfile_arm32v7: None,
            dockerfile_arm64v8: None,
            officially_supported: false,
            docker_hub_url,
        }
    }

    pub fn with_dockerfile(mut self, architecture: Architecture, path: impl Into<String>) -> Self {
        let slot = match architecture {
            Architecture::Amd64 => &mut self.dockerfile_amd64,
            Architecture::Arm32v7 => &mut self.dockerfile_arm32v7,
            Architecture::Arm64v8 => &mut self.dockerfile_arm64v8,
        };
        *slot = Some(path.into());
        self
    }

    pub fn with_official_support(mut self, officially_supported: bool) -> Self {
        self.officially_supported = officially_supported;
        self
    }

    pub fn image(&self) -> &ImageReference {
        &self.image
    }

    pub fn git_repository(&self) -> &str {
        &self.git_repository
    }

    pub fn git_ref(&self) -> &str {
        &self.git_ref
    }

    pub fn dockerfile(&self, architecture: Architecture) -> Option<&str> {
        match architecture {
            Architecture::Amd64 => self.dockerfile_amd64.as_deref(),
            Architecture::Arm32v7 => self.dockerfile_arm32v7.as_deref(),
            Architecture::Arm64v8 => self.dockerfile_arm64v8.as_deref(),
        }
    }

    pub fn is_officially_supported(&self) -> bool {
        self.officially_supported
    }

    pub fn docker_hub_url(&self) -> &str {
        &self.docker_hub_url
    }

    /// True when the table knows the image but no Dockerfile for any architecture
    pub fn has_no_dockerfile(&self) -> bool {
        Architecture::ALL
            .iter()
            .all(|arch| self.dockerfile(*arch).is_none())
    }

    /// Raw-content URL of a repository file, used for reachability checks
    pub fn raw_link_of(&self, path: &str) -> String {
        self.repository_link("raw", path)
    }

    /// Browsable URL of a repository file, used in script comments and docs
    pub fn github_link_of(&self, path: &str) -> String {
        self.repository_link("blob", path)
    }

    fn repository_link(&self, kind: &str, path: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.git_repository.trim_end_matches('/'),
            kind,
            encode_segments(&self.git_ref),
            encode_segments(path)
        )
    }

    /// One check per declared Dockerfile path, in architecture order
    pub fn link_checks(&self) -> Vec<LinkCheck> {
        Architecture::ALL
            .iter()
            .filter_map(|arch| {
                self.dockerfile(*arch).map(|path| {
                    LinkCheck::new(
                        self.image.to_string(),
                        *arch,
                        path.to_string(),
                        self.raw_link_of(path),
                    )
                })
            })
            .collect()
    }
}

/// Percent-encodes each `/`-separated segment, keeping the separators
fn encode_segments(value: &str) -> String {
    value
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn btcpayserver() -> BuildInfo {
        BuildInfo::new(
            ImageReference::parse("btcpayserver/btcpayserver:1.2.3"),
            "https://github.com/btcpayserver/btcpayserver",
            "v1.2.3",
        )
        .with_dockerfile(Architecture::Amd64, "amd64.Dockerfile")
        .with_dockerfile(Architecture::Arm32v7, "arm32v7.Dockerfile")
        .with_dockerfile(Architecture::Arm64v8, "arm64v8.Dockerfile")
        .with_official_support(true)
    }

    #[test]
    fn test_accessors() {
        let info = btcpayserver();
        assert_eq!(info.git_ref(), "v1.2.3");
        assert_eq!(info.dockerfile(Architecture::Arm64v8), Some("arm64v8.Dockerfile"));
        assert!(info.is_officially_supported());
        assert_eq!(
            info.docker_hub_url(),
            "https://hub.docker.com/r/btcpayserver/btcpayserver"
        );
        assert!(!info.has_no_dockerfile());
    }

    #[test]
    fn test_raw_and_github_links() {
        let info = btcpayserver();
        assert_eq!(
            info.raw_link_of("amd64.Dockerfile"),
            "https://github.com/btcpayserver/btcpayserver/raw/v1.2.3/amd64.Dockerfile"
        );
        assert_eq!(
            info.github_link_of("amd64.Dockerfile"),
            "https://github.com/btcpayserver/btcpayserver/blob/v1.2.3/amd64.Dockerfile"
        );
    }

    #[test]
    fn test_links_keep_slashes_in_ref_and_path() {
        let info = BuildInfo::new(
            ImageReference::parse("btcpayserver/bitcoin:0.18.0-1"),
            "https://github.com/btcpayserver/dockerfile-deps",
            "Bitcoin/0.18.0-1",
        );
        assert_eq!(
            info.raw_link_of("Bitcoin/0.18.0/linuxamd64.Dockerfile"),
            "https://github.com/btcpayserver/dockerfile-deps/raw/Bitcoin/0.18.0-1/Bitcoin/0.18.0/linuxamd64.Dockerfile"
        );
    }

    #[test]
    fn test_link_checks_only_for_declared_paths() {
        let info = BuildInfo::new(
            ImageReference::parse("lukechilds/electrumx:v1.8.7"),
            "https://github.com/lukechilds/docker-electrumx",
            "master",
        )
        .with_dockerfile(Architecture::Amd64, "Dockerfile");

        let checks = info.link_checks();
        assert_eq!(checks.len(), 1);
        assert_eq!(checks[0].architecture(), Architecture::Amd64);
        assert_eq!(checks[0].image(), "lukechilds/electrumx:v1.8.7");
        assert_eq!(
            checks[0].url(),
            "https://github.com/lukechilds/docker-electrumx/raw/master/Dockerfile"
        );
    }

    #[test]
    fn test_has_no_dockerfile() {
        let info = BuildInfo::new(ImageReference::parse("x/y:1"), "https://github.com/x/y", "v1");
        assert!(info.has_no_dockerfile());
        assert!(info.link_checks().is_empty());
    }
}
