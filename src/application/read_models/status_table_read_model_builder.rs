//! Builder for constructing StatusTableReadModel from verified builds

use super::status_table_read_model::{ImageRowView, StatusTableReadModel};
use crate::build_planning::domain::{Architecture, BuildInfo, VerificationReport};
use std::collections::HashSet;

/// Builder for constructing StatusTableReadModel from domain objects
pub struct StatusTableReadModelBuilder;

impl StatusTableReadModelBuilder {
    /// Builds the table rows
    ///
    /// The first build seen for a `(user, name)` pair wins, whatever its tag.
    /// Each group is stable-sorted by source fragment, so images that were not
    /// scanned from a fragment (the bootstrap pair) come first.
    pub fn build(builds: &[BuildInfo], report: &VerificationReport) -> StatusTableReadModel {
        let mut seen = HashSet::new();
        let unique: Vec<&BuildInfo> = builds
            .iter()
            .filter(|info| seen.insert(info.image().identity()))
            .collect();

        let (mut supported, mut community): (Vec<&BuildInfo>, Vec<&BuildInfo>) = unique
            .into_iter()
            .partition(|info| info.is_officially_supported());

        supported.sort_by(|a, b| a.image().source().cmp(&b.image().source()));
        community.sort_by(|a, b| a.image().source().cmp(&b.image().source()));

        StatusTableReadModel {
            supported: supported
                .into_iter()
                .map(|info| Self::build_row(info, report))
                .collect(),
            community: community
                .into_iter()
                .map(|info| Self::build_row(info, report))
                .collect(),
        }
    }

    fn build_row(info: &BuildInfo, report: &VerificationReport) -> ImageRowView {
        let dockerfile_links = Architecture::ALL.map(|arch| {
            info.dockerfile(arch)
                .filter(|path| report.is_reachable(&info.raw_link_of(path)))
                .map(|path| info.github_link_of(path))
        });

        ImageRowView {
            image: info.image().name_without_tag(),
            tag: info.image().tag().to_string(),
            dockerfile_links,
            git_repository: info.git_repository().to_string(),
            docker_hub_url: info.docker_hub_url().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_planning::domain::{ImageReference, LinkCheckResult, LinkOutcome};

    fn build(raw: &str, source: Option<&str>, supported: bool) -> BuildInfo {
        let mut image = ImageReference::parse(raw);
        if let Some(source) = source {
            image = image.with_source(source);
        }
        BuildInfo::new(image, "https://github.com/example/repo", "v1")
            .with_dockerfile(Architecture::Amd64, "Dockerfile")
            .with_official_support(supported)
    }

    fn all_reachable(builds: &[BuildInfo]) -> VerificationReport {
        VerificationReport::new(
            builds
                .iter()
                .flat_map(BuildInfo::link_checks)
                .map(|check| LinkCheckResult::new(check, LinkOutcome::Reachable))
                .collect(),
        )
    }

    #[test]
    fn test_supported_rows_come_first() {
        let builds = vec![
            build("someone/community:1", Some("a.yml"), false),
            build("btcpayserver/supported:1", Some("b.yml"), true),
        ];
        let model = StatusTableReadModelBuilder::build(&builds, &all_reachable(&builds));

        assert_eq!(model.supported.len(), 1);
        assert_eq!(model.community.len(), 1);
        let names: Vec<_> = model.rows().map(|row| row.image.as_str()).collect();
        assert_eq!(names, vec!["btcpayserver/supported", "someone/community"]);
    }

    #[test]
    fn test_dedup_first_seen_wins() {
        let builds = vec![
            build("btcpayserver/lnd:v0.7.1", Some("a.yml"), true),
            build("btcpayserver/lnd:v0.8.0", Some("b.yml"), true),
        ];
        let model = StatusTableReadModelBuilder::build(&builds, &all_reachable(&builds));

        assert_eq!(model.len(), 1);
        assert_eq!(model.supported[0].tag, "v0.7.1");
    }

    #[test]
    fn test_rows_sorted_by_source_with_bootstrap_first() {
        let builds = vec![
            build("x/zeta:1", Some("fragments/zeta.yml"), true),
            build("x/alpha:1", Some("fragments/alpha.yml"), true),
            build("btcpayserver/docker-compose-builder:1.24.1", None, true),
            build("x/beta:1", Some("fragments/alpha.yml"), true),
        ];
        let model = StatusTableReadModelBuilder::build(&builds, &all_reachable(&builds));

        let names: Vec<_> = model.rows().map(|row| row.image.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "btcpayserver/docker-compose-builder",
                "x/alpha",
                "x/beta",
                "x/zeta"
            ]
        );
    }

    #[test]
    fn test_links_only_for_declared_and_reachable_paths() {
        let info = build("btcpayserver/lnd:v1", None, true)
            .with_dockerfile(Architecture::Arm64v8, "arm64.Dockerfile");
        let builds = vec![info];
        let model = StatusTableReadModelBuilder::build(&builds, &all_reachable(&builds));
        let row = &model.supported[0];

        assert_eq!(
            row.dockerfile_link(Architecture::Amd64),
            Some("https://github.com/example/repo/blob/v1/Dockerfile")
        );
        assert_eq!(row.dockerfile_link(Architecture::Arm32v7), None);
        assert_eq!(
            row.dockerfile_link(Architecture::Arm64v8),
            Some("https://github.com/example/repo/blob/v1/arm64.Dockerfile")
        );
        assert_eq!(row.git_repository, "https://github.com/example/repo");
        assert_eq!(row.docker_hub_url, "https://hub.docker.com/r/btcpayserver/lnd");
    }

    #[test]
    fn test_unverified_path_has_no_link() {
        let builds = vec![build("x/y:1", None, false)];
        let model = StatusTableReadModelBuilder::build(&builds, &VerificationReport::new(vec![]));
        assert_eq!(model.community[0].dockerfile_link(Architecture::Amd64), None);
    }
}
