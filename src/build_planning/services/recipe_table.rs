//! The hand-maintained resolution table.
//!
//! Keys are matched exactly, first as `user/name` and then as `name`, so most
//! entries are keyed by the bare image name. New images are added here as data.

use super::recipe::{fixed, from_tag, Recipe, RecipeTable};
use crate::build_planning::policies::TagTransform;

const DOCKERFILE_DEPS: &str = "https://github.com/btcpayserver/dockerfile-deps";
const CHEKAZ_DOCKER: &str = "https://github.com/ChekaZ/docker";

/// Builds the table of every image the deployment is known to use
pub fn default_recipes() -> RecipeTable {
    let mut table = RecipeTable::new();

    // Bootstrap images
    table.insert(
        "docker-compose-builder",
        Recipe::new(
            "https://github.com/btcpayserver/docker-compose-builder",
            from_tag(TagTransform::v_prefixed),
        )
        .multi_arch(
            fixed("linuxamd64.Dockerfile"),
            fixed("linuxarm32v7.Dockerfile"),
            fixed("linuxarm64v8.Dockerfile"),
        )
        .supported(),
    );
    table.insert(
        "docker-compose-generator",
        Recipe::new(
            "https://github.com/btcpayserver/btcpayserver-docker",
            fixed("dcg-latest"),
        )
        .multi_arch(
            fixed("docker-compose-generator/linuxamd64.Dockerfile"),
            fixed("docker-compose-generator/linuxarm32v7.Dockerfile"),
            fixed("docker-compose-generator/linuxarm64v8.Dockerfile"),
        )
        .supported(),
    );

    // btcpayserver/dockerfile-deps: one directory per upstream version
    table.insert(
        "bitcoin",
        Recipe::new(DOCKERFILE_DEPS, from_tag(|tag| format!("Bitcoin/{}", tag)))
            .multi_arch(
                from_tag(|tag| {
                    format!("Bitcoin/{}/linuxamd64.Dockerfile", TagTransform::no_revision(tag))
                }),
                from_tag(|tag| {
                    format!("Bitcoin/{}/linuxarm32v7.Dockerfile", TagTransform::no_revision(tag))
                }),
                from_tag(|tag| {
                    format!("Bitcoin/{}/linuxarm64v8.Dockerfile", TagTransform::no_revision(tag))
                }),
            )
            .supported(),
    );
    table.insert(
        "elements",
        Recipe::new(DOCKERFILE_DEPS, from_tag(|tag| format!("Elements/{}", tag))).multi_arch(
            from_tag(|tag| {
                format!("Elements/{}/linuxamd64.Dockerfile", TagTransform::no_revision(tag))
            }),
            from_tag(|tag| {
                format!("Elements/{}/linuxarm32v7.Dockerfile", TagTransform::no_revision(tag))
            }),
            from_tag(|tag| {
                format!("Elements/{}/linuxarm64v8.Dockerfile", TagTransform::no_revision(tag))
            }),
        ),
    );
    table.insert(
        "eps",
        Recipe::new(DOCKERFILE_DEPS, from_tag(|tag| format!("EPS/{}", tag)))
            .multi_arch(
                from_tag(|tag| format!("EPS/{}/linuxamd64.Dockerfile", TagTransform::no_revision(tag))),
                from_tag(|tag| {
                    format!("EPS/{}/linuxarm32v7.Dockerfile", TagTransform::no_revision(tag))
                }),
                from_tag(|tag| {
                    format!("EPS/{}/linuxarm64v8.Dockerfile", TagTransform::no_revision(tag))
                }),
            )
            .supported(),
    );
    table.insert(
        "litecoin",
        Recipe::new(DOCKERFILE_DEPS, from_tag(|tag| format!("Litecoin/{}", tag)))
            .amd64(from_tag(|tag| {
                format!("Litecoin/{}/linuxamd64.Dockerfile", TagTransform::no_revision(tag))
            }))
            .arm32v7(from_tag(|tag| {
                format!("Litecoin/{}/linuxarm32v7.Dockerfile", TagTransform::no_revision(tag))
            })),
    );
    table.insert(
        "tor",
        Recipe::new(DOCKERFILE_DEPS, from_tag(|tag| format!("Tor/{}", tag)))
            .multi_arch(
                from_tag(|tag| format!("Tor/{}/linuxamd64.Dockerfile", tag)),
                from_tag(|tag| format!("Tor/{}/linuxarm32v7.Dockerfile", tag)),
                from_tag(|tag| format!("Tor/{}/linuxarm64v8.Dockerfile", tag)),
            )
            .supported(),
    );
    table.insert(
        "dash",
        Recipe::new(DOCKERFILE_DEPS, from_tag(|tag| format!("Dash/{}", tag))).multi_arch(
            from_tag(|tag| format!("Dash/{}/linuxamd64.Dockerfile", tag)),
            from_tag(|tag| format!("Dash/{}/linuxarm32v7.Dockerfile", tag)),
            from_tag(|tag| format!("Dash/{}/linuxarm64v8.Dockerfile", tag)),
        ),
    );
    table.insert(
        "argoneum",
        Recipe::new(DOCKERFILE_DEPS, from_tag(|tag| format!("Argoneum/{}", tag))).multi_arch(
            from_tag(|tag| format!("Argoneum/{}/linuxamd64.Dockerfile", tag)),
            from_tag(|tag| format!("Argoneum/{}/linuxarm32v7.Dockerfile", tag)),
            from_tag(|tag| format!("Argoneum/{}/linuxarm64v8.Dockerfile", tag)),
        ),
    );

    // BTCPay Server stack
    table.insert(
        "btcpayserver",
        Recipe::new(
            "https://github.com/btcpayserver/btcpayserver",
            from_tag(TagTransform::v_prefixed),
        )
        .multi_arch(
            fixed("amd64.Dockerfile"),
            fixed("arm32v7.Dockerfile"),
            fixed("arm64v8.Dockerfile"),
        )
        .supported(),
    );
    table.insert(
        "nbxplorer",
        Recipe::new(
            "https://github.com/dgarage/nbxplorer",
            from_tag(TagTransform::v_prefixed),
        )
        .multi_arch(
            fixed("Dockerfile.linuxamd64"),
            fixed("Dockerfile.linuxarm32v7"),
            fixed("Dockerfile.linuxarm64v8"),
        )
        .supported(),
    );
    table.insert(
        "btctransmuter",
        Recipe::new(
            "https://github.com/btcpayserver/btctransmuter",
            from_tag(TagTransform::v_prefixed),
        )
        .multi_arch(
            fixed("Dockerfiles/amd64.Dockerfile"),
            fixed("Dockerfiles/arm32v7.Dockerfile"),
            fixed("Dockerfiles/arm64v8.Dockerfile"),
        )
        .supported(),
    );
    table.insert(
        "btcpayserver-configurator",
        Recipe::new(
            "https://github.com/btcpayserver/btcpayserver-configurator",
            from_tag(|tag| TagTransform::v_prefixed(TagTransform::no_revision(tag))),
        )
        .multi_arch(
            fixed("Dockerfiles/amd64.Dockerfile"),
            fixed("Dockerfiles/arm32v7.Dockerfile"),
            fixed("Dockerfiles/arm64v8.Dockerfile"),
        )
        .supported(),
    );
    table.insert(
        "docker-woocommerce",
        Recipe::new(
            "https://github.com/btcpayserver/docker-woocommerce",
            from_tag(TagTransform::v_prefixed),
        )
        .amd64(fixed("Dockerfile")),
    );

    // Lightning implementations and tooling
    table.insert(
        "lnd",
        Recipe::new(
            "https://github.com/btcpayserver/lnd",
            from_tag(|tag| format!("basedon-{}", tag)),
        )
        .multi_arch(
            fixed("linuxamd64.Dockerfile"),
            fixed("linuxarm32v7.Dockerfile"),
            fixed("linuxarm64v8.Dockerfile"),
        )
        .supported(),
    );
    table.insert(
        "groestlcoin/lnd",
        Recipe::new("https://github.com/Groestlcoin/lnd", from_tag(|tag| tag.to_string()))
            .amd64(fixed("Dockerfile")),
    );
    table.insert(
        "btglnd",
        Recipe::new("https://github.com/vutov/lnd", fixed("master")).amd64(fixed("Dockerfile")),
    );
    table.insert(
        "lightning",
        Recipe::new(
            "https://github.com/btcpayserver/lightning",
            from_tag(|tag| format!("basedon-{}", tag)),
        )
        .multi_arch(
            fixed("Dockerfile"),
            fixed("contrib/linuxarm32v7.Dockerfile"),
            fixed("contrib/linuxarm64v8.Dockerfile"),
        )
        .supported(),
    );
    table.insert(
        "groestlcoin/lightning",
        Recipe::new(
            "https://github.com/Groestlcoin/lightning",
            from_tag(|tag| tag.to_string()),
        )
        .amd64(fixed("Dockerfile")),
    );
    table.insert(
        "lightning-charge",
        Recipe::new(
            "https://github.com/ElementsProject/lightning-charge",
            from_tag(|tag| TagTransform::v_prefixed(&TagTransform::strip_suffix(tag, "-standalone"))),
        )
        .multi_arch(
            fixed("Dockerfile"),
            fixed("arm32v7.Dockerfile"),
            fixed("arm64v8.Dockerfile"),
        )
        .supported(),
    );
    table.insert(
        "groestlcoin-lightning-charge",
        Recipe::new(
            "https://github.com/Groestlcoin/groestlcoin-lightning-charge",
            from_tag(|tag| TagTransform::v_prefixed(TagTransform::strip_prefix(tag, "version-"))),
        )
        .amd64(fixed("Dockerfile")),
    );
    table.insert(
        "groestlcoin-spark",
        Recipe::new(
            "https://github.com/Groestlcoin/groestlcoin-spark",
            from_tag(|tag| TagTransform::v_prefixed(TagTransform::strip_prefix(tag, "version-"))),
        )
        .amd64(fixed("Dockerfile")),
    );
    table.insert(
        "spark-wallet",
        Recipe::new(
            "https://github.com/shesek/spark-wallet",
            from_tag(|tag| TagTransform::v_prefixed(TagTransform::no_revision(tag))),
        )
        .multi_arch(
            fixed("Dockerfile"),
            fixed("arm32v7.Dockerfile"),
            fixed("arm64v8.Dockerfile"),
        )
        .supported(),
    );
    table.insert(
        "rtl",
        Recipe::new(
            "https://github.com/ShahanaFarooqui/RTL",
            from_tag(TagTransform::v_prefixed),
        )
        .multi_arch(
            fixed("Dockerfile"),
            fixed("Dockerfile.arm32v7"),
            fixed("Dockerfile.arm64v8"),
        )
        .supported(),
    );
    table.insert(
        "c-lightning-rest",
        Recipe::new(
            "https://github.com/Ride-The-Lightning/c-lightning-REST",
            from_tag(|tag| TagTransform::v_prefixed(TagTransform::no_revision(tag))),
        )
        .multi_arch(
            fixed("amd64.Dockerfile"),
            fixed("arm32v7.Dockerfile"),
            fixed("arm64v8.Dockerfile"),
        )
        .supported(),
    );
    table.insert(
        "thunderhub",
        Recipe::new(
            "https://github.com/apotdevin/thunderhub",
            from_tag(|tag| TagTransform::no_revision(tag).to_string()),
        )
        .amd64(fixed("Dockerfile")),
    );
    table.insert(
        "eclair",
        Recipe::new("https://github.com/ACINQ/eclair", from_tag(|tag| tag.to_string()))
            .amd64(fixed("Dockerfile")),
    );
    table.insert(
        "groestlcoin/eclair",
        Recipe::new(
            "https://github.com/Groestlcoin/eclair",
            from_tag(|tag| tag.to_string()),
        )
        .amd64(fixed("Dockerfile")),
    );

    // Reverse proxy
    table.insert(
        "nginx",
        Recipe::new(
            "https://github.com/nginxinc/docker-nginx",
            from_tag(|tag| tag.to_string()),
        )
        .multi_arch(
            fixed("stable/stretch/Dockerfile"),
            fixed("stable/stretch/Dockerfile"),
            fixed("stable/stretch/Dockerfile"),
        )
        .supported(),
    );
    table.insert(
        "docker-gen",
        Recipe::new(
            "https://github.com/btcpayserver/docker-gen",
            from_tag(TagTransform::v_prefixed),
        )
        .multi_arch(
            fixed("linuxamd64.Dockerfile"),
            fixed("linuxarm32v7.Dockerfile"),
            fixed("linuxarm64v8.Dockerfile"),
        )
        .supported(),
    );
    table.insert(
        "letsencrypt-nginx-proxy-companion",
        Recipe::new(
            "https://github.com/btcpayserver/docker-letsencrypt-nginx-proxy-companion",
            from_tag(TagTransform::v_prefixed),
        )
        .multi_arch(
            fixed("linuxamd64.Dockerfile"),
            fixed("linuxarm32v7.Dockerfile"),
            fixed("linuxarm64v8.Dockerfile"),
        )
        .supported(),
    );
    table.insert(
        "traefik",
        Recipe::new(
            "https://github.com/containous/traefik-library-image",
            fixed("master"),
        )
        .amd64(fixed("scratch/Dockerfile")),
    );

    // Databases and caches, pinned to a known-good commit where the tag is ignored
    table.insert(
        "postgres",
        Recipe::new(
            "https://github.com/docker-library/postgres",
            fixed("b7cb3c6eacea93be2259381033be3cc435649369"),
        )
        .multi_arch(fixed("9.6/Dockerfile"), fixed("9.6/Dockerfile"), fixed("9.6/Dockerfile"))
        .supported(),
    );
    table.insert(
        "mariadb",
        Recipe::new("https://github.com/docker-library/mariadb", fixed("master"))
            .amd64(from_tag(|tag| format!("{}/Dockerfile", tag))),
    );
    table.insert(
        "redis",
        Recipe::new(
            "https://github.com/docker-library/redis",
            fixed("f1a8498333ae3ab340b5b39fbac1d7e1dc0d628c"),
        )
        .amd64(fixed("5.0/Dockerfile")),
    );

    // Applications
    table.insert(
        "pihole",
        Recipe::new(
            "https://github.com/pi-hole/docker-pi-hole",
            from_tag(|tag| tag.to_string()),
        )
        .multi_arch(
            fixed("Dockerfile_amd64"),
            fixed("Dockerfile_armhf"),
            fixed("Dockerfile_arm64"),
        )
        .supported(),
    );
    table.insert(
        "librepatron",
        Recipe::new(
            "https://github.com/JeffVandrewJr/patron",
            from_tag(TagTransform::v_prefixed),
        )
        .amd64(fixed("Dockerfile")),
    );
    table.insert(
        "isso",
        Recipe::new(
            "https://github.com/JeffVandrewJr/isso",
            from_tag(|tag| format!("patron.{}", TagTransform::strip_prefix(tag, "atron."))),
        )
        .amd64(fixed("Dockerfile")),
    );
    table.insert(
        "btcqbo",
        Recipe::new(
            "https://github.com/JeffVandrewJr/btcqbo",
            from_tag(TagTransform::v_prefixed),
        )
        .amd64(fixed("Dockerfile")),
    );
    table.insert(
        "electrumx",
        Recipe::new("https://github.com/lukechilds/docker-electrumx", fixed("master"))
            .amd64(fixed("Dockerfile")),
    );
    table.insert(
        "monero",
        Recipe::new("https://github.com/Kukks/monero-docker", fixed("x86_64"))
            .amd64(fixed("Dockerfile")),
    );

    // Community altcoin images
    table.insert(
        "docker-bitcoingold",
        Recipe::new("https://github.com/Vutov/docker-bitcoin", fixed("master"))
            .amd64(from_tag(|tag| format!("bitcoingold/{}/Dockerfile", tag))),
    );
    table.insert(
        "docker-bitcoinplus",
        Recipe::new(CHEKAZ_DOCKER, fixed("master"))
            .amd64(from_tag(|tag| format!("bitcoinplus/{}/Dockerfile", tag))),
    );
    table.insert(
        "docker-trezarcoin",
        Recipe::new(CHEKAZ_DOCKER, fixed("master")).amd64(fixed("trezarcoin/1.2.0/Dockerfile")),
    );
    table.insert(
        "docker-feathercoin",
        Recipe::new(CHEKAZ_DOCKER, fixed("master"))
            .amd64(from_tag(|tag| format!("feathercoin/{}/Dockerfile", tag))),
    );
    table.insert(
        "dogecoin",
        Recipe::new(
            "https://github.com/rockstardev/docker-bitcoin",
            fixed("feature/dogecoin"),
        )
        .amd64(from_tag(|tag| format!("dogecoin/{}/Dockerfile", tag))),
    );
    table.insert(
        "docker-bitcore",
        Recipe::new(
            "https://github.com/dalijolijo/btcpayserver-docker-bitcore",
            fixed("master"),
        )
        .amd64(fixed("btx-debian/Dockerfile")),
    );
    table.insert(
        "docker-groestlcoin",
        Recipe::new("https://github.com/NicolasDorier/docker-bitcoin", fixed("master"))
            .amd64(from_tag(|tag| format!("groestlcoin/{}/Dockerfile", tag))),
    );
    table.insert(
        "docker-viacoin",
        Recipe::new("https://github.com/viacoin/docker-viacoin", fixed("master"))
            .amd64(from_tag(|tag| format!("viacoin/{}/docker-viacoin", tag))),
    );
    table.insert(
        "docker-monacoin",
        Recipe::new("https://github.com/wakiyamap/docker-bitcoin", fixed("master"))
            .amd64(from_tag(|tag| format!("monacoin/{}/Dockerfile", tag))),
    );

    table
}
