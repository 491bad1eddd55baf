/// TagTransform policy: the rewrites recipes apply to an image tag
///
/// Upstream projects do not name their git refs after the published image
/// tags consistently, so recipes pick one or more of these rewrites to get
/// from a tag to a ref or a Dockerfile directory.
pub struct TagTransform;

impl TagTransform {
    /// Drops the packaging revision: everything from the first `-` on
    ///
    /// `"0.18.0-1"` becomes `"0.18.0"`; a tag without `-` is returned as is.
    pub fn no_revision(tag: &str) -> &str {
        tag.split('-').next().unwrap_or(tag)
    }

    /// Removes every occurrence of `suffix`, e.g. `-standalone`
    pub fn strip_suffix(tag: &str, suffix: &str) -> String {
        tag.replace(suffix, "")
    }

    /// Removes a leading literal such as `version-`; tags without it are kept
    pub fn strip_prefix<'a>(tag: &'a str, prefix: &str) -> &'a str {
        tag.strip_prefix(prefix).unwrap_or(tag)
    }

    /// Prefixes the tag with `v`, the most common release-tag convention
    pub fn v_prefixed(tag: &str) -> String {
        format!("v{}", tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_revision() {
        assert_eq!(TagTransform::no_revision("25.0-1"), "25.0");
        assert_eq!(TagTransform::no_revision("0.18.0"), "0.18.0");
        assert_eq!(TagTransform::no_revision("0.2.9-standalone-1"), "0.2.9");
        assert_eq!(TagTransform::no_revision(""), "");
    }

    #[test]
    fn test_strip_suffix() {
        assert_eq!(
            TagTransform::strip_suffix("0.4.5-standalone", "-standalone"),
            "0.4.5"
        );
        assert_eq!(TagTransform::strip_suffix("0.4.5", "-standalone"), "0.4.5");
    }

    #[test]
    fn test_strip_prefix() {
        assert_eq!(TagTransform::strip_prefix("version-0.3.1", "version-"), "0.3.1");
        assert_eq!(TagTransform::strip_prefix("atron.0.2", "atron."), "0.2");
        assert_eq!(TagTransform::strip_prefix("0.3.1", "version-"), "0.3.1");
    }

    #[test]
    fn test_v_prefixed() {
        assert_eq!(TagTransform::v_prefixed("1.2.3"), "v1.2.3");
    }
}
