use crate::build_planning::domain::ImageReference;
use crate::ports::outbound::FragmentDocument;
use crate::shared::error::BuildHelperError;
use crate::shared::Result;
use serde::Deserialize;
use serde_yaml_ng::Value;

/// FragmentScanner service extracting image references from compose fragments
///
/// Fragments without a `services` section are skipped; not every fragment
/// declares services. Services without an `image` key are skipped too.
pub struct FragmentScanner;

impl FragmentScanner {
    /// Extracts the images of every fragment, preserving fragment order
    pub fn scan(fragments: &[FragmentDocument]) -> Result<Vec<ImageReference>> {
        let mut images = Vec::new();
        for fragment in fragments {
            images.extend(Self::extract_images(fragment)?);
        }
        Ok(images)
    }

    /// Extracts the images declared by one fragment, tagged with its path
    pub fn extract_images(fragment: &FragmentDocument) -> Result<Vec<ImageReference>> {
        let parse_error = |details: String| BuildHelperError::FragmentParseError {
            path: fragment.path.clone(),
            details,
        };

        // Only the first document of a multi-document stream describes services
        let root = match serde_yaml_ng::Deserializer::from_str(&fragment.content).next() {
            Some(document) => Value::deserialize(document).map_err(|e| parse_error(e.to_string()))?,
            None => Value::Null,
        };

        let root = match root {
            Value::Null => return Ok(Vec::new()),
            Value::Mapping(mapping) => mapping,
            _ => return Err(parse_error("document root is not a mapping".to_string()).into()),
        };

        let services = match root.get("services") {
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Mapping(services)) => services,
            Some(_) => {
                return Err(parse_error("'services' is not a mapping".to_string()).into());
            }
        };

        let images = services
            .values()
            .filter_map(|service| service.get("image"))
            .filter_map(Self::scalar_to_string)
            .map(|raw| ImageReference::parse(&raw).with_source(fragment.path.clone()))
            .collect();

        Ok(images)
    }

    /// `image: 5` is a number in YAML; it still names an image
    fn scalar_to_string(value: &Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}
