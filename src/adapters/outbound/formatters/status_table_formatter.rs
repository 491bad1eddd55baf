use crate::application::read_models::{ImageRowView, StatusTableReadModel};
use crate::build_planning::domain::Architecture;
use crate::ports::outbound::DocumentFormatter;
use crate::shared::error::BuildHelperError;
use crate::shared::Result;
use std::path::Path;

/// Start of the header line that locates the table
const TABLE_MARKER: &str = "| Image |";

const TABLE_HEADER: &str = "| Image | Version | x64 | arm32v7 | arm64v8 | links |";

const TABLE_SEPARATOR: &str = "|---|---|:-:|:-:|:-:|:-:|";

/// StatusTableFormatter adapter patching the image status table of a Markdown document
///
/// The table is the line starting with `| Image |` plus every following line
/// starting with `|`. Only that region is replaced.
pub struct StatusTableFormatter;

impl StatusTableFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Byte range of the table region, or `None` without a marker at a line start
    fn locate_table(document: &str) -> Option<(usize, usize)> {
        let start = document
            .match_indices(TABLE_MARKER)
            .map(|(index, _)| index)
            .find(|&index| index == 0 || document.as_bytes()[index - 1] == b'\n')?;

        let mut end = start;
        for (i, line) in document[start..].split_inclusive('\n').enumerate() {
            if i > 0 && !line.starts_with('|') {
                break;
            }
            end += line.len();
        }
        Some((start, end))
    }

    fn render_table(output: &mut String, model: &StatusTableReadModel, newline: &str) {
        output.push_str(TABLE_HEADER);
        output.push_str(newline);
        output.push_str(TABLE_SEPARATOR);
        output.push_str(newline);
        for row in model.rows() {
            Self::render_row(output, row);
            output.push_str(newline);
        }
    }

    fn render_row(output: &mut String, row: &ImageRowView) {
        output.push_str(&format!("| {} | {} |", row.image, row.tag));
        for arch in Architecture::ALL {
            match row.dockerfile_link(arch) {
                Some(link) => output.push_str(&format!(" [✔️]({}) |", link)),
                None => output.push_str(" ❌ |"),
            }
        }
        output.push_str(&format!(
            " [Github]({}) - [DockerHub]({}) |",
            row.git_repository, row.docker_hub_url
        ));
    }
}

impl Default for StatusTableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentFormatter for StatusTableFormatter {
    fn patch(
        &self,
        document_path: &Path,
        document: &str,
        model: &StatusTableReadModel,
    ) -> Result<String> {
        let (start, end) =
            Self::locate_table(document).ok_or_else(|| BuildHelperError::DocumentFormatError {
                path: document_path.to_path_buf(),
                marker: TABLE_MARKER.to_string(),
            })?;

        // Keep the document's line ending convention inside the table
        let newline = match document[start..].split_inclusive('\n').next() {
            Some(header) if header.ends_with("\r\n") => "\r\n",
            _ => "\n",
        };

        let mut output = String::with_capacity(document.len());
        output.push_str(&document[..start]);
        Self::render_table(&mut output, model, newline);
        output.push_str(&document[end..]);
        Ok(output)
    }
}
