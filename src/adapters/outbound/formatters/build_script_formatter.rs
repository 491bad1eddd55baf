use crate::build_planning::domain::{Architecture, BuildInfo};
use crate::ports::outbound::ScriptFormatter;
use crate::shared::Result;

/// Comment placed under the shebang of every generated script
const GENERATED_NOTICE: &str = "# This file is automatically generated by the DockerFileBuildHelper tool, run DockerFileBuildHelper/update-repo.sh to update it";

/// Four spaces per nesting level
const INDENT: &str = "    ";

/// Line-oriented writer with a nesting level, always emitting `\n`
#[derive(Default)]
struct ScriptWriter {
    output: String,
    level: usize,
}

impl ScriptWriter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.level {
            self.output.push_str(INDENT);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    fn blank(&mut self) {
        self.output.push('\n');
    }

    fn indent(&mut self) {
        self.level += 1;
    }

    fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }
}

/// BuildScriptFormatter adapter rendering the bash build-all script
///
/// Every block picks the amd64 Dockerfile by default and switches to the ARM
/// variant when `uname -m` matches. Images without an amd64 Dockerfile are
/// wrapped in a guard so hosts without a matching variant skip them.
pub struct BuildScriptFormatter;

impl BuildScriptFormatter {
    pub fn new() -> Self {
        Self
    }

    fn render_header(writer: &mut ScriptWriter) {
        writer.line("#!/bin/bash");
        writer.blank();
        writer.line(GENERATED_NOTICE);
        writer.line("set -e");
        writer.line("DOCKERFILE=\"\"");
        writer.blank();
        writer.blank();
    }

    fn render_build(writer: &mut ScriptWriter, info: &BuildInfo) {
        let name = info.image().name();
        writer.line(&format!("# Build {}", name));

        let might_be_unavailable = match info.dockerfile(Architecture::Amd64) {
            Some(path) => {
                writer.line(&format!("# {}", info.github_link_of(path)));
                writer.line(&format!("DOCKERFILE=\"{}\"", path));
                false
            }
            None => {
                writer.line("DOCKERFILE=\"\"");
                true
            }
        };

        for arch in [Architecture::Arm32v7, Architecture::Arm64v8] {
            let (Some(path), Some(machine)) = (info.dockerfile(arch), arch.host_machine()) else {
                continue;
            };
            writer.line(&format!("# {}", info.github_link_of(path)));
            writer.line(&format!(
                "[[ \"$(uname -m)\" == \"{}\" ]] && DOCKERFILE=\"{}\"",
                machine, path
            ));
        }

        if might_be_unavailable {
            writer.line("if [[ \"$DOCKERFILE\" ]]; then");
            writer.indent();
        }

        writer.line(&format!("echo \"Building {}\"", info.image()));
        writer.line(&format!("git clone {} {}", info.git_repository(), name));
        writer.line(&format!("cd {}", name));
        writer.line(&format!("git checkout {}", info.git_ref()));
        writer.line("cd \"$(dirname $DOCKERFILE)\"");
        writer.line(&format!(
            "docker build -f \"$(basename $DOCKERFILE)\" -t \"{}\" .",
            info.image()
        ));
        writer.line("cd - && cd ..");

        if might_be_unavailable {
            writer.dedent();
            writer.line("fi");
        }

        writer.blank();
        writer.blank();
    }
}

impl Default for BuildScriptFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptFormatter for BuildScriptFormatter {
    fn format(&self, builds: &[BuildInfo]) -> Result<String> {
        let mut writer = ScriptWriter::default();
        Self::render_header(&mut writer);
        for info in builds {
            Self::render_build(&mut writer, info);
        }
        Ok(writer.output)
    }
}
