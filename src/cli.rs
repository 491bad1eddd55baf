use clap::Parser;
use dockerfile_build_helper::shared::error::ExitCode;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process;

/// Single-dash long flag kept for compatibility with existing update scripts
const LEGACY_MARKDOWN_FLAG: &str = "-omd";

/// Generate a script building every image of the docker-compose fragments from source
#[derive(Parser, Debug)]
#[command(name = "dockerfile-build-helper")]
#[command(version)]
#[command(
    about = "Resolve docker-compose fragment images to their Dockerfiles and generate a build-all script",
    long_about = None
)]
pub struct Args {
    /// Output path of the generated build script [default: build-all.sh]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Markdown file whose image table should be regenerated (also accepted as -omd)
    #[arg(long = "markdown-output", visible_alias = "omd", value_name = "PATH")]
    pub markdown_output: Option<PathBuf>,

    /// Directory holding the docker-compose fragments
    /// [default: docker-compose-generator/docker-fragments next to the enclosing contrib directory]
    #[arg(short, long, value_name = "DIR")]
    pub fragments: Option<PathBuf>,

    /// Path to a config file [default: ./dockerfile-build-helper.config.yml when present]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Maximum number of Dockerfile link checks in flight [default: 32]
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub max_concurrent_checks: Option<u16>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::try_parse_from(normalize_args(std::env::args_os())).unwrap_or_else(|e| {
            let _ = e.print();
            process::exit(exit_code_for(&e).as_i32())
        })
    }
}

/// `--help` and `--version` surface as clap errors too; only those printed to stdout succeed
fn exit_code_for(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}

/// Rewrites `-omd` to `--omd`; clap would otherwise read it as `-o md`
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(text) if text == LEGACY_MARKDOWN_FLAG => OsString::from("--omd"),
            Some(text) if text.starts_with("-omd=") => OsString::from(format!("-{}", text)),
            _ => arg,
        })
        .collect()
}
