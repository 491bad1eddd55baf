mod cli;

use cli::Args;
use dockerfile_build_helper::adapters::outbound::console::StderrProgressReporter;
use dockerfile_build_helper::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use dockerfile_build_helper::adapters::outbound::formatters::{
    BuildScriptFormatter, StatusTableFormatter,
};
use dockerfile_build_helper::adapters::outbound::network::{CachingLinkChecker, HttpLinkChecker};
use dockerfile_build_helper::application::dto::{
    GenerateRequest, GenerateResponse, DEFAULT_MAX_CONCURRENT_CHECKS,
};
use dockerfile_build_helper::application::read_models::StatusTableReadModelBuilder;
use dockerfile_build_helper::application::use_cases::GenerateBuildArtifactsUseCase;
use dockerfile_build_helper::config::{
    discover_config, discover_fragments_dir, load_config_from_path, ConfigFile,
};
use dockerfile_build_helper::ports::outbound::{
    DocumentFormatter, DocumentReader, GeneratedArtifact, OutputPresenter, ScriptFormatter,
};
use dockerfile_build_helper::shared::error::ExitCode;
use dockerfile_build_helper::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

const DEFAULT_SCRIPT_OUTPUT: &str = "build-all.sh";

/// Effective settings after merging command line, config file and defaults
#[derive(Debug)]
struct Settings {
    fragments_dir: PathBuf,
    script_output: PathBuf,
    markdown_output: Option<PathBuf>,
    max_concurrent_checks: usize,
    link_check_timeout: Option<Duration>,
}

#[tokio::main]
async fn main() {
    // Parse command-line arguments; clap exits with code 2 on invalid input
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::GenerationFailed.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    let working_dir = std::env::current_dir()?;
    let config = load_config(&args, &working_dir)?;
    let settings = resolve_settings(args, config, &working_dir)?;

    // Create adapters (Dependency Injection)
    let fragment_reader = FileSystemReader::new();
    let link_checker = CachingLinkChecker::new(HttpLinkChecker::with_timeout(
        settings.link_check_timeout,
    )?);
    let progress_reporter = StderrProgressReporter::new();

    let use_case =
        GenerateBuildArtifactsUseCase::new(fragment_reader, link_checker, progress_reporter);

    let request = GenerateRequest::new(settings.fragments_dir.clone())
        .with_max_concurrent_checks(settings.max_concurrent_checks);
    let response = use_case.execute(request).await?;

    // Render everything first so a documentation failure leaves the script untouched too
    let artifacts = render_artifacts(&settings, &response)?;

    for written in FileSystemWriter::new().present_all(&artifacts)? {
        println!("Generated file \"{}\"", written.display());
    }

    Ok(())
}

fn load_config(args: &Args, working_dir: &Path) -> Result<ConfigFile> {
    match &args.config {
        Some(path) => load_config_from_path(path),
        None => Ok(discover_config(working_dir)?.unwrap_or_default()),
    }
}

/// Command line wins over the config file, which wins over built-in defaults
fn resolve_settings(args: Args, config: ConfigFile, working_dir: &Path) -> Result<Settings> {
    let fragments_dir = match args.fragments.or(config.fragments_dir) {
        Some(dir) => dir,
        None => discover_fragments_dir(working_dir)?,
    };

    Ok(Settings {
        fragments_dir,
        script_output: args
            .output
            .or(config.script_output)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCRIPT_OUTPUT)),
        markdown_output: args.markdown_output.or(config.markdown_output),
        max_concurrent_checks: args
            .max_concurrent_checks
            .map(usize::from)
            .or(config.max_concurrent_checks)
            .unwrap_or(DEFAULT_MAX_CONCURRENT_CHECKS),
        link_check_timeout: config.link_check_timeout_secs.map(Duration::from_secs),
    })
}

fn render_artifacts(settings: &Settings, response: &GenerateResponse) -> Result<Vec<GeneratedArtifact>> {
    let script = BuildScriptFormatter::new().format(&response.builds)?;
    let mut artifacts = vec![GeneratedArtifact::new(&settings.script_output, script).executable()];

    if let Some(markdown_path) = &settings.markdown_output {
        let document = FileSystemReader::new().read_document(markdown_path)?;
        let model = StatusTableReadModelBuilder::build(&response.builds, &response.verification);
        let patched = StatusTableFormatter::new().patch(markdown_path, &document, &model)?;
        artifacts.push(GeneratedArtifact::new(markdown_path, patched));
    }

    Ok(artifacts)
}
