use std::path::{Path, PathBuf};
use std::process;
use std::time::Duration;

use pyprov::adapters::outbound::console::StderrProgressReporter;
use pyprov::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use pyprov::adapters::outbound::formatters::{
    render_requirements, JsonReportFormatter, TextReportFormatter,
};
use pyprov::adapters::outbound::metadata::DistInfoInventory;
use pyprov::adapters::outbound::process::pip_inventory::DEFAULT_PIP_TIMEOUT_SECS;
use pyprov::adapters::outbound::process::{detect_environment, CondaVersionProbe, PipListInventory};
use pyprov::application::dto::AnalyzeRequest;
use pyprov::application::use_cases::{AnalyzeSourcesUseCase, DetectPrimaryUseCase};
use pyprov::cli::{Cli, Command};
use pyprov::config::{discover_config, load_config_from_path, ConfigFile};
use pyprov::ports::outbound::{OutputPresenter, ReportFormatter};
use pyprov::primary_detection::services::{
    ClassifierConfig, DependencyGraphBuilder, ExclusionSet, PackageInventory, PrimaryClassifier,
};
use pyprov::shared::error::ExitCode;
use pyprov::shared::Result;
use pyprov::source_routing::domain::RoutingTables;
use pyprov::source_routing::services::SourceAffinityResolver;

const DEFAULT_PYTHON: &str = "python3";

fn main() {
    if let Err(e) = run() {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    let config = match &cli.config {
        Some(path) => load_config_from_path(path)?,
        None => discover_config(Path::new("."))?.unwrap_or_default(),
    };

    match cli.command {
        Command::Detect {
            json,
            output,
            show_dependents,
        } => run_detect(&config, json, output, show_dependents),
        Command::Analyze {
            packages,
            json,
            output,
            resolve,
            target,
        } => run_analyze(&config, packages, json, output, resolve, target.into()),
    }
}

fn run_detect(
    config: &ConfigFile,
    json: bool,
    output: Option<PathBuf>,
    show_dependents: bool,
) -> Result<()> {
    let python = config
        .python
        .clone()
        .unwrap_or_else(|| DEFAULT_PYTHON.to_string());
    let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_PIP_TIMEOUT_SECS));

    let inventory = PackageInventory::new(
        PipListInventory::new(python, timeout),
        DistInfoInventory::discover(),
    );

    let mut exclusions = ExclusionSet::default();
    if let Some(extra) = &config.extra_common_dependencies {
        exclusions.extend(extra.iter().map(String::as_str));
    }

    let mut classifier_config = ClassifierConfig::default();
    if let Some(threshold) = config.max_dependents_for_primary {
        classifier_config.max_dependents_for_primary = threshold;
    }

    let classifier = PrimaryClassifier::new(
        DependencyGraphBuilder::new(DistInfoInventory::discover()),
        exclusions,
        classifier_config,
    );

    let use_case = DetectPrimaryUseCase::new(
        inventory,
        classifier,
        StderrProgressReporter::new(),
        detect_environment(),
    );
    let report = use_case.execute()?;

    let content = if json {
        JsonReportFormatter::new().format_detect(&report)?
    } else if output.is_some() {
        // writing to a file without --json produces a pip-style pin list
        render_requirements(&report)
    } else {
        TextReportFormatter::new(show_dependents).format_detect(&report)?
    };

    presenter_for(output).present(&content)
}

fn run_analyze(
    config: &ConfigFile,
    packages: Vec<String>,
    json: bool,
    output: Option<PathBuf>,
    resolve: bool,
    target: pyprov::source_routing::domain::TargetFormat,
) -> Result<()> {
    let mut tables = RoutingTables::default();
    tables.extend(
        config.prefer_conda.clone().unwrap_or_default(),
        config.prefer_pip.clone().unwrap_or_default(),
        config.conda_remap.clone().unwrap_or_default(),
    );

    let probe = CondaVersionProbe::default();
    let resolver = SourceAffinityResolver::with_probe(tables, &probe);

    let use_case = AnalyzeSourcesUseCase::new(resolver, StderrProgressReporter::new());
    let request = AnalyzeRequest::new(packages, resolve.then_some(target));
    let report = use_case.execute(request)?;

    let content = if json {
        JsonReportFormatter::new().format_analyze(&report)?
    } else {
        TextReportFormatter::default().format_analyze(&report)?
    };

    presenter_for(output).present(&content)
}

fn presenter_for(output: Option<PathBuf>) -> Box<dyn OutputPresenter> {
    match output {
        Some(path) => Box::new(FileSystemWriter::new(path)),
        None => Box::new(StdoutPresenter::new()),
    }
}
