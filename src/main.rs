use clap::Parser;

use report_guard::artifact::Artifact;
use report_guard::checker::{Summary, run_checks, summary_report_suite};
use report_guard::cli::{Cli, ColorChoice};
use report_guard::config::{ConfigLoader, FileConfigLoader};
use report_guard::output::{ColorMode, ErrorOutput, TextFormatter};
use report_guard::{EXIT_LOAD_ERROR, exit_code};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    let diagnostics = ErrorOutput::new(color_choice_to_mode(cli.color));

    let exit_code = match run_check(&cli, &diagnostics) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            diagnostics.print_error(&e);
            EXIT_LOAD_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run_check(cli: &Cli, diagnostics: &ErrorOutput) -> report_guard::Result<i32> {
    let log = |level: u8, message: &str| {
        if !cli.quiet && cli.verbose >= level {
            diagnostics.print_info(message);
        }
    };

    // 1. Load configuration
    let config = FileConfigLoader::new().load(cli.config.as_deref())?;
    match &cli.config {
        Some(path) => log(1, &format!("Config: {}", path.display())),
        None => log(1, "Config: built-in defaults"),
    }

    // 2. Build the check sequence
    let suite = summary_report_suite(&config)?;
    log(1, &format!("Checks: {}", suite.len()));
    for check in suite.iter() {
        log(2, &format!("  {} {}", check.id(), check.rule().describe()));
    }

    // 3. Load the report
    let artifact = Artifact::load(&cli.report)?;
    log(
        1,
        &format!(
            "Report: {} ({} bytes)",
            artifact.path().display(),
            artifact.len()
        ),
    );

    // 4. Run checks and print the transcript
    let results = run_checks(&artifact, &suite);
    if !cli.quiet {
        let formatter = TextFormatter::new(color_choice_to_mode(cli.color));
        print!("{}", formatter.format(&results));
    }

    Ok(exit_code(&Summary::from_results(&results), cli.warn_only))
}
