use std::path::Path;

use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn parse_report_path_with_defaults() {
    let cli = Cli::try_parse_from(["report-guard", "results/index.html"]).unwrap();

    assert_eq!(cli.report, Path::new("results/index.html"));
    assert!(cli.config.is_none());
    assert!(!cli.warn_only);
    assert!(!cli.quiet);
    assert_eq!(cli.verbose, 0);
    assert_eq!(cli.color, ColorChoice::Auto);
}

#[test]
fn parse_all_options() {
    let cli = Cli::try_parse_from([
        "report-guard",
        "index.html",
        "--config",
        "guard.toml",
        "--warn-only",
        "-vv",
        "--color",
        "never",
    ])
    .unwrap();

    assert_eq!(cli.config.as_deref(), Some(Path::new("guard.toml")));
    assert!(cli.warn_only);
    assert_eq!(cli.verbose, 2);
    assert_eq!(cli.color, ColorChoice::Never);
}

#[test]
fn parse_quiet_short_flag() {
    let cli = Cli::try_parse_from(["report-guard", "-q", "index.html"]).unwrap();
    assert!(cli.quiet);
}

#[test]
fn invalid_color_is_rejected() {
    let result = Cli::try_parse_from(["report-guard", "index.html", "--color", "sometimes"]);
    assert!(result.is_err());
}
