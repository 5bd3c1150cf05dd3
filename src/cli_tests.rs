use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn kinds_defaults_to_stdin_and_text() {
    let cli = Cli::try_parse_from(["kortex-chart", "kinds"]).unwrap();
    match cli.command {
        Commands::Kinds(args) => {
            assert_eq!(args.input, PathBuf::from(STDIN_INPUT));
            assert_eq!(args.format, OutputFormat::Text);
        }
        _ => panic!("Expected Kinds command"),
    }
}

#[test]
fn build_parses_kind_and_seed() {
    let cli = Cli::try_parse_from([
        "kortex-chart",
        "build",
        "data.json",
        "--kind",
        "polar-area",
        "--seed",
        "42",
        "--with-options",
    ])
    .unwrap();
    match cli.command {
        Commands::Build(args) => {
            assert_eq!(args.input, PathBuf::from("data.json"));
            assert_eq!(args.kind, ChartKind::PolarArea);
            assert_eq!(args.seed, Some(42));
            assert!(args.with_options);
            assert_eq!(args.format, OutputFormat::Json);
        }
        _ => panic!("Expected Build command"),
    }
}

#[test]
fn build_requires_kind() {
    assert!(Cli::try_parse_from(["kortex-chart", "build", "data.json"]).is_err());
}

#[test]
fn build_rejects_unknown_kind() {
    assert!(Cli::try_parse_from(["kortex-chart", "build", "-k", "heatmap"]).is_err());
}

#[test]
fn export_parses_options() {
    let cli = Cli::try_parse_from([
        "kortex-chart",
        "export",
        "data.json",
        "--format",
        "xlsx",
        "--name",
        "report",
        "--timestamp",
        "--sheet",
        "Q1",
        "--no-header",
        "-o",
        "out",
    ])
    .unwrap();
    match cli.command {
        Commands::Export(args) => {
            assert_eq!(args.format, ExportFormat::Excel);
            assert_eq!(args.name.as_deref(), Some("report"));
            assert!(args.timestamp);
            assert_eq!(args.sheet.as_deref(), Some("Q1"));
            assert!(args.no_header);
            assert_eq!(args.output_dir, PathBuf::from("out"));
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn export_rejects_unknown_format() {
    assert!(Cli::try_parse_from(["kortex-chart", "export", "-f", "docx"]).is_err());
}

#[test]
fn export_pdf_page_flags() {
    let cli = Cli::try_parse_from([
        "kortex-chart",
        "export",
        "-f",
        "pdf",
        "--title",
        "Sales",
        "--orientation",
        "landscape",
        "--page-size",
        "Letter",
    ])
    .unwrap();
    match cli.command {
        Commands::Export(args) => {
            assert_eq!(args.format, ExportFormat::Pdf);
            assert_eq!(args.title.as_deref(), Some("Sales"));
            assert_eq!(args.orientation, Some(Orientation::Landscape));
            assert_eq!(args.page_size, Some(PageSize::Letter));
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn export_rejects_unknown_page_size() {
    assert!(
        Cli::try_parse_from(["kortex-chart", "export", "-f", "pdf", "--page-size", "a3"]).is_err()
    );
}

#[test]
fn global_flags_after_subcommand() {
    let cli = Cli::try_parse_from(["kortex-chart", "table", "x.json", "-vv", "--no-config"]).unwrap();
    assert_eq!(cli.verbose, 2);
    assert!(cli.no_config);
    assert!(!cli.quiet);
}

#[test]
fn batch_takes_manifest() {
    let cli =
        Cli::try_parse_from(["kortex-chart", "batch", "manifest.json", "--zip-name", "all"]).unwrap();
    match cli.command {
        Commands::Batch(args) => {
            assert_eq!(args.manifest, PathBuf::from("manifest.json"));
            assert_eq!(args.zip_name.as_deref(), Some("all"));
        }
        _ => panic!("Expected Batch command"),
    }
}

#[test]
fn init_defaults() {
    let cli = Cli::try_parse_from(["kortex-chart", "init"]).unwrap();
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".kortex-chart.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn config_show_format() {
    let cli = Cli::try_parse_from(["kortex-chart", "config", "show", "--format", "json"]).unwrap();
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Show { config, format },
        }) => {
            assert!(config.is_none());
            assert!(matches!(format, ConfigOutputFormat::Json));
        }
        _ => panic!("Expected Config Show command"),
    }
}
