//! Library integration tests.

use pitwall::checks::{Check, CheckContext, DirectoryCheck};
use pitwall::config::VerifierSettings;
use pitwall::runner::Verifier;
use pitwall::ui::MockUI;
use pitwall::PitwallError;
use tempfile::TempDir;

#[test]
fn error_types_are_public() {
    let err = PitwallError::SettingsValidationError {
        message: "probe.round must be at least 1".into(),
    };
    assert!(err.to_string().contains("probe.round"));
    assert!(err.is_settings_error());
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> pitwall::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use clap::Parser;
    use pitwall::cli::Cli;

    let cli = Cli::parse_from(["pitwall", "--quiet", "--project", "/tmp/f1"]);
    assert!(cli.quiet);
    assert_eq!(cli.project, Some(std::path::PathBuf::from("/tmp/f1")));
}

#[test]
fn custom_verifier_from_public_checks() {
    let temp = TempDir::new().unwrap();
    let mut settings = VerifierSettings::default();
    settings.directories = vec!["raw".into(), "raw/2023".into()];
    let ctx = CheckContext::new(temp.path(), &settings);
    let mut ui = MockUI::new();

    let verifier = Verifier::new(vec![Box::new(DirectoryCheck::new()) as Box<dyn Check>]);
    let report = verifier.run(&ctx, &mut ui);

    assert!(report.all_passed());
    assert!(temp.path().join("raw/2023").is_dir());
}
