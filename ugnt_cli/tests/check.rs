mod common;

use rstest::rstest;
use serde_json::Value;
use ugnt_core::AnyEmptyResult;

const BROKEN_WORD: &str = "\\h Broken\n\\c 1\n\\v 1 \\w ok|lemma=\"ok\"\\w* \\w nobar\\w*\n";

#[test]
fn check_passes_for_clean_sources() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(
		tmp.path(),
		&[("40-MAT.usfm", common::MATTHEW), ("41-MRK.usfm", common::MARK)],
	)?;

	common::ugnt_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Check passed: 2 book(s)"))
		.stdout(predicates::str::contains("Ματθαῖον"));

	assert!(!tmp.path().join("output").exists());

	Ok(())
}

#[test]
fn check_json_reports_books_and_diagnostics() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(
		tmp.path(),
		&[("40-MAT.usfm", common::MATTHEW), ("99-BRK.usfm", BROKEN_WORD)],
	)?;

	let output = common::ugnt_cmd()
		.arg("check")
		.arg("--format")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.get_output()
		.stdout
		.clone();

	let report: Value = serde_json::from_slice(&output)?;
	assert_eq!(report["ok"], false);
	assert_eq!(report["books"][0]["words"], 3);
	assert_eq!(report["books"][1]["title"], "Broken");
	assert_eq!(report["books"][1]["words"], 1);
	assert_eq!(report["diagnostics"][0]["file"], "99-BRK.usfm");
	assert_eq!(report["diagnostics"][0]["kind"], "missingSeparator");
	assert_eq!(report["diagnostics"][0]["line"], 3);

	Ok(())
}

#[rstest]
#[case::lenient(false, 0)]
#[case::strict(true, 1)]
fn check_warnings_only_fail_in_strict_mode(
	#[case] strict: bool,
	#[case] code: i32,
) -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(tmp.path(), &[("99-BRK.usfm", BROKEN_WORD)])?;

	let mut cmd = common::ugnt_cmd();
	cmd.arg("check").arg("--path").arg(tmp.path());
	if strict {
		cmd.arg("--strict");
	}

	cmd.assert()
		.code(code)
		.stdout(predicates::str::contains("1 warning(s)"))
		.stderr(predicates::str::contains("ugnt::missing_separator"));

	Ok(())
}

#[test]
fn check_fails_on_structural_errors() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(tmp.path(), &[("40-MAT.usfm", "\\h X\n\\c one\n")])?;

	common::ugnt_cmd()
		.arg("check")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("40-MAT.usfm"))
		.stderr(predicates::str::contains("ugnt::invalid_chapter_number"))
		.stderr(predicates::str::contains("plain integer"));

	Ok(())
}
