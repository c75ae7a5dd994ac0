mod common;

use predicates::prelude::PredicateBooleanExt;
use serde_json::Value;
use ugnt_core::AnyEmptyResult;

#[test]
fn parse_writes_one_file_per_book() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(
		tmp.path(),
		&[("41-MRK.usfm", common::MARK), ("40-MAT.usfm", common::MATTHEW)],
	)?;

	common::ugnt_cmd()
		.arg("parse")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Wrote 2 book(s)"));

	let output = tmp.path().join("output");
	let matthew: Value =
		serde_json::from_str(&std::fs::read_to_string(output.join("1_Ματθαῖον.json"))?)?;
	assert_eq!(matthew["id"], 1);
	assert_eq!(matthew["title"], "Ματθαῖον");
	assert_eq!(matthew["chapters"][0]["verses"][0]["words"][1]["text"], "γενέσεως");
	assert_eq!(matthew["chapters"][0]["verses"][1]["words"][0]["id"], 3);
	assert_eq!(matthew["chapters"][0]["verses"][1]["words"][0]["verseId"], 2);

	let mark: Value =
		serde_json::from_str(&std::fs::read_to_string(output.join("2_Μᾶρκον.json"))?)?;
	assert_eq!(mark["id"], 2);
	assert_eq!(mark["chapters"][0]["id"], 1);
	assert_eq!(mark["chapters"][0]["bookId"], 2);

	Ok(())
}

#[test]
fn parse_dry_run_writes_nothing() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(tmp.path(), &[("40-MAT.usfm", common::MATTHEW)])?;

	common::ugnt_cmd()
		.arg("parse")
		.arg("--dry-run")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Dry run").and(predicates::str::contains("1_Ματθαῖον.json")));

	assert!(!tmp.path().join("output").exists());

	Ok(())
}

#[test]
fn parse_respects_overrides_and_config() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	std::fs::write(
		tmp.path().join("ugnt.toml"),
		"[source]\npattern = \"*.SFM\"\n\n[output]\npretty = false\n",
	)?;
	let books = tmp.path().join("books");
	std::fs::create_dir_all(&books)?;
	std::fs::write(books.join("MRK.SFM"), common::MARK)?;
	std::fs::write(books.join("MAT.usfm"), common::MATTHEW)?;

	common::ugnt_cmd()
		.arg("parse")
		.arg("--source")
		.arg("books")
		.arg("--output")
		.arg("json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Wrote 1 book(s)"));

	let content = std::fs::read_to_string(tmp.path().join("json").join("1_Μᾶρκον.json"))?;
	assert!(!content.contains('\n'), "compact output expected: {content}");

	Ok(())
}

#[test]
fn parse_reports_the_failing_file() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(
		tmp.path(),
		&[
			("40-MAT.usfm", "\\v 1 \\w a|lemma=\"a\"\\w*\n"),
			("41-MRK.usfm", common::MARK),
		],
	)?;

	common::ugnt_cmd()
		.arg("parse")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("40-MAT.usfm").and(predicates::str::contains("ugnt::in_file")));

	assert!(!tmp.path().join("output").exists());

	Ok(())
}

#[test]
fn parse_accepts_bytes_that_are_not_utf8() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	common::write_sources(tmp.path(), &[("41-MRK.usfm", common::MARK)])?;
	std::fs::write(
		tmp.path().join("ugnt").join("40-MAT.usfm"),
		b"\\h T\n\\rem caf\xE9\n\\c 1\n\\v 1 \\w a|lemma=\"a\"\\w*\n",
	)?;

	common::ugnt_cmd()
		.arg("parse")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Wrote 2 book(s)"));

	let book: Value =
		serde_json::from_str(&std::fs::read_to_string(tmp.path().join("output").join("1_T.json"))?)?;
	assert_eq!(book["chapters"][0]["verses"][0]["words"][0]["lemma"], "a");

	Ok(())
}

#[test]
fn parse_fails_without_a_source_directory() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;

	common::ugnt_cmd()
		.arg("parse")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.code(2)
		.stderr(predicates::str::contains("ugnt::source_directory"));

	Ok(())
}

#[test]
fn no_subcommand_exits_with_usage_hint() {
	common::ugnt_cmd()
		.assert()
		.code(1)
		.stderr(predicates::str::contains("ugnt --help"));
}
