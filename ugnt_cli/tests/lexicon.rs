mod common;

use serde_json::Value;
use ugnt_core::AnyEmptyResult;

const ARCHE: &str = "# ἀρχή\n\n* Strongs: G07460\n\n## Senses\n\n- Definition: beginning\n- \
                     Definition:\n- Glosses: ruler\n";

#[test]
fn lexicon_writes_entries_in_path_order() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let dir = tmp.path().join("strong").join("g07");
	std::fs::create_dir_all(&dir)?;
	std::fs::write(dir.join("g0746.md"), ARCHE)?;
	std::fs::write(dir.join("g0740.md"), "no label here\n")?;
	std::fs::write(dir.join("notes.txt"), "* Strongs: G99990\n")?;

	common::ugnt_cmd()
		.arg("lexicon")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Wrote 2 lexicon entries"));

	let json = std::fs::read_to_string(tmp.path().join("output").join("strong_output.json"))?;
	let entries: Value = serde_json::from_str(&json)?;
	assert_eq!(entries[0]["strong"], "");
	assert_eq!(entries[1]["strong"], "G07460");
	assert_eq!(entries[1]["senses"][0]["definition"], "beginning");
	assert_eq!(entries[1]["senses"][0]["number"], "");

	Ok(())
}

#[test]
fn lexicon_output_can_be_overridden() -> AnyEmptyResult {
	let tmp = tempfile::tempdir()?;
	let dir = tmp.path().join("articles");
	std::fs::create_dir_all(&dir)?;
	std::fs::write(dir.join("g0746.md"), ARCHE)?;

	common::ugnt_cmd()
		.arg("lexicon")
		.arg("--source")
		.arg("articles")
		.arg("--output")
		.arg("lexicon.json")
		.arg("--path")
		.arg(tmp.path())
		.assert()
		.success()
		.stdout(predicates::str::contains("Wrote 1 lexicon entry"));

	assert!(tmp.path().join("lexicon.json").exists());

	Ok(())
}
