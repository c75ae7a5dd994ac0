#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use insta_cmd::get_cargo_bin;

pub const MATTHEW: &str = r#"\id MAT
\h Ματθαῖον
\c 1
\p
\v 1 \w Βίβλος|lemma="βίβλος" strong="G09760" x-morph="Gr,N,,,,,NFS,"\w*
\w γενέσεως|lemma="γένεσις" strong="G10780" x-morph="Gr,N,,,,,GFS,"\w*
\v 2 \w Ἀβραὰμ|lemma="Ἀβραάμ" strong="G00110" x-morph="Gr,N,,,,,NMS,"\w*
"#;

pub const MARK: &str = r#"\h Μᾶρκον
\c 1
\v 1 \w Ἀρχὴ|lemma="ἀρχή" strong="G07460" x-morph="Gr,N,,,,,NFS,"\w*
"#;

pub fn ugnt_cmd() -> Command {
	let mut cmd = Command::new(get_cargo_bin("ugnt"));
	cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
	cmd
}

/// Write `files` into `<root>/ugnt`, the default source directory.
pub fn write_sources(root: &Path, files: &[(&str, &str)]) -> std::io::Result<()> {
	let dir = root.join("ugnt");
	std::fs::create_dir_all(&dir)?;
	for (name, content) in files {
		std::fs::write(dir.join(name), content)?;
	}
	Ok(())
}
