use crate::Word;

/// Two chapters of John with the header lines found in real source files.
pub(crate) const JOHN: &str = r#"\id JHN EL-x-koine_UGNT_ult
\usfm 3.0
\ide UTF-8
\h Ἰωάννην
\toc1 Τὸ κατὰ Ἰωάννην Εὐαγγέλιον
\mt Ἰωάννην

\c 1
\p
\v 1 \w Ἐν|lemma="ἐν" strong="G17220" x-morph="Gr,P,,,,,D,,,"\w*
\w ἀρχῇ|lemma="ἀρχή" strong="G07460" x-morph="Gr,N,,,,,DFS,"\w*
\w ἦν|lemma="εἰμί" strong="G15100" x-morph="Gr,V,IIA3,,S,"\w*
\v 2 \w οὗτος|lemma="οὗτος" strong="G37780" x-morph="Gr,RD,,,,NMS,"\w* \w ἦν|lemma="εἰμί" strong="G15100" x-morph="Gr,V,IIA3,,S,"\w*

\c 2
\p
\v 1 \w Καὶ|lemma="καί" strong="G25320" x-morph="Gr,CC,,,,,,,,"\w*
\v 3 \w ἡμέρᾳ|lemma="ἡμέρα" strong="G22500" x-morph="Gr,N,,,,,DFS,"\w*
"#;

/// A book without a `\h` line.
pub(crate) const UNTITLED: &str = "\\c 1\n\\v 1 \\w λόγος|lemma=\"λόγος\" strong=\"G30560\"\\w*\n";

/// The single tag from the documentation of the word format.
pub(crate) const LOGOS_TAG: &str = r#"\w Λόγος|lemma="λόγος" strong="G3056" x-morph="N-NSM"\w*"#;

pub(crate) fn logos_word(id: u32, verse_id: u32) -> Word {
	Word {
		id,
		verse_id,
		text: "Λόγος".into(),
		lemma: "λόγος".into(),
		strong: "G3056".into(),
		morph: "N-NSM".into(),
	}
}

/// A minimal one-chapter, one-verse book whose verse holds `words`.
pub(crate) fn single_verse_book(words: &str) -> String {
	format!("\\h Test\n\\c 1\n\\v 1 {words}\n")
}
