use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::{fs, io};

/// Reads a corpus file and returns its lines as sentences.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_corpus<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Writes a serialized model blob to disk.
pub fn save_text<P: AsRef<Path>>(filename: P, text: &str) -> io::Result<()> {
	fs::write(filename, text)
}

/// Reads a serialized model blob back from disk.
pub fn load_text<P: AsRef<Path>>(filename: P) -> io::Result<String> {
	fs::read_to_string(filename)
}

#[cfg(test)]
mod tests {
	use super::{load_text, read_corpus, save_text};

	#[test]
	fn corpus_lines_round_trip() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("corpus.txt");

		std::fs::write(&path, "One fish.\nTwo fish.\r\nRed fish.\n").unwrap();
		let sentences = read_corpus(&path).unwrap();
		assert_eq!(sentences, vec!["One fish.", "Two fish.", "Red fish."]);
	}

	#[test]
	fn text_blob_round_trip() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("model.json");

		save_text(&path, r#"{"options":{},"model":{}}"#).unwrap();
		assert_eq!(load_text(&path).unwrap(), r#"{"options":{},"model":{}}"#);
	}
}
