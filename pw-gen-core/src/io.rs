use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::io;

/// Reads a dictionary file and returns its words.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`, one word per line
/// - Trims each line, skips blank lines and `#` comments
/// - Lower-cases every word
pub(crate) fn read_words<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty() && !line.starts_with('#'))
		.map(str::to_lowercase)
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::Write;

	#[test]
	fn reads_one_word_per_line() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		write!(file, "# header\nApple\r\n\n  banana  \nCHERRY\n").unwrap();

		let words = read_words(file.path()).unwrap();
		assert_eq!(words, vec!["apple", "banana", "cherry"]);
	}

	#[test]
	fn missing_file_is_an_error() {
		let dir = tempfile::tempdir().unwrap();
		assert!(read_words(dir.path().join("missing.txt")).is_err());
	}
}
