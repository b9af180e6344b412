use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::{BrainError, BrainResult};
use crate::model::TransitionTable;

/// Brain directory below the user's home.
const BRAIN_SUBDIRS: [&str; 2] = ["Documents", "MiniBot"];

const BRAIN_FILE_PREFIX: &str = "markov_brain_";
const BRAIN_FILE_EXTENSION: &str = "json";

/// Encoding a corpus was decoded with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Encoding {
	Utf8,
	Windows1252,
}

/// Decoded corpus text.
#[derive(Clone, Debug)]
pub struct Corpus {
	pub text: String,
	pub encoding: Encoding,
}

/// Reads a corpus file and decodes it.
///
/// - Fails with [`BrainError::InputNotFound`] if the path does not exist
/// - Decodes as strict UTF-8 first
/// - On failure, logs a warning and decodes as Windows-1252
/// - Fails with [`BrainError::Decode`] if Windows-1252 decoding fails too
pub fn read_corpus<P: AsRef<Path>>(path: P) -> BrainResult<Corpus> {
	let path = path.as_ref();
	if !path.exists() {
		return Err(BrainError::InputNotFound(path.to_path_buf()));
	}

	let bytes = fs::read(path)?;
	match String::from_utf8(bytes) {
		Ok(text) => Ok(Corpus { text, encoding: Encoding::Utf8 }),
		Err(err) => {
			warn!("UTF-8 decode failed for {}, trying Windows-1252 fallback...", path.display());
			let text = decode_windows_1252(err.as_bytes())
				.map_err(|(offset, byte)| BrainError::Decode {
					path: path.to_path_buf(),
					byte,
					offset,
				})?;
			Ok(Corpus { text, encoding: Encoding::Windows1252 })
		}
	}
}

/// Characters of the Windows-1252 range `0x80..=0x9F`.
///
/// `None` marks the five bytes the code page leaves undefined.
#[rustfmt::skip]
const WINDOWS_1252_HIGH: [Option<char>; 32] = [
	Some('\u{20AC}'), None,             Some('\u{201A}'), Some('\u{0192}'),
	Some('\u{201E}'), Some('\u{2026}'), Some('\u{2020}'), Some('\u{2021}'),
	Some('\u{02C6}'), Some('\u{2030}'), Some('\u{0160}'), Some('\u{2039}'),
	Some('\u{0152}'), None,             Some('\u{017D}'), None,
	None,             Some('\u{2018}'), Some('\u{2019}'), Some('\u{201C}'),
	Some('\u{201D}'), Some('\u{2022}'), Some('\u{2013}'), Some('\u{2014}'),
	Some('\u{02DC}'), Some('\u{2122}'), Some('\u{0161}'), Some('\u{203A}'),
	Some('\u{0153}'), None,             Some('\u{017E}'), Some('\u{0178}'),
];

/// Decodes Windows-1252 bytes.
///
/// Returns the offset and value of the first undefined byte on failure.
pub(crate) fn decode_windows_1252(bytes: &[u8]) -> Result<String, (usize, u8)> {
	let mut text = String::with_capacity(bytes.len());
	for (offset, &byte) in bytes.iter().enumerate() {
		let c = match byte {
			0x80..=0x9F => WINDOWS_1252_HIGH[(byte - 0x80) as usize].ok_or((offset, byte))?,
			_ => char::from(byte),
		};
		text.push(c);
	}
	Ok(text)
}

/// Default brain directory: `<home>/Documents/MiniBot`.
///
/// Returns `None` if the home directory cannot be resolved.
pub fn default_brain_dir() -> Option<PathBuf> {
	dirs::home_dir().map(|home| BRAIN_SUBDIRS.iter().fold(home, |dir, sub| dir.join(sub)))
}

/// Checks that a channel name can be used as part of a file name.
///
/// # Errors
/// Returns [`BrainError::InvalidChannel`] if the channel contains a path separator.
pub fn validate_channel(channel: &str) -> BrainResult<()> {
	if channel.contains(['/', '\\']) {
		return Err(BrainError::InvalidChannel(channel.to_owned()));
	}
	Ok(())
}

/// Builds the brain file name for a channel.
///
/// Example: `"TestChan"` → `markov_brain_testchan.json`
///
/// # Errors
/// See [`validate_channel`].
pub fn brain_file_name(channel: &str) -> BrainResult<String> {
	validate_channel(channel)?;
	Ok(format!("{BRAIN_FILE_PREFIX}{}.{BRAIN_FILE_EXTENSION}", channel.to_lowercase()))
}

/// Full path of a channel's brain file inside `dir`.
pub fn brain_path<P: AsRef<Path>>(dir: P, channel: &str) -> BrainResult<PathBuf> {
	Ok(dir.as_ref().join(brain_file_name(channel)?))
}

/// Creates a directory and its parents if missing.
///
/// Succeeds when the directory already exists.
pub fn ensure_dir<P: AsRef<Path>>(dir: P) -> BrainResult<()> {
	fs::create_dir_all(dir)?;
	Ok(())
}

/// Writes a brain file for `channel` inside `dir` and returns its path.
///
/// - Creates `dir` if needed
/// - Overwrites any existing brain for the same channel
/// - Pretty-printed JSON (2-space indentation), keys in insertion order
pub fn save_brain<P: AsRef<Path>>(
	table: &TransitionTable,
	dir: P,
	channel: &str,
) -> BrainResult<PathBuf> {
	let path = brain_path(&dir, channel)?;
	ensure_dir(&dir)?;

	let mut writer = BufWriter::new(File::create(&path)?);
	serde_json::to_writer_pretty(&mut writer, table)?;
	writer.flush()?;

	info!("Wrote {} keys to {}", table.len(), path.display());
	Ok(path)
}

/// Reads a brain file back.
pub fn load_brain<P: AsRef<Path>>(path: P) -> BrainResult<TransitionTable> {
	let reader = BufReader::new(File::open(path)?);
	Ok(serde_json::from_reader(reader)?)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::model::{TrainingOptions, build_brain};

	#[test]
	fn missing_input_is_reported() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("nope.txt");

		match read_corpus(&missing) {
			Err(BrainError::InputNotFound(path)) => assert_eq!(path, missing),
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn utf8_is_decoded_without_fallback() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("utf8.txt");
		// Valid UTF-8 whose bytes would also decode (differently) as Windows-1252
		fs::write(&path, "caf\u{e9} \u{2019}quoted\u{2019}").unwrap();

		let corpus = read_corpus(&path).unwrap();
		assert_eq!(corpus.encoding, Encoding::Utf8);
		assert_eq!(corpus.text, "caf\u{e9} \u{2019}quoted\u{2019}");
	}

	#[test]
	fn invalid_utf8_falls_back_to_windows_1252() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("legacy.txt");
		fs::write(&path, b"caf\xe9 \x93hi\x94 \x80 5").unwrap();

		let corpus = read_corpus(&path).unwrap();
		assert_eq!(corpus.encoding, Encoding::Windows1252);
		assert_eq!(corpus.text, "caf\u{e9} \u{201C}hi\u{201D} \u{20AC} 5");
	}

	#[test]
	fn undefined_windows_1252_byte_is_fatal() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("broken.txt");
		fs::write(&path, b"ab\xe9\x81").unwrap();

		match read_corpus(&path) {
			Err(BrainError::Decode { byte, offset, .. }) => {
				assert_eq!(byte, 0x81);
				assert_eq!(offset, 3);
			}
			other => panic!("unexpected result: {other:?}"),
		}
	}

	#[test]
	fn windows_1252_maps_latin1_range_directly() {
		let bytes: Vec<u8> = (0xA0..=0xFF).collect();
		let text = decode_windows_1252(&bytes).unwrap();
		assert!(text.chars().zip(0xA0u32..).all(|(c, code)| c as u32 == code));
		assert_eq!(decode_windows_1252(b"\x9d"), Err((0, 0x9D)));
	}

	#[test]
	fn brain_file_name_is_lowercased() {
		assert_eq!(brain_file_name("TestChan").unwrap(), "markov_brain_testchan.json");
		assert!(matches!(brain_file_name("../evil"), Err(BrainError::InvalidChannel(_))));
		assert!(brain_file_name("a\\b").is_err());
		assert!(validate_channel("Some_Chan.1").is_ok());
		assert!(matches!(validate_channel("x/y"), Err(BrainError::InvalidChannel(_))));
	}

	#[test]
	fn default_dir_ends_with_minibot() {
		if let Some(dir) = default_brain_dir() {
			assert!(dir.ends_with(Path::new("Documents").join("MiniBot")));
		}
	}

	#[test]
	fn ensure_dir_is_idempotent() {
		let root = tempfile::tempdir().unwrap();
		let dir = root.path().join("a").join("b");
		ensure_dir(&dir).unwrap();

		let other = dir.join("unrelated.txt");
		fs::write(&other, "keep me").unwrap();
		ensure_dir(&dir).unwrap();

		assert_eq!(fs::read_to_string(&other).unwrap(), "keep me");
	}

	#[test]
	fn save_then_load_round_trips() {
		let dir = tempfile::tempdir().unwrap();
		let text = "b a c a b a c d\nthe quick brown fox jumps\nb a c a again";
		let table = build_brain(text, &TrainingOptions::default());

		let path = save_brain(&table, dir.path(), "Chan").unwrap();
		assert_eq!(path, dir.path().join("markov_brain_chan.json"));

		let loaded = load_brain(&path).unwrap();
		assert_eq!(loaded, table);
		assert!(loaded.keys().eq(table.keys()));
	}

	#[test]
	fn save_uses_two_space_indent_and_overwrites() {
		let dir = tempfile::tempdir().unwrap();
		let mut table = TransitionTable::new();
		table.record("a", "b", "c");

		let path = save_brain(&TransitionTable::new(), dir.path(), "x").unwrap();
		assert_eq!(fs::read_to_string(&path).unwrap(), "{}");

		save_brain(&table, dir.path(), "x").unwrap();
		let written = fs::read_to_string(&path).unwrap();
		assert_eq!(written, "{\n  \"a|b\": [\n    \"c\"\n  ]\n}");
	}
}
