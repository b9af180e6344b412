use unicode_general_category::{GeneralCategory, get_general_category};

/// Default ratio of ASCII letters required by [`is_mostly_english`].
pub const DEFAULT_ENGLISH_THRESHOLD: f64 = 0.7;

/// Prefix marking a bot command or directive.
pub const COMMAND_PREFIX: char = '!';

/// Lowercase fragments identifying a line that carries a link.
const LINK_MARKERS: [&str; 4] = ["http", ".com", ".net", ".org"];

/// Returns whether `c` is a letter (general category `Lu`, `Ll`, `Lt`, `Lm` or `Lo`).
///
/// Letter numbers (`Nl`) and combining vowel signs are not letters.
pub fn is_letter(c: char) -> bool {
	matches!(
		get_general_category(c),
		GeneralCategory::UppercaseLetter
			| GeneralCategory::LowercaseLetter
			| GeneralCategory::TitlecaseLetter
			| GeneralCategory::ModifierLetter
			| GeneralCategory::OtherLetter
	)
}

/// Returns whether the lowercase form of `c` starts in `a-z`.
///
/// Includes the KELVIN SIGN and `İ`, which lowercase to `k` and `i̇`.
fn is_english_letter(c: char) -> bool {
	c.to_lowercase().next().is_some_and(|lower| lower.is_ascii_lowercase())
}

/// Returns whether a line is "mostly English".
///
/// Counts letters (see [`is_letter`]), then the ones whose lowercase form is
/// in the ASCII `a-z` range. The line qualifies when
/// `english / letters >= threshold`.
///
/// A line without any letter never qualifies.
pub fn is_mostly_english(line: &str, threshold: f64) -> bool {
	let mut letters = 0usize;
	let mut english = 0usize;

	for c in line.chars().filter(|&c| is_letter(c)) {
		letters += 1;
		if is_english_letter(c) {
			english += 1;
		}
	}

	if letters == 0 {
		return false;
	}
	(english as f64 / letters as f64) >= threshold
}

/// Returns whether `c` separates words.
///
/// Unicode whitespace plus the information separators `\x1c`-`\x1f`.
pub fn is_word_separator(c: char) -> bool {
	c.is_whitespace() || matches!(c, '\x1c'..='\x1f')
}

/// Trims word separators from both ends of a line.
pub fn trim_line(line: &str) -> &str {
	line.trim_matches(is_word_separator)
}

/// Splits a line into words on runs of word separators.
pub fn split_words(line: &str) -> Vec<&str> {
	line.split(is_word_separator).filter(|word| !word.is_empty()).collect()
}

/// Returns whether a line is a bot command (`!` after trimming).
pub fn is_command(line: &str) -> bool {
	trim_line(line).starts_with(COMMAND_PREFIX)
}

/// Returns whether a line looks like it contains a link.
pub fn contains_link(line: &str) -> bool {
	let lower = line.to_lowercase();
	LINK_MARKERS.iter().any(|marker| lower.contains(*marker))
}

/// Characters treated as line boundaries by [`split_lines`].
fn is_line_boundary(c: char) -> bool {
	matches!(
		c,
		'\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e'
			| '\u{85}' | '\u{2028}' | '\u{2029}'
	)
}

/// Splits a text into lines.
///
/// Besides `\n` and `\r\n`, a lone `\r`, vertical tab, form feed, the
/// information separators (`\x1c`-`\x1e`), NEL and the Unicode line and
/// paragraph separators all end a line. A trailing boundary does not produce
/// an extra empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
	let mut lines = Vec::new();
	let mut start = 0;
	let mut chars = text.char_indices().peekable();

	while let Some((i, c)) = chars.next() {
		if !is_line_boundary(c) {
			continue;
		}
		lines.push(&text[start..i]);

		let mut end = i + c.len_utf8();
		if c == '\r' {
			if let Some(&(j, '\n')) = chars.peek() {
				chars.next();
				end = j + 1;
			}
		}
		start = end;
	}

	if start < text.len() {
		lines.push(&text[start..]);
	}
	lines
}
