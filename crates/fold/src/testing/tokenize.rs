//! Minimal inline Markdown tokenizer producing editor-style token classes.
//!
//! Recognizes `![alt](dest)`, `![alt][ref]`, `[text](dest)` and
//! `[text][ref]` on a single line; everything else becomes plain text
//! tokens. Classes follow the usual Markdown editor-mode vocabulary so the
//! built-in folders match them unchanged:
//!
//! | text     | classes                                              |
//! |----------|------------------------------------------------------|
//! | `!`      | `image image-marker`                                 |
//! | `[` `]`  | `[image image-alt-text] link formatting formatting-link` |
//! | `(` `)`  | `string url formatting formatting-link-string`       |
//! | dest     | `string url`                                         |

use mdfold_primitives::Token;

const IMAGE_MARKER: &str = "image image-marker";
const LINK_STRING_FORMATTING: &str = "string url formatting formatting-link-string";
const LINK_STRING: &str = "string url";

/// Tokenizes one line. Columns are byte offsets.
pub fn tokenize_line(line: &str) -> Vec<Token> {
	let bytes = line.as_bytes();
	let mut out = Vec::new();
	let mut text_start = 0;
	let mut i = 0;

	while i < bytes.len() {
		let image = bytes[i] == b'!' && bytes.get(i + 1) == Some(&b'[');
		let open = match bytes[i] {
			_ if image => i + 1,
			b'[' => i,
			_ => {
				i += 1;
				continue;
			}
		};
		let Some(close) = find_byte(bytes, b']', open + 1) else {
			i += 1;
			continue;
		};

		push_text(&mut out, line, text_start, i);

		let label = if image { "image image-alt-text link" } else { "link" };
		let bracket = format!("{label} formatting formatting-link");
		if image {
			push(&mut out, line, i, open, IMAGE_MARKER);
		}
		push(&mut out, line, open, open + 1, &bracket);
		if close > open + 1 {
			push(&mut out, line, open + 1, close, label);
		}
		push(&mut out, line, close, close + 1, &bracket);
		i = close + 1;

		let closer = match bytes.get(i) {
			Some(b'(') => Some(b')'),
			Some(b'[') => Some(b']'),
			_ => None,
		};
		if let Some(end) = closer.and_then(|c| find_byte(bytes, c, i + 1)) {
			push(&mut out, line, i, i + 1, LINK_STRING_FORMATTING);
			if end > i + 1 {
				push(&mut out, line, i + 1, end, LINK_STRING);
			}
			push(&mut out, line, end, end + 1, LINK_STRING_FORMATTING);
			i = end + 1;
		}

		text_start = i;
	}

	push_text(&mut out, line, text_start, bytes.len());
	out
}

fn find_byte(bytes: &[u8], needle: u8, from: usize) -> Option<usize> {
	bytes.get(from..)?.iter().position(|&b| b == needle).map(|p| from + p)
}

fn push(out: &mut Vec<Token>, line: &str, start: usize, end: usize, kind: &str) {
	out.push(Token::new(start, end, kind, &line[start..end]));
}

fn push_text(out: &mut Vec<Token>, line: &str, start: usize, end: usize) {
	if end > start {
		push(out, line, start, end, "");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn texts(tokens: &[Token]) -> Vec<&str> {
		tokens.iter().map(|t| t.text.as_str()).collect()
	}

	#[test]
	fn image_with_url() {
		let tokens = tokenize_line("![alt](http://example.com/x.png)");
		assert_eq!(texts(&tokens), ["!", "[", "alt", "]", "(", "http://example.com/x.png", ")"]);
		assert!(tokens[0].has_class("image-marker"));
		assert!(tokens[3].has_class_prefix("image"));
		assert!(tokens[4].has_class("formatting-link-string"));
		assert!(!tokens[3].has_class("formatting-link-string"));
	}

	#[test]
	fn link_with_surrounding_text() {
		let tokens = tokenize_line("see [text](http://example.com) now");
		assert_eq!(texts(&tokens), ["see ", "[", "text", "]", "(", "http://example.com", ")", " now"]);
		assert_eq!(tokens[4].span(), 10..11);
		assert!(!tokens[3].has_class_prefix("image"));
	}

	#[test]
	fn reference_image() {
		let tokens = tokenize_line("![logo][Logo]");
		assert_eq!(texts(&tokens), ["!", "[", "logo", "]", "[", "Logo", "]"]);
		assert!(tokens[6].has_class("formatting-link-string"));
	}

	#[test]
	fn unclosed_brackets_are_text() {
		let tokens = tokenize_line("a [b (c)");
		assert_eq!(texts(&tokens), ["a [b (c)"]);
	}

	#[test]
	fn bare_brackets_have_no_url_part() {
		let tokens = tokenize_line("[x] y");
		assert_eq!(texts(&tokens), ["[", "x", "]", " y"]);
	}
}
