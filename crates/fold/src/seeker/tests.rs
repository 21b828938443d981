use mdfold_primitives::Position;
use pretty_assertions::assert_eq;

use super::*;
use crate::testing::MemoryEditor;

const URL_DELIM: TokenCondition<'static> = TokenCondition::Class("formatting-link-string");

fn seeker_on(host: &MemoryEditor, line: LineIdx) -> TokenSeeker {
	let mut seeker = TokenSeeker::new();
	seeker.reset(host, line);
	seeker
}

#[test]
fn reset_points_at_first_token() {
	let host = MemoryEditor::new("see [text](http://example.com) now");
	let seeker = seeker_on(&host, 0);
	assert_eq!(seeker.i_token(), 0);
	assert_eq!(seeker.current().map(|t| t.text.as_str()), Some("see "));
	assert_eq!(seeker.line_tokens().len(), 8);
}

#[test]
fn set_ch_never_rewinds() {
	let host = MemoryEditor::new("see [text](http://example.com) now");
	let mut seeker = seeker_on(&host, 0);

	seeker.set_ch(10);
	assert_eq!(seeker.i_token(), 4);
	assert_eq!(seeker.current().map(|t| t.text.as_str()), Some("("));

	seeker.set_ch(5);
	assert_eq!(seeker.i_token(), 4);

	seeker.set_pos(&host, 0, 2);
	assert_eq!(seeker.i_token(), 4);
}

#[test]
fn set_pos_loads_other_lines() {
	let host = MemoryEditor::new("plain\n[a](b)");
	let mut seeker = seeker_on(&host, 0);
	seeker.set_pos(&host, 1, 3);
	assert_eq!(seeker.line_no(), 1);
	assert_eq!(seeker.current().map(|t| t.text.as_str()), Some("("));
}

#[test]
fn exhausted_line_has_no_current() {
	let host = MemoryEditor::new("[a](b)");
	let mut seeker = seeker_on(&host, 0);
	seeker.set_ch(6);
	assert_eq!(seeker.current(), None);
	seeker.advance();
	assert_eq!(seeker.i_token(), seeker.line_tokens().len());
}

#[test]
fn find_next_starts_after_current() {
	let host = MemoryEditor::new("see [text](http://example.com) now");
	let mut seeker = seeker_on(&host, 0);
	seeker.set_ch(10);

	let found = seeker.find_next(&host, URL_DELIM, SeekFrom::Next).unwrap();
	assert_eq!(found.i_token, 6);
	assert_eq!(found.token.text, ")");
	assert_eq!(found.line_no, 0);
	assert_eq!(seeker.i_token(), 4, "lookahead must not move the seeker");
}

#[test]
fn find_next_index_is_inclusive() {
	let host = MemoryEditor::new("see [text](http://example.com) now");
	let seeker = seeker_on(&host, 0);
	let found = seeker.find_next(&host, URL_DELIM, SeekFrom::Index(4)).unwrap();
	assert_eq!(found.i_token, 4);
	assert_eq!(found.token.text, "(");
}

#[test]
fn predicate_condition() {
	let host = MemoryEditor::new("a [b](c) d");
	let seeker = seeker_on(&host, 0);
	let is_close = |t: &Token| t.text == ")";
	let found = seeker
		.find_next(&host, TokenCondition::Predicate(&is_close), SeekFrom::Next)
		.unwrap();
	assert_eq!(found.token.start, 7);
}

#[test]
fn single_line_search_stops_at_line_end() {
	let host = MemoryEditor::new("plain\n[a](b)");
	let seeker = seeker_on(&host, 0);
	assert_eq!(seeker.find_next(&host, URL_DELIM, SeekFrom::Next), None);
}

#[test]
fn spanning_search_continues_on_later_lines() {
	let host = MemoryEditor::new("plain\n\n[a](b)");
	let seeker = seeker_on(&host, 0);
	let found = seeker.find_next(&host, URL_DELIM, SeekFrom::Spanning).unwrap();
	assert_eq!((found.line_no, found.i_token), (2, 3));
	assert_eq!(seeker.line_no(), 0);
	assert_eq!(seeker.line_tokens().len(), 1);
}

#[test]
fn since_skips_earlier_tokens() {
	let host = MemoryEditor::new("plain\n[x](y)");
	let seeker = seeker_on(&host, 0);
	let found = seeker
		.find_next(
			&host,
			URL_DELIM,
			SeekFrom::Since {
				since: Position::new(1, 4),
				span_lines: true,
			},
		)
		.unwrap();
	assert_eq!((found.line_no, found.token.start), (1, 5));

	let none = seeker.find_next(
		&host,
		URL_DELIM,
		SeekFrom::Since {
			since: Position::new(1, 4),
			span_lines: false,
		},
	);
	assert_eq!(none, None);
}

#[test]
fn spanning_past_last_line_finds_nothing() {
	let host = MemoryEditor::new("[a](b)\nplain");
	let mut seeker = seeker_on(&host, 0);
	seeker.set_ch(6);
	assert_eq!(seeker.find_next(&host, URL_DELIM, SeekFrom::Spanning), None);
}
