//! Forward-only cursor over a document's per-line token lists.
//!
//! The seeker holds one line's tokens at a time plus `i_token`, the index of
//! the first token not yet consumed at the current column. Moving within a
//! line never rewinds `i_token`; moving to another line reloads tokens.
//!
//! [`TokenSeeker::find_next`] is a pure lookahead: folders use it to locate
//! the end of a construct and the seeker only advances when the engine calls
//! [`TokenSeeker::set_pos`] or [`TokenSeeker::set_ch`].

use mdfold_primitives::{ColIdx, LineIdx, Position, Token};

use crate::host::FoldHost;

#[cfg(test)]
mod tests;

/// Predicate deciding whether a token is the one being searched for.
#[derive(Clone, Copy)]
pub enum TokenCondition<'a> {
	/// The token carries this style class as a whole word.
	Class(&'a str),
	/// Arbitrary test on the token.
	Predicate(&'a dyn Fn(&Token) -> bool),
}

impl TokenCondition<'_> {
	/// Evaluates the condition.
	pub fn matches(&self, token: &Token) -> bool {
		match self {
			TokenCondition::Class(class) => token.has_class(class),
			TokenCondition::Predicate(pred) => pred(token),
		}
	}
}

impl std::fmt::Debug for TokenCondition<'_> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			TokenCondition::Class(class) => f.debug_tuple("Class").field(class).finish(),
			TokenCondition::Predicate(_) => f.write_str("Predicate(..)"),
		}
	}
}

/// Where [`TokenSeeker::find_next`] starts looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekFrom {
	/// The token after the current one; current line only.
	Next,
	/// The token at this index (inclusive); current line only.
	Index(usize),
	/// The token after the current one, continuing into later lines.
	Spanning,
	/// The first token starting at or after `since`. Positions on lines
	/// before the seeker are treated as the current token.
	Since {
		/// Earliest position a match may start at.
		since: Position,
		/// Continue into later lines when the current one has no match.
		span_lines: bool,
	},
}

/// A token located by [`TokenSeeker::find_next`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMatch {
	/// Line the token is on.
	pub line_no: LineIdx,
	/// The matching token.
	pub token: Token,
	/// Index of the token within its line.
	pub i_token: usize,
}

/// Stateful cursor over line tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenSeeker {
	line_no: LineIdx,
	tokens: Vec<Token>,
	i_token: usize,
	loaded: bool,
}

impl TokenSeeker {
	/// Creates a seeker with no line loaded.
	pub fn new() -> Self {
		Self::default()
	}

	/// Current line.
	pub fn line_no(&self) -> LineIdx {
		self.line_no
	}

	/// Tokens of the current line.
	pub fn line_tokens(&self) -> &[Token] {
		&self.tokens
	}

	/// Index of the current token.
	pub fn i_token(&self) -> usize {
		self.i_token
	}

	/// The current token, or `None` once the line is exhausted.
	pub fn current(&self) -> Option<&Token> {
		self.tokens.get(self.i_token)
	}

	/// Loads `line` and points at its first token.
	pub fn reset(&mut self, host: &dyn FoldHost, line: LineIdx) {
		self.load(host, line);
		self.seek_ch(0);
	}

	/// Moves to `ch` on `line`, loading the line if it is not current.
	pub fn set_pos(&mut self, host: &dyn FoldHost, line: LineIdx, ch: ColIdx) {
		if !self.loaded || line != self.line_no {
			self.load(host, line);
		}
		self.seek_ch(ch);
	}

	/// Moves to `ch` on the current line.
	pub fn set_ch(&mut self, ch: ColIdx) {
		self.seek_ch(ch);
	}

	/// Steps past the current token.
	pub fn advance(&mut self) {
		if self.i_token < self.tokens.len() {
			self.i_token += 1;
		}
	}

	fn load(&mut self, host: &dyn FoldHost, line: LineIdx) {
		self.line_no = line;
		self.tokens = host.line_tokens(line);
		self.i_token = 0;
		self.loaded = true;
	}

	/// Advances `i_token` to the first token ending after `ch`.
	fn seek_ch(&mut self, ch: ColIdx) {
		while self.i_token < self.tokens.len() && self.tokens[self.i_token].end <= ch {
			self.i_token += 1;
		}
	}

	/// Finds the next token satisfying `condition` without moving the seeker.
	///
	/// Returns `None` when nothing matches before the end of the line, or
	/// before the end of the document when spanning lines.
	pub fn find_next(&self, host: &dyn FoldHost, condition: TokenCondition<'_>, from: SeekFrom) -> Option<TokenMatch> {
		let mut i_token = self.i_token + 1;
		let mut span_lines = false;
		let mut since = None;

		match from {
			SeekFrom::Next => {}
			SeekFrom::Index(i) => i_token = i,
			SeekFrom::Spanning => span_lines = true,
			SeekFrom::Since { since: pos, span_lines: span } => {
				since = Some(pos);
				span_lines = span;
			}
		}

		if let Some(pos) = since {
			if pos.line > self.line_no {
				i_token = self.tokens.len();
			} else if pos.line == self.line_no {
				i_token = first_at_or_after(&self.tokens, i_token, pos.ch);
			}
		}

		if let Some(found) = scan(&self.tokens, i_token, condition) {
			return Some(TokenMatch {
				line_no: self.line_no,
				token: self.tokens[found].clone(),
				i_token: found,
			});
		}

		if !span_lines {
			return None;
		}

		let start_line = since.map_or(0, |pos| pos.line).max(self.line_no + 1);
		for line_no in start_line..=host.last_line() {
			let tokens = host.line_tokens(line_no);
			let start = match since {
				Some(pos) if pos.line == line_no => first_at_or_after(&tokens, 0, pos.ch),
				_ => 0,
			};
			if let Some(found) = scan(&tokens, start, condition) {
				return Some(TokenMatch {
					line_no,
					i_token: found,
					token: tokens.into_iter().nth(found)?,
				});
			}
		}

		None
	}
}

fn first_at_or_after(tokens: &[Token], mut i: usize, ch: ColIdx) -> usize {
	while i < tokens.len() && tokens[i].start < ch {
		i += 1;
	}
	i
}

fn scan(tokens: &[Token], start: usize, condition: TokenCondition<'_>) -> Option<usize> {
	tokens
		.get(start..)?
		.iter()
		.position(|t| condition.matches(t))
		.map(|offset| start + offset)
}
