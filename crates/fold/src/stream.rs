use mdfold_primitives::{LineIdx, TextRange, Token};

use crate::arbiter::{RequestRangeResult, request_range};
use crate::hint::QuickFoldHint;
use crate::host::FoldHost;
use crate::seeker::{SeekFrom, TokenCondition, TokenMatch, TokenSeeker};

/// What a folder sees while the engine walks a line.
///
/// Read access to the seeker and host, plus [`FoldStream::request_range`].
/// Nothing here can move the seeker.
pub struct FoldStream<'a> {
	host: &'a dyn FoldHost,
	seeker: &'a TokenSeeker,
	hints: &'a mut QuickFoldHint,
}

impl<'a> FoldStream<'a> {
	pub(crate) fn new(host: &'a dyn FoldHost, seeker: &'a TokenSeeker, hints: &'a mut QuickFoldHint) -> Self {
		Self { host, seeker, hints }
	}

	/// The editing host.
	pub fn host(&self) -> &dyn FoldHost {
		self.host
	}

	/// Line being scanned.
	pub fn line_no(&self) -> LineIdx {
		self.seeker.line_no()
	}

	/// Tokens of the line being scanned.
	pub fn line_tokens(&self) -> &[Token] {
		self.seeker.line_tokens()
	}

	/// Index of the token being offered to folders.
	pub fn i_token(&self) -> usize {
		self.seeker.i_token()
	}

	/// The token before the current one on this line.
	pub fn prev_token(&self) -> Option<&Token> {
		self.seeker.i_token().checked_sub(1).and_then(|i| self.line_tokens().get(i))
	}

	/// See [`TokenSeeker::find_next`].
	pub fn find_next(&self, condition: TokenCondition<'_>, from: SeekFrom) -> Option<TokenMatch> {
		self.seeker.find_next(self.host, condition, from)
	}

	/// Asks whether `range` may be folded. See [`crate::arbiter::request_range`].
	pub fn request_range(&mut self, range: TextRange) -> RequestRangeResult {
		request_range(self.host, range, self.hints)
	}
}
