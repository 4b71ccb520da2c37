//! Typewriter reveal of a summary.
//!
//! [`Reveal`] is the synchronous core: it walks a string one `char` at a time and yields
//! every prefix up to and including the full string. [`reveal_stream`] paces those prefixes
//! with an injected sleep so the caller decides which timer backs it (`gloo-timers` in the
//! browser, an immediately ready future in tests). Dropping the stream stops the reveal.

use futures::{Stream, StreamExt, stream};
use std::{future::Future, str::CharIndices, time::Duration};

/// Delay between two revealed characters.
pub const TYPE_DELAY: Duration = Duration::from_millis(50);

#[derive(Debug, Clone)]
pub struct Reveal<'a> {
	text: &'a str,
	chars: CharIndices<'a>,
}

impl<'a> Reveal<'a> {
	pub fn new(text: &'a str) -> Self {
		Self { text, chars: text.char_indices() }
	}
}

impl<'a> Iterator for Reveal<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		let (start, ch) = self.chars.next()?;
		Some(&self.text[..start + ch.len_utf8()])
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		self.chars.size_hint()
	}
}

/// One owned prefix per tick, each emitted after `sleep(delay)` resolves.
pub fn reveal_stream<S, F>(text: String, delay: Duration, sleep: S) -> impl Stream<Item = String>
where
	S: Fn(Duration) -> F,
	F: Future<Output = ()>,
{
	let ends: Vec<usize> = Reveal::new(&text).map(str::len).collect();
	stream::iter(ends).then(move |end| {
		let frame = text[..end].to_owned();
		let pause = sleep(delay);
		async move {
			pause.await;
			frame
		}
	})
}
