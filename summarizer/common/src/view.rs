//! View state of the summarizer page.
//!
//! The page never reads or writes the DOM to decide what to show. It owns a [`View`],
//! advances it through the pure transitions below and renders whatever the queries return.
//! Every submission bumps the generation; events tagged with an older generation are
//! dropped, so a reveal that outlives its request cannot write into a newer result.

use crate::api::AppError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
	#[default]
	Idle,
	Loading,
	/// `shown` is the byte length of the prefix currently on screen.
	Revealing {
		summary: String,
		shown: usize,
	},
	Done {
		summary: String,
	},
	Failed(AppError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
	Summary(String),
	Frame(String),
	Failed(AppError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct View {
	generation: u64,
	phase: Phase,
}

impl View {
	pub fn generation(&self) -> u64 {
		self.generation
	}

	pub fn phase(&self) -> &Phase {
		&self.phase
	}

	/// Starts a new request: shows the loader and clears any previous output.
	#[must_use]
	pub fn submit(self) -> Self {
		Self { generation: self.generation.wrapping_add(1), phase: Phase::Loading }
	}

	#[must_use]
	pub fn apply(self, generation: u64, event: ViewEvent) -> Self {
		if generation != self.generation {
			return self;
		}
		let phase = match (self.phase, event) {
			(Phase::Loading, ViewEvent::Summary(summary)) if summary.is_empty() => Phase::Done { summary },
			(Phase::Loading, ViewEvent::Summary(summary)) => Phase::Revealing { summary, shown: 0 },
			(Phase::Revealing { summary, shown }, ViewEvent::Frame(frame)) => {
				if !summary.starts_with(frame.as_str()) || frame.len() < shown {
					Phase::Revealing { summary, shown }
				} else if frame.len() == summary.len() {
					Phase::Done { summary }
				} else {
					Phase::Revealing { summary, shown: frame.len() }
				}
			},
			(Phase::Loading | Phase::Revealing { .. }, ViewEvent::Failed(error)) => Phase::Failed(error),
			(phase, _) => phase,
		};
		Self { generation: self.generation, phase }
	}

	pub fn loader_visible(&self) -> bool {
		matches!(self.phase, Phase::Loading)
	}

	pub fn is_busy(&self) -> bool {
		matches!(self.phase, Phase::Loading | Phase::Revealing { .. })
	}

	/// The part of the summary that is currently revealed.
	pub fn output(&self) -> &str {
		match &self.phase {
			Phase::Revealing { summary, shown } => &summary[..*shown],
			Phase::Done { summary } => summary,
			Phase::Idle | Phase::Loading | Phase::Failed(_) => "",
		}
	}

	pub fn error(&self) -> Option<&AppError> {
		match &self.phase {
			Phase::Failed(error) => Some(error),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::reveal::Reveal;

	fn loading() -> View {
		View::default().submit()
	}

	#[test]
	fn submit_shows_loader_and_clears_output() {
		let gen0 = loading().generation();
		let done = loading().apply(gen0, ViewEvent::Summary("ab".into()));
		let done = done.apply(gen0, ViewEvent::Frame("a".into())).apply(gen0, ViewEvent::Frame("ab".into()));
		assert_eq!(done.output(), "ab");

		let again = done.submit();
		assert!(again.loader_visible());
		assert_eq!(again.output(), "");
		assert_eq!(again.generation(), gen0 + 1);
	}

	#[test]
	fn summary_hides_loader_and_starts_empty() {
		let view = loading();
		let generation = view.generation();
		let view = view.apply(generation, ViewEvent::Summary("A fox jumps.".into()));
		assert!(!view.loader_visible());
		assert!(view.is_busy());
		assert_eq!(view.output(), "");
	}

	#[test]
	fn frames_reveal_until_done() {
		let summary = "A fox jumps.";
		let view = loading();
		let generation = view.generation();
		let mut view = view.apply(generation, ViewEvent::Summary(summary.into()));
		for frame in Reveal::new(summary) {
			view = view.apply(generation, ViewEvent::Frame(frame.to_owned()));
			assert_eq!(view.output(), frame);
		}
		assert_eq!(view.phase(), &Phase::Done { summary: summary.into() });
		assert!(!view.is_busy());
	}

	#[test]
	fn empty_summary_is_done_immediately() {
		let view = loading();
		let generation = view.generation();
		let view = view.apply(generation, ViewEvent::Summary(String::new()));
		assert_eq!(view.phase(), &Phase::Done { summary: String::new() });
	}

	#[test]
	fn stale_events_are_ignored() {
		let first = loading();
		let stale = first.generation();
		let first = first.apply(stale, ViewEvent::Summary("old summary".into()));

		let second = first.submit();
		let current = second.generation();
		let second = second.apply(current, ViewEvent::Summary("new".into()));
		let second = second.apply(stale, ViewEvent::Frame("old".into()));
		assert_eq!(second.output(), "");
		let second = second.apply(current, ViewEvent::Frame("n".into()));
		assert_eq!(second.output(), "n");
		let second = second.apply(stale, ViewEvent::Failed(AppError::Network));
		assert_eq!(second.error(), None);
	}

	#[test]
	fn frames_that_do_not_match_are_ignored() {
		let view = loading();
		let generation = view.generation();
		let view = view.apply(generation, ViewEvent::Summary("abc".into())).apply(generation, ViewEvent::Frame("ab".into()));
		let view = view.apply(generation, ViewEvent::Frame("xy".into()));
		assert_eq!(view.output(), "ab");
		let view = view.apply(generation, ViewEvent::Frame("a".into()));
		assert_eq!(view.output(), "ab");
	}

	#[test]
	fn failure_hides_loader_and_surfaces_error() {
		let view = loading();
		let generation = view.generation();
		let view = view.apply(generation, ViewEvent::Failed(AppError::Network));
		assert!(!view.loader_visible());
		assert_eq!(view.error(), Some(&AppError::Network));
		assert_eq!(view.output(), "");
	}

	#[test]
	fn events_without_a_request_do_nothing() {
		let view = View::default();
		let generation = view.generation();
		assert_eq!(view.clone().apply(generation, ViewEvent::Frame("a".into())), view);
		assert_eq!(view.clone().apply(generation, ViewEvent::Summary("a".into())), view);
	}
}
