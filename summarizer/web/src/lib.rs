mod client;

use common::{SummarizeInput, TYPE_DELAY, View, ViewEvent, reveal_stream};
use dioxus::{
	core::Task,
	logger::tracing::{Level, error, info},
	prelude::*,
};
use futures::StreamExt;
use gloo_timers::future::sleep;
use wasm_bindgen::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[wasm_bindgen]
pub fn main() {
	dioxus::logger::init(Level::DEBUG).expect("dioxus logger");
	dioxus::launch(App);
}

// Replaces the view with `step(view)` and returns the generation it ends up on.
fn transition(mut view: Signal<View>, step: impl FnOnce(View) -> View) -> u64 {
	let mut current = view.write();
	*current = step(std::mem::take(&mut *current));
	current.generation()
}

#[component]
fn App() -> Element {
	let mut input = use_signal(String::new);
	let view = use_signal(View::default);
	let mut in_flight = use_signal(|| None::<Task>);

	let on_summarize_click = move |evt: MouseEvent| {
		evt.prevent_default();
		let Some(request) = SummarizeInput::parse(&input.read()) else {
			return;
		};
		// a reveal still typing out the previous summary must not keep writing
		if let Some(previous) = in_flight.write().take() {
			previous.cancel();
		}
		let generation = transition(view, View::submit);

		let task = spawn(async move {
			match client::fetch_summary(&request).await {
				Ok(summary) => {
					info!(chars = summary.chars().count(), "summary received");
					transition(view, |v| v.apply(generation, ViewEvent::Summary(summary.clone())));
					let mut frames = std::pin::pin!(reveal_stream(summary, TYPE_DELAY, sleep));
					while let Some(frame) = frames.next().await {
						transition(view, |v| v.apply(generation, ViewEvent::Frame(frame)));
					}
				},
				Err(e) => {
					error!("summarize failed: {e}");
					transition(view, |v| v.apply(generation, ViewEvent::Failed(e)));
				},
			}
		});
		in_flight.set(Some(task));
	};

	let loading = view.read().loader_visible();
	let busy = view.read().is_busy();
	let output = view.read().output().to_owned();
	let failure = view.read().error().cloned();

	rsx! {
		document::Stylesheet { href: MAIN_CSS }
		main { class: "summarizer",
			h1 { "Summarizer" }
			textarea {
				id: "input",
				placeholder: "Paste some text, or a link starting with http:// or https://",
				value: "{input}",
				oninput: move |evt| input.set(evt.value()),
			}
			button {
				id: "summarize-button",
				disabled: loading,
				onclick: on_summarize_click,
				if loading {
					"Summarizing..."
				} else {
					"Summarize"
				}
			}
			div { class: "loader", hidden: !loading }
			if let Some(error) = failure {
				p { class: "error", "{error}" }
			}
			div { id: "summary-results", "aria-busy": "{busy}", "{output}" }
		}
	}
}
