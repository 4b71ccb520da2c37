//! Main text of a fetched page.
//!
//! `<article>` elements win, then paragraphs, then whatever visible text the body holds.

use scraper::{ElementRef, Html, Selector};

const CANDIDATES: [&str; 3] = ["article", "p", "body"];
const HIDDEN: [&str; 4] = ["script", "style", "noscript", "template"];

pub fn main_text(html: &str) -> String {
	let document = Html::parse_document(html);
	CANDIDATES
		.iter()
		.filter_map(|candidate| Selector::parse(candidate).ok())
		.map(|selector| {
			document.select(&selector).map(visible_text).filter(|text| !text.is_empty()).collect::<Vec<_>>().join("\n")
		})
		.find(|text| !text.is_empty())
		.unwrap_or_default()
}

fn visible_text(element: ElementRef<'_>) -> String {
	let mut raw = String::new();
	for node in element.descendants() {
		let Some(text) = node.value().as_text() else { continue };
		let hidden = node.ancestors().filter_map(ElementRef::wrap).any(|el| HIDDEN.contains(&el.value().name()));
		if !hidden {
			raw.push_str(text);
			raw.push(' ');
		}
	}
	collapse_whitespace(&raw)
}

fn collapse_whitespace(text: &str) -> String {
	text.split_whitespace().collect::<Vec<_>>().join(" ")
}
