//! Types and pure logic shared by the summarizer front end and server.
//!
//! - [`api`]: request and response bodies exchanged over HTTP
//! - [`input`]: classification of the user's input into text or a page URL
//! - [`reveal`]: the typewriter reveal sequence
//! - [`view`]: the front end's view state and its transitions

pub mod api;
pub mod input;
pub mod reveal;
pub mod view;

pub use api::{AppError, ErrorResponse, PageRequest, SummarizeRequest, SummaryOptions, SummaryResponse, TextRequest, read_summary};
pub use input::{InputKind, SummarizeInput};
pub use reveal::{Reveal, TYPE_DELAY, reveal_stream};
pub use view::{Phase, View, ViewEvent};
