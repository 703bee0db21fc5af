//! # Presentation Layer
//!
//! Console output follows one direction:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!    (Controller)      (Converter)       (Data)          (Driver)  ==(Text)==> [ View ] --> Output
//! ```
//!
//! ## Rules
//!
//! * **View models hold data, not layout.** They implement `Serialize`, and
//!   `--format json` dumps them whole. Badge colors stay as the stored CSS
//!   strings; turning them into terminal colors is the view's job.
//! * **Presenters decide what to say.** Status badges and follow-up tips are
//!   chosen there, never in views.
//! * **Views decide how it looks.** Padding, tables and colors live in
//!   `views/` and `formatters/`.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel};
