pub mod engine;
pub mod fragment;
pub mod pipeline;

pub use crate::domain::model::{HtmlDocument, PatchOutcome};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
