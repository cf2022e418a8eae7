// Presentation layer: Markdown rendering and the two server-rendered views.

pub mod markdown;
pub mod views;
