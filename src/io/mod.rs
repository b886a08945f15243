mod html_builder;
pub use html_builder::HtmlBuilder;
