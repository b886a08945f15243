/// A block that stays open across multiple lines.
/// Headings are emitted in one piece and therefore never become an `MdBlock`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MdBlock {
    /// A list started by `- ` lines, rendered as `<ul>`.
    UnorderedList,
    /// A list started by `* ` lines, rendered as `<ol>`.
    OrderedList,
    /// Consecutive lines of running text, rendered as `<p>`.
    Paragraph,
}

impl MdBlock {
    pub fn open_tag(&self) -> &'static str {
        match self {
            MdBlock::UnorderedList => "<ul>",
            MdBlock::OrderedList => "<ol>",
            MdBlock::Paragraph => "<p>",
        }
    }

    pub fn close_tag(&self) -> &'static str {
        match self {
            MdBlock::UnorderedList => "</ul>",
            MdBlock::OrderedList => "</ol>",
            MdBlock::Paragraph => "</p>",
        }
    }
}

/// Wraps already transformed heading text of the given level.
pub fn heading(level: u8, text: &str) -> String {
    format!("<h{level}>{text}</h{level}>")
}

/// Wraps already transformed text as a single list item.
pub fn list_item(text: &str) -> String {
    format!("<li>{text}</li>")
}
