use std::sync::OnceLock;

/// Describes the type of a line in a markdown file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MdLineType<'a> {
    /// An empty line or one consisting only of whitespace.
    Blank,
    /// A line containing a heading of the given level (1 to 6) and its text.
    Heading { level: u8, text: &'a str },
    /// A line starting with `- `, carrying the rest of the line.
    UnorderedItem(&'a str),
    /// A line starting with `* `, carrying the rest of the line.
    OrderedItem(&'a str),
    /// A line containing just running text.
    Text(&'a str),
}

fn heading_regex() -> &'static regex::Regex {
    static HEADING: OnceLock<regex::Regex> = OnceLock::new();
    HEADING.get_or_init(|| {
        regex::Regex::new(r"^(#{1,6}) (.*)$").expect("Static regex ill-formed.")
    })
}

impl<'a> MdLineType<'a> {
    /// Takes a line and returns the type of markdown block it belongs to.
    /// Does not consider context, so every non-special line is recognized as 'Text' even if it continues a paragraph.
    /// Heading text is trimmed of surrounding whitespace, item and paragraph text is carried unchanged.
    pub fn recognize_line(line: &'a str) -> Self {
        // Nothing but whitespace
        if line.trim().is_empty() {
            return MdLineType::Blank;
        }

        // Heading line: 1 to 6 `#` followed by a space. More `#` or a missing space make it text.
        if let Some(caps) = heading_regex().captures(line) {
            if let (Some(hashes), Some(text)) = (caps.get(1), caps.get(2)) {
                return MdLineType::Heading {
                    level: hashes.len() as u8,
                    text: text.as_str().trim(),
                };
            }
        }

        if let Some(rest) = line.strip_prefix("- ") {
            return MdLineType::UnorderedItem(rest);
        }

        if let Some(rest) = line.strip_prefix("* ") {
            return MdLineType::OrderedItem(rest);
        }

        // Everything else: running text
        MdLineType::Text(line)
    }
}

#[cfg(test)]
mod tests {
    use super::MdLineType;

    #[test]
    fn test_headings() {
        for level in 1..=6u8 {
            let line = format!("{} text", "#".repeat(level as usize));
            assert_eq!(
                MdLineType::recognize_line(&line),
                MdLineType::Heading { level, text: "text" }
            );
        }
        assert_eq!(
            MdLineType::recognize_line("##   spaced out  "),
            MdLineType::Heading {
                level: 2,
                text: "spaced out"
            }
        );
        assert_eq!(
            MdLineType::recognize_line("# "),
            MdLineType::Heading { level: 1, text: "" }
        );
    }

    #[test]
    fn test_not_headings() {
        assert_eq!(
            MdLineType::recognize_line("####### seven"),
            MdLineType::Text("####### seven")
        );
        assert_eq!(
            MdLineType::recognize_line("#hashtag"),
            MdLineType::Text("#hashtag")
        );
        assert_eq!(
            MdLineType::recognize_line(" # indented"),
            MdLineType::Text(" # indented")
        );
    }

    #[test]
    fn test_list_markers() {
        assert_eq!(
            MdLineType::recognize_line("- item"),
            MdLineType::UnorderedItem("item")
        );
        assert_eq!(
            MdLineType::recognize_line("- "),
            MdLineType::UnorderedItem("")
        );
        assert_eq!(
            MdLineType::recognize_line("* item"),
            MdLineType::OrderedItem("item")
        );
        assert_eq!(MdLineType::recognize_line("-item"), MdLineType::Text("-item"));
        assert_eq!(
            MdLineType::recognize_line("**bold**"),
            MdLineType::Text("**bold**")
        );
    }

    #[test]
    fn test_item_and_text_whitespace_kept() {
        assert_eq!(
            MdLineType::recognize_line("-   a  "),
            MdLineType::UnorderedItem("  a  ")
        );
        assert_eq!(
            MdLineType::recognize_line("*  b"),
            MdLineType::OrderedItem(" b")
        );
        assert_eq!(
            MdLineType::recognize_line("   bar "),
            MdLineType::Text("   bar ")
        );
    }

    #[test]
    fn test_blank() {
        assert_eq!(MdLineType::recognize_line(""), MdLineType::Blank);
        assert_eq!(MdLineType::recognize_line("  \t "), MdLineType::Blank);
    }
}
