use md5::{Digest, Md5};

/// A single inline substitution (digest, bold, emphasis, etc.).
/// Recognizes its delimited spans with a regex and converts the enclosed text of each.
pub struct InlineRule {
    name: &'static str,
    regex: regex::Regex,
    converter: Box<dyn Fn(&str) -> String + Send + Sync>,
}

impl std::fmt::Debug for InlineRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InlineRule")
            .field("name", &self.name)
            .field("regex", &self.regex.as_str())
            .finish()
    }
}

impl InlineRule {
    /// Creates a new rule with the specified regex and converter.
    /// The regex is expected to have exactly one capture group containing the enclosed text.
    fn new<F>(name: &'static str, regex: &str, converter: F) -> Self
    where
        F: 'static + Fn(&str) -> String + Send + Sync,
    {
        Self {
            name,
            regex: regex::Regex::new(regex).expect("Static regex ill-formed."),
            converter: Box::new(converter),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Replaces every span this rule recognizes by the converted enclosed text.
    /// Spans are matched shortest first and never overlap, unmatched delimiters stay as they are.
    pub fn apply(&self, content: &str) -> String {
        self.regex
            .replace_all(content, |caps: &regex::Captures| {
                (self.converter)(caps.get(1).map_or("", |m| m.as_str()))
            })
            .into_owned()
    }

    /// Creates a rule replacing text in double brackets by the hex MD5 digest of its bytes.
    pub fn create_digest_rule() -> Self {
        Self::new("digest", r"\[\[(.*?)\]\]", |inner| {
            format!("{:x}", Md5::digest(inner.as_bytes()))
        })
    }

    /// Creates a rule removing every `c` and `C` from text in double parentheses.
    pub fn create_elision_rule() -> Self {
        Self::new("elision", r"\(\((.*?)\)\)", |inner| {
            inner.chars().filter(|c| !matches!(c, 'c' | 'C')).collect()
        })
    }

    /// Creates a rule recognizing text in double stars.
    pub fn create_double_star_rule() -> Self {
        Self::new("strong", r"\*\*(.*?)\*\*", |inner| format!("<b>{inner}</b>"))
    }

    /// Creates a rule recognizing text in double underscores.
    pub fn create_double_underscore_rule() -> Self {
        Self::new("emphasis", r"__(.*?)__", |inner| format!("<em>{inner}</em>"))
    }

    /// Creates a rule recognizing text in backticks.
    pub fn create_code_rule() -> Self {
        Self::new("code", r"`(.*?)`", |inner| format!("<code>{inner}</code>"))
    }
}
