use super::InlineRule;

/// Applies the inline rules in their fixed order to a single fragment of text.
/// Digest and elision run first, so markers inside their spans are hashed or kept as literal text instead of being rendered.
#[derive(Debug)]
pub struct InlineTransformer {
    rules: Vec<InlineRule>,
}

impl Default for InlineTransformer {
    fn default() -> Self {
        Self::new(&crate::Config::default())
    }
}

impl InlineTransformer {
    pub fn new(config: &crate::Config) -> Self {
        let mut rules = vec![
            InlineRule::create_digest_rule(),
            InlineRule::create_elision_rule(),
            InlineRule::create_double_star_rule(),
            InlineRule::create_double_underscore_rule(),
        ];

        if config.code_spans {
            rules.push(InlineRule::create_code_rule());
        }

        Self { rules }
    }

    /// Transforms one heading text, list item or paragraph line.
    /// Never fails: malformed delimiters are left in the output unchanged.
    pub fn transform(&self, fragment: &str) -> String {
        self.rules
            .iter()
            .fold(fragment.to_owned(), |text, rule| rule.apply(&text))
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(InlineRule::name).collect()
    }
}
