mod md_block;
pub use md_block::MdBlock;

mod md_line_type;
pub use md_line_type::MdLineType;

mod inline_rule;
pub use inline_rule::InlineRule;

mod inline;
pub use inline::InlineTransformer;

/// The ordered HTML fragments produced by one conversion.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    fragments: Vec<String>,
}

impl Document {
    fn push(&mut self, fragment: impl Into<String>) {
        self.fragments.push(fragment.into());
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Joins all fragments, one per line.
    pub fn to_html(&self) -> String {
        self.fragments.join("\n")
    }
}

/// Converts markdown to HTML with a fixed set of options.
/// Holds no state between conversions, so one converter can be reused for any number of documents.
#[derive(Debug)]
pub struct Converter {
    inline: InlineTransformer,
    soft_break: String,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(&crate::Config::default())
    }
}

impl Converter {
    pub fn new(config: &crate::Config) -> Self {
        let inline = InlineTransformer::new(config);
        log::debug!("Inline rules: {:?}", inline.rule_names());
        Self {
            inline,
            soft_break: config.soft_break.clone(),
        }
    }

    /// Runs the block state machine over the given lines in order.
    pub fn convert<'a>(&self, lines: impl IntoIterator<Item = &'a str>) -> Document {
        let mut machine = BlockMachine::new(self);
        for line in lines {
            machine.feed(line);
        }
        machine.finish()
    }

    /// Splits the text into lines (dropping line terminators) and converts them.
    pub fn convert_str(&self, markdown: &str) -> Document {
        self.convert(markdown.lines())
    }
}

/// The state of a single conversion: the currently open block and everything emitted so far.
struct BlockMachine<'c> {
    converter: &'c Converter,
    open: Option<MdBlock>,
    document: Document,
}

impl<'c> BlockMachine<'c> {
    fn new(converter: &'c Converter) -> Self {
        Self {
            converter,
            open: None,
            document: Document::default(),
        }
    }

    fn feed(&mut self, line: &str) {
        let line_type = MdLineType::recognize_line(line);
        log::trace!("{line_type:?}");

        match line_type {
            MdLineType::Blank => self.close_block(),
            MdLineType::Heading { level, text } => {
                self.close_block();
                let text = self.converter.inline.transform(text);
                self.document.push(md_block::heading(level, &text));
            }
            MdLineType::UnorderedItem(text) => self.list_item(MdBlock::UnorderedList, text),
            MdLineType::OrderedItem(text) => self.list_item(MdBlock::OrderedList, text),
            MdLineType::Text(text) => {
                if self.open == Some(MdBlock::Paragraph) {
                    self.document.push(self.converter.soft_break.as_str());
                } else {
                    self.close_block();
                    self.open_block(MdBlock::Paragraph);
                }
                self.document.push(self.converter.inline.transform(text));
            }
        }
    }

    /// Appends an item to a list of the given kind, opening that list first unless it is already the open block.
    fn list_item(&mut self, kind: MdBlock, text: &str) {
        if self.open != Some(kind) {
            self.close_block();
            self.open_block(kind);
        }
        let text = self.converter.inline.transform(text);
        self.document.push(md_block::list_item(&text));
    }

    fn open_block(&mut self, block: MdBlock) {
        log::debug!("Opening {block:?}");
        self.document.push(block.open_tag());
        self.open = Some(block);
    }

    fn close_block(&mut self) {
        if let Some(block) = self.open.take() {
            log::debug!("Closing {block:?}");
            self.document.push(block.close_tag());
        }
    }

    fn finish(mut self) -> Document {
        self.close_block();
        self.document
    }
}
