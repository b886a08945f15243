use std::{fs, io::Write, path};

use crate::{error, parser};

/// Struct that keeps configuration details for the creation of HTML files from markdown files.
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    /// The converter used for every file.
    converter: parser::Converter,
}

impl HtmlBuilder {
    pub fn new(config: &crate::Config) -> Self {
        Self {
            converter: parser::Converter::new(config),
        }
    }

    /// Reads the markdown file at `input`, converts it and writes the result to `output`.
    /// An existing output file is overwritten.
    pub fn create_html(&self, input: &path::Path, output: &path::Path) -> error::Result<()> {
        if !input.exists() {
            return Err(error::ConvertError::MissingInput(input.to_path_buf()));
        }

        // Read content of markdown(plaintext) file
        let content = fs::read_to_string(input).map_err(error::ConvertError::InputRead)?;
        log::info!("Read {} bytes from {}", content.len(), input.display());

        let document = self.converter.convert_str(&content);
        log::debug!("Emitted {} fragments", document.fragments().len());
        let html = document.to_html();

        // get file (creates it if it doesn't exist, truncates it otherwise)
        let mut tar_file = fs::File::create(output).map_err(error::ConvertError::OutputIo)?;
        tar_file
            .write_all(html.as_bytes())
            .map_err(error::ConvertError::OutputIo)?;

        log::info!("Wrote {} bytes to {}", html.len(), output.display());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use crate::error::ConvertError;

    #[test]
    fn test_create_html_creates_files() {
        let tmp = testdir::testdir!();
        let md = tmp.join("README.md");
        let html = tmp.join("README.html");

        fs::write(&md, "# Title\n\n- one\n- two\n\nHello\n**World**\n").unwrap();

        assert!(!html.exists());

        super::HtmlBuilder::default().create_html(&md, &html).unwrap();

        assert_eq!(
            fs::read_to_string(&html).unwrap(),
            "<h1>Title</h1>\n<ul>\n<li>one</li>\n<li>two</li>\n</ul>\n<p>\nHello\n<br/>\n<b>World</b>\n</p>"
        );
    }

    #[test]
    fn test_create_html_overwrites() {
        let tmp = testdir::testdir!();
        let md = tmp.join("in.md");
        let html = tmp.join("out.html");

        fs::write(&md, "* x\n").unwrap();
        fs::write(&html, "some much longer previous content of the output file").unwrap();

        super::HtmlBuilder::default().create_html(&md, &html).unwrap();

        assert_eq!(
            fs::read_to_string(&html).unwrap(),
            "<ol>\n<li>x</li>\n</ol>"
        );
    }

    #[test]
    fn test_missing_input() {
        let tmp = testdir::testdir!();
        let md = tmp.join("nope.md");
        let html = tmp.join("nope.html");

        let err = super::HtmlBuilder::default()
            .create_html(&md, &html)
            .unwrap_err();

        assert!(matches!(err, ConvertError::MissingInput(ref p) if p == &md));
        assert_eq!(err.to_string(), format!("Missing {}", md.display()));
        assert!(!html.exists());
    }

    #[test]
    fn test_unwritable_output() {
        let tmp = testdir::testdir!();
        let md = tmp.join("in.md");
        fs::write(&md, "text").unwrap();

        // a directory cannot be opened as a file
        let err = super::HtmlBuilder::default()
            .create_html(&md, &tmp)
            .unwrap_err();

        assert!(matches!(err, ConvertError::OutputIo(_)));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_config_reaches_converter() {
        let tmp = testdir::testdir!();
        let md = tmp.join("code.md");
        let html = tmp.join("code.html");
        fs::write(&md, "run `make`").unwrap();

        let config = crate::Config {
            code_spans: true,
            ..Default::default()
        };
        super::HtmlBuilder::new(&config).create_html(&md, &html).unwrap();

        assert_eq!(
            fs::read_to_string(&html).unwrap(),
            "<p>\nrun <code>make</code>\n</p>"
        );
    }
}
