use crate::core::TermSink;
use crate::utils::error::{ExtractError, Result};
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `["ipo", "job postings"]`
    #[default]
    Debug,
    Json,
    Lines,
}

impl OutputFormat {
    pub const NAMES: &'static [&'static str] = &["debug", "json", "lines"];

    pub fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "debug" => Ok(OutputFormat::Debug),
            "json" => Ok(OutputFormat::Json),
            "lines" => Ok(OutputFormat::Lines),
            _ => Err(ExtractError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: name.to_string(),
                reason: format!("Must be one of: {}", Self::NAMES.join(", ")),
            }),
        }
    }
}

pub fn render(terms: &[String], format: OutputFormat, pretty: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Debug => format!("{:?}", terms),
        OutputFormat::Json if pretty => serde_json::to_string_pretty(terms)?,
        OutputFormat::Json => serde_json::to_string(terms)?,
        OutputFormat::Lines => terms.join("\n"),
    };
    Ok(rendered)
}

pub struct WriterSink<W: Write> {
    writer: W,
    format: OutputFormat,
    pretty: bool,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer,
            format,
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(std::io::stdout(), format)
    }
}

impl<W: Write> TermSink for WriterSink<W> {
    fn emit(&mut self, terms: &[String]) -> Result<()> {
        let rendered = render(terms, self.format, self.pretty)?;
        tracing::debug!("Writing {} terms as {:?}", terms.len(), self.format);

        // 單次寫入整份輸出
        let mut buffer = rendered.into_bytes();
        if !terms.is_empty() || self.format != OutputFormat::Lines {
            buffer.push(b'\n');
        }
        self.writer.write_all(&buffer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_terms() -> Vec<String> {
        vec!["ipo".to_string(), "fsi sandbox, kaffeine".to_string()]
    }

    #[test]
    fn test_render_debug() {
        let rendered = render(&sample_terms(), OutputFormat::Debug, false).unwrap();
        assert_eq!(rendered, r#"["ipo", "fsi sandbox, kaffeine"]"#);
        assert_eq!(render(&[], OutputFormat::Debug, false).unwrap(), "[]");
    }

    #[test]
    fn test_render_json() {
        let rendered = render(&sample_terms(), OutputFormat::Json, false).unwrap();
        assert_eq!(rendered, r#"["ipo","fsi sandbox, kaffeine"]"#);

        let pretty = render(&sample_terms(), OutputFormat::Json, true).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&pretty).unwrap();
        assert_eq!(parsed, sample_terms());
        assert!(pretty.contains('\n'));
    }

    #[test]
    fn test_writer_sink_lines() {
        let mut sink = WriterSink::new(Vec::new(), OutputFormat::Lines);
        sink.emit(&sample_terms()).unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(output, "ipo\nfsi sandbox, kaffeine\n");
    }

    #[test]
    fn test_writer_sink_lines_empty() {
        let mut sink = WriterSink::new(Vec::new(), OutputFormat::Lines);
        sink.emit(&[]).unwrap();
        assert!(sink.into_inner().is_empty());
    }

    #[test]
    fn test_writer_sink_lines_keeps_blank_term() {
        let mut sink = WriterSink::new(Vec::new(), OutputFormat::Lines);
        sink.emit(&["".to_string()]).unwrap();
        assert_eq!(sink.into_inner(), b"\n");
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("yaml").is_err());
    }
}
