// crates/infra/src/dump.rs
//! Text format written by the debug instrumentation.
//!
//! A dump is a sequence of JSON objects, each followed by a comma:
//!
//! ```text
//! {
//! 	"tag":"loss",
//! 	"file":"main.cpp",
//! 	"line":212,
//! 	"data":0.25
//! },
//! ```
//!
//! The last comma is optional and whitespace between entries is ignored.

use std::fmt::{self, Write as _};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tag_grouper_domain::value_objects::{SourceLine, Tag};
use tag_grouper_shared_kernel::{InfraResult, InfrastructureError};

const FORMAT: &str = "debug dump";

/// One entry of a debug dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumpEntry {
    pub tag: Tag,
    pub file: String,
    pub line: SourceLine,
    pub data: Value,
}

impl DumpEntry {
    pub fn new(tag: impl Into<Tag>, file: impl Into<String>, line: u32, data: Value) -> Self {
        Self { tag: tag.into(), file: file.into(), line: SourceLine::new(line), data }
    }

    /// Builds an entry from any serialisable value. Used by [`debug_entry!`](crate::debug_entry).
    pub fn capture<T: Serialize + ?Sized>(tag: impl Into<Tag>, file: &str, line: u32, data: &T) -> InfraResult<Self> {
        Ok(Self::new(tag, file, line, serde_json::to_value(data)?))
    }

    /// Writes the entry in dump layout, trailing comma included.
    pub fn write_to(&self, out: &mut impl fmt::Write) -> InfraResult<()> {
        let tag = serde_json::to_string(&self.tag)?;
        let file = serde_json::to_string(&self.file)?;
        let data = serde_json::to_string(&self.data)?;
        write!(out, "{{\n\t\"tag\":{tag},\n\t\"file\":{file},\n\t\"line\":{},\n\t\"data\":{data}\n}},\n", self.line)?;
        Ok(())
    }

    pub fn into_value(self) -> InfraResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl fmt::Display for DumpEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.write_to(&mut buf).map_err(|_| fmt::Error)?;
        f.write_str(&buf)
    }
}

/// Captures the call site of a debug value as a [`DumpEntry`].
///
/// Evaluates to `InfraResult<DumpEntry>`.
#[macro_export]
macro_rules! debug_entry {
    ($tag:expr, $data:expr $(,)?) => {
        $crate::dump::DumpEntry::capture($tag, file!(), line!(), &$data)
    };
}

/// Accumulates entries into dump text.
#[derive(Debug, Default)]
pub struct DumpWriter {
    buf: String,
}

impl DumpWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: &DumpEntry) -> InfraResult<()> {
        entry.write_to(&mut self.buf)
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

/// Parses dump text into raw JSON values, one per entry.
///
/// Entries are not validated here; shape checks belong to the grouping step.
pub fn parse_dump(text: &str) -> InfraResult<Vec<Value>> {
    let mut entries = Vec::new();
    let mut rest = text.trim_start();

    while !rest.is_empty() {
        let mut stream = serde_json::Deserializer::from_str(rest).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value)) => entries.push(value),
            Some(Err(err)) => return Err(syntax_error(entries.len(), &err.to_string())),
            None => break,
        }
        rest = rest[stream.byte_offset()..].trim_start();

        match rest.strip_prefix(',') {
            Some(tail) => rest = tail.trim_start(),
            None if rest.is_empty() => break,
            None => return Err(syntax_error(entries.len(), "expected ',' between entries")),
        }
    }

    Ok(entries)
}

fn syntax_error(entry: usize, details: &str) -> InfrastructureError {
    InfrastructureError::SerializationError {
        format: FORMAT.to_string(),
        details: format!("entry #{entry}: {details}"),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    const SAMPLE: &str = "{\n\t\"tag\":\"loss\",\n\t\"file\":\"main.cpp\",\n\t\"line\":212,\n\t\"data\":0.25\n},\n{\n\t\"tag\":\"w\",\n\t\"file\":\"layers.h\",\n\t\"line\":40,\n\t\"data\":[1,2,3]\n},\n";

    #[test]
    fn parses_entries_with_trailing_comma() {
        let entries = parse_dump(SAMPLE).expect("parses");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["tag"], json!("loss"));
        assert_eq!(entries[1]["data"], json!([1, 2, 3]));
    }

    #[test]
    fn trailing_comma_is_optional() {
        let entries = parse_dump(r#"{"tag":"a","data":1}, {"tag":"b","data":2}"#).expect("parses");
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn blank_text_is_an_empty_dump() {
        assert!(parse_dump("").expect("parses").is_empty());
        assert!(parse_dump(" \n\t ").expect("parses").is_empty());
    }

    #[test]
    fn missing_separator_names_the_entry() {
        let err = parse_dump(r#"{"tag":"a","data":1} {"tag":"b","data":2}"#).unwrap_err();
        let InfrastructureError::SerializationError { format, details } = err else {
            panic!("expected SerializationError");
        };
        assert_eq!(format, "debug dump");
        assert!(details.starts_with("entry #1"), "{details}");
    }

    #[test]
    fn truncated_entry_is_an_error() {
        let err = parse_dump("{\"tag\":\"a\",\n\t\"data\":").unwrap_err();
        assert!(err.to_string().contains("entry #0"));
    }

    #[test]
    fn writes_the_instrumentation_layout() {
        let entry = DumpEntry::new("loss", "main.cpp", 212, json!(0.25));
        let mut out = String::new();
        entry.write_to(&mut out).expect("writes");
        assert_eq!(out, "{\n\t\"tag\":\"loss\",\n\t\"file\":\"main.cpp\",\n\t\"line\":212,\n\t\"data\":0.25\n},\n");
    }

    #[test]
    fn non_string_tags_are_written_as_json_literals() {
        let mut writer = DumpWriter::new();
        writer.push(&DumpEntry::new(3i64, "main.cpp", 5, json!("x"))).expect("writes");
        writer.push(&DumpEntry::new(Tag::Null, "main.cpp", 6, json!("y"))).expect("writes");
        let text = writer.finish();
        assert!(text.contains("\"tag\":3,"), "{text}");
        let parsed = parse_dump(&text).expect("parses");
        assert_eq!(parsed[0]["tag"], json!(3));
        assert_eq!(parsed[1]["tag"], Value::Null);
    }

    #[test]
    fn escapes_tag_and_file() {
        let entry = DumpEntry::new("say \"hi\"", "dir\\f.h", 1, Value::Null);
        let text = entry.to_string();
        assert!(text.contains(r#""tag":"say \"hi\"""#));
        let parsed = parse_dump(&text).expect("parses");
        assert_eq!(parsed[0]["tag"], json!("say \"hi\""));
        assert_eq!(parsed[0]["file"], json!("dir\\f.h"));
    }

    #[test]
    fn macro_records_call_site() {
        let entry = crate::debug_entry!("shape", [28, 28]).expect("captures");
        assert_eq!(entry.tag, Tag::from("shape"));
        assert!(entry.file.ends_with("dump.rs"));
        assert!(entry.line.value() > 0);
        assert_eq!(entry.data, json!([28, 28]));
    }

    #[test]
    fn writer_output_parses_back_in_order() {
        let mut writer = DumpWriter::new();
        for (i, tag) in ["a", "b", "a"].into_iter().enumerate() {
            writer.push(&DumpEntry::new(tag, "t.rs", 1, json!(i))).expect("writes");
        }
        let parsed = parse_dump(&writer.finish()).expect("parses");
        let tags: Vec<_> = parsed.iter().map(|v| v["tag"].clone()).collect();
        assert_eq!(tags, vec![json!("a"), json!("b"), json!("a")]);
    }
}
