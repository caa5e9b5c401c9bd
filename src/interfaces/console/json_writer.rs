use crate::error::Result;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::io::Write;

const INDENT: &[u8] = b"    ";

/// Writes JSON values for a human reader: keys sorted at every level, four
/// spaces per nesting level, one trailing newline.
pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_value(&mut self, value: &Value) -> Result<()> {
        let sorted = sort_keys(value);
        {
            let formatter = PrettyFormatter::with_indent(INDENT);
            let mut serializer = serde_json::Serializer::with_formatter(&mut self.writer, formatter);
            sorted.serialize(&mut serializer)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Rebuilds `value` with object keys in lexicographic order.
///
/// Does not rely on `serde_json::Map` being ordered, which changes when the
/// `preserve_order` feature is enabled anywhere in the build.
pub fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let sorted: Map<String, Value> = entries
                .into_iter()
                .map(|(k, v)| (k.clone(), sort_keys(v)))
                .collect();
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}
