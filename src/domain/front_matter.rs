//! Front matter encoding and decoding
//!
//! An entry is persisted as a single text record: a YAML front matter
//! block holding the metadata, followed by the body verbatim.

use crate::error::{Result, ScrawlError};
use std::collections::BTreeMap;

/// Entry metadata as stored in the front matter block.
///
/// A `BTreeMap` keeps the serialized key order deterministic, so
/// encoding the same metadata twice produces identical records.
pub type Metadata = BTreeMap<String, String>;

const FENCE: &str = "---\n";

/// Serialize metadata and body into a single record.
///
/// The body is appended after the closing fence byte-for-byte,
/// whitespace included.
pub fn encode(body: &str, metadata: &Metadata) -> Result<String> {
    let block = serde_yaml::to_string(metadata)
        .map_err(|e| ScrawlError::MalformedRecord(format!("cannot serialize front matter: {}", e)))?;
    Ok(format!("{FENCE}{block}{FENCE}{body}"))
}

/// Split a raw record back into metadata and body.
///
/// Input without an opening fence is plain text: it decodes to empty
/// metadata with the whole input as body and never fails. An opened
/// but unterminated or unparseable front matter block is a
/// `MalformedRecord` error.
pub fn decode(raw: &str) -> Result<(Metadata, String)> {
    let Some(rest) = raw.strip_prefix(FENCE) else {
        return Ok((Metadata::new(), raw.to_string()));
    };

    let (block, body) = if let Some(body) = rest.strip_prefix(FENCE) {
        // Fences with nothing between them: empty metadata
        ("", body)
    } else if let Some((block, body)) = rest.split_once("\n---\n") {
        (block, body)
    } else if let Some(block) = rest.strip_suffix("\n---") {
        // Closing fence as the last line with no trailing newline:
        // complete block, empty body
        (block, "")
    } else if rest == "---" {
        ("", "")
    } else {
        return Err(ScrawlError::MalformedRecord(
            "unterminated front matter block".to_string(),
        ));
    };

    let metadata = if block.trim().is_empty() {
        Metadata::new()
    } else {
        serde_yaml::from_str(block).map_err(|e| {
            ScrawlError::MalformedRecord(format!("cannot parse front matter: {}", e))
        })?
    };

    Ok((metadata, body.to_string()))
}
