//! JSON output.

use std::io::Write;

use voidkit_common::{Error, Result};
use voidkit_core::PartitionTree;

/// Writes the partition tree as pretty-printed JSON.
pub struct JsonSerializer;

impl JsonSerializer {
    /// Writes `tree` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] for write failures and [`Error::Serialization`]
    /// for anything serde_json rejects.
    pub fn write<W: Write>(tree: &PartitionTree, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, tree).map_err(|e| {
            if e.is_io() {
                Error::Io(e.into())
            } else {
                Error::Serialization(e.to_string())
            }
        })?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }

    /// Renders `tree` as a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Serialization`] if the tree cannot be rendered.
    pub fn to_string(tree: &PartitionTree) -> Result<String> {
        serde_json::to_string_pretty(tree).map_err(|e| Error::Serialization(e.to_string()))
    }
}
