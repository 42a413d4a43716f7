/// Physical package writer: the ZIP container underneath an OPC package.
use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};

use crate::common::Result;
use crate::ooxml::opc::packuri::PackURI;

/// Writes package items into an in-memory ZIP archive.
///
/// Every member is Deflate-compressed and stamped with the same fixed
/// modification time, so writing the same items twice gives identical bytes.
pub struct PhysPkgWriter {
    archive: ZipWriter<Cursor<Vec<u8>>>,
    options: SimpleFileOptions,
}

impl PhysPkgWriter {
    /// Create a new package writer that writes to memory.
    pub fn new() -> Self {
        Self {
            archive: ZipWriter::new(Cursor::new(Vec::new())),
            options: SimpleFileOptions::default()
                .compression_method(zip::CompressionMethod::Deflated)
                .last_modified_time(zip::DateTime::default()),
        }
    }

    /// Write a package item under the membername of `pack_uri`.
    pub fn write(&mut self, pack_uri: &PackURI, blob: &[u8]) -> Result<()> {
        self.archive.start_file(pack_uri.membername(), self.options)?;
        self.archive.write_all(blob)?;
        Ok(())
    }

    /// Finish writing and return the package bytes.
    pub fn finish(self) -> Result<Vec<u8>> {
        Ok(self.archive.finish()?.into_inner())
    }
}

impl Default for PhysPkgWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn test_members_in_write_order() {
        let mut writer = PhysPkgWriter::new();
        let content_types = PackURI::new("/[Content_Types].xml").unwrap();
        let document = PackURI::new("/word/document.xml").unwrap();
        writer.write(&content_types, b"<Types/>").unwrap();
        writer.write(&document, b"<document/>").unwrap();
        let bytes = writer.finish().unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "[Content_Types].xml");

        let mut content = String::new();
        archive
            .by_name("word/document.xml")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "<document/>");
    }

    #[test]
    fn test_output_is_reproducible() {
        let build = || {
            let mut writer = PhysPkgWriter::new();
            writer
                .write(&PackURI::new("/a.xml").unwrap(), b"<a/>")
                .unwrap();
            writer.finish().unwrap()
        };
        assert_eq!(build(), build());
    }
}
