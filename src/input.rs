use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use tracing::debug;

/// Where the analyzer text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(p) if p != Path::new("-") => Source::File(p.to_path_buf()),
            _ => Source::Stdin,
        }
    }

    /// Whether reading again may yield new text.
    pub fn can_reload(&self) -> bool {
        matches!(self, Source::File(_))
    }

    pub fn read(&self) -> io::Result<String> {
        let bytes = match self {
            Source::Stdin => {
                let mut buf = Vec::new();
                io::stdin().read_to_end(&mut buf)?;
                buf
            }
            Source::File(path) => fs::read(path)?,
        };
        Ok(decode(&bytes))
    }
}

/// Decodes text of unknown encoding. A byte order mark wins over detection.
pub fn decode(bytes: &[u8]) -> String {
    let encoding: &'static Encoding = match Encoding::for_bom(bytes) {
        Some((encoding, _)) => encoding,
        None => {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        }
    };
    let (text, encoding, had_errors) = encoding.decode(bytes);
    debug!(encoding = encoding.name(), had_errors, "decoded analyzer input");
    text.into_owned()
}
