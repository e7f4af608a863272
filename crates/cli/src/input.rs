use std::io::Read;

use crate::error::{AppError, Result};
use crate::options::SubjectSource;

/// Loads the subject text. `Ok(None)` means no source was given.
///
/// # Errors
///
/// Returns an error when the file or stdin cannot be read as UTF-8.
pub fn load_subject(source: &SubjectSource, trim_newline: bool) -> Result<Option<String>> {
    let text = match source {
        SubjectSource::Missing => return Ok(None),
        SubjectSource::Inline(text) => return Ok(Some(text.clone())),
        SubjectSource::File(path) => {
            log::debug!("reading subject from {}", path.display());
            std::fs::read_to_string(path).map_err(|source| AppError::FileRead {
                path: path.clone(),
                source,
            })?
        }
        SubjectSource::Stdin => {
            log::debug!("reading subject from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    Ok(Some(if trim_newline { strip_trailing_newline(text) } else { text }))
}

fn strip_trailing_newline(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}
