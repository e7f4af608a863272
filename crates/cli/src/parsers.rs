use std::str::FromStr;

/// Query set given on the command line.
///
/// Backslash escapes: `\n`, `\t`, `\r`, `\0`, `\\` and `\u{XXXX}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSetArg(pub Vec<char>);

impl FromStr for CharSetArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = Vec::with_capacity(s.len());
        let mut iter = s.chars();

        while let Some(ch) = iter.next() {
            if ch != '\\' {
                chars.push(ch);
                continue;
            }
            let escaped = match iter.next() {
                Some('n') => '\n',
                Some('t') => '\t',
                Some('r') => '\r',
                Some('0') => '\0',
                Some('\\') => '\\',
                Some('u') => parse_unicode_escape(&mut iter)?,
                Some(other) => return Err(format!("Unknown escape sequence: \\{other}")),
                None => return Err("Trailing backslash in character set".to_string()),
            };
            chars.push(escaped);
        }

        Ok(Self(chars))
    }
}

fn parse_unicode_escape(iter: &mut std::str::Chars<'_>) -> Result<char, String> {
    if iter.next() != Some('{') {
        return Err("Expected '{' after \\u".to_string());
    }
    let hex: String = iter.by_ref().take_while(|&c| c != '}').collect();
    if hex.is_empty() || hex.len() > 6 {
        return Err(format!("Invalid unicode escape: \\u{{{hex}}}"));
    }
    u32::from_str_radix(&hex, 16)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| format!("Invalid unicode escape: \\u{{{hex}}}"))
}
