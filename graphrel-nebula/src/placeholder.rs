use std::str::CharIndices;

/// Byte offsets of the `?` placeholders of a query.
///
/// A `?` inside a double quoted literal is text, not a placeholder. Inside a
/// literal a backslash escapes the next character, so `\"` does not close it.
/// Single quotes have no special meaning.
#[derive(Debug, Clone)]
pub struct Placeholders<'a> {
    chars: CharIndices<'a>,
    quoted: bool,
}

impl<'a> Placeholders<'a> {
    pub fn new(query: &'a str) -> Self {
        Self {
            chars: query.char_indices(),
            quoted: false,
        }
    }
}

impl<'a> Iterator for Placeholders<'a> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (i, c) = self.chars.next()?;
            match c {
                '"' => self.quoted = !self.quoted,
                '\\' if self.quoted => {
                    self.chars.next();
                }
                '?' if !self.quoted => return Some(i),
                _ => {}
            }
        }
    }
}

pub fn count_placeholders(query: &str) -> usize {
    Placeholders::new(query).count()
}
