use std::fmt::{self, Display, Formatter};

pub fn separated_by<T, F>(
    out: &mut String,
    values: impl IntoIterator<Item = T>,
    mut f: F,
    separator: &str,
) where
    F: FnMut(&mut String, T),
{
    let mut first = true;
    for v in values {
        if !first {
            out.push_str(separator);
        }
        first = false;
        f(out, v);
    }
}

/// Query text shortened to a printable length, see [`truncate_long!`].
pub struct TruncatedQuery<'a>(pub &'a str);

impl<'a> TruncatedQuery<'a> {
    pub const MAX_CHARS: usize = 497;
}

impl<'a> Display for TruncatedQuery<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let end = self
            .0
            .char_indices()
            .nth(Self::MAX_CHARS)
            .map(|(i, _)| i)
            .unwrap_or(self.0.len());
        f.write_str(self.0[..end].trim_end())?;
        if end < self.0.len() {
            f.write_str("...")?;
        }
        Ok(())
    }
}

#[macro_export]
macro_rules! truncate_long {
    ($query:expr) => {
        $crate::TruncatedQuery(::std::convert::AsRef::<str>::as_ref(&$query))
    };
}
