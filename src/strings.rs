use std::iter::FusedIterator;

/// Iterator over the lines of a document, treating `\r\n`, `\r` and `\n`
/// alike as line terminators.
///
/// The terminator is not included in the yielded line. As with
/// `str::split('\n')`, a trailing terminator yields a final empty line, and
/// the empty document yields exactly one empty line.
pub struct Lines<'s> {
    s: &'s str,
    ix: usize,
    done: bool,
}

impl<'s> Lines<'s> {
    pub fn new(s: &'s str) -> Self {
        let s = s.strip_prefix('\u{feff}').unwrap_or(s);
        Lines {
            s,
            ix: 0,
            done: false,
        }
    }
}

impl<'s> Iterator for Lines<'s> {
    type Item = &'s str;

    fn next(&mut self) -> Option<&'s str> {
        if self.done {
            return None;
        }

        let sb = self.s.as_bytes();
        let end = sb.len();
        let matcher = jetscii::bytes!(b'\r', b'\n');

        let eol = match matcher.find(&sb[self.ix..]) {
            Some(offset) => self.ix + offset,
            None => {
                self.done = true;
                return Some(&self.s[self.ix..]);
            }
        };

        let line = &self.s[self.ix..eol];
        let mut next = eol + 1;
        if sb[eol] == b'\r' && next < end && sb[next] == b'\n' {
            next += 1;
        }
        self.ix = next;
        Some(line)
    }
}

impl<'s> FusedIterator for Lines<'s> {}

/// Whether the line is empty or only whitespace.
pub fn is_blank(s: &str) -> bool {
    s.chars().all(char::is_whitespace)
}

/// Upper-cases the first character of `s`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
