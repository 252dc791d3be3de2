/// The read position within a pattern, counted in characters.
pub(crate) struct Cursor {
    input: Vec<char>,
    pos: usize,
}

impl Cursor {
    pub fn new(input: &str) -> Self {
        Cursor {
            input: input.chars().collect(),
            pos: 0,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn tell(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    /// Everything from the current position onward.
    #[inline]
    pub fn rest(&self) -> &[char] {
        &self.input[self.pos..]
    }

    /// Moves forward by `n` characters, stopping at the end of input.
    pub fn advance(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.input.len());
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.pos == 0
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.pos + 1 == self.input.len()
    }

    /// Returns `true` if the current character is preceded by an odd number
    /// of backslashes.
    pub fn is_escaped(&self) -> bool {
        let backslashes = self.input[..self.pos]
            .iter()
            .rev()
            .take_while(|&&c| c == '\\')
            .count();
        backslashes % 2 == 1
    }
}
