use std::collections::VecDeque;

/// Submitted lines with a previous/next cursor, newest last
#[derive(Debug, Clone)]
pub struct InputHistory {
    lines: VecDeque<String>,
    cursor: Option<usize>,
    limit: usize,
}

impl InputHistory {
    pub fn new(limit: usize) -> Self {
        Self {
            lines: VecDeque::new(),
            cursor: None,
            limit: limit.max(1),
        }
    }

    /// Record a submitted line. Blank lines are not kept. Resets the cursor.
    pub fn push(&mut self, line: &str) {
        self.cursor = None;
        if line.trim().is_empty() {
            return;
        }
        self.lines.push_back(line.to_string());
        if self.lines.len() > self.limit {
            self.lines.pop_front();
        }
    }

    /// Step back one line, stopping at the oldest
    pub fn previous(&mut self) -> Option<&str> {
        if self.lines.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => self.lines.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.cursor = Some(next);
        Some(&self.lines[next])
    }

    /// Step forward one line. `None` once past the newest, which ends browsing.
    pub fn next(&mut self) -> Option<&str> {
        let i = self.cursor?;
        if i + 1 >= self.lines.len() {
            self.cursor = None;
            return None;
        }
        self.cursor = Some(i + 1);
        Some(&self.lines[i + 1])
    }

    /// Whether `previous` has been used since the last push
    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    /// Oldest first
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }
}
