/// Requests a front end can make of the tab strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabCommand {
    Next,
    Previous,
    Index(usize),
    /// Select the active tab again. Still refetches.
    Reselect,
}

/// Owns the active tab. Every accepted command yields the tab to fetch.
#[derive(Debug, Clone)]
pub struct TabSelector {
    tabs: Vec<String>,
    index: usize,
}

impl TabSelector {
    pub const fn new(tabs: Vec<String>) -> Self {
        Self { tabs, index: 0 }
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn active(&self) -> &str {
        self.tabs.get(self.index).map_or("", String::as_str)
    }

    /// Applies `command` and returns the newly active tab, or `None` when
    /// the command points outside the tab list.
    pub fn apply(&mut self, command: TabCommand) -> Option<&str> {
        let len = self.tabs.len();
        if len == 0 {
            return None;
        }

        self.index = match command {
            TabCommand::Next => wrap_increment(self.index, len),
            TabCommand::Previous => wrap_decrement(self.index, len),
            TabCommand::Index(index) if index < len => index,
            TabCommand::Index(_) => return None,
            TabCommand::Reselect => self.index,
        };

        Some(self.active())
    }

    pub fn select_name(&mut self, name: &str) -> Option<&str> {
        let index = self.tabs.iter().position(|tab| tab == name)?;
        self.apply(TabCommand::Index(index))
    }
}

/// Maps the digit keys to tabs: `1`..`9` are the first nine, `0` the tenth.
pub const fn digit_to_index(digit: char) -> Option<usize> {
    match digit {
        '1'..='9' => Some(digit as usize - '1' as usize),
        '0' => Some(9),
        _ => None,
    }
}

const fn wrap_decrement(index: usize, len: usize) -> usize {
    if index == 0 {
        len - 1
    } else {
        index - 1
    }
}

const fn wrap_increment(index: usize, len: usize) -> usize {
    (index + 1) % len
}
