use ansi_term::Colour;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Log,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Level::Debug => "debug",
            Level::Log => "log",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        write!(f, "{}", s)
    }
}

/// Where a message lands relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Append {
    NewLine,
    SameLine,
    Replace,
}

impl Default for Append {
    fn default() -> Append {
        Append::NewLine
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub level: Level,
    pub content: String,
    pub color: Option<Colour>,
    pub raw: bool,
    pub append: Append,
}

impl Message {
    pub fn new<S: Into<String>>(level: Level, content: S) -> Message {
        Message {
            level,
            content: content.into(),
            color: None,
            raw: false,
            append: Append::NewLine,
        }
    }

    pub fn color(mut self, color: Colour) -> Message {
        self.color = Some(color);
        self
    }

    pub fn raw(mut self) -> Message {
        self.raw = true;
        self
    }

    pub fn append(mut self, append: Append) -> Message {
        self.append = append;
        self
    }
}

/// ## Message sink
///
/// Every diagnostic and all `print` output leaves the engine through here.

pub trait Sink {
    fn print(&mut self, message: Message);
}

impl<F: FnMut(Message)> Sink for F {
    fn print(&mut self, message: Message) {
        self(message)
    }
}

/// A sink that keeps what it is given, line by line. Clones share the
/// same lines so a host can hand one to the engine and read the other.
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Rc<RefCell<Vec<(Level, String)>>>,
}

impl Transcript {
    pub fn new() -> Transcript {
        Transcript::default()
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.borrow().clone()
    }

    /// Text of every line at `level` or above, one per line.
    pub fn text(&self, level: Level) -> String {
        self.lines
            .borrow()
            .iter()
            .filter(|(l, _)| *l >= level)
            .map(|(_, s)| format!("{}\n", s))
            .collect()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Sink for Transcript {
    fn print(&mut self, message: Message) {
        let mut lines = self.lines.borrow_mut();
        match message.append {
            Append::NewLine => lines.push((message.level, message.content)),
            Append::SameLine => match lines.last_mut() {
                Some((_, line)) => line.push_str(&message.content),
                None => lines.push((message.level, message.content)),
            },
            Append::Replace => {
                lines.pop();
                lines.push((message.level, message.content));
            }
        }
    }
}
