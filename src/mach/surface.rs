use super::num;
use crate::error;
use crate::lang::Error;
use std::cell::RefCell;
use std::fmt::Write;
use std::rc::Rc;

type Result<T> = std::result::Result<T, Error>;

/// A stroke or fill style. Named colors pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Named(String),
    Rgba(u8, u8, u8, f64),
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Color::Named(s) => write!(f, "{}", s),
            Color::Rgba(r, g, b, a) => write!(f, "rgba({}, {}, {}, {})", r, g, b, num::format(*a)),
        }
    }
}

/// ## Rendering capability
///
/// Whatever the engine draws on. Paths follow the usual 2D context model:
/// a current path is built with `move_to`/`line_to` and then stroked or
/// filled with the current styles.

pub trait Surface {
    fn begin_path(&mut self) -> Result<()>;
    fn close_path(&mut self) -> Result<()>;
    fn stroke(&mut self) -> Result<()>;
    fn fill(&mut self) -> Result<()>;
    fn set_line_width(&mut self, width: f64) -> Result<()>;
    fn set_stroke_style(&mut self, color: &Color) -> Result<()>;
    fn set_fill_style(&mut self, color: &Color) -> Result<()>;
    fn move_to(&mut self, x: f64, y: f64) -> Result<()>;
    fn line_to(&mut self, x: f64, y: f64) -> Result<()>;
    fn width(&self) -> f64;
    fn height(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    BeginPath,
    ClosePath,
    Stroke,
    Fill,
    LineWidth(f64),
    StrokeStyle(Color),
    FillStyle(Color),
    MoveTo(f64, f64),
    LineTo(f64, f64),
}

#[derive(Debug)]
struct Recording {
    width: f64,
    height: f64,
    commands: Vec<Command>,
}

/// ## Recording canvas
///
/// Keeps every drawing command so the picture can be inspected or saved
/// as SVG. Clones share the recording.

#[derive(Debug, Clone)]
pub struct Canvas {
    recording: Rc<RefCell<Recording>>,
}

impl Canvas {
    pub fn new(width: f64, height: f64) -> Canvas {
        Canvas {
            recording: Rc::new(RefCell::new(Recording {
                width,
                height,
                commands: vec![],
            })),
        }
    }

    fn max_len(&self) -> usize {
        u16::max_value() as usize
    }

    fn record(&mut self, command: Command) -> Result<()> {
        let max_len = self.max_len();
        let mut recording = self.recording.borrow_mut();
        if recording.commands.len() >= max_len {
            return Err(error!(OutOfMemory; "CANVAS COMMAND LIMIT REACHED"));
        }
        recording.commands.push(command);
        Ok(())
    }

    pub fn commands(&self) -> Vec<Command> {
        self.recording.borrow().commands.clone()
    }

    pub fn clear(&self) {
        self.recording.borrow_mut().commands.clear();
    }

    /// Changes the extents. The engine only sees the new size after
    /// `Engine::update_size`.
    pub fn resize(&self, width: f64, height: f64) {
        let mut recording = self.recording.borrow_mut();
        recording.width = width;
        recording.height = height;
    }

    pub fn to_svg(&self) -> String {
        let recording = self.recording.borrow();
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = num::format(recording.width),
            h = num::format(recording.height)
        );
        let mut path = String::new();
        let mut line_width = 1.0;
        let mut stroke_style = Color::Named("black".to_string());
        let mut fill_style = Color::Named("black".to_string());
        for command in &recording.commands {
            match command {
                Command::BeginPath => path.clear(),
                Command::ClosePath => path.push_str("Z "),
                Command::MoveTo(x, y) => {
                    let _ = write!(path, "M {} {} ", num::format(*x), num::format(*y));
                }
                Command::LineTo(x, y) => {
                    let _ = write!(path, "L {} {} ", num::format(*x), num::format(*y));
                }
                Command::LineWidth(w) => line_width = *w,
                Command::StrokeStyle(c) => stroke_style = c.clone(),
                Command::FillStyle(c) => fill_style = c.clone(),
                Command::Stroke => {
                    if !path.is_empty() {
                        let _ = writeln!(
                            svg,
                            r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{}"/>"#,
                            path.trim_end(),
                            escape(&stroke_style.to_string()),
                            num::format(line_width)
                        );
                    }
                }
                Command::Fill => {
                    if !path.is_empty() {
                        let _ = writeln!(
                            svg,
                            r#"  <path d="{}" fill="{}" stroke="none"/>"#,
                            path.trim_end(),
                            escape(&fill_style.to_string())
                        );
                    }
                }
            }
        }
        svg.push_str("</svg>\n");
        svg
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

impl Surface for Canvas {
    fn begin_path(&mut self) -> Result<()> {
        self.record(Command::BeginPath)
    }
    fn close_path(&mut self) -> Result<()> {
        self.record(Command::ClosePath)
    }
    fn stroke(&mut self) -> Result<()> {
        self.record(Command::Stroke)
    }
    fn fill(&mut self) -> Result<()> {
        self.record(Command::Fill)
    }
    fn set_line_width(&mut self, width: f64) -> Result<()> {
        self.record(Command::LineWidth(width))
    }
    fn set_stroke_style(&mut self, color: &Color) -> Result<()> {
        self.record(Command::StrokeStyle(color.clone()))
    }
    fn set_fill_style(&mut self, color: &Color) -> Result<()> {
        self.record(Command::FillStyle(color.clone()))
    }
    fn move_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.record(Command::MoveTo(x, y))
    }
    fn line_to(&mut self, x: f64, y: f64) -> Result<()> {
        self.record(Command::LineTo(x, y))
    }
    fn width(&self) -> f64 {
        self.recording.borrow().width
    }
    fn height(&self) -> f64 {
        self.recording.borrow().height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_display() {
        assert_eq!(Color::Rgba(255, 0, 10, 0.5).to_string(), "rgba(255, 0, 10, 0.5)");
        assert_eq!(Color::Rgba(1, 2, 3, 1.0).to_string(), "rgba(1, 2, 3, 1)");
        assert_eq!(Color::Named("teal".to_string()).to_string(), "teal");
    }

    #[test]
    fn test_svg_stroke() {
        let mut canvas = Canvas::new(100.0, 50.0);
        canvas.begin_path().unwrap();
        canvas.set_stroke_style(&Color::Named("red".to_string())).unwrap();
        canvas.move_to(0.0, 0.0).unwrap();
        canvas.line_to(10.0, 20.5).unwrap();
        canvas.stroke().unwrap();
        let svg = canvas.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="100" height="50""#));
        assert!(svg.contains(r#"<path d="M 0 0 L 10 20.5" fill="none" stroke="red" stroke-width="1"/>"#));
    }

    #[test]
    fn test_svg_escapes_named_colors() {
        let mut canvas = Canvas::new(10.0, 10.0);
        canvas.set_fill_style(&Color::Named("a\"b".to_string())).unwrap();
        canvas.move_to(1.0, 1.0).unwrap();
        canvas.fill().unwrap();
        assert!(canvas.to_svg().contains(r#"fill="a&quot;b""#));
    }

    #[test]
    fn test_command_limit_is_an_error() {
        let mut canvas = Canvas::new(1.0, 1.0);
        for _ in 0..u16::max_value() {
            canvas.fill().unwrap();
        }
        assert!(canvas.fill().is_err());
    }
}
