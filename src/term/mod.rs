extern crate ansi_term;
extern crate clap;
extern crate ctrlc;
extern crate linefeed;
use ansi_term::{Colour, Style};
use clap::Parser;
use gasm::error;
use gasm::lang::{Error, Instruction};
use gasm::mach::{num, Append, Canvas, Engine, Event, Level, Message, Register, Sink};
use linefeed::{Completer, Completion, Interface, Prompter, ReadResult, Terminal};
use std::cell::RefCell;
use std::io::Write;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Script to run; starts the console when omitted
    pub file: Option<PathBuf>,
    /// Canvas width
    #[arg(long, default_value_t = 640.0)]
    pub width: f64,
    /// Canvas height
    #[arg(long, default_value_t = 480.0)]
    pub height: f64,
    /// Save the drawing as SVG after running the script
    #[arg(long)]
    pub svg: Option<PathBuf>,
    /// Seed for `rand`
    #[arg(long)]
    pub seed: Option<u64>,
    /// Show debug messages
    #[arg(long)]
    pub verbose: bool,
}

pub fn main() {
    let cli = Cli::parse();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let result = match &cli.file {
        Some(path) => run_script(&cli, path, interrupted),
        None => main_loop(&cli, interrupted).map_err(|e| error!(InternalError; e.to_string())),
    };
    if let Err(error) = result {
        eprintln!("{}", Colour::Red.paint(error.to_string()));
        std::process::exit(1);
    }
}

fn new_engine(cli: &Cli, console: &Console, canvas: &Canvas) -> Engine {
    let engine = Engine::new("", console.clone(), canvas.clone());
    match cli.seed {
        Some(seed) => engine.seed(seed),
        None => engine,
    }
}

fn run_script(cli: &Cli, path: &PathBuf, interrupted: Arc<AtomicBool>) -> Result<(), Error> {
    let source = load(path)?;
    let console = Console::new(cli.verbose);
    let canvas = Canvas::new(cli.width, cli.height);
    let mut engine = new_engine(cli, &console, &canvas);
    engine.reset(source);
    let mut count = 0;
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            engine.print(Level::Warn, "Interrupted");
            break;
        }
        match engine.step() {
            Ok(Event::Eof) => break,
            Ok(_) => count += 1,
            Err(error) => {
                console.end_line();
                return Err(error);
            }
        }
    }
    console.clone().print(
        Message::new(Level::Info, format!("Executed {} instructions.", count)).color(Colour::Green),
    );
    console.end_line();
    if let Some(svg) = &cli.svg {
        save(&canvas, svg)?;
    }
    Ok(())
}

fn main_loop(cli: &Cli, interrupted: Arc<AtomicBool>) -> std::io::Result<()> {
    let console = Console::new(cli.verbose);
    let canvas = Canvas::new(cli.width, cli.height);
    let mut engine = new_engine(cli, &console, &canvas);
    let command = Interface::new("GASM")?;
    command.set_completer(Arc::new(OperationCompleter::new(engine.operations())));
    console
        .clone()
        .print(Message::new(Level::Log, "GASM console ready.").raw());
    console.end_line();

    loop {
        let source = match read_source(&command)? {
            Some(source) => source,
            None => break,
        };
        interrupted.store(false, Ordering::SeqCst);
        engine.reset(&source);
        loop {
            if interrupted.swap(false, Ordering::SeqCst) {
                engine.print(Level::Warn, "Interrupted");
                break;
            }
            match engine.step() {
                Ok(Event::Eof) => break,
                Ok(Event::Executed(instruction)) => {
                    if let Some(value) = feedback(&engine, &instruction) {
                        console.end_line();
                        command.write_fmt(format_args!(
                            "  {}\n",
                            Style::new().bold().paint(format!("= {}", value))
                        ))?;
                    }
                }
                Ok(Event::Error) => {}
                Err(error) => {
                    console.end_line();
                    command.write_fmt(format_args!(
                        "{}\n",
                        Style::new().bold().paint(error.to_string())
                    ))?;
                    break;
                }
            }
        }
        console.end_line();
    }
    Ok(())
}

/// One line, or every line from `func` through `func end`.
fn read_source<T: Terminal>(command: &Interface<T>) -> std::io::Result<Option<String>> {
    command.set_prompt("> ")?;
    let first = match command.read_line()? {
        ReadResult::Input(string) => string,
        ReadResult::Signal(_) | ReadResult::Eof => return Ok(None),
    };
    command.add_history_unique(first.clone());
    let mut source = format!("{}\n", first);
    if !starts_function(&first) {
        return Ok(Some(source));
    }
    command.set_prompt(". ")?;
    loop {
        let string = match command.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        command.add_history_unique(string.clone());
        source.push_str(&string);
        source.push('\n');
        if ends_function(&string) {
            break;
        }
    }
    Ok(Some(source))
}

fn first_instruction(line: &str) -> Option<Instruction> {
    gasm::lang::Lexer::new(line).next()
}

fn starts_function(line: &str) -> bool {
    match first_instruction(line) {
        Some(i) => i.is("func") && !ends_function(line),
        None => false,
    }
}

fn ends_function(line: &str) -> bool {
    match first_instruction(line) {
        Some(i) => i.is("func") && i.params().first().map_or(false, |p| p.eq_ignore_ascii_case("end")),
        None => false,
    }
}

/// Value to echo after a successful `call` or `set`.
fn feedback(engine: &Engine, instruction: &Instruction) -> Option<String> {
    if instruction.is("call") {
        return Some(num::format(engine.register(Register::Ret)));
    }
    if instruction.is("set") {
        let name = instruction.params().first()?;
        return engine.var(name).map(num::format);
    }
    None
}

fn load(path: &PathBuf) -> Result<String, Error> {
    match std::fs::read_to_string(path) {
        Ok(source) => Ok(source),
        Err(error) => Err(error!(InternalError; format!("{}: {}", path.display(), error))),
    }
}

fn save(canvas: &Canvas, path: &PathBuf) -> Result<(), Error> {
    let mut file = match std::fs::File::create(path) {
        Ok(file) => file,
        Err(error) => return Err(error!(InternalError; error.to_string())),
    };
    if let Err(error) = file.write_all(canvas.to_svg().as_bytes()) {
        return Err(error!(InternalError; error.to_string()));
    }
    Ok(())
}

struct ConsoleState {
    verbose: bool,
    open: bool,
}

/// Writes messages to stdout. A line stays open after each message so
/// `SameLine` and `Replace` can still reach it; `end_line` closes it.
#[derive(Clone)]
struct Console {
    state: Rc<RefCell<ConsoleState>>,
}

impl Console {
    fn new(verbose: bool) -> Console {
        Console {
            state: Rc::new(RefCell::new(ConsoleState {
                verbose,
                open: false,
            })),
        }
    }

    fn end_line(&self) {
        let mut state = self.state.borrow_mut();
        if state.open {
            println!();
            state.open = false;
        }
    }

    fn decorate(message: &Message) -> String {
        if message.raw {
            return message.content.clone();
        }
        let (prefix, style) = match message.level {
            Level::Debug | Level::Log => ("", Style::new().dimmed()),
            Level::Info => ("[INFO]: ", Colour::White.normal()),
            Level::Warn => ("[WARN]: ", Colour::Yellow.normal()),
            Level::Error => ("[ERROR]: ", Colour::Red.normal()),
        };
        let style = match message.color {
            Some(colour) => colour.normal(),
            None => style,
        };
        style.paint(format!("{}{}", prefix, message.content)).to_string()
    }
}

impl Sink for Console {
    fn print(&mut self, message: Message) {
        let mut state = self.state.borrow_mut();
        if message.level == Level::Debug && !state.verbose {
            return;
        }
        let text = Console::decorate(&message);
        match message.append {
            Append::NewLine => {
                if state.open {
                    println!();
                }
                print!("{}", text);
            }
            Append::SameLine => print!("{}", text),
            Append::Replace => print!("\r\x1b[2K{}", text),
        }
        state.open = true;
        let _ = std::io::stdout().flush();
    }
}

struct OperationCompleter {
    operations: Vec<String>,
}

impl OperationCompleter {
    fn new(operations: Vec<String>) -> OperationCompleter {
        OperationCompleter { operations }
    }
}

impl<Term: Terminal> Completer<Term> for OperationCompleter {
    fn complete(
        &self,
        word: &str,
        _prompter: &Prompter<Term>,
        start: usize,
        _end: usize,
    ) -> Option<Vec<Completion>> {
        if start != 0 {
            return None;
        }
        let word = word.to_lowercase();
        let completions: Vec<Completion> = self
            .operations
            .iter()
            .filter(|op| op.starts_with(&word))
            .map(|op| Completion::simple(op.clone()))
            .collect();
        if completions.is_empty() {
            None
        } else {
            Some(completions)
        }
    }
}

