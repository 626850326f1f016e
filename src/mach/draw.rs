use super::consumer::{Arity, Consumer};
use super::surface::Color;
use super::{Engine, Level};
use crate::lang::Fault;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Fault>;

pub fn register(table: &mut HashMap<String, Consumer>) {
    table.insert("path".to_string(), Consumer::new(Arity::Exactly(1), path));
    table.insert("fill".to_string(), Consumer::new(Arity::Exactly(0), fill));
    table.insert("strk".to_string(), Consumer::new(Arity::Exactly(0), stroke));
    table.insert("movp".to_string(), Consumer::new(Arity::Exactly(2), move_to));
    table.insert("line".to_string(), Consumer::new(Arity::Exactly(2), line_to));
    table.insert("lwid".to_string(), Consumer::new(Arity::Exactly(1), line_width));
    table.insert("rgba".to_string(), Consumer::new(Arity::Verifier(rgba_argc), rgba));
}

fn path(argv: &[String], engine: &mut Engine) -> Result<()> {
    match argv[0].to_lowercase().as_str() {
        "begin" => engine.surface.begin_path()?,
        "end" | "close" => engine.surface.close_path()?,
        _ => {
            return Err(engine.fail(
                &format!("Unknown path command \"{}\"", argv[0]),
                Level::Error,
            ))
        }
    }
    Ok(())
}

fn fill(_argv: &[String], engine: &mut Engine) -> Result<()> {
    engine.surface.fill()?;
    Ok(())
}

fn stroke(_argv: &[String], engine: &mut Engine) -> Result<()> {
    engine.surface.stroke()?;
    Ok(())
}

fn move_to(argv: &[String], engine: &mut Engine) -> Result<()> {
    let (x, y) = engine.coordinate(&argv[0], &argv[1])?;
    engine.surface.move_to(x, y)?;
    Ok(())
}

/// Strokes right away so each segment shows up as it is drawn.
fn line_to(argv: &[String], engine: &mut Engine) -> Result<()> {
    let (x, y) = engine.coordinate(&argv[0], &argv[1])?;
    engine.surface.line_to(x, y)?;
    engine.surface.stroke()?;
    Ok(())
}

fn line_width(argv: &[String], engine: &mut Engine) -> Result<()> {
    let width = engine.to_number(
        &argv[0],
        Some("Line width must be a number of at least 0"),
        0.0..=f64::INFINITY,
        Level::Error,
    )?;
    engine.surface.set_line_width(width)?;
    Ok(())
}

fn rgba_argc(argc: usize) -> bool {
    (2..=5).contains(&argc)
}

/// `rgba line|fill <name>` or `rgba line|fill r g b a`.
fn rgba(argv: &[String], engine: &mut Engine) -> Result<()> {
    let target = argv[0].as_str();
    let line = target == "line";
    engine.assert(
        line || target == "fill",
        &format!("setting color for '{}' not supported", target),
    )?;
    engine.assert(
        argv.len() == 5 || argv.len() == 2,
        &format!(
            "\"rgba\" only receive 1 or 4 color arguments, but got {}!",
            argv.len() - 1
        ),
    )?;
    let color = if argv.len() == 5 {
        let r = channel(engine, &argv[1])?;
        let g = channel(engine, &argv[2])?;
        let b = channel(engine, &argv[3])?;
        let a = engine.to_number(&argv[4], None, 0.0..=1.0, Level::Error)?;
        Color::Rgba(r, g, b, a)
    } else {
        Color::Named(argv[1].clone())
    };
    if line {
        engine.surface.set_stroke_style(&color)?;
    } else {
        engine.surface.set_fill_style(&color)?;
    }
    Ok(())
}

fn channel(engine: &mut Engine, token: &str) -> Result<u8> {
    let n = engine.to_number(token, None, 0.0..=255.0, Level::Error)?;
    Ok(n.round() as u8)
}
