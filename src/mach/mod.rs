/*!
## Rust Machine Module

This Rust module is the interpreter for GASM: registers, variables,
functions, the operation table and the engine that drives them.

*/

mod consumer;
mod draw;
mod engine;
mod function;
pub mod num;
mod operation;
mod register;
mod sink;
mod statement;
mod surface;
mod var;

pub use engine::Engine;
pub use engine::Event;
pub use function::Body;
pub use function::Function;
pub use function::Native;
pub use operation::Cond;
pub use operation::Operator;
pub use register::CmpFlags;
pub use register::Register;
pub use register::Registers;
pub use sink::Append;
pub use sink::Level;
pub use sink::Message;
pub use sink::Sink;
pub use sink::Transcript;
pub use statement::MAX_CALL_DEPTH;
pub use surface::Canvas;
pub use surface::Color;
pub use surface::Command;
pub use surface::Surface;
pub use var::is_var_name;
