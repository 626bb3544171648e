//! Code generation module.
//!
//! Lowers parsed items to LLVM IR through inkwell. Only built with the
//! `codegen` feature; the front end itself never depends on it.
//!
//! - Every value is an `f64`
//! - Functions take and return `f64`
//! - Names resolve against the parameters of the function being lowered

pub mod compiler;
pub mod expr;
