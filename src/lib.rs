//! # Slate
//!
//! An interpreter for Slate, a small imperative language for teaching how
//! programs actually run: every variable is a slot on one shared stack,
//! every call builds its frame by hand, and the whole machine fits in your
//! head.
//!
//! Run a program with:
//! ```text
//! $ slate
//! Please enter program name: demo.slt
//! List program (y for yes)? n
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/language.rs"]
#[allow(non_snake_case)]
pub mod __Language_Guide;

pub mod lang;
pub mod mach;
