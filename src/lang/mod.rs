/*!
# Slate Language Module

Lexical analysis for the Slate language: the command vocabulary and the
context-sensitive token and factor scanners.

*/

#[macro_use]
mod error;
mod command;
mod ident;
mod scan;

pub use command::Command;
pub use error::Error;
pub use error::ErrorCode;
pub use ident::check_ident;
pub use ident::is_ident;
pub use scan::next_compare;
pub use scan::next_factor;
pub use scan::next_token;
pub use scan::strip_parens;
pub use scan::strip_quotes;
pub use scan::trim_space;
pub use scan::Terminator;
pub use scan::CALL_MARK;

pub type LineNumber = Option<usize>;
