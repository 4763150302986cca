mod lexer;
mod parser;

pub use lexer::{tokenize, Token, TokenKind, TokenStream};
pub(crate) use parser::Parser;
