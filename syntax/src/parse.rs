use anyhow::Result;

use crate::ast::JobDecl;

#[derive(Debug, thiserror::Error)]
#[error("ParseError on line '{line}': {msg}")]
pub struct Error {
    msg: String,
    pos: usize,
    line: String,
}

impl Error {
    /// Byte offset into the input where parsing failed.
    pub fn pos(&self) -> usize {
        self.pos
    }
}

/// Parse a job list like `a => b, b => c, c =>` into its entries, in order.
/// Empty (or whitespace-only) text is an empty list.
pub fn parse(text: &str) -> Result<Vec<JobDecl<'_>>> {
    use combine::EasyParser;
    decl::job_list()
        .easy_parse(text)
        .map(|(decls, _remainder)| decls)
        .map_err(|e| {
            let e = e.map_position(|p| p.translate_position(text));
            let pos = e.position;
            // isolate the line in question:
            let before = &text[0..pos];
            let after = &text[pos..text.len()];
            let prefix: String = before.chars().rev().take_while(|&c| c != '\n').collect();
            let prefix: String = prefix.chars().rev().collect();
            let suffix: String = after.chars().take_while(|&c| c != '\n').collect();
            let line = prefix + &suffix;
            // combine's errors borrow the input, so we stringify before returning.
            Error {
                pos,
                line: line.trim().to_owned(),
                msg: format!("{}", e),
            }
            .into()
        })
}

pub mod prelude {
    pub use combine::parser::char::{char, string};
    pub use combine::parser::range::recognize;
    pub use combine::*;
}

pub mod util {

    use super::prelude::*;
    use combine::parser::char::{alpha_num, space};

    // job codes: one or more letters, digits or underscores.
    p! {
        ident() -> &'a str, {
            recognize(skip_many1(char('_').or(alpha_num())))
        }
    }

    // comments run to the end of the line.
    p! {
        comment() -> (), {
            char('#').with(skip_many(none_of("\n".chars())))
        }
    }

    p! {
        whitespace() -> (), {
            skip_many1(space().map(|_| ()).or(comment()))
        }
    }

    wrapper! {
        lex(parser), {
            optional(whitespace()).with(parser).skip(optional(whitespace()))
        }
    }

}

mod decl {

    use super::prelude::*;
    use super::util::{ident, lex, whitespace};
    use crate::ast::JobDecl;

    p! {
        arrow() -> &'static str, {
            string("=>")
        }
    }

    // same as `arrow`, but yields a char so it can be used with `not_followed_by`.
    p! {
        arrow_ahead() -> char, {
            attempt(char('=').skip(char('>')))
        }
    }

    // An ident after the arrow is a dependency only if it doesn't start
    // the next entry itself, i.e. isn't followed by its own arrow.
    p! {
        dependency() -> &'a str, {
            attempt(lex(ident()).skip(not_followed_by(arrow_ahead())))
        }
    }

    p! {
        job_decl() -> JobDecl<'a>, {
            lex(ident())
                .skip(lex(arrow()))
                .and(optional(dependency()))
                .map(|(job, dependency)| JobDecl { job, dependency })
        }
    }

    p! {
        job_list() -> Vec<JobDecl<'a>>, {
            optional(whitespace())
                .with(many(job_decl().skip(optional(lex(char(','))))))
                .skip(eof())
        }
    }

}
