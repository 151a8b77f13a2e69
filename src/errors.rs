use std::fmt;

use colored::Colorize;
use nom::error::{VerboseError, VerboseErrorKind};

use crate::parser::Span;

/*
                                                  ╒══════════════════╕
    ============================================= │  IMPLEMENTATION  │ =============================================
                                                  ╘══════════════════╛
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidOperand,
    DimensionMismatch,
    Syntax,
    Config,
    Io
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::InvalidOperand => "Invalid operand",
            ErrorKind::DimensionMismatch => "Dimension mismatch",
            ErrorKind::Syntax => "Syntax error",
            ErrorKind::Config => "Configuration error",
            ErrorKind::Io => "IO error",
        }
    }
}

/*
    ╒══════════════════╕
    │ Error management │
    ╘══════════════════╛
*/

#[derive(Debug, Clone, PartialEq)]
pub struct DncError {
    pub kind: ErrorKind,
    pub message: String,

    pub column: Option<usize>,
    pub fragment: String,

    pub suggestions: Vec<String>
}

impl DncError {
    fn new(kind: ErrorKind, message: String) -> Self {
        DncError { kind, message, column: None, fragment: String::new(), suggestions: vec!() }
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.suggestions = suggestions;
        self
    }

    #[cold]
    pub fn invalid_operand(message: String) -> Self {
        DncError::new(ErrorKind::InvalidOperand, message)
    }

    #[cold]
    pub fn dimension_mismatch(message: String) -> Self {
        DncError::new(ErrorKind::DimensionMismatch, message)
    }

    #[cold]
    pub fn syntax_error(message: String, column: usize, fragment: String) -> Self {
        DncError { kind: ErrorKind::Syntax, message, column: Some(column), fragment, suggestions: vec!() }
    }

    #[cold]
    pub fn config_error(message: String) -> Self {
        DncError::new(ErrorKind::Config, message)
    }

    #[cold]
    pub fn io_error(message: String) -> Self {
        DncError::new(ErrorKind::Io, message)
    }

    #[cold]
    pub fn emit(&self) -> ! {
        if let Some(column) = self.column {
            let mut frag = self.fragment.as_str();

            if let Some(pos) = frag.find('\n') {
                frag = &frag[..pos];
            }

            frag = frag.char_indices().nth(50).map_or(frag, |(i, _)| &frag[..i]).trim();

            eprintln!(
                "\n[{} at column {}]\n\n • {}:\n\n\t{}\n\t{}\n",
                self.kind.name().red().bold(),
                column.to_string().yellow(),
                self.message, frag,
                "^".repeat(frag.chars().count().max(1)).red()
            );

        } else {
            eprintln!(
                "\n[{}] {}\n",
                self.kind.name().red().bold(),
                self.message
            );
        }

        if !self.suggestions.is_empty() {
            eprintln!("[{}]\n", "Suggestions".blue().bold());

            for s in &self.suggestions {
                eprintln!(" • {}", s);
            }

            eprintln!();
        }

        exit_process();
    }
}

impl fmt::Display for DncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "{} at column {}: {}", self.kind.name(), column, self.message),
            None => write!(f, "{}: {}", self.kind.name(), self.message)
        }
    }
}

impl std::error::Error for DncError {}

impl<'a> From<VerboseError<Span<'a>>> for DncError {
    fn from(error: VerboseError<Span<'a>>) -> Self {
        match error.errors.last() {
            Some((fragment, kind)) => {
                let error_msg = match kind {
                    VerboseErrorKind::Context(ctx) => *ctx,
                    VerboseErrorKind::Char(_) => "Unexpected character",
                    _ => "Unable to parse"
                };

                DncError::syntax_error(error_msg.into(), fragment.get_column(), fragment.to_string())
            },

            None => DncError::syntax_error("Unable to parse".into(), 1, String::new())
        }
    }
}

impl<'a> From<nom::Err<VerboseError<Span<'a>>>> for DncError {
    fn from(error: nom::Err<VerboseError<Span<'a>>>) -> Self {
        match error {
            nom::Err::Error(err) |
            nom::Err::Failure(err) => DncError::from(err),

            nom::Err::Incomplete(_) => DncError::syntax_error("Unexpected end of input".into(), 1, String::new())
        }
    }
}

/*
    ╒════════════════════╕
    │ Console reporting  │
    ╘════════════════════╛
*/

pub fn exit_process() -> ! {
    if cfg!(test) {
        panic!();

    } else {
        std::process::exit(1);
    }
}

#[macro_export]
macro_rules! dnc_warning {
    ($pat: expr $( , $more: expr)*) => {
        {
            use colored::Colorize;

            println!(
                "[{}] {}",
                "Warning".yellow(),
                format!($pat, $($more,)*)
            );
        }
    };
}

#[macro_export]
macro_rules! dnc_error {
    ($pat: expr $( , $more: expr)*) => {
        {
            use colored::Colorize;
            use $crate::errors::exit_process;

            eprintln!(
                "[{}] {}",
                "Error".red(),
                format!($pat, $($more,)*)
            );

            exit_process();
        }
    };
}

/*
                                                  ╒═════════╕
    ============================================= │  TESTS  │ =============================================
                                                  ╘═════════╛
*/
