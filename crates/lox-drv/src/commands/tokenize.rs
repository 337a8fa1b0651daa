//! Tokenize command implementation.
//!
//! Reads one source file, scans it and prints the resulting tokens.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use lox_lex::{scan_all, Literal, Token};
use lox_util::Handler;
use serde::Serialize;
use tracing::debug;

use crate::config::OutputFormat;
use crate::error::{DriverError, Result};

/// Arguments for the tokenize command.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Source file to scan.
    pub file: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Print each token's byte span.
    pub show_spans: bool,
}

/// One token as written by `--format json`.
#[derive(Debug, Serialize)]
pub struct TokenRecord<'a> {
    /// Kind name, e.g. `LEFT_PAREN`.
    pub kind: &'static str,
    /// Exact source text.
    pub lexeme: &'a str,
    /// Decoded value, `null` when absent.
    pub literal: Option<LiteralRecord<'a>>,
    /// Line the token starts on.
    pub line: u32,
    /// Byte range, present only when spans are requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<[usize; 2]>,
}

/// A literal value as a bare JSON string or number.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum LiteralRecord<'a> {
    /// String or identifier text.
    String(&'a str),
    /// Finite number value.
    Number(f64),
    /// `inf` or `NaN`, which JSON numbers cannot hold.
    NonFinite(String),
}

impl<'a> LiteralRecord<'a> {
    fn from_literal(literal: &'a Literal) -> Self {
        match literal {
            Literal::String(s) => LiteralRecord::String(s),
            Literal::Number(n) if n.is_finite() => LiteralRecord::Number(*n),
            Literal::Number(_) => LiteralRecord::NonFinite(literal.to_string()),
        }
    }
}

impl<'a> TokenRecord<'a> {
    /// Builds the record for `token`.
    pub fn new(token: &'a Token, show_spans: bool) -> Self {
        Self {
            kind: token.kind.name(),
            lexeme: &token.lexeme,
            literal: token.literal.as_ref().map(LiteralRecord::from_literal),
            line: token.line,
            span: show_spans.then_some([token.span.start, token.span.end]),
        }
    }
}

/// Run the tokenize command, printing to stdout.
///
/// A lexical error is rendered as a diagnostic on stderr before it is
/// returned.
pub fn run_tokenize(args: TokenizeArgs) -> Result<()> {
    let start_time = Instant::now();
    let source = read_source(&args.file)?;
    debug!(file = %args.file.display(), bytes = source.len(), "read source");

    let tokens = match scan_all(&source) {
        Ok(tokens) => tokens,
        Err(err) => {
            let handler = Handler::new();
            handler.emit_diagnostic(err.to_diagnostic(&source));
            for diagnostic in handler.diagnostics() {
                eprintln!("{}\n", diagnostic);
            }
            return Err(err.into());
        },
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_tokens(&mut out, &tokens, args.format, args.show_spans)?;
    out.flush()?;

    debug!(
        tokens = tokens.len(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "tokenize complete"
    );
    Ok(())
}

fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| DriverError::ReadSource {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes `tokens` to `out` in the requested format.
pub fn write_tokens<W: Write>(
    out: &mut W,
    tokens: &[Token],
    format: OutputFormat,
    show_spans: bool,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for token in tokens {
                if show_spans {
                    writeln!(out, "{} @{}..{}", token, token.span.start, token.span.end)?;
                } else {
                    writeln!(out, "{}", token)?;
                }
            }
        },
        OutputFormat::Json => {
            let records: Vec<_> = tokens
                .iter()
                .map(|token| TokenRecord::new(token, show_spans))
                .collect();
            serde_json::to_writer_pretty(&mut *out, &records)?;
            writeln!(out)?;
        },
    }
    Ok(())
}
