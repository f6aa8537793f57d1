//! Per-file work: read, decode, and tokenize one source file.
//!
//! Runs on rayon workers, so nothing here prints. Results are collected and
//! printed by the caller in argument order.

use dhicode_diagnostics::{messages, Diagnostic};
use dhicode_scanner::{diagnose, Lexer, TokenInfo};
use std::io;
use thiserror::Error;

/// A file the driver could not turn into source text.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{}", .diagnostic.message_text)]
    Read {
        diagnostic: Diagnostic,
        #[source]
        source: io::Error,
    },

    #[error("{}", .diagnostic.message_text)]
    Decode { diagnostic: Diagnostic },
}

impl DriverError {
    fn read(path: &str, source: io::Error) -> Self {
        let reason = source.to_string();
        DriverError::Read {
            diagnostic: Diagnostic::new(&messages::COULD_NOT_READ_FILE_0, &[path, reason.as_str()]),
            source,
        }
    }

    fn decode(path: &str, valid_up_to: usize) -> Self {
        let offset = valid_up_to.to_string();
        DriverError::Decode {
            diagnostic: Diagnostic::new(
                &messages::FILE_0_IS_NOT_VALID_UTF8_AT_BYTE_1,
                &[path, offset.as_str()],
            ),
        }
    }

    pub fn diagnostic(&self) -> &Diagnostic {
        match self {
            DriverError::Read { diagnostic, .. } | DriverError::Decode { diagnostic } => diagnostic,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScanOptions {
    /// End the token stream at the first illegal token.
    pub stop_on_illegal: bool,
}

/// One scanned token and, for illegal tokens, the diagnostic it raised.
#[derive(Debug)]
pub struct ScannedToken {
    pub info: TokenInfo,
    pub diagnostic: Option<Diagnostic>,
}

#[derive(Debug)]
pub struct ScannedFile {
    pub path: String,
    pub source: String,
    pub tokens: Vec<ScannedToken>,
}

impl ScannedFile {
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.tokens.iter().filter_map(|t| t.diagnostic.as_ref())
    }

    pub fn has_illegal(&self) -> bool {
        self.diagnostics().next().is_some()
    }
}

/// Read `path` as UTF-8 and scan it.
pub fn scan_file(path: &str, options: ScanOptions) -> Result<ScannedFile, DriverError> {
    let bytes = std::fs::read(path).map_err(|e| DriverError::read(path, e))?;
    let source = decode(path, bytes)?;
    let tokens = scan_source(path, &source, options);
    Ok(ScannedFile {
        path: path.to_string(),
        source,
        tokens,
    })
}

/// Take ownership of `bytes` as text, naming the first invalid byte on failure.
fn decode(path: &str, bytes: Vec<u8>) -> Result<String, DriverError> {
    String::from_utf8(bytes).map_err(|e| DriverError::decode(path, e.utf8_error().valid_up_to()))
}

/// Drive a lexer over `source` through `EndOfInput`, or through the first
/// illegal token when stopping early.
pub fn scan_source(path: &str, source: &str, options: ScanOptions) -> Vec<ScannedToken> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token();
        let range = lexer.token_range();
        let diagnostic = diagnose(&token, range).map(|d| d.with_file(path));

        let stop = token.is_end_of_input() || (diagnostic.is_some() && options.stop_on_illegal);
        tokens.push(ScannedToken {
            info: TokenInfo::new(token, range),
            diagnostic,
        });
        if stop {
            break;
        }
    }

    tokens
}
