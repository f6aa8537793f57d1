//! dhi: Token dump for DhiCode source files.
//!
//! Usage:
//!   dhi [options] [file...]
//!
//! Each file is echoed and then printed one token per line through `EOF`.
//! Without arguments, `main.dhi` in the current directory is used.

mod report;
mod scan;

use clap::Parser as ClapParser;
use dhicode_core::LineMap;
use dhicode_scanner::TokenKind;
use miette::GraphicalTheme;
use rayon::prelude::*;
use scan::{scan_file, DriverError, ScanOptions, ScannedFile};
use std::io::{self, Write};
use std::process;

#[derive(ClapParser, Debug)]
#[command(
    name = "dhi",
    about = "dhi - Tokenize DhiCode source files",
    disable_version_flag = true
)]
struct Cli {
    /// DhiCode files to tokenize.
    #[arg(value_name = "FILE", default_value = "main.dhi")]
    files: Vec<String>,

    /// Do not echo the input code before its tokens.
    #[arg(long = "no-source")]
    no_source: bool,

    /// Stop a file's token stream at its first illegal token.
    #[arg(long = "stop-on-illegal")]
    stop_on_illegal: bool,

    /// Disable colored diagnostics.
    #[arg(long = "no-color")]
    no_color: bool,

    /// Print the version.
    #[arg(short = 'v', long)]
    version: bool,
}

// ANSI color codes
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// A file could not be read or decoded, or output could not be written.
const EXIT_IO_FAILURE: i32 = 1;
/// At least one illegal token was found.
const EXIT_ILLEGAL: i32 = 2;

/// How scanned files are printed.
#[derive(Debug, Clone, Copy)]
struct PrintOptions {
    echo_source: bool,
    use_color: bool,
}

/// What a run found, for the exit code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RunSummary {
    read_failures: usize,
    illegal_tokens: usize,
}

impl RunSummary {
    /// Read failures outrank illegal tokens.
    fn exit_code(self) -> i32 {
        if self.read_failures > 0 {
            EXIT_IO_FAILURE
        } else if self.illegal_tokens > 0 {
            EXIT_ILLEGAL
        } else {
            0
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("dhi Version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    let exit_code = run(&cli);
    process::exit(exit_code);
}

fn run(cli: &Cli) -> i32 {
    let print = PrintOptions {
        echo_source: !cli.no_source,
        use_color: !cli.no_color && atty_is_terminal(),
    };
    let options = ScanOptions {
        stop_on_illegal: cli.stop_on_illegal,
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let result = tokenize_files(
        &cli.files,
        options,
        print,
        &mut stdout.lock(),
        &mut stderr.lock(),
    );

    match result {
        Ok(summary) => summary.exit_code(),
        Err(err) => {
            // Nowhere left to report a failing stderr.
            let _ = print_error(
                &mut io::stderr(),
                &format!("could not write output: {}", err),
                print.use_color,
            );
            EXIT_IO_FAILURE
        }
    }
}

/// Scan `files` in parallel, then print them in argument order.
///
/// Tokens and banners go to `out`; diagnostics, read errors and the
/// illegal-token summary go to `err_out`.
fn tokenize_files(
    files: &[String],
    options: ScanOptions,
    print: PrintOptions,
    out: &mut impl Write,
    err_out: &mut impl Write,
) -> io::Result<RunSummary> {
    // Lexers are independent; collect keeps argument order.
    let results: Vec<Result<ScannedFile, DriverError>> =
        files.par_iter().map(|path| scan_file(path, options)).collect();

    let mut summary = RunSummary::default();

    let show_names = results.len() > 1;
    for result in &results {
        match result {
            Ok(file) => {
                if show_names {
                    writeln!(out, "==> {} <==", file.path)?;
                }
                print_file(out, err_out, file, print)?;
                summary.illegal_tokens += file.diagnostics().count();
            }
            Err(err) => {
                let diagnostic = err.diagnostic();
                let msg = format!("DHI{}: {}", diagnostic.code, err);
                print_error(err_out, &msg, print.use_color)?;
                summary.read_failures += 1;
            }
        }
    }

    if summary.illegal_tokens > 0 {
        let count = summary.illegal_tokens;
        let text = format!("Found {} illegal token{}.", count, if count == 1 { "" } else { "s" });
        if print.use_color {
            writeln!(err_out, "\n{}{}{}", RED, text, RESET)?;
        } else {
            writeln!(err_out, "\n{}", text)?;
        }
    }

    out.flush()?;
    Ok(summary)
}

fn print_file(
    out: &mut impl Write,
    err_out: &mut impl Write,
    file: &ScannedFile,
    print: PrintOptions,
) -> io::Result<()> {
    if print.echo_source {
        writeln!(out, "--- Input Code ---")?;
        writeln!(out, "{}", file.source)?;
    }
    writeln!(out, "--- Tokens ---")?;

    let line_map = file.has_illegal().then(|| LineMap::new(&file.source));

    for scanned in &file.tokens {
        let token = &scanned.info.token;
        writeln!(out, "{}", token)?;
        if token.kind == TokenKind::Illegal {
            writeln!(out, "Illegal character found: '{}'", token.literal)?;
        }
        if let (Some(diagnostic), Some(line_map)) = (&scanned.diagnostic, &line_map) {
            if print.use_color {
                let theme = GraphicalTheme::unicode();
                let mut rendered = String::new();
                if report::write_report(&mut rendered, diagnostic, &file.source, theme).is_ok() {
                    write!(err_out, "{}", rendered)?;
                }
            } else {
                let line = report::plain_line(diagnostic, &file.source, line_map);
                writeln!(err_out, "{}", line)?;
            }
        }
    }
    Ok(())
}

fn print_error(err_out: &mut impl Write, msg: &str, use_color: bool) -> io::Result<()> {
    if use_color {
        writeln!(err_out, "{}{}error{}: {}", BOLD, RED, RESET, msg)
    } else {
        writeln!(err_out, "error: {}", msg)
    }
}

fn atty_is_terminal() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::isatty(2) != 0 }
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const PLAIN: PrintOptions = PrintOptions {
        echo_source: true,
        use_color: false,
    };

    struct Output {
        summary: RunSummary,
        out: String,
        err: String,
    }

    fn temp_file(name: &str, contents: &str) -> String {
        let path: PathBuf =
            std::env::temp_dir().join(format!("dhi-cli-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    fn run_files(files: &[&str], options: ScanOptions, print: PrintOptions) -> Output {
        let files: Vec<String> = files.iter().map(|f| f.to_string()).collect();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let summary = tokenize_files(&files, options, print, &mut out, &mut err).unwrap();
        Output {
            summary,
            out: String::from_utf8(out).unwrap(),
            err: String::from_utf8(err).unwrap(),
        }
    }

    #[test]
    fn test_exit_code_precedence() {
        let clean = RunSummary::default();
        assert_eq!(clean.exit_code(), 0);

        let illegal = RunSummary {
            read_failures: 0,
            illegal_tokens: 3,
        };
        assert_eq!(illegal.exit_code(), EXIT_ILLEGAL);

        let both = RunSummary {
            read_failures: 1,
            illegal_tokens: 3,
        };
        assert_eq!(both.exit_code(), EXIT_IO_FAILURE);
    }

    #[test]
    fn test_clean_file_prints_banners_and_exits_zero() {
        let path = temp_file("clean.dhi", "ކަނޑައަޅާ އުމުރު = 25");
        let output = run_files(&[path.as_str()], ScanOptions::default(), PLAIN);

        assert_eq!(
            output.out,
            "--- Input Code ---\n\
             ކަނޑައަޅާ އުމުރު = 25\n\
             --- Tokens ---\n\
             Token(KEYWORD, 'ކަނޑައަޅާ')\n\
             Token(IDENTIFIER, 'އުމުރު')\n\
             Token(=, '=')\n\
             Token(NUMBER, '25')\n\
             Token(EOF, '')\n"
        );
        assert_eq!(output.err, "");
        assert_eq!(output.summary.exit_code(), 0);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_illegal_token_is_reported_and_exits_two() {
        let path = temp_file("illegal.dhi", "ސ @");
        let output = run_files(&[path.as_str()], ScanOptions::default(), PLAIN);

        assert!(output.out.contains("Token(ILLEGAL, '@')\nIllegal character found: '@'\n"));
        assert!(output.out.ends_with("Token(EOF, '')\n"), "{}", output.out);
        let expected_line = format!("{}:1:3: error DHI1001: Invalid character '@'.\n", path);
        assert!(output.err.starts_with(&expected_line), "{}", output.err);
        assert!(output.err.ends_with("\nFound 1 illegal token.\n"), "{}", output.err);
        assert_eq!(output.summary.illegal_tokens, 1);
        assert_eq!(output.summary.exit_code(), EXIT_ILLEGAL);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_summary_counts_every_illegal_token() {
        let path = temp_file("many.dhi", "@ # \"open");
        let output = run_files(&[path.as_str()], ScanOptions::default(), PLAIN);

        assert_eq!(output.summary.illegal_tokens, 3);
        assert!(output.err.contains("error DHI1002: Unterminated string literal."));
        assert!(output.err.ends_with("\nFound 3 illegal tokens.\n"), "{}", output.err);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_missing_file_outranks_illegal_tokens() {
        let illegal = temp_file("mixed.dhi", "@");
        let missing = "does/not/exist.dhi";
        let output = run_files(&[missing, illegal.as_str()], ScanOptions::default(), PLAIN);

        assert!(output
            .err
            .starts_with("error: DHI5001: Could not read file 'does/not/exist.dhi': "));
        assert!(!output.out.contains(missing));
        assert!(output.out.starts_with(&format!("==> {} <==\n", illegal)), "{}", output.out);
        assert_eq!(
            output.summary,
            RunSummary {
                read_failures: 1,
                illegal_tokens: 1,
            }
        );
        assert_eq!(output.summary.exit_code(), EXIT_IO_FAILURE);
        std::fs::remove_file(illegal).unwrap();
    }

    #[test]
    fn test_stop_on_illegal_ends_the_token_stream() {
        let path = temp_file("stop.dhi", "ސ @ 1 €");
        let options = ScanOptions {
            stop_on_illegal: true,
        };
        let output = run_files(&[path.as_str()], options, PLAIN);

        assert!(output.out.ends_with("Token(ILLEGAL, '@')\nIllegal character found: '@'\n"));
        assert!(!output.out.contains("Token(EOF, '')"));
        assert!(!output.out.contains("Token(ILLEGAL, '€')"));
        assert!(!output.out.contains("Token(NUMBER, '1')"));
        assert_eq!(output.summary.illegal_tokens, 1);
        assert_eq!(output.summary.exit_code(), EXIT_ILLEGAL);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_no_source_skips_the_echo() {
        let path = temp_file("quiet.dhi", "1 + 2");
        let print = PrintOptions {
            echo_source: false,
            use_color: false,
        };
        let output = run_files(&[path.as_str()], ScanOptions::default(), print);

        assert!(output.out.starts_with("--- Tokens ---\nToken(NUMBER, '1')\n"));
        assert!(!output.out.contains("--- Input Code ---"));
        assert!(!output.out.contains("1 + 2"));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_headers_only_for_multiple_files_in_argument_order() {
        let first = temp_file("first.dhi", "1");
        let second = temp_file("second.dhi", "2");

        let single = run_files(&[first.as_str()], ScanOptions::default(), PLAIN);
        assert!(!single.out.contains("==>"));

        let both = run_files(&[second.as_str(), first.as_str()], ScanOptions::default(), PLAIN);
        let second_at = both.out.find(&format!("==> {} <==", second)).unwrap();
        let first_at = both.out.find(&format!("==> {} <==", first)).unwrap();
        assert!(second_at < first_at);
        assert_eq!(both.summary.exit_code(), 0);

        std::fs::remove_file(first).unwrap();
        std::fs::remove_file(second).unwrap();
    }

    #[test]
    fn test_colored_output_uses_graphical_reports() {
        let path = temp_file("color.dhi", "@");
        let print = PrintOptions {
            echo_source: false,
            use_color: true,
        };
        let output = run_files(&[path.as_str()], ScanOptions::default(), print);

        assert!(output.err.contains("DHI1001"), "{}", output.err);
        assert!(output.err.contains(&format!("{}Found 1 illegal token.{}", RED, RESET)));
        std::fs::remove_file(path).unwrap();
    }
}
