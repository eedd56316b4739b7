use std::io::Read;
use std::process::ExitCode;

use codespan_reporting::files::SimpleFile;
use tallyexpr::parser::ParseError;

use crate::cli::Cli;
use crate::editor::{Editor, EditorRead};
use crate::report::{Report, SimpleReport};

/// Where the expression comes from. No source means an interactive session.
enum Source {
    File(String),
    Stdin,
    Inline(String),
}

pub struct Driver {
    source: Option<Source>,
    quiet:  bool,
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}

impl Driver {
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(<Cli as clap::Parser>::parse())
    }

    fn from_config(cfg: Cli) -> Self {
        let source = if cfg.stdin {
            Some(Source::Stdin)
        } else if let Some(expr) = cfg.expr {
            Some(Source::Inline(expr))
        } else {
            cfg.file.map(Source::File)
        };

        Self {
            source,
            quiet: cfg.quiet,
        }
    }

    fn read_stdin() -> String {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .expect("Should read input from stdin");
        input
    }

    pub fn run(mut self) -> ExitCode {
        match self.source.take() {
            Some(source) => self.eval_once(source),
            None => match self.repl() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            },
        }
    }

    fn eval_once(&self, source: Source) -> ExitCode {
        let (name, input) = match source {
            Source::Inline(expr) => ("<expr>".to_string(), expr),
            Source::Stdin => ("<stdin>".to_string(), Self::read_stdin()),
            Source::File(path) => match std::fs::read_to_string(&path) {
                Ok(text) => (path, text),
                Err(err) => {
                    self.report_message(format!("cannot read {path}: {err}"));
                    return ExitCode::FAILURE;
                }
            },
        };

        match tallyexpr::evaluate(&input) {
            Ok(value) => {
                println!("{value}");
                ExitCode::SUCCESS
            }
            Err(err) => {
                self.report_parse_error(&name, input, &err);
                ExitCode::FAILURE
            }
        }
    }

    fn repl(&self) -> std::io::Result<()> {
        let mut editor = Editor::default();
        loop {
            let input = match editor.read()? {
                EditorRead::Read(input) => input,
                EditorRead::Break => break,
                EditorRead::Continue => continue,
            };

            match tallyexpr::evaluate(&input) {
                Ok(value) => println!("{value}"),
                Err(err) => self.report_parse_error("<stdin>", input, &err),
            }
        }

        Ok(())
    }

    fn report_parse_error(&self, name: &str, source: String, err: &ParseError) {
        if self.quiet {
            return;
        }
        let file = SimpleFile::new(name.to_string(), source);
        err.report(&file);
    }

    fn report_message(&self, message: String) {
        if self.quiet {
            return;
        }
        let file = SimpleFile::new(String::new(), String::new());
        SimpleReport::new(message).report(&file);
    }
}
