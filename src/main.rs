extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;

use ansi_term::Style;
use linefeed::{DefaultTerminal, Interface, ReadResult};
use minibasic::error;
use minibasic::lang::{lex, Keyword, Token};
use minibasic::mach::{Console, Runtime};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};

fn main() {
    ctrlc::set_handler(|| {
        std::process::exit(130);
    })
    .expect("Error setting Ctrl-C handler");
    let result = match std::env::args().nth(1) {
        Some(filename) => run_file(&filename),
        None => repl(),
    };
    if let Err(error) = result {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

/// Loads a program file and runs it to completion. Lines without a
/// number are auto-numbered 10, 20, 30... by file position.
fn run_file(filename: &str) -> std::io::Result<()> {
    let reader = BufReader::new(File::open(filename)?);
    let mut runtime = Runtime::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let (number, text) = split_line_number(&line);
        let number = match number {
            Some(number) => number,
            None => match auto_number(index) {
                Some(number) => number,
                None => {
                    eprintln!("TOO MANY LINES IN {}", filename);
                    std::process::exit(1);
                }
            },
        };
        if let Err(error) = runtime.load_line(number, text) {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    }
    let mut console = StdConsole {};
    if let Err(error) = runtime.run(&mut console) {
        eprintln!("{}", error);
        std::process::exit(1);
    }
    Ok(())
}

fn auto_number(index: usize) -> Option<u16> {
    let number = index.checked_mul(10)?.checked_add(10)?;
    if number <= usize::from(u16::max_value()) {
        Some(number as u16)
    } else {
        None
    }
}

fn repl() -> std::io::Result<()> {
    let interface = Interface::new("minibasic")?;
    interface.set_prompt("")?;
    interface.write_fmt(format_args!("MINIBASIC\nREADY.\n"))?;
    let mut runtime = Runtime::new();
    loop {
        let string = match interface.read_line()? {
            ReadResult::Input(string) => string,
            ReadResult::Signal(_) | ReadResult::Eof => break,
        };
        if string.trim().is_empty() {
            continue;
        }
        interface.add_history_unique(string.clone());
        match string.trim().to_ascii_uppercase().as_str() {
            "QUIT" | "EXIT" => break,
            "NEW" => {
                runtime.reset();
                continue;
            }
            "LIST" => {
                for line in runtime.lines() {
                    interface.write_fmt(format_args!("{}\n", line))?;
                }
                continue;
            }
            "VARS" => {
                for (name, val) in runtime.variables() {
                    interface.write_fmt(format_args!("{} = {}\n", name, val))?;
                }
                continue;
            }
            "HELP" => {
                interface.write_fmt(format_args!("{}", HELP))?;
                continue;
            }
            _ => {}
        }
        let mut console = TermConsole {
            interface: &interface,
        };
        let result = match split_line_number(&string) {
            (Some(number), text) => {
                if text.trim().is_empty() {
                    runtime.remove_line(number);
                    Ok(())
                } else {
                    runtime.load_line(number, text)
                }
            }
            (None, text) => {
                if text.trim().to_ascii_uppercase() == "RUN" {
                    runtime.run(&mut console)
                } else {
                    immediate(&mut runtime, text, &mut console)
                }
            }
        };
        if let Err(error) = result {
            interface.write_fmt(format_args!(
                "{}\n",
                Style::new().bold().paint(error.to_string())
            ))?;
        }
    }
    Ok(())
}

/// Direct mode accepts PRINT, LET, INPUT and implicit assignment; all
/// control flow must live in a stored program.
fn immediate(
    runtime: &mut Runtime,
    text: &str,
    console: &mut dyn Console,
) -> Result<(), minibasic::lang::Error> {
    let (_, tokens) = lex(text);
    match tokens.first() {
        Some(Token::Keyword(Keyword::Print))
        | Some(Token::Keyword(Keyword::Let))
        | Some(Token::Keyword(Keyword::Input))
        | Some(Token::Variable(_)) => runtime.execute_immediate(&tokens, console),
        Some(_) => Err(error!(SyntaxError; "ILLEGAL DIRECT")),
        None => Ok(()),
    }
}

/// Splits a leading line number off an entered line. "10 PRINT X"
/// becomes `(Some(10), " PRINT X")`.
fn split_line_number(line: &str) -> (Option<u16>, &str) {
    let trimmed = line.trim_start();
    let rest = trimmed.trim_start_matches(|c: char| c.is_ascii_digit());
    let digits = trimmed.len() - rest.len();
    if digits == 0 {
        return (None, trimmed);
    }
    match trimmed[..digits].parse::<u16>() {
        Ok(number) => (Some(number), rest),
        Err(_) => (None, trimmed),
    }
}

const HELP: &str = "\
Statements: PRINT LET INPUT IF GOTO GOSUB RETURN FOR NEXT REM END STOP
Functions:  ABS INT SQR SIN COS TAN RND LEN VAL STR$ CHR$ ASC
Commands:   RUN LIST VARS NEW HELP QUIT
Enter a numbered line to store it; a bare number deletes that line.
";

struct TermConsole<'a> {
    interface: &'a Interface<DefaultTerminal>,
}

impl Console for TermConsole<'_> {
    fn print(&mut self, text: &str) {
        let _ = self.interface.write_fmt(format_args!("{}", text));
    }
    fn input(&mut self, prompt: &str) -> Option<String> {
        if self.interface.set_prompt(prompt).is_err() {
            return None;
        }
        let result = self.interface.read_line();
        let _ = self.interface.set_prompt("");
        match result {
            Ok(ReadResult::Input(reply)) => Some(reply),
            _ => None,
        }
    }
}

struct StdConsole {}

impl Console for StdConsole {
    fn print(&mut self, text: &str) {
        print!("{}", text);
        let _ = std::io::stdout().flush();
    }
    fn input(&mut self, prompt: &str) -> Option<String> {
        print!("{}", prompt);
        let _ = std::io::stdout().flush();
        let mut reply = String::new();
        match std::io::stdin().read_line(&mut reply) {
            Ok(0) | Err(_) => None,
            Ok(_) => {
                while reply.ends_with('\n') || reply.ends_with('\r') {
                    reply.pop();
                }
                Some(reply)
            }
        }
    }
}
