use minibasic::mach::{Console, Runtime};
use std::collections::VecDeque;

/// Captures PRINT output and feeds scripted INPUT replies.
pub struct TestConsole {
    pub output: String,
    replies: VecDeque<String>,
}

impl TestConsole {
    pub fn new() -> TestConsole {
        TestConsole::with_replies(&[])
    }

    pub fn with_replies(replies: &[&str]) -> TestConsole {
        TestConsole {
            output: String::new(),
            replies: replies.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Console for TestConsole {
    fn print(&mut self, text: &str) {
        self.output.push_str(text);
    }
    fn input(&mut self, prompt: &str) -> Option<String> {
        self.output.push_str(prompt);
        self.replies.pop_front()
    }
}

/// Loads numbered source lines, "10 PRINT X" style.
pub fn load(runtime: &mut Runtime, source: &[&str]) {
    for line in source {
        let trimmed = line.trim_start();
        let rest = trimmed.trim_start_matches(|c: char| c.is_ascii_digit());
        let digits = trimmed.len() - rest.len();
        let number = trimmed[..digits].parse::<u16>().unwrap();
        runtime.load_line(number, rest).unwrap();
    }
}

pub fn exec(source: &[&str]) -> String {
    exec_with(source, &[])
}

/// Runs the program and returns everything printed; a run error is
/// appended to the output the way the shell reports it.
pub fn exec_with(source: &[&str], replies: &[&str]) -> String {
    let mut runtime = Runtime::new();
    load(&mut runtime, source);
    let mut console = TestConsole::with_replies(replies);
    if let Err(error) = runtime.run(&mut console) {
        console.output.push_str(&format!("{}\n", error));
    }
    console.output
}
