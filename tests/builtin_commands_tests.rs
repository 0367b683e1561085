//! Built-in command set tests

use uart_console::{BuiltinInterpreter, CommandInterpreter, OutputBuffer, ProcessStatus};

fn run_to_done(interpreter: &mut BuiltinInterpreter, line: &[u8]) -> Vec<String> {
    let mut out = OutputBuffer::with_capacity(256);
    let mut chunks = Vec::new();
    loop {
        out.clear();
        let status = interpreter.process(line, &mut out);
        chunks.push(String::from_utf8_lossy(out.as_bytes()).into_owned());
        if status.is_done() {
            break;
        }
    }
    chunks
}

#[test]
fn test_help_emits_one_chunk_per_command() {
    let mut interpreter = BuiltinInterpreter::new();

    let chunks = run_to_done(&mut interpreter, b"help");

    assert_eq!(chunks.len(), 3);
    assert!(chunks[0].contains("help"));
    assert!(chunks[1].contains("echo"));
    assert!(chunks[2].contains("uptime"));
}

#[test]
fn test_help_listing_restarts_cleanly() {
    let mut interpreter = BuiltinInterpreter::new();

    let first = run_to_done(&mut interpreter, b"help");
    let second = run_to_done(&mut interpreter, b"help");

    assert_eq!(first, second);
}

#[test]
fn test_echo_returns_arguments() {
    let mut interpreter = BuiltinInterpreter::new();
    let mut out = OutputBuffer::with_capacity(256);

    let status = interpreter.process(b"echo hello world", &mut out);

    assert_eq!(status, ProcessStatus::Done);
    assert_eq!(out.as_bytes(), b"hello world\r\n");
}

#[test]
fn test_uptime_reports_seconds() {
    let mut interpreter = BuiltinInterpreter::new();
    let mut out = OutputBuffer::with_capacity(256);

    let status = interpreter.process(b"uptime", &mut out);

    assert_eq!(status, ProcessStatus::Done);
    let text = String::from_utf8_lossy(out.as_bytes()).into_owned();
    assert!(text.starts_with("up "));
}

#[test]
fn test_unknown_command_reported_in_one_chunk() {
    let mut interpreter = BuiltinInterpreter::new();

    let chunks = run_to_done(&mut interpreter, b"frobnicate");

    assert_eq!(chunks.len(), 1);
    assert!(chunks[0].contains("not recognised"));
}

#[test]
fn test_blank_line_produces_no_output() {
    let mut interpreter = BuiltinInterpreter::new();
    let mut out = OutputBuffer::with_capacity(256);

    let status = interpreter.process(b"", &mut out);

    assert_eq!(status, ProcessStatus::Done);
    assert!(out.is_empty());
}
