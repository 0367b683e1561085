//! Line buffer tests

use uart_console::{LineBuffer, INPUT_LINE_SIZE};

fn feed_all(buf: &mut LineBuffer, bytes: &[u8]) {
    for &b in bytes {
        buf.feed(b);
    }
}

#[test]
fn test_printable_bytes_append() {
    let mut buf = LineBuffer::new();

    feed_all(&mut buf, b"help");

    assert_eq!(buf.as_str(), "help");
    assert_eq!(buf.len(), 4);
}

#[test]
fn test_backspace_erases_last_character() {
    let mut buf = LineBuffer::new();

    feed_all(&mut buf, b"help");
    buf.feed(0x08);
    buf.feed(0x08);

    assert_eq!(buf.as_str(), "he");
}

#[test]
fn test_del_acts_as_backspace() {
    let mut buf = LineBuffer::new();

    feed_all(&mut buf, b"ab");
    buf.feed(0x7F);

    assert_eq!(buf.as_str(), "a");
}

#[test]
fn test_backspace_on_empty_never_underflows() {
    let mut buf = LineBuffer::new();

    buf.feed(0x08);
    buf.feed(0x7F);

    assert_eq!(buf.as_str(), "");
    assert!(buf.is_empty());
}

#[test]
fn test_carriage_return_is_a_no_op() {
    let mut buf = LineBuffer::new();

    feed_all(&mut buf, b"ab");
    buf.feed(b'\r');
    feed_all(&mut buf, b"cd");

    assert_eq!(buf.as_str(), "abcd");
}

#[test]
fn test_non_printable_bytes_dropped() {
    let mut buf = LineBuffer::new();

    buf.feed(0x01);
    buf.feed(0x1B);
    buf.feed(0x80);
    buf.feed(0xFF);
    feed_all(&mut buf, b"ok");

    assert_eq!(buf.as_str(), "ok");
}

#[test]
fn test_overflow_is_silent_truncation() {
    let mut buf = LineBuffer::new();

    // Feed 70 printable characters into a 50-byte line.
    for i in 0..70u8 {
        buf.feed(b'a' + (i % 26));
    }

    assert_eq!(buf.len(), INPUT_LINE_SIZE);
    let expected: Vec<u8> = (0..INPUT_LINE_SIZE as u8).map(|i| b'a' + (i % 26)).collect();
    assert_eq!(buf.as_bytes(), &expected[..]);
}

#[test]
fn test_backspace_collapses_with_preceding_byte() {
    let mut buf = LineBuffer::new();

    feed_all(&mut buf, b"abc");
    buf.feed(0x08);
    buf.feed(b'd');

    assert_eq!(buf.as_str(), "abd");
}

#[test]
fn test_editing_scenario_hello() {
    let mut buf = LineBuffer::new();

    // "hel<backspace>llo" nets out to "hello".
    feed_all(&mut buf, b"hel\x08llo");

    assert_eq!(buf.as_str(), "hello");
}

#[test]
fn test_clear_resets_to_empty() {
    let mut buf = LineBuffer::new();

    feed_all(&mut buf, b"help");
    buf.clear();

    assert_eq!(buf.as_str(), "");
    assert!(buf.is_empty());
}

#[test]
fn test_copy_from_snapshots_other_line() {
    let mut first = LineBuffer::new();
    let mut second = LineBuffer::new();

    feed_all(&mut first, b"uptime");
    second.copy_from(&first);
    first.clear();

    assert_eq!(second.as_str(), "uptime");
}

#[test]
fn test_capacity_is_fifty_bytes() {
    let buf = LineBuffer::new();

    assert_eq!(buf.capacity(), 50);
    assert_eq!(INPUT_LINE_SIZE, 50);
}
