//! Output side of the `sll_demo` driver, kept generic over the streams so
//! it can be exercised without a terminal.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use raii_containers::SinglyLinkedList;
use tracing::debug;

pub const PAUSE_PROMPT: &str = "Press Enter to continue . . . ";

/// Writes one `original|copy` line per position, stopping at the shorter list.
pub fn write_parallel<T, W>(
    original: &SinglyLinkedList<T>,
    copy: &SinglyLinkedList<T>,
    out: &mut W,
) -> io::Result<()>
where
    T: Display + PartialEq,
    W: Write,
{
    for (index, (left, right)) in original.iter().zip(copy.iter()).enumerate() {
        debug!(index, equal = left == right, "comparing copied element");
        writeln!(out, "{}|{}", left, right)?;
    }
    Ok(())
}

/// Prompts and blocks until a line (or end of input) arrives.
pub fn wait_for_acknowledgment<R, W>(input: &mut R, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(out, "{}", PAUSE_PROMPT)?;
    out.flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use raii_containers::singly_linked_list;
    use std::io::Cursor;

    #[test]
    fn test_write_parallel() {
        let original = singly_linked_list![1, 2, 3, 4, 5];
        let copy = original.clone();
        let mut out = Vec::new();
        write_parallel(&original, &copy, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1|1\n2|2\n3|3\n4|4\n5|5\n");
    }

    #[test]
    fn test_write_parallel_empty() {
        let original: SinglyLinkedList<i64> = SinglyLinkedList::new();
        let mut out = Vec::new();
        write_parallel(&original, &original.clone(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_wait_for_acknowledgment() {
        let mut input = Cursor::new(b"\nleftover\n".to_vec());
        let mut out = Vec::new();
        wait_for_acknowledgment(&mut input, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), PAUSE_PROMPT);
        assert_eq!(input.position(), 1);
    }

    #[test]
    fn test_wait_for_acknowledgment_at_eof() {
        let mut input = Cursor::new(Vec::new());
        let mut out = Vec::new();
        assert!(wait_for_acknowledgment(&mut input, &mut out).is_ok());
    }
}
