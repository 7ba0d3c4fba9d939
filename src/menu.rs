//! Interactive category menu
//!
//! Categories are listed as `1..=n`; entry `n + 1` exits.

use crate::models::Category;
use std::io::{self, BufRead};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Outcome of one line of menu input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuChoice {
    /// Zero-based index into the category list
    Select(usize),
    Exit,
    /// Input rejected; carries the prompt to show
    Invalid(String),
}

/// Parses a menu answer for a list of `len` categories
pub fn parse_choice(input: &str, len: usize) -> MenuChoice {
    let Ok(number) = input.trim().parse::<usize>() else {
        return MenuChoice::Invalid("Please enter a number.".to_string());
    };

    if number == len + 1 {
        MenuChoice::Exit
    } else if (1..=len).contains(&number) {
        MenuChoice::Select(number - 1)
    } else {
        MenuChoice::Invalid(format!("Please enter a number between 1 and {}.", len + 1))
    }
}

/// Renders the numbered menu, including the exit entry
pub fn render_menu(categories: &[Category]) -> String {
    let mut menu = String::new();
    for (index, category) in categories.iter().enumerate() {
        menu.push_str(&format!(
            "{}. {} ({} keywords)\n",
            index + 1,
            category.name,
            category.keyword_count
        ));
    }
    menu.push_str(&format!("{}. Exit\n", categories.len() + 1));
    menu
}

/// Menu answers read on a dedicated thread
///
/// A blocking read of the terminal cannot be interrupted, so it runs outside
/// the runtime and waiting for the next answer can be abandoned on
/// cancellation without holding up shutdown.
pub struct LineReader {
    lines: mpsc::Receiver<io::Result<String>>,
}

impl LineReader {
    pub fn spawn<R>(reader: R) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(1);
        std::thread::spawn(move || {
            for line in reader.lines() {
                if tx.blocking_send(line).is_err() {
                    break;
                }
            }
        });
        Self { lines: rx }
    }

    /// Next answer, or `None` at end of input or once `cancel` fires
    pub async fn next_line(&mut self, cancel: &CancellationToken) -> io::Result<Option<String>> {
        tokio::select! {
            _ = cancel.cancelled() => Ok(None),
            line = self.lines.recv() => line.transpose(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor, Read};
    use std::time::Duration;

    /// A terminal nobody types into
    struct SilentInput;

    impl Read for SilentInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            std::thread::sleep(Duration::from_secs(3600));
            Ok(0)
        }
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("1", 3), MenuChoice::Select(0));
        assert_eq!(parse_choice(" 3\n", 3), MenuChoice::Select(2));
        assert_eq!(parse_choice("4", 3), MenuChoice::Exit);

        assert!(matches!(parse_choice("0", 3), MenuChoice::Invalid(_)));
        assert!(matches!(parse_choice("5", 3), MenuChoice::Invalid(_)));
        assert!(matches!(parse_choice("two", 3), MenuChoice::Invalid(_)));
        assert!(matches!(parse_choice("-1", 3), MenuChoice::Invalid(_)));
    }

    #[test]
    fn test_exit_only_menu() {
        assert_eq!(parse_choice("1", 0), MenuChoice::Exit);
    }

    #[test]
    fn test_render_menu() {
        let categories = vec![
            Category {
                id: "c1".to_string(),
                name: "Travel".to_string(),
                keyword_count: 120,
            },
            Category {
                id: "c2".to_string(),
                name: "Food".to_string(),
                keyword_count: 80,
            },
        ];

        assert_eq!(
            render_menu(&categories),
            "1. Travel (120 keywords)\n2. Food (80 keywords)\n3. Exit\n"
        );
    }

    #[tokio::test]
    async fn test_line_reader_yields_lines_then_end() {
        let cancel = CancellationToken::new();
        let mut reader = LineReader::spawn(Cursor::new("2\nexit\n"));

        assert_eq!(reader.next_line(&cancel).await.unwrap().as_deref(), Some("2"));
        assert_eq!(reader.next_line(&cancel).await.unwrap().as_deref(), Some("exit"));
        assert_eq!(reader.next_line(&cancel).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_cancel_interrupts_pending_read() {
        let cancel = CancellationToken::new();
        let mut reader = LineReader::spawn(BufReader::new(SilentInput));

        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            trigger.cancel();
        });

        let line = tokio::time::timeout(Duration::from_secs(5), reader.next_line(&cancel))
            .await
            .expect("read was not interrupted by cancellation");
        assert_eq!(line.unwrap(), None);
    }
}
