//! Stdin reader: one JSON-encoded `PlayerCommand` per line.

use std::io::{self, BufRead};
use std::sync::mpsc;

use log::{debug, warn};

use arena_core::commands::PlayerCommand;

use crate::state::GameLoopCommand;

/// Parse one input line. Blank lines yield `None`.
pub fn parse_command_line(line: &str) -> Option<Result<PlayerCommand, serde_json::Error>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(serde_json::from_str(line))
}

/// Forward every valid command line to the game loop. Bad lines are logged
/// and skipped. Returns how many commands were sent; stops early if the
/// game loop has gone away.
pub fn forward_commands<R: BufRead>(reader: R, tx: &mpsc::Sender<GameLoopCommand>) -> usize {
    let mut sent = 0;

    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                warn!("Stopped reading input: {e}");
                break;
            }
        };

        match parse_command_line(&line) {
            None => {}
            Some(Ok(command)) => {
                debug!("Input command: {command:?}");
                if tx.send(GameLoopCommand::PlayerCommand(command)).is_err() {
                    break;
                }
                sent += 1;
            }
            Some(Err(e)) => warn!("Ignoring input line {}: {e}", index + 1),
        }
    }

    sent
}

/// Read commands from stdin on a background thread. When `shutdown_on_eof`
/// is set, closing stdin stops the game loop.
pub fn spawn_stdin_reader(
    tx: mpsc::Sender<GameLoopCommand>,
    shutdown_on_eof: bool,
) -> io::Result<()> {
    std::thread::Builder::new()
        .name("arena-stdin".into())
        .spawn(move || {
            let stdin = io::stdin();
            let sent = forward_commands(stdin.lock(), &tx);
            debug!("Input closed after {sent} commands");
            if shutdown_on_eof {
                let _ = tx.send(GameLoopCommand::Shutdown);
            }
        })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_valid_line() {
        let command = parse_command_line(r#"{"type":"FireRockets"}"#).unwrap().unwrap();
        assert!(matches!(command, PlayerCommand::FireRockets));
    }

    #[test]
    fn test_parse_blank_line() {
        assert!(parse_command_line("   ").is_none());
    }

    #[test]
    fn test_parse_bad_line() {
        assert!(parse_command_line(r#"{"type":"Teleport"}"#).unwrap().is_err());
        assert!(parse_command_line("not json").unwrap().is_err());
    }

    #[test]
    fn test_forward_commands_skips_bad_lines() {
        let input = "{\"type\":\"StartGame\"}\n\
                     \n\
                     garbage\n\
                     {\"type\":\"SetInput\",\"forward\":1.0,\"turn\":-0.5}\n";
        let (tx, rx) = mpsc::channel();

        let sent = forward_commands(Cursor::new(input), &tx);
        assert_eq!(sent, 2);

        let received: Vec<GameLoopCommand> = rx.try_iter().collect();
        assert!(matches!(
            received[0],
            GameLoopCommand::PlayerCommand(PlayerCommand::StartGame)
        ));
        assert!(matches!(
            received[1],
            GameLoopCommand::PlayerCommand(PlayerCommand::SetInput { forward, turn })
                if forward == 1.0 && turn == -0.5
        ));
    }

    #[test]
    fn test_forward_stops_when_loop_gone() {
        let (tx, rx) = mpsc::channel();
        drop(rx);
        let sent = forward_commands(Cursor::new("{\"type\":\"Smash\"}\n"), &tx);
        assert_eq!(sent, 0);
    }
}
