//! End-of-phase sound.
//!
//! Rings the terminal bell and optionally runs an external player command.
//! Stopping kills the player so the next phase starts from silence.

use crate::config::ChimeConfig;
use std::io::{self, Write};
use std::process::{Child, Command, Stdio};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum ChimeError {
    #[error("chime command is empty")]
    EmptyCommand,
    #[error("chime command has invalid quoting: {0}")]
    InvalidQuoting(String),
    #[error("failed to run chime command `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to ring terminal bell: {0}")]
    Bell(#[from] io::Error),
}

pub struct Chime {
    bell: bool,
    command: Option<Vec<String>>,
    playing: Option<Child>,
}

impl Chime {
    pub fn from_config(config: &ChimeConfig) -> Result<Self, ChimeError> {
        let command = match config.command.as_deref() {
            Some(line) => Some(parse_command(line)?),
            None => None,
        };
        Ok(Self {
            bell: config.bell,
            command,
            playing: None,
        })
    }

    /// Chime with neither bell nor command.
    pub fn silent() -> Self {
        Self {
            bell: false,
            command: None,
            playing: None,
        }
    }

    pub fn is_playing(&mut self) -> bool {
        self.reap();
        self.playing.is_some()
    }

    /// Drop the player handle once the process has exited on its own.
    pub fn reap(&mut self) {
        let Some(child) = self.playing.as_mut() else { return };
        match child.try_wait() {
            Ok(None) => {}
            Ok(Some(status)) => {
                debug!(pid = child.id(), %status, "chime finished");
                self.playing = None;
            }
            Err(e) => {
                debug!(pid = child.id(), "chime status unavailable: {}", e);
                self.playing = None;
            }
        }
    }

    /// Restart the sound from the top: stop anything still playing, ring the
    /// bell into `out`, then launch the player command.
    pub fn play(&mut self, out: &mut impl Write) -> Result<(), ChimeError> {
        self.stop();

        if self.bell {
            out.write_all(b"\x07")?;
            out.flush()?;
        }

        if let Some(argv) = &self.command {
            let (program, args) = argv.split_first().ok_or(ChimeError::EmptyCommand)?;
            let child = Command::new(program)
                .args(args)
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn()
                .map_err(|source| ChimeError::Spawn {
                    program: program.clone(),
                    source,
                })?;
            info!(pid = child.id(), "chime started");
            self.playing = Some(child);
        }
        Ok(())
    }

    /// Silence and rewind: kill the player if it is still running.
    pub fn stop(&mut self) {
        if let Some(mut child) = self.playing.take() {
            let pid = child.id();
            // Fails with InvalidInput when the player already exited
            if let Err(e) = child.kill() {
                debug!(pid, "chime kill failed: {}", e);
            }
            match child.wait() {
                Ok(status) => debug!(pid, %status, "chime stopped"),
                Err(e) => debug!(pid, "chime wait failed: {}", e),
            }
        }
    }
}

impl Drop for Chime {
    fn drop(&mut self) {
        self.stop();
    }
}

fn parse_command(line: &str) -> Result<Vec<String>, ChimeError> {
    let argv = shlex::split(line).ok_or_else(|| ChimeError::InvalidQuoting(line.to_string()))?;
    if argv.is_empty() {
        return Err(ChimeError::EmptyCommand);
    }
    Ok(argv)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(bell: bool, command: Option<&str>) -> ChimeConfig {
        ChimeConfig {
            bell,
            command: command.map(String::from),
        }
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("paplay '/tmp/my bell.oga'").unwrap(),
            vec!["paplay".to_string(), "/tmp/my bell.oga".to_string()]
        );
        assert!(matches!(parse_command("   "), Err(ChimeError::EmptyCommand)));
        assert!(matches!(
            parse_command("paplay 'unterminated"),
            Err(ChimeError::InvalidQuoting(_))
        ));
    }

    #[test]
    fn test_bell_writes_bel() {
        let mut chime = Chime::from_config(&config(true, None)).unwrap();
        let mut out = Vec::new();
        chime.play(&mut out).unwrap();
        assert_eq!(out, b"\x07");
        assert!(!chime.is_playing());
    }

    #[test]
    fn test_silent_chime_writes_nothing() {
        let mut chime = Chime::silent();
        let mut out = Vec::new();
        chime.play(&mut out).unwrap();
        assert!(out.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_stop_kills_player() {
        let mut chime = Chime::from_config(&config(false, Some("sleep 30"))).unwrap();
        chime.play(&mut io::sink()).unwrap();
        assert!(chime.is_playing());
        chime.stop();
        assert!(!chime.is_playing());
    }

    #[cfg(unix)]
    #[test]
    fn test_reap_clears_finished_player() {
        let mut chime = Chime::from_config(&config(false, Some("true"))).unwrap();
        chime.play(&mut io::sink()).unwrap();

        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
        while chime.playing.is_some() && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(10));
            chime.reap();
        }
        assert!(chime.playing.is_none());
        assert!(!chime.is_playing());

        // Stopping after a natural exit is harmless
        chime.stop();
    }

    #[test]
    fn test_missing_player_reports_spawn_error() {
        let mut chime =
            Chime::from_config(&config(false, Some("pomoclock-no-such-player --loud"))).unwrap();
        let err = chime.play(&mut io::sink()).unwrap_err();
        assert!(matches!(err, ChimeError::Spawn { ref program, .. } if program == "pomoclock-no-such-player"));
    }
}
