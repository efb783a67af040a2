//! Interactive command sessions.
//!
//! [`CommandSession`] is the capability boundary the collector works
//! against: send a command string, get its text output back. The
//! concrete [`SshSession`] drives a PTY channel with prompt detection;
//! tests substitute a mock.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use log::debug;
use russh::{Channel, ChannelMsg, client::Msg};

use crate::channel::PatternBuffer;
use crate::error::{ChannelError, Result, SessionError};
use crate::platform::Dialect;
use crate::transport::{SshConfig, SshTransport};

/// A command session against one device.
///
/// Object-safe so the inventory assembler can take `&mut dyn
/// CommandSession` and tests can inject canned outputs.
#[async_trait]
pub trait CommandSession: Send {
    /// Send a command and return its output with the command echo and
    /// trailing prompt removed. Fails when the device rejects the
    /// command (dialect failure pattern matched).
    async fn send(&mut self, command: &str) -> Result<String>;

    /// Close the session.
    async fn close(&mut self) -> Result<()>;
}

/// SSH-backed command session speaking one [`Dialect`].
pub struct SshSession {
    transport: Option<SshTransport>,
    channel: Option<Channel<Msg>>,
    buffer: PatternBuffer,
    dialect: Dialect,
    timeout: Duration,
    banner: String,
}

impl SshSession {
    /// Connect, open the PTY channel, and read up to the first prompt.
    /// The text consumed on the way to that prompt is kept as the
    /// login banner.
    pub async fn open(dialect: Dialect, mut config: SshConfig) -> Result<Self> {
        config.terminal_width = dialect.terminal_width;
        config.terminal_height = dialect.terminal_height;
        let timeout = config.timeout;

        let transport = SshTransport::connect(config).await?;
        let channel = transport.open_channel().await?;

        let mut session = Self {
            transport: Some(transport),
            channel: Some(channel),
            buffer: PatternBuffer::default(),
            dialect,
            timeout,
            banner: String::new(),
        };

        session.read_until_prompt().await?;
        session.banner = String::from_utf8_lossy(&session.buffer.take()).to_string();

        Ok(session)
    }

    /// The login banner captured while waiting for the first prompt.
    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Read channel data into the buffer until the dialect prompt
    /// shows up in the buffer tail.
    async fn read_until_prompt(&mut self) -> Result<()> {
        let pattern = self.dialect.prompt_pattern.clone();
        let deadline = Instant::now() + self.timeout;

        loop {
            if self.buffer.tail_contains(&pattern) {
                return Ok(());
            }

            let remaining = deadline
                .checked_duration_since(Instant::now())
                .ok_or(ChannelError::PatternTimeout(self.timeout))?;

            let channel = self.channel.as_mut().ok_or(SessionError::NotConnected)?;

            match tokio::time::timeout(remaining, channel.wait()).await {
                Err(_) => return Err(ChannelError::PatternTimeout(self.timeout).into()),
                Ok(None) => return Err(ChannelError::Closed.into()),
                Ok(Some(ChannelMsg::Data { ref data })) => self.buffer.extend(data),
                Ok(Some(ChannelMsg::ExtendedData { ref data, .. })) => self.buffer.extend(data),
                Ok(Some(ChannelMsg::Eof)) | Ok(Some(ChannelMsg::Close)) => {
                    return Err(ChannelError::Closed.into());
                }
                Ok(Some(_)) => {}
            }
        }
    }

    /// Strip the command echo from the front and the prompt line from
    /// the back of raw output.
    fn normalize_output(raw: &str, command: &str) -> String {
        let output = raw
            .strip_prefix(command)
            .unwrap_or(raw)
            .trim_start_matches(['\r', '\n']);

        match memchr::memrchr(b'\n', output.as_bytes()) {
            Some(pos) => output[..pos].to_string(),
            None => output.to_string(),
        }
    }

    /// Check output against the dialect's failure substrings and build
    /// the offending line into the error message.
    fn detect_failure(&self, command: &str, output: &str) -> Option<SessionError> {
        for pattern in &self.dialect.failed_when_contains {
            if output.contains(pattern) {
                let line = output
                    .lines()
                    .find(|l| l.contains(pattern))
                    .unwrap_or(pattern)
                    .trim();
                return Some(SessionError::CommandFailed {
                    command: command.to_string(),
                    message: line.to_string(),
                });
            }
        }
        None
    }
}

#[async_trait]
impl CommandSession for SshSession {
    async fn send(&mut self, command: &str) -> Result<String> {
        self.buffer.clear();

        {
            let channel = self.channel.as_mut().ok_or(SessionError::NotConnected)?;
            let payload = format!("{command}\n");
            channel
                .data(payload.as_bytes())
                .await
                .map_err(ChannelError::Ssh)?;
        }

        self.read_until_prompt().await?;

        let raw = String::from_utf8_lossy(&self.buffer.take()).to_string();
        let result = Self::normalize_output(&raw, command);
        debug!("'{}' returned {} bytes", command, result.len());

        if let Some(failure) = self.detect_failure(command, &result) {
            return Err(failure.into());
        }

        Ok(result)
    }

    async fn close(&mut self) -> Result<()> {
        if let Some(channel) = self.channel.take() {
            // EOF failures on teardown are not interesting.
            let _ = channel.eof().await;
        }
        if let Some(transport) = self.transport.take() {
            transport.close().await?;
        }
        Ok(())
    }
}
