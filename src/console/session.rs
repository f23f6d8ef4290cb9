//! One running console command and its conversation with the operator.

use super::error::ConsoleError;
use tokio::sync::{mpsc, watch};

/// The command side of a console session.
///
/// A command alternates between sending one message and reading one line.
/// Reads and writes also watch the connection's `done` flag, so a command
/// whose operator disconnected sees [`ConsoleError::EndOfInput`] instead of
/// waiting forever.
#[derive(Debug)]
pub struct Session {
    input: mpsc::UnboundedReceiver<String>,
    output: mpsc::Sender<String>,
    done: watch::Receiver<bool>,
}

/// `true` once the connection signalled completion or its sender is gone.
pub(crate) fn is_closed(done: &watch::Receiver<bool>) -> bool {
    let flagged = *done.borrow();
    flagged || done.has_changed().is_err()
}

async fn closed(done: &mut watch::Receiver<bool>) {
    // Err means the sender was dropped, which also ends the connection
    let _ = done.wait_for(|closed| *closed).await;
}

impl Session {
    pub(crate) fn new(
        input: mpsc::UnboundedReceiver<String>,
        output: mpsc::Sender<String>,
        done: watch::Receiver<bool>,
    ) -> Self {
        Self {
            input,
            output,
            done,
        }
    }

    /// Send a message to the operator.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::EndOfInput`] if the connection closed or nobody is
    /// listening anymore.
    pub async fn print(&mut self, message: impl Into<String>) -> Result<(), ConsoleError> {
        let message = message.into();
        tokio::select! {
            biased;
            sent = self.output.send(message) => sent.map_err(|_| ConsoleError::EndOfInput),
            _ = closed(&mut self.done) => Err(ConsoleError::EndOfInput),
        }
    }

    /// Wait for the operator's next line.
    ///
    /// A line already delivered is returned even if the connection closed
    /// right after.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::EndOfInput`] once the connection closed.
    pub async fn read_line(&mut self) -> Result<String, ConsoleError> {
        tokio::select! {
            biased;
            line = self.input.recv() => line.ok_or(ConsoleError::EndOfInput),
            _ = closed(&mut self.done) => Err(ConsoleError::EndOfInput),
        }
    }

    /// Print `prompt`, then wait for the answer.
    ///
    /// # Errors
    ///
    /// As [`print`](Self::print) and [`read_line`](Self::read_line).
    pub async fn ask(&mut self, prompt: impl Into<String>) -> Result<String, ConsoleError> {
        self.print(prompt).await?;
        self.read_line().await
    }
}
