//! Console dispatcher multiplexing command sessions over connection ids.

use super::admin::ExchangeAdmin;
use super::commands::{Command, CommandOutcome, PANIC_REPLY};
use super::error::ConsoleError;
use super::session::{Session, is_closed};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex as AsyncMutex;
use tokio::sync::{mpsc, watch};
use tracing::{debug, error, info, warn};

/// Dispatcher-side handles of one running session.
#[derive(Debug)]
struct SessionHandle {
    /// Distinguishes successive sessions of the same connection id
    generation: u64,
    input: mpsc::UnboundedSender<String>,
    output: Arc<AsyncMutex<mpsc::Receiver<String>>>,
}

type SessionMap = Mutex<HashMap<String, SessionHandle>>;

/// Interactive administrative console.
///
/// Each connection id runs at most one command at a time. The first line from
/// an unseen id must be a command name; later lines from that id are answers
/// to the running command's prompts. A session is created on first contact
/// and removed by its command task when the command ends, whatever the reason,
/// just before the terminal message is sent.
///
/// The session map lock is only held for lookups and mutations, never while
/// waiting on a command.
pub struct AdminConsole {
    admin: Arc<dyn ExchangeAdmin>,
    sessions: Arc<SessionMap>,
    next_generation: AtomicU64,
}

impl AdminConsole {
    /// Create a console driving `admin`.
    pub fn new(admin: Arc<dyn ExchangeAdmin>) -> Self {
        info!(commands = ?Self::valid_commands(), "admin console started");
        Self {
            admin,
            sessions: Arc::new(Mutex::new(HashMap::new())),
            next_generation: AtomicU64::new(0),
        }
    }

    /// Names accepted as the first line of a session.
    #[must_use]
    pub fn valid_commands() -> Vec<&'static str> {
        Command::ALL.iter().map(|command| command.name()).collect()
    }

    /// Number of sessions currently running.
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.sessions.lock().len()
    }

    /// `true` while a command is running for `sid`.
    #[must_use]
    pub fn has_session(&self, sid: &str) -> bool {
        self.sessions.lock().contains_key(sid)
    }

    /// Handle one line from connection `sid` and return the reply.
    ///
    /// `done` turns `true` (or loses its sender) when the connection closes.
    /// Lines arriving after that are not delivered and get an empty reply.
    /// Must be called from within a Tokio runtime.
    pub async fn handle(&self, done: watch::Receiver<bool>, sid: &str, line: &str) -> String {
        let running = {
            let sessions = self.sessions.lock();
            sessions
                .get(sid)
                .map(|handle| (handle.input.clone(), Arc::clone(&handle.output)))
        };

        match running {
            Some((input, output)) => Self::deliver(&done, sid, line, input, output).await,
            None => self.start(done, sid, line).await,
        }
    }

    async fn deliver(
        done: &watch::Receiver<bool>,
        sid: &str,
        line: &str,
        input: mpsc::UnboundedSender<String>,
        output: Arc<AsyncMutex<mpsc::Receiver<String>>>,
    ) -> String {
        if is_closed(done) {
            debug!(%sid, "connection closed, input dropped");
            return String::new();
        }
        if input.send(line.to_string()).is_err() {
            debug!(%sid, "session ended before input was delivered");
            return String::new();
        }
        Self::next_reply(&output).await
    }

    async fn next_reply(output: &AsyncMutex<mpsc::Receiver<String>>) -> String {
        output.lock().await.recv().await.unwrap_or_default()
    }

    async fn start(&self, done: watch::Receiver<bool>, sid: &str, line: &str) -> String {
        let Some(command) = Command::from_name(line) else {
            warn!(%sid, line, "invalid console command");
            return format!(
                "Invalid command '{line}'. Valid commands are: [{}]",
                Self::valid_commands().join(", ")
            );
        };

        let (input_tx, input_rx) = mpsc::unbounded_channel();
        let (output_tx, output_rx) = mpsc::channel(1);
        let output = Arc::new(AsyncMutex::new(output_rx));
        let generation = self.next_generation.fetch_add(1, Ordering::Relaxed);

        let running = {
            let mut sessions = self.sessions.lock();
            match sessions.entry(sid.to_string()) {
                Entry::Occupied(running) => {
                    let handle = running.get();
                    Some((handle.input.clone(), Arc::clone(&handle.output)))
                }
                Entry::Vacant(slot) => {
                    slot.insert(SessionHandle {
                        generation,
                        input: input_tx,
                        output: Arc::clone(&output),
                    });
                    None
                }
            }
        };
        if let Some((input, output)) = running {
            // a concurrent call for this id started the session first
            return Self::deliver(&done, sid, line, input, output).await;
        }

        info!(%sid, %command, generation, "console session started");
        let session = Session::new(input_rx, output_tx.clone(), done);
        self.spawn_command(sid.to_string(), generation, command, session, output_tx);

        Self::next_reply(&output).await
    }

    fn spawn_command(
        &self,
        sid: String,
        generation: u64,
        command: Command,
        mut session: Session,
        output: mpsc::Sender<String>,
    ) {
        let admin = Arc::clone(&self.admin);
        let sessions = Arc::clone(&self.sessions);

        tokio::spawn(async move {
            let worker =
                tokio::spawn(async move { command.run(&mut session, admin.as_ref()).await });

            let reply = match worker.await {
                Ok(Err(ConsoleError::EndOfInput)) => {
                    debug!(%sid, %command, "operator left before the command finished");
                    None
                }
                Ok(result) => {
                    let outcome = CommandOutcome::from(result);
                    if let CommandOutcome::Error(message) = &outcome {
                        warn!(%sid, %command, reason = %message, "console command failed");
                    }
                    Some(outcome.reply())
                }
                Err(join_error) => {
                    error!(%sid, %command, "console command aborted: {join_error}");
                    Some(PANIC_REPLY.to_string())
                }
            };

            Self::remove_session(&sessions, &sid, generation);
            info!(%sid, %command, generation, "console session ended");

            if let Some(reply) = reply {
                let _ = output.try_send(reply);
            }
        });
    }

    fn remove_session(sessions: &SessionMap, sid: &str, generation: u64) {
        let mut sessions = sessions.lock();
        if sessions
            .get(sid)
            .is_some_and(|handle| handle.generation == generation)
        {
            sessions.remove(sid);
        }
    }
}

impl std::fmt::Debug for AdminConsole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminConsole")
            .field("active_sessions", &self.active_sessions())
            .field("next_generation", &self.next_generation.load(Ordering::Relaxed))
            .finish()
    }
}
