use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream};
use futures_util::{Sink, SinkExt, Stream, StreamExt};
use std::io::{self, Write};
use tokio_tungstenite::tungstenite::{self, Message};
use tracing::{debug, info, info_span, warn, Instrument};

use crate::config::ClientConfig;
use crate::game::{Board, ClientMessage, ServerMessage};
use crate::infrastructure::logging::TraceContext;
use crate::ui::{action_for_key, Action, Renderer, TerminalGuard};

/// Why a session stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The player asked to leave
    Quit,
    /// The server closed the connection or the stream ended
    ServerClosed,
}

/// Connect to the server and play until the player quits or the server hangs up
pub async fn run(config: ClientConfig) -> Result<SessionEnd> {
    let session_id = TraceContext::new_session_id();
    let span = info_span!("session", session_id = %session_id, server = %config.server_uri);

    async move {
        let (ws, _response) = tokio_tungstenite::connect_async(config.server_uri.as_str())
            .await
            .with_context(|| format!("Failed to connect to {}", config.server_uri))?;

        println!("Connected to server.");
        info!("Connected to server");

        let mut session = GameSession::new(Renderer::new(config.pretty_walls));
        let end = {
            let _terminal = TerminalGuard::enter().context("Failed to prepare terminal")?;
            session.drive(ws, EventStream::new(), &mut io::stdout()).await
        };

        println!("Disconnected.");
        info!(
            ?end,
            width = session.board().width(),
            height = session.board().height(),
            "Session ended"
        );
        end
    }
    .instrument(span)
    .await
}

/// Board state plus the loop that feeds it
pub struct GameSession {
    board: Board,
    renderer: Renderer,
}

impl GameSession {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            board: Board::new(),
            renderer,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Pump server frames and key events until one side ends the session.
    ///
    /// Server frames and keyboard input are awaited together, so a quiet
    /// server never delays a move.
    pub async fn drive<S, K, W>(&mut self, mut ws: S, mut keys: K, out: &mut W) -> Result<SessionEnd>
    where
        S: Stream<Item = Result<Message, tungstenite::Error>>
            + Sink<Message, Error = tungstenite::Error>
            + Unpin,
        K: Stream<Item = io::Result<Event>> + Unpin,
        W: Write,
    {
        let mut keys_open = true;

        loop {
            tokio::select! {
                frame = ws.next() => match frame {
                    Some(Ok(Message::Text(text))) => {
                        self.handle_frame(text.as_str());
                        self.renderer.draw(out, &self.board).context("Failed to draw board")?;
                    }
                    Some(Ok(Message::Close(frame))) => {
                        debug!(?frame, "Server sent close frame");
                        return Ok(SessionEnd::ServerClosed);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e).context("WebSocket receive failed"),
                    None => return Ok(SessionEnd::ServerClosed),
                },
                event = keys.next(), if keys_open => match event {
                    Some(Ok(Event::Key(key))) => match action_for_key(&key) {
                        Some(Action::Move(dir)) => {
                            let json = ClientMessage::Move { dir }.to_json()?;
                            debug!(?dir, "Sending move");
                            ws.send(Message::text(json)).await.context("Failed to send move")?;
                        }
                        Some(Action::Quit) => {
                            if let Err(e) = ws.close().await {
                                warn!("Failed to close connection cleanly: {}", e);
                            }
                            return Ok(SessionEnd::Quit);
                        }
                        None => {}
                    },
                    Some(Ok(Event::Resize(_, _))) => {
                        self.renderer.draw(out, &self.board).context("Failed to draw board")?;
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e).context("Failed to read terminal input"),
                    None => keys_open = false,
                },
            }
        }
    }

    fn handle_frame(&mut self, text: &str) {
        match ServerMessage::parse(text) {
            Ok(ServerMessage::Init(init)) => self.board.apply_init(&init),
            Ok(ServerMessage::State(state)) => {
                if !self.board.is_initialized() {
                    warn!("State frame arrived before init");
                }
                self.board.apply_state(&state);
            }
            Ok(ServerMessage::Unknown) => debug!("Ignoring unknown frame type"),
            Err(e) => warn!("Skipping frame: {}", e),
        }
    }
}
