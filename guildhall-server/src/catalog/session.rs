use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::debug;

use guildhall_core::{TableController, TableEvent, TableView};

use crate::infra::app_state::AppState;

/// One server-to-client frame.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum SessionReply {
    View { view: TableView },
}

/// Handle WebSocket upgrade for a live table session.
pub async fn items_session_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(move |socket| handle_session(socket, state))
}

/// Drive one connected table: client control events in, rendered views out.
///
/// Search input is debounced inside the controller, so a view for it
/// arrives through the commit channel rather than the event that carried
/// the keystroke.
async fn handle_session(socket: WebSocket, state: AppState) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    let (out_tx, mut out_rx) = mpsc::channel::<SessionReply>(100);

    // Outgoing frames leave through one task so view order is preserved.
    let writer = tokio::spawn(async move {
        while let Some(reply) = out_rx.recv().await {
            let Ok(text) = serde_json::to_string(&reply) else {
                continue;
            };
            if ws_sender.send(Message::Text(text.into())).await.is_err() {
                break;
            }
        }
    });

    let (mut controller, mut commits) = TableController::new(state.catalog.clone());

    // The client renders from the first view; push it before any input.
    let initial = SessionReply::View {
        view: controller.view(),
    };
    if out_tx.send(initial).await.is_err() {
        writer.abort();
        return;
    }

    loop {
        tokio::select! {
            committed = commits.recv() => {
                let Some(text) = committed else { break };
                let view = controller.commit_search(text);
                if out_tx.send(SessionReply::View { view }).await.is_err() {
                    break;
                }
            }
            incoming = ws_receiver.next() => {
                match incoming {
                    Some(Ok(Message::Text(text))) => {
                        let Some(event) = parse_event(text.as_str()) else {
                            continue;
                        };
                        if let Some(view) = controller.apply(event)
                            && out_tx.send(SessionReply::View { view }).await.is_err()
                        {
                            break;
                        }
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Err(err)) => {
                        debug!(error = %err, "table session socket error");
                        break;
                    }
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    writer.abort();
}

fn parse_event(text: &str) -> Option<TableEvent> {
    match serde_json::from_str(text) {
        Ok(event) => Some(event),
        Err(err) => {
            debug!(error = %err, "ignoring malformed table event");
            None
        }
    }
}
