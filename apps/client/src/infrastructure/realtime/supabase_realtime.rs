use crate::domain::review::{entity::Reply, events::ChangeEvent};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use tracing::{debug, info, warn};
use uuid::Uuid;

const REVIEWS_TOPIC: &str = "realtime:public:reviews";
const REPLIES_TOPIC: &str = "realtime:public:review_replies";
const HEARTBEAT_SECONDS: u64 = 30;

/// Page-lifetime realtime subscription.
///
/// Owns one websocket to the backend's realtime endpoint, joins the
/// `reviews` and `review_replies` change streams, and fans decoded events
/// out on a broadcast channel. The stream is table-wide (no server-side id
/// filter); consumers correlate by row id and must tolerate duplicate or
/// out-of-order delivery. On socket loss the listener reconnects after a
/// configured pause and keeps the same channel.
pub struct RealtimeListener {
    base_url: String,
    api_key: String,
    reconnect: Duration,
    events: broadcast::Sender<ChangeEvent>,
}

impl RealtimeListener {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        reconnect: Duration,
    ) -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            reconnect,
            events,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.events.subscribe()
    }

    pub async fn start(&self) {
        loop {
            if let Err(err) = self.run_connection().await {
                warn!(error = %err, "realtime connection lost, reconnecting");
            }
            tokio::time::sleep(self.reconnect).await;
        }
    }

    async fn run_connection(&self) -> anyhow::Result<()> {
        let url = websocket_url(&self.base_url, &self.api_key);
        let (socket, _) = connect_async(url).await?;
        let (mut sink, mut stream) = socket.split();

        let mut msg_ref: u64 = 0;
        for topic in [REVIEWS_TOPIC, REPLIES_TOPIC] {
            msg_ref += 1;
            sink.send(Message::Text(join_frame(topic, msg_ref).into()))
                .await?;
        }
        info!("realtime streams joined");

        let mut heartbeat = tokio::time::interval(Duration::from_secs(HEARTBEAT_SECONDS));
        heartbeat.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = heartbeat.tick() => {
                    msg_ref += 1;
                    sink.send(Message::Text(heartbeat_frame(msg_ref).into())).await?;
                }
                incoming = stream.next() => {
                    match incoming {
                        Some(Ok(Message::Text(text))) => {
                            if let Some(event) = decode_frame(&text) {
                                debug!(?event, "realtime event");
                                // no subscribers yet is not an error
                                let _ = self.events.send(event);
                            }
                        }
                        Some(Ok(Message::Close(_))) | None => {
                            anyhow::bail!("realtime socket closed")
                        }
                        Some(Ok(_)) => {}
                        Some(Err(err)) => return Err(err.into()),
                    }
                }
            }
        }
    }
}

fn websocket_url(base_url: &str, api_key: &str) -> String {
    let ws_base = base_url
        .replacen("https://", "wss://", 1)
        .replacen("http://", "ws://", 1);
    format!("{ws_base}/realtime/v1/websocket?apikey={api_key}&vsn=1.0.0")
}

fn join_frame(topic: &str, msg_ref: u64) -> String {
    serde_json::json!({
        "topic": topic,
        "event": "phx_join",
        "payload": {},
        "ref": msg_ref.to_string(),
    })
    .to_string()
}

fn heartbeat_frame(msg_ref: u64) -> String {
    serde_json::json!({
        "topic": "phoenix",
        "event": "heartbeat",
        "payload": {},
        "ref": msg_ref.to_string(),
    })
    .to_string()
}

#[derive(Debug, Deserialize)]
struct ReviewPatch {
    id: Uuid,
    likes: i32,
}

/// Decode one wire frame into a `ChangeEvent`.
///
/// Tolerant by design: frames that are not a `reviews` update or a
/// `review_replies` insert, or whose record does not parse, yield `None`
/// and are skipped.
pub fn decode_frame(text: &str) -> Option<ChangeEvent> {
    let frame: serde_json::Value = serde_json::from_str(text).ok()?;
    let event = frame.get("event")?.as_str()?;
    let payload = frame.get("payload")?;
    let table = payload.get("table")?.as_str()?;
    let record = payload.get("record")?.clone();

    match (table, event) {
        ("reviews", "UPDATE") => {
            let patch: ReviewPatch = serde_json::from_value(record).ok()?;
            Some(ChangeEvent::ReviewChanged {
                review_id: patch.id,
                likes: patch.likes,
            })
        }
        ("review_replies", "INSERT") => {
            let reply: Reply = serde_json::from_value(record).ok()?;
            Some(ChangeEvent::ReplyAdded(reply))
        }
        _ => None,
    }
}
