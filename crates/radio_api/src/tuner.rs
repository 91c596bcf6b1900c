use axum::extract::{Query, State};
use radio_core::{RadioControl, render_status, sanitize_station};
use serde::Deserialize;
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct TuneQuery {
    pub station: Option<String>,
}

/// Handle one tune-and-status request.
///
/// A present, non-empty (after sanitization) station identifier triggers a
/// tune invocation; the current status is then fetched and relayed verbatim.
/// External failures are logged and never surfaced to the caller: the
/// response is always `200` with whatever status text could be obtained.
pub async fn tune(
    State(radio): State<Arc<dyn RadioControl>>,
    Query(query): Query<TuneQuery>,
) -> String {
    if let Some(raw) = query.station.as_deref() {
        let station = sanitize_station(raw);
        if !station.is_empty() {
            tracing::info!(station, "Tuning to station");
            match radio.tune(&station).await {
                Ok(outcome) if outcome.exit_code != Some(0) => {
                    tracing::warn!(
                        station,
                        exit_code = ?outcome.exit_code,
                        "Radio tune exited abnormally"
                    );
                }
                Ok(_) => {}
                Err(error) => {
                    tracing::warn!(station, %error, "Radio tune invocation failed");
                }
            }
        }
    }

    match radio.status().await {
        Ok(raw) => render_status(&raw),
        Err(error) => {
            tracing::error!(%error, "Radio status query failed");
            String::new()
        }
    }
}
