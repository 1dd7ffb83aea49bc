//! Vessel data fetching worker.

use crate::fetch::types::{FeatureCollection, FetchChannels, FetchCommand, FetchResultMsg};
use anyhow::{Context, Result};
use std::sync::{Arc, Mutex, mpsc};
use std::thread;
use tracing::{debug, warn};

/// Start the background vessel fetch worker thread.
///
/// The worker owns its own tokio runtime and serves one command at a time.
/// Commands that queue up while a fetch is in flight supersede each other:
/// only the newest pending request is served, so a burst of date-range
/// changes costs one fetch.
pub fn start_vessel_worker(base_url: String) -> FetchChannels {
    let (cmd_tx, cmd_rx) = mpsc::channel::<FetchCommand>();
    let (res_tx, res_rx) = mpsc::channel::<FetchResultMsg>();

    thread::spawn(move || {
        let rt = tokio::runtime::Runtime::new().expect("tokio runtime");
        rt.block_on(async move {
            let client = reqwest::Client::new();

            while let Ok(mut cmd) = cmd_rx.recv() {
                // Drain the queue so only the newest request is served.
                while let Ok(newer) = cmd_rx.try_recv() {
                    debug!(?cmd, "superseded by newer fetch command");
                    cmd = newer;
                }

                let FetchCommand::Load {
                    request_id,
                    start_date,
                    end_date,
                } = cmd;

                let send = |m| {
                    let _ = res_tx.send(m);
                };
                match fetch_vessels(&client, &base_url, &start_date, &end_date).await {
                    Ok(collection) => {
                        debug!(
                            request_id,
                            features = collection.features.len(),
                            "vessel fetch succeeded"
                        );
                        send(FetchResultMsg::Loaded {
                            request_id,
                            collection,
                        });
                    }
                    Err(err) => {
                        warn!(request_id, "vessel fetch failed: {err:#}");
                        send(FetchResultMsg::Failed {
                            request_id,
                            error: err.to_string(),
                        });
                    }
                }
            }
        });
    });

    FetchChannels {
        cmd_tx,
        res_rx: Arc::new(Mutex::new(res_rx)),
    }
}

async fn fetch_vessels(
    client: &reqwest::Client,
    base_url: &str,
    start_date: &str,
    end_date: &str,
) -> Result<FeatureCollection> {
    let url = format!(
        "{}/vessels?start_date={}&end_date={}",
        base_url.trim_end_matches('/'),
        start_date,
        end_date
    );
    let resp = client
        .get(&url)
        .header("accept", "application/json")
        .send()
        .await
        .context("request failed")?;
    let status = resp.status();
    let body = resp.text().await.context("read response")?;
    if !status.is_success() {
        anyhow::bail!("failed to fetch vessel data: HTTP {}", status);
    }
    serde_json::from_str(&body).context("invalid vessel geojson")
}
