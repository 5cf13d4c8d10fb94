// ── Supersede-on-new-request lookup handle ──
//
// The map UI fires a reverse lookup every time the pin moves. Only the
// newest request may publish: starting a lookup cancels the in-flight
// one, and a generation counter guards against a stale response landing
// after a newer one (last-write-wins).

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::GeocodeClient;

/// A resolved address label, tagged with the request generation that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAddress {
    pub generation: u64,
    pub label: String,
}

/// Reverse-lookup coordinator. Cheaply cloneable; all clones share the
/// same generation counter and result channel.
#[derive(Clone)]
pub struct ReverseLookup {
    inner: Arc<LookupInner>,
}

struct LookupInner {
    client: Arc<GeocodeClient>,
    generation: AtomicU64,
    in_flight: Mutex<Option<CancellationToken>>,
    result_tx: watch::Sender<Option<ResolvedAddress>>,
}

impl ReverseLookup {
    pub fn new(client: GeocodeClient) -> Self {
        let (result_tx, _) = watch::channel(None);
        Self {
            inner: Arc::new(LookupInner {
                client: Arc::new(client),
                generation: AtomicU64::new(0),
                in_flight: Mutex::new(None),
                result_tx,
            }),
        }
    }

    /// Subscribe to resolved labels. The channel holds the latest
    /// winning result; superseded requests never appear on it.
    pub fn subscribe(&self) -> watch::Receiver<Option<ResolvedAddress>> {
        self.inner.result_tx.subscribe()
    }

    /// Start a lookup, superseding any in-flight request.
    ///
    /// Must be called from within a tokio runtime. The result (address
    /// or coordinate fallback — this surface is total) arrives on the
    /// [`subscribe`](Self::subscribe) channel.
    pub fn lookup(&self, lat: f64, lon: f64) {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let token = CancellationToken::new();
        let previous = {
            let mut guard = match self.inner.in_flight.lock() {
                Ok(guard) => guard,
                Err(poisoned) => poisoned.into_inner(),
            };
            guard.replace(token.clone())
        };
        if let Some(previous) = previous {
            previous.cancel();
        }

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let label = tokio::select! {
                biased;
                () = token.cancelled() => {
                    debug!(generation, "reverse lookup superseded");
                    return;
                }
                label = inner.client.reverse_or_fallback(lat, lon) => label,
            };

            // A newer request may have started while we awaited; only
            // the latest generation publishes.
            if inner.generation.load(Ordering::SeqCst) == generation {
                inner
                    .result_tx
                    .send_replace(Some(ResolvedAddress { generation, label }));
            } else {
                debug!(generation, "reverse lookup result discarded");
            }
        });
    }

    /// One-shot resolution without the supersede machinery. Total.
    pub async fn resolve(&self, lat: f64, lon: f64) -> String {
        self.inner.client.reverse_or_fallback(lat, lon).await
    }
}

impl std::fmt::Debug for ReverseLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReverseLookup")
            .field("generation", &self.inner.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}
