//! Post page session
//!
//! Wraps `PostPageService` with a generation counter so that overlapping
//! loads cannot commit out of order: when the slug changes mid-flight,
//! the superseded load's result is discarded instead of overwriting the
//! newer state. Subscribers observe a loading snapshot when a refresh
//! starts and the final snapshot when it completes.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use domain::Slug;
use tokio::sync::watch;
use tracing::{debug, instrument};

use super::post_page_service::{PostPageService, PostPageState};

/// A page view session with stale-load protection
pub struct PostPageSession {
    service: Arc<PostPageService>,
    generation: AtomicU64,
    tx: watch::Sender<PostPageState>,
}

impl std::fmt::Debug for PostPageSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostPageSession")
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish_non_exhaustive()
    }
}

impl PostPageSession {
    /// Create a session; the initial published state is loading
    #[must_use]
    pub fn new(service: Arc<PostPageService>) -> Self {
        let (tx, _rx) = watch::channel(PostPageState::default());
        Self {
            service,
            generation: AtomicU64::new(0),
            tx,
        }
    }

    /// Subscribe to state snapshots
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<PostPageState> {
        self.tx.subscribe()
    }

    /// The latest published state
    #[must_use]
    pub fn current(&self) -> PostPageState {
        self.tx.borrow().clone()
    }

    /// Load the page for `slug`, superseding any in-flight load
    ///
    /// Publishes a fresh loading snapshot immediately, then the final
    /// state once the load completes. If another `refresh` started in
    /// the meantime, both snapshots are dropped: the loading one is
    /// guarded too, so a preempted refresh cannot paint a stale loading
    /// state over a newer load's result.
    #[instrument(skip(self), fields(slug = %slug))]
    pub async fn refresh(&self, slug: &Slug) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.publish(generation, PostPageState::default());

        let state = self.service.load_page(slug).await;

        self.publish(generation, state);
    }

    /// Publish a snapshot unless the generation has been superseded
    fn publish(&self, generation: u64, state: PostPageState) {
        if self.generation.load(Ordering::SeqCst) == generation {
            self.tx.send_replace(state);
        } else {
            debug!("Discarding stale page snapshot");
        }
    }
}
