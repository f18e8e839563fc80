//! CLI execution context.
//!
//! Each invocation is one page view: it opens the stores under the
//! state directory, assembles the funnel with a fresh event queue, runs
//! a single command, and exits. The cart and click log persist in the
//! state root (local storage); the in-flight order lives under
//! `session/` and is wiped by `reset-session` (closing the tab).

use std::path::PathBuf;

use anyhow::Result;
use shopeze_analytics::{AnalyticsEmitter, ClickLog, EventQueue};
use shopeze_commerce::catalog::Catalog;
use shopeze_funnel::{Funnel, FunnelError};
use shopeze_storage::{FileBackend, Store};

use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// The storefront funnel.
    pub funnel: Funnel,
    /// Output handler.
    pub output: Output,
    /// Storage root.
    pub state_dir: PathBuf,
}

impl Context {
    /// Open the stores under `state_dir` and assemble the funnel.
    pub fn open(state_dir: PathBuf, output: Output) -> Result<Self> {
        let durable = Store::new(FileBackend::open(&state_dir)?);
        let session = Store::new(FileBackend::open(state_dir.join("session"))?);

        let emitter = AnalyticsEmitter::new(EventQueue::new(), ClickLog::new(durable.clone()));
        let funnel = Funnel::new(Catalog::demo(), durable, session, emitter);

        Ok(Self {
            funnel,
            output,
            state_dir,
        })
    }

    /// Wrap a funnel precondition failure for surfacing as a blocking
    /// alert plus a redirect.
    pub fn redirect(&self, err: FunnelError) -> anyhow::Error {
        self.output
            .debug(&format!("redirecting to {}", err.redirect().as_str()));
        anyhow::Error::new(err)
    }
}

/// Default state directory: `$HOME/.local/share/shopeze`, falling back
/// to a temp path.
pub fn default_state_dir() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("shopeze")
    } else {
        std::env::temp_dir().join("shopeze")
    }
}
