//! Orchestrates the upload state machine and the analysis client for one
//! verification view. All async completions are stamped with a generation
//! counter; a completion whose generation no longer matches the current one
//! is discarded, so a slow encode or provider call can never overwrite the
//! state of a newer selection.

use crate::analysis;
use crate::provider::Provider;
use crate::types::VerificationResult;
use crate::upload::{self, DocumentFile, UploadPhase, UploadState};
use std::sync::{Arc, Mutex};
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// The controller's sole source of truth for what the results pane renders.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Idle,
    InFlight,
    Succeeded(VerificationResult),
    Failed(String),
}

struct Inner {
    generation: u64,
    upload: UploadState,
    outcome: AnalysisOutcome,
}

pub struct VerificationController {
    provider: Arc<dyn Provider>,
    inner: Mutex<Inner>,
    changed: watch::Sender<u64>,
}

impl VerificationController {
    pub fn new(provider: Arc<dyn Provider>) -> Arc<Self> {
        let (changed, _) = watch::channel(0);
        Arc::new(Self {
            provider,
            inner: Mutex::new(Inner {
                generation: 0,
                upload: UploadState::default(),
                outcome: AnalysisOutcome::Idle,
            }),
            changed,
        })
    }

    /// Snapshot of the current upload state.
    pub fn current_upload(&self) -> UploadState {
        self.inner.lock().unwrap().upload.clone()
    }

    /// Snapshot of the current analysis outcome.
    pub fn current_outcome(&self) -> AnalysisOutcome {
        self.inner.lock().unwrap().outcome.clone()
    }

    /// Revision channel for rendering layers: the value ticks on every state
    /// change, in place of framework-specific reactivity.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.changed.subscribe()
    }

    /// Accepts a file from the picker or a drag-drop event (identical
    /// semantics) and starts encoding its preview. Any previous result or
    /// in-flight work is invalidated.
    pub fn select_file(self: &Arc<Self>, file: DocumentFile) {
        let generation = {
            let mut inner = self.inner.lock().unwrap();
            inner.generation += 1;
            inner.upload.select(file.clone());
            inner.outcome = AnalysisOutcome::Idle;
            inner.generation
        };
        self.notify();
        let this = Arc::clone(self);
        tokio::spawn(async move {
            let preview = upload::encode_preview(&file);
            this.apply_preview(generation, preview);
        });
    }

    /// Resets to the empty state. Pending encode or analysis completions for
    /// the old selection will be discarded when they resolve.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap();
        inner.generation += 1;
        inner.upload.clear();
        inner.outcome = AnalysisOutcome::Idle;
        drop(inner);
        self.notify();
    }

    /// Sends the current document to the provider. Valid only when a preview
    /// is ready and no analysis is in flight; otherwise a no-op returning
    /// `false`.
    pub fn trigger_analysis(self: &Arc<Self>) -> bool {
        let (generation, payload, mime_type) = {
            let mut inner = self.inner.lock().unwrap();
            if inner.upload.phase() != UploadPhase::Ready {
                return false;
            }
            if inner.outcome == AnalysisOutcome::InFlight {
                debug!("analysis already in flight; ignoring trigger");
                return false;
            }
            let preview = inner.upload.preview().unwrap_or_default();
            let Some((_, payload)) = upload::split_preview(preview) else {
                warn!("preview is not a data URI; ignoring trigger");
                return false;
            };
            let payload = payload.to_string();
            let mime_type = inner
                .upload
                .file()
                .map(|f| f.mime_type.clone())
                .unwrap_or_default();
            inner.outcome = AnalysisOutcome::InFlight;
            (inner.generation, payload, mime_type)
        };
        self.notify();
        info!(%mime_type, "analysis started");
        let this = Arc::clone(self);
        tokio::spawn(async move {
            let result = analysis::analyze_document(this.provider.as_ref(), &payload, &mime_type).await;
            this.apply_outcome(generation, result.map_err(|e| e.user_message().to_string()));
        });
        true
    }

    fn apply_preview(&self, generation: u64, preview: String) {
        let mut inner = self.inner.lock().unwrap();
        if inner.generation != generation {
            debug!("discarding stale preview encode");
            return;
        }
        inner.upload.complete_encode(preview);
        drop(inner);
        self.notify();
    }

    fn apply_outcome(&self, generation: u64, result: Result<VerificationResult, String>) {
        let mut inner = self.inner.lock().unwrap();
        if inner.generation != generation {
            debug!("discarding stale analysis result");
            return;
        }
        inner.outcome = match result {
            Ok(r) => AnalysisOutcome::Succeeded(r),
            Err(message) => AnalysisOutcome::Failed(message),
        };
        drop(inner);
        self.notify();
    }

    fn notify(&self) {
        self.changed.send_modify(|rev| *rev += 1);
    }
}
