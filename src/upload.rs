//! Upload/preview lifecycle for a single selected document:
//! `Empty -> Selecting -> Ready(preview) -> Empty`.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Advisory limit surfaced by the UI layer; not enforced here.
pub const SOFT_SIZE_LIMIT_BYTES: usize = 10 * 1024 * 1024;

/// A user-selected file. Picker and drag-drop selections both produce one
/// of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Empty,
    Selecting,
    Ready,
}

/// Invariant: `preview` is `Some` iff `file` is `Some` and encoding has
/// completed. Encode completion is applied by the controller, which discards
/// it if the selection changed in the meantime.
#[derive(Debug, Default, Clone)]
pub struct UploadState {
    file: Option<DocumentFile>,
    preview: Option<String>,
}

impl UploadState {
    pub fn phase(&self) -> UploadPhase {
        match (&self.file, &self.preview) {
            (None, _) => UploadPhase::Empty,
            (Some(_), None) => UploadPhase::Selecting,
            (Some(_), Some(_)) => UploadPhase::Ready,
        }
    }

    pub fn file(&self) -> Option<&DocumentFile> {
        self.file.as_ref()
    }

    pub fn preview(&self) -> Option<&str> {
        self.preview.as_deref()
    }

    /// Starts a new selection; any previous preview is dropped.
    pub fn select(&mut self, file: DocumentFile) {
        self.file = Some(file);
        self.preview = None;
    }

    pub fn complete_encode(&mut self, preview: String) {
        debug_assert!(self.file.is_some());
        self.preview = Some(preview);
    }

    pub fn clear(&mut self) {
        self.file = None;
        self.preview = None;
    }
}

/// Data-URI preview of a file, e.g. `data:image/jpeg;base64,...`. Doubles as
/// the payload source for the provider call.
pub fn encode_preview(file: &DocumentFile) -> String {
    format!(
        "data:{};base64,{}",
        file.mime_type,
        STANDARD.encode(&file.bytes)
    )
}

/// Splits a data-URI preview into its media type and raw base64 payload.
pub fn split_preview(preview: &str) -> Option<(&str, &str)> {
    let rest = preview.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    Some((mime, payload))
}
