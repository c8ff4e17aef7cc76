//! Resume upload state machine.
//!
//! `Empty → Uploading` on a validated file, `Uploading → Populated` when the
//! provider resolves, `Populated → Empty` on removal. A newer accepted file
//! supersedes an in-flight one; the superseded completion is discarded by
//! ticket comparison.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::resume::record::ResumeRecord;

pub const ALLOWED_EXTENSIONS: &[&str] = &[".pdf", ".doc", ".docx"];

pub const ALLOWED_MIME_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Browsers and multipart clients fall back to this when the type is unknown.
const GENERIC_MIME_TYPE: &str = "application/octet-stream";

/// Metadata of a selected file. Contents are never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMeta {
    pub name: String,
    pub content_type: Option<String>,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct UploadRules {
    pub allowed_extensions: &'static [&'static str],
    pub allowed_mime_types: &'static [&'static str],
    pub max_size: u64,
}

impl Default for UploadRules {
    fn default() -> Self {
        Self {
            allowed_extensions: ALLOWED_EXTENSIONS,
            allowed_mime_types: ALLOWED_MIME_TYPES,
            max_size: 5 * 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileValidationError {
    #[error("file type not allowed: {name}")]
    UnsupportedType { name: String },

    #[error("file too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },
}

impl FileValidationError {
    /// Message shown to the user in the blocking prompt.
    pub fn user_message(&self) -> &'static str {
        match self {
            FileValidationError::UnsupportedType { .. } => {
                "Please upload a PDF, DOC, or DOCX file."
            }
            FileValidationError::TooLarge { .. } => "File size must be less than 5MB.",
        }
    }
}

impl UploadRules {
    pub fn validate(&self, file: &FileMeta) -> Result<(), FileValidationError> {
        let extension = file
            .name
            .rsplit_once('.')
            .map(|(_, ext)| format!(".{}", ext.to_lowercase()))
            .unwrap_or_default();

        let mime_ok = match file.content_type.as_deref() {
            None | Some(GENERIC_MIME_TYPE) | Some("") => true,
            Some(mime) => self.allowed_mime_types.contains(&mime),
        };

        if !self.allowed_extensions.contains(&extension.as_str()) || !mime_ok {
            return Err(FileValidationError::UnsupportedType {
                name: file.name.clone(),
            });
        }

        if file.size > self.max_size {
            return Err(FileValidationError::TooLarge {
                size: file.size,
                limit: self.max_size,
            });
        }

        Ok(())
    }
}

/// Identifies one accepted upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UploadTicket(u64);

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum UploadState {
    Empty,
    Uploading {
        ticket: UploadTicket,
        file_name: String,
    },
    Populated {
        file_name: String,
        record: ResumeRecord,
    },
}

/// Result of offering a provider result to the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The ticket no longer matches the in-flight upload.
    Stale,
}

#[derive(Debug)]
pub struct UploadMachine {
    state: UploadState,
    next_ticket: u64,
}

impl Default for UploadMachine {
    fn default() -> Self {
        Self {
            state: UploadState::Empty,
            next_ticket: 1,
        }
    }
}

impl UploadMachine {
    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn record(&self) -> Option<&ResumeRecord> {
        match &self.state {
            UploadState::Populated { record, .. } => Some(record),
            _ => None,
        }
    }

    pub fn is_uploading(&self) -> bool {
        matches!(self.state, UploadState::Uploading { .. })
    }

    /// Validates `file` and enters `Uploading`. On failure the state is untouched.
    pub fn begin(
        &mut self,
        file: &FileMeta,
        rules: &UploadRules,
    ) -> Result<UploadTicket, FileValidationError> {
        rules.validate(file)?;
        let ticket = UploadTicket(self.next_ticket);
        self.next_ticket += 1;
        self.state = UploadState::Uploading {
            ticket,
            file_name: file.name.clone(),
        };
        Ok(ticket)
    }

    pub fn complete(&mut self, ticket: UploadTicket, record: ResumeRecord) -> Completion {
        let file_name = match &self.state {
            UploadState::Uploading {
                ticket: current,
                file_name,
            } if *current == ticket => file_name.clone(),
            _ => return Completion::Stale,
        };
        self.state = UploadState::Populated { file_name, record };
        Completion::Applied
    }

    /// Abandons the in-flight upload identified by `ticket`.
    pub fn fail(&mut self, ticket: UploadTicket) -> Completion {
        if !matches!(&self.state, UploadState::Uploading { ticket: current, .. } if *current == ticket)
        {
            return Completion::Stale;
        }
        self.state = UploadState::Empty;
        Completion::Applied
    }

    /// Returns to `Empty` from any state. Returns the dropped record, if any.
    pub fn remove(&mut self) -> Option<ResumeRecord> {
        match std::mem::replace(&mut self.state, UploadState::Empty) {
            UploadState::Populated { record, .. } => Some(record),
            _ => None,
        }
    }
}
