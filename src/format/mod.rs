// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Plain document format and the external↔internal mapper.
//!
//! The plain form strips ids and expands person references to value copies,
//! so files are self-contained, diff-friendly, and stable across re-imports.
//! [`to_internal`]/[`to_external`] are lossless up to id regeneration.

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod convert;
pub mod plain;

pub use convert::{to_external, to_internal, ConvertError};
pub use plain::{
    CommitteeKindJson, HonorificJson, MonthJson, MotionOutcomeJson, PlainCalendarItem,
    PlainCalendarMonth, PlainCaller, PlainCommittee, PlainNote, PlainPastActionItem, PlainPerson,
    PlainSession, PlainSessionMetadata, PlainTopic, PlainVoteTally,
};

/// Current on-disk document version.
pub const DOCUMENT_VERSION: u32 = 2;

#[derive(Debug)]
pub enum DocumentError {
    Json { source: serde_json::Error },
    UnsupportedVersion { version: u64 },
}

impl fmt::Display for DocumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json { source } => write!(f, "malformed document: {source}"),
            Self::UnsupportedVersion { version } => {
                write!(f, "unsupported document version {version}")
            }
        }
    }
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Json { source } => Some(source),
            Self::UnsupportedVersion { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct DocumentJson {
    version: u32,
    session: PlainSession,
}

/// Parses a persisted document.
///
/// Version-1 documents stored the bare session object at the root; they are
/// upgraded in one structural step. Versions newer than
/// [`DOCUMENT_VERSION`] are rejected rather than half-read.
pub fn parse_document(text: &str) -> Result<PlainSession, DocumentError> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|source| DocumentError::Json { source })?;

    match value.get("version").and_then(serde_json::Value::as_u64) {
        None => serde_json::from_value::<PlainSession>(value)
            .map_err(|source| DocumentError::Json { source }),
        Some(version) if version == u64::from(DOCUMENT_VERSION) => {
            serde_json::from_value::<DocumentJson>(value)
                .map(|document| document.session)
                .map_err(|source| DocumentError::Json { source })
        }
        Some(version) => Err(DocumentError::UnsupportedVersion { version }),
    }
}

/// Serializes a plain session in the current document format.
pub fn write_document(session: &PlainSession) -> Result<String, DocumentError> {
    let document = DocumentJson {
        version: DOCUMENT_VERSION,
        session: session.clone(),
    };
    serde_json::to_string_pretty(&document).map_err(|source| DocumentError::Json { source })
}

#[cfg(test)]
mod tests;
