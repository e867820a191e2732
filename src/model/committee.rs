// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::CommitteeId;

/// Which body a committee reports to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommitteeKind {
    Board,
    Headmaster,
}

/// A standing committee listed in the minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committee {
    committee_id: CommitteeId,
    name: String,
    kind: CommitteeKind,
}

impl Committee {
    pub fn new(committee_id: CommitteeId, name: impl Into<String>, kind: CommitteeKind) -> Self {
        Self {
            committee_id,
            name: name.into(),
            kind,
        }
    }

    pub fn committee_id(&self) -> CommitteeId {
        self.committee_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> CommitteeKind {
        self.kind
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_kind(&mut self, kind: CommitteeKind) {
        self.kind = kind;
    }
}
