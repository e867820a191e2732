// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use chrono::{DateTime, Utc};

use super::ids::{NoteId, PersonId};

/// The variant of a [`NoteBody`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteKind {
    Text,
    ActionItem,
    Motion,
    Link,
}

/// Where a motion ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionOutcome {
    Active,
    Passed,
    Failed,
    Tabled,
    Withdrawn,
}

impl MotionOutcome {
    /// Vote counts are only recorded for decided motions.
    pub fn records_votes(self) -> bool {
        matches!(self, Self::Passed | Self::Failed)
    }
}

/// Vote counts attached to a decided motion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VoteTally {
    in_favor: u32,
    opposed: u32,
    abstained: u32,
}

impl VoteTally {
    pub fn new(in_favor: u32, opposed: u32, abstained: u32) -> Self {
        Self {
            in_favor,
            opposed,
            abstained,
        }
    }

    pub fn in_favor(&self) -> u32 {
        self.in_favor
    }

    pub fn opposed(&self) -> u32 {
        self.opposed
    }

    pub fn abstained(&self) -> u32 {
        self.abstained
    }
}

/// Drops a carried tally when the outcome does not record votes.
pub fn normalize_tally(outcome: MotionOutcome, tally: Option<VoteTally>) -> Option<VoteTally> {
    outcome.records_votes().then_some(tally).flatten()
}

/// Body data for each note variant.
///
/// Person-valued fields reference roster entries by id; the store rejects any
/// body whose references do not resolve to a current roster member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteBody {
    Text {
        speaker: Option<PersonId>,
        text: String,
    },
    ActionItem {
        assignee: PersonId,
        text: String,
        due_date: DateTime<Utc>,
    },
    Motion {
        mover: PersonId,
        seconder: PersonId,
        text: String,
        outcome: MotionOutcome,
        tally: Option<VoteTally>,
    },
    Link {
        text: String,
        url: String,
    },
}

impl NoteBody {
    pub fn kind(&self) -> NoteKind {
        match self {
            Self::Text { .. } => NoteKind::Text,
            Self::ActionItem { .. } => NoteKind::ActionItem,
            Self::Motion { .. } => NoteKind::Motion,
            Self::Link { .. } => NoteKind::Link,
        }
    }

    /// Every person referenced by this body, in field order.
    pub fn referenced_person_ids(&self) -> Vec<PersonId> {
        match self {
            Self::Text { speaker, .. } => speaker.iter().copied().collect(),
            Self::ActionItem { assignee, .. } => vec![*assignee],
            Self::Motion { mover, seconder, .. } => vec![*mover, *seconder],
            Self::Link { .. } => Vec::new(),
        }
    }

    pub fn references_person(&self, person_id: PersonId) -> bool {
        self.referenced_person_ids().contains(&person_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteBodyKindMismatch {
    expected: NoteKind,
    found: NoteKind,
}

impl NoteBodyKindMismatch {
    pub fn expected(&self) -> NoteKind {
        self.expected
    }

    pub fn found(&self) -> NoteKind {
        self.found
    }
}

impl fmt::Display for NoteBodyKindMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "note body kind mismatch (expected {:?}, found {:?})",
            self.expected, self.found
        )
    }
}

impl std::error::Error for NoteBodyKindMismatch {}

/// A single minute entry within a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    note_id: NoteId,
    body: NoteBody,
}

impl Note {
    pub fn new(note_id: NoteId, body: NoteBody) -> Self {
        Self { note_id, body }
    }

    pub fn note_id(&self) -> NoteId {
        self.note_id
    }

    pub fn kind(&self) -> NoteKind {
        self.body.kind()
    }

    pub fn body(&self) -> &NoteBody {
        &self.body
    }

    /// Replaces the body, keeping the id. The kind is fixed at creation.
    pub fn set_body(&mut self, body: NoteBody) -> Result<(), NoteBodyKindMismatch> {
        let found = body.kind();
        let expected = self.body.kind();
        if found != expected {
            return Err(NoteBodyKindMismatch { expected, found });
        }
        self.body = body;
        Ok(())
    }
}
