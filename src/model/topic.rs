// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{DateTime, Utc};

use super::ids::{NoteId, PersonId, TopicId};
use super::note::Note;

/// One agenda item and its minutes.
///
/// Notes keep insertion order; topics themselves are reordered only by an
/// explicit sort on the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    topic_id: TopicId,
    title: String,
    start_time: DateTime<Utc>,
    duration_minutes: u32,
    leader: Option<PersonId>,
    notes: Vec<Note>,
}

impl Topic {
    pub fn new(
        topic_id: TopicId,
        title: impl Into<String>,
        start_time: DateTime<Utc>,
        duration_minutes: u32,
    ) -> Self {
        Self {
            topic_id,
            title: title.into(),
            start_time,
            duration_minutes,
            leader: None,
            notes: Vec::new(),
        }
    }

    pub fn topic_id(&self) -> TopicId {
        self.topic_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn leader(&self) -> Option<PersonId> {
        self.leader
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn notes_mut(&mut self) -> &mut Vec<Note> {
        &mut self.notes
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_start_time(&mut self, start_time: DateTime<Utc>) {
        self.start_time = start_time;
    }

    pub fn set_duration_minutes(&mut self, duration_minutes: u32) {
        self.duration_minutes = duration_minutes;
    }

    pub fn set_leader(&mut self, leader: Option<PersonId>) {
        self.leader = leader;
    }

    pub fn note(&self, note_id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.note_id() == note_id)
    }

    pub fn note_mut(&mut self, note_id: NoteId) -> Option<&mut Note> {
        self.notes
            .iter_mut()
            .find(|note| note.note_id() == note_id)
    }

    pub fn contains_note(&self, note_id: NoteId) -> bool {
        self.note(note_id).is_some()
    }
}
