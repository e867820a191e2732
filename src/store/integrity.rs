// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Referential-integrity scan guarding person removal.
//!
//! Pure functions over the session, called synchronously before a removal
//! commits. The scan is O(total notes); documents are human-sized, so no
//! incremental index is kept.

use std::fmt;

use crate::model::{PersonId, Session};

/// Where a blocking reference was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceSite {
    Note,
    PastActionItem,
}

impl ReferenceSite {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Note => "a note",
            Self::PastActionItem => "a past action item",
        }
    }
}

impl fmt::Display for ReferenceSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First place that still references the person: any note's person-valued
/// field (speaker, assignee, mover, seconder) or any past action item's
/// assignee. Topic leaders do not block removal; a dangling leader is dropped
/// on export instead.
pub fn first_reference(session: &Session, person_id: PersonId) -> Option<ReferenceSite> {
    for topic in session.topics() {
        for note in topic.notes() {
            if note.body().references_person(person_id) {
                return Some(ReferenceSite::Note);
            }
        }
    }

    session
        .past_action_items()
        .iter()
        .any(|item| item.assignee() == person_id)
        .then_some(ReferenceSite::PastActionItem)
}

pub fn is_referenced(session: &Session, person_id: PersonId) -> bool {
    first_reference(session, person_id).is_some()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::DateTime;

    use super::{first_reference, is_referenced, ReferenceSite};
    use crate::model::{
        Honorific, MotionOutcome, Note, NoteBody, NoteId, PastActionItem, PastActionItemId,
        Person, PersonId, Session, StoredPerson, Topic, TopicId,
    };

    fn session_with_people(count: u64) -> Session {
        let mut session = Session::new();
        for value in 0..count {
            let person = Person::new(Honorific::Mr, format!("P{value}"), "Member");
            session
                .metadata_mut()
                .members_present_mut()
                .push(StoredPerson::new(PersonId::new(value), person));
        }
        session
    }

    fn push_topic_with_note(session: &mut Session, body: NoteBody) {
        let mut topic = Topic::new(TopicId::new(0), "Budget", DateTime::UNIX_EPOCH, 30);
        topic.notes_mut().push(Note::new(NoteId::new(0), body));
        session.topics_mut().push(Arc::new(topic));
    }

    #[test]
    fn detects_speaker_reference() {
        let mut session = session_with_people(2);
        push_topic_with_note(
            &mut session,
            NoteBody::Text {
                speaker: Some(PersonId::new(1)),
                text: "noted".to_owned(),
            },
        );

        assert_eq!(
            first_reference(&session, PersonId::new(1)),
            Some(ReferenceSite::Note)
        );
        assert!(!is_referenced(&session, PersonId::new(0)));
    }

    #[test]
    fn detects_mover_and_seconder_references() {
        let mut session = session_with_people(3);
        push_topic_with_note(
            &mut session,
            NoteBody::Motion {
                mover: PersonId::new(0),
                seconder: PersonId::new(2),
                text: "Approve".to_owned(),
                outcome: MotionOutcome::Active,
                tally: None,
            },
        );

        assert!(is_referenced(&session, PersonId::new(0)));
        assert!(is_referenced(&session, PersonId::new(2)));
        assert!(!is_referenced(&session, PersonId::new(1)));
    }

    #[test]
    fn detects_past_action_item_assignee() {
        let mut session = session_with_people(1);
        session.past_action_items_mut().push(PastActionItem::new(
            PastActionItemId::new(0),
            "Repaint the gym",
            PersonId::new(0),
            DateTime::UNIX_EPOCH,
        ));

        assert_eq!(
            first_reference(&session, PersonId::new(0)),
            Some(ReferenceSite::PastActionItem)
        );
    }

    #[test]
    fn topic_leader_does_not_block() {
        let mut session = session_with_people(1);
        let mut topic = Topic::new(TopicId::new(0), "Budget", DateTime::UNIX_EPOCH, 30);
        topic.set_leader(Some(PersonId::new(0)));
        session.topics_mut().push(Arc::new(topic));

        assert!(!is_referenced(&session, PersonId::new(0)));
    }
}
