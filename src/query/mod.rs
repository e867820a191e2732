// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over sessions.
//!
//! Derived views for the UI layer: lookups by id and the default-selection
//! policy for person pickers. The store never depends on these.

use crate::model::{Note, NoteId, PersonId, Session, StoredPerson, Topic};

/// A note plus the topic that owns it, for editors addressed by note id.
pub fn find_note(session: &Session, note_id: NoteId) -> Option<(&Topic, &Note)> {
    let topic = session.topic_containing_note(note_id)?;
    let note = topic.note(note_id)?;
    Some((topic, note))
}

/// Default person for pickers that require a reference but have no prior
/// value: the first roster entry, checking members present, then members
/// absent, then administration. The add-note flow starts from this value
/// instead of an unset field; the store accepts it like any other reference.
pub fn default_note_person(session: &Session) -> Option<PersonId> {
    let metadata = session.metadata();
    metadata
        .members_present()
        .first()
        .or_else(|| metadata.members_absent().first())
        .or_else(|| metadata.administration_present().first())
        .map(StoredPerson::person_id)
}

/// Topics ordered by start time without mutating the session. The store's
/// `sort_topics` persists this order into the document.
pub fn topics_in_start_order(session: &Session) -> Vec<&Topic> {
    let mut topics: Vec<&Topic> = session.topics().iter().map(|topic| topic.as_ref()).collect();
    topics.sort_by_key(|topic| topic.start_time());
    topics
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{DateTime, Duration};

    use super::{default_note_person, find_note, topics_in_start_order};
    use crate::model::{
        Honorific, Note, NoteBody, NoteId, Person, PersonId, Session, StoredPerson, Topic, TopicId,
    };

    fn stored(value: u64, first_name: &str) -> StoredPerson {
        StoredPerson::new(
            PersonId::new(value),
            Person::new(Honorific::Mr, first_name, "Member"),
        )
    }

    #[test]
    fn default_person_prefers_members_present() {
        let mut session = Session::new();
        assert_eq!(default_note_person(&session), None);

        session
            .metadata_mut()
            .administration_present_mut()
            .push(stored(2, "Admin"));
        assert_eq!(default_note_person(&session), Some(PersonId::new(2)));

        session
            .metadata_mut()
            .members_absent_mut()
            .push(stored(1, "Absent"));
        assert_eq!(default_note_person(&session), Some(PersonId::new(1)));

        session
            .metadata_mut()
            .members_present_mut()
            .push(stored(0, "Present"));
        assert_eq!(default_note_person(&session), Some(PersonId::new(0)));
    }

    #[test]
    fn find_note_returns_owning_topic() {
        let mut session = Session::new();
        let mut topic = Topic::new(TopicId::new(4), "Budget", DateTime::UNIX_EPOCH, 30);
        topic.notes_mut().push(Note::new(
            NoteId::new(9),
            NoteBody::Text {
                speaker: None,
                text: "noted".to_owned(),
            },
        ));
        session.topics_mut().push(Arc::new(topic));

        let (topic, note) = find_note(&session, NoteId::new(9)).expect("find_note");
        assert_eq!(topic.topic_id(), TopicId::new(4));
        assert_eq!(note.note_id(), NoteId::new(9));
        assert!(find_note(&session, NoteId::new(10)).is_none());
    }

    #[test]
    fn start_order_view_sorts_without_mutating() {
        let mut session = Session::new();
        let base = DateTime::UNIX_EPOCH;
        session.topics_mut().push(Arc::new(Topic::new(
            TopicId::new(0),
            "Second",
            base + Duration::minutes(30),
            15,
        )));
        session.topics_mut().push(Arc::new(Topic::new(
            TopicId::new(1),
            "First",
            base,
            15,
        )));

        let ordered: Vec<&str> = topics_in_start_order(&session)
            .iter()
            .map(|topic| topic.title())
            .collect();
        assert_eq!(ordered, vec!["First", "Second"]);

        // The session itself keeps insertion order.
        assert_eq!(session.topics()[0].title(), "Second");
    }
}
