// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG). Sessions are built
// through the public store API so fixture documents always satisfy the
// store's invariants.

use chrono::{DateTime, Duration, TimeZone, Utc};

use gavel::model::{
    Honorific, IdAllocator, Month, MotionOutcome, NoteBody, Person, PersonId, Session, VoteTally,
};
use gavel::store::{CalendarItemDraft, DocumentStore, PastActionItemDraft, TopicDraft};

#[derive(Debug, Clone, Copy)]
pub enum Case {
    Small,
    Medium,
}

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 18, 0, 0).unwrap()
}

pub fn store(case: Case) -> DocumentStore {
    let (people, topics, notes_per_topic) = match case {
        Case::Small => (4, 3, 4),
        Case::Medium => (12, 12, 12),
    };
    let base = base_time();

    let mut store = DocumentStore::new();

    let mut roster: Vec<PersonId> = Vec::with_capacity(people);
    for index in 0..people {
        let title = if index % 2 == 0 {
            Honorific::Mr
        } else {
            Honorific::Mrs
        };
        let person = Person::new(title, format!("First{index:02}"), format!("Last{index:02}"));
        let person_id = if index % 3 == 2 {
            store.add_member_absent(person)
        } else {
            store.add_member_present(person)
        }
        .expect("roster add");
        roster.push(person_id);
    }

    for topic_index in 0..topics {
        let topic_id = store
            .add_topic(
                TopicDraft {
                    title: format!("Topic {topic_index:02}"),
                    start_time: base + Duration::minutes(topic_index as i64 * 15),
                    duration_minutes: Some(15),
                    leader: Some(roster[topic_index % roster.len()]),
                },
                None,
            )
            .expect("add topic");

        for note_index in 0..notes_per_topic {
            let body = match note_index % 4 {
                0 => NoteBody::Text {
                    speaker: Some(roster[note_index % roster.len()]),
                    text: format!("Remark {topic_index:02}/{note_index:02}"),
                },
                1 => NoteBody::ActionItem {
                    assignee: roster[(note_index + 1) % roster.len()],
                    text: format!("Action {topic_index:02}/{note_index:02}"),
                    due_date: base + Duration::days(7),
                },
                2 => NoteBody::Motion {
                    mover: roster[0],
                    seconder: roster[1],
                    text: format!("Motion {topic_index:02}/{note_index:02}"),
                    outcome: MotionOutcome::Passed,
                    tally: Some(VoteTally::new(3, 1, 0)),
                },
                _ => NoteBody::Link {
                    text: format!("Link {topic_index:02}/{note_index:02}"),
                    url: format!("https://example.org/{topic_index}/{note_index}"),
                },
            };
            store.add_note(topic_id, body, None).expect("add note");
        }
    }

    store
        .add_calendar_month(Month::March, None)
        .expect("add month");
    store
        .add_calendar_item(
            Month::March,
            CalendarItemDraft {
                text: "Spring recital".to_owned(),
                completed: false,
            },
        )
        .expect("add item");
    store
        .add_past_action_item(PastActionItemDraft {
            text: "Repaint the gym".to_owned(),
            assignee: roster[1],
            due_date: base + Duration::days(14),
            completed: false,
        })
        .expect("add past action item");

    store
}

/// Session plus allocator state, for cheap `with_session` re-seeding inside
/// `iter_batched` setups (cloning a session is a few refcount bumps).
pub fn session(case: Case) -> (Session, IdAllocator) {
    let store = store(case);
    (store.session().clone(), *store.allocator())
}
