// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::sync::Arc;

use crate::model::{
    normalize_tally, CalendarItem, CalendarMonthEntry, Caller, Committee, IdAllocator, Month,
    MotionOutcome, Note, NoteBody, PastActionItem, Person, PersonId, Session, SessionMetadata,
    StoredPerson, Topic, VoteTally,
};

use super::plain::{
    PlainCalendarItem, PlainCalendarMonth, PlainCaller, PlainCommittee, PlainNote,
    PlainPastActionItem, PlainPerson, PlainSession, PlainSessionMetadata, PlainTopic,
    PlainVoteTally,
};

/// Conversion failures for plain documents.
///
/// A plain document must be self-contained: every person referenced by a
/// topic, note, or past action item has to appear on one of its own rosters.
/// Anything else indicates a corrupt or hand-edited file, and the conversion
/// aborts without producing a partial session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    UnknownPerson {
        context: &'static str,
        full_name: String,
    },
    DuplicateCalendarMonth {
        month: Month,
    },
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPerson { context, full_name } => write!(
                f,
                "cannot resolve {context}: {full_name} is not on any roster"
            ),
            Self::DuplicateCalendarMonth { month } => {
                write!(f, "calendar month {month} appears more than once")
            }
        }
    }
}

impl std::error::Error for ConvertError {}

/// Converts a plain document into an identified session plus the allocator
/// state that issued its ids.
///
/// Every person, topic, note, calendar item, committee, and past action item
/// receives a fresh id. Structurally-equal people appearing on multiple
/// rosters collapse to a single id, and person references elsewhere resolve
/// against the converted rosters by full value equality.
pub fn to_internal(plain: &PlainSession) -> Result<(Session, IdAllocator), ConvertError> {
    let mut allocator = IdAllocator::new();
    let mut index: Vec<StoredPerson> = Vec::new();

    let mut metadata = SessionMetadata::new();
    {
        let plain_metadata = &plain.metadata;
        metadata.set_organization(plain_metadata.organization.clone());
        metadata.set_title(plain_metadata.title.clone());
        metadata.set_subtitle(plain_metadata.subtitle.clone());
        metadata.set_location(plain_metadata.location.clone());
        metadata.set_start_time(plain_metadata.start_time);
        metadata.set_caller(plain_metadata.caller.as_ref().map(|caller| {
            Caller::new(person_from_plain(&caller.person), caller.role.clone())
        }));
        metadata.set_committee_doc_url(plain_metadata.committee_doc_url.clone());

        for plain_person in &plain_metadata.members_present {
            let stored = intern_person(person_from_plain(plain_person), &mut allocator, &mut index);
            metadata.members_present_mut().push(stored);
        }
        for plain_person in &plain_metadata.members_absent {
            let stored = intern_person(person_from_plain(plain_person), &mut allocator, &mut index);
            metadata.members_absent_mut().push(stored);
        }
        for plain_person in &plain_metadata.administration_present {
            let stored = intern_person(person_from_plain(plain_person), &mut allocator, &mut index);
            metadata.administration_present_mut().push(stored);
        }
    }

    let mut topics: Vec<Arc<Topic>> = Vec::with_capacity(plain.topics.len());
    for plain_topic in &plain.topics {
        let mut topic = Topic::new(
            allocator.next_topic_id(),
            plain_topic.title.clone(),
            plain_topic.start_time,
            plain_topic.duration_minutes,
        );
        if let Some(leader) = &plain_topic.leader {
            let person = person_from_plain(leader);
            topic.set_leader(Some(resolve_person(&person, &index, "topic leader")?));
        }
        for plain_note in &plain_topic.notes {
            let body = note_body_from_plain(plain_note, &index)?;
            topic
                .notes_mut()
                .push(Note::new(allocator.next_note_id(), body));
        }
        topics.push(Arc::new(topic));
    }

    let mut calendar: Vec<CalendarMonthEntry> = Vec::with_capacity(plain.calendar.len());
    for plain_month in &plain.calendar {
        let month = Month::from(plain_month.month);
        if calendar.iter().any(|entry| entry.month() == month) {
            return Err(ConvertError::DuplicateCalendarMonth { month });
        }
        let mut entry = CalendarMonthEntry::new(month);
        for plain_item in &plain_month.items {
            entry.items_mut().push(CalendarItem::new(
                allocator.next_calendar_item_id(),
                plain_item.text.clone(),
                plain_item.completed,
            ));
        }
        calendar.push(entry);
    }

    let mut committees: Vec<Committee> = Vec::with_capacity(plain.committees.len());
    for plain_committee in &plain.committees {
        committees.push(Committee::new(
            allocator.next_committee_id(),
            plain_committee.name.clone(),
            plain_committee.kind.into(),
        ));
    }

    let mut past_action_items: Vec<PastActionItem> = Vec::with_capacity(plain.past_action_items.len());
    for plain_item in &plain.past_action_items {
        let assignee = resolve_person(
            &person_from_plain(&plain_item.assignee),
            &index,
            "past action item assignee",
        )?;
        let mut item = PastActionItem::new(
            allocator.next_past_action_item_id(),
            plain_item.text.clone(),
            assignee,
            plain_item.due_date,
        );
        item.set_completed(plain_item.completed);
        past_action_items.push(item);
    }

    let mut session = Session::new();
    *session.metadata_mut() = metadata;
    *session.calendar_mut() = calendar;
    *session.topics_mut() = topics;
    *session.committees_mut() = committees;
    *session.past_action_items_mut() = past_action_items;

    Ok((session, allocator))
}

/// Projects an identified session back to plain form.
///
/// Ids are dropped and person references expand to value copies. The store's
/// referential-integrity invariant guarantees note and past-action-item
/// references resolve; a topic leader removed from attendance (which no
/// invariant forbids) is dropped rather than exported dangling.
pub fn to_external(session: &Session) -> PlainSession {
    let metadata = session.metadata();

    PlainSession {
        metadata: PlainSessionMetadata {
            organization: metadata.organization().to_owned(),
            title: metadata.title().to_owned(),
            subtitle: metadata.subtitle().to_owned(),
            location: metadata.location().to_owned(),
            start_time: metadata.start_time(),
            members_present: plain_roster(metadata.members_present()),
            members_absent: plain_roster(metadata.members_absent()),
            administration_present: plain_roster(metadata.administration_present()),
            caller: metadata.caller().map(|caller| PlainCaller {
                person: plain_person(caller.person()),
                role: caller.role().to_owned(),
            }),
            committee_doc_url: metadata.committee_doc_url().map(ToOwned::to_owned),
        },
        calendar: session
            .calendar()
            .iter()
            .map(|entry| PlainCalendarMonth {
                month: entry.month().into(),
                items: entry
                    .items()
                    .iter()
                    .map(|item| PlainCalendarItem {
                        text: item.text().to_owned(),
                        completed: item.completed(),
                    })
                    .collect(),
            })
            .collect(),
        topics: session
            .topics()
            .iter()
            .map(|topic| PlainTopic {
                title: topic.title().to_owned(),
                start_time: topic.start_time(),
                duration_minutes: topic.duration_minutes(),
                leader: topic
                    .leader()
                    .and_then(|leader| session.roster_person(leader))
                    .map(|stored| plain_person(stored.person())),
                notes: topic
                    .notes()
                    .iter()
                    .map(|note| plain_note(session, note))
                    .collect(),
            })
            .collect(),
        committees: session
            .committees()
            .iter()
            .map(|committee| PlainCommittee {
                name: committee.name().to_owned(),
                kind: committee.kind().into(),
            })
            .collect(),
        past_action_items: session
            .past_action_items()
            .iter()
            .map(|item| PlainPastActionItem {
                text: item.text().to_owned(),
                assignee: expand_person(session, item.assignee()),
                due_date: item.due_date(),
                completed: item.completed(),
            })
            .collect(),
    }
}

fn person_from_plain(plain: &PlainPerson) -> Person {
    Person::new(
        plain.title.into(),
        plain.first_name.clone(),
        plain.last_name.clone(),
    )
}

fn plain_person(person: &Person) -> PlainPerson {
    PlainPerson {
        title: person.title().into(),
        first_name: person.first_name().to_owned(),
        last_name: person.last_name().to_owned(),
    }
}

fn plain_roster(roster: &[StoredPerson]) -> Vec<PlainPerson> {
    roster
        .iter()
        .map(|stored| plain_person(stored.person()))
        .collect()
}

fn intern_person(
    person: Person,
    allocator: &mut IdAllocator,
    index: &mut Vec<StoredPerson>,
) -> StoredPerson {
    if let Some(existing) = index.iter().find(|stored| stored.person() == &person) {
        return existing.clone();
    }
    let stored = StoredPerson::new(allocator.next_person_id(), person);
    index.push(stored.clone());
    stored
}

fn resolve_person(
    person: &Person,
    index: &[StoredPerson],
    context: &'static str,
) -> Result<PersonId, ConvertError> {
    index
        .iter()
        .find(|stored| stored.person() == person)
        .map(StoredPerson::person_id)
        .ok_or_else(|| ConvertError::UnknownPerson {
            context,
            full_name: person.full_name(),
        })
}

fn note_body_from_plain(plain: &PlainNote, index: &[StoredPerson]) -> Result<NoteBody, ConvertError> {
    match plain {
        PlainNote::Text { speaker, text } => Ok(NoteBody::Text {
            speaker: speaker
                .as_ref()
                .map(|person| resolve_person(&person_from_plain(person), index, "note speaker"))
                .transpose()?,
            text: text.clone(),
        }),
        PlainNote::ActionItem {
            assignee,
            text,
            due_date,
        } => Ok(NoteBody::ActionItem {
            assignee: resolve_person(
                &person_from_plain(assignee),
                index,
                "action item assignee",
            )?,
            text: text.clone(),
            due_date: *due_date,
        }),
        PlainNote::Motion {
            mover,
            seconder,
            text,
            outcome,
            tally,
        } => {
            let outcome = MotionOutcome::from(*outcome);
            Ok(NoteBody::Motion {
                mover: resolve_person(&person_from_plain(mover), index, "motion mover")?,
                seconder: resolve_person(&person_from_plain(seconder), index, "motion seconder")?,
                text: text.clone(),
                outcome,
                tally: normalize_tally(outcome, (*tally).map(tally_from_plain)),
            })
        }
        PlainNote::Link { text, url } => Ok(NoteBody::Link {
            text: text.clone(),
            url: url.clone(),
        }),
    }
}

fn plain_note(session: &Session, note: &Note) -> PlainNote {
    match note.body() {
        NoteBody::Text { speaker, text } => PlainNote::Text {
            speaker: speaker
                .as_ref()
                .map(|speaker| expand_person(session, *speaker)),
            text: text.clone(),
        },
        NoteBody::ActionItem {
            assignee,
            text,
            due_date,
        } => PlainNote::ActionItem {
            assignee: expand_person(session, *assignee),
            text: text.clone(),
            due_date: *due_date,
        },
        NoteBody::Motion {
            mover,
            seconder,
            text,
            outcome,
            tally,
        } => PlainNote::Motion {
            mover: expand_person(session, *mover),
            seconder: expand_person(session, *seconder),
            text: text.clone(),
            outcome: (*outcome).into(),
            tally: tally.as_ref().map(plain_tally),
        },
        NoteBody::Link { text, url } => PlainNote::Link {
            text: text.clone(),
            url: url.clone(),
        },
    }
}

fn expand_person(session: &Session, person_id: PersonId) -> PlainPerson {
    let stored = session
        .roster_person(person_id)
        .expect("person references resolve to a roster entry");
    plain_person(stored.person())
}

fn tally_from_plain(plain: PlainVoteTally) -> VoteTally {
    VoteTally::new(plain.in_favor, plain.opposed, plain.abstained)
}

fn plain_tally(tally: &VoteTally) -> PlainVoteTally {
    PlainVoteTally {
        in_favor: tally.in_favor(),
        opposed: tally.opposed(),
        abstained: tally.abstained(),
    }
}
