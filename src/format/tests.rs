// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{DateTime, TimeZone, Utc};
use rstest::{fixture, rstest};

use super::{parse_document, to_external, to_internal, write_document, DocumentError};
use super::{
    CommitteeKindJson, ConvertError, HonorificJson, MonthJson, MotionOutcomeJson,
    PlainCalendarItem, PlainCalendarMonth, PlainCaller, PlainCommittee, PlainNote,
    PlainPastActionItem, PlainPerson, PlainSession, PlainSessionMetadata, PlainTopic,
    PlainVoteTally,
};
use crate::model::NoteBody;

fn instant(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0).unwrap()
}

fn person(title: HonorificJson, first_name: &str, last_name: &str) -> PlainPerson {
    PlainPerson {
        title,
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
    }
}

#[fixture]
fn plain_session() -> PlainSession {
    let jones = person(HonorificJson::Mr, "Bob", "Jones");
    let smith = person(HonorificJson::Mrs, "Ada", "Smith");
    let royce = person(HonorificJson::Dr, "Eve", "Royce");

    PlainSession {
        metadata: PlainSessionMetadata {
            organization: "Hillcrest Academy".to_owned(),
            title: "Board Meeting".to_owned(),
            subtitle: "Regular Session".to_owned(),
            location: "Library".to_owned(),
            start_time: instant(2026, 3, 10, 18, 0),
            members_present: vec![jones.clone(), smith.clone()],
            members_absent: vec![royce.clone()],
            administration_present: Vec::new(),
            caller: Some(PlainCaller {
                person: jones.clone(),
                role: "Chair".to_owned(),
            }),
            committee_doc_url: Some("https://example.org/committees".to_owned()),
        },
        calendar: vec![PlainCalendarMonth {
            month: MonthJson::March,
            items: vec![PlainCalendarItem {
                text: "Spring recital".to_owned(),
                completed: false,
            }],
        }],
        topics: vec![PlainTopic {
            title: "Budget".to_owned(),
            start_time: instant(2026, 3, 10, 18, 15),
            duration_minutes: 30,
            leader: Some(smith.clone()),
            notes: vec![
                PlainNote::Text {
                    speaker: Some(jones.clone()),
                    text: "Opening remarks".to_owned(),
                },
                PlainNote::ActionItem {
                    assignee: royce,
                    text: "Collect contractor quotes".to_owned(),
                    due_date: instant(2026, 3, 24, 12, 0),
                },
                PlainNote::Motion {
                    mover: jones.clone(),
                    seconder: smith,
                    text: "Approve the revised budget".to_owned(),
                    outcome: MotionOutcomeJson::Passed,
                    tally: Some(PlainVoteTally {
                        in_favor: 2,
                        opposed: 0,
                        abstained: 1,
                    }),
                },
                PlainNote::Link {
                    text: "Draft budget".to_owned(),
                    url: "https://example.org/budget".to_owned(),
                },
            ],
        }],
        committees: vec![PlainCommittee {
            name: "Finance".to_owned(),
            kind: CommitteeKindJson::Board,
        }],
        past_action_items: vec![PlainPastActionItem {
            text: "Repaint the gym".to_owned(),
            assignee: jones,
            due_date: instant(2026, 4, 1, 12, 0),
            completed: false,
        }],
    }
}

#[rstest]
fn round_trip_preserves_plain_document(plain_session: PlainSession) {
    let (session, _) = to_internal(&plain_session).expect("to_internal");
    assert_eq!(to_external(&session), plain_session);
}

#[rstest]
fn import_assigns_fresh_ids_in_document_order(plain_session: PlainSession) {
    let (session, mut allocator) = to_internal(&plain_session).expect("to_internal");

    let metadata = session.metadata();
    assert_eq!(metadata.members_present()[0].person_id().value(), 0);
    assert_eq!(metadata.members_present()[1].person_id().value(), 1);
    assert_eq!(metadata.members_absent()[0].person_id().value(), 2);

    let topic = &session.topics()[0];
    assert_eq!(topic.topic_id().value(), 0);
    let note_ids: Vec<u64> = topic.notes().iter().map(|note| note.note_id().value()).collect();
    assert_eq!(note_ids, vec![0, 1, 2, 3]);

    // The returned allocator continues where the import left off.
    assert_eq!(allocator.next_person_id().value(), 3);
    assert_eq!(allocator.next_topic_id().value(), 1);
    assert_eq!(allocator.next_note_id().value(), 4);
}

#[rstest]
fn import_dedups_structurally_equal_people_across_rosters(mut plain_session: PlainSession) {
    let jones = plain_session.metadata.members_present[0].clone();
    plain_session.metadata.members_absent.push(jones);

    let (session, _) = to_internal(&plain_session).expect("to_internal");
    let metadata = session.metadata();

    let jones_id = metadata.members_present()[0].person_id();
    assert_eq!(metadata.members_absent()[1].person_id(), jones_id);

    // Caller stays an embedded value; note references share the deduped id.
    let NoteBody::Text { speaker, .. } = session.topics()[0].notes()[0].body() else {
        panic!("expected text note");
    };
    assert_eq!(*speaker, Some(jones_id));
}

#[rstest]
fn import_rejects_unknown_person_reference(mut plain_session: PlainSession) {
    plain_session.topics[0].notes[1] = PlainNote::ActionItem {
        assignee: person(HonorificJson::Ms, "Pat", "Doe"),
        text: "Orphaned".to_owned(),
        due_date: instant(2026, 3, 24, 12, 0),
    };

    let err = to_internal(&plain_session).unwrap_err();
    assert_eq!(
        err,
        ConvertError::UnknownPerson {
            context: "action item assignee",
            full_name: "Ms. Pat Doe".to_owned(),
        }
    );
}

#[rstest]
fn import_rejects_unknown_topic_leader(mut plain_session: PlainSession) {
    plain_session.topics[0].leader = Some(person(HonorificJson::Mr, "Sam", "Stranger"));

    let err = to_internal(&plain_session).unwrap_err();
    assert_eq!(
        err,
        ConvertError::UnknownPerson {
            context: "topic leader",
            full_name: "Mr. Sam Stranger".to_owned(),
        }
    );
}

#[rstest]
fn import_rejects_duplicate_calendar_month(mut plain_session: PlainSession) {
    plain_session.calendar.push(PlainCalendarMonth {
        month: MonthJson::March,
        items: Vec::new(),
    });

    let err = to_internal(&plain_session).unwrap_err();
    assert_eq!(
        err,
        ConvertError::DuplicateCalendarMonth {
            month: crate::model::Month::March,
        }
    );
}

#[rstest]
fn import_drops_tally_when_outcome_is_undecided(mut plain_session: PlainSession) {
    let PlainNote::Motion { outcome, .. } = &mut plain_session.topics[0].notes[2] else {
        panic!("expected motion note");
    };
    *outcome = MotionOutcomeJson::Withdrawn;

    let (session, _) = to_internal(&plain_session).expect("to_internal");
    let NoteBody::Motion { tally, .. } = session.topics()[0].notes()[2].body() else {
        panic!("expected motion note");
    };
    assert_eq!(*tally, None);

    let exported = to_external(&session);
    let PlainNote::Motion { tally, .. } = &exported.topics[0].notes[2] else {
        panic!("expected motion note");
    };
    assert!(tally.is_none());
}

#[rstest]
fn document_round_trips_through_current_format(plain_session: PlainSession) {
    let text = write_document(&plain_session).expect("write_document");
    assert!(text.contains("\"version\": 2"));
    assert!(text.contains("2026-03-10T18:00:00Z"));

    let parsed = parse_document(&text).expect("parse_document");
    assert_eq!(parsed, plain_session);
}

#[rstest]
fn parse_document_upgrades_legacy_bare_session_layout(plain_session: PlainSession) {
    let legacy = serde_json::to_string(&plain_session).expect("serialize legacy layout");

    let parsed = parse_document(&legacy).expect("parse_document");
    assert_eq!(parsed, plain_session);
}

#[rstest]
fn parse_document_rejects_future_versions(plain_session: PlainSession) {
    let text = write_document(&plain_session).expect("write_document");
    let mut value: serde_json::Value = serde_json::from_str(&text).expect("reparse");
    value["version"] = serde_json::Value::from(3);
    let text = value.to_string();

    let err = parse_document(&text).unwrap_err();
    match err {
        DocumentError::UnsupportedVersion { version } => assert_eq!(version, 3),
        other => panic!("expected UnsupportedVersion, got: {other:?}"),
    }
}

#[test]
fn parse_document_reports_malformed_json() {
    let err = parse_document("{not json").unwrap_err();
    match err {
        DocumentError::Json { .. } => {}
        other => panic!("expected Json error, got: {other:?}"),
    }
}
