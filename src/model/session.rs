// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::calendar::{CalendarItem, CalendarMonthEntry, Month};
use super::committee::Committee;
use super::ids::{CalendarItemId, CommitteeId, NoteId, PastActionItemId, PersonId, TopicId};
use super::note::Note;
use super::past_action::PastActionItem;
use super::person::{Person, StoredPerson};
use super::topic::Topic;

/// Who called the meeting to order.
///
/// The caller is an embedded person value, not a roster reference: removing
/// someone from attendance never invalidates the caller line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    person: Person,
    role: String,
}

impl Caller {
    pub fn new(person: Person, role: impl Into<String>) -> Self {
        Self {
            person,
            role: role.into(),
        }
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    pub fn role(&self) -> &str {
        &self.role
    }
}

/// Session-wide metadata: titles, venue, start time, and the three
/// attendance rosters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMetadata {
    organization: String,
    title: String,
    subtitle: String,
    location: String,
    start_time: DateTime<Utc>,
    members_present: Vec<StoredPerson>,
    members_absent: Vec<StoredPerson>,
    administration_present: Vec<StoredPerson>,
    caller: Option<Caller>,
    committee_doc_url: Option<String>,
}

impl SessionMetadata {
    /// Blank metadata for a fresh session. The start time is the Unix epoch
    /// until the UI supplies a real one, keeping construction deterministic.
    pub fn new() -> Self {
        Self {
            organization: String::new(),
            title: String::new(),
            subtitle: String::new(),
            location: String::new(),
            start_time: DateTime::<Utc>::UNIX_EPOCH,
            members_present: Vec::new(),
            members_absent: Vec::new(),
            administration_present: Vec::new(),
            caller: None,
            committee_doc_url: None,
        }
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn start_time(&self) -> DateTime<Utc> {
        self.start_time
    }

    pub fn members_present(&self) -> &[StoredPerson] {
        &self.members_present
    }

    pub fn members_present_mut(&mut self) -> &mut Vec<StoredPerson> {
        &mut self.members_present
    }

    pub fn members_absent(&self) -> &[StoredPerson] {
        &self.members_absent
    }

    pub fn members_absent_mut(&mut self) -> &mut Vec<StoredPerson> {
        &mut self.members_absent
    }

    pub fn administration_present(&self) -> &[StoredPerson] {
        &self.administration_present
    }

    pub fn administration_present_mut(&mut self) -> &mut Vec<StoredPerson> {
        &mut self.administration_present
    }

    pub fn caller(&self) -> Option<&Caller> {
        self.caller.as_ref()
    }

    pub fn committee_doc_url(&self) -> Option<&str> {
        self.committee_doc_url.as_deref()
    }

    pub fn set_organization(&mut self, organization: impl Into<String>) {
        self.organization = organization.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_subtitle(&mut self, subtitle: impl Into<String>) {
        self.subtitle = subtitle.into();
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    pub fn set_start_time(&mut self, start_time: DateTime<Utc>) {
        self.start_time = start_time;
    }

    pub fn set_caller(&mut self, caller: Option<Caller>) {
        self.caller = caller;
    }

    pub fn set_committee_doc_url(&mut self, committee_doc_url: Option<String>) {
        self.committee_doc_url = committee_doc_url;
    }

    /// Looks a person up across all three rosters.
    pub fn roster_person(&self, person_id: PersonId) -> Option<&StoredPerson> {
        self.members_present
            .iter()
            .chain(&self.members_absent)
            .chain(&self.administration_present)
            .find(|stored| stored.person_id() == person_id)
    }

    pub fn roster_person_mut(&mut self, person_id: PersonId) -> Option<&mut StoredPerson> {
        self.members_present
            .iter_mut()
            .chain(&mut self.members_absent)
            .chain(&mut self.administration_present)
            .find(|stored| stored.person_id() == person_id)
    }

    pub fn roster_contains(&self, person_id: PersonId) -> bool {
        self.roster_person(person_id).is_some()
    }
}

impl Default for SessionMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// The root document: one meeting's minutes.
///
/// Subtrees sit behind `Arc`, so cloning a session (the undo snapshot unit)
/// is a handful of refcount bumps and the `*_mut` accessors reallocate only
/// the path from the root to the touched node. Sibling subtrees stay shared
/// between snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    metadata: Arc<SessionMetadata>,
    calendar: Arc<Vec<CalendarMonthEntry>>,
    topics: Arc<Vec<Arc<Topic>>>,
    committees: Arc<Vec<Committee>>,
    past_action_items: Arc<Vec<PastActionItem>>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            metadata: Arc::new(SessionMetadata::new()),
            calendar: Arc::new(Vec::new()),
            topics: Arc::new(Vec::new()),
            committees: Arc::new(Vec::new()),
            past_action_items: Arc::new(Vec::new()),
        }
    }

    pub fn metadata(&self) -> &SessionMetadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut SessionMetadata {
        Arc::make_mut(&mut self.metadata)
    }

    pub fn calendar(&self) -> &[CalendarMonthEntry] {
        &self.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut Vec<CalendarMonthEntry> {
        Arc::make_mut(&mut self.calendar)
    }

    pub fn calendar_month(&self, month: Month) -> Option<&CalendarMonthEntry> {
        self.calendar.iter().find(|entry| entry.month() == month)
    }

    pub fn calendar_month_mut(&mut self, month: Month) -> Option<&mut CalendarMonthEntry> {
        Arc::make_mut(&mut self.calendar)
            .iter_mut()
            .find(|entry| entry.month() == month)
    }

    pub fn calendar_item(&self, item_id: CalendarItemId) -> Option<&CalendarItem> {
        self.calendar
            .iter()
            .find_map(|entry| entry.item(item_id))
    }

    pub fn calendar_item_mut(&mut self, item_id: CalendarItemId) -> Option<&mut CalendarItem> {
        Arc::make_mut(&mut self.calendar)
            .iter_mut()
            .find_map(|entry| entry.item_mut(item_id))
    }

    pub fn topics(&self) -> &[Arc<Topic>] {
        &self.topics
    }

    pub fn topics_mut(&mut self) -> &mut Vec<Arc<Topic>> {
        Arc::make_mut(&mut self.topics)
    }

    pub fn topic(&self, topic_id: TopicId) -> Option<&Topic> {
        self.topics
            .iter()
            .find(|topic| topic.topic_id() == topic_id)
            .map(Arc::as_ref)
    }

    pub fn topic_mut(&mut self, topic_id: TopicId) -> Option<&mut Topic> {
        Arc::make_mut(&mut self.topics)
            .iter_mut()
            .find(|topic| topic.topic_id() == topic_id)
            .map(Arc::make_mut)
    }

    pub fn topic_containing_note(&self, note_id: NoteId) -> Option<&Topic> {
        self.topics
            .iter()
            .find(|topic| topic.contains_note(note_id))
            .map(Arc::as_ref)
    }

    pub fn note(&self, note_id: NoteId) -> Option<&Note> {
        self.topic_containing_note(note_id)
            .and_then(|topic| topic.note(note_id))
    }

    pub fn note_mut(&mut self, note_id: NoteId) -> Option<&mut Note> {
        Arc::make_mut(&mut self.topics)
            .iter_mut()
            .find(|topic| topic.contains_note(note_id))
            .map(Arc::make_mut)
            .and_then(|topic| topic.note_mut(note_id))
    }

    pub fn committees(&self) -> &[Committee] {
        &self.committees
    }

    pub fn committees_mut(&mut self) -> &mut Vec<Committee> {
        Arc::make_mut(&mut self.committees)
    }

    pub fn committee(&self, committee_id: CommitteeId) -> Option<&Committee> {
        self.committees
            .iter()
            .find(|committee| committee.committee_id() == committee_id)
    }

    pub fn committee_mut(&mut self, committee_id: CommitteeId) -> Option<&mut Committee> {
        Arc::make_mut(&mut self.committees)
            .iter_mut()
            .find(|committee| committee.committee_id() == committee_id)
    }

    pub fn past_action_items(&self) -> &[PastActionItem] {
        &self.past_action_items
    }

    pub fn past_action_items_mut(&mut self) -> &mut Vec<PastActionItem> {
        Arc::make_mut(&mut self.past_action_items)
    }

    pub fn past_action_item(&self, item_id: PastActionItemId) -> Option<&PastActionItem> {
        self.past_action_items
            .iter()
            .find(|item| item.item_id() == item_id)
    }

    pub fn past_action_item_mut(
        &mut self,
        item_id: PastActionItemId,
    ) -> Option<&mut PastActionItem> {
        Arc::make_mut(&mut self.past_action_items)
            .iter_mut()
            .find(|item| item.item_id() == item_id)
    }

    pub fn roster_person(&self, person_id: PersonId) -> Option<&StoredPerson> {
        self.metadata.roster_person(person_id)
    }

    pub fn roster_contains(&self, person_id: PersonId) -> bool {
        self.metadata.roster_contains(person_id)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::DateTime;

    use super::Session;
    use crate::model::ids::TopicId;
    use crate::model::topic::Topic;

    #[test]
    fn snapshot_shares_untouched_topics() {
        let mut session = Session::new();
        let t0 = DateTime::UNIX_EPOCH;
        session
            .topics_mut()
            .push(Arc::new(Topic::new(TopicId::new(0), "Budget", t0, 30)));
        session
            .topics_mut()
            .push(Arc::new(Topic::new(TopicId::new(1), "Facilities", t0, 15)));

        let snapshot = session.clone();
        session
            .topic_mut(TopicId::new(1))
            .expect("topic")
            .set_title("Facilities review");

        // The edited topic diverged; its sibling is still the same allocation.
        assert!(Arc::ptr_eq(&snapshot.topics()[0], &session.topics()[0]));
        assert!(!Arc::ptr_eq(&snapshot.topics()[1], &session.topics()[1]));
        assert_eq!(snapshot.topics()[1].title(), "Facilities");
        assert_eq!(session.topics()[1].title(), "Facilities review");
    }

    #[test]
    fn note_lookup_scans_all_topics() {
        use crate::model::ids::NoteId;
        use crate::model::note::{Note, NoteBody};

        let mut session = Session::new();
        let t0 = DateTime::UNIX_EPOCH;
        let mut topic = Topic::new(TopicId::new(0), "Budget", t0, 30);
        topic.notes_mut().push(Note::new(
            NoteId::new(7),
            NoteBody::Text {
                speaker: None,
                text: "noted".to_owned(),
            },
        ));
        session.topics_mut().push(Arc::new(topic));

        assert!(session.note(NoteId::new(7)).is_some());
        assert!(session.note(NoteId::new(8)).is_none());
        assert_eq!(
            session
                .topic_containing_note(NoteId::new(7))
                .map(Topic::topic_id),
            Some(TopicId::new(0))
        );
    }
}
