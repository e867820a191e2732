// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

/// Mutation operation implementations for [`DocumentStore`].
/// Keeps `store::mod` focused on store state and the commit protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RosterKind {
    MembersPresent,
    MembersAbsent,
    AdministrationPresent,
}

impl DocumentStore {
    // --- rosters ---

    pub fn add_member_present(&mut self, person: Person) -> Result<PersonId, EditError> {
        self.add_roster_person(person, RosterKind::MembersPresent)
    }

    pub fn add_member_absent(&mut self, person: Person) -> Result<PersonId, EditError> {
        self.add_roster_person(person, RosterKind::MembersAbsent)
    }

    pub fn add_administration_present(&mut self, person: Person) -> Result<PersonId, EditError> {
        self.add_roster_person(person, RosterKind::AdministrationPresent)
    }

    fn add_roster_person(
        &mut self,
        person: Person,
        roster: RosterKind,
    ) -> Result<PersonId, EditError> {
        require_text(EntityKind::Person, "first name", person.first_name())?;
        require_text(EntityKind::Person, "last name", person.last_name())?;

        let person_id = self.allocator.next_person_id();
        let mut next = self.session.clone();
        let stored = StoredPerson::new(person_id, person);
        let metadata = next.metadata_mut();
        match roster {
            RosterKind::MembersPresent => metadata.members_present_mut().push(stored),
            RosterKind::MembersAbsent => metadata.members_absent_mut().push(stored),
            RosterKind::AdministrationPresent => {
                metadata.administration_present_mut().push(stored)
            }
        }
        self.commit(next);
        Ok(person_id)
    }

    /// Fails with [`EditError::PersonInUse`] while any note or past action
    /// item still references the person.
    pub fn remove_member_present(&mut self, person_id: PersonId) -> Result<(), EditError> {
        self.remove_roster_person(person_id, RosterKind::MembersPresent)
    }

    pub fn remove_member_absent(&mut self, person_id: PersonId) -> Result<(), EditError> {
        self.remove_roster_person(person_id, RosterKind::MembersAbsent)
    }

    pub fn remove_administration_present(
        &mut self,
        person_id: PersonId,
    ) -> Result<(), EditError> {
        self.remove_roster_person(person_id, RosterKind::AdministrationPresent)
    }

    fn remove_roster_person(
        &mut self,
        person_id: PersonId,
        roster: RosterKind,
    ) -> Result<(), EditError> {
        let metadata = self.session.metadata();
        let entries = match roster {
            RosterKind::MembersPresent => metadata.members_present(),
            RosterKind::MembersAbsent => metadata.members_absent(),
            RosterKind::AdministrationPresent => metadata.administration_present(),
        };
        let Some(position) = entries
            .iter()
            .position(|stored| stored.person_id() == person_id)
        else {
            return Err(EditError::PersonNotFound { person_id });
        };

        if let Some(site) = integrity::first_reference(&self.session, person_id) {
            return Err(EditError::PersonInUse { person_id, site });
        }

        let mut next = self.session.clone();
        let metadata = next.metadata_mut();
        match roster {
            RosterKind::MembersPresent => {
                metadata.members_present_mut().remove(position);
            }
            RosterKind::MembersAbsent => {
                metadata.members_absent_mut().remove(position);
            }
            RosterKind::AdministrationPresent => {
                metadata.administration_present_mut().remove(position);
            }
        }
        self.commit(next);
        Ok(())
    }

    /// Renames or retitles a person in place. The id never changes, so every
    /// note referencing the person picks up the new name.
    pub fn update_person(
        &mut self,
        person_id: PersonId,
        patch: PersonPatch,
    ) -> Result<(), EditError> {
        let Some(stored) = self.session.roster_person(person_id) else {
            return Err(EditError::PersonNotFound { person_id });
        };
        if let Some(first_name) = &patch.first_name {
            require_text(EntityKind::Person, "first name", first_name)?;
        }
        if let Some(last_name) = &patch.last_name {
            require_text(EntityKind::Person, "last name", last_name)?;
        }

        let current = stored.person().clone();
        let person = Person::new(
            patch.title.unwrap_or_else(|| current.title()),
            patch
                .first_name
                .unwrap_or_else(|| current.first_name().to_owned()),
            patch
                .last_name
                .unwrap_or_else(|| current.last_name().to_owned()),
        );

        let mut next = self.session.clone();
        let metadata = next.metadata_mut();
        // A person deduplicated onto several rosters shares one id; keep all
        // of those entries in sync.
        for stored in metadata.members_present_mut().iter_mut() {
            if stored.person_id() == person_id {
                stored.set_person(person.clone());
            }
        }
        for stored in metadata.members_absent_mut().iter_mut() {
            if stored.person_id() == person_id {
                stored.set_person(person.clone());
            }
        }
        for stored in metadata.administration_present_mut().iter_mut() {
            if stored.person_id() == person_id {
                stored.set_person(person.clone());
            }
        }
        self.commit(next);
        Ok(())
    }

    // --- metadata ---

    pub fn update_metadata(&mut self, patch: MetadataPatch) {
        let mut next = self.session.clone();
        let metadata = next.metadata_mut();
        if let Some(organization) = patch.organization {
            metadata.set_organization(organization);
        }
        if let Some(title) = patch.title {
            metadata.set_title(title);
        }
        if let Some(subtitle) = patch.subtitle {
            metadata.set_subtitle(subtitle);
        }
        if let Some(location) = patch.location {
            metadata.set_location(location);
        }
        if let Some(start_time) = patch.start_time {
            metadata.set_start_time(start_time);
        }
        self.commit(next);
    }

    pub fn update_caller(&mut self, caller: Option<Caller>) {
        let mut next = self.session.clone();
        next.metadata_mut().set_caller(caller);
        self.commit(next);
    }

    pub fn update_committee_doc_url(&mut self, committee_doc_url: Option<String>) {
        let mut next = self.session.clone();
        next.metadata_mut().set_committee_doc_url(committee_doc_url);
        self.commit(next);
    }

    // --- topics ---

    /// Inserts before `before_index` (clamped to the list length), or
    /// appends. No topic id is allocated when validation fails.
    pub fn add_topic(
        &mut self,
        draft: TopicDraft,
        before_index: Option<usize>,
    ) -> Result<TopicId, EditError> {
        require_text(EntityKind::Topic, "title", &draft.title)?;
        let Some(duration_minutes) = draft.duration_minutes else {
            return Err(EditError::MissingField {
                entity: EntityKind::Topic,
                field: "duration",
            });
        };
        if let Some(leader) = draft.leader {
            require_roster_member(&self.session, leader)?;
        }

        let topic_id = self.allocator.next_topic_id();
        let mut topic = Topic::new(topic_id, draft.title, draft.start_time, duration_minutes);
        topic.set_leader(draft.leader);

        let mut next = self.session.clone();
        let topics = next.topics_mut();
        let index = clamp_index(topics.len(), before_index);
        topics.insert(index, Arc::new(topic));
        self.commit(next);
        Ok(topic_id)
    }

    pub fn update_topic(&mut self, topic_id: TopicId, patch: TopicPatch) -> Result<(), EditError> {
        if self.session.topic(topic_id).is_none() {
            return Err(EditError::TopicNotFound { topic_id });
        }
        if let Some(title) = &patch.title {
            require_text(EntityKind::Topic, "title", title)?;
        }

        let mut next = self.session.clone();
        let topic = next.topic_mut(topic_id).expect("presence checked above");
        if let Some(title) = patch.title {
            topic.set_title(title);
        }
        if let Some(start_time) = patch.start_time {
            topic.set_start_time(start_time);
        }
        if let Some(duration_minutes) = patch.duration_minutes {
            topic.set_duration_minutes(duration_minutes);
        }
        self.commit(next);
        Ok(())
    }

    pub fn set_topic_leader(
        &mut self,
        topic_id: TopicId,
        leader: Option<PersonId>,
    ) -> Result<(), EditError> {
        if self.session.topic(topic_id).is_none() {
            return Err(EditError::TopicNotFound { topic_id });
        }
        if let Some(leader) = leader {
            require_roster_member(&self.session, leader)?;
        }

        let mut next = self.session.clone();
        next.topic_mut(topic_id)
            .expect("presence checked above")
            .set_leader(leader);
        self.commit(next);
        Ok(())
    }

    /// Removes the topic and all of its notes. Nothing references notes, so
    /// no integrity check is needed.
    pub fn remove_topic(&mut self, topic_id: TopicId) -> Result<(), EditError> {
        let Some(position) = self
            .session
            .topics()
            .iter()
            .position(|topic| topic.topic_id() == topic_id)
        else {
            return Err(EditError::TopicNotFound { topic_id });
        };

        let mut next = self.session.clone();
        next.topics_mut().remove(position);
        self.commit(next);
        Ok(())
    }

    /// Reorders topics by start time (stable). Insertion order is otherwise
    /// preserved.
    pub fn sort_topics(&mut self) {
        let mut next = self.session.clone();
        next.topics_mut()
            .sort_by_key(|topic| topic.start_time());
        self.commit(next);
    }

    // --- notes ---

    pub fn add_note(
        &mut self,
        topic_id: TopicId,
        body: NoteBody,
        before_index: Option<usize>,
    ) -> Result<NoteId, EditError> {
        if self.session.topic(topic_id).is_none() {
            return Err(EditError::TopicNotFound { topic_id });
        }
        validate_note_body(&self.session, &body)?;
        let body = normalize_note_body(body);

        let note_id = self.allocator.next_note_id();
        let mut next = self.session.clone();
        let topic = next.topic_mut(topic_id).expect("presence checked above");
        let notes = topic.notes_mut();
        let index = clamp_index(notes.len(), before_index);
        notes.insert(index, Note::new(note_id, body));
        self.commit(next);
        Ok(note_id)
    }

    /// Replaces a note's content wholesale, keeping its id. The kind is
    /// fixed at creation.
    pub fn update_note(&mut self, note_id: NoteId, body: NoteBody) -> Result<(), EditError> {
        let Some(existing) = self.session.note(note_id) else {
            return Err(EditError::NoteNotFound { note_id });
        };
        let expected = existing.kind();
        let found = body.kind();
        if expected != found {
            return Err(EditError::NoteKindMismatch {
                note_id,
                expected,
                found,
            });
        }
        validate_note_body(&self.session, &body)?;
        let body = normalize_note_body(body);

        let mut next = self.session.clone();
        next.note_mut(note_id)
            .expect("presence checked above")
            .set_body(body)
            .expect("kind checked above");
        self.commit(next);
        Ok(())
    }

    pub fn remove_note(&mut self, note_id: NoteId) -> Result<(), EditError> {
        if self.session.note(note_id).is_none() {
            return Err(EditError::NoteNotFound { note_id });
        }

        let mut next = self.session.clone();
        let topics = next.topics_mut();
        if let Some(topic) = topics.iter_mut().find(|topic| topic.contains_note(note_id)) {
            Arc::make_mut(topic)
                .notes_mut()
                .retain(|note| note.note_id() != note_id);
        }
        self.commit(next);
        Ok(())
    }

    // --- calendar ---

    pub fn add_calendar_month(
        &mut self,
        month: Month,
        before_index: Option<usize>,
    ) -> Result<(), EditError> {
        if self.session.calendar_month(month).is_some() {
            return Err(EditError::DuplicateCalendarMonth { month });
        }

        let mut next = self.session.clone();
        let calendar = next.calendar_mut();
        let index = clamp_index(calendar.len(), before_index);
        calendar.insert(index, CalendarMonthEntry::new(month));
        self.commit(next);
        Ok(())
    }

    /// Removes the month and all items scoped to it.
    pub fn remove_calendar_month(&mut self, month: Month) -> Result<(), EditError> {
        let Some(position) = self
            .session
            .calendar()
            .iter()
            .position(|entry| entry.month() == month)
        else {
            return Err(EditError::CalendarMonthNotFound { month });
        };

        let mut next = self.session.clone();
        next.calendar_mut().remove(position);
        self.commit(next);
        Ok(())
    }

    pub fn add_calendar_item(
        &mut self,
        month: Month,
        draft: CalendarItemDraft,
    ) -> Result<CalendarItemId, EditError> {
        if self.session.calendar_month(month).is_none() {
            return Err(EditError::CalendarMonthNotFound { month });
        }
        require_text(EntityKind::CalendarItem, "text", &draft.text)?;

        let item_id = self.allocator.next_calendar_item_id();
        let mut next = self.session.clone();
        next.calendar_month_mut(month)
            .expect("presence checked above")
            .items_mut()
            .push(CalendarItem::new(item_id, draft.text, draft.completed));
        self.commit(next);
        Ok(item_id)
    }

    pub fn update_calendar_item(
        &mut self,
        item_id: CalendarItemId,
        patch: CalendarItemPatch,
    ) -> Result<(), EditError> {
        if self.session.calendar_item(item_id).is_none() {
            return Err(EditError::CalendarItemNotFound { item_id });
        }
        if let Some(text) = &patch.text {
            require_text(EntityKind::CalendarItem, "text", text)?;
        }

        let mut next = self.session.clone();
        let item = next
            .calendar_item_mut(item_id)
            .expect("presence checked above");
        if let Some(text) = patch.text {
            item.set_text(text);
        }
        if let Some(completed) = patch.completed {
            item.set_completed(completed);
        }
        self.commit(next);
        Ok(())
    }

    pub fn remove_calendar_item(&mut self, item_id: CalendarItemId) -> Result<(), EditError> {
        if self.session.calendar_item(item_id).is_none() {
            return Err(EditError::CalendarItemNotFound { item_id });
        }

        let mut next = self.session.clone();
        if let Some(entry) = next
            .calendar_mut()
            .iter_mut()
            .find(|entry| entry.item(item_id).is_some())
        {
            entry.items_mut().retain(|item| item.item_id() != item_id);
        }
        self.commit(next);
        Ok(())
    }

    // --- committees ---

    pub fn add_committee(&mut self, draft: CommitteeDraft) -> Result<CommitteeId, EditError> {
        require_text(EntityKind::Committee, "name", &draft.name)?;

        let committee_id = self.allocator.next_committee_id();
        let mut next = self.session.clone();
        next.committees_mut()
            .push(Committee::new(committee_id, draft.name, draft.kind));
        self.commit(next);
        Ok(committee_id)
    }

    pub fn update_committee(
        &mut self,
        committee_id: CommitteeId,
        patch: CommitteePatch,
    ) -> Result<(), EditError> {
        if self.session.committee(committee_id).is_none() {
            return Err(EditError::CommitteeNotFound { committee_id });
        }
        if let Some(name) = &patch.name {
            require_text(EntityKind::Committee, "name", name)?;
        }

        let mut next = self.session.clone();
        let committee = next
            .committee_mut(committee_id)
            .expect("presence checked above");
        if let Some(name) = patch.name {
            committee.set_name(name);
        }
        if let Some(kind) = patch.kind {
            committee.set_kind(kind);
        }
        self.commit(next);
        Ok(())
    }

    pub fn remove_committee(&mut self, committee_id: CommitteeId) -> Result<(), EditError> {
        let Some(position) = self
            .session
            .committees()
            .iter()
            .position(|committee| committee.committee_id() == committee_id)
        else {
            return Err(EditError::CommitteeNotFound { committee_id });
        };

        let mut next = self.session.clone();
        next.committees_mut().remove(position);
        self.commit(next);
        Ok(())
    }

    // --- past action items ---

    pub fn add_past_action_item(
        &mut self,
        draft: PastActionItemDraft,
    ) -> Result<PastActionItemId, EditError> {
        require_text(EntityKind::PastActionItem, "text", &draft.text)?;
        require_roster_member(&self.session, draft.assignee)?;

        let item_id = self.allocator.next_past_action_item_id();
        let mut item = PastActionItem::new(item_id, draft.text, draft.assignee, draft.due_date);
        item.set_completed(draft.completed);

        let mut next = self.session.clone();
        next.past_action_items_mut().push(item);
        self.commit(next);
        Ok(item_id)
    }

    pub fn update_past_action_item(
        &mut self,
        item_id: PastActionItemId,
        patch: PastActionItemPatch,
    ) -> Result<(), EditError> {
        if self.session.past_action_item(item_id).is_none() {
            return Err(EditError::PastActionItemNotFound { item_id });
        }
        if let Some(text) = &patch.text {
            require_text(EntityKind::PastActionItem, "text", text)?;
        }
        if let Some(assignee) = patch.assignee {
            require_roster_member(&self.session, assignee)?;
        }

        let mut next = self.session.clone();
        let item = next
            .past_action_item_mut(item_id)
            .expect("presence checked above");
        if let Some(text) = patch.text {
            item.set_text(text);
        }
        if let Some(assignee) = patch.assignee {
            item.set_assignee(assignee);
        }
        if let Some(due_date) = patch.due_date {
            item.set_due_date(due_date);
        }
        if let Some(completed) = patch.completed {
            item.set_completed(completed);
        }
        self.commit(next);
        Ok(())
    }

    pub fn remove_past_action_item(
        &mut self,
        item_id: PastActionItemId,
    ) -> Result<(), EditError> {
        let Some(position) = self
            .session
            .past_action_items()
            .iter()
            .position(|item| item.item_id() == item_id)
        else {
            return Err(EditError::PastActionItemNotFound { item_id });
        };

        let mut next = self.session.clone();
        next.past_action_items_mut().remove(position);
        self.commit(next);
        Ok(())
    }
}

fn require_text(entity: EntityKind, field: &'static str, value: &str) -> Result<(), EditError> {
    if value.trim().is_empty() {
        return Err(EditError::MissingField { entity, field });
    }
    Ok(())
}

fn require_roster_member(session: &Session, person_id: PersonId) -> Result<(), EditError> {
    if !session.roster_contains(person_id) {
        return Err(EditError::PersonNotFound { person_id });
    }
    Ok(())
}

fn clamp_index(len: usize, before_index: Option<usize>) -> usize {
    before_index.map_or(len, |index| index.min(len))
}

/// Every person reference must resolve to a current roster member; the
/// per-variant required fields mirror what the editors collect.
fn validate_note_body(session: &Session, body: &NoteBody) -> Result<(), EditError> {
    for person_id in body.referenced_person_ids() {
        require_roster_member(session, person_id)?;
    }
    match body {
        NoteBody::Text { .. } => Ok(()),
        NoteBody::ActionItem { text, .. } => require_text(EntityKind::Note, "text", text),
        NoteBody::Motion { text, .. } => require_text(EntityKind::Note, "text", text),
        NoteBody::Link { text, url } => {
            require_text(EntityKind::Note, "text", text)?;
            require_text(EntityKind::Note, "url", url)
        }
    }
}

fn normalize_note_body(body: NoteBody) -> NoteBody {
    match body {
        NoteBody::Motion {
            mover,
            seconder,
            text,
            outcome,
            tally,
        } => NoteBody::Motion {
            mover,
            seconder,
            text,
            outcome,
            tally: normalize_tally(outcome, tally),
        },
        other => other,
    }
}
