// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::marker::PhantomData;

/// A durable integer identifier scoped to one loaded session.
///
/// Ids are issued by [`IdAllocator`] and are stable for the lifetime of the
/// loaded document: an entity keeps its id across edits, reorders, and
/// undo/redo, and a retired id is never handed to a different entity. Ids
/// carry no meaning beyond uniqueness; gaps are expected after deletions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Id<T> {
    value: u64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub const fn new(value: u64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn value(self) -> u64 {
        self.value
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PersonIdTag {}
pub type PersonId = Id<PersonIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TopicIdTag {}
pub type TopicId = Id<TopicIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NoteIdTag {}
pub type NoteId = Id<NoteIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CalendarItemIdTag {}
pub type CalendarItemId = Id<CalendarItemIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommitteeIdTag {}
pub type CommitteeId = Id<CommitteeIdTag>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PastActionItemIdTag {}
pub type PastActionItemId = Id<PastActionItemIdTag>;

/// Issues ids per entity category, strictly increasing within one store
/// instance.
///
/// Counters start at 0 after a fresh load and only move forward. Undo
/// restores document snapshots but never rewinds the counters, so an entity
/// revived by redo cannot collide with a later allocation. Allocation cannot
/// fail.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdAllocator {
    next_person: u64,
    next_topic: u64,
    next_note: u64,
    next_calendar_item: u64,
    next_committee: u64,
    next_past_action_item: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_person_id(&mut self) -> PersonId {
        let id = PersonId::new(self.next_person);
        self.next_person = self.next_person.saturating_add(1);
        id
    }

    pub fn next_topic_id(&mut self) -> TopicId {
        let id = TopicId::new(self.next_topic);
        self.next_topic = self.next_topic.saturating_add(1);
        id
    }

    pub fn next_note_id(&mut self) -> NoteId {
        let id = NoteId::new(self.next_note);
        self.next_note = self.next_note.saturating_add(1);
        id
    }

    pub fn next_calendar_item_id(&mut self) -> CalendarItemId {
        let id = CalendarItemId::new(self.next_calendar_item);
        self.next_calendar_item = self.next_calendar_item.saturating_add(1);
        id
    }

    pub fn next_committee_id(&mut self) -> CommitteeId {
        let id = CommitteeId::new(self.next_committee);
        self.next_committee = self.next_committee.saturating_add(1);
        id
    }

    pub fn next_past_action_item_id(&mut self) -> PastActionItemId {
        let id = PastActionItemId::new(self.next_past_action_item);
        self.next_past_action_item = self.next_past_action_item.saturating_add(1);
        id
    }
}

#[cfg(test)]
mod tests {
    use super::IdAllocator;

    #[test]
    fn allocator_issues_increasing_ids_per_category() {
        let mut allocator = IdAllocator::new();

        assert_eq!(allocator.next_person_id().value(), 0);
        assert_eq!(allocator.next_person_id().value(), 1);
        assert_eq!(allocator.next_person_id().value(), 2);
    }

    #[test]
    fn allocator_categories_are_independent() {
        let mut allocator = IdAllocator::new();

        let _ = allocator.next_person_id();
        let _ = allocator.next_person_id();

        assert_eq!(allocator.next_topic_id().value(), 0);
        assert_eq!(allocator.next_note_id().value(), 0);
        assert_eq!(allocator.next_committee_id().value(), 0);
    }
}
