// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The document store: the live session, its mutation operations, and the
//! linear undo/redo history.
//!
//! Every mutation follows one commit protocol: validate against the current
//! session, build the next session by copy-on-write transformation, push the
//! old session on the undo stack, clear the redo stack, install the new
//! session, and notify subscribers synchronously. A rejected mutation leaves
//! the session, both stacks, and the id allocator exactly as they were.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{debug, trace};

use crate::format::{to_external, to_internal, ConvertError, PlainSession};
use crate::model::{
    normalize_tally, CalendarItem, CalendarItemId, CalendarMonthEntry, Caller, Committee,
    CommitteeId, CommitteeKind, Honorific, Id, IdAllocator, Month, Note, NoteBody, NoteId,
    NoteKind, PastActionItem, PastActionItemId, Person, PersonId, Session, StoredPerson, Topic,
    TopicId,
};

pub mod integrity;

pub use integrity::{first_reference, is_referenced, ReferenceSite};

/// Which entity a validation message talks about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Person,
    Topic,
    Note,
    CalendarItem,
    Committee,
    PastActionItem,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Topic => "topic",
            Self::Note => "note",
            Self::CalendarItem => "calendar item",
            Self::Committee => "committee",
            Self::PastActionItem => "past action item",
        }
    }
}

/// Coarse classification of an [`EditError`], for routing in the UI layer.
///
/// `Validation` and `Integrity` errors are user-facing and retryable; `State`
/// errors are precondition violations that correct UI usage never produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditErrorKind {
    Validation,
    Integrity,
    State,
}

/// A rejected mutation. The store's committed state is never disturbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    MissingField {
        entity: EntityKind,
        field: &'static str,
    },
    DuplicateCalendarMonth {
        month: Month,
    },
    PersonInUse {
        person_id: PersonId,
        site: ReferenceSite,
    },
    PersonNotFound {
        person_id: PersonId,
    },
    TopicNotFound {
        topic_id: TopicId,
    },
    NoteNotFound {
        note_id: NoteId,
    },
    NoteKindMismatch {
        note_id: NoteId,
        expected: NoteKind,
        found: NoteKind,
    },
    CalendarMonthNotFound {
        month: Month,
    },
    CalendarItemNotFound {
        item_id: CalendarItemId,
    },
    CommitteeNotFound {
        committee_id: CommitteeId,
    },
    PastActionItemNotFound {
        item_id: PastActionItemId,
    },
}

impl EditError {
    pub fn kind(&self) -> EditErrorKind {
        match self {
            Self::MissingField { .. } | Self::DuplicateCalendarMonth { .. } => {
                EditErrorKind::Validation
            }
            Self::PersonInUse { .. } => EditErrorKind::Integrity,
            Self::PersonNotFound { .. }
            | Self::TopicNotFound { .. }
            | Self::NoteNotFound { .. }
            | Self::NoteKindMismatch { .. }
            | Self::CalendarMonthNotFound { .. }
            | Self::CalendarItemNotFound { .. }
            | Self::CommitteeNotFound { .. }
            | Self::PastActionItemNotFound { .. } => EditErrorKind::State,
        }
    }
}

impl fmt::Display for EditError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { entity, field } => {
                write!(f, "missing required {field} for {}", entity.as_str())
            }
            Self::DuplicateCalendarMonth { month } => {
                write!(f, "calendar month {month} is already present")
            }
            Self::PersonInUse { person_id, site } => write!(
                f,
                "person {person_id} is referenced in {} and cannot be removed",
                site.as_str()
            ),
            Self::PersonNotFound { person_id } => {
                write!(f, "person {person_id} is not on any roster")
            }
            Self::TopicNotFound { topic_id } => write!(f, "topic {topic_id} not found"),
            Self::NoteNotFound { note_id } => write!(f, "note {note_id} not found"),
            Self::NoteKindMismatch {
                note_id,
                expected,
                found,
            } => write!(
                f,
                "note {note_id} kind mismatch (expected {expected:?}, found {found:?})"
            ),
            Self::CalendarMonthNotFound { month } => {
                write!(f, "calendar month {month} not found")
            }
            Self::CalendarItemNotFound { item_id } => {
                write!(f, "calendar item {item_id} not found")
            }
            Self::CommitteeNotFound { committee_id } => {
                write!(f, "committee {committee_id} not found")
            }
            Self::PastActionItemNotFound { item_id } => {
                write!(f, "past action item {item_id} not found")
            }
        }
    }
}

impl std::error::Error for EditError {}

/// Input for [`DocumentStore::add_topic`]. Duration may stay unset while the
/// form is open; the store requires it at commit time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicDraft {
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: Option<u32>,
    pub leader: Option<PersonId>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TopicPatch {
    pub title: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonPatch {
    pub title: Option<Honorific>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataPatch {
    pub organization: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub location: Option<String>,
    pub start_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitteeDraft {
    pub name: String,
    pub kind: CommitteeKind,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitteePatch {
    pub name: Option<String>,
    pub kind: Option<CommitteeKind>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarItemDraft {
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarItemPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastActionItemDraft {
    pub text: String,
    pub assignee: PersonId,
    pub due_date: DateTime<Utc>,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PastActionItemPatch {
    pub text: Option<String>,
    pub assignee: Option<PersonId>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SubscriptionIdTag {}
pub type SubscriptionId = Id<SubscriptionIdTag>;

type Subscriber = Box<dyn FnMut(&Session)>;

/// Holds one live session plus its edit history.
///
/// Construct one store per running editor or test and pass it down
/// explicitly. All mutations are synchronous and atomic: they either commit
/// (snapshot pushed, redo stack cleared, subscribers notified) or leave every
/// piece of state untouched. Callbacks receive `&Session` while mutations
/// take `&mut self`, so a subscriber cannot re-enter the store during its own
/// notification; sharing a store through `RefCell` turns an attempted
/// re-entry into an immediate borrow failure instead of silent corruption.
pub struct DocumentStore {
    session: Session,
    allocator: IdAllocator,
    undo_stack: Vec<Session>,
    redo_stack: Vec<Session>,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("session", &self.session)
            .field("allocator", &self.allocator)
            .field("undo_depth", &self.undo_stack.len())
            .field("redo_depth", &self.redo_stack.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl DocumentStore {
    /// A store over a blank session: empty rosters and lists, blank metadata.
    pub fn new() -> Self {
        Self::with_session(Session::new(), IdAllocator::new())
    }

    /// A store over an imported session, adopting the allocator state that
    /// issued the session's ids (see [`to_internal`]).
    pub fn with_session(session: Session, allocator: IdAllocator) -> Self {
        Self {
            session,
            allocator,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn allocator(&self) -> &IdAllocator {
        &self.allocator
    }

    /// Replaces the whole document. Resets the allocator and clears both
    /// history stacks; on conversion failure nothing is installed.
    pub fn load_session(&mut self, plain: &PlainSession) -> Result<(), ConvertError> {
        let (session, allocator) = to_internal(plain)?;
        debug!(
            "loading session ({} topics, {} roster entries)",
            session.topics().len(),
            session.metadata().members_present().len()
                + session.metadata().members_absent().len()
                + session.metadata().administration_present().len()
        );
        self.session = session;
        self.allocator = allocator;
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.notify();
        Ok(())
    }

    /// Projects the current session to plain form. Pure read.
    pub fn export(&self) -> PlainSession {
        to_external(&self.session)
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Steps back one committed edit. Returns `false` (and stays silent) when
    /// the history is empty.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.undo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.session, previous);
        self.redo_stack.push(current);
        debug!("undo (undo depth {})", self.undo_stack.len());
        self.notify();
        true
    }

    /// Re-applies the most recently undone edit. Returns `false` when there
    /// is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let current = std::mem::replace(&mut self.session, next);
        self.undo_stack.push(current);
        debug!("redo (redo depth {})", self.redo_stack.len());
        self.notify();
        true
    }

    /// Registers a listener invoked with the new session after every
    /// committed change, including undo/redo and `load_session`, and never
    /// after a rejected mutation.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&Session) + 'static) -> SubscriptionId {
        let subscription_id = SubscriptionId::new(self.next_subscription);
        self.next_subscription = self.next_subscription.saturating_add(1);
        self.subscribers.push((subscription_id, Box::new(subscriber)));
        subscription_id
    }

    pub fn unsubscribe(&mut self, subscription_id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(id, _)| *id != subscription_id);
        self.subscribers.len() != before
    }

    /// Installs `next` as the live session: snapshot the old one, invalidate
    /// the redo branch, notify.
    fn commit(&mut self, next: Session) {
        let previous = std::mem::replace(&mut self.session, next);
        self.undo_stack.push(previous);
        self.redo_stack.clear();
        trace!("commit (undo depth {})", self.undo_stack.len());
        self.notify();
    }

    fn notify(&mut self) {
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&self.session);
        }
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

// Mutation operations, split out so this module stays focused on the store
// state machine and commit protocol.
include!("ops_impl.rs");
