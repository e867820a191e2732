// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core document model for one meeting's minutes.
//!
//! Sessions contain attendance rosters, timed topics with notes, committees,
//! a month-scoped calendar, and carried-over action items. Every nested
//! entity carries a durable integer id issued by [`IdAllocator`].

pub mod calendar;
pub mod committee;
pub mod ids;
pub mod note;
pub mod past_action;
pub mod person;
pub mod session;
pub mod topic;

pub use calendar::{CalendarItem, CalendarMonthEntry, Month};
pub use committee::{Committee, CommitteeKind};
pub use ids::{
    CalendarItemId, CommitteeId, Id, IdAllocator, NoteId, PastActionItemId, PersonId, TopicId,
};
pub use note::{
    normalize_tally, MotionOutcome, Note, NoteBody, NoteBodyKindMismatch, NoteKind, VoteTally,
};
pub use past_action::PastActionItem;
pub use person::{Honorific, Person, StoredPerson};
pub use session::{Caller, Session, SessionMetadata};
pub use topic::Topic;
