// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{DateTime, Utc};

use super::ids::{PastActionItemId, PersonId};

/// An action item carried over from an earlier meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastActionItem {
    item_id: PastActionItemId,
    text: String,
    assignee: PersonId,
    due_date: DateTime<Utc>,
    completed: bool,
}

impl PastActionItem {
    pub fn new(
        item_id: PastActionItemId,
        text: impl Into<String>,
        assignee: PersonId,
        due_date: DateTime<Utc>,
    ) -> Self {
        Self {
            item_id,
            text: text.into(),
            assignee,
            due_date,
            completed: false,
        }
    }

    pub fn item_id(&self) -> PastActionItemId {
        self.item_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn assignee(&self) -> PersonId {
        self.assignee
    }

    pub fn due_date(&self) -> DateTime<Utc> {
        self.due_date
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_assignee(&mut self, assignee: PersonId) {
        self.assignee = assignee;
    }

    pub fn set_due_date(&mut self, due_date: DateTime<Utc>) {
        self.due_date = due_date;
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}
