// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::CalendarItemId;

/// Calendar months; each appears at most once in a session's calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::January => "January",
            Self::February => "February",
            Self::March => "March",
            Self::April => "April",
            Self::May => "May",
            Self::June => "June",
            Self::July => "July",
            Self::August => "August",
            Self::September => "September",
            Self::October => "October",
            Self::November => "November",
            Self::December => "December",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single tracked entry within one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarItem {
    item_id: CalendarItemId,
    text: String,
    completed: bool,
}

impl CalendarItem {
    pub fn new(item_id: CalendarItemId, text: impl Into<String>, completed: bool) -> Self {
        Self {
            item_id,
            text: text.into(),
            completed,
        }
    }

    pub fn item_id(&self) -> CalendarItemId {
        self.item_id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

/// A month bucket holding its items in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarMonthEntry {
    month: Month,
    items: Vec<CalendarItem>,
}

impl CalendarMonthEntry {
    pub fn new(month: Month) -> Self {
        Self {
            month,
            items: Vec::new(),
        }
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn items(&self) -> &[CalendarItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut Vec<CalendarItem> {
        &mut self.items
    }

    pub fn item(&self, item_id: CalendarItemId) -> Option<&CalendarItem> {
        self.items.iter().find(|item| item.item_id() == item_id)
    }

    pub fn item_mut(&mut self, item_id: CalendarItemId) -> Option<&mut CalendarItem> {
        self.items
            .iter_mut()
            .find(|item| item.item_id() == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::Month;

    #[test]
    fn month_names_are_distinct() {
        for (index, month) in Month::ALL.iter().enumerate() {
            for other in &Month::ALL[index + 1..] {
                assert_ne!(month.as_str(), other.as_str());
            }
        }
    }
}
