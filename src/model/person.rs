// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::ids::PersonId;

/// Salutation shown before a person's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Honorific {
    Mr,
    Mrs,
    Ms,
    Miss,
    Dr,
    Prof,
}

impl Honorific {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mr => "Mr.",
            Self::Mrs => "Mrs.",
            Self::Ms => "Ms.",
            Self::Miss => "Miss",
            Self::Dr => "Dr.",
            Self::Prof => "Prof.",
        }
    }
}

impl fmt::Display for Honorific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person as plain value data: how they appear in drafts and in the plain
/// document, before an id is assigned.
///
/// Structural equality of this type is what drives deduplication and
/// reference resolution on import; once stored, identity is the id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Person {
    title: Honorific,
    first_name: String,
    last_name: String,
}

impl Person {
    pub fn new(
        title: Honorific,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            title,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn title(&self) -> Honorific {
        self.title
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {} {}", self.title, self.first_name, self.last_name)
    }
}

/// A roster entry: a [`Person`] tagged with its durable id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredPerson {
    person_id: PersonId,
    person: Person,
}

impl StoredPerson {
    pub fn new(person_id: PersonId, person: Person) -> Self {
        Self { person_id, person }
    }

    pub fn person_id(&self) -> PersonId {
        self.person_id
    }

    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Replaces the value data, keeping the id: renames never re-identify.
    pub fn set_person(&mut self, person: Person) {
        self.person = person;
    }
}
