// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Gavel-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Gavel and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::model::{CommitteeKind, Honorific, Month, MotionOutcome};

/// One meeting document in plain form: ids stripped, person references
/// expanded to value copies, instants as RFC 3339 strings.
///
/// The plain form is self-contained and id-independent, so files diff
/// cleanly and survive re-import unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlainSession {
    pub metadata: PlainSessionMetadata,
    #[serde(default)]
    pub calendar: Vec<PlainCalendarMonth>,
    #[serde(default)]
    pub topics: Vec<PlainTopic>,
    #[serde(default)]
    pub committees: Vec<PlainCommittee>,
    #[serde(default)]
    pub past_action_items: Vec<PlainPastActionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlainSessionMetadata {
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub location: String,
    pub start_time: DateTime<Utc>,
    #[serde(default)]
    pub members_present: Vec<PlainPerson>,
    #[serde(default)]
    pub members_absent: Vec<PlainPerson>,
    #[serde(default)]
    pub administration_present: Vec<PlainPerson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caller: Option<PlainCaller>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub committee_doc_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlainPerson {
    pub title: HonorificJson,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlainCaller {
    pub person: PlainPerson,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlainTopic {
    pub title: String,
    pub start_time: DateTime<Utc>,
    pub duration_minutes: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leader: Option<PlainPerson>,
    #[serde(default)]
    pub notes: Vec<PlainNote>,
}

/// Notes on the wire are tagged unions on a `type` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PlainNote {
    #[serde(rename_all = "camelCase")]
    Text {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        speaker: Option<PlainPerson>,
        #[serde(default)]
        text: String,
    },
    #[serde(rename_all = "camelCase")]
    ActionItem {
        assignee: PlainPerson,
        text: String,
        due_date: DateTime<Utc>,
    },
    #[serde(rename_all = "camelCase")]
    Motion {
        mover: PlainPerson,
        seconder: PlainPerson,
        text: String,
        outcome: MotionOutcomeJson,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tally: Option<PlainVoteTally>,
    },
    #[serde(rename_all = "camelCase")]
    Link { text: String, url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlainVoteTally {
    pub in_favor: u32,
    pub opposed: u32,
    pub abstained: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlainCalendarMonth {
    pub month: MonthJson,
    #[serde(default)]
    pub items: Vec<PlainCalendarItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlainCalendarItem {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlainCommittee {
    pub name: String,
    pub kind: CommitteeKindJson,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlainPastActionItem {
    pub text: String,
    pub assignee: PlainPerson,
    pub due_date: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
}

/// Honorifics serialize as their display strings ("Mr.", "Miss", ...) since
/// those are user-visible data, not internal tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum HonorificJson {
    #[serde(rename = "Mr.")]
    Mr,
    #[serde(rename = "Mrs.")]
    Mrs,
    #[serde(rename = "Ms.")]
    Ms,
    Miss,
    #[serde(rename = "Dr.")]
    Dr,
    #[serde(rename = "Prof.")]
    Prof,
}

impl From<Honorific> for HonorificJson {
    fn from(title: Honorific) -> Self {
        match title {
            Honorific::Mr => Self::Mr,
            Honorific::Mrs => Self::Mrs,
            Honorific::Ms => Self::Ms,
            Honorific::Miss => Self::Miss,
            Honorific::Dr => Self::Dr,
            Honorific::Prof => Self::Prof,
        }
    }
}

impl From<HonorificJson> for Honorific {
    fn from(title: HonorificJson) -> Self {
        match title {
            HonorificJson::Mr => Self::Mr,
            HonorificJson::Mrs => Self::Mrs,
            HonorificJson::Ms => Self::Ms,
            HonorificJson::Miss => Self::Miss,
            HonorificJson::Dr => Self::Dr,
            HonorificJson::Prof => Self::Prof,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MotionOutcomeJson {
    Active,
    Passed,
    Failed,
    Tabled,
    Withdrawn,
}

impl From<MotionOutcome> for MotionOutcomeJson {
    fn from(outcome: MotionOutcome) -> Self {
        match outcome {
            MotionOutcome::Active => Self::Active,
            MotionOutcome::Passed => Self::Passed,
            MotionOutcome::Failed => Self::Failed,
            MotionOutcome::Tabled => Self::Tabled,
            MotionOutcome::Withdrawn => Self::Withdrawn,
        }
    }
}

impl From<MotionOutcomeJson> for MotionOutcome {
    fn from(outcome: MotionOutcomeJson) -> Self {
        match outcome {
            MotionOutcomeJson::Active => Self::Active,
            MotionOutcomeJson::Passed => Self::Passed,
            MotionOutcomeJson::Failed => Self::Failed,
            MotionOutcomeJson::Tabled => Self::Tabled,
            MotionOutcomeJson::Withdrawn => Self::Withdrawn,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MonthJson {
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

impl From<Month> for MonthJson {
    fn from(month: Month) -> Self {
        match month {
            Month::January => Self::January,
            Month::February => Self::February,
            Month::March => Self::March,
            Month::April => Self::April,
            Month::May => Self::May,
            Month::June => Self::June,
            Month::July => Self::July,
            Month::August => Self::August,
            Month::September => Self::September,
            Month::October => Self::October,
            Month::November => Self::November,
            Month::December => Self::December,
        }
    }
}

impl From<MonthJson> for Month {
    fn from(month: MonthJson) -> Self {
        match month {
            MonthJson::January => Self::January,
            MonthJson::February => Self::February,
            MonthJson::March => Self::March,
            MonthJson::April => Self::April,
            MonthJson::May => Self::May,
            MonthJson::June => Self::June,
            MonthJson::July => Self::July,
            MonthJson::August => Self::August,
            MonthJson::September => Self::September,
            MonthJson::October => Self::October,
            MonthJson::November => Self::November,
            MonthJson::December => Self::December,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum CommitteeKindJson {
    Board,
    Headmaster,
}

impl From<CommitteeKind> for CommitteeKindJson {
    fn from(kind: CommitteeKind) -> Self {
        match kind {
            CommitteeKind::Board => Self::Board,
            CommitteeKind::Headmaster => Self::Headmaster,
        }
    }
}

impl From<CommitteeKindJson> for CommitteeKind {
    fn from(kind: CommitteeKindJson) -> Self {
        match kind {
            CommitteeKindJson::Board => Self::Board,
            CommitteeKindJson::Headmaster => Self::Headmaster,
        }
    }
}
