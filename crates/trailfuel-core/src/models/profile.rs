// ABOUTME: Hiker profile model with body weight and demographic categories
// ABOUTME: Gender, AgeGroup, and MuscleType keys used by the coefficient tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::defaults;
use serde::{Deserialize, Serialize};

/// Gender used to select a coefficient sub-table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male (also the fallback sub-table)
    Male,
    /// Female
    Female,
}

impl Gender {
    /// All genders in display order
    pub const ALL: [Self; 2] = [Self::Male, Self::Female];

    /// Form and table key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    /// Parse an exact form key
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|gender| gender.key() == key)
    }
}

/// Age bracket used for the age correction factor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AgeGroup {
    /// 15 to 29 years
    #[serde(rename = "15-29")]
    From15To29,
    /// 30 to 39 years
    #[serde(rename = "30-39")]
    From30To39,
    /// 40 to 49 years
    #[serde(rename = "40-49")]
    From40To49,
    /// 50 to 59 years
    #[serde(rename = "50-59")]
    From50To59,
    /// 60 years and older
    #[serde(rename = "60-", alias = "60-plus")]
    SixtyPlus,
}

impl AgeGroup {
    /// All age groups in display order
    pub const ALL: [Self; 5] = [
        Self::From15To29,
        Self::From30To39,
        Self::From40To49,
        Self::From50To59,
        Self::SixtyPlus,
    ];

    /// Form and table key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::From15To29 => "15-29",
            Self::From30To39 => "30-39",
            Self::From40To49 => "40-49",
            Self::From50To59 => "50-59",
            Self::SixtyPlus => "60-",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::From15To29 => "15-29",
            Self::From30To39 => "30-39",
            Self::From40To49 => "40-49",
            Self::From50To59 => "50-59",
            Self::SixtyPlus => "60 and over",
        }
    }

    /// Parse a form key, accepting `60-plus` as an alias of `60-`
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        if key == "60-plus" {
            return Some(Self::SixtyPlus);
        }
        Self::ALL.into_iter().find(|group| group.key() == key)
    }
}

/// Build type used for the muscle correction factor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MuscleType {
    /// Athletic build with above-average muscle mass
    Muscular,
    /// Average build
    Normal,
    /// Indoor, less muscular build
    Cultural,
}

impl MuscleType {
    /// All muscle types in display order
    pub const ALL: [Self; 3] = [Self::Muscular, Self::Normal, Self::Cultural];

    /// Form and table key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Muscular => "muscular",
            Self::Normal => "normal",
            Self::Cultural => "cultural",
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Muscular => "Muscular",
            Self::Normal => "Normal",
            Self::Cultural => "Indoor type",
        }
    }

    /// Parse an exact form key
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|muscle| muscle.key() == key)
    }
}

/// Per-user demographic attributes
///
/// Categories are kept as the submitted keys rather than parsed enums so that
/// unrecognized values reach the coefficient lookup and take its fallback path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Body weight (kg)
    #[serde(default = "default_weight")]
    pub weight: f64,
    /// Gender key (`male` / `female`)
    #[serde(default = "default_gender")]
    pub gender: String,
    /// Age group key (`15-29` ... `60-`)
    #[serde(default = "default_age_group")]
    pub age_group: String,
    /// Muscle type key (`muscular` / `normal` / `cultural`)
    #[serde(default = "default_muscle")]
    pub muscle: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            weight: defaults::WEIGHT_KG,
            gender: defaults::GENDER.to_owned(),
            age_group: defaults::AGE_GROUP.to_owned(),
            muscle: defaults::MUSCLE.to_owned(),
        }
    }
}

fn default_weight() -> f64 {
    defaults::WEIGHT_KG
}

fn default_gender() -> String {
    defaults::GENDER.to_owned()
}

fn default_age_group() -> String {
    defaults::AGE_GROUP.to_owned()
}

fn default_muscle() -> String {
    defaults::MUSCLE.to_owned()
}
