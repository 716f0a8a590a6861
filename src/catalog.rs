//! Game content catalogs
//!
//! This module defines the read-only content the game sessions draw from:
//! prompt lists for truth-or-dare and word-pair topics for undercover.
//! Each catalog is parsed from JSON once, validated, and never mutated
//! afterwards. A failed load is logged and leaves the catalog absent, so
//! callers gate game actions on load completion; no fallback content is
//! ever synthesized.

use garde::Validate;
use once_cell_serde::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::truth_or_dare::Category;

/// Errors that can occur while loading a catalog
#[derive(Error, Debug)]
pub enum Error {
    /// The catalog bytes are not valid JSON for the expected schema
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The catalog parsed but violates a content constraint
    #[error("catalog failed validation: {0}")]
    Invalid(#[from] garde::Report),
    /// The catalog was already loaded; catalogs are fetched exactly once
    #[error("catalog is already loaded")]
    AlreadyLoaded,
}

/// Prompt lists for the truth-or-dare game
///
/// Both lists must be non-empty so that every draw can succeed.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TruthOrDareCatalog {
    /// Dare prompts, drawn from when the player picks the action category
    #[garde(length(min = 1))]
    actions: Vec<String>,
    /// Question prompts, drawn from when the player picks the truth category
    #[garde(length(min = 1))]
    truths: Vec<String>,
}

impl TruthOrDareCatalog {
    /// Returns the prompt list for a category
    pub fn prompts(&self, category: Category) -> &[String] {
        match category {
            Category::Action => &self.actions,
            Category::Truth => &self.truths,
        }
    }

    /// Draws one uniformly random prompt from a category
    ///
    /// Previously drawn prompts are not tracked, so repeats are possible.
    pub fn random_prompt(&self, category: Category, rng: &mut fastrand::Rng) -> &str {
        let prompts = self.prompts(category);
        &prompts[rng.usize(..prompts.len())]
    }
}

/// A word pair for one undercover match
///
/// Citizens receive `word`, undercovers receive the similar-but-different
/// `fake`. The content source is trusted to keep the two distinct; this
/// is not validated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Topic {
    /// The real word given to citizens
    #[garde(length(min = 1))]
    pub word: String,
    /// The decoy word given to undercovers
    #[garde(length(min = 1))]
    pub fake: String,
}

/// The list of word-pair topics for undercover matches
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UndercoverCatalog {
    /// Available word pairs; one is drawn per match
    #[garde(length(min = 1), dive)]
    topics: Vec<Topic>,
}

impl UndercoverCatalog {
    /// Draws one uniformly random topic for a new match
    pub fn random_topic(&self, rng: &mut fastrand::Rng) -> &Topic {
        &self.topics[rng.usize(..self.topics.len())]
    }

    /// Returns all topics in the catalog
    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }
}

/// Load-once holder for both game catalogs
///
/// Each catalog is fetched at most once at session start. A failed load
/// leaves the slot empty forever: there is no automatic retry, and the
/// accessors keep returning `None` until a later explicit load succeeds.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Catalogs {
    truth_or_dare: OnceCell<TruthOrDareCatalog>,
    undercover: OnceCell<UndercoverCatalog>,
}

impl Catalogs {
    /// Creates an empty catalog holder with nothing loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores the truth-or-dare catalog from its JSON bytes
    pub fn load_truth_or_dare(&self, json: &str) -> Result<(), Error> {
        let catalog = Self::parse::<TruthOrDareCatalog>(json, "truth-or-dare")?;
        self.truth_or_dare
            .set(catalog)
            .map_err(|_| Error::AlreadyLoaded)
    }

    /// Parses and stores the undercover catalog from its JSON bytes
    pub fn load_undercover(&self, json: &str) -> Result<(), Error> {
        let catalog = Self::parse::<UndercoverCatalog>(json, "undercover")?;
        self.undercover
            .set(catalog)
            .map_err(|_| Error::AlreadyLoaded)
    }

    /// Returns the truth-or-dare catalog if it has been loaded
    pub fn truth_or_dare(&self) -> Option<&TruthOrDareCatalog> {
        self.truth_or_dare.get()
    }

    /// Returns the undercover catalog if it has been loaded
    pub fn undercover(&self) -> Option<&UndercoverCatalog> {
        self.undercover.get()
    }

    fn parse<T>(json: &str, name: &str) -> Result<T, Error>
    where
        T: for<'de> Deserialize<'de> + Validate<Context = ()>,
    {
        let parsed: T = serde_json::from_str(json).inspect_err(|error| {
            tracing::error!(catalog = name, %error, "failed to parse catalog");
        })?;
        parsed.validate().inspect_err(|error| {
            tracing::error!(catalog = name, %error, "catalog failed validation");
        })?;
        Ok(parsed)
    }
}
