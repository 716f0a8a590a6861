//! # Parlor Game Library
//!
//! This library provides the core game logic for a small collection of
//! in-person party games. It covers the player roster (backed by an
//! injectable key-value store), read-only game content catalogs, a
//! truth-or-dare prompt session, and the undercover social-deduction
//! match engine with its role assignment and vote-elimination rules.
//!
//! The crate contains no I/O of its own: embedders supply the storage
//! backend, the catalog bytes, and a seedable random source, and drive
//! the state machines through explicit method calls.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

pub mod catalog;
pub mod constants;
pub mod roster;
pub mod truth_or_dare;
pub mod undercover;
