// SPDX-License-Identifier: PMPL-1.0-or-later

//! Notation exchange between provers
//!
//! - TPTP (as printed by E) to Isabelle/HOL ASCII syntax

pub mod isar;

pub use isar::translate;
