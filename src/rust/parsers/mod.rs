// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Parsers for TSTP proof traces

pub mod annotation;
pub mod line;

pub use annotation::{parents, parse_annotation, Annotation};
pub use line::{parse_line, RawClause};
