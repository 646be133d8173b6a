// SPDX-FileCopyrightText: 2025 ECHIDNA Project Team
// SPDX-License-Identifier: PMPL-1.0-or-later

//! Common test utilities for the tstp2isar test suite

#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tstp2isar::{Config, Method};

/// E refutation of "Socrates is mortal", as printed with `--proof-object`
pub const SOCRATES: &str = "\
# SZS status Theorem
# SZS output start CNFRefutation
fof(c_0_0, axiom, (![X]:(human(X)=>mortal(X))), file('socrates.p', all_humans_mortal)).
fof(c_0_1, axiom, (human(socrates)), file('socrates.p', socrates_human)).
fof(c_0_2, conjecture, (mortal(socrates)), file('socrates.p', socrates_mortal)).
fof(c_0_3, negated_conjecture, (~mortal(socrates)), inference(assume_negation,[status(cth)],[c_0_2])).
fof(c_0_4, plain, (![X]:(~human(X)|mortal(X))), inference(fof_nnf,[status(thm)],[c_0_0])).
fof(c_0_5, negated_conjecture, (~mortal(socrates)), inference(fof_simplification,[status(thm)],[c_0_3])).
cnf(c_0_6, plain, (mortal(X1)|~human(X1)), inference(split_conjunct,[status(thm)],[c_0_4])).
cnf(c_0_7, plain, (human(socrates)), inference(split_conjunct,[status(thm)],[c_0_1])).
cnf(c_0_8, negated_conjecture, (~mortal(socrates)), inference(split_conjunct,[status(thm)],[c_0_5])).
cnf(c_0_9, plain, (mortal(socrates)), inference(spm,[status(thm)],[c_0_6, c_0_7])).
cnf(c_0_10, negated_conjecture, ($false), inference(sr,[status(thm)],[c_0_8, c_0_9]), ['proof']).
# SZS output end CNFRefutation
";

/// Refutation of a contradictory axiom set, no conjecture
pub const INCONSISTENT_AXIOMS: &str = "\
fof(c_0_0, axiom, (p<=>~p), file('liar.p', liar)).
cnf(c_0_1, plain, (p|p), inference(split_conjunct,[status(thm)],[c_0_0])).
cnf(c_0_2, plain, (~p|~p), inference(split_conjunct,[status(thm)],[c_0_0])).
cnf(c_0_3, plain, ($false), inference(sr,[status(thm)],[c_0_1, c_0_2]), ['proof']).
";

/// Same clause name defined twice
pub const DUPLICATE_NAME: &str = "\
fof(c_0_3, axiom, (p), file('dup.p', a)).
fof(c_0_3, axiom, (q), file('dup.p', b)).
";

/// Root clause with a role the script cannot express
pub const HYPOTHESIS_ROOT: &str = "\
fof(c_0_0, axiom, (p), file('hyp.p', a)).
fof(c_0_1, hypothesis, (q), file('hyp.p', h)).
";

/// Write `contents` to a temporary proof file
pub fn write_trace(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write trace");
    file.flush().expect("flush trace");
    file
}

/// Default run configuration for `path`
pub fn config_for(path: &Path, method: Method) -> Config {
    Config {
        file: path.to_path_buf(),
        method,
        verbose: false,
        very_verbose: false,
        debug: false,
        label: None,
    }
}

/// Script lines without their indentation
pub fn trimmed_lines(script: &str) -> Vec<&str> {
    script.lines().map(str::trim).collect()
}
