//! Source budgets shared by the workspace's `tests/hygiene.rs` files.
//!
//! Each crate scans its own `src/` and checks a list of [`Budget`]s. A budget
//! counts lines matching a [`Pattern`] in production files (test siblings
//! named `*_test.rs` and comment lines are skipped) and fails with the
//! offending `path:line` list when the count goes over.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What a budget counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    /// A line containing this text.
    Literal(&'static str),
    /// A slice or array index `name[expr]` that panics when out of range.
    DirectIndex,
}

impl Pattern {
    #[must_use]
    pub fn matches(self, line: &str) -> bool {
        match self {
            Self::Literal(text) => line.contains(text),
            Self::DirectIndex => has_direct_index(line),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::DirectIndex => f.write_str("direct [..] indexing"),
        }
    }
}

/// A pattern and the number of production lines allowed to match it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    pub pattern: Pattern,
    pub max: usize,
}

impl Budget {
    #[must_use]
    pub const fn new(pattern: Pattern, max: usize) -> Self {
        Self { pattern, max }
    }

    /// The same pattern with a different allowance.
    #[must_use]
    pub const fn allow(self, max: usize) -> Self {
        Self { max, ..self }
    }
}

// Panics: these crash the process.
pub const UNWRAP: Budget = Budget::new(Pattern::Literal(".unwrap()"), 0);
pub const EXPECT: Budget = Budget::new(Pattern::Literal(".expect("), 0);
pub const PANIC: Budget = Budget::new(Pattern::Literal("panic!("), 0);
pub const UNREACHABLE: Budget = Budget::new(Pattern::Literal("unreachable!("), 0);
pub const TODO: Budget = Budget::new(Pattern::Literal("todo!("), 0);
pub const UNIMPLEMENTED: Budget = Budget::new(Pattern::Literal("unimplemented!("), 0);
pub const DIRECT_INDEX: Budget = Budget::new(Pattern::DirectIndex, 0);

// Silent loss: discards errors without inspecting.
pub const SILENT_DISCARD: Budget = Budget::new(Pattern::Literal("let _ ="), 0);
pub const DOT_OK: Budget = Budget::new(Pattern::Literal(".ok()"), 0);

// Output that bypasses tracing or the session writer.
pub const PRINTLN: Budget = Budget::new(Pattern::Literal("println!("), 0);
pub const EPRINTLN: Budget = Budget::new(Pattern::Literal("eprintln!("), 0);
pub const DBG: Budget = Budget::new(Pattern::Literal("dbg!("), 0);
pub const PROCESS_EXIT: Budget = Budget::new(Pattern::Literal("process::exit("), 0);

// Style / structure.
pub const ALLOW_DEAD_CODE: Budget = Budget::new(Pattern::Literal("#[allow(dead_code)]"), 0);

/// Every budget at zero. Crates override individual entries with [`Budget::allow`].
pub const DEFAULT: &[Budget] = &[
    UNWRAP,
    EXPECT,
    PANIC,
    UNREACHABLE,
    TODO,
    UNIMPLEMENTED,
    DIRECT_INDEX,
    SILENT_DISCARD,
    DOT_OK,
    PRINTLN,
    EPRINTLN,
    DBG,
    PROCESS_EXIT,
    ALLOW_DEAD_CODE,
];

/// One matching line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    pub path: String,
    pub line: usize,
    pub text: String,
}

impl fmt::Display for Hit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  {}:{}: {}", self.path, self.line, self.text.trim())
    }
}

struct SourceFile {
    path: String,
    content: String,
}

/// Production sources of one crate.
pub struct Sources {
    files: Vec<SourceFile>,
}

impl Sources {
    /// Collect `.rs` files under `root`, skipping `*_test.rs` siblings.
    ///
    /// # Errors
    ///
    /// Fails if `root` or any file under it cannot be read. A missing `src/`
    /// should fail the budget test rather than pass it with nothing scanned.
    pub fn scan(root: impl AsRef<Path>) -> io::Result<Self> {
        let mut paths = Vec::new();
        collect_rs_files(root.as_ref(), &mut paths)?;
        paths.sort();
        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let content = fs::read_to_string(&path)?;
            files.push(SourceFile { path: path.to_string_lossy().into_owned(), content });
        }
        Ok(Self { files })
    }

    /// Build from in-memory `(path, content)` pairs.
    #[must_use]
    pub fn from_files<P: Into<String>, C: Into<String>>(files: impl IntoIterator<Item = (P, C)>) -> Self {
        let files = files
            .into_iter()
            .map(|(path, content)| SourceFile { path: path.into(), content: content.into() })
            .filter(|file| !file.path.ends_with("_test.rs"))
            .collect();
        Self { files }
    }

    /// Number of files scanned.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Every non-comment line matching `pattern`, in path then line order.
    #[must_use]
    pub fn hits(&self, pattern: Pattern) -> Vec<Hit> {
        let mut hits = Vec::new();
        for file in &self.files {
            for (n, text) in file.content.lines().enumerate() {
                if text.trim_start().starts_with("//") || !pattern.matches(text) {
                    continue;
                }
                hits.push(Hit { path: file.path.clone(), line: n + 1, text: text.to_owned() });
            }
        }
        hits
    }

    /// Check one budget.
    ///
    /// # Errors
    ///
    /// Returns a message listing every hit when the budget is exceeded.
    pub fn check(&self, budget: Budget) -> Result<(), String> {
        let hits = self.hits(budget.pattern);
        if hits.len() <= budget.max {
            return Ok(());
        }
        let listing = hits.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n");
        Err(format!(
            "{} budget exceeded: found {}, max {}.\n{listing}",
            budget.pattern,
            hits.len(),
            budget.max
        ))
    }

    /// Check every budget, collecting all failures into one message.
    ///
    /// # Errors
    ///
    /// Returns the joined messages of every exceeded budget.
    pub fn check_all(&self, budgets: &[Budget]) -> Result<(), String> {
        let failures: Vec<String> = budgets.iter().filter_map(|b| self.check(*b).err()).collect();
        if failures.is_empty() { Ok(()) } else { Err(failures.join("\n\n")) }
    }
}

/// `budgets` with each entry of `overrides` replacing the default of the same pattern.
#[must_use]
pub fn with_overrides(budgets: &[Budget], overrides: &[Budget]) -> Vec<Budget> {
    budgets
        .iter()
        .map(|b| overrides.iter().find(|o| o.pattern == b.pattern).copied().unwrap_or(*b))
        .collect()
}

fn collect_rs_files(dir: &Path, out: &mut Vec<PathBuf>) -> io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_rs_files(&path, out)?;
        } else if path.extension().is_some_and(|e| e == "rs")
            && !path.to_string_lossy().ends_with("_test.rs")
        {
            out.push(path);
        }
    }
    Ok(())
}

/// Whether `line` indexes with `[` straight after an identifier or a call.
///
/// Attributes (`#[`), macros (`vec![`), types (`&[T]`, `<[u8]>`) and slice
/// patterns are preceded by something else and do not count. String
/// literals are skipped.
fn has_direct_index(line: &str) -> bool {
    let mut prev = ' ';
    let mut in_str = false;
    let mut escaped = false;
    for c in line.chars() {
        if in_str {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_str = false;
            }
            prev = c;
            continue;
        }
        match c {
            '"' => in_str = true,
            '[' if prev.is_alphanumeric() || prev == '_' || prev == ')' => return true,
            _ => {}
        }
        prev = c;
    }
    false
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;
