//! Label definitions and pending label uses for one source file.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelDef {
    pub name: String,
    pub line: usize,
    /// Word offset of the definition, unless overridden by `SET`.
    pub word_index: i32,
    pub used: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LabelUse {
    pub name: String,
    pub line: usize,
    /// Reserved word whose operand bytes get patched.
    pub word_index: usize,
    /// Resolve as a displacement from the following word.
    pub is_branch: bool,
}

#[derive(Debug, Default)]
pub struct SymbolTable {
    defs: Vec<LabelDef>,
    uses: Vec<LabelUse>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a definition and returns its slot, or `None` if the name is
    /// already defined (the first definition stays).
    pub fn define(&mut self, name: &str, line: usize, word_index: i32) -> Option<usize> {
        if self.lookup(name).is_some() {
            return None;
        }
        self.defs.push(LabelDef {
            name: name.to_string(),
            line,
            word_index,
            used: false,
        });
        Some(self.defs.len() - 1)
    }

    pub fn set_word_index(&mut self, slot: usize, word_index: i32) {
        self.defs[slot].word_index = word_index;
    }

    pub fn record_use(&mut self, name: &str, line: usize, word_index: usize, is_branch: bool) {
        self.uses.push(LabelUse {
            name: name.to_string(),
            line,
            word_index,
            is_branch,
        });
    }

    pub fn lookup(&self, name: &str) -> Option<usize> {
        self.defs.iter().position(|d| d.name == name)
    }

    pub fn defs(&self) -> &[LabelDef] {
        &self.defs
    }

    pub(crate) fn mark_used(&mut self, slot: usize) {
        self.defs[slot].used = true;
    }

    /// Hands pending uses to the resolver, leaving none behind.
    pub(crate) fn take_uses(&mut self) -> Vec<LabelUse> {
        std::mem::take(&mut self.uses)
    }

    pub fn into_defs(self) -> Vec<LabelDef> {
        self.defs
    }
}
