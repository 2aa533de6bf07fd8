//! The word dictionary: builtins and user definitions, plus the
//! dependency bookkeeping that protects referenced words.
//!
//! Names are compared case-insensitively; the stored key is the
//! upper-case form. Every user word carries the set of dictionary names
//! its body mentions, and the dictionary maintains the inverse picture as
//! reference counts: a word with a non-zero count cannot be deleted or
//! redefined.

use std::collections::{HashMap, HashSet};

use crate::interpreter::Interpreter;
use crate::value::{RuntimeError, Value};

pub type PrimitiveFn = fn(&mut Interpreter) -> Result<(), RuntimeError>;

/// Builtins that consume tokens from the execution queue (a name after
/// `DEF`/`DEL`, branch splicing for `IF`) are handled inside the
/// evaluator loop; they still live in the dictionary so that their names
/// are reserved and listed like any other word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Form {
    Def,
    Del,
    If,
}

#[derive(Debug, Clone)]
pub enum BuiltinKind {
    Primitive(PrimitiveFn),
    Form(Form),
}

#[derive(Debug, Clone)]
pub struct UserWord {
    pub body: Vec<Value>,
    pub description: Option<String>,
    pub dependencies: HashSet<String>,
}

#[derive(Debug, Clone)]
pub enum Word {
    Builtin(BuiltinKind),
    User(UserWord),
}

/// Upper-case normalization used for every dictionary key.
pub fn normalize(name: &str) -> String {
    name.to_uppercase()
}

#[derive(Debug, Default)]
pub struct Dictionary {
    words: HashMap<String, Word>,
    ref_counts: HashMap<String, usize>,
}

impl Dictionary {
    pub fn new() -> Self {
        Dictionary::default()
    }

    pub fn lookup(&self, name: &str) -> Option<&Word> {
        self.words.get(&normalize(name))
    }

    pub(crate) fn install_builtin(&mut self, name: &str, kind: BuiltinKind) {
        self.words.insert(normalize(name), Word::Builtin(kind));
    }

    /// How many user words reference `name` in their bodies.
    pub fn ref_count(&self, name: &str) -> usize {
        self.ref_counts.get(&normalize(name)).copied().unwrap_or(0)
    }

    /// Installs or replaces a user word. Fails without mutating anything
    /// when the name belongs to a builtin or to a word referenced by
    /// other user words.
    pub fn define(
        &mut self,
        name: &str,
        body: Vec<Value>,
        description: Option<String>,
    ) -> Result<(), RuntimeError> {
        let key = normalize(name);
        match self.words.get(&key) {
            Some(Word::Builtin(_)) => return Err(RuntimeError::IsBuiltin(key)),
            Some(Word::User(_)) if self.ref_count(&key) > 0 => {
                return Err(RuntimeError::Protected(key))
            }
            _ => {}
        }

        let mut dependencies = HashSet::new();
        collect_dependencies(&self.words, &body, &mut dependencies);
        // A recursive word must stay deletable; only references from
        // other words protect it.
        dependencies.remove(&key);

        let old_deps = match self.words.get(&key) {
            Some(Word::User(old)) => old.dependencies.clone(),
            _ => HashSet::new(),
        };
        for dep in old_deps {
            self.release(&dep);
        }
        for dep in &dependencies {
            *self.ref_counts.entry(dep.clone()).or_insert(0) += 1;
        }

        self.words.insert(
            key,
            Word::User(UserWord {
                body,
                description,
                dependencies,
            }),
        );
        Ok(())
    }

    /// Removes a user word, releasing its dependency references. Builtins
    /// and referenced words are refused, leaving the dictionary unchanged.
    pub fn remove(&mut self, name: &str) -> Result<(), RuntimeError> {
        let key = normalize(name);
        match self.words.get(&key) {
            None => return Err(RuntimeError::UnknownWord(key)),
            Some(Word::Builtin(_)) => return Err(RuntimeError::IsBuiltin(key)),
            Some(Word::User(_)) if self.ref_count(&key) > 0 => {
                return Err(RuntimeError::Protected(key))
            }
            Some(Word::User(_)) => {}
        }
        if let Some(Word::User(word)) = self.words.remove(&key) {
            for dep in &word.dependencies {
                self.release(dep);
            }
        }
        Ok(())
    }

    /// Drops every user word; builtins survive. Used by `reset`.
    pub(crate) fn clear_user(&mut self) {
        self.words.retain(|_, word| matches!(word, Word::Builtin(_)));
        self.ref_counts.clear();
    }

    /// `(name, description, protected)` for every user word, sorted
    /// case-insensitively by name.
    pub fn list_user(&self) -> Vec<(String, Option<String>, bool)> {
        let mut rows: Vec<(String, Option<String>, bool)> = self
            .words
            .iter()
            .filter_map(|(name, word)| match word {
                Word::User(user) => Some((
                    name.clone(),
                    user.description.clone(),
                    self.ref_count(name) > 0,
                )),
                Word::Builtin(_) => None,
            })
            .collect();
        rows.sort_by(|a, b| a.0.to_lowercase().cmp(&b.0.to_lowercase()));
        rows
    }

    /// Every dictionary name, builtins included, sorted case-insensitively.
    pub fn all_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.words.keys().cloned().collect();
        names.sort_by_key(|name| name.to_lowercase());
        names
    }

    fn release(&mut self, dep: &str) {
        if let Some(count) = self.ref_counts.get_mut(dep) {
            *count -= 1;
            if *count == 0 {
                self.ref_counts.remove(dep);
            }
        }
    }
}

// An identifier anywhere in the body counts once if it resolves in the
// dictionary right now; identifiers inside nested vector literals count
// too (they may run when the word runs). Quoted symbols never count.
fn collect_dependencies(
    words: &HashMap<String, Word>,
    body: &[Value],
    out: &mut HashSet<String>,
) {
    for value in body {
        match value {
            Value::Symbol(name) => {
                let key = normalize(name);
                if words.contains_key(&key) {
                    out.insert(key);
                }
            }
            Value::Vector(items) => collect_dependencies(words, items, out),
            _ => {}
        }
    }
}
