//! Name → function lookup, dispatch and help

use crate::{EvalContext, FunctionMeta, FunctionPlugin};
use physcalc_core::{CalcError, Value};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, warn};

/// Maximum names offered in an unknown-function suggestion
const MAX_SUGGESTIONS: usize = 5;

/// Registry of calculator functions, keyed by lowercase name
pub struct PluginRegistry {
    functions: HashMap<String, Arc<dyn FunctionPlugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
        }
    }

    /// Register a function; a later registration under the same name wins
    pub fn with_function<F: FunctionPlugin + 'static>(mut self, f: F) -> Self {
        self.functions.insert(f.name().to_lowercase(), Arc::new(f));
        self
    }

    pub fn get_function(&self, name: &str) -> Option<&dyn FunctionPlugin> {
        self.functions.get(&name.to_lowercase()).map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Sorted, de-duplicated category names
    pub fn categories(&self) -> Vec<&'static str> {
        let cats: BTreeSet<&'static str> = self.functions.values().map(|f| f.meta().category).collect();
        cats.into_iter().collect()
    }

    /// Dispatch by name. Unknown names yield `UNDEFINED_FUNC` with close matches.
    pub fn call_function(&self, name: &str, args: &[Value], ctx: &EvalContext) -> Value {
        let Some(f) = self.get_function(name) else {
            warn!(function = name, "unknown function");
            return Value::Error(self.unknown_function(name));
        };

        debug!(function = name, args = args.len(), "calling function");
        let result = f.call(args, ctx);
        if let Value::Error(e) = &result {
            debug!(function = name, code = %e.code, "function returned error");
        }
        result
    }

    fn unknown_function(&self, name: &str) -> CalcError {
        let similar = self.find_similar_functions(name);
        let err = CalcError::undefined_func(name);
        if similar.is_empty() {
            return err;
        }
        let shown: Vec<&str> = similar.iter().take(MAX_SUGGESTIONS).map(String::as_str).collect();
        err.with_suggestion(format!("Similar: {}. Use help() for full list.", shown.join(", ")))
    }

    /// Registered names ranked by closeness to `name`, best first
    fn find_similar_functions(&self, name: &str) -> Vec<String> {
        let query = name.to_lowercase();
        let mut ranked: Vec<(usize, &String)> = self.functions.keys()
            .map(|candidate| (similarity_score(&query, candidate), candidate))
            .filter(|(score, _)| *score > 0)
            .collect();

        ranked.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        ranked.into_iter().map(|(_, name)| name.clone()).collect()
    }

    pub fn help(&self, name: Option<&str>) -> Value {
        match name {
            Some(n) => match self.get_function(n) {
                Some(f) => f.meta().to_help(),
                None => {
                    let mut err = CalcError::not_found(format!("No function named '{}'", n));
                    if let Some(similar) = self.unknown_function(n).suggestion {
                        err = err.with_suggestion(similar);
                    }
                    Value::Error(err)
                }
            },
            None => self.overview(),
        }
    }

    /// Function names grouped by category
    fn overview(&self) -> Value {
        let mut by_category: BTreeMap<&'static str, Vec<&str>> = BTreeMap::new();
        for (name, f) in &self.functions {
            by_category.entry(f.meta().category).or_default().push(name.as_str());
        }

        let functions = by_category.into_iter().map(|(cat, mut names)| {
            names.sort_unstable();
            (cat, Value::List(names.into_iter().map(Value::from).collect()))
        });

        Value::object([
            ("functions", Value::object(functions)),
            ("usage", Value::from("Call help('function_name') for detailed help.")),
        ])
    }

    /// Summaries sorted by category then name, optionally for one category
    pub fn list_functions(&self, category: Option<&str>) -> Value {
        let mut metas: Vec<FunctionMeta> = self.functions.values()
            .map(|f| f.meta())
            .filter(|m| category.map_or(true, |c| m.category.eq_ignore_ascii_case(c)))
            .collect();
        metas.sort_by(|a, b| (a.category, a.name).cmp(&(b.category, b.name)));

        Value::List(metas.iter().map(FunctionMeta::summary).collect())
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Prefix and substring matches dominate; shared letters and close
/// length break ties.
fn similarity_score(query: &str, candidate: &str) -> usize {
    let mut score = if candidate.starts_with(query) {
        100
    } else if candidate.contains(query) {
        50
    } else if query.contains(candidate) {
        30
    } else {
        0
    };

    let query_chars: HashSet<char> = query.chars().collect();
    let common = candidate.chars().collect::<HashSet<char>>().intersection(&query_chars).count();
    // One or two shared letters is noise
    if common >= 3 {
        score += common * 2;
    }

    let len_diff = query.len().abs_diff(candidate.len());
    if score > 0 && len_diff < 5 {
        score += 5 - len_diff;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_prefers_prefix() {
        assert!(similarity_score("det", "determinant") > similarity_score("det", "mat_add"));
        assert_eq!(similarity_score("xyz", "mean"), 0);
    }

    #[test]
    fn test_typo_still_scores() {
        assert!(similarity_score("determinent", "determinant") > 0);
    }
}
