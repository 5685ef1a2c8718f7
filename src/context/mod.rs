//! Context queries
//! Answers the host's "does this key binding apply here?" questions

/// ## context/ Invariants
///
/// - An unregistered key answers `Unknown`, never `False`.
/// - Evaluation has no side effects on the surface.
/// - The predicate table is built once and not mutated by queries.
use crate::ex::ExParser;
use crate::host::Surface;
use std::collections::HashMap;

/// Comparison operator of a context query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Equal,
    NotEqual,
    RegexMatch,
    NotRegexMatch,
    RegexContains,
    NotRegexContains,
}

/// Value a query compares against
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Bool(bool),
    Str(String),
    Int(i64),
}

/// A context query as the host sends it
#[derive(Debug, Clone, PartialEq)]
pub struct ContextQuery {
    pub key: String,
    pub operator: Operator,
    pub operand: Operand,
    /// Whether every selection must match; the registered predicates look at
    /// surface-wide state, so this does not change their answer
    pub match_all: bool,
}

impl ContextQuery {
    pub fn new(key: impl Into<String>, operator: Operator, operand: Operand) -> Self {
        Self {
            key: key.into(),
            operator,
            operand,
            match_all: false,
        }
    }
}

/// Three-valued query answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tristate {
    True,
    False,
    /// The key or comparison is not handled here
    Unknown,
}

impl Tristate {
    pub fn is_unknown(self) -> bool {
        self == Tristate::Unknown
    }
}

impl From<bool> for Tristate {
    fn from(value: bool) -> Self {
        if value {
            Tristate::True
        } else {
            Tristate::False
        }
    }
}

impl From<Tristate> for Option<bool> {
    fn from(value: Tristate) -> Self {
        match value {
            Tristate::True => Some(true),
            Tristate::False => Some(false),
            Tristate::Unknown => None,
        }
    }
}

/// What a predicate may look at
pub struct PredicateInput<'a> {
    pub surface: &'a dyn Surface,
    pub parser: &'a ExParser,
}

/// Computes a raw fact about the surface
pub type Predicate = fn(&PredicateInput<'_>) -> bool;

/// Adjust a raw fact by the query's operator and operand
pub fn check(fact: bool, operator: Operator, operand: &Operand) -> Tristate {
    match (operator, operand) {
        (Operator::Equal, Operand::Bool(true)) => fact.into(),
        (Operator::Equal, Operand::Bool(false)) => (!fact).into(),
        (Operator::NotEqual, Operand::Bool(true)) => (!fact).into(),
        (Operator::NotEqual, Operand::Bool(false)) => fact.into(),
        _ => Tristate::Unknown,
    }
}

fn command_mode_aware(input: &PredicateInput<'_>) -> bool {
    input.surface.settings().get_bool("command_mode", false) && input.surface.is_view()
}

fn insert_mode_aware(input: &PredicateInput<'_>) -> bool {
    !input.surface.settings().get_bool("command_mode", false) && input.surface.is_view()
}

fn is_cmdline(input: &PredicateInput<'_>) -> bool {
    input.surface.is_cmdline()
}

/// Caret of the first selection sits at the end of the command line
fn caret_at_end(surface: &dyn Surface) -> bool {
    surface
        .selections()
        .first()
        .is_some_and(|sel| sel.b == surface.size())
}

fn cmdline_at_fs_completion(input: &PredicateInput<'_>) -> bool {
    let surface = input.surface;
    surface.is_cmdline()
        && input.parser.wants_fs_completions(&surface.line_text(0))
        && caret_at_end(surface)
}

fn cmdline_at_setting_completion(input: &PredicateInput<'_>) -> bool {
    let surface = input.surface;
    surface.is_cmdline()
        && input.parser.wants_setting_completions(&surface.line_text(0))
        && caret_at_end(surface)
}

/// Built-in predicates by context key
const PREDICATES: &[(&str, Predicate)] = &[
    ("vi_command_mode_aware", command_mode_aware),
    ("vi_insert_mode_aware", insert_mode_aware),
    ("vi_is_cmdline", is_cmdline),
    ("vi_cmdline_at_fs_completion", cmdline_at_fs_completion),
    ("vi_cmdline_at_setting_completion", cmdline_at_setting_completion),
];

/// Evaluates context queries against a surface
pub struct ContextEvaluator {
    predicates: HashMap<&'static str, Predicate>,
    parser: ExParser,
}

impl ContextEvaluator {
    /// Create an evaluator with the built-in predicates
    pub fn new(parser: ExParser) -> Self {
        Self {
            predicates: PREDICATES.iter().copied().collect(),
            parser,
        }
    }

    /// Add or replace the predicate for `key`
    pub fn register(&mut self, key: &'static str, predicate: Predicate) {
        self.predicates.insert(key, predicate);
    }

    pub fn handles(&self, key: &str) -> bool {
        self.predicates.contains_key(key)
    }

    pub fn evaluate(&self, surface: &dyn Surface, query: &ContextQuery) -> Tristate {
        let Some(predicate) = self.predicates.get(query.key.as_str()) else {
            return Tristate::Unknown;
        };
        let fact = predicate(&PredicateInput {
            surface,
            parser: &self.parser,
        });
        check(fact, query.operator, &query.operand)
    }
}

impl Default for ContextEvaluator {
    fn default() -> Self {
        Self::new(ExParser::new())
    }
}
