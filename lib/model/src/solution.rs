use oxrdf::Term;
use sparesults::QuerySolution;

/// Returns the lexical value of a bound term.
///
/// Named nodes yield their IRI, blank nodes their identifier and literals their lexical form
/// (without datatype or language tag). Any other term kind has no plain value and yields [None].
#[allow(
    unreachable_patterns,
    reason = "Triple terms only exist if the rdf-star feature of oxrdf is enabled"
)]
pub fn term_value(term: &Term) -> Option<&str> {
    match term {
        Term::NamedNode(node) => Some(node.as_str()),
        Term::BlankNode(node) => Some(node.as_str()),
        Term::Literal(literal) => Some(literal.value()),
        _ => None,
    }
}

/// Read access to the bindings of a single solution row.
///
/// Every accessor distinguishes between an unbound variable ([None]) and a bound empty literal
/// (`Some("")`).
pub trait SolutionExt {
    /// Returns the term bound to `variable`.
    fn term(&self, variable: &str) -> Option<&Term>;

    /// Returns the lexical value bound to `variable`.
    fn value(&self, variable: &str) -> Option<&str> {
        self.term(variable).and_then(term_value)
    }

    /// Returns an owned copy of the lexical value bound to `variable`.
    fn owned_value(&self, variable: &str) -> Option<String> {
        self.value(variable).map(ToOwned::to_owned)
    }

    /// Returns the language tag of the literal bound to `variable`, if any.
    fn language(&self, variable: &str) -> Option<&str> {
        match self.term(variable)? {
            Term::Literal(literal) => literal.language(),
            _ => None,
        }
    }

    /// Returns whether every variable in `variables` is bound.
    fn binds_all(&self, variables: &[&str]) -> bool {
        variables.iter().all(|variable| self.value(variable).is_some())
    }
}

impl SolutionExt for QuerySolution {
    fn term(&self, variable: &str) -> Option<&Term> {
        self.get(variable)
    }
}
