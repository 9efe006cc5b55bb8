use oxrdf::Variable;
use sparesults::QuerySolution;

/// The solutions of a single `SELECT` query, in the order returned by the endpoint.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ResultSet {
    variables: Vec<Variable>,
    rows: Vec<QuerySolution>,
}

impl ResultSet {
    pub fn new(variables: Vec<Variable>, rows: Vec<QuerySolution>) -> Self {
        Self { variables, rows }
    }

    /// The projected variables, as announced in the result header.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn rows(&self) -> &[QuerySolution] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<QuerySolution> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
