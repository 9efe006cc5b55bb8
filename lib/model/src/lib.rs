mod iri;
mod result_set;
mod solution;
pub mod vocab;

pub use iri::{chebi_id, last_segment, strip_tel_scheme};
pub use result_set::ResultSet;
pub use solution::{term_value, SolutionExt};

// Re-export some oxrdf types.
pub use oxrdf::{
    BlankNode, IriParseError, Literal, LiteralRef, NamedNode, NamedNodeRef, Term, TermRef,
    Variable, VariableNameParseError,
};
pub use sparesults::QuerySolution;
