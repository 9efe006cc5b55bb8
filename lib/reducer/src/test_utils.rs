use psm_model::{Literal, NamedNode, QuerySolution, Term, Variable};

/// Builds a solution row. Values starting with `http` become IRIs, everything else a simple
/// literal.
pub fn row(bindings: &[(&str, &str)]) -> QuerySolution {
    let variables = bindings
        .iter()
        .map(|(name, _)| Variable::new_unchecked(*name))
        .collect::<Vec<_>>();
    let values = bindings
        .iter()
        .map(|(_, value)| {
            let term: Term = if value.starts_with("http") {
                NamedNode::new_unchecked(*value).into()
            } else {
                Literal::new_simple_literal(*value).into()
            };
            Some(term)
        })
        .collect::<Vec<_>>();
    QuerySolution::from((variables, values))
}
