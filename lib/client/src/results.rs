use crate::TransportError;
use psm_model::ResultSet;
use sparesults::{QueryResultsFormat, QueryResultsParser, ReaderQueryResultsParserOutput};

/// Parses a `application/sparql-results+json` document into its solutions.
pub fn parse_json_results(body: &[u8]) -> Result<ResultSet, TransportError> {
    let parser = QueryResultsParser::from_format(QueryResultsFormat::Json);
    match parser.for_reader(body)? {
        ReaderQueryResultsParserOutput::Solutions(solutions) => {
            let variables = solutions.variables().to_vec();
            let rows = solutions.collect::<Result<Vec<_>, _>>()?;
            Ok(ResultSet::new(variables, rows))
        }
        ReaderQueryResultsParserOutput::Boolean(_) => Err(TransportError::UnexpectedBoolean),
    }
}
