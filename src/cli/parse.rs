use seedweave_core::Algorithm;

/// Parse a priority strategy name from a flag value
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}
