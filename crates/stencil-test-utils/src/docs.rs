//! Document builders and sample content

/// A long multi-sentence body, for checking that large bodies survive
/// splitting byte for byte.
pub const LONG_BODY: &str = "The lighthouse keeper kept a ledger of every ship that passed the point, \
noting its flag, its heading, and the hour it cleared the reef. In winter the entries grew sparse; \
some weeks recorded nothing but the weather, the state of the lamp, and the oil remaining in the cellar. \
Visitors who read the ledger years later were surprised to find that the keeper had also written down \
the names of birds that rested on the gallery rail, the colour of the sea at dawn, and once, without \
explanation, a recipe for bread. Whether these notes were meant for a successor or simply a private habit \
nobody could say, but the habit of careful record-keeping outlived the lighthouse by several decades, \
and the ledger now sits in the harbour museum beside the brass lens it once described.\n";

/// Build a fenced document: `fence`, `meta`, `fence`, then `body`.
///
/// `meta` lines should end with a newline.
pub fn fenced(fence: &str, meta: &str, body: &str) -> String {
    format!("{fence}\n{meta}{fence}\n{body}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced() {
        assert_eq!(fenced("+++", "a = 1\n", "body"), "+++\na = 1\n+++\nbody");
    }
}
