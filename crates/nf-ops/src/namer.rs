//! Unique node-name generation.

use std::collections::HashMap;

/// Generates graph-unique node names, one counter per operation type.
///
/// Explicit state owned by whoever builds the graph, so two namers on
/// two graphs never interfere and a run of builds is deterministic.
#[derive(Debug, Clone, Default)]
pub struct OpNamer {
    counters: HashMap<String, u64>,
}

impl OpNamer {
    /// Create a namer with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Next name for the given operation type: `Add_0`, `Add_1`, ...
    pub fn unique(&mut self, op_type: &str) -> String {
        let counter = self.counters.entry(op_type.to_string()).or_insert(0);
        let name = format!("{}_{}", op_type, *counter);
        *counter += 1;
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn counters_are_per_type() {
        let mut namer = OpNamer::new();
        assert_eq!(namer.unique("Add"), "Add_0");
        assert_eq!(namer.unique("Add"), "Add_1");
        assert_eq!(namer.unique("MatMul"), "MatMul_0");
        assert_eq!(namer.unique("Add"), "Add_2");
    }

    #[test]
    fn separate_namers_are_independent() {
        let mut a = OpNamer::new();
        let mut b = OpNamer::new();
        assert_eq!(a.unique("Log"), "Log_0");
        assert_eq!(b.unique("Log"), "Log_0");
    }

    proptest! {
        #[test]
        fn no_collisions_for_any_request_sequence(
            types in proptest::collection::vec(
                prop_oneof![
                    Just("Add"), Just("MatMul"), Just("Mean"),
                    Just("Equal"), Just("ArgMax"), Just("Cast"),
                    Just("Log"), Just("Const"),
                ],
                0..200,
            )
        ) {
            let mut namer = OpNamer::new();
            let mut seen = HashSet::new();
            for t in types {
                prop_assert!(seen.insert(namer.unique(t)));
            }
        }
    }
}
