use crate::core::escape::algorithm::EscapeAlgorithm;
use crate::core::escape::classic::ClassicEscape;
use crate::core::escape::errors::EscapeAlgorithmError;
use crate::core::escape::kinds::EscapeKinds;
use crate::core::escape::smooth::SmoothEscape;

/// The smooth strategy carries its own fixed bailout, so
/// `escape_radius_squared` only reaches the classic one.
pub fn escape_algorithm_factory(
    kind: EscapeKinds,
    max_iterations: u32,
    escape_radius_squared: f64,
) -> Result<Box<dyn EscapeAlgorithm>, EscapeAlgorithmError> {
    match kind {
        EscapeKinds::Classic => Ok(Box::new(ClassicEscape::new(
            max_iterations,
            escape_radius_squared,
        )?)),
        EscapeKinds::Smooth => Ok(Box::new(SmoothEscape::new(max_iterations)?)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_array_has_default_first() {
        assert_eq!(EscapeKinds::ALL.first(), Some(&EscapeKinds::default()));
    }

    #[test]
    fn factory_round_trip_for_all_kinds() {
        for &kind in EscapeKinds::ALL {
            let algorithm = escape_algorithm_factory(kind, 256, 4.0).unwrap();
            assert_eq!(algorithm.kind(), kind);
        }
    }

    #[test]
    fn factory_rejects_zero_iterations_for_all_kinds() {
        for &kind in EscapeKinds::ALL {
            assert!(escape_algorithm_factory(kind, 0, 4.0).is_err());
        }
    }

    #[test]
    fn display_names_are_unique() {
        let names: Vec<&str> = EscapeKinds::ALL.iter().map(|k| k.display_name()).collect();
        for (i, name) in names.iter().enumerate() {
            for (j, other) in names.iter().enumerate() {
                if i != j {
                    assert_ne!(name, other, "Duplicate display name: {}", name);
                }
            }
        }
    }
}
