use wincc_model::PointCategory;

/// Classify a free-text point type.
///
/// Case-insensitive containment, checked motor, valve, analog in that order.
pub fn classify_point(point_type: &str) -> PointCategory {
    let point_type = point_type.to_lowercase();
    if point_type.contains("motor") {
        PointCategory::Motor
    } else if point_type.contains("valve") {
        PointCategory::Valve
    } else if point_type.contains("analog") {
        PointCategory::Analog
    } else {
        PointCategory::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn classifies_known_types() {
        assert_eq!(classify_point("Unimotor"), PointCategory::Motor);
        assert_eq!(classify_point("VALVE_2POS"), PointCategory::Valve);
        assert_eq!(classify_point("AnalogInput"), PointCategory::Analog);
        assert_eq!(classify_point("Digital"), PointCategory::Unknown);
        assert_eq!(classify_point(""), PointCategory::Unknown);
    }

    #[test]
    fn motor_wins_over_valve() {
        assert_eq!(classify_point("valve motor"), PointCategory::Motor);
        assert_eq!(classify_point("analog valve"), PointCategory::Valve);
    }

    proptest! {
        #[test]
        fn motor_substring_always_classifies_motor(prefix in "[a-zA-Z ]{0,8}", suffix in "[a-zA-Z ]{0,8}") {
            let point_type = format!("{prefix}MoToR{suffix}");
            prop_assert_eq!(classify_point(&point_type), PointCategory::Motor);
        }

        #[test]
        fn classification_ignores_case(point_type in "[a-zA-Z]{0,16}") {
            prop_assert_eq!(
                classify_point(&point_type.to_uppercase()),
                classify_point(&point_type.to_lowercase())
            );
        }
    }
}
