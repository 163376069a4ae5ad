use converter::color::{hex_to_rgb, is_valid_color, normalize_color, rgb_to_hex};
use converter::utils::naming::tailwind_color_name;
use converter::utils::path::{get_path, set_path};
use proptest::prelude::*;
use serde_json::{Map, Value};

#[cfg(test)]
mod color_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_normalize_is_idempotent_for_six_digit_colors(hex in "[0-9a-fA-F]{6}") {
            let color = format!("#{hex}");
            let once = normalize_color(&color);

            // Property: normalizing twice changes nothing
            prop_assert_eq!(normalize_color(&once), once.clone());
            prop_assert_eq!(once, color);
        }

        #[test]
        fn test_normalize_strips_alpha(rgb in "[0-9a-fA-F]{6}", alpha in "[0-9a-fA-F]{2}") {
            let normalized = normalize_color(&format!("#{rgb}{alpha}"));

            prop_assert_eq!(&normalized, &format!("#{rgb}"));
            prop_assert!(is_valid_color(&normalized));
        }

        #[test]
        fn test_bare_hex_gains_prefix(hex in "[0-9a-fA-F]{6}") {
            let normalized = normalize_color(&hex);
            prop_assert_eq!(&normalized, &format!("#{hex}"));
            prop_assert!(is_valid_color(&normalized));
        }

        #[test]
        fn test_validity_requires_hash_prefix(hex in "[0-9a-fA-F]{3}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8}") {
            let prefixed = format!("#{hex}");
            prop_assert!(!is_valid_color(&hex));
            prop_assert!(is_valid_color(&prefixed));
        }

        #[test]
        fn test_validity_rejects_wrong_lengths(len in 0usize..12) {
            prop_assume!(len != 3 && len != 6 && len != 8);
            let color = format!("#{}", "a".repeat(len));
            prop_assert!(!is_valid_color(&color));
        }

        #[test]
        fn test_validity_rejects_non_hex(prefix in "[0-9a-f]{5}", bad in "[g-zG-Z_ -]") {
            let color = format!("#{prefix}{bad}");
            prop_assert!(!is_valid_color(&color));
        }

        #[test]
        fn test_rgb_hex_round_trip(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let hex = rgb_to_hex(r, g, b);
            prop_assert!(is_valid_color(&hex));
            prop_assert_eq!(hex_to_rgb(&hex), Some((r, g, b)));
        }
    }
}

#[cfg(test)]
mod path_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_set_then_get_round_trip(
            segments in prop::collection::vec("[a-zA-Z][a-zA-Z0-9_-]{0,8}", 1..6),
            value in "#[0-9a-f]{6}"
        ) {
            let path = segments.join(".");
            let mut root = Map::new();
            set_path(&mut root, &path, Value::String(value.clone()));

            prop_assert_eq!(get_path(&root, &path), Some(&Value::String(value)));
        }

        #[test]
        fn test_set_path_keeps_sibling_values(
            first in "[a-z]{1,6}",
            second in "[a-z]{1,6}"
        ) {
            prop_assume!(first != second);
            let mut root = Map::new();
            set_path(
                &mut root,
                &format!("colors.{first}"),
                Value::from("#111111"),
            );
            set_path(
                &mut root,
                &format!("colors.{second}"),
                Value::from("#222222"),
            );

            let first_path = format!("colors.{first}");
            let second_path = format!("colors.{second}");
            prop_assert_eq!(get_path(&root, &first_path), Some(&Value::from("#111111")));
            prop_assert_eq!(get_path(&root, &second_path), Some(&Value::from("#222222")));
        }
    }
}

#[cfg(test)]
mod naming_property_tests {
    use super::*;

    proptest! {
        #[test]
        fn test_generated_names_are_flat_and_lowercase(key in "[a-zA-Z][a-zA-Z0-9.]{0,30}") {
            let name = tailwind_color_name(&key);

            prop_assert!(!name.contains('.'));
            prop_assert!(!name.starts_with('-'));
            prop_assert!(!name.chars().any(|c| c.is_ascii_uppercase()));
        }
    }
}
