//! File names for derived crops.

use crate::AspectRatio;

/// Build the file name of the crop for `ratio`: `{base}_{ratio}.{extension}`.
///
/// The original name is split on its last `.`. Names without an extension
/// (including dot-files like `.hidden`) get the ratio suffix appended.
pub fn derived_file_name(original: &str, ratio: AspectRatio) -> String {
    match original.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < original.len() => {
            let (base, extension) = (&original[..dot], &original[dot + 1..]);
            format!("{base}_{ratio}.{extension}")
        }
        _ => format!("{}_{ratio}", original.trim_end_matches('.')),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_name() {
        assert_eq!(
            derived_file_name("photo.jpg", AspectRatio::Portrait),
            "photo_portrait.jpg"
        );
    }

    #[test]
    fn test_splits_on_last_dot() {
        assert_eq!(
            derived_file_name("holiday.2024.final.png", AspectRatio::Landscape),
            "holiday.2024.final_landscape.png"
        );
    }

    #[test]
    fn test_no_extension() {
        assert_eq!(
            derived_file_name("scan", AspectRatio::Square),
            "scan_square"
        );
        assert_eq!(
            derived_file_name("scan.", AspectRatio::Square),
            "scan_square"
        );
    }

    #[test]
    fn test_dot_file() {
        assert_eq!(
            derived_file_name(".hidden", AspectRatio::Square),
            ".hidden_square"
        );
    }
}
