// src/utils/text.rs

//! Name normalization helpers.

/// Title-case a string.
///
/// A letter is upper-cased when it does not follow another letter and
/// lower-cased otherwise, so word boundaries are any non-letter character:
/// `o'neil` becomes `O'Neil` and `3rd` becomes `3Rd`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_letter = false;

    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            out.push(c);
            prev_is_letter = false;
        }
    }
    out
}

/// Normalize a scraped school name: trim surrounding whitespace and title-case.
pub fn normalize_name(raw: &str) -> String {
    title_case(raw.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("LINCOLN HIGH SCHOOL"), "Lincoln High School");
        assert_eq!(title_case("st. mary's academy"), "St. Mary'S Academy");
        assert_eq!(title_case("o'neil-smith 3rd grade"), "O'Neil-Smith 3Rd Grade");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_normalize_trims() {
        assert_eq!(normalize_name("  \n  MISSION high\t"), "Mission High");
        assert_eq!(normalize_name("   "), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in [
            "  ABRAHAM LINCOLN high  ",
            "university of california-berkeley",
            "mcKinley  elementary",
            "école saint-jean",
        ] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once);
        }
    }
}
