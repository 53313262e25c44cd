/// Disjoint, ordered `[min, max]` age ranges.
const AGE_CATEGORIES: &[(i32, i32, &str)] = &[
    (0, 2, "Bébé"),
    (3, 11, "Enfant"),
    (12, 17, "Adolescent"),
    (18, 25, "Jeune adulte"),
    (26, 59, "Adulte"),
    (60, 79, "Senior"),
    (80, 130, "Grand senior"),
];

/// First range containing `years` wins.
pub fn age_category(years: i32) -> Option<&'static str> {
    AGE_CATEGORIES
        .iter()
        .find(|(min, max, _)| (*min..=*max).contains(&years))
        .map(|(_, _, label)| *label)
}
