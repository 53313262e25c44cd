/// Médaille d'honneur du travail thresholds (years worked → medal).
const MEDALS: &[(i32, &str)] = &[
    (20, "Médaille d'Argent"),
    (30, "Médaille de Vermeil"),
    (35, "Médaille d'Or"),
    (40, "Médaille de Grand Or"),
];

/// Reduced thresholds for arduous ("pénible") careers.
const MEDALS_PENIBLE: &[(i32, &str)] = &[
    (15, "Médaille d'Argent"),
    (25, "Médaille de Vermeil"),
    (30, "Médaille d'Or"),
    (35, "Médaille de Grand Or"),
];

/// Highest medal whose threshold does not exceed `years_worked`.
pub fn work_medal(years_worked: i32, penible: bool) -> Option<&'static str> {
    let table = if penible { MEDALS_PENIBLE } else { MEDALS };
    table
        .iter()
        .rev()
        .find(|(threshold, _)| *threshold <= years_worked)
        .map(|(_, name)| *name)
}
