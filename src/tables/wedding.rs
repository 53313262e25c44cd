/// Traditional French wedding anniversary names, index 0 = first year.
const WEDDING_ANNIVERSARIES: [&str; 60] = [
    "Noces de Coton",
    "Noces de Cuir",
    "Noces de Froment",
    "Noces de Cire",
    "Noces de Bois",
    "Noces de Chypre",
    "Noces de Laine",
    "Noces de Coquelicot",
    "Noces de Faïence",
    "Noces d'Étain",
    "Noces de Corail",
    "Noces de Soie",
    "Noces de Muguet",
    "Noces de Plomb",
    "Noces de Cristal",
    "Noces de Saphir",
    "Noces de Rose",
    "Noces de Turquoise",
    "Noces de Cretonne",
    "Noces de Porcelaine",
    "Noces d'Opale",
    "Noces de Bronze",
    "Noces de Béryl",
    "Noces de Satin",
    "Noces d'Argent",
    "Noces de Jade",
    "Noces d'Acajou",
    "Noces de Nickel",
    "Noces de Velours",
    "Noces de Perle",
    "Noces de Basane",
    "Noces de Cuivre",
    "Noces de Porphyre",
    "Noces d'Ambre",
    "Noces de Rubis",
    "Noces de Mousseline",
    "Noces de Papier",
    "Noces de Mercure",
    "Noces de Crêpe",
    "Noces d'Émeraude",
    "Noces de Fer",
    "Noces de Nacre",
    "Noces de Flanelle",
    "Noces de Topaze",
    "Noces de Vermeil",
    "Noces de Lavande",
    "Noces de Cachemire",
    "Noces d'Améthyste",
    "Noces de Cèdre",
    "Noces d'Or",
    "Noces de Camélia",
    "Noces de Tourmaline",
    "Noces de Merisier",
    "Noces de Zibeline",
    "Noces d'Orchidée",
    "Noces de Lapis-Lazuli",
    "Noces d'Azurite",
    "Noces d'Érable",
    "Noces de Vison",
    "Noces de Diamant",
];

/// Label for a given number of years of marriage (1..=60).
pub fn wedding_label(years: i32) -> Option<&'static str> {
    if years < 1 {
        return None;
    }
    WEDDING_ANNIVERSARIES.get(years as usize - 1).copied()
}
