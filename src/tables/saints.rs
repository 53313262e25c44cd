use chrono::{Datelike, NaiveDate};

pub const NO_SAINT: &str = "Aucun saint aujourd'hui";

const JANUARY: [&str; 31] = [
    "Jour de l'An", "Basile", "Geneviève", "Odilon", "Édouard", "Mélaine", "Raymond",
    "Lucien", "Alix", "Guillaume", "Paulin", "Tatiana", "Yvette", "Nina", "Rémi",
    "Marcel", "Roseline", "Prisca", "Marius", "Sébastien", "Agnès", "Vincent",
    "Barnard", "François de Sales", "Conversion de Paul", "Paule", "Angèle",
    "Thomas d'Aquin", "Gildas", "Martine", "Marcelle",
];

const FEBRUARY: [&str; 29] = [
    "Ella", "Présentation du Seigneur", "Blaise", "Véronique", "Agathe", "Gaston",
    "Eugénie", "Jacqueline", "Apolline", "Arnaud", "Notre-Dame de Lourdes", "Félix",
    "Béatrice", "Valentin", "Claude", "Julienne", "Alexis", "Bernadette", "Gabin",
    "Aimée", "Pierre Damien", "Isabelle", "Lazare", "Modeste", "Roméo", "Nestor",
    "Honorine", "Romain", "Auguste",
];

const MARCH: [&str; 31] = [
    "Aubin", "Charles le Bon", "Guénolé", "Casimir", "Olive", "Colette", "Félicité",
    "Jean de Dieu", "Françoise", "Vivien", "Rosine", "Justine", "Rodrigue", "Mathilde",
    "Louise", "Bénédicte", "Patrice", "Cyrille", "Joseph", "Herbert", "Clémence", "Léa",
    "Victorien", "Catherine de Suède", "Annonciation", "Larissa", "Habib", "Gontran",
    "Gwladys", "Amédée", "Benjamin",
];

const APRIL: [&str; 30] = [
    "Hugues", "Sandrine", "Richard", "Isidore", "Irène", "Marcellin",
    "Jean-Baptiste de la Salle", "Julie", "Gautier", "Fulbert", "Stanislas", "Jules",
    "Ida", "Maxime", "Paterne", "Benoît-Joseph", "Anicet", "Parfait", "Emma", "Odette",
    "Anselme", "Alexandre", "Georges", "Fidèle", "Marc", "Alida", "Zita", "Valérie",
    "Catherine de Sienne", "Robert",
];

const MAY: [&str; 31] = [
    "Jérémie", "Boris", "Philippe et Jacques", "Sylvain", "Judith", "Prudence", "Gisèle",
    "Désiré", "Pacôme", "Solange", "Estelle", "Achille", "Rolande", "Matthias", "Denise",
    "Honoré", "Pascal", "Éric", "Yves", "Bernardin", "Constantin", "Émile", "Didier",
    "Donatien", "Sophie", "Bérenger", "Augustin de Cantorbéry", "Germain", "Aymar",
    "Ferdinand", "Visitation de la Sainte Vierge",
];

const JUNE: [&str; 30] = [
    "Justin", "Blandine", "Kévin", "Clotilde", "Igor", "Norbert", "Gilbert", "Médard",
    "Diane", "Landry", "Barnabé", "Guy", "Antoine de Padoue", "Élisée", "Germaine",
    "Jean-François Régis", "Hervé", "Léonce", "Romuald", "Silvère", "Rodolphe", "Alban",
    "Audrey", "Jean-Baptiste", "Prosper", "Anthelme", "Fernand", "Irénée",
    "Pierre et Paul", "Martial",
];

const JULY: [&str; 31] = [
    "Thierry", "Martinien", "Thomas", "Florent", "Antoine", "Mariette", "Raoul",
    "Thibault", "Amandine", "Ulrich", "Benoît", "Olivier", "Henri et Joël", "Camille",
    "Donald", "Notre-Dame du Mont Carmel", "Charlotte", "Frédéric", "Arsène", "Marina",
    "Victor", "Marie-Madeleine", "Brigitte", "Christine", "Jacques", "Anne et Joachim",
    "Nathalie", "Samson", "Marthe", "Juliette", "Ignace de Loyola",
];

const AUGUST: [&str; 31] = [
    "Alphonse", "Julien Eymard", "Lydie", "Jean-Marie Vianney", "Abel", "Transfiguration",
    "Gaétan", "Dominique", "Amour", "Laurent", "Claire", "Clarisse", "Hippolyte",
    "Evrard", "Assomption", "Armel", "Hyacinthe", "Hélène", "Jean Eudes", "Bernard",
    "Christophe", "Fabrice", "Rose de Lima", "Barthélemy", "Louis", "Natacha", "Monique",
    "Augustin", "Sabine", "Fiacre", "Aristide",
];

const SEPTEMBER: [&str; 30] = [
    "Gilles", "Ingrid", "Grégoire", "Rosalie", "Raïssa", "Bertrand", "Reine", "Adrien",
    "Alain", "Inès", "Adelphe", "Apollinaire", "Aimé", "La Croix Glorieuse", "Roland",
    "Édith", "Renaud", "Nadège", "Émilie", "Davy", "Matthieu", "Maurice", "Constant",
    "Thècle", "Hermann", "Côme et Damien", "Vincent de Paul", "Venceslas",
    "Michel, Gabriel et Raphaël", "Jérôme",
];

const OCTOBER: [&str; 31] = [
    "Thérèse de l'Enfant Jésus", "Léger", "Gérard", "François d'Assise", "Fleur",
    "Bruno", "Serge", "Pélagie", "Denis", "Ghislain", "Firmin", "Wilfried", "Géraud",
    "Juste", "Thérèse d'Avila", "Edwige", "Baudouin", "Luc", "René", "Adeline", "Céline",
    "Élodie", "Jean de Capistran", "Florentin", "Crépin", "Dimitri", "Émeline",
    "Simon et Jude", "Narcisse", "Bienvenue", "Quentin",
];

const NOVEMBER: [&str; 30] = [
    "Toussaint", "Défunts", "Hubert", "Charles", "Sylvie", "Bertille", "Carine",
    "Geoffroy", "Théodore", "Léon", "Martin", "Christian", "Brice", "Sidoine", "Albert",
    "Marguerite", "Élisabeth", "Aude", "Tanguy", "Edmond", "Présentation de Marie",
    "Cécile", "Clément", "Flora", "Catherine", "Delphine", "Sévrin",
    "Jacques de la Marche", "Saturnin", "André",
];

const DECEMBER: [&str; 31] = [
    "Florence", "Viviane", "François-Xavier", "Barbara", "Gérald", "Nicolas", "Ambroise",
    "Immaculée Conception", "Pierre Fourier", "Romaric", "Daniel",
    "Jeanne-Françoise de Chantal", "Lucie", "Odile", "Ninon", "Alice", "Gaël", "Gatien",
    "Urbain", "Théophile", "Pierre Canisius", "Françoise-Xavière", "Armand", "Adèle",
    "Noël", "Étienne", "Jean", "Innocents", "David", "Roger", "Sylvestre",
];

const SAINTS_BY_MONTH: [&[&str]; 12] = [
    &JANUARY, &FEBRUARY, &MARCH, &APRIL, &MAY, &JUNE, &JULY, &AUGUST, &SEPTEMBER,
    &OCTOBER, &NOVEMBER, &DECEMBER,
];

/// Day key in `DD:MM` form.
pub fn date_key(date: NaiveDate) -> String {
    format!("{:02}:{:02}", date.day(), date.month())
}

/// Look a saint up by `DD:MM` key.
pub fn saint_by_key(key: &str) -> Option<&'static str> {
    let (day, month) = key.split_once(':')?;
    let day: usize = day.parse().ok()?;
    let month: usize = month.parse().ok()?;
    if day == 0 || month == 0 {
        return None;
    }
    SAINTS_BY_MONTH.get(month - 1)?.get(day - 1).copied()
}

/// Saint celebrated on `date`, or the placeholder when the table has none.
pub fn saint_of_the_day(date: NaiveDate) -> &'static str {
    saint_by_key(&date_key(date)).unwrap_or(NO_SAINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_day_of_a_leap_year() {
        let total: usize = SAINTS_BY_MONTH.iter().map(|m| m.len()).sum();
        assert_eq!(total, 366);

        let mut d = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        while d.year() == 2024 {
            assert_ne!(saint_of_the_day(d), NO_SAINT, "missing saint for {d}");
            d = d.succ_opt().unwrap();
        }
    }

    #[test]
    fn lookup_by_key() {
        assert_eq!(saint_by_key("14:02"), Some("Valentin"));
        assert_eq!(saint_by_key("25:12"), Some("Noël"));
        assert_eq!(saint_by_key("29:02"), Some("Auguste"));
        assert_eq!(saint_by_key("30:02"), None);
        assert_eq!(saint_by_key("00:01"), None);
        assert_eq!(saint_by_key("garbage"), None);
    }
}
