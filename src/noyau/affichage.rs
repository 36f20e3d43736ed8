// src/noyau/affichage.rs
//
// Rendu à l’écran : glyphes + chiffres selon la locale.
// Le texte stocké (tampon, historique) reste toujours en chiffres latins.

use super::jetons::{glyphes_touches, Touche};

const CHIFFRES_DEVANAGARI: [char; 10] = ['०', '१', '२', '३', '४', '५', '६', '७', '८', '९'];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Latin,
    Devanagari,
}

impl Locale {
    pub fn basculer(self) -> Locale {
        match self {
            Locale::Latin => Locale::Devanagari,
            Locale::Devanagari => Locale::Latin,
        }
    }

    /// Transforme les chiffres d’un texte pour cette locale (le reste est intact).
    pub fn transformer(self, s: &str) -> String {
        match self {
            Locale::Latin => s.to_string(),
            Locale::Devanagari => vers_devanagari(s),
        }
    }
}

/// 0-9 -> ०-९, caractère par caractère.
pub fn vers_devanagari(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => CHIFFRES_DEVANAGARI[d as usize],
            None => c,
        })
        .collect()
}

/// ०-९ -> 0-9 (inverse de `vers_devanagari`).
pub fn vers_latin(s: &str) -> String {
    s.chars()
        .map(|c| {
            CHIFFRES_DEVANAGARI
                .iter()
                .position(|&g| g == c)
                .and_then(|d| char::from_digit(d as u32, 10))
                .unwrap_or(c)
        })
        .collect()
}

/// Texte prêt pour l’écran : vide -> « 0 », puis chiffres de la locale.
pub fn rendre(texte: &str, locale: Locale) -> String {
    if texte.is_empty() {
        return locale.transformer("0");
    }
    locale.transformer(texte)
}

/// Expression (touches) prête pour l’écran.
pub fn rendre_touches(touches: &[Touche], locale: Locale) -> String {
    rendre(&glyphes_touches(touches), locale)
}
