//! src/noyau/tampon.rs
//!
//! Tampon d’expression : la suite de touches en cours de saisie.
//!
//! Contrats :
//! - Seul propriétaire de l’expression ; toute mutation passe par ici.
//! - Vide = état « zéro » (affiché `0` par le rendu).
//! - Une touche fonction (« sin( », « sqrt( »…) est une seule unité :
//!   `delete_last` la retire d’un bloc.

use super::jetons::{texte_touches, Touche};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Tampon {
    touches: Vec<Touche>,
}

impl Tampon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute une touche en fin d’expression (réussit toujours).
    pub fn append(&mut self, touche: Touche) {
        self.touches.push(touche);
    }

    /// Retire la dernière unité ; sans effet sur un tampon vide.
    pub fn delete_last(&mut self) {
        self.touches.pop();
    }

    pub fn clear(&mut self) {
        self.touches.clear();
    }

    /// Touche « ( ) » à double usage.
    ///
    /// Ferme seulement s’il reste une parenthèse ouverte ET que l’expression
    /// se termine par un chiffre, un point ou « ) » ; sinon ouvre.
    /// Rend la touche effectivement ajoutée.
    pub fn insert_bracket(&mut self) -> Touche {
        let touche = if self.parentheses_ouvertes() > 0 && self.termine_un_nombre() {
            Touche::ParFermante
        } else {
            Touche::ParOuvrante
        };
        self.append(touche);
        touche
    }

    /// Remplace tout le contenu (résultat chaîné, marqueur d’erreur, rappel).
    pub fn remplacer(&mut self, touches: Vec<Touche>) {
        self.touches = touches;
    }

    /// Nombre de « ( » non refermées (celles des touches fonction comprises).
    /// Négatif si l’expression ferme plus qu’elle n’ouvre.
    pub fn parentheses_ouvertes(&self) -> isize {
        self.touches.iter().fold(0isize, |n, t| {
            if t.ouvre_parenthese() {
                n + 1
            } else if *t == Touche::ParFermante {
                n - 1
            } else {
                n
            }
        })
    }

    fn termine_un_nombre(&self) -> bool {
        matches!(
            self.touches.last(),
            Some(Touche::Chiffre(_) | Touche::Point | Touche::ParFermante)
        )
    }

    pub fn touches(&self) -> &[Touche] {
        &self.touches
    }

    pub fn est_vide(&self) -> bool {
        self.touches.is_empty()
    }

    /// Forme canonique ASCII (« 2*pi », « sin(30) »).
    pub fn texte(&self) -> String {
        texte_touches(&self.touches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::{glyphes_touches, lire_touches, Fonction};

    fn tampon(s: &str) -> Tampon {
        let mut t = Tampon::new();
        for touche in lire_touches(s).unwrap() {
            t.append(touche);
        }
        t
    }

    #[test]
    fn append_concatene() {
        let t = tampon("12+3");
        assert_eq!(t.texte(), "12+3");
        assert_eq!(t.touches().len(), 4);
    }

    #[test]
    fn delete_last_retire_une_fonction_entiere() {
        for f in ["sin(", "cos(", "tan(", "log(", "sqrt(", "ln("] {
            let mut t = tampon(&format!("2+{f}"));
            t.delete_last();
            assert_eq!(t.texte(), "2+", "fonction {f}");
        }
    }

    #[test]
    fn delete_last_retire_un_caractere() {
        let mut t = tampon("12×π");
        t.delete_last();
        assert_eq!(glyphes_touches(t.touches()), "12×");
        t.delete_last();
        assert_eq!(glyphes_touches(t.touches()), "12");
        t.delete_last();
        assert_eq!(glyphes_touches(t.touches()), "1");
    }

    #[test]
    fn delete_last_sur_vide_sans_effet() {
        let mut t = Tampon::new();
        t.delete_last();
        assert!(t.est_vide());
    }

    #[test]
    fn delete_last_apres_une_parenthese_de_fonction_fermee() {
        // « sin(30) » : la « ) » part seule, puis les chiffres, puis « sin( »
        let mut t = tampon("sin(30)");
        t.delete_last();
        assert_eq!(t.texte(), "sin(30");
        t.delete_last();
        t.delete_last();
        assert_eq!(t.touches(), &[Touche::Fonction(Fonction::Sin)]);
        t.delete_last();
        assert!(t.est_vide());
    }

    #[test]
    fn clear_vide_tout() {
        let mut t = tampon("sin(30)+2");
        t.clear();
        assert!(t.est_vide());
        assert_eq!(t.texte(), "");
    }

    #[test]
    fn insert_bracket_ouvre_sur_vide() {
        let mut t = Tampon::new();
        assert_eq!(t.insert_bracket(), Touche::ParOuvrante);
        assert_eq!(t.texte(), "(");
    }

    #[test]
    fn insert_bracket_ferme_apres_un_nombre() {
        let mut t = tampon("(3+4");
        assert_eq!(t.insert_bracket(), Touche::ParFermante);
        assert_eq!(t.texte(), "(3+4)");
    }

    #[test]
    fn insert_bracket_ouvre_apres_un_operateur() {
        let mut t = tampon("(3+");
        assert_eq!(t.insert_bracket(), Touche::ParOuvrante);
        assert_eq!(t.texte(), "(3+(");
    }

    #[test]
    fn insert_bracket_ouvre_sans_parenthese_en_attente() {
        // « 2 » : rien à fermer -> ouvre (la multiplication implicite fera 2×( )
        let mut t = tampon("2");
        assert_eq!(t.insert_bracket(), Touche::ParOuvrante);
    }

    #[test]
    fn insert_bracket_compte_les_fonctions() {
        let mut t = tampon("sin(30");
        assert_eq!(t.insert_bracket(), Touche::ParFermante);
        assert_eq!(t.texte(), "sin(30)");
        assert_eq!(t.insert_bracket(), Touche::ParOuvrante);
    }

    #[test]
    fn insert_bracket_ferme_apres_un_point() {
        let mut t = tampon("(5.");
        assert_eq!(t.insert_bracket(), Touche::ParFermante);
    }

    #[test]
    fn insert_bracket_ouvre_apres_une_constante() {
        // π n’est pas un chiffre : la règle ouvre
        let mut t = tampon("(2π");
        assert_eq!(t.insert_bracket(), Touche::ParOuvrante);
    }
}
