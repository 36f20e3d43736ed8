//! src/noyau/historique.rs
//!
//! Historique borné des évaluations réussies (plus récent en tête).
//!
//! Contrats :
//! - Au plus `CAPACITE_HISTORIQUE` entrées ; la plus ancienne sort en premier.
//! - Jamais d’entrée vide, jamais d’entrée « expression == résultat ».
//! - Pas de suppression individuelle : seulement `vider`.
//! - Vit le temps du processus (rien n’est persisté).

use super::jetons::{texte_touches, Touche};

/// Taille maximale de l’historique.
pub const CAPACITE_HISTORIQUE: usize = 20;

/// Paire (expression d’origine, résultat), immuable une fois créée.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntreeHistorique {
    expression: Vec<Touche>,
    resultat: String,
}

impl EntreeHistorique {
    pub fn expression(&self) -> &[Touche] {
        &self.expression
    }

    /// Expression en texte canonique.
    pub fn expression_texte(&self) -> String {
        texte_touches(&self.expression)
    }

    pub fn resultat(&self) -> &str {
        &self.resultat
    }
}

#[derive(Clone, Debug)]
pub struct Historique {
    entrees: Vec<EntreeHistorique>,
    capacite: usize,
}

impl Default for Historique {
    fn default() -> Self {
        Self::avec_capacite(CAPACITE_HISTORIQUE)
    }
}

impl Historique {
    fn avec_capacite(capacite: usize) -> Self {
        Self {
            entrees: Vec::with_capacity(capacite),
            capacite,
        }
    }

    /// Enregistre une évaluation réussie. Rend `false` si l’entrée est filtrée.
    pub fn ajouter(&mut self, expression: &[Touche], resultat: &str) -> bool {
        let texte = texte_touches(expression);
        if texte.is_empty() || resultat.is_empty() || texte == resultat {
            return false;
        }

        self.entrees.insert(
            0,
            EntreeHistorique {
                expression: expression.to_vec(),
                resultat: resultat.to_string(),
            },
        );
        self.entrees.truncate(self.capacite);
        true
    }

    pub fn vider(&mut self) {
        self.entrees.clear();
    }

    /// Vue en lecture seule, plus récente en tête.
    pub fn entrees(&self) -> &[EntreeHistorique] {
        &self.entrees
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
