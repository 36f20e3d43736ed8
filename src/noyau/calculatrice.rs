//! src/noyau/calculatrice.rs
//!
//! État applicatif du noyau : tampon + historique + locale + dernière issue.
//!
//! Contrats :
//! - Un seul propriétaire pour chaque morceau d’état (pas de globales).
//! - Le protocole après évaluation vit ici, pas dans eval.rs :
//!   succès -> historique puis résultat dans le tampon (calcul chaîné) ;
//!   échec  -> marqueur d’erreur dans le tampon, expression perdue.
//! - La locale ne touche jamais au texte stocké, seulement à `affichage()`.

use tracing::{info, warn};

use super::affichage::{rendre, rendre_touches, Locale};
use super::eval::evaluer_touches;
use super::historique::{EntreeHistorique, Historique};
use super::jetons::{touches_du_nombre, Touche, MARQUEUR_ERREUR};
use super::tampon::Tampon;

/// Issue de la dernière évaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Issue {
    Resultat(String),
    Echec,
}

/// Ce que l’écran doit montrer (déjà rendu pour la locale active).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affichage {
    pub expression: String,
    pub resultat: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    tampon: Tampon,
    historique: Historique,
    locale: Locale,
    derniere_issue: Option<Issue>,
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn append(&mut self, touche: Touche) {
        self.tampon.append(touche);
    }

    pub fn delete_last(&mut self) {
        self.tampon.delete_last();
    }

    pub fn insert_bracket(&mut self) {
        self.tampon.insert_bracket();
    }

    /// Efface l’expression et la dernière issue (pas l’historique).
    pub fn clear(&mut self) {
        self.tampon.clear();
        self.derniere_issue = None;
    }

    /* ------------------------ Évaluation ------------------------ */

    /// Évalue le tampon et applique le protocole succès/échec.
    ///
    /// Tampon vide : le moteur échoue (« expression vide »), comme toute
    /// entrée mal formée.
    pub fn calculer(&mut self) -> &Issue {
        let issue = match evaluer_touches(self.tampon.touches()) {
            Ok(resultat) => {
                if self.historique.ajouter(self.tampon.touches(), &resultat) {
                    info!(
                        expression = %self.tampon.texte(),
                        %resultat,
                        taille = self.historique.len(),
                        "historique enrichi"
                    );
                }
                self.tampon.remplacer(touches_du_nombre(&resultat));
                Issue::Resultat(resultat)
            }
            Err(e) => {
                warn!(expression = %self.tampon.texte(), raison = %e.raison(), "échec d'évaluation");
                self.tampon.remplacer(vec![Touche::Erreur]);
                Issue::Echec
            }
        };

        self.derniere_issue.insert(issue)
    }

    /* ------------------------ Historique ------------------------ */

    pub fn historique(&self) -> &[EntreeHistorique] {
        self.historique.entrees()
    }

    pub fn vider_historique(&mut self) {
        self.historique.vider();
        info!("historique vidé");
    }

    /// Recharge le résultat d’une entrée dans le tampon. Rend `false` si l’index est hors bornes.
    pub fn rappeler(&mut self, index: usize) -> bool {
        let Some(entree) = self.historique.entrees().get(index) else {
            return false;
        };
        self.tampon.remplacer(touches_du_nombre(entree.resultat()));
        true
    }

    /* ------------------------ Locale + rendu ------------------------ */

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = locale;
    }

    pub fn basculer_locale(&mut self) {
        self.locale = self.locale.basculer();
    }

    pub fn tampon(&self) -> &Tampon {
        &self.tampon
    }

    pub fn derniere_issue(&self) -> Option<&Issue> {
        self.derniere_issue.as_ref()
    }

    /// Les deux morceaux de texte à afficher, rendus pour la locale active.
    pub fn affichage(&self) -> Affichage {
        let resultat = self.derniere_issue.as_ref().map(|issue| match issue {
            Issue::Resultat(r) => rendre(r, self.locale),
            Issue::Echec => MARQUEUR_ERREUR.to_string(),
        });

        Affichage {
            expression: rendre_touches(self.tampon.touches(), self.locale),
            resultat,
        }
    }

    /// Une entrée d’historique rendue pour la locale active : (expression, résultat).
    pub fn rendre_entree(&self, entree: &EntreeHistorique) -> (String, String) {
        (
            rendre_touches(entree.expression(), self.locale),
            rendre(entree.resultat(), self.locale),
        )
    }
}
