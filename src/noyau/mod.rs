//! Noyau de la calculatrice (sans egui)
//!
//! Organisation interne :
//! - jetons.rs        : Touche (saisie), Tok (lexèmes), lecture d’un texte en touches
//! - normalisation.rs : multiplication implicite + π, e, √, %, ^ -> lexèmes
//! - rpn.rs           : shunting-yard + évaluation f64
//! - lecture.rs       : arrondi exact à 9 décimales (BigRational) + texte canonique
//! - eval.rs          : pipeline complet, EchecEvaluation
//! - tampon.rs        : expression en cours de saisie
//! - historique.rs    : 20 dernières évaluations réussies
//! - affichage.rs     : Locale + rendu des chiffres
//! - calculatrice.rs  : orchestration (protocole succès/échec, rappel, rendu)

pub mod affichage;
pub mod calculatrice;
pub mod eval;
pub mod historique;
pub mod jetons;
pub mod lecture;
pub mod normalisation;
pub mod rpn;
pub mod tampon;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use affichage::Locale;
pub use calculatrice::Calculatrice;
pub use jetons::{Fonction, Touche};
