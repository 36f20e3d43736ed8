//! Noyau : évaluation (pipeline réel)
//!
//! touches -> multiplication implicite -> lexèmes (π, e, √, ^, %) -> RPN -> f64
//!         -> arrondi 10^-9 -> texte canonique
//!
//! Pur et déterministe : ni historique ni tampon ici (voir calculatrice.rs).

use thiserror::Error;
use tracing::debug;

use super::jetons::{format_tokens, lire_touches, texte_touches, Touche};
use super::lecture::{arrondir, DECIMALES};
use super::normalisation::normaliser;
use super::rpn::{evaluer_rpn, to_rpn};

/// Unique échec possible de l’évaluation.
///
/// La raison sert au journal seulement : l’utilisateur ne voit que le marqueur
/// d’erreur, quelle que soit la faute (syntaxe, parenthèses, résultat non fini).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("évaluation impossible : {raison}")]
pub struct EchecEvaluation {
    raison: String,
}

impl EchecEvaluation {
    pub fn raison(&self) -> &str {
        &self.raison
    }
}

impl From<String> for EchecEvaluation {
    fn from(raison: String) -> Self {
        Self { raison }
    }
}

/// API publique : évalue un texte (glyphes « 2π×3 » ou ASCII « 2*pi*3 »).
pub fn evaluate(expr_str: &str) -> Result<String, EchecEvaluation> {
    let touches = lire_touches(expr_str)?;
    evaluer_touches(&touches)
}

/// Évalue une suite de touches et rend le résultat arrondi à 9 décimales.
pub fn evaluer_touches(touches: &[Touche]) -> Result<String, EchecEvaluation> {
    // 1) Normalisation (passes 1 à 7)
    let lexemes = normaliser(touches)?;
    debug!(
        entree = %texte_touches(touches),
        normalisee = %format_tokens(&lexemes),
        "forme normalisée"
    );

    // 2) RPN
    let rpn = to_rpn(&lexemes)?;

    // 3) Valeur
    let valeur = evaluer_rpn(&rpn)?;

    // 4) Arrondi + texte (refuse inf / NaN)
    let resultat = arrondir(valeur, DECIMALES)?;
    debug!(valeur, %resultat, "évaluation réussie");

    Ok(resultat)
}

#[cfg(test)]
mod tests {
    use super::evaluate;

    fn ok(s: &str) -> String {
        evaluate(s).unwrap_or_else(|e| panic!("evaluate({s:?}) erreur: {e}"))
    }

    fn echec(s: &str) {
        if let Ok(v) = evaluate(s) {
            panic!("evaluate({s:?}) aurait dû échouer, a donné {v:?}");
        }
    }

    // --- Scénarios de référence ---

    #[test]
    fn multiplication_implicite_parenthese() {
        assert_eq!(ok("2(3+4)"), "14");
    }

    #[test]
    fn multiplication_implicite_pi() {
        assert_eq!(ok("2π"), "6.283185307");
    }

    #[test]
    fn sinus_en_degres() {
        assert_eq!(ok("sin(30)"), "0.5");
    }

    #[test]
    fn division_par_zero() {
        echec("5/0");
        echec("5÷0");
    }

    #[test]
    fn parenthese_fermante_orpheline() {
        echec("5)+3");
    }

    // --- Opérateurs ---

    #[test]
    fn glyphes_et_ascii() {
        assert_eq!(ok("6×7"), "42");
        assert_eq!(ok("6*7"), "42");
        assert_eq!(ok("9÷4"), "2.25");
        assert_eq!(ok("9−4"), "5");
        assert_eq!(ok("9-4"), "5");
    }

    #[test]
    fn puissance() {
        assert_eq!(ok("2^10"), "1024");
        assert_eq!(ok("2^3^2"), "512");
        assert_eq!(ok("2^-1"), "0.5");
        assert_eq!(ok("4^0.5"), "2");
        assert_eq!(ok("(−2)^2"), "4");
        assert_eq!(ok("−(2^2)"), "-4");
        assert_eq!(ok("−2×3^2"), "-18");
    }

    #[test]
    fn signe_unaire_devant_puissance() {
        echec("-2^2");
        echec("−2^2");
        echec("+2^2");
        echec("−(2)^2");
        echec("2^−3^2");
    }

    #[test]
    fn pourcentage_litteral() {
        assert_eq!(ok("50%"), "0.5");
        // pas de « pourcentage de » : 50 + 10/100
        assert_eq!(ok("50+10%"), "50.1");
        assert_eq!(ok("(20)%"), "0.2");
    }

    #[test]
    fn constantes() {
        assert_eq!(ok("π"), "3.141592654");
        assert_eq!(ok("e"), "2.718281828");
        assert_eq!(ok("2e"), "5.436563657");
        assert_eq!(ok("(1)π"), "3.141592654");
    }

    // --- Fonctions ---

    #[test]
    fn fonctions_unaires() {
        assert_eq!(ok("cos(60)"), "0.5");
        assert_eq!(ok("tan(45)"), "1");
        assert_eq!(ok("cos(90)"), "0");
        assert_eq!(ok("log(1000)"), "3");
        assert_eq!(ok("ln(e)"), "1");
        assert_eq!(ok("sqrt(16)"), "4");
        assert_eq!(ok("√(9)+1"), "4");
        assert_eq!(ok("2√(9)"), "6");
        assert_eq!(ok("(2)√(16)"), "8");
    }

    #[test]
    fn racine_sans_parenthese_refusee() {
        echec("√9");
        echec("2√9");
        echec("√9+1");
        echec("√π");
    }

    #[test]
    fn domaines_invalides() {
        echec("√(−4)");
        echec("log(0)");
        echec("ln(−1)");
    }

    // --- Entrées mal formées ---

    #[test]
    fn entrees_mal_formees() {
        echec("");
        echec("(5");
        echec("5+");
        echec("×5");
        echec("()");
        echec("1.2.3");
        echec("2sin(30)");
        echec("Error");
        echec("Error5");
        echec("5%2");
    }

    #[test]
    fn bruit_flottant_absorbe() {
        assert_eq!(ok("0.1+0.2"), "0.3");
        assert_eq!(ok("1÷3"), "0.333333333");
        assert_eq!(ok("2÷3"), "0.666666667");
        // en f64, 0.1234567895·10^9 vaut pile ,5 : on monte
        assert_eq!(ok("0.1234567895"), "0.12345679");
        assert_eq!(ok("1.2345678905"), "1.234567891");
    }

    #[test]
    fn nombre_seul_idempotent() {
        for s in ["14", "-2.5", "0.333333333", "6.283185307", "0"] {
            assert_eq!(ok(s), s);
        }
    }

    #[test]
    fn echec_porte_une_raison() {
        let e = evaluate("5/0").unwrap_err();
        assert!(e.raison().contains("non fini"));
        assert!(e.to_string().starts_with("évaluation impossible"));
    }
}
