// src/noyau/normalisation.rs
//
// Touches -> lexèmes évaluables, en passes successives.
// Chaque passe travaille sur la sortie de la précédente (l’ordre compte) :
//
//   1. chiffre suivi de π, e, √ ou ( : on insère ×
//   2. ) suivie de π, e, √ ou (      : on insère ×
//   3. × ÷ −  -> multiplication, division, soustraction
//   4. π, e   -> constantes flottantes
//   5. √      -> fonction sqrt, appel obligatoire : « √( » seulement
//   6. ^      -> puissance
//   7. %      -> /100 (mise à l’échelle littérale, jamais un modulo)
//
// Les passes 3 à 7 portent sur des touches distinctes : elles sont faites
// ensemble, dans `lexemes`, lors de l’assemblage des nombres.

use super::jetons::{Fonction, Tok, Touche};

/// Touches devant lesquelles une multiplication implicite est insérée.
fn appelle_multiplication(t: Touche) -> bool {
    matches!(
        t,
        Touche::Pi | Touche::E | Touche::Racine | Touche::ParOuvrante
    )
}

/// Passes 1 et 2 : insère `×` après toute touche `apres` suivie d’une touche
/// qui appelle une multiplication.
fn inserer_fois(touches: &[Touche], apres: impl Fn(Touche) -> bool) -> Vec<Touche> {
    let mut out = Vec::with_capacity(touches.len() + 4);
    for (i, &t) in touches.iter().enumerate() {
        out.push(t);
        let suivante = touches.get(i + 1).copied();
        if apres(t) && suivante.is_some_and(appelle_multiplication) {
            out.push(Touche::Fois);
        }
    }
    out
}

/// Passes 1 et 2 seulement (utile pour tracer la forme intermédiaire).
pub fn multiplication_implicite(touches: &[Touche]) -> Vec<Touche> {
    let etape1 = inserer_fois(touches, Touche::est_chiffre);
    inserer_fois(&etape1, |t| t == Touche::ParFermante)
}

/// Pipeline complet : touches brutes -> lexèmes prêts pour le shunting-yard.
pub fn normaliser(touches: &[Touche]) -> Result<Vec<Tok>, String> {
    let etape = multiplication_implicite(touches);
    lexemes(&etape)
}

/// Passes 3 à 7 + assemblage des littéraux numériques (chiffres et point).
fn lexemes(touches: &[Touche]) -> Result<Vec<Tok>, String> {
    let mut out = Vec::with_capacity(touches.len());
    let mut nombre = String::new();

    for (i, &t) in touches.iter().enumerate() {
        if let Touche::Chiffre(_) | Touche::Point = t {
            nombre.push_str(t.texte());
            continue;
        }
        vider_nombre(&mut nombre, &mut out)?;

        match t {
            // 3) opérateurs d’affichage
            Touche::Plus => out.push(Tok::Plus),
            Touche::Moins => out.push(Tok::Minus),
            Touche::Fois => out.push(Tok::Star),
            Touche::Divise => out.push(Tok::Slash),

            // 4) constantes
            Touche::Pi => out.push(Tok::Num(std::f64::consts::PI)),
            Touche::E => out.push(Tok::Num(std::f64::consts::E)),

            // 5) racine
            Touche::Racine => {
                if touches.get(i + 1) != Some(&Touche::ParOuvrante) {
                    return Err("√ sans parenthèse".into());
                }
                out.push(Tok::Func(Fonction::Sqrt));
            }

            // 6) puissance
            Touche::Puissance => out.push(Tok::Caret),

            // 7) pourcentage
            Touche::Pourcent => {
                out.push(Tok::Slash);
                out.push(Tok::Num(100.0));
            }

            Touche::ParOuvrante => out.push(Tok::LPar),
            Touche::ParFermante => out.push(Tok::RPar),
            Touche::Fonction(f) => {
                out.push(Tok::Func(f));
                out.push(Tok::LPar);
            }

            Touche::Erreur => return Err("marqueur d’erreur dans l’expression".into()),

            // assemblés plus haut
            Touche::Chiffre(_) | Touche::Point => {}
        }
    }
    vider_nombre(&mut nombre, &mut out)?;

    Ok(out)
}

/// Termine le littéral en cours : au moins un chiffre, au plus un point
/// (« .5 » et « 5. » sont acceptés, « . » et « 1.2.3 » non).
fn vider_nombre(nombre: &mut String, out: &mut Vec<Tok>) -> Result<(), String> {
    if nombre.is_empty() {
        return Ok(());
    }

    let points = nombre.chars().filter(|&c| c == '.').count();
    if points > 1 || points == nombre.len() {
        return Err(format!("nombre invalide: '{nombre}'"));
    }

    let v: f64 = nombre
        .parse()
        .map_err(|_| format!("nombre invalide: '{nombre}'"))?;
    out.push(Tok::Num(v));
    nombre.clear();
    Ok(())
}
