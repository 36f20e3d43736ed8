// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Tok (déjà normalisée) en RPN (postfix)
// - Puis évaluer la RPN sur une pile de flottants
//
// Règles:
// - Func(f) : opérateur préfixe, toujours suivi de « ( » ; elle sort après
//   la parenthèse fermante.
// - Signes unaires : '-' ou '+' quand on attend une valeur => Tok::Neg / Tok::Pos,
//   priorité entre * / et ^ (2^-1 = 0.5, 2*-3 = -6, -2*3^2 = -18).
// - Un signe unaire ne peut pas être la base d’une puissance : -2^2, -(2)^2
//   et 2^-3^2 sont refusés (écrire (-2)^2 ou -(2^2)).
// - Aucune grammaire préalable : toute suite mal formée (opérandes juxtaposés,
//   parenthèses déséquilibrées, opérateur en suspens) est refusée ici.

use super::jetons::{Fonction, Tok};

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Neg | Tok::Pos => 3,
        Tok::Caret => 4,
        Tok::Func(_) => 5,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Caret)
}

/// Convertit une suite de lexèmes en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, LPar, Num(3), Plus, Num(4), RPar]
///   rpn:    [Num(2), Num(3), Num(4), Plus, Star]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, String> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    // true tant qu’on attend une valeur (début, après un opérateur, après « ( »).
    let mut attend_valeur = true;

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => {
                if !attend_valeur {
                    return Err("opérandes juxtaposés".into());
                }
                out.push(tok);
                attend_valeur = false;
            }

            Tok::Func(_) | Tok::LPar => {
                if !attend_valeur {
                    return Err("opérande suivi d’une parenthèse ou d’une fonction".into());
                }
                // préfixe : ne dépile rien
                ops.push(tok);
            }

            Tok::RPar => {
                if attend_valeur {
                    return Err("parenthèse vide ou opérateur en suspens".into());
                }

                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err("parenthèse fermante sans ouvrante".into());
                }

                // si une fonction est au sommet, c’était la sienne : on la sort
                if let Some(f @ Tok::Func(_)) = ops.last().cloned() {
                    ops.pop();
                    out.push(f);
                }
            }

            Tok::Plus | Tok::Minus if attend_valeur => {
                ops.push(if matches!(tok, Tok::Minus) {
                    Tok::Neg
                } else {
                    Tok::Pos
                });
            }

            Tok::Caret if matches!(ops.last(), Some(Tok::Neg | Tok::Pos)) => {
                return Err("signe unaire devant une puissance (parenthéser)".into());
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                if attend_valeur {
                    return Err("opérateur sans opérande à gauche".into());
                }

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                attend_valeur = true;
            }

            Tok::Neg | Tok::Pos => return Err("signe unaire inattendu avant RPN".into()),
        }
    }

    if attend_valeur {
        return Err(if tokens.is_empty() {
            "expression vide".into()
        } else {
            "expression incomplète".into()
        });
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN sur une pile de flottants.
///
/// Le résultat peut être non fini (division par zéro, log(0)…) : c’est à
/// l’appelant de le refuser.
pub fn evaluer_rpn(rpn: &[Tok]) -> Result<f64, String> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Tok::Num(v) => st.push(*v),

            Tok::Neg => {
                let x = st.pop().ok_or("expression invalide")?;
                st.push(-x);
            }

            Tok::Pos => {
                if st.is_empty() {
                    return Err("expression invalide".into());
                }
            }

            Tok::Func(f) => {
                let x = st.pop().ok_or("fonction sans argument")?;
                st.push(appliquer(*f, x));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Caret => {
                let b = st.pop().ok_or("expression invalide")?;
                let a = st.pop().ok_or("expression invalide")?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    _ => a.powf(b),
                };
                st.push(v);
            }

            Tok::LPar | Tok::RPar => return Err("parenthèse inattendue en RPN".into()),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err("expression invalide".into()),
    }
}

/// Fonctions unaires. Trigonométrie en degrés.
pub fn appliquer(f: Fonction, x: f64) -> f64 {
    match f {
        Fonction::Sin => en_radians(x).sin(),
        Fonction::Cos => en_radians(x).cos(),
        Fonction::Tan => en_radians(x).tan(),
        Fonction::Log => x.log10(),
        Fonction::Ln => x.ln(),
        Fonction::Sqrt => x.sqrt(),
    }
}

fn en_radians(degres: f64) -> f64 {
    degres * std::f64::consts::PI / 180.0
}
