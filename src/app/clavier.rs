// src/app/clavier.rs
//
// Clavier physique -> actions de la calculatrice.
//
// - Les caractères arrivent par Event::Text (disposition clavier respectée,
//   natif + web) ; les touches sans texte (Enter, Backspace, Escape) par Event::Key.
// - Pas de double déclenchement : un caractère n’est jamais lu depuis Event::Key.
// - Tout caractère non prévu est ignoré.

use eframe::egui;

use crate::noyau::Touche;

/// Ce qu’un appui (bouton ou clavier) demande à l’état.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Touche(Touche),
    /// Touche « ( ) » à double usage.
    Parenthese,
    Effacer,
    ToutEffacer,
    Calculer,
}

/// Caractère tapé -> action.
pub fn action_caractere(c: char) -> Option<Action> {
    let touche = match c {
        '0'..='9' => Touche::chiffre(c.to_digit(10)? as u8)?,
        '.' => Touche::Point,
        '+' => Touche::Plus,
        '-' => Touche::Moins,
        '*' => Touche::Fois,
        '/' => Touche::Divise,
        '(' => Touche::ParOuvrante,
        ')' => Touche::ParFermante,
        '=' => return Some(Action::Calculer),
        _ => return None,
    };
    Some(Action::Touche(touche))
}

/// Touche sans texte -> action.
pub fn action_touche(key: egui::Key) -> Option<Action> {
    match key {
        egui::Key::Enter => Some(Action::Calculer),
        egui::Key::Backspace => Some(Action::Effacer),
        egui::Key::Escape => Some(Action::ToutEffacer),
        _ => None,
    }
}

pub fn action_evenement(event: &egui::Event) -> Option<Action> {
    match event {
        egui::Event::Text(texte) => {
            let mut chars = texte.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => action_caractere(c),
                _ => None,
            }
        }
        egui::Event::Key {
            key, pressed: true, ..
        } => action_touche(*key),
        _ => None,
    }
}

/// Actions de tous les événements clavier de la frame, dans l’ordre.
pub fn actions_de_la_frame(ctx: &egui::Context) -> Vec<Action> {
    ctx.input(|i| i.events.iter().filter_map(action_evenement).collect())
}
