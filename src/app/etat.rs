//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la calculatrice du noyau + les préférences d’affichage
//! (thème, pavé scientifique, panneau d’historique).
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Calculatrice`.
//! - Le thème est la seule préférence persistée (clé `calculator-theme`).
//! - Actions déterministes, sans effet de bord caché.

use eframe::egui;
use tracing::info;

use super::clavier::Action;
use crate::noyau::Calculatrice;

/// Clé de stockage du thème (localStorage côté web, fichier côté natif).
pub const CLE_THEME: &str = "calculator-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Sombre,
    Clair,
}

impl Theme {
    /// Valeur stockée.
    pub fn code(self) -> &'static str {
        match self {
            Theme::Sombre => "dark",
            Theme::Clair => "light",
        }
    }

    /// Valeur inconnue => None (l’appelant retombe sur le défaut).
    pub fn depuis_code(code: &str) -> Option<Theme> {
        match code.trim() {
            "dark" => Some(Theme::Sombre),
            "light" => Some(Theme::Clair),
            _ => None,
        }
    }

    pub fn basculer(self) -> Theme {
        match self {
            Theme::Sombre => Theme::Clair,
            Theme::Clair => Theme::Sombre,
        }
    }

    pub fn visuals(self) -> egui::Visuals {
        match self {
            Theme::Sombre => egui::Visuals::dark(),
            Theme::Clair => egui::Visuals::light(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    pub calc: Calculatrice,

    // --- préférences d’affichage ---
    pub theme: Theme,
    pub mode_scientifique: bool,
    pub historique_ouvert: bool,
}

impl AppCalc {
    /// Démarrage : relit le thème s’il a été enregistré, sinon sombre.
    pub fn depuis_stockage(storage: Option<&dyn eframe::Storage>) -> Self {
        let theme = storage
            .and_then(|s| s.get_string(CLE_THEME))
            .and_then(|code| Theme::depuis_code(&code))
            .unwrap_or_default();

        Self {
            theme,
            ..Self::default()
        }
    }

    pub fn enregistrer_theme(&self, storage: &mut dyn eframe::Storage) {
        storage.set_string(CLE_THEME, self.theme.code().to_string());
    }

    /* ------------------------ Bascules ------------------------ */

    pub fn basculer_theme(&mut self) {
        self.theme = self.theme.basculer();
        info!(theme = self.theme.code(), "thème changé");
    }

    pub fn basculer_scientifique(&mut self) {
        self.mode_scientifique = !self.mode_scientifique;
    }

    pub fn basculer_historique(&mut self) {
        self.historique_ouvert = !self.historique_ouvert;
    }

    /// Rappel depuis le panneau : recharge le résultat et referme le panneau.
    pub fn rappeler(&mut self, index: usize) {
        if self.calc.rappeler(index) {
            self.historique_ouvert = false;
        }
    }

    /* ------------------------ Actions (boutons + clavier) ------------------------ */

    pub fn appliquer(&mut self, action: Action) {
        match action {
            Action::Touche(t) => self.calc.append(t),
            Action::Parenthese => self.calc.insert_bracket(),
            Action::Effacer => self.calc.delete_last(),
            Action::ToutEffacer => self.calc.clear(),
            Action::Calculer => {
                self.calc.calculer();
            }
        }
    }
}
