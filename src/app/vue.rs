// src/app/vue.rs
//
// Vue (UI egui), natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Barre d’outils : historique, langue des chiffres, pavé scientifique, thème
// - Écran : expression (ou marqueur d’erreur) alignée à droite
// - Pavé : 4 colonnes ; en mode scientifique, deux rangées de fonctions en plus
// - Tactile : gros boutons, largeur calculée sur la place disponible
//
// Note :
// - Mode immédiat : l’écran relit `calc.affichage()` à chaque frame,
//   aucune synchronisation manuelle.

use eframe::egui;

use super::clavier::Action;
use super::etat::{AppCalc, Theme};
use crate::noyau::{Fonction, Locale, Touche};

/// Espace entre deux boutons.
const ECART: f32 = 6.0;

/// Hauteur d’un bouton du pavé.
const HAUTEUR_TOUCHE: f32 = 48.0;

/// Fonctions du pavé scientifique (dans l’ordre d’affichage).
const FONCTIONS: [Fonction; 5] = [
    Fonction::Sin,
    Fonction::Cos,
    Fonction::Tan,
    Fonction::Log,
    Fonction::Ln,
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(ECART, ECART);

        self.ui_barre(ui);
        ui.add_space(8.0);

        self.ui_ecran(ui);
        ui.add_space(8.0);

        if self.historique_ouvert {
            self.ui_historique(ui);
        } else {
            if self.mode_scientifique {
                self.ui_pave_scientifique(ui);
                ui.add_space(ECART);
            }
            self.ui_pave(ui);
        }
    }

    fn ui_barre(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let hist = ui
                .selectable_label(self.historique_ouvert, "🕘")
                .on_hover_text("History");
            if hist.clicked() {
                self.basculer_historique();
            }

            // le bouton annonce la langue vers laquelle on bascule
            let langue = match self.calc.locale() {
                Locale::Latin => "अ",
                Locale::Devanagari => "EN",
            };
            if ui.button(langue).on_hover_text("Digits").clicked() {
                self.calc.basculer_locale();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let icone_theme = match self.theme {
                    Theme::Sombre => "☀",
                    Theme::Clair => "🌙",
                };
                if ui.button(icone_theme).on_hover_text("Theme").clicked() {
                    self.basculer_theme();
                }

                let sci = ui
                    .selectable_label(self.mode_scientifique, "f(x)")
                    .on_hover_text("Scientific");
                if sci.clicked() {
                    self.basculer_scientifique();
                }
            });
        });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        let affichage = self.calc.affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new(&affichage.expression).size(32.0))
                            .wrap(),
                    );
                });
            });
    }

    /// Pavé de base, 4 colonnes.
    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let largeur = largeur_touche(ui, 4);

        ui.horizontal(|ui| {
            self.bouton(ui, "C", Action::ToutEffacer, largeur);
            self.bouton(ui, "( )", Action::Parenthese, largeur);
            self.bouton(ui, "⌫", Action::Effacer, largeur);
            self.bouton_touche(ui, Touche::Divise, largeur);
        });

        for (chiffres, operateur) in [
            ([7, 8, 9], Touche::Fois),
            ([4, 5, 6], Touche::Moins),
            ([1, 2, 3], Touche::Plus),
        ] {
            ui.horizontal(|ui| {
                for d in chiffres {
                    self.bouton_chiffre(ui, d, largeur);
                }
                self.bouton_touche(ui, operateur, largeur);
            });
        }

        ui.horizontal(|ui| {
            self.bouton_chiffre(ui, 0, largeur * 2.0 + ECART);
            self.bouton_touche(ui, Touche::Point, largeur);
            self.bouton(ui, "=", Action::Calculer, largeur);
        });
    }

    /// Rangées scientifiques, 5 colonnes.
    fn ui_pave_scientifique(&mut self, ui: &mut egui::Ui) {
        let largeur = largeur_touche(ui, 5);

        ui.horizontal(|ui| {
            for f in FONCTIONS {
                self.bouton(ui, f.touche(), Action::Touche(Touche::Fonction(f)), largeur);
            }
        });

        ui.horizontal(|ui| {
            for t in [
                Touche::Racine,
                Touche::Pi,
                Touche::E,
                Touche::Puissance,
                Touche::Pourcent,
            ] {
                self.bouton_touche(ui, t, largeur);
            }
        });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.strong("History");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let vider = ui.add_enabled(
                    !self.calc.historique().is_empty(),
                    egui::Button::new("Clear"),
                );
                if vider.clicked() {
                    self.calc.vider_historique();
                }
            });
        });
        ui.separator();

        if self.calc.historique().is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.weak(egui::RichText::new("No history yet").italics());
            });
            return;
        }

        // rendu avant la boucle : un clic mute l’historique
        let lignes: Vec<(String, String)> = self
            .calc
            .historique()
            .iter()
            .map(|e| self.calc.rendre_entree(e))
            .collect();

        let mut choisie = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for (i, (expression, resultat)) in lignes.iter().enumerate() {
                    let resp = ui
                        .with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                            ui.weak(format!("{expression} ="));
                            ui.label(egui::RichText::new(resultat).size(20.0));
                        })
                        .response
                        .interact(egui::Sense::click());
                    if resp.clicked() {
                        choisie = Some(i);
                    }
                    ui.separator();
                }
            });

        if let Some(i) = choisie {
            self.rappeler(i);
        }
    }

    /* ------------------------ Boutons ------------------------ */

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, action: Action, largeur: f32) {
        let resp = ui.add_sized(
            [largeur, HAUTEUR_TOUCHE],
            egui::Button::new(egui::RichText::new(label).size(20.0)),
        );
        if resp.clicked() {
            self.appliquer(action);
        }
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, touche: Touche, largeur: f32) {
        self.bouton(ui, touche.glyphe(), Action::Touche(touche), largeur);
    }

    /// Le libellé suit la locale ; la touche ajoutée reste le chiffre latin.
    fn bouton_chiffre(&mut self, ui: &mut egui::Ui, d: u8, largeur: f32) {
        let Some(touche) = Touche::chiffre(d) else {
            return;
        };
        let label = self.calc.locale().transformer(touche.texte());
        self.bouton(ui, &label, Action::Touche(touche), largeur);
    }
}

fn largeur_touche(ui: &egui::Ui, colonnes: usize) -> f32 {
    let n = colonnes as f32;
    ((ui.available_width() - ECART * (n - 1.0)) / n).max(32.0)
}
