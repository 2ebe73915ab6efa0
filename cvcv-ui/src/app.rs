use eframe::egui::{self, Color32, RichText, Ui};

use cvcv_core::FilterKind;
use cvcv_core::io::write_lines;

use crate::state::{FormState, GRID_COLUMNS, ResultsState, format_grid, group_thousands};
use crate::theme::THEME;
use crate::worker::{GenerationTask, Generated};

/// Desktop front end state (MUST persist between frames in egui).
pub struct CvcvApp {
    form: FormState,
    results: ResultsState,
    task: Option<GenerationTask>,
    status: (String, Color32),
}

impl CvcvApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        THEME.apply(&cc.egui_ctx);
        Self {
            form: FormState::default(),
            results: ResultsState::default(),
            task: None,
            status: ("Ready".to_owned(), THEME.text_muted),
        }
    }

    fn set_status(&mut self, message: impl Into<String>, color: Color32) {
        self.status = (message.into(), color);
    }

    fn running(&self) -> bool {
        self.task.is_some()
    }

    // -----------------------------------------------------------------------
    // Actions
    // -----------------------------------------------------------------------

    /// Starts a background generation unless one is already pending.
    fn generate(&mut self, ctx: &egui::Context) {
        if self.running() {
            return;
        }
        let config = self.form.to_config();
        log::info!("Generating with {config:?}");
        let repaint = ctx.clone();
        self.task = Some(GenerationTask::spawn(config, move || repaint.request_repaint()));
        self.set_status("Generating…", THEME.warn);
    }

    /// Drains the worker channel; called every frame on the UI thread.
    fn poll_task(&mut self) {
        let Some(result) = self.task.as_ref().and_then(GenerationTask::poll) else {
            return;
        };
        self.task = None;
        self.finish_generate(result);
    }

    fn finish_generate(&mut self, result: Generated) {
        match result {
            Ok(names) => {
                let count = group_thousands(names.len());
                self.results.set(names);
                self.set_status(format!("Done: {count} names generated"), THEME.success);
            }
            Err(e) => {
                log::error!("Generation failed: {e}");
                self.set_status(format!("Error: {e}"), THEME.error);
                show_error("Error", &e.to_string());
            }
        }
    }

    /// Exports straight from the current form to a chosen folder.
    fn export(&mut self) {
        let Some(folder) = rfd::FileDialog::new()
            .set_title("Select export folder")
            .pick_folder()
        else {
            return;
        };

        let result = self
            .form
            .to_config()
            .build_engine()
            .and_then(|engine| engine.export_grouped(&folder));

        match result {
            Ok(summary) => {
                let total = group_thousands(summary.total);
                rfd::MessageDialog::new()
                    .set_level(rfd::MessageLevel::Info)
                    .set_title("Export Complete")
                    .set_description(format!(
                        "Exported {total} names to {} file(s)\nin:\n{}",
                        summary.written.len(),
                        folder.display()
                    ))
                    .show();
                self.set_status(format!("Exported {total} names → {}", folder.display()), THEME.success);
            }
            Err(e) => {
                log::error!("Export failed: {e}");
                show_error("Export Error", &e.to_string());
                self.set_status(format!("Export failed: {e}"), THEME.error);
            }
        }
    }

    /// Saves the held results (not the search view) as one name per line.
    fn save_txt(&mut self) {
        if self.results.is_empty() {
            rfd::MessageDialog::new()
                .set_level(rfd::MessageLevel::Warning)
                .set_title("Nothing to Save")
                .set_description("Generate names first.")
                .show();
            return;
        }
        let Some(path) = rfd::FileDialog::new()
            .set_title("Save Results")
            .add_filter("Text File", &["txt"])
            .set_file_name("names.txt")
            .save_file()
        else {
            return;
        };

        match write_lines(&path, self.results.names()) {
            Ok(()) => {
                let count = group_thousands(self.results.names().len());
                self.set_status(format!("Saved {count} names → {}", path.display()), THEME.success);
            }
            Err(e) => {
                log::error!("Save failed: {e}");
                show_error("Save Error", &e.to_string());
                self.set_status(format!("Save failed: {e}"), THEME.error);
            }
        }
    }

    fn clear_results(&mut self) {
        self.results.clear();
        self.set_status("Cleared", THEME.text_muted);
    }

    // -----------------------------------------------------------------------
    // Panels
    // -----------------------------------------------------------------------

    fn header(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new("⬡  CVCV").size(18.0).strong().color(THEME.accent));
            ui.label(RichText::new("Name Generator").size(18.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (message, color) = &self.status;
                ui.label(RichText::new(message).small().color(*color));
                if self.running() {
                    ui.add(egui::Spinner::new());
                }
            });
        });
    }

    fn sidebar(&mut self, ui: &mut Ui, ctx: &egui::Context) {
        egui::ScrollArea::vertical().show(ui, |ui| {
            section(ui, "Letter Sets", |ui| {
                field(ui, "Vowels", &mut self.form.vowels, "default: aeiou");
                field(ui, "Add Vowels", &mut self.form.add_vowels, "e.g. y");
                field(ui, "Consonants", &mut self.form.consonants, "default: all non-vowels");
                field(ui, "Add Consonants", &mut self.form.add_consonants, "e.g. ng");
                ui.checkbox(&mut self.form.include_y, "Include Y as vowel");
            });

            section(ui, "Pattern Filter", |ui| {
                egui::ComboBox::from_id_salt("filter_kind")
                    .selected_text(self.form.filter.label())
                    .show_ui(ui, |ui| {
                        for kind in FilterKind::ALL {
                            ui.selectable_value(&mut self.form.filter, kind, kind.label());
                        }
                    });
            });

            section(ui, "Options", |ui| {
                field(ui, "Suffix", &mut self.form.suffix, "e.g. ly, io, ai");
                field(ui, "Pin First Letter", &mut self.form.first, "single consonant");
                ui.label(
                    RichText::new("Pin restricts output to one starting consonant.")
                        .small()
                        .color(THEME.text_muted),
                );
            });

            section(ui, "Actions", |ui| {
                let width = ui.available_width();
                let label = if self.running() { "Generating…" } else { "▶  Generate" };
                if ui
                    .add_enabled(!self.running(), egui::Button::new(label).min_size([width, 36.0].into()))
                    .clicked()
                {
                    self.generate(ctx);
                }
                if ui.add(egui::Button::new("⬡  Export to Folder").min_size([width, 36.0].into())).clicked() {
                    self.export();
                }
                if ui.add(egui::Button::new("⬇  Save Results as TXT").min_size([width, 36.0].into())).clicked() {
                    self.save_txt();
                }
                if ui
                    .add(egui::Button::new(RichText::new("✕  Clear").color(THEME.error)).min_size([width, 36.0].into()))
                    .clicked()
                {
                    self.clear_results();
                }
            });
        });
    }

    fn results_panel(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.label(RichText::new(self.results.count_label()).strong().color(THEME.accent2));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.results.query)
                        .hint_text("Filter results…")
                        .desired_width(200.0),
                );
                ui.label(RichText::new("Search:").small().color(THEME.text_muted));
            });
        });
        ui.separator();

        let visible = self.results.visible();
        let text = if visible.is_empty() {
            if self.results.is_empty() {
                String::new()
            } else {
                "\n  No names matched the current settings.".to_owned()
            }
        } else {
            format_grid(&visible, GRID_COLUMNS)
        };

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.label(RichText::new(text).monospace());
            });
    }
}

impl eframe::App for CvcvApp {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_task();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            self.header(ui);
        });

        egui::SidePanel::left("settings")
            .default_width(300.0)
            .resizable(true)
            .show(ctx, |ui| {
                self.sidebar(ui, ctx);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.results_panel(ui);
        });
    }
}

// ---------------------------------------------------------------------------
// Widget helpers
// ---------------------------------------------------------------------------

/// Titled group of widgets.
fn section(ui: &mut Ui, title: &str, add_contents: impl FnOnce(&mut Ui)) {
    ui.add_space(6.0);
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(title.to_uppercase()).small().strong().color(THEME.accent));
        ui.separator();
        add_contents(ui);
    });
}

/// Label + single line text input.
fn field(ui: &mut Ui, label: &str, value: &mut String, hint: &str) {
    ui.horizontal(|ui| {
        ui.add_sized([110.0, 20.0], egui::Label::new(RichText::new(label).color(THEME.text_muted)));
        ui.add(egui::TextEdit::singleline(value).hint_text(hint).font(egui::TextStyle::Monospace));
    });
}

fn show_error(title: &str, message: &str) {
    rfd::MessageDialog::new()
        .set_level(rfd::MessageLevel::Error)
        .set_title(title)
        .set_description(message)
        .show();
}
