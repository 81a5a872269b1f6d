use crate::app::CropDeckApp;
use crate::panels::dialogs;

pub fn show(ctx: &egui::Context, app: &mut CropDeckApp) {
    let open_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
    let quit_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);
    let confirm_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Enter);
    let cancel_shortcut = egui::KeyboardShortcut::new(egui::Modifiers::NONE, egui::Key::Escape);

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("File", |ui| {
                if ui.add(egui::Button::new("Open Image...").shortcut_text(ctx.format_shortcut(&open_shortcut))).clicked() {
                    ui.close();
                    dialogs::open_image(ctx, app);
                }

                ui.separator();

                if ui.button("Import Config...").clicked() {
                    ui.close();
                    dialogs::import_config(ctx, app);
                }

                if ui.button("Export Config...").clicked() {
                    ui.close();
                    dialogs::export_config(ctx, app);
                }

                ui.separator();

                if ui.add(egui::Button::new("Quit").shortcut_text(ctx.format_shortcut(&quit_shortcut))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button("Crop", |ui| {
                let active = app.host.is_active();
                if ui.add_enabled(active, egui::Button::new("Confirm").shortcut_text(ctx.format_shortcut(&confirm_shortcut))).clicked() {
                    ui.close();
                    app.confirm();
                }
                if ui.add_enabled(active, egui::Button::new("Cancel").shortcut_text(ctx.format_shortcut(&cancel_shortcut))).clicked() {
                    ui.close();
                    app.cancel();
                }
            });

            ui.menu_button("Help", |ui| {
                if ui.button("About").clicked() {
                    ui.close();
                    app.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&open_shortcut)) {
            dialogs::open_image(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&quit_shortcut)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
        if app.host.is_active() {
            if ctx.input_mut(|i| i.consume_shortcut(&confirm_shortcut)) {
                app.confirm();
            }
            if ctx.input_mut(|i| i.consume_shortcut(&cancel_shortcut)) {
                app.cancel();
            }
        }
    });
}
