use cropdeck_core::consts::{MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};
use cropdeck_core::preset::{MaskShape, PresetTag};

use crate::app::CropDeckApp;
use crate::panels::{dialogs, enum_combo, section_header};
use crate::states::TargetChoice;

const LEFT_PANEL_WIDTH: f32 = 280.0;

pub fn show(ctx: &egui::Context, app: &mut CropDeckApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file_section(ctx, ui, app);
                ui.separator();
                target_section(ui, app);
                ui.separator();
                framing_section(ui, app);
                ui.separator();
                actions_section(ui, app);
                ui.separator();
                outputs_section(ctx, ui, app);
            });
        });
}

fn file_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut CropDeckApp) {
    section_header(ui, "Image", None);
    ui.add_space(4.0);

    if ui.button("Open...").clicked() {
        dialogs::open_image(ctx, app);
    }

    if let Some(ref path) = app.ui_state.file_path {
        ui.label(
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
        );
    }
    if let Some((w, h)) = app.ui_state.source_size {
        ui.small(format!("{w}x{h}"));
    }
}

fn target_section(ui: &mut egui::Ui, app: &mut CropDeckApp) {
    let preset = app.ui_state.choice.to_target().preset();
    let shape = match preset.mask {
        MaskShape::Rectangle => format!("{}x{}", preset.width, preset.height),
        MaskShape::Circle => format!("{}x{} circle", preset.width, preset.height),
    };
    section_header(ui, "Target", Some(&shape));
    ui.add_space(4.0);

    let choice = &mut app.ui_state.choice;
    let mut changed = enum_combo(ui, "Preset", &mut choice.tag, PresetTag::ALL);

    match choice.tag {
        PresetTag::ProfileCircle => {
            changed |= enum_combo(ui, "Owner", &mut choice.owner, &TargetChoice::OWNERS);
        }
        PresetTag::ReportThumbnail => {
            // Shown 1-based, stored 0-based.
            let mut number = choice.slot + 1;
            let resp = ui.add(
                egui::DragValue::new(&mut number)
                    .range(1..=99)
                    .prefix("Slot #"),
            );
            if resp.changed() {
                choice.slot = number - 1;
                changed = true;
            }
        }
        _ => {}
    }

    if changed {
        app.apply_target();
    }
}

fn framing_section(ui: &mut egui::Ui, app: &mut CropDeckApp) {
    let Some(session) = app.host.session() else {
        section_header(ui, "Framing", Some("no image"));
        return;
    };
    let mut zoom = session.viewport().zoom();
    let (pan_x, pan_y) = session.viewport().pan();
    let target = session.target();

    section_header(ui, "Framing", Some(&session.phase().to_string()));
    ui.add_space(4.0);

    let resp = ui.add(
        egui::Slider::new(&mut zoom, MIN_ZOOM..=MAX_ZOOM)
            .step_by(ZOOM_STEP)
            .text("Zoom"),
    );
    if resp.changed() {
        let result = app.host.set_zoom(zoom);
        app.report(result);
    }

    ui.small(format!("Pan: {pan_x:.0}, {pan_y:.0}"));
    ui.small("Drag the preview to move, scroll to zoom");

    if ui.button("Reset View").clicked() {
        if let Some(session) = app.host.session_mut() {
            let result = session.set_target(target);
            app.report(result);
        }
    }
}

fn actions_section(ui: &mut egui::Ui, app: &mut CropDeckApp) {
    let active = app.host.is_active();
    ui.add_space(4.0);
    ui.horizontal(|ui| {
        if ui
            .add_enabled(active, egui::Button::new("Confirm"))
            .clicked()
        {
            app.confirm();
        }
        if ui.add_enabled(active, egui::Button::new("Cancel")).clicked() {
            app.cancel();
        }
    });
    ui.add_space(4.0);
}

fn outputs_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut CropDeckApp) {
    let count = app.outputs.len().to_string();
    section_header(ui, "Confirmed", Some(&count));
    ui.add_space(4.0);

    if app.outputs.is_empty() {
        ui.small("Nothing confirmed yet");
        return;
    }

    let mut save_index = None;
    for (index, output) in app.outputs.iter().enumerate() {
        ui.label(output.target.to_string());
        ui.horizontal(|ui| {
            ui.small(format!(
                "{}x{} {}, {:.1} KB",
                output.image.width,
                output.image.height,
                output.image.format,
                output.image.bytes.len() as f64 / 1024.0
            ));
        });
        ui.horizontal(|ui| {
            if ui.small_button("Save...").clicked() {
                save_index = Some(index);
            }
            if ui.small_button("Copy Data URI").clicked() {
                ctx.copy_text(output.image.to_data_uri());
            }
        });
        ui.add_space(4.0);
    }

    if let Some(index) = save_index {
        dialogs::save_output(ctx, app, index);
    }
}
