use tl_losses::{CoreType, InputParameters};

/// Left-hand parameter form.
#[derive(Default)]
pub struct InputView {
    pub params: InputParameters,
}

impl InputView {
    /// Returns true when "Calculate & Plot" was clicked.
    pub fn show(&mut self, ui: &mut egui::Ui) -> bool {
        ui.heading("Input Parameters");
        ui.separator();

        let p = &mut self.params;
        egui::Grid::new("input_grid")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                number_row(ui, "Primary Voltage (V)", &mut p.primary_voltage, 1.0, 1.0);
                number_row(ui, "Secondary Voltage (V)", &mut p.secondary_voltage, 1.0, 1.0);
                number_row(ui, "Rated Power (kVA)", &mut p.rated_power, 1.0, 1.0);
                number_row(ui, "Frequency (Hz)", &mut p.frequency, 1.0, 1.0);
                number_row(ui, "Winding Resistance (Ω)", &mut p.winding_resistance, 0.1, 0.1);

                ui.label("Core Type");
                egui::ComboBox::from_id_salt("core_type")
                    .selected_text(p.core_type.label())
                    .show_ui(ui, |ui| {
                        for core in CoreType::ALL {
                            ui.selectable_value(&mut p.core_type, core, core.label());
                        }
                    });
                ui.end_row();

                number_row(ui, "Core Size (cm²)", &mut p.core_size, 1.0, 0.1);

                ui.label("Operating Temperature (°C)");
                ui.add(
                    egui::Slider::new(&mut p.temperature, InputParameters::TEMPERATURE_RANGE)
                        .step_by(1.0),
                );
                ui.end_row();

                ui.label("Load Level (%)");
                ui.add(egui::Slider::new(&mut p.load_level_percent, 0..=100).step_by(5.0));
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.button("Calculate & Plot").clicked()
    }
}

fn number_row(ui: &mut egui::Ui, label: &str, value: &mut f64, min: f64, speed: f64) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).range(min..=f64::MAX).speed(speed));
    ui.end_row();
}
