#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use image::GenericImageView;
use india_co2_estimator::{
    config,
    emission::{self, bounds, Category, DietType, EmissionInput},
    i18n::{self, keys, Translator},
    report::{self, RowKind},
};
use rfd::FileDialog;
use std::{env, f32::consts::TAU, fs, path::Path};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// 파이 차트 조각 색상(tab20 계열).
const SLICE_COLORS: [egui::Color32; 8] = [
    egui::Color32::from_rgb(31, 119, 180),
    egui::Color32::from_rgb(174, 199, 232),
    egui::Color32::from_rgb(255, 127, 14),
    egui::Color32::from_rgb(255, 187, 120),
    egui::Color32::from_rgb(44, 160, 44),
    egui::Color32::from_rgb(152, 223, 138),
    egui::Color32::from_rgb(214, 39, 40),
    egui::Color32::from_rgb(255, 152, 150),
];

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if (a == "--lang" || a == "-L") && i + 1 < args.len() {
            cli_lang = Some(args[i + 1].clone());
            i += 1;
        }
        i += 1;
    }

    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1100.0, 760.0));
    if let Some(icon) = load_app_icon() {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default().unwrap_or_else(|e| {
        warn!("config unavailable, using defaults: {e}");
        config::Config::default()
    });
    eframe::run_native(
        "India CO₂ Emission Estimator",
        options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                warn!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg, cli_lang.as_deref()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .push(font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 한글 표시용 폴백 폰트를 시스템에서 찾는다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let mut candidates = vec![
        "assets/fonts/NotoSansKR-Regular.ttf".to_string(),
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc".to_string(),
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".to_string(),
        "/System/Library/Fonts/AppleSDGothicNeo.ttc".to_string(),
    ];
    if let Some(windir) = env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            candidates.push(fonts.join(cand).display().to_string());
        }
    }
    for cand in candidates {
        let p = Path::new(&cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "fallback_font");
            info!(font = %p.display(), "fallback font loaded");
            return Ok(());
        }
    }
    Err("Font not found; Korean labels may not render.".into())
}

struct GuiApp {
    config: config::Config,
    tr: Translator,
    input: EmissionInput,
    check_bounds: bool,
    status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, cli_lang: Option<&str>) -> Self {
        let lang_code = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
        info!(lang = %lang_code, "GUI language resolved");
        Self {
            tr: Translator::new(&lang_code),
            input: config.last_input.clone(),
            config,
            check_bounds: true,
            status: None,
        }
    }

    fn inputs_ui(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        let input = &mut self.input;

        ui.heading(tr.category(Category::Electricity));
        number_row(ui, tr.t(keys::FIELD_GRID_KWH), &mut input.electricity.grid_kwh_per_month);
        number_row(ui, tr.t(keys::FIELD_SOLAR_KWH), &mut input.electricity.solar_kwh_per_month);

        ui.separator();
        ui.heading(tr.category(Category::Transport));
        let t = &mut input.transport;
        number_row(ui, tr.t(keys::FIELD_CAR_KM), &mut t.car_km_per_week);
        number_row(ui, tr.t(keys::FIELD_TWO_WHEELER_KM), &mut t.two_wheeler_km_per_week);
        number_row(ui, tr.t(keys::FIELD_CAB_KM), &mut t.cab_km_per_week);
        number_row(ui, tr.t(keys::FIELD_BUS_KM), &mut t.bus_km_per_week);
        number_row(ui, tr.t(keys::FIELD_TRAIN_KM), &mut t.train_km_per_week);
        number_row(ui, tr.t(keys::FIELD_METRO_KM), &mut t.metro_km_per_week);

        ui.separator();
        ui.heading(tr.category(Category::Cooking));
        ui.add(
            egui::Slider::new(
                &mut input.cooking.lpg_cylinders_per_year,
                bounds::LPG_CYLINDERS_PER_YEAR,
            )
            .text(tr.t(keys::FIELD_LPG_CYLINDERS)),
        );
        number_row(ui, tr.t(keys::FIELD_INDUCTION_KWH), &mut input.cooking.induction_kwh_per_month);

        ui.separator();
        ui.heading(tr.category(Category::Flights));
        let f = &mut input.flights;
        ui.add(
            egui::Slider::new(&mut f.domestic_per_year, bounds::DOMESTIC_FLIGHTS_PER_YEAR)
                .text(tr.t(keys::FIELD_DOMESTIC_FLIGHTS)),
        );
        ui.add(
            egui::Slider::new(&mut f.intl_short_per_year, bounds::INTL_SHORT_FLIGHTS_PER_YEAR)
                .text(tr.t(keys::FIELD_INTL_SHORT_FLIGHTS)),
        );
        ui.add(
            egui::Slider::new(&mut f.intl_long_per_year, bounds::INTL_LONG_FLIGHTS_PER_YEAR)
                .text(tr.t(keys::FIELD_INTL_LONG_FLIGHTS)),
        );

        ui.separator();
        ui.heading(tr.category(Category::Diet));
        egui::ComboBox::from_label(tr.t(keys::FIELD_DIET_TYPE))
            .selected_text(input.diet.diet_type.clone())
            .show_ui(ui, |ui| {
                for diet in DietType::all() {
                    let label = diet.to_string();
                    ui.selectable_value(&mut input.diet.diet_type, label.clone(), label);
                }
            });
        number_row(ui, tr.t(keys::FIELD_DAIRY_LITRES), &mut input.diet.dairy_litres_per_week);

        ui.separator();
        ui.heading(tr.category(Category::Digital));
        number_row(ui, tr.t(keys::FIELD_SCREEN_HOURS), &mut input.digital.screen_hours_per_day);

        ui.separator();
        ui.heading(tr.category(Category::Waste));
        number_row(ui, tr.t(keys::FIELD_PLASTIC_KG), &mut input.waste.plastic_kg_per_month);
        number_row(ui, tr.t(keys::FIELD_EWASTE_KG), &mut input.waste.ewaste_kg_per_year);

        ui.separator();
        ui.heading(tr.category(Category::Appliances));
        number_row(ui, tr.t(keys::FIELD_GEYSER_HOURS), &mut input.appliances.geyser_hours_per_day);
        number_row(ui, tr.t(keys::FIELD_AC_HOURS), &mut input.appliances.ac_hours_per_day);
    }

    fn load_profile(&mut self) {
        let Some(path) = FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
            return;
        };
        match config::load_profile(&path) {
            Ok(input) => {
                self.input = input;
                self.status = Some(path.display().to_string());
            }
            Err(e) => {
                warn!(path = %path.display(), "profile load failed: {e}");
                self.status = Some(format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)));
            }
        }
    }

    fn save_profile(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("TOML", &["toml"])
            .set_file_name("profile.toml")
            .save_file()
        else {
            return;
        };
        self.status = Some(match config::save_profile(&path, &self.input) {
            Ok(()) => path.display().to_string(),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }

    fn remember_input(&mut self) {
        self.config.last_input = self.input.clone();
        self.status = Some(match self.config.save() {
            Ok(()) => config::CONFIG_FILE.to_string(),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
    }
}

fn number_row(ui: &mut egui::Ui, label: &str, value: &mut f64) {
    ui.horizontal(|ui| {
        ui.add(egui::DragValue::new(value).speed(0.5));
        ui.label(label);
    });
}

fn results_ui(
    ui: &mut egui::Ui,
    tr: &Translator,
    output: &emission::EmissionOutput,
    decimals: usize,
) {
    egui::Grid::new("results_grid")
        .num_columns(2)
        .striped(true)
        .spacing([24.0, 4.0])
        .show(ui, |ui| {
            ui.strong(tr.t(keys::RESULTS_COLUMN_CATEGORY));
            ui.strong(tr.t(keys::RESULTS_COLUMN_CO2));
            ui.end_row();
            for (row, value) in report::breakdown_rows(output) {
                let label = report::row_label(tr, row);
                let text = format!("{value:.decimals$}");
                if matches!(row, RowKind::Category(_)) {
                    ui.label(label);
                    ui.label(text);
                } else {
                    ui.strong(label);
                    ui.strong(text);
                }
                ui.end_row();
            }
        });
}

/// 여덟 분류의 비율 파이 차트. 합계는 그리지 않는다.
fn pie_chart_ui(ui: &mut egui::Ui, tr: &Translator, output: &emission::EmissionOutput) {
    let shares = output.shares();
    ui.horizontal(|ui| {
        let size = 260.0;
        let (response, painter) =
            ui.allocate_painter(egui::vec2(size, size), egui::Sense::hover());
        let center = response.rect.center();
        let radius = size * 0.45;
        let mut angle = 140f32.to_radians();
        for (idx, (_, share)) in shares.iter().enumerate() {
            let sweep = (*share as f32 / 100.0) * TAU;
            if sweep <= 0.0 {
                continue;
            }
            let steps = ((sweep / 0.05).ceil() as usize).max(1);
            let color = SLICE_COLORS[idx % SLICE_COLORS.len()];
            for s in 0..steps {
                let a0 = angle + sweep * s as f32 / steps as f32;
                let a1 = angle + sweep * (s + 1) as f32 / steps as f32;
                let p0 = center + egui::vec2(a0.cos(), -a0.sin()) * radius;
                let p1 = center + egui::vec2(a1.cos(), -a1.sin()) * radius;
                painter.add(egui::Shape::convex_polygon(
                    vec![center, p0, p1],
                    color,
                    egui::Stroke::NONE,
                ));
            }
            angle += sweep;
        }

        ui.vertical(|ui| {
            for (idx, (category, share)) in shares.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter()
                        .rect_filled(rect, 2.0, SLICE_COLORS[idx % SLICE_COLORS.len()]);
                    ui.label(format!("{} {:.1}%", tr.category(*category), share));
                });
            }
        });
    });
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let tr = self.tr.clone();

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(tr.t(keys::APP_TITLE));
                ui.separator();
                if ui.button("📂 Load").clicked() {
                    self.load_profile();
                }
                if ui.button("💾 Save").clicked() {
                    self.save_profile();
                }
                if ui.button("⭐ Remember").clicked() {
                    self.remember_input();
                }
                if ui.button("↺ Reset").clicked() {
                    self.input = EmissionInput::default();
                }
                ui.checkbox(&mut self.check_bounds, "bounds");
                if let Some(status) = &self.status {
                    ui.separator();
                    ui.small(status.as_str());
                }
            });
        });

        egui::SidePanel::left("inputs")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.inputs_ui(ui));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.label(tr.t(keys::APP_SUBTITLE));
                if self.check_bounds {
                    for violation in emission::validate_bounds(&self.input) {
                        ui.colored_label(
                            egui::Color32::YELLOW,
                            format!("{}: {violation}", tr.t(keys::WARNING_PREFIX)),
                        );
                    }
                }
                match emission::compute(&self.input) {
                    Ok(output) => {
                        ui.heading(tr.t(keys::RESULTS_HEADING).trim());
                        results_ui(ui, &tr, &output, self.config.decimals);
                        ui.add_space(12.0);
                        ui.heading(tr.t(keys::RESULTS_CHART_HEADING).trim());
                        pie_chart_ui(ui, &tr, &output);
                    }
                    Err(e) => {
                        ui.colored_label(
                            egui::Color32::RED,
                            format!("{}: {e}", tr.t(keys::ERROR_PREFIX)),
                        );
                    }
                }
                ui.add_space(12.0);
                ui.heading(tr.t(keys::TIPS_HEADING).trim());
                for key in report::REDUCTION_TIPS {
                    ui.label(format!("• {}", tr.t(key)));
                }
            });
        });
    }
}
