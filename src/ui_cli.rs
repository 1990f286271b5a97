use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::emission::{self, DietType, EmissionFactors, EmissionInput};
use crate::i18n::{keys, Translator};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    EditInputs,
    Results,
    Factors,
    Tips,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("\n=== {} ===", tr.t(keys::APP_TITLE));
    for key in [
        keys::MAIN_MENU_EDIT,
        keys::MAIN_MENU_RESULTS,
        keys::MAIN_MENU_FACTORS,
        keys::MAIN_MENU_TIPS,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        println!("{}", tr.t(key));
    }
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::EditInputs),
            "2" => return Ok(MenuChoice::Results),
            "3" => return Ok(MenuChoice::Factors),
            "4" => return Ok(MenuChoice::Tips),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 입력 그룹을 골라 값을 수정한다. 엔터만 누르면 현재 값을 유지한다.
pub fn handle_edit_inputs(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::EDIT_HEADING));
    println!("{}", tr.t(keys::PROMPT_KEEP_HINT));
    loop {
        println!("{}", tr.t(keys::EDIT_GROUPS));
        let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
        let input = &mut cfg.last_input;
        match sel.trim() {
            "1" => {
                let e = &mut input.electricity;
                e.grid_kwh_per_month = read_f64_or(tr, keys::FIELD_GRID_KWH, e.grid_kwh_per_month)?;
                e.solar_kwh_per_month =
                    read_f64_or(tr, keys::FIELD_SOLAR_KWH, e.solar_kwh_per_month)?;
            }
            "2" => {
                let t = &mut input.transport;
                t.car_km_per_week = read_f64_or(tr, keys::FIELD_CAR_KM, t.car_km_per_week)?;
                t.two_wheeler_km_per_week =
                    read_f64_or(tr, keys::FIELD_TWO_WHEELER_KM, t.two_wheeler_km_per_week)?;
                t.cab_km_per_week = read_f64_or(tr, keys::FIELD_CAB_KM, t.cab_km_per_week)?;
                t.bus_km_per_week = read_f64_or(tr, keys::FIELD_BUS_KM, t.bus_km_per_week)?;
                t.train_km_per_week = read_f64_or(tr, keys::FIELD_TRAIN_KM, t.train_km_per_week)?;
                t.metro_km_per_week = read_f64_or(tr, keys::FIELD_METRO_KM, t.metro_km_per_week)?;
            }
            "3" => {
                let c = &mut input.cooking;
                c.lpg_cylinders_per_year =
                    read_u32_or(tr, keys::FIELD_LPG_CYLINDERS, c.lpg_cylinders_per_year)?;
                c.induction_kwh_per_month =
                    read_f64_or(tr, keys::FIELD_INDUCTION_KWH, c.induction_kwh_per_month)?;
            }
            "4" => {
                let f = &mut input.flights;
                f.domestic_per_year =
                    read_u32_or(tr, keys::FIELD_DOMESTIC_FLIGHTS, f.domestic_per_year)?;
                f.intl_short_per_year =
                    read_u32_or(tr, keys::FIELD_INTL_SHORT_FLIGHTS, f.intl_short_per_year)?;
                f.intl_long_per_year =
                    read_u32_or(tr, keys::FIELD_INTL_LONG_FLIGHTS, f.intl_long_per_year)?;
            }
            "5" => {
                let d = &mut input.diet;
                d.diet_type = read_diet_or(tr, &d.diet_type)?;
                d.dairy_litres_per_week =
                    read_f64_or(tr, keys::FIELD_DAIRY_LITRES, d.dairy_litres_per_week)?;
            }
            "6" => {
                let d = &mut input.digital;
                d.screen_hours_per_day =
                    read_f64_or(tr, keys::FIELD_SCREEN_HOURS, d.screen_hours_per_day)?;
            }
            "7" => {
                let w = &mut input.waste;
                w.plastic_kg_per_month =
                    read_f64_or(tr, keys::FIELD_PLASTIC_KG, w.plastic_kg_per_month)?;
                w.ewaste_kg_per_year = read_f64_or(tr, keys::FIELD_EWASTE_KG, w.ewaste_kg_per_year)?;
            }
            "8" => {
                let a = &mut input.appliances;
                a.geyser_hours_per_day =
                    read_f64_or(tr, keys::FIELD_GEYSER_HOURS, a.geyser_hours_per_day)?;
                a.ac_hours_per_day = read_f64_or(tr, keys::FIELD_AC_HOURS, a.ac_hours_per_day)?;
            }
            "0" | "" => return Ok(()),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 현재 입력으로 결과 표와 분포 막대를 출력한다.
pub fn handle_results(tr: &Translator, cfg: &Config, check_bounds: bool) -> Result<(), AppError> {
    print_report(tr, &cfg.last_input, cfg.decimals, check_bounds)
}

/// 범위 경고 → 계산 → 표/막대 출력.
pub fn print_report(
    tr: &Translator,
    input: &EmissionInput,
    decimals: usize,
    check_bounds: bool,
) -> Result<(), AppError> {
    if check_bounds {
        warn_bounds(tr, input);
    }
    let output = emission::compute(input)?;
    println!("{}", tr.t(keys::RESULTS_HEADING));
    print!("{}", report::render_table(&output, tr, decimals));
    println!("{}", tr.t(keys::RESULTS_CHART_HEADING));
    print!("{}", report::render_bar_chart(&output, tr, 40));
    println!(
        "{} {}",
        tr.t(keys::RESULTS_LARGEST),
        tr.category(output.largest_category())
    );
    Ok(())
}

/// 범위를 벗어난 입력을 경고로만 알린다. 값은 바꾸지 않는다.
pub fn warn_bounds(tr: &Translator, input: &EmissionInput) {
    for violation in emission::validate_bounds(input) {
        tracing::warn!(field = violation.field, value = violation.value, "input out of range");
        eprintln!("{}: {violation}", tr.t(keys::WARNING_PREFIX));
    }
}

pub fn handle_factors(tr: &Translator) {
    print!(
        "{}",
        report::render_factors(EmissionFactors::shared(), tr)
    );
}

pub fn handle_tips(tr: &Translator) {
    print!("{}", report::render_tips(tr));
}

/// 설정 메뉴를 처리한다. 언어가 바뀌면 true.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<bool, AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language
    );
    println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    let changed = match sel.trim() {
        "" => false,
        "1" => set_language(cfg, "ko"),
        "2" => set_language(cfg, "en"),
        "3" => set_language(cfg, "auto"),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            false
        }
    };
    if changed {
        println!("{} {}", tr.t(keys::SETTINGS_SAVED), cfg.language);
    }
    cfg.decimals = read_usize_or(tr, keys::SETTINGS_DECIMALS, cfg.decimals)?;
    Ok(changed)
}

fn set_language(cfg: &mut Config, code: &str) -> bool {
    let changed = cfg.language != code;
    cfg.language = code.to_string();
    changed
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    let read = io::stdin().lock().read_line(&mut buf)?;
    if read == 0 {
        return Err(AppError::InputClosed);
    }
    Ok(buf)
}

/// 엔터만 입력하면 현재 값을 유지하는 숫자 입력.
fn read_or<T>(tr: &Translator, label_key: &str, current: T) -> Result<T, AppError>
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    let prompt = format!("{} [{current}]: ", tr.t(label_key));
    loop {
        let s = read_line(&prompt)?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(current);
        }
        match s.parse::<T>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_f64_or(tr: &Translator, label_key: &str, current: f64) -> Result<f64, AppError> {
    read_or(tr, label_key, current)
}

fn read_u32_or(tr: &Translator, label_key: &str, current: u32) -> Result<u32, AppError> {
    read_or(tr, label_key, current)
}

fn read_usize_or(tr: &Translator, label_key: &str, current: usize) -> Result<usize, AppError> {
    read_or(tr, label_key, current)
}

fn read_diet_or(tr: &Translator, current: &str) -> Result<String, AppError> {
    println!("{}", tr.t(keys::EDIT_DIET_OPTIONS));
    let prompt = format!("{} [{current}]: ", tr.t(keys::FIELD_DIET_TYPE));
    loop {
        let sel = read_line(&prompt)?;
        let diet = match sel.trim() {
            "" => return Ok(current.to_string()),
            "1" => DietType::Vegetarian,
            "2" => DietType::Eggetarian,
            "3" => DietType::OccasionalMeat,
            "4" => DietType::RegularMeat,
            _ => {
                println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
                continue;
            }
        };
        return Ok(diet.to_string());
    }
}
