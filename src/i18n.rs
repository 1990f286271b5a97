use sys_locale::get_locale;

use crate::emission::Category;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const WARNING_PREFIX: &str = "general.warning_prefix";
    pub const APP_EXIT: &str = "general.app_exit";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_SUBTITLE: &str = "general.app_subtitle";

    pub const MAIN_MENU_EDIT: &str = "main_menu.edit";
    pub const MAIN_MENU_RESULTS: &str = "main_menu.results";
    pub const MAIN_MENU_FACTORS: &str = "main_menu.factors";
    pub const MAIN_MENU_TIPS: &str = "main_menu.tips";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const PROMPT_KEEP_HINT: &str = "prompt.keep_hint";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const EDIT_HEADING: &str = "edit.heading";
    pub const EDIT_GROUPS: &str = "edit.groups";
    pub const EDIT_DIET_OPTIONS: &str = "edit.diet_options";

    pub const FIELD_GRID_KWH: &str = "field.grid_kwh";
    pub const FIELD_SOLAR_KWH: &str = "field.solar_kwh";
    pub const FIELD_CAR_KM: &str = "field.car_km";
    pub const FIELD_TWO_WHEELER_KM: &str = "field.two_wheeler_km";
    pub const FIELD_CAB_KM: &str = "field.cab_km";
    pub const FIELD_BUS_KM: &str = "field.bus_km";
    pub const FIELD_TRAIN_KM: &str = "field.train_km";
    pub const FIELD_METRO_KM: &str = "field.metro_km";
    pub const FIELD_LPG_CYLINDERS: &str = "field.lpg_cylinders";
    pub const FIELD_INDUCTION_KWH: &str = "field.induction_kwh";
    pub const FIELD_DOMESTIC_FLIGHTS: &str = "field.domestic_flights";
    pub const FIELD_INTL_SHORT_FLIGHTS: &str = "field.intl_short_flights";
    pub const FIELD_INTL_LONG_FLIGHTS: &str = "field.intl_long_flights";
    pub const FIELD_DIET_TYPE: &str = "field.diet_type";
    pub const FIELD_DAIRY_LITRES: &str = "field.dairy_litres";
    pub const FIELD_SCREEN_HOURS: &str = "field.screen_hours";
    pub const FIELD_PLASTIC_KG: &str = "field.plastic_kg";
    pub const FIELD_EWASTE_KG: &str = "field.ewaste_kg";
    pub const FIELD_GEYSER_HOURS: &str = "field.geyser_hours";
    pub const FIELD_AC_HOURS: &str = "field.ac_hours";

    pub const CATEGORY_ELECTRICITY: &str = "category.electricity";
    pub const CATEGORY_TRANSPORT: &str = "category.transport";
    pub const CATEGORY_COOKING: &str = "category.cooking";
    pub const CATEGORY_FLIGHTS: &str = "category.flights";
    pub const CATEGORY_DIET: &str = "category.diet";
    pub const CATEGORY_DIGITAL: &str = "category.digital";
    pub const CATEGORY_WASTE: &str = "category.waste";
    pub const CATEGORY_APPLIANCES: &str = "category.appliances";
    pub const ROW_TOTAL: &str = "row.total";
    pub const ROW_TOTAL_TONS: &str = "row.total_tons";

    pub const RESULTS_HEADING: &str = "results.heading";
    pub const RESULTS_COLUMN_CATEGORY: &str = "results.column_category";
    pub const RESULTS_COLUMN_CO2: &str = "results.column_co2";
    pub const RESULTS_CHART_HEADING: &str = "results.chart_heading";
    pub const RESULTS_LARGEST: &str = "results.largest";

    pub const FACTORS_HEADING: &str = "factors.heading";
    pub const FACTORS_DIET_HEADING: &str = "factors.diet_heading";

    pub const TIPS_HEADING: &str = "tips.heading";
    pub const TIP_EFFICIENT_APPLIANCES: &str = "tips.efficient_appliances";
    pub const TIP_PUBLIC_TRANSPORT: &str = "tips.public_transport";
    pub const TIP_LESS_MEAT_DAIRY: &str = "tips.less_meat_dairy";
    pub const TIP_INDUCTION_SOLAR: &str = "tips.induction_solar";
    pub const TIP_FEWER_FLIGHTS: &str = "tips.fewer_flights";
    pub const TIP_RECYCLE: &str = "tips.recycle";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_DECIMALS: &str = "settings.decimals";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 한국어 번역이 없으면 영어, 둘 다 없으면 키 자체를 돌려준다.
    pub fn t<'a>(&self, key: &'a str) -> &'a str {
        let found: Option<&'a str> = match self.lang {
            Language::Ko => ko(key).or_else(|| en(key)),
            Language::En => en(key),
        };
        found.unwrap_or(key)
    }

    /// 결과 분류의 표시 이름.
    pub fn category(&self, category: Category) -> &'static str {
        self.t(category_key(category))
    }
}

/// 분류별 번역 키.
pub fn category_key(category: Category) -> &'static str {
    use keys::*;
    match category {
        Category::Electricity => CATEGORY_ELECTRICITY,
        Category::Transport => CATEGORY_TRANSPORT,
        Category::Cooking => CATEGORY_COOKING,
        Category::Flights => CATEGORY_FLIGHTS,
        Category::Diet => CATEGORY_DIET,
        Category::Digital => CATEGORY_DIGITAL,
        Category::Waste => CATEGORY_WASTE,
        Category::Appliances => CATEGORY_APPLIANCES,
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: Option<&str>, config_lang: Option<&str>) -> String {
    cli_arg
        .and_then(normalize_lang)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        WARNING_PREFIX => "경고",
        APP_EXIT => "프로그램을 종료합니다.",
        APP_TITLE => "인도 생활 CO₂ 배출량 계산기",
        APP_SUBTITLE => "인도 생활 패턴 기준 연간 탄소 발자국을 추정합니다.",
        MAIN_MENU_EDIT => "1) 입력 수정",
        MAIN_MENU_RESULTS => "2) 결과 보기",
        MAIN_MENU_FACTORS => "3) 배출계수 표",
        MAIN_MENU_TIPS => "4) 절감 팁",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 저장 후 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        PROMPT_KEEP_HINT => "(엔터 = 현재 값 유지)",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        EDIT_HEADING => "\n-- 입력 수정 --",
        EDIT_GROUPS => "1) 전기  2) 교통  3) 조리  4) 항공  5) 식단  6) 디지털  7) 폐기물  8) 가전  0) 돌아가기",
        EDIT_DIET_OPTIONS => "식단: 1=Vegetarian 2=Eggetarian 3=Occasional Meat 4=Regular Meat",
        FIELD_GRID_KWH => "계통 전력 (kWh/월)",
        FIELD_SOLAR_KWH => "태양광 상쇄 (kWh/월)",
        FIELD_CAR_KM => "자동차 (km/주)",
        FIELD_TWO_WHEELER_KM => "이륜차 (km/주)",
        FIELD_CAB_KM => "택시 (km/주)",
        FIELD_BUS_KM => "버스 (km/주)",
        FIELD_TRAIN_KM => "기차 (km/주)",
        FIELD_METRO_KM => "지하철 (km/주)",
        FIELD_LPG_CYLINDERS => "LPG 실린더 (개/년)",
        FIELD_INDUCTION_KWH => "인덕션 조리 (kWh/월)",
        FIELD_DOMESTIC_FLIGHTS => "국내선 (회/년)",
        FIELD_INTL_SHORT_FLIGHTS => "단거리 국제선 (회/년)",
        FIELD_INTL_LONG_FLIGHTS => "장거리 국제선 (회/년)",
        FIELD_DIET_TYPE => "식단 유형",
        FIELD_DAIRY_LITRES => "우유·유제품 (L/주)",
        FIELD_SCREEN_HOURS => "화면 사용 (시간/일)",
        FIELD_PLASTIC_KG => "플라스틱 폐기물 (kg/월)",
        FIELD_EWASTE_KG => "전자 폐기물 (kg/년)",
        FIELD_GEYSER_HOURS => "온수기 사용 (시간/일)",
        FIELD_AC_HOURS => "에어컨 사용 (시간/일)",
        CATEGORY_ELECTRICITY => "전기",
        CATEGORY_TRANSPORT => "교통",
        CATEGORY_COOKING => "조리",
        CATEGORY_FLIGHTS => "항공",
        CATEGORY_DIET => "식단",
        CATEGORY_DIGITAL => "디지털",
        CATEGORY_WASTE => "폐기물",
        CATEGORY_APPLIANCES => "가전",
        ROW_TOTAL => "합계",
        ROW_TOTAL_TONS => "합계 (t)",
        RESULTS_HEADING => "\n-- 연간 CO₂ 배출량 (kg) --",
        RESULTS_COLUMN_CATEGORY => "항목",
        RESULTS_COLUMN_CO2 => "CO₂ (kg)",
        RESULTS_CHART_HEADING => "\n-- 배출 분포 --",
        RESULTS_LARGEST => "가장 큰 배출 항목:",
        FACTORS_HEADING => "\n-- 배출계수 (kg CO₂e / 단위) --",
        FACTORS_DIET_HEADING => "\n-- 식단 기본 배출량 (kg CO₂e / 년) --",
        TIPS_HEADING => "\n-- 탄소 발자국 줄이기 --",
        TIP_EFFICIENT_APPLIANCES => "고효율(5등급 별표) 가전으로 바꾸세요.",
        TIP_PUBLIC_TRANSPORT => "대중교통이나 전기차를 이용하세요.",
        TIP_LESS_MEAT_DAIRY => "육류와 유제품 소비를 줄이세요.",
        TIP_INDUCTION_SOLAR => "태양광과 함께 인덕션 조리로 바꾸세요.",
        TIP_FEWER_FLIGHTS => "항공 이동을 줄이고 배출을 상쇄하세요.",
        TIP_RECYCLE => "플라스틱과 전자 폐기물을 올바르게 재활용하세요.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_LANGUAGE_OPTIONS => "1) 한국어  2) English  3) 자동",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "언어가 변경되었습니다:",
        SETTINGS_DECIMALS => "소수점 자릿수",
        _ => return None,
    })
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        WARNING_PREFIX => "Warning",
        APP_EXIT => "Exiting.",
        APP_TITLE => "India CO₂ Emission Estimator",
        APP_SUBTITLE => "Estimate your annual carbon footprint based on Indian lifestyle patterns.",
        MAIN_MENU_EDIT => "1) Edit inputs",
        MAIN_MENU_RESULTS => "2) Show results",
        MAIN_MENU_FACTORS => "3) Emission factors",
        MAIN_MENU_TIPS => "4) Reduction tips",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Save and exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        PROMPT_KEEP_HINT => "(enter = keep current value)",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        EDIT_HEADING => "\n-- Edit inputs --",
        EDIT_GROUPS => "1) Electricity  2) Transport  3) Cooking  4) Flights  5) Diet  6) Digital  7) Waste  8) Appliances  0) Back",
        EDIT_DIET_OPTIONS => "Diet: 1=Vegetarian 2=Eggetarian 3=Occasional Meat 4=Regular Meat",
        FIELD_GRID_KWH => "Grid Electricity (kWh/month)",
        FIELD_SOLAR_KWH => "Solar Offset (kWh/month)",
        FIELD_CAR_KM => "Car (km/week)",
        FIELD_TWO_WHEELER_KM => "2-wheeler (km/week)",
        FIELD_CAB_KM => "Cab/Taxi (km/week)",
        FIELD_BUS_KM => "Bus (km/week)",
        FIELD_TRAIN_KM => "Train (km/week)",
        FIELD_METRO_KM => "Metro (km/week)",
        FIELD_LPG_CYLINDERS => "LPG Cylinders (per year)",
        FIELD_INDUCTION_KWH => "Induction Cooking (kWh/month)",
        FIELD_DOMESTIC_FLIGHTS => "Domestic Flights (per year)",
        FIELD_INTL_SHORT_FLIGHTS => "Short-haul Intl Flights (per year)",
        FIELD_INTL_LONG_FLIGHTS => "Long-haul Intl Flights (per year)",
        FIELD_DIET_TYPE => "Diet Type",
        FIELD_DAIRY_LITRES => "Milk & Dairy (litres/week)",
        FIELD_SCREEN_HOURS => "Screen Time (hours/day)",
        FIELD_PLASTIC_KG => "Plastic Waste (kg/month)",
        FIELD_EWASTE_KG => "E-Waste (kg/year)",
        FIELD_GEYSER_HOURS => "Geyser Use (hours/day)",
        FIELD_AC_HOURS => "A/C Use (hours/day)",
        CATEGORY_ELECTRICITY => "Electricity",
        CATEGORY_TRANSPORT => "Transport",
        CATEGORY_COOKING => "Cooking",
        CATEGORY_FLIGHTS => "Flights",
        CATEGORY_DIET => "Diet",
        CATEGORY_DIGITAL => "Digital",
        CATEGORY_WASTE => "Waste",
        CATEGORY_APPLIANCES => "Appliances",
        ROW_TOTAL => "Total",
        ROW_TOTAL_TONS => "Total (tons)",
        RESULTS_HEADING => "\n-- Annual CO₂ Emissions Breakdown (kg) --",
        RESULTS_COLUMN_CATEGORY => "Category",
        RESULTS_COLUMN_CO2 => "CO₂ (kg)",
        RESULTS_CHART_HEADING => "\n-- Emission Distribution --",
        RESULTS_LARGEST => "Largest source:",
        FACTORS_HEADING => "\n-- Emission factors (kg CO₂e per unit) --",
        FACTORS_DIET_HEADING => "\n-- Diet base emission (kg CO₂e per year) --",
        TIPS_HEADING => "\n-- Tips to Reduce Your Footprint --",
        TIP_EFFICIENT_APPLIANCES => "Switch to energy-efficient appliances (5-star rated).",
        TIP_PUBLIC_TRANSPORT => "Use public transport or EVs.",
        TIP_LESS_MEAT_DAIRY => "Reduce meat and dairy consumption.",
        TIP_INDUCTION_SOLAR => "Switch to induction cooking with solar offset.",
        TIP_FEWER_FLIGHTS => "Minimize air travel and offset emissions.",
        TIP_RECYCLE => "Properly recycle plastic and e-waste.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_LANGUAGE_OPTIONS => "1) 한국어  2) English  3) Auto",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; language unchanged.",
        SETTINGS_SAVED => "Language changed to:",
        SETTINGS_DECIMALS => "Decimal places",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_fall_back_to_english() {
        assert_eq!(Translator::new("de-de").language(), Language::En);
        assert_eq!(Translator::new("ko-KR").language(), Language::Ko);
    }

    #[test]
    fn missing_key_returns_key() {
        let tr = Translator::new("ko");
        assert_eq!(tr.t("no.such.key"), "no.such.key");
        assert_eq!(tr.category(Category::Waste), "폐기물");
    }

    #[test]
    fn cli_flag_wins_over_config() {
        assert_eq!(resolve_language(Some("ko-kr"), Some("en")), "ko");
        assert_eq!(resolve_language(Some("auto"), Some("en-us")), "en");
    }

    #[test]
    fn every_category_has_both_translations() {
        for c in Category::all() {
            assert!(ko(category_key(c)).is_some());
            assert!(en(category_key(c)).is_some());
        }
    }
}
