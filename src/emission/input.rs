use serde::{Deserialize, Serialize};

use super::factors::DietType;

/// 전기 사용량.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElectricityInput {
    /// 계통 전력 [kWh/월]
    pub grid_kwh_per_month: f64,
    /// 태양광 상쇄분 [kWh/월]
    pub solar_kwh_per_month: f64,
}

impl Default for ElectricityInput {
    fn default() -> Self {
        Self {
            grid_kwh_per_month: 150.0,
            solar_kwh_per_month: 0.0,
        }
    }
}

/// 교통수단별 주간 이동 거리 [km/주].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportInput {
    pub car_km_per_week: f64,
    /// 이륜차
    pub two_wheeler_km_per_week: f64,
    pub cab_km_per_week: f64,
    pub bus_km_per_week: f64,
    pub train_km_per_week: f64,
    pub metro_km_per_week: f64,
}

impl Default for TransportInput {
    fn default() -> Self {
        Self {
            car_km_per_week: 20.0,
            two_wheeler_km_per_week: 10.0,
            cab_km_per_week: 5.0,
            bus_km_per_week: 10.0,
            train_km_per_week: 5.0,
            metro_km_per_week: 5.0,
        }
    }
}

/// 조리 연료.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CookingInput {
    /// LPG 실린더 [개/년]
    pub lpg_cylinders_per_year: u32,
    /// 인덕션 조리 전력 [kWh/월]
    pub induction_kwh_per_month: f64,
}

impl Default for CookingInput {
    fn default() -> Self {
        Self {
            lpg_cylinders_per_year: 12,
            induction_kwh_per_month: 20.0,
        }
    }
}

/// 연간 항공편 횟수.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightInput {
    pub domestic_per_year: u32,
    /// 단거리 국제선
    pub intl_short_per_year: u32,
    /// 장거리 국제선
    pub intl_long_per_year: u32,
}

impl Default for FlightInput {
    fn default() -> Self {
        Self {
            domestic_per_year: 2,
            intl_short_per_year: 1,
            intl_long_per_year: 1,
        }
    }
}

/// 식단.
///
/// `diet_type`은 호출자가 넘긴 라벨 그대로 보관하며 계산 시점에 해석한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DietInput {
    pub diet_type: String,
    /// 우유·유제품 [L/주]
    pub dairy_litres_per_week: f64,
}

impl Default for DietInput {
    fn default() -> Self {
        Self {
            diet_type: DietType::Vegetarian.to_string(),
            dairy_litres_per_week: 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitalInput {
    /// 화면 사용 시간 [h/일]
    pub screen_hours_per_day: f64,
}

impl Default for DigitalInput {
    fn default() -> Self {
        Self {
            screen_hours_per_day: 3.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WasteInput {
    /// 플라스틱 폐기물 [kg/월]
    pub plastic_kg_per_month: f64,
    /// 전자 폐기물 [kg/년]
    pub ewaste_kg_per_year: f64,
}

impl Default for WasteInput {
    fn default() -> Self {
        Self {
            plastic_kg_per_month: 1.0,
            ewaste_kg_per_year: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplianceInput {
    /// 온수기 사용 [h/일]
    pub geyser_hours_per_day: f64,
    /// 에어컨 사용 [h/일]
    pub ac_hours_per_day: f64,
}

impl Default for ApplianceInput {
    fn default() -> Self {
        Self {
            geyser_hours_per_day: 0.5,
            ac_hours_per_day: 2.0,
        }
    }
}

/// 한 사람의 생활 활동량 입력.
///
/// `Default`는 입력 폼의 초기값과 같다. 범위 검사는 하지 않으며 필요하면
/// 호출자가 [`super::bounds::validate_bounds`]로 먼저 확인한다.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmissionInput {
    pub electricity: ElectricityInput,
    pub transport: TransportInput,
    pub cooking: CookingInput,
    pub flights: FlightInput,
    pub diet: DietInput,
    pub digital: DigitalInput,
    pub waste: WasteInput,
    pub appliances: ApplianceInput,
}

impl EmissionInput {
    /// 모든 수치가 0이고 식단이 채식인 입력.
    pub fn zero() -> Self {
        Self {
            electricity: ElectricityInput {
                grid_kwh_per_month: 0.0,
                solar_kwh_per_month: 0.0,
            },
            transport: TransportInput {
                car_km_per_week: 0.0,
                two_wheeler_km_per_week: 0.0,
                cab_km_per_week: 0.0,
                bus_km_per_week: 0.0,
                train_km_per_week: 0.0,
                metro_km_per_week: 0.0,
            },
            cooking: CookingInput {
                lpg_cylinders_per_year: 0,
                induction_kwh_per_month: 0.0,
            },
            flights: FlightInput {
                domestic_per_year: 0,
                intl_short_per_year: 0,
                intl_long_per_year: 0,
            },
            diet: DietInput {
                diet_type: DietType::Vegetarian.to_string(),
                dairy_litres_per_week: 0.0,
            },
            digital: DigitalInput {
                screen_hours_per_day: 0.0,
            },
            waste: WasteInput {
                plastic_kg_per_month: 0.0,
                ewaste_kg_per_year: 0.0,
            },
            appliances: ApplianceInput {
                geyser_hours_per_day: 0.0,
                ac_hours_per_day: 0.0,
            },
        }
    }

    /// 식단 라벨을 바꾼 사본을 만든다.
    pub fn with_diet(mut self, diet: impl Into<String>) -> Self {
        self.diet.diet_type = diet.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_form_prefill() {
        let input = EmissionInput::default();
        assert_eq!(input.electricity.grid_kwh_per_month, 150.0);
        assert_eq!(input.cooking.lpg_cylinders_per_year, 12);
        assert_eq!(input.flights.intl_long_per_year, 1);
        assert_eq!(input.diet.diet_type, "Vegetarian");
        assert_eq!(input.waste.ewaste_kg_per_year, 0.5);
    }

    #[test]
    fn partial_profile_fills_missing_fields_with_defaults() {
        let src = r#"
            [transport]
            car_km_per_week = 100.0

            [diet]
            diet_type = "Regular Meat"
        "#;
        let input: EmissionInput = toml::from_str(src).expect("parse profile");
        assert_eq!(input.transport.car_km_per_week, 100.0);
        assert_eq!(input.transport.bus_km_per_week, 10.0);
        assert_eq!(input.diet.diet_type, "Regular Meat");
        assert_eq!(input.diet.dairy_litres_per_week, 2.0);
        assert_eq!(input.electricity, ElectricityInput::default());
    }
}
