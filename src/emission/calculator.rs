use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};
use tracing::debug;

use super::factors::{DietType, EmissionFactors, FactorKey};
use super::input::EmissionInput;

const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const DAYS_PER_YEAR: f64 = 365.0;
const KG_PER_TON: f64 = 1000.0;

/// 배출량 계산 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmissionError {
    /// 해석할 수 없는 입력 값
    #[error("잘못된 입력 `{field}`: {value:?}")]
    InvalidInput { field: &'static str, value: String },
}

/// 결과 분류. 선언 순서가 표시 순서다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter)]
pub enum Category {
    Electricity,
    Transport,
    Cooking,
    Flights,
    Diet,
    Digital,
    Waste,
    Appliances,
}

impl Category {
    pub fn all() -> impl Iterator<Item = Category> {
        Category::iter()
    }
}

/// 분류별 연간 배출량 [kg CO2e/년]과 합계.
///
/// 생성 시 합계가 확정되며 이후 바뀌지 않는다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmissionOutput {
    values: [f64; Category::COUNT],
    total: f64,
}

impl EmissionOutput {
    fn from_values(values: [f64; Category::COUNT]) -> Self {
        let total = values.iter().fold(0.0, |acc, v| acc + v);
        Self { values, total }
    }

    pub fn get(&self, category: Category) -> f64 {
        self.values[category as usize]
    }

    /// 여덟 분류의 합 [kg CO2e/년].
    pub fn total(&self) -> f64 {
        self.total
    }

    /// 합계 [t CO2e/년].
    pub fn total_tons(&self) -> f64 {
        self.total / KG_PER_TON
    }

    /// 합계를 제외한 (분류, 값) 목록.
    pub fn categories(&self) -> impl Iterator<Item = (Category, f64)> + '_ {
        Category::iter().map(move |c| (c, self.get(c)))
    }

    /// 분류별 비율[%]. 비율 차트용이며 음수 값은 0으로 본다.
    /// 양수 합이 없으면 모두 0이다.
    pub fn shares(&self) -> Vec<(Category, f64)> {
        let positive_sum: f64 = self.values.iter().map(|v| v.max(0.0)).sum();
        self.categories()
            .map(|(c, v)| {
                let share = if positive_sum > 0.0 {
                    v.max(0.0) / positive_sum * 100.0
                } else {
                    0.0
                };
                (c, share)
            })
            .collect()
    }

    /// 배출량이 가장 큰 분류. 같으면 앞선 분류.
    pub fn largest_category(&self) -> Category {
        self.categories()
            .fold((Category::Electricity, f64::NEG_INFINITY), |best, (c, v)| {
                if v > best.1 {
                    (c, v)
                } else {
                    best
                }
            })
            .0
    }
}

/// 공용 계수 표로 배출량을 계산한다.
pub fn compute(input: &EmissionInput) -> Result<EmissionOutput, EmissionError> {
    compute_with(input, EmissionFactors::shared())
}

/// 지정한 계수 표로 배출량을 계산한다. 순수 함수이며 입력 범위는 검사하지 않는다.
pub fn compute_with(
    input: &EmissionInput,
    factors: &EmissionFactors,
) -> Result<EmissionOutput, EmissionError> {
    use FactorKey::*;
    let f = |key| factors.get(key);

    let diet_type: DietType =
        input
            .diet
            .diet_type
            .parse()
            .map_err(|_| EmissionError::InvalidInput {
                field: "diet.diet_type",
                value: input.diet.diet_type.clone(),
            })?;

    let e = &input.electricity;
    // 태양광 상쇄가 더 커도 순 사용량은 0 미만이 되지 않는다.
    let electricity =
        (e.grid_kwh_per_month - e.solar_kwh_per_month).max(0.0) * MONTHS_PER_YEAR * f(GridElec);

    let t = &input.transport;
    let transport = WEEKS_PER_YEAR
        * (t.car_km_per_week * f(Car)
            + t.two_wheeler_km_per_week * f(Bike)
            + t.cab_km_per_week * f(Cab)
            + t.bus_km_per_week * f(Bus)
            + t.train_km_per_week * f(Train)
            + t.metro_km_per_week * f(Metro));

    let c = &input.cooking;
    let cooking = f64::from(c.lpg_cylinders_per_year) * f(LpgCylinder)
        + c.induction_kwh_per_month * MONTHS_PER_YEAR * f(Induction);

    let fl = &input.flights;
    let flights = f64::from(fl.domestic_per_year) * f(FlightDom)
        + f64::from(fl.intl_short_per_year) * f(FlightIntlShort)
        + f64::from(fl.intl_long_per_year) * f(FlightIntlLong);

    let diet = diet_type.base_emission()
        + input.diet.dairy_litres_per_week * WEEKS_PER_YEAR * f(Dairy);

    let digital = DAYS_PER_YEAR * input.digital.screen_hours_per_day * f(Screen);

    let w = &input.waste;
    let waste = w.plastic_kg_per_month * MONTHS_PER_YEAR * f(Plastic)
        + w.ewaste_kg_per_year * f(Ewaste);

    let a = &input.appliances;
    let appliances =
        DAYS_PER_YEAR * (a.geyser_hours_per_day * f(GeyserHour) + a.ac_hours_per_day * f(AcHour));

    let output = EmissionOutput::from_values([
        electricity,
        transport,
        cooking,
        flights,
        diet,
        digital,
        waste,
        appliances,
    ]);
    debug!(
        total_kg = output.total(),
        diet = %diet_type,
        "emission breakdown computed"
    );
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn zero_input_leaves_only_vegetarian_base() {
        let out = compute(&EmissionInput::zero()).expect("compute");
        for (c, v) in out.categories() {
            let expected = if c == Category::Diet { 1000.0 } else { 0.0 };
            assert_eq!(v, expected, "{c}");
        }
        assert_eq!(out.total(), 1000.0);
        assert_eq!(out.total_tons(), 1.0);
    }

    #[test]
    fn solar_surplus_clamps_electricity_to_zero() {
        let mut input = EmissionInput::zero();
        input.electricity.grid_kwh_per_month = 100.0;
        input.electricity.solar_kwh_per_month = 150.0;
        let out = compute(&input).expect("compute");
        assert_eq!(out.get(Category::Electricity), 0.0);
    }

    #[test]
    fn negative_inputs_outside_electricity_pass_through() {
        let mut input = EmissionInput::zero();
        input.diet.dairy_litres_per_week = -1.0;
        let out = compute(&input).expect("compute");
        assert_relative_eq!(out.get(Category::Diet), 1000.0 - 78.0);
    }

    #[test]
    fn unknown_diet_is_rejected() {
        let input = EmissionInput::zero().with_diet("Vegan");
        assert_eq!(
            compute(&input),
            Err(EmissionError::InvalidInput {
                field: "diet.diet_type",
                value: "Vegan".into(),
            })
        );
    }

    #[test]
    fn shares_ignore_negative_categories() {
        let mut input = EmissionInput::zero();
        input.digital.screen_hours_per_day = -10.0;
        let out = compute(&input).expect("compute");
        let shares = out.shares();
        assert_eq!(shares.len(), 8);
        assert_relative_eq!(shares[Category::Diet as usize].1, 100.0);
        assert_eq!(shares[Category::Digital as usize].1, 0.0);
    }

    #[test]
    fn largest_category_prefers_first_on_tie() {
        let out = EmissionOutput::from_values([5.0, 7.0, 7.0, 0.0, 1.0, 0.0, 0.0, 0.0]);
        assert_eq!(out.largest_category(), Category::Transport);
    }
}
