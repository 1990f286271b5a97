use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// 배출계수 조회 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FactorError {
    /// 표에 없는 키
    #[error("알 수 없는 배출계수 키: {0}")]
    UnknownKey(String),
}

/// 배출계수 표의 키. 문자열 표기는 `grid_elec`, `flight_intl_short` 같은 snake_case이다.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum FactorKey {
    GridElec,
    Car,
    Bike,
    Cab,
    Bus,
    Train,
    Metro,
    LpgCylinder,
    Induction,
    FlightDom,
    FlightIntlShort,
    FlightIntlLong,
    Dairy,
    Screen,
    Plastic,
    Ewaste,
    GeyserHour,
    AcHour,
}

impl FactorKey {
    /// 계수의 분모가 되는 활동 단위.
    pub fn unit(&self) -> &'static str {
        match self {
            FactorKey::GridElec | FactorKey::Induction => "kWh",
            FactorKey::Car
            | FactorKey::Bike
            | FactorKey::Cab
            | FactorKey::Bus
            | FactorKey::Train
            | FactorKey::Metro => "km",
            FactorKey::LpgCylinder => "cylinder",
            FactorKey::FlightDom | FactorKey::FlightIntlShort | FactorKey::FlightIntlLong => {
                "flight"
            }
            FactorKey::Dairy => "litre",
            FactorKey::Screen | FactorKey::GeyserHour | FactorKey::AcHour => "hour",
            FactorKey::Plastic | FactorKey::Ewaste => "kg",
        }
    }

    pub fn as_str(&self) -> &'static str {
        (*self).into()
    }
}

/// 활동량 단위당 kg CO2e 배출계수 표. 생성 후 변경되지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionFactors {
    values: [f64; FactorKey::COUNT],
}

static INDIA: EmissionFactors = EmissionFactors::india();

impl EmissionFactors {
    /// 인도 생활 패턴 기준 계수 표.
    pub const fn india() -> Self {
        let mut values = [0.0; FactorKey::COUNT];
        values[FactorKey::GridElec as usize] = 0.82;
        values[FactorKey::Car as usize] = 0.192;
        values[FactorKey::Bike as usize] = 0.045;
        values[FactorKey::Cab as usize] = 0.2;
        values[FactorKey::Bus as usize] = 0.027;
        values[FactorKey::Train as usize] = 0.015;
        values[FactorKey::Metro as usize] = 0.03;
        values[FactorKey::LpgCylinder as usize] = 32.0;
        values[FactorKey::Induction as usize] = 0.82;
        values[FactorKey::FlightDom as usize] = 150.0;
        values[FactorKey::FlightIntlShort as usize] = 400.0;
        values[FactorKey::FlightIntlLong as usize] = 600.0;
        values[FactorKey::Dairy as usize] = 1.5;
        values[FactorKey::Screen as usize] = 0.05;
        values[FactorKey::Plastic as usize] = 6.0;
        values[FactorKey::Ewaste as usize] = 20.0;
        values[FactorKey::GeyserHour as usize] = 1.5;
        values[FactorKey::AcHour as usize] = 1.6;
        Self { values }
    }

    /// 프로세스 전체가 공유하는 읽기 전용 계수 표.
    pub fn shared() -> &'static EmissionFactors {
        &INDIA
    }

    pub fn get(&self, key: FactorKey) -> f64 {
        self.values[key as usize]
    }

    /// 문자열 키로 계수를 조회한다.
    pub fn lookup(&self, name: &str) -> Result<f64, FactorError> {
        let key: FactorKey = name
            .parse()
            .map_err(|_| FactorError::UnknownKey(name.to_string()))?;
        Ok(self.get(key))
    }

    /// 표 순서대로 (키, 계수)를 돌려준다.
    pub fn iter(&self) -> impl Iterator<Item = (FactorKey, f64)> + '_ {
        FactorKey::iter().map(move |key| (key, self.get(key)))
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self::india()
    }
}

/// 식단 유형. 표시 문자열이 곧 입력 라벨이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum DietType {
    #[strum(serialize = "Vegetarian")]
    Vegetarian,
    #[strum(serialize = "Eggetarian")]
    Eggetarian,
    #[strum(serialize = "Occasional Meat")]
    OccasionalMeat,
    #[strum(serialize = "Regular Meat")]
    RegularMeat,
}

impl DietType {
    /// 유제품을 제외한 식단 기본 배출량 [kg CO2e/년].
    pub fn base_emission(&self) -> f64 {
        match self {
            DietType::Vegetarian => 1000.0,
            DietType::Eggetarian => 1200.0,
            DietType::OccasionalMeat => 1500.0,
            DietType::RegularMeat => 2000.0,
        }
    }

    pub fn all() -> impl Iterator<Item = DietType> {
        DietType::iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_has_positive_factor() {
        let factors = EmissionFactors::india();
        assert_eq!(factors.iter().count(), 18);
        for (key, value) in factors.iter() {
            assert!(value > 0.0, "{key} = {value}");
        }
    }

    #[test]
    fn string_lookup_uses_table_names() {
        let factors = EmissionFactors::shared();
        assert_eq!(factors.lookup("grid_elec"), Ok(0.82));
        assert_eq!(factors.lookup("flight_intl_short"), Ok(400.0));
        assert_eq!(factors.lookup("ac_hour"), Ok(1.6));
        assert_eq!(
            factors.lookup("solar"),
            Err(FactorError::UnknownKey("solar".into()))
        );
    }

    #[test]
    fn diet_labels_parse_exactly() {
        assert_eq!("Occasional Meat".parse::<DietType>(), Ok(DietType::OccasionalMeat));
        assert_eq!(DietType::RegularMeat.to_string(), "Regular Meat");
        assert!("Vegan".parse::<DietType>().is_err());
        assert!("vegetarian".parse::<DietType>().is_err());
    }
}
