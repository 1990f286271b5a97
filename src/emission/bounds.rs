//! 입력 화면이 강제하던 정수 범위. 계산기 자체는 이 범위를 검사하지 않는다.

use std::ops::RangeInclusive;

use super::input::EmissionInput;

pub const LPG_CYLINDERS_PER_YEAR: RangeInclusive<u32> = 0..=24;
pub const DOMESTIC_FLIGHTS_PER_YEAR: RangeInclusive<u32> = 0..=20;
pub const INTL_SHORT_FLIGHTS_PER_YEAR: RangeInclusive<u32> = 0..=10;
pub const INTL_LONG_FLIGHTS_PER_YEAR: RangeInclusive<u32> = 0..=5;

/// 범위를 벗어난 입력 항목.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{field} 값 {value}이(가) 허용 범위 {min}~{max}를 벗어났습니다")]
pub struct BoundViolation {
    pub field: &'static str,
    pub value: u32,
    pub min: u32,
    pub max: u32,
}

fn check(
    field: &'static str,
    value: u32,
    range: &RangeInclusive<u32>,
    out: &mut Vec<BoundViolation>,
) {
    if !range.contains(&value) {
        out.push(BoundViolation {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
}

/// 범위를 벗어난 항목을 모두 돌려준다. 비어 있으면 통과.
pub fn validate_bounds(input: &EmissionInput) -> Vec<BoundViolation> {
    let mut out = Vec::new();
    check(
        "cooking.lpg_cylinders_per_year",
        input.cooking.lpg_cylinders_per_year,
        &LPG_CYLINDERS_PER_YEAR,
        &mut out,
    );
    check(
        "flights.domestic_per_year",
        input.flights.domestic_per_year,
        &DOMESTIC_FLIGHTS_PER_YEAR,
        &mut out,
    );
    check(
        "flights.intl_short_per_year",
        input.flights.intl_short_per_year,
        &INTL_SHORT_FLIGHTS_PER_YEAR,
        &mut out,
    );
    check(
        "flights.intl_long_per_year",
        input.flights.intl_long_per_year,
        &INTL_LONG_FLIGHTS_PER_YEAR,
        &mut out,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_within_bounds() {
        assert!(validate_bounds(&EmissionInput::default()).is_empty());
    }

    #[test]
    fn reports_every_violation() {
        let mut input = EmissionInput::zero();
        input.cooking.lpg_cylinders_per_year = 25;
        input.flights.intl_long_per_year = 6;
        let violations = validate_bounds(&input);
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "cooking.lpg_cylinders_per_year");
        assert_eq!(violations[0].max, 24);
        assert_eq!(violations[1].value, 6);
    }
}
