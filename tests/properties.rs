use proptest::prelude::*;

use worth_it::domain::entities::{CulinaryStyle, InstallationType, RobotType, WashingMethod};
use worth_it::domain::evaluation::{calculate_dishwasher_roi, calculate_robot_vacuum_roi};
use worth_it::domain::verdict::NEVER_BREAKS_EVEN;
use worth_it::{
    evaluate, ApplianceInputs, ConstantTable, DishwasherInputs, RegionalProfile,
    RobotVacuumInputs, RoiResult,
};

fn culinary_style() -> impl Strategy<Value = CulinaryStyle> {
    prop_oneof![
        Just(CulinaryStyle::Global),
        Just(CulinaryStyle::Asia),
        Just(CulinaryStyle::Europe),
    ]
}

prop_compose! {
    fn dishwasher_inputs()(
        time_value in 0.0f64..200.0,
        household_size in 0u32..12,
        breakfasts in 0u8..=7,
        lunches in 0u8..=7,
        dinners in 0u8..=7,
        culinary_style in culinary_style(),
        basin in any::<bool>(),
        machine_cost in 0.0f64..3000.0,
        pro in any::<bool>(),
    ) -> DishwasherInputs {
        DishwasherInputs {
            time_value,
            household_size,
            breakfasts,
            lunches,
            dinners,
            culinary_style,
            washing_method: if basin { WashingMethod::Basin } else { WashingMethod::Tap },
            machine_cost,
            installation: if pro { InstallationType::Pro } else { InstallationType::Diy },
        }
    }
}

prop_compose! {
    fn robot_inputs()(
        time_value in 0.0f64..200.0,
        mops in any::<bool>(),
        machine_cost in 0.0f64..2000.0,
        home_size_sq_ft in 0.0f64..6000.0,
        has_pets in any::<bool>(),
        manual_vac_frequency in 0.0f64..14.0,
        manual_vac_minutes in 0.0f64..120.0,
        manual_mop_frequency in 0.0f64..7.0,
        manual_mop_minutes in 0.0f64..90.0,
    ) -> RobotVacuumInputs {
        RobotVacuumInputs {
            time_value,
            robot_type: if mops { RobotType::VacMop } else { RobotType::VacOnly },
            machine_cost,
            home_size_sq_ft,
            has_pets,
            manual_vac_frequency,
            manual_vac_minutes,
            manual_mop_frequency,
            manual_mop_minutes,
        }
    }
}

fn dishwasher(inputs: &DishwasherInputs) -> RoiResult {
    calculate_dishwasher_roi(inputs, &ConstantTable::default(), &RegionalProfile::default())
}

fn robot(inputs: &RobotVacuumInputs) -> RoiResult {
    calculate_robot_vacuum_roi(inputs, &ConstantTable::default(), &RegionalProfile::default())
}

fn check_verdict_consistency(result: &RoiResult) -> Result<(), TestCaseError> {
    prop_assert_eq!(
        result.net_savings_10_year,
        result.ten_year_manual_cost - result.ten_year_machine_cost
    );
    prop_assert_eq!(result.is_worth_it, result.net_savings_10_year > 0.0);
    if result.annual_manual_cost <= result.annual_machine_op_cost {
        prop_assert_eq!(result.break_even_months, NEVER_BREAKS_EVEN);
        prop_assert!(!result.is_worth_it);
    }
    prop_assert!(result.hours_saved_per_year >= 0.0);
    prop_assert!(result.litres_saved_per_year >= 0.0);
    prop_assert!(result.kwh_saved_per_year >= 0.0);
    Ok(())
}

proptest! {
    #[test]
    fn dishwasher_verdict_is_consistent(inputs in dishwasher_inputs()) {
        check_verdict_consistency(&dishwasher(&inputs))?;
    }

    #[test]
    fn robot_verdict_is_consistent(inputs in robot_inputs()) {
        check_verdict_consistency(&robot(&inputs))?;
    }

    #[test]
    fn valuing_time_more_favors_the_dishwasher(
        inputs in dishwasher_inputs(),
        raise in 0.0f64..100.0,
    ) {
        let base = dishwasher(&inputs);
        let richer = dishwasher(&DishwasherInputs {
            time_value: inputs.time_value + raise,
            ..inputs.clone()
        });
        prop_assert!(richer.annual_manual_cost >= base.annual_manual_cost);
        prop_assert!(richer.net_savings_10_year >= base.net_savings_10_year - 1e-9);
    }

    #[test]
    fn robot_restated_usage_matches_manual_labor(inputs in robot_inputs()) {
        let result = robot(&inputs);
        prop_assert_eq!(result.inputs.frequency, result.loads_per_week);
        let restated = result.inputs.duration_minutes * result.inputs.frequency * 52.0 / 60.0;
        prop_assert!((restated - result.annual_manual_labor_hours).abs() < 1e-6);
    }

    #[test]
    fn valuing_time_more_never_lowers_manual_cleaning_cost(
        inputs in robot_inputs(),
        raise in 0.0f64..100.0,
    ) {
        let base = robot(&inputs);
        let richer = robot(&RobotVacuumInputs {
            time_value: inputs.time_value + raise,
            ..inputs.clone()
        });
        prop_assert!(richer.annual_manual_cost >= base.annual_manual_cost);
    }

    #[test]
    fn evaluation_is_deterministic(inputs in dishwasher_inputs()) {
        let inputs = ApplianceInputs::Dishwasher(inputs);
        let table = ConstantTable::default();
        let regional = RegionalProfile::default();
        prop_assert_eq!(
            evaluate(&inputs, &table, &regional),
            evaluate(&inputs, &table, &regional)
        );
    }

    #[test]
    fn hygiene_floor_applies_only_to_kitchens_in_use(inputs in dishwasher_inputs()) {
        let floor = ConstantTable::default().dishwasher.racks.hygiene_floor_loads_per_week;
        let result = dishwasher(&inputs);
        if inputs.total_meals() == 0 {
            prop_assert_eq!(result.loads_per_week, 0.0);
            prop_assert!(!result.is_hygiene_triggered);
        } else {
            prop_assert!(result.loads_per_week >= floor);
            if result.is_hygiene_triggered {
                prop_assert_eq!(result.loads_per_week, floor);
            }
        }
    }

    #[test]
    fn no_meals_means_no_loads_whatever_the_household(household_size in 0u32..1000) {
        let result = dishwasher(&DishwasherInputs {
            household_size,
            breakfasts: 0,
            lunches: 0,
            dinners: 0,
            ..DishwasherInputs::default()
        });
        prop_assert_eq!(result.loads_per_week, 0.0);
        prop_assert_eq!(result.break_even_months, NEVER_BREAKS_EVEN);
    }
}
