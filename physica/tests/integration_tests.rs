//! Cross-module scenario tests.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use physica::color::{hsv_to_rgb, rgb_to_hsv, Rgb};
use physica::constants::STANDARD_GRAVITY;
use physica::math::angle::wrap_degrees;
use physica::math::combinatorics::combinations;
use physica::math::frequency::percentile;
use physica::math::roots::safe_nth_root;
use physica::math::statistics::median;
use physica::mechanics::beam::{
    bending_moment_at, shear_force_at, support_reactions, PointLoad, UniformLoad,
};
use physica::mechanics::statics::{
    center_of_mass_1d, is_force_equilibrium_1d, DEFAULT_EQUILIBRIUM_TOLERANCE,
};
use physica::mechanics::{dynamics, kinematics, projectile};
use physica::thermo::units::{celsius_to_kelvin, kelvin_to_celsius};
use physica::thermo::{ideal_gas, state};
use proptest::prelude::*;

// ─────────────────────────────────────────────────────────────────────────────
// Spec scenarios
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn two_point_center_of_mass_matches_the_classic_formula() {
    let (m1, x1, m2, x2) = (4.0, 1.0, 12.0, 9.0);
    let expected = (m1 * x1 + m2 * x2) / (m1 + m2);
    assert_eq!(center_of_mass_1d(&[m1, m2], &[x1, x2]).unwrap(), expected);
    assert_eq!(center_of_mass_1d(&[m2, m1], &[x2, x1]).unwrap(), expected);
}

#[test]
fn empty_and_cancelling_force_systems_are_in_equilibrium() {
    assert!(is_force_equilibrium_1d(&[], DEFAULT_EQUILIBRIUM_TOLERANCE).unwrap());
    assert!(is_force_equilibrium_1d(&[5.0, -5.0], DEFAULT_EQUILIBRIUM_TOLERANCE).unwrap());
}

#[test]
fn beam_reaction_scenarios_from_the_lever_law() {
    let (r_a, r_b) = support_reactions(&[PointLoad::new(2.0, 10.0)], &[], 0.0, 4.0).unwrap();
    assert_eq!((r_a, r_b), (5.0, 5.0));

    let (r_a, r_b) = support_reactions(&[PointLoad::new(1.0, 10.0)], &[], 0.0, 4.0).unwrap();
    assert_eq!((r_a, r_b), (7.5, 2.5));
}

#[test]
fn beam_with_udl_matches_its_reduced_point_load() {
    let udl = UniformLoad::new(1.0, 3.0, 5.0); // 10 N at x = 2
    let (r_a, r_b) = support_reactions(&[], &[udl], 0.0, 4.0).unwrap();
    assert_relative_eq!(r_a, 5.0, max_relative = 1e-12);
    assert_relative_eq!(r_b, 5.0, max_relative = 1e-12);
}

#[test]
fn shear_drops_by_the_load_across_a_point_load() {
    let loads = [PointLoad::new(2.0, 10.0)];
    let left = shear_force_at(2.0, &loads, &[], 0.0, 4.0).unwrap();
    let right = shear_force_at(2.0 + 1e-9, &loads, &[], 0.0, 4.0).unwrap();
    // Left limit holds the sum of reactions left of the cut ...
    assert_abs_diff_eq!(left, 5.0, epsilon = 1e-12);
    // ... and infinitesimally past the load it has dropped by its magnitude.
    assert_abs_diff_eq!(left - right, 10.0, epsilon = 1e-6);
    // The moment is continuous there.
    let m_left = bending_moment_at(2.0, &loads, &[], 0.0, 4.0).unwrap();
    let m_right = bending_moment_at(2.0 + 1e-9, &loads, &[], 0.0, 4.0).unwrap();
    assert_abs_diff_eq!(m_left, m_right, epsilon = 1e-6);
}

#[test]
fn one_mole_at_stp_is_one_atmosphere() {
    let p = ideal_gas::pressure(1.0, 273.15, 0.0224).unwrap();
    assert_relative_eq!(p, 101_325.0, max_relative = 1e-3);
}

#[test]
fn safe_root_contract() {
    assert_eq!(safe_nth_root(-8.0, 3).unwrap(), -2.0);
    assert!(safe_nth_root(-8.0, 2).is_err());
}

#[test]
fn median_order_statistics() {
    assert_eq!(median(&[7.0, 1.0, 5.0, 3.0]).unwrap(), 4.0);
    assert_eq!(median(&[7.0, 1.0, 3.0]).unwrap(), 3.0);
}

#[test]
fn excel_style_percentile() {
    // =PERCENTILE({1;2;3;4}, 0.9) → 3.7
    assert_relative_eq!(
        percentile(&[1.0, 2.0, 3.0, 4.0], 90.0).unwrap(),
        3.7,
        max_relative = 1e-12
    );
}

// ─────────────────────────────────────────────────────────────────────────────
// Cross-module consistency
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn projectile_lands_with_its_launch_speed() {
    // Energy argument: returning to launch height restores the speed.
    let (speed, angle) = (30.0, 0.7);
    let flight = projectile::time_of_flight(speed, angle, STANDARD_GRAVITY).unwrap();
    let v = projectile::velocity_components(speed, angle).unwrap();
    let vy_landing = kinematics::final_velocity(v.y, -STANDARD_GRAVITY, flight);
    let landing_speed = (v.x * v.x + vy_landing * vy_landing).sqrt();
    assert_relative_eq!(landing_speed, speed, max_relative = 1e-9);
}

#[test]
fn work_done_against_friction_matches_the_energy_loss() {
    // A block slides to rest: friction work equals the initial kinetic energy.
    let (mass, speed, mu) = (2.0, 6.0, 0.3);
    let normal = dynamics::weight(mass, STANDARD_GRAVITY).unwrap();
    let friction = dynamics::kinetic_friction(mu, normal).unwrap();
    let deceleration = friction / mass;
    let stop_time = kinematics::time_to_reach_velocity(speed, 0.0, -deceleration).unwrap();
    let distance = kinematics::displacement(speed, -deceleration, stop_time);
    let friction_work = dynamics::work(friction, distance, 0.0);
    let kinetic = dynamics::kinetic_energy(mass, speed).unwrap();
    assert_relative_eq!(friction_work, kinetic, max_relative = 1e-9);
}

#[test]
fn gas_density_agrees_between_state_and_ideal_gas_modules() {
    let (pressure, r_s, temperature, volume) = (101_325.0, 287.05, 293.15, 2.0);
    let mass = ideal_gas::gas_mass(pressure, volume, r_s, temperature).unwrap();
    let rho_state = state::density(mass, volume).unwrap();
    let rho_gas = ideal_gas::density(pressure, r_s, temperature).unwrap();
    assert_relative_eq!(rho_state, rho_gas, max_relative = 1e-12);
}

// ─────────────────────────────────────────────────────────────────────────────
// Property-based spec invariants
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_wrap_degrees_idempotent_in_range(angle in -1e5..1e5f64) {
        let once = wrap_degrees(angle).unwrap();
        prop_assert!((0.0..360.0).contains(&once));
        prop_assert_eq!(wrap_degrees(once).unwrap(), once);
    }

    #[test]
    fn prop_rgb_hsv_rgb_within_one_per_channel(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
        let original = Rgb::new(r, g, b);
        let back = hsv_to_rgb(rgb_to_hsv(original)).unwrap();
        prop_assert!((original.r as i16 - back.r as i16).abs() <= 1);
        prop_assert!((original.g as i16 - back.g as i16).abs() <= 1);
        prop_assert!((original.b as i16 - back.b as i16).abs() <= 1);
    }

    #[test]
    fn prop_celsius_kelvin_roundtrip(kelvin in 0.0..1e4f64) {
        let back = celsius_to_kelvin(kelvin_to_celsius(kelvin).unwrap()).unwrap();
        prop_assert!((back - kelvin).abs() <= 1e-9 * kelvin.max(1.0));
    }

    #[test]
    fn prop_combination_symmetry(n in 0u64..=20, k in 0u64..=20) {
        prop_assume!(k <= n);
        prop_assert_eq!(combinations(n, k).unwrap(), combinations(n, n - k).unwrap());
    }

    #[test]
    fn prop_beam_reactions_carry_the_whole_load(
        position in 0.5..9.5f64,
        force in 0.0..1e3f64,
    ) {
        let (r_a, r_b) = support_reactions(
            &[PointLoad::new(position, force)], &[], 0.0, 10.0,
        ).unwrap();
        prop_assert!((r_a + r_b - force).abs() <= 1e-9 * force.max(1.0));
        // Loads between the supports keep both reactions upward.
        prop_assert!(r_a >= -1e-12 && r_b >= -1e-12);
    }
}
