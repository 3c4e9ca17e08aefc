//! Per-tick force accumulation and momentum integration
//!
//! Forces are divided by mass to become per-tick accelerations (tick length
//! is 1), then superposed with the current momentum through `Force::combine`.

use crate::core::geometry::heading_between;
use crate::domain::{AreaEffect, Body, Force};

use super::context::WorldContext;

/// Floor for pairwise distances so coincident centres do not blow up
const MIN_ATTRACTION_DISTANCE: f64 = 1e-6;

/// Mutual attraction from bodies at or above the mass threshold (world
/// order), followed by the uniform global gravity.
pub fn gravitational_forces(body: &Body, ctx: &WorldContext) -> Vec<Force> {
    let config = ctx.config;
    let g = config.gravitational_constant;
    let mass = body.mass();
    let mut forces = Vec::new();

    if config.bodies_attract {
        for other in ctx.others(body) {
            let other_mass = other.mass();
            if other_mass < config.gravity_mass_threshold {
                continue;
            }
            let d = body.position().distance(other.position());
            if d < MIN_ATTRACTION_DISTANCE {
                continue;
            }
            forces.push(Force::new(
                g * mass * other_mass / (d * d),
                heading_between(other.position(), body.position()),
            ));
        }
    }

    if let Some(gravity) = config.gravity {
        forces.push(Force::new(gravity.magnitude * g * mass, gravity.direction));
    }

    forces
}

/// Archimedes-style lift from every fluid band the body dips into.
///
/// Scaled by the fluid/body density ratio and the submerged share of the
/// body's vertical extent; always opposes global gravity.
pub fn upthrust_forces(body: &Body, ctx: &WorldContext) -> Vec<Force> {
    let Some(gravity) = ctx.config.gravity else {
        return Vec::new();
    };
    let size = body.size();
    if size <= 0.0 {
        return Vec::new();
    }

    let weight = gravity.magnitude * ctx.config.gravitational_constant * body.mass();
    let top = body.position().y - size;
    let bottom = body.position().y + size;
    let lift_direction = gravity.reversed().direction;

    ctx.fluids
        .iter()
        .filter_map(|band| {
            let submerged = band.overlap(top, bottom) / (2.0 * size);
            (submerged > 0.0).then(|| {
                Force::new(weight * (band.density / body.density()) * submerged, lift_direction)
            })
        })
        .collect()
}

/// Forces contributed by areas containing the body's centre
pub fn area_forces(body: &Body, ctx: &WorldContext) -> Vec<Force> {
    ctx.areas
        .iter()
        .filter(|area| area.contains(body.position()))
        .filter_map(|area| match area.effect {
            AreaEffect::Force(f) => Some(f),
            AreaEffect::Remove => None,
        })
        .collect()
}

/// Density of whatever surrounds the body's centre: a fluid band or the medium
pub fn ambient_density(body: &Body, ctx: &WorldContext) -> f64 {
    let y = body.position().y;
    ctx.fluids
        .iter()
        .find(|band| band.contains_y(y))
        .map_or(ctx.config.medium_density, |band| band.density)
}

/// Drag opposing `provisional`, never larger than it
pub fn drag_force(body: &Body, provisional: Force, density: f64) -> Force {
    let speed = provisional.magnitude.abs();
    let mass = body.mass();
    if density <= 0.0 || speed == 0.0 || mass <= 0.0 {
        return Force::zero();
    }
    let frontal = 2.0 * body.size();
    let magnitude = (0.5 * density * speed * speed * frontal / mass).min(speed);
    Force::new(magnitude, provisional.reversed().direction)
}

/// Momentum for the next tick. Immobile bodies always get zero.
pub fn next_momentum(body: &Body, ctx: &WorldContext) -> Force {
    if body.is_immobile() {
        return Force::zero();
    }
    let mass = body.mass();
    if mass <= 0.0 {
        return body.momentum();
    }
    let per_mass = 1.0 / mass;

    let gravity = Force::combine(&gravitational_forces(body, ctx)).scaled(per_mass);
    let upthrust = Force::combine(&upthrust_forces(body, ctx)).scaled(per_mass);
    let areas = Force::combine(&area_forces(body, ctx)).scaled(per_mass);

    let provisional = Force::combine(&[body.momentum(), gravity, upthrust, areas]);
    let drag = drag_force(body, provisional, ambient_density(body, ctx));

    Force::combine(&[body.momentum(), gravity, upthrust, areas, drag])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{fluid_bands, Area, Fluid, WorldConfig};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn falling_config() -> WorldConfig {
        let mut cfg = WorldConfig::new(100.0, 100.0);
        cfg.gravity = Some(Force::new(0.5, 0.0));
        cfg
    }

    #[test]
    fn global_gravity_becomes_per_tick_acceleration() {
        let cfg = falling_config();
        let ctx = WorldContext::empty(&cfg);
        let body = Body::circle(50.0, 10.0, 2.0, 3.0).unwrap();
        let m = next_momentum(&body, &ctx);
        assert!((m.magnitude - 0.5).abs() < 1e-12);
        assert!(m.direction.abs() < 1e-12);
    }

    #[test]
    fn immobile_body_never_gains_momentum() {
        let mut cfg = falling_config();
        cfg.medium_density = 3.0;
        let ctx = WorldContext::empty(&cfg);
        let body = Body::circle(50.0, 10.0, 2.0, 3.0)
            .unwrap()
            .with_momentum(Force::new(4.0, 1.0))
            .with_immobile(true);
        assert!(next_momentum(&body, &ctx).is_zero());
    }

    #[test]
    fn mutual_gravity_pulls_toward_heavy_body() {
        let mut cfg = WorldConfig::new(100.0, 100.0);
        cfg.bodies_attract = true;
        cfg.gravity_mass_threshold = 10.0;
        let bodies = vec![
            Body::circle(10.0, 50.0, 1.0, 1.0).unwrap(),
            Body::circle(60.0, 50.0, 5.0, 1.0).unwrap(),
        ];
        let ctx = WorldContext::new(&cfg, &bodies, &[], &[]);

        let pulls = gravitational_forces(&bodies[0], &ctx);
        assert_eq!(pulls.len(), 1);
        assert!((pulls[0].direction - FRAC_PI_2).abs() < 1e-12);
        let expected = bodies[0].mass() * bodies[1].mass() / 2500.0;
        assert!((pulls[0].magnitude - expected).abs() < 1e-9);

        // The light body is below the threshold and exerts nothing.
        assert!(gravitational_forces(&bodies[1], &ctx).is_empty());
    }

    #[test]
    fn submerged_light_body_rises() {
        let cfg = falling_config();
        let bands = fluid_bands(&[Fluid::new(5000.0, 4.0).unwrap()], cfg.width, cfg.height);
        let ctx = WorldContext::new(&cfg, &[], &bands, &[]);
        let body = Body::circle(50.0, 80.0, 2.0, 1.0).unwrap();

        let lift = upthrust_forces(&body, &ctx);
        assert_eq!(lift.len(), 1);
        assert!((lift[0].direction - PI).abs() < 1e-12);

        let m = next_momentum(&body, &ctx);
        assert!(m.vector_y() < 0.0, "net motion should be upward, got {m:?}");
    }

    #[test]
    fn drag_never_reverses_motion() {
        let body = Body::circle(0.0, 0.0, 1.0, 0.001).unwrap();
        let provisional = Force::new(10.0, FRAC_PI_2);
        let drag = drag_force(&body, provisional, 1000.0);
        assert!((drag.magnitude - 10.0).abs() < 1e-12);
        let net = Force::combine(&[provisional, drag]);
        assert!(net.magnitude < 1e-9);
    }

    #[test]
    fn medium_density_slows_bodies() {
        let mut cfg = WorldConfig::new(100.0, 100.0);
        cfg.medium_density = 0.01;
        let ctx = WorldContext::empty(&cfg);
        let body = Body::circle(50.0, 50.0, 1.0, 1.0).unwrap().with_momentum(Force::new(5.0, FRAC_PI_2));
        let m = next_momentum(&body, &ctx);
        assert!(m.magnitude < 5.0);
        assert!((m.direction - FRAC_PI_2).abs() < 1e-9);
    }

    #[test]
    fn area_force_applies_only_inside() {
        let cfg = WorldConfig::new(100.0, 100.0);
        let areas = vec![Area::new(0.0, 0.0, 20.0, 20.0, AreaEffect::Force(Force::new(1.0, FRAC_PI_2)))];
        let ctx = WorldContext::new(&cfg, &[], &[], &areas);
        let inside = Body::circle(10.0, 10.0, 1.0, 1.0).unwrap();
        let outside = Body::circle(50.0, 50.0, 1.0, 1.0).unwrap();
        assert!(next_momentum(&inside, &ctx).magnitude > 0.0);
        assert!(next_momentum(&outside, &ctx).is_zero());
    }
}
