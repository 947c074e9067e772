/// Radius of the island cone's base.
pub const ISLAND_RADIUS: f32 = 8.0;

/// Radius within which the robot is allowed to move. Slightly inside the
/// island edge so the avatar never stands on the waterline.
pub const WALKABLE_RADIUS: f32 = 7.0;

/// Feature radius used by the prop placement formula.
pub const PROP_RADIUS: f32 = 4.0;

/// Vertical offset between a palm's group origin and its trunk base.
const PROP_BASE_OFFSET: f32 = 1.5;

/// Height of the walkable island surface at a planar distance from center.
///
/// Linear falloff from 2.0 at the summit to -2.0 at `ISLAND_RADIUS`. The
/// robot controller snaps to this after every accepted move.
pub fn surface_height(distance: f32) -> f32 {
    4.0 * (1.0 - distance / ISLAND_RADIUS) - 2.0
}

/// Placement height for decorative props (palm trees) at a planar distance
/// from center.
///
/// Uses a steeper falloff than the walkable surface and subtracts the prop
/// base offset so the trunk bottom sits on the slope.
pub fn prop_placement_height(distance: f32) -> f32 {
    (2.0 - distance / PROP_RADIUS) - PROP_BASE_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surface_height_exact_coefficients() {
        // 4 * (1 - d/8) - 2, checked across the walkable domain.
        let mut d = 0.0_f32;
        while d < ISLAND_RADIUS {
            let expected = 4.0 * (1.0 - d / 8.0) - 2.0;
            assert_eq!(surface_height(d), expected);
            d += 0.25;
        }
    }

    #[test]
    fn summit_is_two() {
        assert_eq!(surface_height(0.0), 2.0);
    }

    #[test]
    fn surface_reaches_waterline_at_island_edge() {
        assert_eq!(surface_height(ISLAND_RADIUS), -2.0);
    }

    #[test]
    fn surface_slopes_monotonically_down() {
        let mut prev = surface_height(0.0);
        let mut d = 0.5_f32;
        while d <= ISLAND_RADIUS {
            let h = surface_height(d);
            assert!(h < prev);
            prev = h;
            d += 0.5;
        }
    }

    #[test]
    fn prop_placement_at_center() {
        // Cone height 2.0 minus the 1.5 base offset.
        assert_eq!(prop_placement_height(0.0), 0.5);
    }

    #[test]
    fn prop_placement_matches_original_tuning() {
        // The four palm positions used at setup time.
        for (x, z) in [(-3.0_f32, -3.0_f32), (2.0, 2.0), (-1.0, 3.0), (3.0, -2.0)] {
            let d = (x * x + z * z).sqrt();
            assert_eq!(prop_placement_height(d), (2.0 - d / 4.0) - 1.5);
        }
    }
}
